use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};

use crate::config::GameConfig;
use crate::core::{Board, Direction};
use crate::records::{MoveLog, ScoreBoard, ScoreRecord};

/// One player working through one level. Keeps the move log as the game goes
/// and enters the score once the first snowman is finished.
pub struct GameSession {
    board: Board,
    player: String,
    level: String,
    config: GameConfig,
    move_log: Rc<RefCell<MoveLog>>,
    scores: ScoreBoard,
    rank: Option<usize>,
    finished: bool,
}

impl GameSession {
    pub fn new(
        mut board: Board,
        player: impl Into<String>,
        level: impl Into<String>,
        config: GameConfig,
    ) -> Self {
        let player = player.into();
        let level = level.into();

        let log_path = config.move_log_path(&player, &level);
        let move_log = MoveLog::create(&log_path).unwrap_or_else(|err| {
            warn!("cannot create move log {}: {}", log_path.display(), err);
            MoveLog::new()
        });
        let move_log = Rc::new(RefCell::new(move_log));
        board.add_observer(Box::new(Rc::clone(&move_log)));

        let scores = ScoreBoard::load_or_default(&config.scores_path, config.max_scores);
        let finished = board.is_won();
        if finished {
            info!("{} is already solved, no moves accepted", level);
        }

        GameSession {
            board,
            player,
            level,
            config,
            move_log,
            scores,
            rank: None,
            finished,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// For registering further observers.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    pub fn is_won(&self) -> bool {
        self.board.is_won()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// Rank the finished game earned, if it made the table.
    pub fn rank(&self) -> Option<usize> {
        self.rank
    }

    pub fn move_log_lines(&self) -> Vec<String> {
        self.move_log.borrow().lines()
    }

    /// Moves are refused once the level is finished.
    pub fn move_monster(&mut self, direction: Direction) -> bool {
        if self.finished {
            return false;
        }
        let moved = self.board.move_monster(direction);
        if moved && self.board.is_won() {
            self.finish();
        }
        moved
    }

    fn finish(&mut self) {
        self.finished = true;
        let moves = self.board.move_count();
        info!("{} won {} in {} moves", self.player, self.level, moves);

        self.rank = self
            .scores
            .add_score(ScoreRecord::new(self.player.clone(), self.level.clone(), moves));
        if self.rank.is_some() {
            if let Err(err) = self.scores.save(&self.config.scores_path) {
                warn!("score not saved: {}", err);
            }
        }
    }
}
