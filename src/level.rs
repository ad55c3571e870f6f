//! Building boards from map descriptions, and drawing them back as text.
//!
//! Two inputs are understood. The token grid is what map files contain: a
//! rectangular array of short strings where `"S"` is snow, `"B"` is a block,
//! `"M"` is the monster's start, `"SB"` is a small snowball and anything else
//! is bare ground. Level art is one character per cell and is what tests use:
//!
//! ```text
//! '#' block        ' ' no snow       '.' snow
//! '@' monster      '+' monster on snow
//! 's' 'm' 'b'      small, mid, big ball
//! 'S' 'M' 'B'      small, mid, big ball on snow
//! '%' '&' '='      mid+small, big+small, big+mid stacks
//! '*'              finished snowman
//! ```

use std::fs;
use std::path::Path;

use log::debug;

use crate::core::{
    BLOCK_TOKEN, Board, BoundedGrid, MONSTER_TOKEN, Position, SMALL_SNOWBALL_TOKEN, SNOW_TOKEN,
    Snowball, SnowballType, Terrain,
};
use crate::error::LevelError;

/// Collects cells row by row and checks the monster appears exactly once.
#[derive(Default)]
struct LevelBuilder {
    rows: Vec<Vec<Terrain>>,
    monster: Option<Position>,
    snowballs: Vec<Snowball>,
}

impl LevelBuilder {
    fn place_monster(&mut self, position: Position) -> Result<(), LevelError> {
        if self.monster.is_some() {
            return Err(LevelError::DuplicateMonster(position));
        }
        self.monster = Some(position);
        Ok(())
    }

    fn build(self) -> Result<Board, LevelError> {
        if self.rows.is_empty() || self.rows[0].is_empty() {
            return Err(LevelError::Empty);
        }
        let monster = self.monster.ok_or(LevelError::MissingMonster)?;
        debug!(
            "built {}x{} level with {} snowballs",
            self.rows.len(),
            self.rows[0].len(),
            self.snowballs.len()
        );
        Board::new(BoundedGrid::from_rows(self.rows), monster, self.snowballs)
    }
}

/// Parses level art. Blank lines are skipped and short rows are padded
/// with bare ground.
pub fn parse_level(s: &str) -> Result<Board, LevelError> {
    let mut level = LevelBuilder::default();
    let max_width = s.lines().map(|line| line.chars().count()).max().unwrap_or(0);

    for line in s.lines() {
        if line.is_empty() {
            continue;
        }

        let i = level.rows.len();
        let mut row = Vec::with_capacity(max_width);
        for (j, ch) in line.chars().enumerate() {
            let position = Position::new(i, j);
            let ball = |kind| Snowball::new(position, kind);
            let terrain = match ch {
                '#' => Terrain::Block,
                ' ' => Terrain::NoSnow,
                '.' => Terrain::Snow,
                '@' => {
                    level.place_monster(position)?;
                    Terrain::NoSnow
                }
                '+' => {
                    level.place_monster(position)?;
                    Terrain::Snow
                }
                's' | 'm' | 'b' | 'S' | 'M' | 'B' => {
                    let kind = match ch.to_ascii_lowercase() {
                        's' => SnowballType::Small,
                        'm' => SnowballType::Mid,
                        _ => SnowballType::Big,
                    };
                    level.snowballs.push(ball(kind));
                    if ch.is_ascii_uppercase() { Terrain::Snow } else { Terrain::NoSnow }
                }
                '%' | '&' | '=' => {
                    let kind = match ch {
                        '%' => SnowballType::MidSmall,
                        '&' => SnowballType::BigSmall,
                        _ => SnowballType::BigMid,
                    };
                    level.snowballs.push(ball(kind));
                    Terrain::NoSnow
                }
                '*' => {
                    level.snowballs.push(ball(SnowballType::Complete));
                    Terrain::Snowman
                }
                _ => return Err(LevelError::UnknownCharacter { ch, position }),
            };
            row.push(terrain);
        }
        row.resize(max_width, Terrain::NoSnow);
        level.rows.push(row);
    }

    level.build()
}

/// Parses a token grid. Rows must all be the same length.
pub fn parse_tokens<S: AsRef<str>>(tokens: &[Vec<S>]) -> Result<Board, LevelError> {
    let mut level = LevelBuilder::default();
    let width = tokens.first().map_or(0, |row| row.len());

    for (i, token_row) in tokens.iter().enumerate() {
        if token_row.len() != width {
            return Err(LevelError::Ragged { row: i, expected: width, found: token_row.len() });
        }

        let mut row = Vec::with_capacity(width);
        for (j, token) in token_row.iter().enumerate() {
            let position = Position::new(i, j);
            let terrain = match token.as_ref().trim() {
                SNOW_TOKEN => Terrain::Snow,
                BLOCK_TOKEN => Terrain::Block,
                MONSTER_TOKEN => {
                    level.place_monster(position)?;
                    Terrain::NoSnow
                }
                SMALL_SNOWBALL_TOKEN => {
                    level.snowballs.push(Snowball::new(position, SnowballType::Small));
                    Terrain::NoSnow
                }
                _ => Terrain::NoSnow,
            };
            row.push(terrain);
        }
        level.rows.push(row);
    }

    level.build()
}

/// Parses a token grid stored as a JSON array of arrays of strings.
pub fn parse_json(json: &str) -> Result<Board, LevelError> {
    let tokens: Vec<Vec<String>> = serde_json::from_str(json)?;
    parse_tokens(&tokens)
}

pub fn load_level(path: impl AsRef<Path>) -> Result<Board, LevelError> {
    let json = fs::read_to_string(path)?;
    parse_json(&json)
}

/// Draws the board as level art. Stacks and snowmen hide the terrain under
/// them, so this is only the inverse of [`parse_level`] for art that does
/// not put stacks on snow.
pub fn render_board_to_string(board: &Board) -> String {
    let mut result = String::new();
    for i in 0..board.rows() {
        for j in 0..board.cols() {
            let position = Position::new(i, j);
            let terrain = board.terrain_at_position(&position).unwrap_or(Terrain::NoSnow);
            let on_snow = terrain == Terrain::Snow;
            let ch = if board.monster().position == position {
                if on_snow { '+' } else { '@' }
            } else if let Some(ball) = board.snowball_at_position(&position) {
                let ch = match ball.kind {
                    SnowballType::Small => 's',
                    SnowballType::Mid => 'm',
                    SnowballType::Big => 'b',
                    SnowballType::MidSmall => '%',
                    SnowballType::BigSmall => '&',
                    SnowballType::BigMid => '=',
                    SnowballType::Complete => '*',
                };
                if on_snow { ch.to_ascii_uppercase() } else { ch }
            } else {
                match terrain {
                    Terrain::Block => '#',
                    Terrain::NoSnow | Terrain::Snowman => ' ',
                    Terrain::Snow => '.',
                }
            };
            result.push(ch);
        }
        result.push('\n');
    }
    result
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::Terrain::*;

    #[test]
    fn tokens_build_terrain_and_entities() {
        let tokens = vec![vec!["S", "B", "x"], vec!["M", "SB", ""]];
        let board = parse_tokens(&tokens).unwrap();

        assert_eq!(board.terrain_at(0, 0), Some(Snow));
        assert_eq!(board.terrain_at(0, 1), Some(Block));
        assert_eq!(board.terrain_at(0, 2), Some(NoSnow));
        assert_eq!(board.terrain_at(1, 2), Some(NoSnow));
        assert_eq!(board.monster().position, Position::new(1, 0));
        assert_eq!(board.snowball_at(1, 1).map(|b| b.kind), Some(SnowballType::Small));
        assert_eq!(board.snowballs().len(), 1);
    }

    #[test]
    fn json_tokens_parse() {
        let board = parse_json(r#"[["M", "SB", "S"]]"#).unwrap();
        assert_eq!(board.rows(), 1);
        assert_eq!(board.cols(), 3);
        assert_eq!(board.terrain_at(0, 2), Some(Snow));
    }

    #[test]
    fn ragged_tokens_are_rejected() {
        let tokens = vec![vec!["M", "S"], vec!["S"]];
        assert!(matches!(
            parse_tokens(&tokens),
            Err(LevelError::Ragged { row: 1, expected: 2, found: 1 })
        ));
    }

    #[test]
    fn monster_must_appear_once() {
        assert!(matches!(parse_tokens(&[vec!["S", "SB"]]), Err(LevelError::MissingMonster)));
        assert!(matches!(parse_level("@ @"), Err(LevelError::DuplicateMonster(_))));
        assert!(matches!(parse_level(""), Err(LevelError::Empty)));
    }

    #[test]
    fn snowman_terrain_and_complete_ball_go_together() {
        let loose = Board::new(
            BoundedGrid::from_rows(vec![vec![NoSnow, NoSnow]]),
            Position::new(0, 0),
            vec![Snowball::new(Position::new(0, 1), SnowballType::Complete)],
        );
        assert!(matches!(loose, Err(LevelError::SnowmanMismatch(pos)) if pos == Position::new(0, 1)));

        let empty = Board::new(
            BoundedGrid::from_rows(vec![vec![NoSnow, Snowman]]),
            Position::new(0, 0),
            Vec::new(),
        );
        assert!(matches!(empty, Err(LevelError::SnowmanMismatch(pos)) if pos == Position::new(0, 1)));

        let stack_on_snowman = Board::new(
            BoundedGrid::from_rows(vec![vec![NoSnow, Snowman]]),
            Position::new(0, 0),
            vec![Snowball::new(Position::new(0, 1), SnowballType::BigMid)],
        );
        assert!(matches!(stack_on_snowman, Err(LevelError::SnowmanMismatch(_))));

        assert!(parse_level("@*").is_ok());
    }

    #[test]
    fn unknown_art_is_rejected() {
        assert!(matches!(
            parse_level("@ ?"),
            Err(LevelError::UnknownCharacter { ch: '?', .. })
        ));
    }

    #[test]
    fn art_renders_back_unchanged() {
        let art = "#@ .s#\n#M%*=#\n";
        let board = parse_level(art).unwrap();
        assert_eq!(render_board_to_string(&board), art);
        assert_eq!(board.terrain_at(1, 3), Some(Snowman));
        assert_eq!(board.terrain_at(1, 1), Some(Snow));
    }

    #[test]
    fn short_rows_are_padded() {
        let board = parse_level("@ s\n#\n").unwrap();
        assert_eq!(board.cols(), 3);
        assert_eq!(board.terrain_at(1, 2), Some(NoSnow));
    }
}
