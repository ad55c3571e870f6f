use std::fmt;

use log::{debug, info, trace};

use crate::core::BoundedGrid;
use crate::core::update::{
    MoveOutcome, MoveResult, SnowballOutcome, Unstack, resolve_monster_move,
    resolve_snowball_move, resolve_unstack,
};
use crate::core::{
    BoardEvent, BoardObserver, Direction, MobileElement, Monster, Position, Snowball, Terrain,
};
use crate::error::LevelError;

/// Owns the terrain, the monster and the snowballs, and is the only thing
/// that mutates them. Every action either applies in full or not at all.
pub struct Board {
    terrain: BoundedGrid<Terrain>,
    monster: Monster,
    snowballs: Vec<Snowball>,
    move_count: usize,
    observers: Vec<Box<dyn BoardObserver>>,
}

impl Board {
    pub fn new(
        terrain: BoundedGrid<Terrain>,
        monster: Position,
        snowballs: Vec<Snowball>,
    ) -> Result<Board, LevelError> {
        let occupiable = |pos: &Position| match terrain.get(pos) {
            None => Err(LevelError::OutOfBounds(*pos)),
            Some(Terrain::Block) => Err(LevelError::OnBlock(*pos)),
            Some(_) => Ok(()),
        };

        occupiable(&monster)?;
        for (i, ball) in snowballs.iter().enumerate() {
            occupiable(&ball.position)?;
            if ball.position == monster || snowballs[..i].iter().any(|b| b.position == ball.position) {
                return Err(LevelError::Overlap(ball.position));
            }
            if ball.kind.is_complete() != (terrain[&ball.position] == Terrain::Snowman) {
                return Err(LevelError::SnowmanMismatch(ball.position));
            }
        }
        // every snowman cell carries its completed stack
        if let Some(empty) = terrain.iter_positions().find(|pos| {
            terrain[pos] == Terrain::Snowman && !snowballs.iter().any(|b| b.position == *pos)
        }) {
            return Err(LevelError::SnowmanMismatch(empty));
        }

        Ok(Board {
            terrain,
            monster: Monster::new(monster),
            snowballs,
            move_count: 0,
            observers: Vec::new(),
        })
    }

    pub fn add_observer(&mut self, observer: Box<dyn BoardObserver>) {
        self.observers.push(observer);
    }

    pub fn rows(&self) -> usize {
        self.terrain.size().rows
    }

    pub fn cols(&self) -> usize {
        self.terrain.size().cols
    }

    pub fn monster(&self) -> &Monster {
        &self.monster
    }

    pub fn snowballs(&self) -> &[Snowball] {
        &self.snowballs
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn in_bounds(&self, pos: &Position) -> bool {
        self.terrain.contains(pos)
    }

    pub fn terrain_at(&self, row: usize, col: usize) -> Option<Terrain> {
        self.terrain_at_position(&Position::new(row, col))
    }

    pub fn terrain_at_position(&self, pos: &Position) -> Option<Terrain> {
        self.terrain.get(pos).copied()
    }

    /// In bounds and not a block.
    pub fn valid_position(&self, row: usize, col: usize) -> bool {
        self.terrain_at(row, col).is_some_and(Terrain::is_walkable)
    }

    pub fn snowball_at(&self, row: usize, col: usize) -> Option<&Snowball> {
        self.snowball_at_position(&Position::new(row, col))
    }

    pub fn snowball_at_position(&self, pos: &Position) -> Option<&Snowball> {
        self.snowballs.iter().find(|ball| ball.position == *pos)
    }

    /// Cells holding a finished snowman.
    pub fn snowmen(&self) -> Vec<Position> {
        self.snowballs
            .iter()
            .filter(|ball| ball.kind.is_complete())
            .map(|ball| ball.position)
            .collect()
    }

    pub fn is_won(&self) -> bool {
        self.snowballs.iter().any(|ball| ball.kind.is_complete())
    }

    /// Moves the monster one step, pushing whatever snowball is in the way.
    /// Returns whether the move was accepted.
    pub fn move_monster(&mut self, direction: Direction) -> bool {
        self.try_move_monster(direction).is_ok()
    }

    pub fn try_move_monster(&mut self, direction: Direction) -> MoveResult<MoveOutcome> {
        let outcome = resolve_monster_move(self, direction).inspect_err(|rejection| {
            debug!("monster move {:?} from {} rejected: {}", direction, self.monster.position, rejection);
        })?;

        let mut events = Vec::new();
        match outcome {
            MoveOutcome::Walk { from, to } => {
                self.relocate_monster(from, to, &mut events);
            }
            MoveOutcome::Push { from, to, snowball } => {
                self.apply_snowball(snowball, &mut events);
                self.relocate_monster(from, to, &mut events);
            }
            MoveOutcome::Unstack(unstack) => {
                self.apply_unstack(unstack, &mut events);
            }
        }
        self.move_count += 1;
        trace!("move {}: {:?} -> {:?}", self.move_count, direction, outcome);

        self.notify(&events);
        Ok(outcome)
    }

    /// Splits the stack at `(row, col)`, sending its top ball one step in
    /// `direction`. When to do this is up to the caller.
    pub fn unstack(&mut self, row: usize, col: usize, direction: Direction) -> bool {
        let at = Position::new(row, col);
        match resolve_unstack(self, at, direction) {
            Ok(unstack) => {
                let mut events = Vec::new();
                self.apply_unstack(unstack, &mut events);
                self.notify(&events);
                true
            }
            Err(rejection) => {
                debug!("unstack at {} {:?} rejected: {}", at, direction, rejection);
                false
            }
        }
    }

    /// Moves a single element one step. Snowballs moved this way do not
    /// count as monster moves.
    pub fn move_element(&mut self, element: MobileElement, direction: Direction) -> bool {
        match element {
            MobileElement::Monster => self.move_monster(direction),
            MobileElement::Snowball(at) => match resolve_snowball_move(self, at, direction) {
                Ok(outcome) => {
                    let mut events = Vec::new();
                    self.apply_snowball(outcome, &mut events);
                    self.notify(&events);
                    true
                }
                Err(rejection) => {
                    debug!("snowball move at {} {:?} rejected: {}", at, direction, rejection);
                    false
                }
            },
        }
    }

    fn relocate_monster(&mut self, from: Position, to: Position, events: &mut Vec<BoardEvent>) {
        self.monster.position = to;
        events.push(BoardEvent::MonsterCleared(from));
        events.push(BoardEvent::MonsterMoved(to));
    }

    fn apply_snowball(&mut self, outcome: SnowballOutcome, events: &mut Vec<BoardEvent>) {
        match outcome {
            SnowballOutcome::Rolled { from, to, kind } => {
                self.remove_snowball(&from);
                let snowball = Snowball::new(to, kind);
                self.snowballs.push(snowball);
                events.push(BoardEvent::SnowballMoved { snowball, from });
            }
            SnowballOutcome::Stacked { from, onto, kind } => {
                self.remove_snowball(&from);
                self.remove_snowball(&onto);
                self.snowballs.push(Snowball::new(onto, kind));
                if kind.is_complete() {
                    self.terrain[&onto] = Terrain::Snowman;
                    info!("snowman completed at {}", onto);
                    events.push(BoardEvent::SnowmanCreated { from, position: onto });
                } else {
                    events.push(BoardEvent::SnowballStacked { from, position: onto, kind });
                }
            }
            SnowballOutcome::Unstacked(unstack) => self.apply_unstack(unstack, events),
        }
    }

    fn apply_unstack(&mut self, unstack: Unstack, events: &mut Vec<BoardEvent>) {
        self.remove_snowball(&unstack.stacked.position);
        self.snowballs.push(unstack.bottom);
        self.snowballs.push(unstack.top);
        events.push(BoardEvent::SnowballUnstacked {
            top: unstack.top,
            bottom: unstack.bottom,
        });
    }

    fn remove_snowball(&mut self, pos: &Position) {
        self.snowballs.retain(|ball| ball.position != *pos);
    }

    fn notify(&mut self, events: &[BoardEvent]) {
        for observer in self.observers.iter_mut() {
            observer.on_events(events);
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("rows", &self.rows())
            .field("cols", &self.cols())
            .field("monster", &self.monster)
            .field("snowballs", &self.snowballs)
            .field("move_count", &self.move_count)
            .field("observers", &self.observers.len())
            .finish()
    }
}
