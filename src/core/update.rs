use thiserror::Error;

use crate::core::{Board, Direction, Position, Snowball, SnowballType, Terrain};

/// Why a move was refused. A rejected move never touches the board.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("cannot move out of bounds")]
    OutOfBounds,
    #[error("cell {0} is blocked")]
    Blocked(Position),
    #[error("no snowball at {0}")]
    NoSnowball(Position),
    #[error("a finished snowman cannot be moved")]
    SnowmanImmobile,
    #[error("cannot stack {top:?} on {bottom:?}")]
    CannotStack { top: SnowballType, bottom: SnowballType },
    #[error("{0:?} is not a stack")]
    NotAStack(SnowballType),
    #[error("cell {0} is already occupied")]
    Occupied(Position),
}

/// What happens to a snowball that is pushed one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnowballOutcome {
    /// Rolled onto an empty cell; `kind` already includes any growth.
    Rolled { from: Position, to: Position, kind: SnowballType },
    /// Landed on another ball and merged with it.
    Stacked { from: Position, onto: Position, kind: SnowballType },
    /// The top ball of a stack was pushed off.
    Unstacked(Unstack),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Unstack {
    pub stacked: Snowball,
    pub top: Snowball,
    pub bottom: Snowball,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Walk { from: Position, to: Position },
    Push { from: Position, to: Position, snowball: SnowballOutcome },
    /// The monster pushed a stack apart and stays where it is.
    Unstack(Unstack),
}

impl MoveOutcome {
    pub fn monster_destination(&self) -> Option<Position> {
        match self {
            MoveOutcome::Walk { to, .. } | MoveOutcome::Push { to, .. } => Some(*to),
            MoveOutcome::Unstack(_) => None,
        }
    }
}

pub type MoveResult<T> = Result<T, Rejection>;

pub fn resolve_monster_move(board: &Board, direction: Direction) -> MoveResult<MoveOutcome> {
    let from = board.monster().position;
    let to = walkable_neighbour(board, from, direction)?;

    if board.snowball_at_position(&to).is_none() {
        return Ok(MoveOutcome::Walk { from, to });
    }

    match resolve_snowball_move(board, to, direction)? {
        SnowballOutcome::Unstacked(unstack) => Ok(MoveOutcome::Unstack(unstack)),
        snowball => Ok(MoveOutcome::Push { from, to, snowball }),
    }
}

pub fn resolve_snowball_move(
    board: &Board,
    at: Position,
    direction: Direction,
) -> MoveResult<SnowballOutcome> {
    let ball = *board.snowball_at_position(&at).ok_or(Rejection::NoSnowball(at))?;
    if ball.kind.is_complete() {
        return Err(Rejection::SnowmanImmobile);
    }
    if ball.kind.is_stack() {
        return resolve_unstack(board, at, direction).map(SnowballOutcome::Unstacked);
    }

    let landing = unoccupied_by_monster(board, walkable_neighbour(board, at, direction)?)?;

    if let Some(bottom) = board.snowball_at_position(&landing) {
        let kind = SnowballType::stacked(ball.kind, bottom.kind).ok_or(Rejection::CannotStack {
            top: ball.kind,
            bottom: bottom.kind,
        })?;
        return Ok(SnowballOutcome::Stacked { from: at, onto: landing, kind });
    }

    // Snow is never used up, so the same cell can grow any number of balls.
    let kind = if board.terrain_at_position(&landing) == Some(Terrain::Snow) {
        ball.kind.grown()
    } else {
        ball.kind
    };
    Ok(SnowballOutcome::Rolled { from: at, to: landing, kind })
}

/// Splits the stack at `at`: the top ball moves one step in `direction`,
/// the bottom ball stays.
pub fn resolve_unstack(board: &Board, at: Position, direction: Direction) -> MoveResult<Unstack> {
    let stacked = *board.snowball_at_position(&at).ok_or(Rejection::NoSnowball(at))?;
    let (top, bottom) = stacked.kind.parts().ok_or(Rejection::NotAStack(stacked.kind))?;

    let top_position = unoccupied_by_monster(board, walkable_neighbour(board, at, direction)?)?;
    if board.snowball_at_position(&top_position).is_some() {
        return Err(Rejection::Occupied(top_position));
    }

    Ok(Unstack {
        stacked,
        top: Snowball::new(top_position, top.into()),
        bottom: Snowball::new(at, bottom.into()),
    })
}

fn walkable_neighbour(board: &Board, from: Position, direction: Direction) -> MoveResult<Position> {
    let next = from
        .step(direction)
        .filter(|pos| board.in_bounds(pos))
        .ok_or(Rejection::OutOfBounds)?;
    if board.terrain_at_position(&next) == Some(Terrain::Block) {
        return Err(Rejection::Blocked(next));
    }
    Ok(next)
}

fn unoccupied_by_monster(board: &Board, pos: Position) -> MoveResult<Position> {
    if board.monster().position == pos {
        return Err(Rejection::Occupied(pos));
    }
    Ok(pos)
}
