use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::core::{Position, Snowball, SnowballType};

/// The smallest pieces of information a presentation layer needs to redraw
/// after an accepted action. One action produces one batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardEvent {
    MonsterCleared(Position),
    MonsterMoved(Position),
    SnowballMoved { snowball: Snowball, from: Position },
    SnowballStacked { from: Position, position: Position, kind: SnowballType },
    SnowballUnstacked { top: Snowball, bottom: Snowball },
    SnowmanCreated { from: Position, position: Position },
}

/// Receives every batch of events, synchronously and in registration order,
/// after the board has finished mutating.
pub trait BoardObserver {
    fn on_events(&mut self, events: &[BoardEvent]);
}

/// Lets the caller keep a handle on an observer after handing it to a board.
impl<T: BoardObserver> BoardObserver for Rc<RefCell<T>> {
    fn on_events(&mut self, events: &[BoardEvent]) {
        self.borrow_mut().on_events(events);
    }
}

/// Keeps every batch it has seen.
#[derive(Default, Debug, Clone)]
pub struct EventHistory {
    pub batches: Vec<Vec<BoardEvent>>,
}

impl EventHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&[BoardEvent]> {
        self.batches.last().map(|batch| batch.as_slice())
    }
}

impl BoardObserver for EventHistory {
    fn on_events(&mut self, events: &[BoardEvent]) {
        self.batches.push(events.to_vec());
    }
}
