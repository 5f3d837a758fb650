//! Change notification for the game engine
//!
//! Observers are called synchronously, in registration order, after every
//! guess call. They only see an immutable snapshot, so they cannot re-enter
//! the engine.

use super::{GameSnapshot, GuessOutcome};
use std::fmt;

/// What an observer receives after a guess call
#[derive(Debug, Clone, Copy)]
pub struct GameEvent<'a> {
    pub outcome: GuessOutcome,
    /// State after the call (status already committed)
    pub snapshot: &'a GameSnapshot,
}

/// A listener registered on a [`Game`](super::Game)
///
/// Implemented for any `FnMut(&GameEvent)` closure.
pub trait Observer {
    fn on_event(&mut self, event: &GameEvent<'_>);
}

impl<F> Observer for F
where
    F: FnMut(&GameEvent<'_>),
{
    fn on_event(&mut self, event: &GameEvent<'_>) {
        self(event);
    }
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Registered observers in registration order
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<dyn Observer>)>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self, observer: Box<dyn Observer>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&mut self, event: &GameEvent<'_>) {
        for (_, observer) in &mut self.entries {
            observer.on_event(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}
