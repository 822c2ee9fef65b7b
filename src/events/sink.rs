//! Narration sinks.
//!
//! A sink observes events and returns nothing. It cannot fail the engine
//! and must not block it.

use serde::Serialize;

use super::event::MatchEvent;
use crate::core::Role;
use crate::lineup::Position;

/// Receives narration events in emission order.
pub trait NarrationSink {
    fn emit(&mut self, event: MatchEvent);
}

impl<S: NarrationSink + ?Sized> NarrationSink for &mut S {
    fn emit(&mut self, event: MatchEvent) {
        (**self).emit(event);
    }
}

impl NarrationSink for Vec<MatchEvent> {
    fn emit(&mut self, event: MatchEvent) {
        self.push(event);
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl NarrationSink for NullSink {
    fn emit(&mut self, _event: MatchEvent) {}
}

/// One row of the battle summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BattleRecord {
    pub battle: usize,
    pub position: Position,
    pub winner: Option<Role>,
}

/// The match log: every event in chronological order.
#[derive(Clone, Debug, Default, Serialize)]
pub struct EventLog {
    entries: Vec<MatchEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[MatchEvent] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Events matching a predicate.
    pub fn filter<'a>(
        &'a self,
        predicate: impl Fn(&MatchEvent) -> bool + 'a,
    ) -> impl Iterator<Item = &'a MatchEvent> + 'a {
        self.entries.iter().filter(move |e| predicate(e))
    }

    /// Events of one kind, by `MatchEvent::kind`.
    pub fn of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a MatchEvent> + 'a {
        self.filter(move |e| e.kind() == kind)
    }

    /// Result of every resolved battle, in order.
    #[must_use]
    pub fn battle_results(&self) -> Vec<BattleRecord> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                MatchEvent::BattleResolved {
                    battle,
                    position,
                    winner,
                    ..
                } => Some(BattleRecord {
                    battle: *battle,
                    position: *position,
                    winner: *winner,
                }),
                _ => None,
            })
            .collect()
    }

    /// The last `count` entries, oldest first.
    #[must_use]
    pub fn recent(&self, count: usize) -> &[MatchEvent] {
        let start = self.entries.len().saturating_sub(count);
        &self.entries[start..]
    }

    /// The whole log as a JSON array.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.entries)
    }
}

impl NarrationSink for EventLog {
    fn emit(&mut self, event: MatchEvent) {
        self.entries.push(event);
    }
}
