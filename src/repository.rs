//! Storage seam: where tournaments live between requests.

use crate::models::{Tournament, TournamentId};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use std::time::{Duration, Instant};

/// Load and save whole tournaments. Implementations store the value verbatim.
pub trait TournamentRepository {
    fn load(&self, id: TournamentId) -> Option<Tournament>;
    fn save(&self, tournament: &Tournament);
    /// Returns true if something was removed.
    fn delete(&self, id: TournamentId) -> bool;
    fn list(&self) -> Vec<Tournament>;
}

/// Per-tournament entry: tournament data + last activity time (for cleanup).
struct Entry {
    tournament: Tournament,
    last_activity: Instant,
}

/// In-memory repository. Loading or saving a tournament refreshes its activity time.
#[derive(Default)]
pub struct InMemoryRepository {
    entries: RwLock<HashMap<TournamentId, Entry>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove tournaments not touched for `timeout`. Returns how many were removed.
    pub fn purge_inactive(&self, timeout: Duration) -> usize {
        let mut g = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let before = g.len();
        g.retain(|_, entry| entry.last_activity.elapsed() < timeout);
        let removed = before - g.len();
        if removed > 0 {
            log::info!("Cleaned up {} inactive tournament(s)", removed);
        }
        removed
    }
}

impl TournamentRepository for InMemoryRepository {
    /// Takes the write lock: a load counts as activity and refreshes `last_activity`,
    /// so concurrent loads are serialized.
    fn load(&self, id: TournamentId) -> Option<Tournament> {
        let mut g = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        g.get_mut(&id).map(|entry| {
            entry.last_activity = Instant::now();
            entry.tournament.clone()
        })
    }

    fn save(&self, tournament: &Tournament) {
        let mut g = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        g.insert(
            tournament.id,
            Entry {
                tournament: tournament.clone(),
                last_activity: Instant::now(),
            },
        );
    }

    fn delete(&self, id: TournamentId) -> bool {
        let mut g = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        g.remove(&id).is_some()
    }

    /// Oldest first.
    fn list(&self) -> Vec<Tournament> {
        let g = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let mut all: Vec<Tournament> = g.values().map(|e| e.tournament.clone()).collect();
        all.sort_by_key(|t| t.created_at);
        all
    }
}
