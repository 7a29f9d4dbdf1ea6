//! Orchestration: the engine plus a repository, with one writer at a time.

use crate::config::EngineConfig;
use crate::logic::{
    compute_podium, compute_standings, compute_summary, create_tournament, report_result_with,
    Registry,
};
use crate::models::{
    Format, PodiumEntry, Sport, Standing, Tournament, TournamentError, TournamentId,
    TournamentSummary,
};
use crate::repository::TournamentRepository;
use rand::Rng;
use std::sync::{Mutex, PoisonError};

pub struct TournamentService<R> {
    repository: R,
    config: EngineConfig,
    /// Held for the whole load, apply, save sequence of a mutation.
    writer: Mutex<()>,
}

impl<R: TournamentRepository> TournamentService<R> {
    pub fn new(repository: R, config: EngineConfig) -> Self {
        Self {
            repository,
            config,
            writer: Mutex::new(()),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Register `names`, generate the schedule and store the new tournament.
    pub fn create<S: AsRef<str>>(
        &self,
        name: &str,
        sport: Sport,
        format: Format,
        names: &[S],
    ) -> Result<Tournament, TournamentError> {
        self.create_with_rng(name, sport, format, names, &mut rand::thread_rng())
    }

    pub fn create_with_rng<S: AsRef<str>, G: Rng + ?Sized>(
        &self,
        name: &str,
        sport: Sport,
        format: Format,
        names: &[S],
        rng: &mut G,
    ) -> Result<Tournament, TournamentError> {
        let registry = Registry::from_names(names)?;
        let tournament = create_tournament(name, sport, format, registry, rng)?;
        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        self.repository.save(&tournament);
        Ok(tournament)
    }

    pub fn get(&self, id: TournamentId) -> Result<Tournament, TournamentError> {
        self.repository
            .load(id)
            .ok_or(TournamentError::TournamentNotFound(id))
    }

    /// Apply one result. Nothing is saved if the report is rejected.
    pub fn report_result(
        &self,
        id: TournamentId,
        match_id: &str,
        score1: i64,
        score2: i64,
    ) -> Result<Tournament, TournamentError> {
        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let current = self.get(id)?;
        let updated = report_result_with(&current, match_id, score1, score2, &self.config)?;
        self.repository.save(&updated);
        Ok(updated)
    }

    pub fn standings(&self, id: TournamentId) -> Result<Vec<Standing>, TournamentError> {
        Ok(compute_standings(&self.get(id)?))
    }

    /// Empty for groups tournaments; use [`standings`](Self::standings) there.
    pub fn podium(&self, id: TournamentId) -> Result<Vec<PodiumEntry>, TournamentError> {
        Ok(compute_podium(&self.get(id)?, self.config.third_place))
    }

    pub fn summary(&self, id: TournamentId) -> Result<TournamentSummary, TournamentError> {
        Ok(compute_summary(&self.get(id)?))
    }

    pub fn delete(&self, id: TournamentId) -> Result<(), TournamentError> {
        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if self.repository.delete(id) {
            Ok(())
        } else {
            Err(TournamentError::TournamentNotFound(id))
        }
    }

    pub fn list(&self) -> Vec<Tournament> {
        self.repository.list()
    }
}
