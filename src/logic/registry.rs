//! Registration: collect and validate teams before the schedule is generated.

use crate::models::{Team, TeamId, TournamentError, RESERVED_NAMES};

/// Ordered, de-duplicated list of teams for a tournament being configured.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    teams: Vec<Team>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every name in order, stopping at the first invalid one.
    pub fn from_names<I, S>(names: I) -> Result<Self, TournamentError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self::new();
        for name in names {
            registry.add_participant(name.as_ref())?;
        }
        Ok(registry)
    }

    /// Add a team. Names are trimmed and must be unique (case-insensitive).
    pub fn add_participant(&mut self, name: &str) -> Result<&Team, TournamentError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyName);
        }
        if RESERVED_NAMES.iter().any(|r| r.eq_ignore_ascii_case(name)) {
            return Err(TournamentError::ReservedName(name.to_string()));
        }
        if self.teams.iter().any(|t| t.has_name(name)) {
            return Err(TournamentError::DuplicateName(name.to_string()));
        }
        let team = Team::new(name, &mut rand::thread_rng());
        log::debug!("Registered team {} ({})", team.name, team.id);
        let index = self.teams.len();
        self.teams.push(team);
        Ok(&self.teams[index])
    }

    /// Remove a team by id. Removing an unknown id does nothing.
    pub fn remove_participant(&mut self, id: TeamId) {
        self.teams.retain(|t| t.id != id);
    }

    /// At least 2 teams are needed to generate a schedule.
    pub fn can_finalize(&self) -> bool {
        self.teams.len() >= 2
    }

    /// For a bracket: how many teams are missing to reach the next power of two.
    /// None when the count already is one (or there are no teams).
    pub fn bracket_size_advice(&self) -> Option<usize> {
        let n = self.teams.len();
        if n == 0 {
            return None;
        }
        let target = n.next_power_of_two();
        (target != n).then_some(target - n)
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn into_teams(self) -> Vec<Team> {
        self.teams
    }
}
