use crate::error::DraftError;
use crate::models::draft_state::{DraftRole, DraftState};
use crate::models::hero::HeroRecord;
use crate::opt::*;

pub use self::hero_loader::HeroDataset;
pub use self::scoring::HeroScore;

mod hero_loader;
mod hero_matcher;
pub mod scoring;

/// Snapshot of the draft together with the ranking of the remaining heroes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftStatus {
    pub banned: Vec<String>,
    pub ally_picks: Vec<String>,
    pub enemy_picks: Vec<String>,
    pub ranked: Vec<HeroScore>,
}

/// One draft session over a loaded hero dataset.
pub struct DraftEngine {
    dataset: HeroDataset,
    state: DraftState,
}

impl DraftEngine {
    pub fn new(dataset: HeroDataset) -> Self {
        Self {
            dataset,
            state: DraftState::new(),
        }
    }

    pub fn dataset(&self) -> &HeroDataset {
        &self.dataset
    }

    pub fn state(&self) -> &DraftState {
        &self.state
    }

    pub fn ban(&mut self, hero: &str) -> Result<String, DraftError> {
        self.add(DraftRole::Banned, hero)
    }

    pub fn ally(&mut self, hero: &str) -> Result<String, DraftError> {
        self.add(DraftRole::Ally, hero)
    }

    pub fn enemy(&mut self, hero: &str) -> Result<String, DraftError> {
        self.add(DraftRole::Enemy, hero)
    }

    fn add(&mut self, role: DraftRole, hero: &str) -> Result<String, DraftError> {
        let name = self.resolve(hero)?.to_string();
        if let Some(existing) = self.state.role_of(&name) {
            return Err(DraftError::DuplicatePick {
                hero: name,
                role: existing,
            });
        }

        log_if(&format!("{name} is now {role}"), DbgFlg::Engine);
        self.state.push(role, name.clone());
        Ok(name)
    }

    pub fn reset(&mut self) {
        self.state.clear();
        log_if("Draft state cleared", DbgFlg::Engine);
    }

    pub fn status(&self) -> DraftStatus {
        DraftStatus {
            banned: self.state.banned.clone(),
            ally_picks: self.state.ally_picks.clone(),
            enemy_picks: self.state.enemy_picks.clone(),
            ranked: scoring::rank_heroes(&self.dataset, &self.state),
        }
    }

    pub fn info(&self, hero: &str) -> Result<&HeroRecord, DraftError> {
        let name = self.resolve(hero)?;
        self.dataset
            .get(name)
            .ok_or_else(|| self.unknown_hero(hero))
    }

    fn resolve(&self, hero: &str) -> Result<&str, DraftError> {
        self.dataset
            .resolve_alias(hero)
            .ok_or_else(|| self.unknown_hero(hero))
    }

    fn unknown_hero(&self, hero: &str) -> DraftError {
        DraftError::UnknownHero {
            input: hero.trim().to_string(),
            suggestions: self.dataset.suggest(hero),
        }
    }
}
