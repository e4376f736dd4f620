#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum DraftRole {
    #[strum(serialize = "banned")]
    Banned,
    #[strum(serialize = "an ally pick")]
    Ally,
    #[strum(serialize = "an enemy pick")]
    Enemy,
}

/// Bans and picks of the current draft, in the order they were made.
///
/// A hero appears in at most one of the three lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftState {
    pub banned: Vec<String>,
    pub ally_picks: Vec<String>,
    pub enemy_picks: Vec<String>,
}

impl DraftState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role_of(&self, hero: &str) -> Option<DraftRole> {
        [DraftRole::Banned, DraftRole::Ally, DraftRole::Enemy]
            .into_iter()
            .find(|role| self.heroes(*role).iter().any(|h| h == hero))
    }

    pub fn is_taken(&self, hero: &str) -> bool {
        self.role_of(hero).is_some()
    }

    pub fn heroes(&self, role: DraftRole) -> &[String] {
        match role {
            DraftRole::Banned => &self.banned,
            DraftRole::Ally => &self.ally_picks,
            DraftRole::Enemy => &self.enemy_picks,
        }
    }

    /// Callers must check `role_of` first; pushing a taken hero breaks disjointness.
    pub(crate) fn push(&mut self, role: DraftRole, hero: String) {
        match role {
            DraftRole::Banned => self.banned.push(hero),
            DraftRole::Ally => self.ally_picks.push(hero),
            DraftRole::Enemy => self.enemy_picks.push(hero),
        }
    }

    pub fn clear(&mut self) {
        self.banned.clear();
        self.ally_picks.clear();
        self.enemy_picks.clear();
    }
}
