use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};

use itertools::Itertools;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeroRecord {
    pub name: String,
    #[serde(default)]
    pub aliases: BTreeSet<String>,
    #[serde(default)]
    pub good_against: BTreeSet<String>,
    #[serde(default)]
    pub bad_against: BTreeSet<String>,
    #[serde(default)]
    pub works_well_with: BTreeSet<String>,
}

/// Top-level layout of `hero_data.json`.
#[derive(Debug, Deserialize)]
pub struct HeroFile {
    pub heroes: Vec<HeroRecord>,
}

impl HeroRecord {
    pub fn is_good_against(&self, hero: &str) -> bool {
        self.good_against.contains(hero)
    }

    pub fn is_bad_against(&self, hero: &str) -> bool {
        self.bad_against.contains(hero)
    }

    pub fn works_well_with(&self, hero: &str) -> bool {
        self.works_well_with.contains(hero)
    }

    /// Every hero name this record points at, across all three lists.
    pub fn referenced_heroes(&self) -> impl Iterator<Item = &String> {
        self.good_against
            .iter()
            .chain(self.bad_against.iter())
            .chain(self.works_well_with.iter())
    }
}

impl Display for HeroRecord {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "  {:<16}: {}", "aliases", list_or_none(&self.aliases))?;
        writeln!(f, "  {:<16}: {}", "good against", list_or_none(&self.good_against))?;
        writeln!(f, "  {:<16}: {}", "bad against", list_or_none(&self.bad_against))?;
        write!(f, "  {:<16}: {}", "works well with", list_or_none(&self.works_well_with))
    }
}

fn list_or_none(items: &BTreeSet<String>) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.iter().join(", ")
    }
}
