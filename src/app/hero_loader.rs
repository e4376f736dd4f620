use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

use crate::error::DataLoadError;
use crate::models::hero::{HeroFile, HeroRecord};
use crate::opt::*;

use super::hero_matcher::normalize;

/// Hero records indexed by canonical name, plus the alias lookup table.
#[derive(Debug, Clone, Default)]
pub struct HeroDataset {
    pub(super) heroes: BTreeMap<String, HeroRecord>,
    pub(super) aliases: HashMap<String, String>,
}

impl HeroDataset {
    pub fn load(path: &Path) -> Result<Self, DataLoadError> {
        let contents = std::fs::read_to_string(path).map_err(|source| DataLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let contents = contents.strip_prefix('\u{feff}').unwrap_or(&contents);

        let hero_file: HeroFile =
            serde_json::from_str(contents).map_err(|source| DataLoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let dataset = Self::from_records(hero_file.heroes)?;
        log_if(
            &format!("Loaded {} heroes from {}", dataset.len(), path.display()),
            DbgFlg::Engine,
        );
        Ok(dataset)
    }

    pub fn from_records(records: Vec<HeroRecord>) -> Result<Self, DataLoadError> {
        let mut dataset = HeroDataset::default();

        for (index, mut record) in records.into_iter().enumerate() {
            record.name = record.name.trim().to_string();
            if record.name.is_empty() {
                return Err(DataLoadError::InvalidRecord {
                    index,
                    reason: "hero name is blank".to_string(),
                });
            }

            let key = normalize(&record.name);
            if dataset.aliases.contains_key(&key) {
                return Err(DataLoadError::DuplicateHero(record.name));
            }
            dataset.aliases.insert(key, record.name.clone());

            record.aliases = record
                .aliases
                .iter()
                .map(|alias| normalize(alias))
                .filter(|alias| !alias.is_empty())
                .collect::<BTreeSet<_>>();
            dataset.heroes.insert(record.name.clone(), record);
        }

        // Aliases go in after every canonical name so an alias can never shadow a hero.
        for record in dataset.heroes.values() {
            for alias in record.aliases.iter() {
                match dataset.aliases.get(alias) {
                    Some(owner) if *owner != record.name => {
                        return Err(DataLoadError::AliasConflict {
                            alias: alias.clone(),
                            first: owner.clone(),
                            second: record.name.clone(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        dataset.aliases.insert(alias.clone(), record.name.clone());
                    }
                }
            }
        }

        dataset.warn_dangling_references();
        Ok(dataset)
    }

    fn warn_dangling_references(&self) {
        for record in self.heroes.values() {
            for reference in record.referenced_heroes() {
                if !self.heroes.contains_key(reference) {
                    log_if(
                        &format!(
                            "warning: [{}] references unknown hero [{}]",
                            record.name, reference
                        ),
                        DbgFlg::Data,
                    );
                }
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&HeroRecord> {
        self.heroes.get(name)
    }

    /// Canonical names in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.heroes.keys()
    }

    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }
}
