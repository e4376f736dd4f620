use itertools::Itertools;

use super::hero_loader::HeroDataset;

const SUGGESTION_THRESHOLD: f64 = 0.8;
const MAX_SUGGESTIONS: usize = 3;

pub(super) fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

impl HeroDataset {
    /// Maps free text to a canonical hero name. Accepts any alias or the
    /// canonical name itself, ignoring case.
    pub fn resolve_alias(&self, text: &str) -> Option<&str> {
        self.aliases.get(&normalize(text)).map(|name| name.as_str())
    }

    /// Canonical names whose name or alias is close to `text`, best match first.
    pub fn suggest(&self, text: &str) -> Vec<String> {
        let needle = normalize(text);
        if needle.is_empty() {
            return Vec::new();
        }

        self.aliases
            .iter()
            .map(|(alias, name)| (strsim::jaro_winkler(&needle, alias), name))
            .filter(|(similarity, _)| *similarity > SUGGESTION_THRESHOLD)
            .sorted_by(|(a_sim, a_name), (b_sim, b_name)| {
                b_sim.total_cmp(a_sim).then_with(|| a_name.cmp(b_name))
            })
            .map(|(_, name)| name.clone())
            .unique()
            .take(MAX_SUGGESTIONS)
            .collect()
    }
}
