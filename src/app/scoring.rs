use std::cmp::Ordering;

use itertools::Itertools;

use crate::models::draft_state::DraftState;
use crate::models::hero::HeroRecord;

use super::hero_loader::HeroDataset;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroScore {
    pub name: String,
    pub score: i32,
}

/// Affinity of `hero` to the current draft. Positive means it counters the
/// enemy picks or fits the ally picks. Each relationship direction counts on
/// its own, so a pair described from both sides contributes twice.
pub fn score_hero(dataset: &HeroDataset, state: &DraftState, hero: &HeroRecord) -> i32 {
    let enemy_score: i32 = state
        .enemy_picks
        .iter()
        .map(|enemy| {
            let mut score = 0;
            if hero.is_good_against(enemy) {
                score += 1;
            }
            if hero.is_bad_against(enemy) {
                score -= 1;
            }
            if let Some(enemy_record) = dataset.get(enemy) {
                if enemy_record.is_bad_against(&hero.name) {
                    score += 1;
                }
                if enemy_record.is_good_against(&hero.name) {
                    score -= 1;
                }
            }
            score
        })
        .sum();

    let ally_score: i32 = state
        .ally_picks
        .iter()
        .map(|ally| {
            let mut score = 0;
            if hero.works_well_with(ally) {
                score += 1;
            }
            if dataset
                .get(ally)
                .is_some_and(|ally_record| ally_record.works_well_with(&hero.name))
            {
                score += 1;
            }
            score
        })
        .sum();

    enemy_score + ally_score
}

/// Scores every hero not yet banned or picked, best first. Ties are broken by
/// name so the order is stable between calls.
pub fn rank_heroes(dataset: &HeroDataset, state: &DraftState) -> Vec<HeroScore> {
    dataset
        .names()
        .filter(|name| !state.is_taken(name))
        .filter_map(|name| dataset.get(name))
        .map(|hero| HeroScore {
            name: hero.name.clone(),
            score: score_hero(dataset, state, hero),
        })
        .sorted_by(compare_scores)
        .collect()
}

fn compare_scores(a: &HeroScore, b: &HeroScore) -> Ordering {
    b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name))
}

/// Splits a ranking into the `top` best and `bottom` worst entries. The two
/// slices never overlap.
pub fn top_and_bottom(
    ranked: &[HeroScore],
    top: usize,
    bottom: usize,
) -> (&[HeroScore], &[HeroScore]) {
    let top_len = top.min(ranked.len());
    let bottom_len = bottom.min(ranked.len() - top_len);
    (&ranked[..top_len], &ranked[ranked.len() - bottom_len..])
}
