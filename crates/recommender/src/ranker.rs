use dietplan_catalog::{Catalog, FeatureMatrix, FeatureVector, FoodItem};

use crate::dietary_filter::DietaryFilter;
use crate::similarity::cosine_similarity;

/// A catalog item that passed ranking and filtering for a meal slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a> {
    pub item: &'a FoodItem,
    /// Position of the item in catalog order
    pub index: usize,
    pub score: f64,
}

/// Score every catalog item against the preference vector and sort
/// descending. Ties keep catalog order.
pub fn rank_by_similarity<'a>(
    catalog: &'a Catalog,
    features: &FeatureMatrix,
    preference: &FeatureVector,
) -> Vec<Candidate<'a>> {
    let mut ranked: Vec<Candidate<'a>> = catalog
        .iter()
        .zip(features.rows())
        .enumerate()
        .map(|(index, (item, row))| Candidate {
            item,
            index,
            score: cosine_similarity(preference, row),
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// Apply the restriction filter then the allergy filter, keeping rank order.
///
/// Filtering an already filtered list with the same filter is a no-op.
pub fn filter_candidates<'a>(
    candidates: Vec<Candidate<'a>>,
    filter: &DietaryFilter<'_>,
) -> Vec<Candidate<'a>> {
    candidates
        .into_iter()
        .filter(|candidate| filter.satisfies_restrictions(candidate.item))
        .filter(|candidate| !filter.contains_allergen(candidate.item))
        .collect()
}

/// Rank, filter and cap the candidate list for one meal slot.
///
/// An empty result is a valid outcome when the filters eliminate everything.
pub fn rank_candidates<'a>(
    catalog: &'a Catalog,
    features: &FeatureMatrix,
    preference: &FeatureVector,
    filter: &DietaryFilter<'_>,
    top_k: usize,
) -> Vec<Candidate<'a>> {
    let ranked = rank_by_similarity(catalog, features, preference);
    let mut candidates = filter_candidates(ranked, filter);
    candidates.truncate(top_k);

    tracing::debug!(
        catalog = catalog.len(),
        candidates = candidates.len(),
        top_k,
        "Ranked candidates"
    );

    candidates
}
