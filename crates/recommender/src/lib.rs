pub mod assembler;
pub mod dietary_filter;
pub mod preference;
pub mod ranker;
pub mod similarity;

pub use assembler::{ToleranceBand, assemble_meal, protein_per_calorie, sort_by_protein_efficiency};
pub use dietary_filter::DietaryFilter;
pub use preference::{goal_archetype, preference_vector};
pub use ranker::{Candidate, filter_candidates, rank_by_similarity, rank_candidates};
pub use similarity::cosine_similarity;

use dietplan_catalog::{Catalog, FeatureMatrix, FeatureVector};

/// Similarity recommender over a fixed catalog
///
/// Owns the catalog and its normalized feature matrix. Both are built once
/// and shared read-only by every ranking call.
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Catalog,
    features: FeatureMatrix,
}

impl Recommender {
    pub fn new(catalog: Catalog) -> Self {
        let features = FeatureMatrix::build(catalog.items());
        tracing::debug!(items = catalog.len(), "Built feature matrix");

        Self { catalog, features }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn features(&self) -> &FeatureMatrix {
        &self.features
    }

    pub fn preference_vector<S: AsRef<str>>(
        &self,
        liked_names: &[S],
        goal: Option<&str>,
    ) -> FeatureVector {
        preference_vector(&self.catalog, &self.features, liked_names, goal)
    }

    /// Top `top_k` candidates for the user's liked foods or goal, after
    /// dietary restrictions and allergies are applied
    pub fn recommend_candidates<S: AsRef<str>>(
        &self,
        liked_names: &[S],
        goal: Option<&str>,
        filter: &DietaryFilter<'_>,
        top_k: usize,
    ) -> Vec<Candidate<'_>> {
        let preference = self.preference_vector(liked_names, goal);
        rank_candidates(&self.catalog, &self.features, &preference, filter, top_k)
    }
}
