use std::collections::HashSet;

use dietplan_catalog::{Catalog, FEATURE_DIM, FeatureMatrix, FeatureVector};
use dietplan_shared::Goal;

/// Archetypal preference vector for a goal (protein, carbs, fats, calories)
pub fn goal_archetype(goal: Goal) -> FeatureVector {
    match goal {
        Goal::Lose => [0.9, 0.4, 0.2, 0.1],
        Goal::Gain => [0.6, 0.7, 0.5, 0.9],
        Goal::Maintain => [0.7, 0.6, 0.4, 0.5],
    }
}

/// Derive the point in feature space the user currently wants to eat.
///
/// When at least one liked name resolves to a catalog item, the result is the
/// mean of the resolved items' normalized rows; unknown names are dropped.
/// Otherwise the goal archetype is used, with unrecognized or absent goals
/// treated as `maintain`.
pub fn preference_vector<S: AsRef<str>>(
    catalog: &Catalog,
    features: &FeatureMatrix,
    liked_names: &[S],
    goal: Option<&str>,
) -> FeatureVector {
    if let Some(mean) = liked_mean(catalog, features, liked_names) {
        return mean;
    }

    goal_archetype(Goal::from_label_or_default(goal))
}

fn liked_mean<S: AsRef<str>>(
    catalog: &Catalog,
    features: &FeatureMatrix,
    liked_names: &[S],
) -> Option<FeatureVector> {
    if liked_names.is_empty() {
        return None;
    }

    let liked: HashSet<&str> = liked_names.iter().map(AsRef::as_ref).collect();
    let mut sum = [0.0; FEATURE_DIM];
    let mut resolved = 0usize;

    for (item, row) in catalog.iter().zip(features.rows()) {
        if !liked.contains(item.name.as_str()) {
            continue;
        }
        for (acc, value) in sum.iter_mut().zip(row) {
            *acc += value;
        }
        resolved += 1;
    }

    if resolved == 0 {
        tracing::debug!(
            liked = liked_names.len(),
            "No liked food resolved to the catalog, using goal archetype"
        );
        return None;
    }

    Some(sum.map(|total| total / resolved as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dietplan_catalog::{Category, FoodItem};

    fn small_catalog() -> (Catalog, FeatureMatrix) {
        let catalog = Catalog::from_items(vec![
            FoodItem::new("A", 100.0, 20.0, 0.0, 2.0, Category::Protein, "100g", &[]),
            FoodItem::new("B", 200.0, 0.0, 40.0, 4.0, Category::Carbs, "100g", &[]),
            FoodItem::new("C", 300.0, 10.0, 20.0, 6.0, Category::Fats, "100g", &[]),
        ])
        .expect("valid catalog");
        let features = FeatureMatrix::build(catalog.items());
        (catalog, features)
    }

    #[test]
    fn test_goal_archetypes_without_liked_names() {
        let (catalog, features) = small_catalog();
        let none: &[&str] = &[];

        assert_eq!(
            preference_vector(&catalog, &features, none, Some("lose")),
            [0.9, 0.4, 0.2, 0.1]
        );
        assert_eq!(
            preference_vector(&catalog, &features, none, Some("gain")),
            [0.6, 0.7, 0.5, 0.9]
        );
        assert_eq!(
            preference_vector(&catalog, &features, none, Some("maintain")),
            [0.7, 0.6, 0.4, 0.5]
        );
    }

    #[test]
    fn test_unrecognized_goal_uses_maintain() {
        let (catalog, features) = small_catalog();
        let none: &[&str] = &[];

        assert_eq!(
            preference_vector(&catalog, &features, none, Some("Lose")),
            goal_archetype(Goal::Maintain)
        );
        assert_eq!(
            preference_vector(&catalog, &features, none, None),
            goal_archetype(Goal::Maintain)
        );
    }

    #[test]
    fn test_liked_names_average_normalized_rows() {
        let (catalog, features) = small_catalog();

        let vector = preference_vector(&catalog, &features, &["A", "B"], Some("lose"));

        // A = [1, 0, 0, 0], B = [0, 1, 0.5, 0.5]
        assert_eq!(vector, [0.5, 0.5, 0.25, 0.25]);
    }

    #[test]
    fn test_unknown_liked_names_are_ignored() {
        let (catalog, features) = small_catalog();

        let with_unknown = preference_vector(&catalog, &features, &["Pizza", "C"], None);
        let only_known = preference_vector(&catalog, &features, &["C"], None);

        assert_eq!(with_unknown, only_known);
        assert_eq!(only_known, [0.5, 0.5, 1.0, 1.0]);
    }

    #[test]
    fn test_all_unknown_falls_back_to_goal() {
        let (catalog, features) = small_catalog();

        let vector = preference_vector(&catalog, &features, &["Pizza", "Soda"], Some("gain"));

        assert_eq!(vector, goal_archetype(Goal::Gain));
    }

    #[test]
    fn test_repeated_liked_name_counts_once() {
        let (catalog, features) = small_catalog();

        let repeated = preference_vector(&catalog, &features, &["A", "A", "A", "B"], None);
        let single = preference_vector(&catalog, &features, &["A", "B"], None);

        assert_eq!(repeated, single);
    }
}
