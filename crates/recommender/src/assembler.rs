use dietplan_catalog::FoodItem;

use crate::ranker::Candidate;

/// Added to calories before dividing, so zero-calorie items do not divide by zero
pub const RATIO_EPSILON: f64 = 1e-6;

/// Acceptable calorie range for a single meal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceBand {
    pub lower: f64,
    pub upper: f64,
}

impl ToleranceBand {
    /// `target × [1 − tolerance, 1 + tolerance]`
    pub fn around(target: f64, tolerance: f64) -> Self {
        Self {
            lower: target * (1.0 - tolerance),
            upper: target * (1.0 + tolerance),
        }
    }

    pub fn contains(&self, calories: f64) -> bool {
        calories >= self.lower && calories <= self.upper
    }
}

/// Grams of protein per calorie
pub fn protein_per_calorie(item: &FoodItem) -> f64 {
    item.protein / (item.calories + RATIO_EPSILON)
}

/// Re-sort candidates by protein efficiency, descending.
///
/// The similarity rank is discarded here; equal ratios keep the incoming order.
pub fn sort_by_protein_efficiency<'a>(candidates: &[Candidate<'a>]) -> Vec<&'a FoodItem> {
    let mut items: Vec<&'a FoodItem> = candidates.iter().map(|c| c.item).collect();
    items.sort_by(|a, b| protein_per_calorie(b).total_cmp(&protein_per_calorie(a)));
    items
}

/// Greedily compose a meal close to `calorie_target`.
///
/// Items are taken in protein-efficiency order whenever they fit under the
/// upper bound, stopping once the running total reaches the lower bound.
/// Undershooting is accepted. When nothing fits at all, the top
/// efficiency-ranked candidate is returned alone, so a non-empty candidate
/// list never yields an empty meal.
pub fn assemble_meal<'a>(
    candidates: &[Candidate<'a>],
    calorie_target: f64,
    tolerance: f64,
) -> Vec<&'a FoodItem> {
    let ordered = sort_by_protein_efficiency(candidates);
    let band = ToleranceBand::around(calorie_target, tolerance);

    let mut chosen = Vec::new();
    let mut total = 0.0;

    for item in &ordered {
        if total + item.calories > band.upper {
            continue;
        }

        chosen.push(*item);
        total += item.calories;

        if total >= band.lower {
            break;
        }
    }

    if chosen.is_empty() {
        if let Some(first) = ordered.first() {
            tracing::debug!(
                item = %first.name,
                upper = band.upper,
                "No candidate fits the tolerance band, using top efficiency item"
            );
            chosen.push(*first);
        }
        return chosen;
    }

    if total < band.lower {
        tracing::debug!(total, lower = band.lower, "Meal undershoots the tolerance band");
    }

    chosen
}
