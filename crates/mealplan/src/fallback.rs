use dietplan_catalog::{Category, FoodItem};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Category slots filled by the random fallback: one protein, one carb and
/// two vegetables
const FALLBACK_SLOTS: [(Category, usize); 3] = [
    (Category::Protein, 1),
    (Category::Carbs, 1),
    (Category::Vegetable, 2),
];

/// Random meal built from the already filtered foods, one pick per slot.
///
/// Categories with no available food are skipped; picks are independent, so
/// the two vegetables may repeat.
pub fn category_fallback<'a, R: Rng + ?Sized>(
    available: &[&'a FoodItem],
    rng: &mut R,
) -> Vec<&'a FoodItem> {
    let mut meal = Vec::new();

    for (category, picks) in FALLBACK_SLOTS {
        let pool: Vec<&'a FoodItem> = available
            .iter()
            .copied()
            .filter(|item| item.category == category)
            .collect();

        for _ in 0..picks {
            if let Some(item) = pool.choose(&mut *rng) {
                meal.push(*item);
            }
        }
    }

    meal
}
