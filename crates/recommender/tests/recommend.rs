use dietplan_catalog::{Catalog, Category, FoodItem};
use dietplan_recommender::{
    DietaryFilter, Recommender, assemble_meal, filter_candidates, goal_archetype,
    protein_per_calorie,
};
use dietplan_shared::Goal;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn chicken() -> FoodItem {
    FoodItem::new(
        "Chicken Breast",
        165.0,
        31.0,
        0.0,
        3.6,
        Category::Protein,
        "100g",
        &["lean-protein"],
    )
}

fn brown_rice() -> FoodItem {
    FoodItem::new(
        "Brown Rice",
        112.0,
        2.6,
        23.5,
        0.9,
        Category::Carbs,
        "100g cooked",
        &["vegan"],
    )
}

fn broccoli() -> FoodItem {
    FoodItem::new(
        "Broccoli",
        55.0,
        3.7,
        11.2,
        0.6,
        Category::Vegetable,
        "100g",
        &["vegan"],
    )
}

#[test]
fn test_filters_hold_for_every_combination() {
    let recommender = Recommender::new(Catalog::builtin());
    let restriction_sets = [
        vec![],
        strings(&["vegan"]),
        strings(&["vegetarian"]),
        strings(&["gluten-free"]),
        strings(&["Vegan", "Gluten-Free"]),
        strings(&["vegan", "pescatarian"]),
    ];
    let allergy_sets = [
        vec![],
        strings(&["almond"]),
        strings(&["RICE", "tofu"]),
        strings(&["a"]),
    ];

    for restrictions in &restriction_sets {
        for allergies in &allergy_sets {
            let filter = DietaryFilter::new(restrictions, allergies);
            let candidates = recommender.recommend_candidates::<&str>(&[], Some("lose"), &filter, 60);

            for candidate in &candidates {
                for restriction in restrictions {
                    assert!(
                        candidate.item.has_flag(restriction),
                        "{} lacks restriction {}",
                        candidate.item.name,
                        restriction
                    );
                }
                for allergy in allergies {
                    assert!(
                        !candidate.item.name.to_lowercase().contains(&allergy.to_lowercase()),
                        "{} contains allergen {}",
                        candidate.item.name,
                        allergy
                    );
                }
            }
        }
    }
}

#[test]
fn test_restriction_filter_is_idempotent() {
    let recommender = Recommender::new(Catalog::builtin());
    let restrictions = strings(&["gluten-free"]);
    let allergies = strings(&["kale"]);
    let filter = DietaryFilter::new(&restrictions, &allergies);

    let once = recommender.recommend_candidates::<&str>(&[], Some("maintain"), &filter, 60);
    let twice = filter_candidates(once.clone(), &filter);

    assert_eq!(once, twice);
}

#[test]
fn test_liked_history_changes_ranking_seed() {
    let recommender = Recommender::new(Catalog::builtin());

    let from_goal = recommender.preference_vector::<&str>(&[], Some("gain"));
    let from_likes = recommender.preference_vector(&["Olive Oil", "Almonds"], Some("gain"));

    assert_eq!(from_goal, goal_archetype(Goal::Gain));
    assert_ne!(from_likes, from_goal);

    let filter = DietaryFilter::default();
    let candidates = recommender.recommend_candidates(&["Olive Oil"], None, &filter, 1);
    assert_eq!(candidates[0].item.name, "Olive Oil", "An item is most similar to itself");
}

#[test]
fn test_assembly_follows_protein_efficiency() {
    let catalog = Catalog::from_items(vec![brown_rice(), broccoli(), chicken()]).expect("valid");
    let recommender = Recommender::new(catalog);
    let candidates =
        recommender.recommend_candidates::<&str>(&[], Some("lose"), &DietaryFilter::default(), 60);

    let meal = assemble_meal(&candidates, 300.0, 0.25);
    let names: Vec<&str> = meal.iter().map(|item| item.name.as_str()).collect();

    // Ratios: chicken 0.188, broccoli 0.067, rice 0.023. Chicken + broccoli is
    // 220 kcal, still below 225, so rice is added to reach 332.
    assert!(protein_per_calorie(&chicken()) > protein_per_calorie(&broccoli()));
    assert_eq!(names, vec!["Chicken Breast", "Broccoli", "Brown Rice"]);
    assert_eq!(meal.iter().map(|item| item.calories).sum::<f64>(), 332.0);
}

#[test]
fn test_assembly_stops_once_band_is_reached() {
    let catalog = Catalog::from_items(vec![brown_rice(), chicken()]).expect("valid");
    let recommender = Recommender::new(catalog);
    let candidates =
        recommender.recommend_candidates::<&str>(&[], None, &DietaryFilter::default(), 60);

    let meal = assemble_meal(&candidates, 300.0, 0.25);
    let names: Vec<&str> = meal.iter().map(|item| item.name.as_str()).collect();

    // 165 + 112 = 277, inside [225, 375]
    assert_eq!(names, vec!["Chicken Breast", "Brown Rice"]);
}
