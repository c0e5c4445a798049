use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Food group used for catalog organization and the category fallback
///
/// Labels outside the known groups load as [`Category::Other`].
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Protein,
    Carbs,
    Vegetable,
    Fruit,
    Fats,
    #[serde(other)]
    Other,
}

/// A single catalog entry with its nutrition per portion
///
/// `name` is unique within a catalog. `portion` is descriptive only and never
/// used in computations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub category: Category,
    pub portion: String,
    #[serde(default)]
    pub dietary_flags: Vec<String>,
}

impl FoodItem {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        calories: f64,
        protein: f64,
        carbs: f64,
        fats: f64,
        category: Category,
        portion: impl Into<String>,
        dietary_flags: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            calories,
            protein,
            carbs,
            fats,
            category,
            portion: portion.into(),
            dietary_flags: dietary_flags.iter().map(|f| f.to_lowercase()).collect(),
        }
    }

    /// Case-insensitive dietary flag lookup
    pub fn has_flag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.dietary_flags
            .iter()
            .any(|flag| flag.to_lowercase() == tag)
    }

    /// Case-insensitive substring match on the item name
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}
