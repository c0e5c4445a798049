use std::collections::HashSet;
use std::path::Path;

use crate::{CatalogError, Category, FoodItem};

/// The static set of food items available for recommendation
///
/// Item order is stable for the lifetime of the catalog; feature rows and
/// rank tie-breaking both rely on it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<FoodItem>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate names and negative or non-finite
    /// nutrition values. Dietary flags are normalized to lowercase.
    pub fn from_items(items: Vec<FoodItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(items.len());

        for mut item in items {
            if !seen.insert(item.name.clone()) {
                return Err(CatalogError::DuplicateItem(item.name));
            }

            for (field, value) in [
                ("calories", item.calories),
                ("protein", item.protein),
                ("carbs", item.carbs),
                ("fats", item.fats),
            ] {
                if !value.is_finite() || value < 0.0 {
                    return Err(CatalogError::InvalidNutrition {
                        name: item.name,
                        field,
                        value,
                    });
                }
            }

            item.dietary_flags = item
                .dietary_flags
                .iter()
                .map(|flag| flag.trim().to_lowercase())
                .collect();
            normalized.push(item);
        }

        if normalized.is_empty() {
            tracing::warn!("Catalog is empty, every meal will come back empty");
        }

        Ok(Self { items: normalized })
    }

    /// Load a catalog from a JSON array of food items
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let items: Vec<FoodItem> = serde_json::from_str(&raw)?;

        tracing::info!(path = %path.display(), items = items.len(), "Loaded food catalog");

        Self::from_items(items)
    }

    /// The built-in catalog shipped with the planner
    pub fn builtin() -> Self {
        Self {
            items: builtin_items(),
        }
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FoodItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Exact name lookup
    pub fn get(&self, name: &str) -> Option<&FoodItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Position of an item in catalog order, which is also its feature row
    pub fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }
}

#[rustfmt::skip]
fn builtin_items() -> Vec<FoodItem> {
    use Category::*;

    vec![
        FoodItem::new("Chicken Breast (skinless)", 165.0, 31.0, 0.0, 3.6, Protein, "100g", &["lean-protein", "low-fat", "low-carb"]),
        FoodItem::new("Turkey Breast", 135.0, 30.0, 0.0, 2.1, Protein, "100g", &["lean-protein", "low-fat", "low-carb"]),
        FoodItem::new("Egg Whites", 52.0, 11.0, 0.7, 0.2, Protein, "100g", &["vegetarian", "lean-protein"]),
        FoodItem::new("Tuna (canned in water)", 116.0, 26.0, 0.0, 1.3, Protein, "100g", &["pescatarian", "lean-protein", "omega-3"]),
        FoodItem::new("Firm Tofu", 144.0, 15.6, 3.5, 8.7, Protein, "100g", &["vegan", "vegetarian", "gluten-free", "low-carb"]),
        FoodItem::new("Brown Rice", 112.0, 2.6, 23.5, 0.9, Carbs, "100g cooked", &["vegan", "gluten-free", "whole-grain"]),
        FoodItem::new("Quinoa", 120.0, 4.4, 21.3, 1.9, Carbs, "100g cooked", &["vegan", "gluten-free", "complete-protein"]),
        FoodItem::new("Broccoli", 55.0, 3.7, 11.2, 0.6, Vegetable, "100g", &["vegan", "gluten-free", "cruciferous"]),
        FoodItem::new("Spinach (raw)", 23.0, 2.9, 3.6, 0.4, Vegetable, "100g", &["vegan", "gluten-free", "low-carb", "leafy-green"]),
        FoodItem::new("Avocado", 160.0, 2.0, 8.5, 14.7, Fats, "100g", &["vegan", "gluten-free", "healthy-fats"]),
        FoodItem::new("Almonds", 579.0, 21.2, 21.7, 49.9, Fats, "100g", &["vegan", "gluten-free", "vitamin-e"]),
        FoodItem::new("Greek Yogurt (2%)", 73.0, 9.9, 3.6, 1.9, Protein, "100g", &["vegetarian", "probiotic"]),
        FoodItem::new("Apple", 52.0, 0.3, 13.8, 0.2, Fruit, "100g", &["vegan", "gluten-free", "fiber-rich"]),
        FoodItem::new("Banana", 89.0, 1.1, 22.8, 0.3, Fruit, "100g", &["vegan", "gluten-free", "potassium"]),
        FoodItem::new("Oatmeal", 68.0, 2.4, 12.0, 1.4, Carbs, "100g cooked", &["vegan", "fiber-rich"]),
        FoodItem::new("Olive Oil", 884.0, 0.0, 0.0, 100.0, Fats, "100g", &["vegan", "gluten-free", "monounsaturated"]),
        FoodItem::new("Salmon (Atlantic)", 208.0, 22.0, 0.0, 13.0, Protein, "100g", &["pescatarian", "omega-3", "healthy-fats"]),
        FoodItem::new("Chickpeas", 164.0, 8.9, 27.4, 2.6, Protein, "100g cooked", &["vegan", "vegetarian", "gluten-free", "fiber-rich"]),
        FoodItem::new("Sweet Potato", 86.0, 1.6, 20.1, 0.1, Carbs, "100g baked", &["vegan", "gluten-free", "vitamin-a"]),
        FoodItem::new("Kale (raw)", 49.0, 4.3, 8.8, 0.9, Vegetable, "100g", &["vegan", "gluten-free", "low-carb", "leafy-green"]),
    ]
}
