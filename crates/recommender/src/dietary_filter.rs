use dietplan_catalog::FoodItem;

/// Dietary restrictions and allergies applied to candidate foods.
///
/// # Rules
/// - **AND logic**: an item must carry every restriction tag (case-insensitive)
/// - **Allergies**: an item is removed when its name contains any allergy
///   substring (case-insensitive); blank allergy entries are ignored
/// - Empty restrictions and allergies keep every item
#[derive(Debug, Clone, Copy, Default)]
pub struct DietaryFilter<'a> {
    pub restrictions: &'a [String],
    pub allergies: &'a [String],
}

impl<'a> DietaryFilter<'a> {
    pub fn new(restrictions: &'a [String], allergies: &'a [String]) -> Self {
        Self {
            restrictions,
            allergies,
        }
    }

    /// Check the item carries every restriction tag
    pub fn satisfies_restrictions(&self, item: &FoodItem) -> bool {
        self.restrictions
            .iter()
            .all(|restriction| item.has_flag(restriction.trim()))
    }

    /// Check the item name contains one of the allergy substrings
    pub fn contains_allergen(&self, item: &FoodItem) -> bool {
        self.allergies
            .iter()
            .map(|allergy| allergy.trim())
            .filter(|allergy| !allergy.is_empty())
            .any(|allergy| item.name_contains(allergy))
    }

    pub fn permits(&self, item: &FoodItem) -> bool {
        self.satisfies_restrictions(item) && !self.contains_allergen(item)
    }

    /// Keep the permitted items, preserving input order
    pub fn apply<'i>(&self, items: impl IntoIterator<Item = &'i FoodItem>) -> Vec<&'i FoodItem> {
        items.into_iter().filter(|item| self.permits(item)).collect()
    }
}
