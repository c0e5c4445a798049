use crate::FoodItem;

/// Number of nutrition columns in the feature space
pub const FEATURE_DIM: usize = 4;

/// A point in the normalized (protein, carbs, fats, calories) feature space
pub type FeatureVector = [f64; FEATURE_DIM];

/// Column labels in feature order
pub const FEATURE_COLUMNS: [&str; FEATURE_DIM] = ["protein", "carbs", "fats", "calories"];

/// Observed range of one raw nutrition column
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColumnBounds {
    pub min: f64,
    pub max: f64,
}

impl ColumnBounds {
    /// Min-max scale a raw value into this column's range.
    ///
    /// A degenerate column (`min == max`) divides by 1, so every row of that
    /// column scales to 0.
    pub fn scale(&self, raw: f64) -> f64 {
        let range = self.max - self.min;
        let divisor = if range == 0.0 { 1.0 } else { range };
        (raw - self.min) / divisor
    }

    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }
}

/// Raw nutrition features of an item, in feature column order
pub fn raw_features(item: &FoodItem) -> FeatureVector {
    [item.protein, item.carbs, item.fats, item.calories]
}

/// Min-max normalized nutrition features, one row per catalog item
///
/// Row `i` belongs to catalog item `i`. The matrix is built once and only
/// read afterwards.
#[derive(Debug, Clone, Default)]
pub struct FeatureMatrix {
    rows: Vec<FeatureVector>,
    bounds: [ColumnBounds; FEATURE_DIM],
}

impl FeatureMatrix {
    /// Compute per-column bounds over `items` and scale every row into [0, 1]
    pub fn build(items: &[FoodItem]) -> Self {
        let raw: Vec<FeatureVector> = items.iter().map(raw_features).collect();

        let mut bounds = [ColumnBounds::default(); FEATURE_DIM];
        for (column, bound) in bounds.iter_mut().enumerate() {
            let mut values = raw.iter().map(|row| row[column]);
            if let Some(first) = values.next() {
                *bound = values.fold(
                    ColumnBounds {
                        min: first,
                        max: first,
                    },
                    |acc, value| ColumnBounds {
                        min: acc.min.min(value),
                        max: acc.max.max(value),
                    },
                );
            }
        }

        for (bound, label) in bounds.iter().zip(FEATURE_COLUMNS) {
            if bound.is_degenerate() && !raw.is_empty() {
                tracing::debug!(column = label, value = bound.min, "Degenerate feature column");
            }
        }

        let rows = raw
            .iter()
            .map(|row| {
                let mut scaled = [0.0; FEATURE_DIM];
                for (column, value) in scaled.iter_mut().enumerate() {
                    *value = bounds[column].scale(row[column]);
                }
                scaled
            })
            .collect();

        Self { rows, bounds }
    }

    pub fn rows(&self) -> &[FeatureVector] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&FeatureVector> {
        self.rows.get(index)
    }

    pub fn bounds(&self) -> &[ColumnBounds; FEATURE_DIM] {
        &self.bounds
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Catalog, Category};

    fn item(name: &str, calories: f64, protein: f64, carbs: f64, fats: f64) -> FoodItem {
        FoodItem::new(name, calories, protein, carbs, fats, Category::Protein, "100g", &[])
    }

    #[test]
    fn test_all_values_within_unit_range() {
        let catalog = Catalog::builtin();
        let matrix = FeatureMatrix::build(catalog.items());

        assert_eq!(matrix.len(), catalog.len());
        for row in matrix.rows() {
            for value in row {
                assert!(
                    (0.0..=1.0).contains(value),
                    "Scaled value {} outside [0, 1]",
                    value
                );
            }
        }
    }

    #[test]
    fn test_single_row_scales_to_zero() {
        let matrix = FeatureMatrix::build(&[item("Only", 100.0, 10.0, 5.0, 2.0)]);

        assert_eq!(matrix.rows(), &[[0.0, 0.0, 0.0, 0.0]]);
        assert!(matrix.bounds().iter().all(ColumnBounds::is_degenerate));
    }

    #[test]
    fn test_min_and_max_rows_hit_the_bounds() {
        let matrix = FeatureMatrix::build(&[
            item("Low", 50.0, 0.0, 10.0, 1.0),
            item("Mid", 100.0, 10.0, 10.0, 3.0),
            item("High", 150.0, 20.0, 10.0, 5.0),
        ]);

        assert_eq!(matrix.row(0), Some(&[0.0, 0.0, 0.0, 0.0]));
        assert_eq!(matrix.row(1), Some(&[0.5, 0.0, 0.5, 0.5]));
        assert_eq!(matrix.row(2), Some(&[1.0, 0.0, 1.0, 1.0]));
        assert_eq!(matrix.bounds()[3], ColumnBounds { min: 50.0, max: 150.0 });
    }

    #[test]
    fn test_empty_input_builds_empty_matrix() {
        let matrix = FeatureMatrix::build(&[]);
        assert!(matrix.is_empty());
    }
}
