use crate::domain::{
    comparison::entities::{ComparisonFoodInfo, Nutrient, NutrientMaxima},
    food_info::entities::FoodInfo,
};

/// Ordered collection of foods selected for side-by-side comparison,
/// deduplicated by name. All operations are pure: they leave `self`
/// untouched and return the updated list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonList {
    entries: Vec<ComparisonFoodInfo>,
}

impl ComparisonList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ComparisonFoodInfo] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an entry with this name is already present. Names compare
    /// case-insensitively.
    pub fn contains(&self, food_name: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.food_name.eq_ignore_ascii_case(food_name))
    }

    /// Project `food` into a comparison entry and append it. Appending a
    /// food whose name is already present (case-insensitively) is a no-op.
    pub fn add(&self, food: &FoodInfo) -> Self {
        if self.contains(&food.food_name) {
            return self.clone();
        }

        let mut entries = self.entries.clone();
        entries.push(ComparisonFoodInfo::from(food));
        Self { entries }
    }

    /// Remove the entry whose name exactly equals `food_name`. Removal is
    /// exact-match on purpose: callers always pass a name taken from the
    /// list itself. Removing an absent name is a no-op.
    pub fn remove(&self, food_name: &str) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|entry| entry.food_name != food_name)
                .cloned()
                .collect(),
        }
    }

    pub fn clear(&self) -> Self {
        Self::new()
    }

    /// Maximum value of one nutrient across all entries, 0 when empty.
    pub fn max_of(&self, nutrient: Nutrient) -> f64 {
        self.entries
            .iter()
            .map(|entry| entry.nutrition_facts.get(nutrient))
            .fold(0.0_f64, f64::max)
    }

    /// The four per-column maxima. Every entry whose value equals the
    /// maximum counts as a top value; ties are not broken.
    pub fn maxima(&self) -> NutrientMaxima {
        NutrientMaxima {
            calories: self.max_of(Nutrient::Calories),
            protein: self.max_of(Nutrient::Protein),
            carbohydrates: self.max_of(Nutrient::Carbohydrates),
            fat: self.max_of(Nutrient::Fat),
        }
    }
}
