use crate::domain::{comparison::state::ComparisonList, food_info::entities::FoodInfo};

/// Everything one interactive session tracks: the in-flight search, the
/// last error, the current result and the comparison selection. Held only
/// in memory; gone when the process ends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub loading: bool,
    pub error: Option<String>,
    pub current_food: Option<FoodInfo>,
    pub comparison: ComparisonList,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    SearchStarted,
    SearchSucceeded(FoodInfo),
    SearchFailed(String),
    AddedToComparison(FoodInfo),
    RemovedFromComparison(String),
    ComparisonCleared,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure transition function. A search clears the previous result and
    /// error up front; an error message then stays visible until the next
    /// search starts. Comparison events delegate to [`ComparisonList`].
    pub fn apply(self, event: SessionEvent) -> Self {
        match event {
            SessionEvent::SearchStarted => Self {
                loading: true,
                error: None,
                current_food: None,
                comparison: self.comparison,
            },
            SessionEvent::SearchSucceeded(food) => Self {
                loading: false,
                current_food: Some(food),
                ..self
            },
            SessionEvent::SearchFailed(message) => Self {
                loading: false,
                error: Some(message),
                ..self
            },
            SessionEvent::AddedToComparison(food) => Self {
                comparison: self.comparison.add(&food),
                ..self
            },
            SessionEvent::RemovedFromComparison(food_name) => Self {
                comparison: self.comparison.remove(&food_name),
                ..self
            },
            SessionEvent::ComparisonCleared => Self {
                comparison: self.comparison.clear(),
                ..self
            },
        }
    }
}
