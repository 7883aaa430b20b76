#[derive(Debug, Clone)]
pub struct LookupFoodInput {
    pub query: String,
}

#[derive(Debug, Clone)]
pub struct CompareFoodsInput {
    pub food_names: Vec<String>,
}
