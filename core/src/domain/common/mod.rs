pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct DrFoodieConfig {
    pub llm: LLMConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_image_model: String,
}
