use crate::{
    domain::common::{DrFoodieConfig, services::Service},
    infrastructure::llm::GeminiLLMClient,
};

pub type DrFoodieService = Service<GeminiLLMClient>;

/// Wires the domain service to the Gemini adapter. The API credential is
/// taken as-is; a missing or invalid key surfaces when the first remote
/// call fails.
pub fn create_service(config: DrFoodieConfig) -> DrFoodieService {
    let llm_client = GeminiLLMClient::new(
        config.llm.gemini_api_key,
        config.llm.gemini_model,
        config.llm.gemini_image_model,
    );

    Service::new(llm_client)
}
