use clap::Parser;
use drfoodie_core::domain::common::{DrFoodieConfig, LLMConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "drfoodie-api", about = "Dr Foodie HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LLMArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LLMArgs {
    // Not validated here: a missing key surfaces when the first remote
    // call is rejected.
    #[arg(
        long = "gemini-api-key",
        env = "GEMINI_API_KEY",
        default_value = "",
        hide_env_values = true
    )]
    pub gemini_api_key: String,

    #[arg(
        long = "gemini-model",
        env = "GEMINI_MODEL",
        default_value = "gemini-2.5-flash"
    )]
    pub gemini_model: String,

    #[arg(
        long = "gemini-image-model",
        env = "GEMINI_IMAGE_MODEL",
        default_value = "gemini-2.5-flash-image"
    )]
    pub gemini_image_model: String,
}

impl From<Args> for DrFoodieConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_image_model: args.llm.gemini_image_model,
            },
        }
    }
}
