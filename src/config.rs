use clap::Parser;

use crate::models::GenerationParams;

// CLI argument structure, every flag can also come from the environment
#[derive(Parser, Debug, Clone)]
#[command(name = "quote-gateway")]
#[command(about = "Caching quote generator in front of Ollama")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, env = "PORT", default_value_t = 3001)]
    pub port: u16,

    // Ollama server url
    #[arg(short, long, env = "OLLAMA_URL", default_value = "http://localhost:11434")]
    pub ollama_url: String,

    // Model used for generation
    #[arg(short, long, env = "OLLAMA_MODEL", default_value = "deepseek-r1:1.5b")]
    pub model: String,

    #[arg(long, env = "OLLAMA_TEMPERATURE", default_value_t = 0.3)]
    pub temperature: f32,

    // Upper bound on generated tokens
    #[arg(long, env = "OLLAMA_MAX_TOKENS", default_value_t = 50)]
    pub max_tokens: u32,

    // Timeout for a generate call, in seconds
    #[arg(long, env = "OLLAMA_TIMEOUT_SECS", default_value_t = 120)]
    pub request_timeout: u64,

    // Cache TTL in milliseconds, 0 disables the cache
    #[arg(short, long, env = "GENERATE_CACHE_TTL_MS", default_value_t = 300_000)]
    pub cache_ttl_ms: u64,

    // How often expired cache entries are dropped, in seconds
    #[arg(long, default_value_t = 60)]
    pub sweep_interval: u64,

    // Allowed CORS origins (comma-separated), "*" allows any
    #[arg(long, env = "FRONTEND_ORIGINS", default_value = "http://localhost:5173")]
    pub frontend_origins: String,
}

impl Args {
    pub fn generation_params(&self) -> GenerationParams {
        GenerationParams {
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    pub fn origins(&self) -> Vec<String> {
        self.frontend_origins
            .split(',')
            .map(|s| s.trim()) // remove spaces
            .filter(|s| !s.is_empty()) // remove empty strings
            .map(str::to_string)
            .collect()
    }
}
