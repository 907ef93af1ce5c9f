//! Environment-driven configuration for the CLI.

use anyhow::Result;
use sqlscout_core::env_parse_with_default;
use sqlscout_llm::DEFAULT_MODEL;
use sqlscout_service::DEFAULT_TOP_K;
use std::path::PathBuf;

pub fn get_api_key() -> Result<String> {
    std::env::var("SQLSCOUT_API_KEY")
        .map_err(|_| anyhow::anyhow!("SQLSCOUT_API_KEY environment variable must be set"))
}

pub fn get_base_url() -> String {
    std::env::var("SQLSCOUT_API_URL").unwrap_or_else(|_| "https://api.openai.com".to_owned())
}

pub fn get_model() -> String {
    std::env::var("SQLSCOUT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_owned())
}

/// Database path: `--db` flag, then `SQLSCOUT_DB`, then the bundled demo
/// path in the working directory.
pub fn db_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var("SQLSCOUT_DB").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("retail_commerce.db"))
}

/// Retrieval breadth: `--top-k` flag, then `SQLSCOUT_RETRIEVAL_K`, then the
/// service default.
pub fn retrieval_k(flag: Option<usize>) -> usize {
    flag.unwrap_or_else(|| env_parse_with_default("SQLSCOUT_RETRIEVAL_K", DEFAULT_TOP_K))
}
