//! Environment configuration
//!
//! Read once at startup. `.env` is honoured through `dotenv`.

use crate::error::NlpError;
use crate::Result;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_SENTIMENT_MODEL: &str = "models/sentiment_model.json";
const DEFAULT_INTENT_MODEL: &str = "models/intent_model.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub sentiment_model_path: PathBuf,
    pub intent_model_path: PathBuf,
    /// Built-in lexicon when unset
    pub lexicon_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT").or_else(|| get("NLP_PORT")) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| NlpError::Config(format!("invalid port '{}': {}", raw, e)))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: get("NLP_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            sentiment_model_path: get("SENTIMENT_MODEL_PATH")
                .unwrap_or_else(|| DEFAULT_SENTIMENT_MODEL.to_string())
                .into(),
            intent_model_path: get("INTENT_MODEL_PATH")
                .unwrap_or_else(|| DEFAULT_INTENT_MODEL.to_string())
                .into(),
            lexicon_path: get("LEXICON_PATH").map(PathBuf::from),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
