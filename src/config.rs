//! Configuration from the environment

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use crate::quiz::GeminiConfig;
use crate::quiz::GenerativeModel;

const DEFAULT_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_PUBLIC_DIR: &str = "public";

/// Which generative model to generate quizzes with
pub enum ModelConfig {
    /// Detect Gemini configuration from environment
    DetectConfig,

    /// Use existing model
    Existing(Arc<dyn GenerativeModel>),
}

/// Application configuration
pub struct Config {
    /// Directory with the pages and other static assets
    pub public_dir: PathBuf,

    pub model: ModelConfig,
}

impl Config {
    /// Detect configuration from environment
    pub fn from_env() -> Self {
        let public_dir = env_var_or_else("PUBLIC_DIR", || DEFAULT_PUBLIC_DIR.to_string());

        Self {
            public_dir: PathBuf::from(public_dir),
            model: ModelConfig::DetectConfig,
        }
    }
}

impl ModelConfig {
    /// Resolve the model
    ///
    /// # Errors
    ///
    /// Will return `Err` when the Gemini configuration is invalid
    pub fn into_model(self) -> Result<Arc<dyn GenerativeModel>> {
        use crate::quiz::Gemini;

        Ok(match self {
            ModelConfig::DetectConfig => Arc::new(Gemini::new(GeminiConfig::from_env()?)),
            ModelConfig::Existing(model) => model,
        })
    }
}

/// Address to listen on
///
/// `ADDRESS` sets the full address, `PORT` overrides just the port
pub fn address() -> Result<SocketAddr> {
    let mut address =
        env_var_or_else("ADDRESS", || DEFAULT_ADDRESS.to_string()).parse::<SocketAddr>()?;

    if let Some(port) = env_var("PORT") {
        address.set_port(port.parse::<u16>()?);
    }

    Ok(address)
}

/// Get the value of ENV var
///
/// Only when:
/// - It is set
/// - It is not empty
pub fn env_var(var_name: &'static str) -> Option<String> {
    non_empty(std::env::var(var_name).ok())
}

/// Get the value of ENV var, or a default
pub fn env_var_or_else(var_name: &'static str, or_else: fn() -> String) -> String {
    env_var(var_name).unwrap_or_else(or_else)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
