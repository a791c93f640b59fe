//! Google Gemini as generative model

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use url::Url;

use crate::config::env_var;
use crate::config::env_var_or_else;

use super::Error;
use super::GenerativeModel;
use super::Result;

const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const API_KEY_HEADER: &str = "X-goog-api-key";

/// Gemini configuration
#[derive(Clone, Debug)]
pub struct GeminiConfig {
    /// Without a key every generation fails
    pub api_key: Option<String>,

    pub model: String,

    /// Base of the API, may include a path prefix
    pub base_url: Url,
}

impl GeminiConfig {
    /// Detect configuration from environment
    ///
    /// Uses `GEMINI_API_KEY`, `GEMINI_MODEL` and `GEMINI_BASE_URL`
    pub fn from_env() -> core::result::Result<Self, url::ParseError> {
        let api_key = env_var("GEMINI_API_KEY");
        if api_key.is_none() {
            tracing::warn!("`GEMINI_API_KEY` is not set, quizzes can not be generated");
        }

        let model = env_var_or_else("GEMINI_MODEL", || DEFAULT_MODEL.to_string());
        let base_url = env_var_or_else("GEMINI_BASE_URL", || DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key,
            model,
            base_url: Url::parse(&base_url)?,
        })
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

/// Client for the Gemini `generateContent` endpoint
#[derive(Clone, Debug)]
pub struct Gemini {
    client: Client,
    config: GeminiConfig,
}

impl Gemini {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// The `generateContent` URL, relative to the base URL including its path
    fn endpoint(&self) -> Result<Url> {
        let mut base_url = self.config.base_url.clone();

        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        base_url
            .join(&format!(
                "v1beta/models/{}:generateContent",
                self.config.model
            ))
            .map_err(|err| Error::Request(err.to_string()))
    }
}

#[async_trait]
impl GenerativeModel for Gemini {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let api_key = self.config.api_key.as_ref().ok_or(Error::MissingApiKey)?;

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        tracing::debug!("Sending prompt to Gemini model {}", self.config.model);

        let response = self
            .client
            .post(self.endpoint()?)
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| Error::Request(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Request(format!("HTTP {status}: {body}")));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|err| Error::Request(err.to_string()))?
            .into_text()
            .ok_or(Error::EmptyResponse)
    }
}
