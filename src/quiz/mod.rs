//! Quiz generation from the content of a note
//!
//! A prompt is built from the note, sent to a generative model and the first
//! JSON object found in the answer is returned as-is

use std::fmt::Write;
use std::sync::Arc;
use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

pub use gemini::Gemini;
pub use gemini::GeminiConfig;

mod gemini;

/// Greedy match from the first `{` to the last `}`, across lines
static JSON_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("Valid JSON object pattern"));

const PROMPT_INTRODUCTION: &str =
    "Create 5 multiple-choice questions in Japanese based on the following material:\n\n";

const PROMPT_FORMAT: &str = r#"
Format the answer as JSON like this:
{
  "questions": [
    {
      "question": "明日、仕事があるから、早く＿＿",
      "options": ["A. 寝ないと", "B. 寝られる", "C. 寝ない", "D. 寝させる"],
      "correct": 0,
      "explanation": "Explanation of the correct answer"
    }
  ]
}

Make sure the questions are varied and test the understanding of the given material."#;

/// Quiz generation errors
#[derive(Debug, Error)]
pub enum Error {
    /// Nothing to base a quiz on
    #[error("Title, description or vocabulary is required")]
    MissingMaterial,

    /// No credential configured for the generative model
    #[error("Missing `GEMINI_API_KEY`")]
    MissingApiKey,

    /// The request to the generative model failed
    #[error("Request failed: {0}")]
    Request(String),

    /// The generative model answered without any text
    #[error("Response contained no text")]
    EmptyResponse,

    /// No JSON object in the generated text
    #[error("Invalid response format")]
    InvalidResponseFormat,

    /// The JSON object in the generated text could not be parsed
    #[error("Invalid quiz JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Result type for quiz generation
pub type Result<T> = core::result::Result<T, Error>;

/// A model turning a single prompt into free text
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Generate text for the prompt
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// The material a quiz is generated from
pub struct Material<'a> {
    /// Only used to check that there is something to work with
    pub title: Option<&'a str>,

    pub description: Option<&'a str>,

    pub vocabulary: Option<&'a [String]>,
}

impl Material<'_> {
    fn is_empty(&self) -> bool {
        self.title.is_none_or(str::is_empty)
            && self.description.is_none_or(str::is_empty)
            && self.vocabulary.is_none_or(<[String]>::is_empty)
    }
}

/// Generates quizzes using a generative model
#[derive(Clone)]
pub struct QuizGenerator {
    model: Arc<dyn GenerativeModel>,
}

impl QuizGenerator {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Generate a quiz for the material
    ///
    /// The quiz is whatever JSON object the model came up with, its shape is not checked
    pub async fn generate(&self, material: &Material<'_>) -> Result<Value> {
        if material.is_empty() {
            return Err(Error::MissingMaterial);
        }

        let prompt = build_prompt(material);

        let text = self.model.generate(&prompt).await?;

        extract_quiz(&text)
    }
}

/// Build the prompt for the material
pub fn build_prompt(material: &Material<'_>) -> String {
    let mut prompt = PROMPT_INTRODUCTION.to_string();

    if let Some(description) = material.description.filter(|d| !d.is_empty()) {
        let _ = write!(prompt, "Note: {description}\n\n");
    }

    if let Some(vocabulary) = material.vocabulary.filter(|v| !v.is_empty()) {
        prompt.push_str("Vocabulary:\n");

        for (index, word) in vocabulary.iter().enumerate() {
            let _ = writeln!(prompt, "{}. {word}", index + 1);
        }
    }

    prompt.push_str(PROMPT_FORMAT);

    prompt
}

/// Best-effort extraction of the quiz from free text
///
/// Takes everything from the first `{` up to the last `}` and parses it as JSON
pub fn extract_quiz(text: &str) -> Result<Value> {
    let found = JSON_OBJECT
        .find(text)
        .ok_or(Error::InvalidResponseFormat)?;

    Ok(serde_json::from_str(found.as_str())?)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    use super::*;

    struct CannedModel {
        text: &'static str,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl GenerativeModel for CannedModel {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            Ok(self.text.to_string())
        }
    }

    fn generator(text: &'static str) -> (QuizGenerator, Arc<CannedModel>) {
        let model = Arc::new(CannedModel {
            text,
            calls: AtomicUsize::new(0),
        });

        (QuizGenerator::new(model.clone()), model)
    }

    #[test]
    fn test_build_prompt() {
        let vocabulary = vec!["寝る".to_string(), "起きる".to_string()];

        let prompt = build_prompt(&Material {
            title: Some("Sleeping"),
            description: Some("Verbs about sleep"),
            vocabulary: Some(&vocabulary),
        });

        assert!(prompt.starts_with(PROMPT_INTRODUCTION));
        assert!(prompt.contains("Note: Verbs about sleep\n\n"));
        assert!(prompt.contains("Vocabulary:\n1. 寝る\n2. 起きる\n"));
        assert!(prompt.contains(r#""questions": ["#));
        assert!(!prompt.contains("Sleeping"));
    }

    #[test]
    fn test_build_prompt_skips_empty_parts() {
        let prompt = build_prompt(&Material {
            title: Some("Sleeping"),
            description: Some(""),
            vocabulary: Some(&[]),
        });

        assert!(!prompt.contains("Note:"));
        assert!(!prompt.contains("Vocabulary:"));
    }

    #[test]
    fn test_extract_quiz_is_greedy() {
        let quiz = extract_quiz("```json\n{\"questions\": [{\"a\": {}}]}\n```").unwrap();
        assert_eq!(1, quiz["questions"].as_array().unwrap().len());

        // everything between the first and last brace is taken
        let result = extract_quiz("{\"a\": 1} and {\"b\": 2}");
        assert!(matches!(result, Err(Error::InvalidJson(_))));
    }

    #[test]
    fn test_extract_quiz_without_braces() {
        let result = extract_quiz("Sorry, I can not help with that");
        assert!(matches!(result, Err(Error::InvalidResponseFormat)));
    }

    #[tokio::test]
    async fn test_generate() {
        let (generator, model) = generator(
            r#"noise {"questions":[{"question":"Q","options":["A","B","C","D"],"correct":1,"explanation":"E"}]} trailing"#,
        );

        let quiz = generator
            .generate(&Material {
                title: Some("Title"),
                description: None,
                vocabulary: None,
            })
            .await
            .unwrap();

        let questions = quiz["questions"].as_array().unwrap();
        assert_eq!(1, questions.len());
        assert_eq!("Q", questions[0]["question"]);
        assert_eq!(4, questions[0]["options"].as_array().unwrap().len());
        assert_eq!(1, questions[0]["correct"]);
        assert_eq!("E", questions[0]["explanation"]);
        assert_eq!(1, model.calls.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_generate_without_material() {
        let (generator, model) = generator("{}");
        let vocabulary = Vec::new();

        let result = generator
            .generate(&Material {
                title: Some(""),
                description: None,
                vocabulary: Some(&vocabulary),
            })
            .await;

        assert!(matches!(result, Err(Error::MissingMaterial)));
        assert_eq!(0, model.calls.load(Ordering::SeqCst));
    }
}
