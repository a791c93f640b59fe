//! Quiz API endpoint

use axum::Extension;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::quiz::Error as QuizError;
use crate::quiz::Material;
use crate::quiz::QuizGenerator;

use super::Acknowledged;
use super::Error;
use super::Form;
use super::Success;

#[derive(Debug, Deserialize)]
pub struct GenerateQuizForm {
    title: Option<String>,
    description: Option<String>,
    vocabulary: Option<Vec<String>>,
}

#[derive(Serialize)]
pub struct GeneratedQuiz {
    quiz: Value,
}

/// Generate a quiz from the content of a note
///
/// Request:
/// ```sh
/// curl -v -H 'Content-Type: application/json' \
///     -d '{ "title": "Particles", "vocabulary": ["は", "が"] }' \
///     http://localhost:3000/api/generate-quiz
/// ```
///
/// Response:
/// ```json
/// { "success": true, "quiz": { "questions": [ { "question": "...", "options": [...] ... } ] } }
/// ```
pub async fn generate(
    Extension(generator): Extension<QuizGenerator>,
    Form(form): Form<GenerateQuizForm>,
) -> Result<Success<Acknowledged<GeneratedQuiz>>, Error> {
    let material = Material {
        title: form.title.as_deref(),
        description: form.description.as_deref(),
        vocabulary: form.vocabulary.as_deref(),
    };

    match generator.generate(&material).await {
        Ok(quiz) => Ok(Success::ok(Acknowledged::new(GeneratedQuiz { quiz }))),
        Err(err @ QuizError::MissingMaterial) => Err(Error::bad_request(err)),
        Err(err) => {
            tracing::error!("Error generating quiz: {err}");

            Err(Error::internal_server_error(format!(
                "Failed to generate quiz: {err}"
            )))
        }
    }
}
