use axum::http::StatusCode;
use serde_json::json;

use crate::tests::helper;
use crate::tests::helper::CannedModel;

const ANSWER: &str = r#"noise {"questions":[{"question":"Q","options":["A","B","C","D"],"correct":1,"explanation":"E"}]} trailing"#;

#[tokio::test]
async fn test_generate_quiz() {
    let model = CannedModel::answering(ANSWER);
    let mut app = helper::setup_test_app_with_model(model.clone());

    let (status_code, questions, _) = helper::maybe_generate_quiz(
        &mut app,
        json!({
            "title": "Particles",
            "description": "wa versus ga",
            "vocabulary": ["は", "が"],
        }),
    )
    .await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!(
        Some(vec![helper::QuizQuestion {
            question: "Q".to_string(),
            options: vec![
                "A".to_string(),
                "B".to_string(),
                "C".to_string(),
                "D".to_string()
            ],
            correct: 1,
            explanation: "E".to_string(),
        }]),
        questions
    );
    assert_eq!(1, model.prompts());
}

#[tokio::test]
async fn test_generate_quiz_from_vocabulary_only() {
    let model = CannedModel::answering(ANSWER);
    let mut app = helper::setup_test_app_with_model(model.clone());

    let (status_code, questions, _) =
        helper::maybe_generate_quiz(&mut app, json!({ "vocabulary": ["本"] })).await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!(1, questions.unwrap().len());
}

#[tokio::test]
async fn test_generate_quiz_without_material() {
    let model = CannedModel::answering(ANSWER);
    let mut app = helper::setup_test_app_with_model(model.clone());

    let payloads = [
        json!({}),
        json!({ "title": "", "description": "", "vocabulary": [] }),
        json!({ "title": null, "vocabulary": null }),
    ];

    for payload in payloads {
        let (status_code, _, error) = helper::maybe_generate_quiz(&mut app, payload).await;
        assert_eq!(StatusCode::BAD_REQUEST, status_code);
        assert_eq!(
            Some("Title, description or vocabulary is required".to_string()),
            error
        );
    }

    // the model is never asked
    assert_eq!(0, model.prompts());
}

#[tokio::test]
async fn test_generate_quiz_without_json() {
    let mut app =
        helper::setup_test_app_with_model(CannedModel::answering("I can not make a quiz"));

    let (status_code, _, error) =
        helper::maybe_generate_quiz(&mut app, json!({ "title": "Particles" })).await;
    assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status_code);
    assert_eq!(
        Some("Failed to generate quiz: Invalid response format".to_string()),
        error
    );
}

#[tokio::test]
async fn test_generate_quiz_with_invalid_json() {
    let mut app = helper::setup_test_app_with_model(CannedModel::answering("{ questions: [] }"));

    let (status_code, _, error) =
        helper::maybe_generate_quiz(&mut app, json!({ "title": "Particles" })).await;
    assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status_code);
    assert!(error.unwrap().starts_with("Failed to generate quiz: Invalid quiz JSON"));
}

#[tokio::test]
async fn test_generate_quiz_model_failure() {
    let mut app = helper::setup_test_app_with_model(CannedModel::failing("HTTP 503"));

    let (status_code, _, error) =
        helper::maybe_generate_quiz(&mut app, json!({ "title": "Particles" })).await;
    assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status_code);
    assert_eq!(
        Some("Failed to generate quiz: Request failed: HTTP 503".to_string()),
        error
    );
}
