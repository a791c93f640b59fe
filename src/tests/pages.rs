use axum::http::StatusCode;

use crate::tests::helper;

#[tokio::test]
async fn test_pages() {
    let mut app = helper::setup_test_app();

    for (path, marker) in [
        ("/", "<title>Study Notes</title>"),
        ("/create-note", "<title>Create Note</title>"),
        ("/quiz", "<title>Quiz</title>"),
    ] {
        let (status_code, content_type, body) = helper::page(&mut app, path).await;
        assert_eq!(StatusCode::OK, status_code, "{path}");
        assert_eq!(Some("text/html".to_string()), content_type, "{path}");
        assert!(body.contains(marker), "{path}");
    }
}

#[tokio::test]
async fn test_static_assets() {
    let mut app = helper::setup_test_app();

    let (status_code, _, body) = helper::page(&mut app, "/app.js").await;
    assert_eq!(StatusCode::OK, status_code);
    assert!(body.contains("/api/notes"));

    let (status_code, content_type, _) = helper::page(&mut app, "/styles.css").await;
    assert_eq!(StatusCode::OK, status_code);
    assert_eq!(Some("text/css".to_string()), content_type);

    let (status_code, _, _) = helper::page(&mut app, "/missing.css").await;
    assert_eq!(StatusCode::NOT_FOUND, status_code);
}
