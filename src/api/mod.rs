//! All API endpoint setup

use axum::Router;
use axum::routing::get;
use axum::routing::post;

pub use request::Form;
pub use request::PathParameters;
pub use request::required;
pub use response::Acknowledged;
pub use response::Error;
pub use response::Success;

mod notes;
mod quiz;
mod request;
mod response;
mod time;

/// Get the Axum router for all API routes
pub fn router() -> Router {
    let notes = Router::new()
        .route("/", get(notes::list).post(notes::create))
        .route(
            "/{date}",
            get(notes::single).put(notes::update).delete(notes::delete),
        );

    Router::new()
        .nest("/notes", notes)
        .route("/generate-quiz", post(quiz::generate))
        .route("/current-time-wita", get(time::current_time))
}
