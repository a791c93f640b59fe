//! Notes API endpoints
//!
//! Notes are addressed by their date

use std::collections::HashMap;

use axum::Extension;
use serde::Deserialize;
use serde::Serialize;

use crate::notes::Note;
use crate::store::CreateNoteValues;
use crate::store::NoteStore;
use crate::store::UpdateNoteValues;

use super::Acknowledged;
use super::Error;
use super::Form;
use super::PathParameters;
use super::Success;
use super::required;

const NOT_FOUND: &str = "Note not found";

#[derive(Serialize)]
pub struct SavedNote {
    note: Note,
}

#[derive(Serialize)]
pub struct Message {
    message: &'static str,
}

/// List all notes, keyed by date
///
/// Request:
/// ```sh
/// curl -v http://localhost:3000/api/notes
/// ```
///
/// Response:
/// ```json
/// { "2024-05-01": { "id": "1714557600000", "date": "2024-05-01", "title": "Particles" ... } }
/// ```
pub async fn list(Extension(store): Extension<NoteStore>) -> Success<HashMap<String, Note>> {
    Success::ok(store.find_all_notes().await)
}

/// Get the note of a single date
///
/// Request:
/// ```sh
/// curl -v http://localhost:3000/api/notes/2024-05-01
/// ```
///
/// Response:
/// ```json
/// { "id": "1714557600000", "date": "2024-05-01", "title": "Particles" ... }
/// ```
pub async fn single(
    Extension(store): Extension<NoteStore>,
    PathParameters(date): PathParameters<String>,
) -> Result<Success<Note>, Error> {
    store
        .find_single_note_by_date(&date)
        .await
        .map(Success::ok)
        .ok_or_else(|| Error::not_found(NOT_FOUND))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteForm {
    date: Option<String>,
    title: Option<String>,
    youtube_link: Option<String>,
    description: Option<String>,
    vocabulary: Option<Vec<String>>,
}

/// Create the note of a date, replacing the existing note
///
/// Request:
/// ```sh
/// curl -v -H 'Content-Type: application/json' \
///     -d '{ "date": "2024-05-01", "title": "Particles", "vocabulary": ["は", "が"] }' \
///     http://localhost:3000/api/notes
/// ```
///
/// Response:
/// ```json
/// { "success": true, "note": { "id": "1714557600000", "date": "2024-05-01" ... } }
/// ```
pub async fn create(
    Extension(store): Extension<NoteStore>,
    Form(form): Form<CreateNoteForm>,
) -> Result<Success<Acknowledged<SavedNote>>, Error> {
    let (Some(date), Some(title)) = (required(form.date.as_ref()), required(form.title.as_ref()))
    else {
        return Err(Error::bad_request("Date and title are required"));
    };

    let values = CreateNoteValues {
        date,
        title,
        youtube_link: form.youtube_link.as_deref(),
        description: form.description.as_deref(),
        vocabulary: form.vocabulary.as_deref(),
    };

    let note = store.create_note(&values).await;

    tracing::debug!("Saved note for {date}");

    Ok(Success::ok(Acknowledged::new(SavedNote { note })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteForm {
    title: Option<String>,
    youtube_link: Option<String>,
    description: Option<String>,
    vocabulary: Option<Vec<String>>,
}

/// Replace the content of the note of a date
///
/// Request:
/// ```sh
/// curl -v -X PUT -H 'Content-Type: application/json' \
///     -d '{ "title": "Particles", "description": "wa versus ga" }' \
///     http://localhost:3000/api/notes/2024-05-01
/// ```
///
/// Response:
/// ```json
/// { "success": true, "note": { "id": "1714557600000", "updatedAt": "..." ... } }
/// ```
pub async fn update(
    Extension(store): Extension<NoteStore>,
    PathParameters(date): PathParameters<String>,
    form: Result<Form<UpdateNoteForm>, Error>,
) -> Result<Success<Acknowledged<SavedNote>>, Error> {
    // a missing note wins over an unreadable body
    let Form(form) = match form {
        Ok(form) => form,
        Err(err) => {
            return match store.find_single_note_by_date(&date).await {
                Some(_) => Err(err),
                None => Err(Error::not_found(NOT_FOUND)),
            };
        }
    };

    let values = UpdateNoteValues {
        title: form.title.as_deref(),
        youtube_link: form.youtube_link.as_deref(),
        description: form.description.as_deref(),
        vocabulary: form.vocabulary.as_deref(),
    };

    let note = store
        .update_note(&date, &values)
        .await
        .ok_or_else(|| Error::not_found(NOT_FOUND))?;

    tracing::debug!("Updated note for {date}");

    Ok(Success::ok(Acknowledged::new(SavedNote { note })))
}

/// Delete the note of a date
///
/// Request:
/// ```sh
/// curl -v -X DELETE http://localhost:3000/api/notes/2024-05-01
/// ```
///
/// Response:
/// ```json
/// { "success": true, "message": "Note deleted" }
/// ```
pub async fn delete(
    Extension(store): Extension<NoteStore>,
    PathParameters(date): PathParameters<String>,
) -> Result<Success<Acknowledged<Message>>, Error> {
    store
        .delete_note(&date)
        .await
        .ok_or_else(|| Error::not_found(NOT_FOUND))?;

    tracing::debug!("Deleted note for {date}");

    Ok(Success::ok(Acknowledged::new(Message {
        message: "Note deleted",
    })))
}
