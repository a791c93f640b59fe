use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use serde::Serializer;

use crate::time::format_iso_millis;

/// A study note, one per date
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Creation instant in milliseconds since the epoch
    pub id: String,

    /// The date the note belongs to, unique across all notes
    pub date: String,

    /// Link to the video the note is about, empty when not set
    pub youtube_link: String,

    /// Title of the note
    ///
    /// Always set on creation, an update without title clears it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    pub description: String,

    pub vocabulary: Vec<String>,

    #[serde(serialize_with = "iso_millis")]
    pub created_at: DateTime<Utc>,

    #[serde(
        serialize_with = "iso_millis_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

fn iso_millis<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_iso_millis(timestamp))
}

#[allow(clippy::ref_option)]
fn iso_millis_optional<S>(
    timestamp: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match timestamp {
        Some(timestamp) => iso_millis(timestamp, serializer),
        None => serializer.serialize_none(),
    }
}
