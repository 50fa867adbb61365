//! The persisted diagram record.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A named, saved diagram.
///
/// Serializes as `{name, content, lastUpdated}` with `lastUpdated` as an
/// RFC 3339 string, which is the layout kept under
/// [`crate::config::STORAGE_KEY`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagram {
    /// Unique key within the saved collection.
    pub name: String,
    /// Diagram source text, stored verbatim.
    pub content: String,
    /// When the diagram was last saved.
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
}
