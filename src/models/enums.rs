//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// ReadingStatus
// ---------------------------------------------------------------------------

/// Reading progress of a book.
///
/// Persisted as the `reading_status` PostgreSQL enum using the uppercase
/// variant names, which are also the JSON encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "reading_status", rename_all = "UPPERCASE")]
pub enum ReadingStatus {
    Unread,
    Reading,
    Completed,
}

impl std::fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ReadingStatus::Unread => "未読",
            ReadingStatus::Reading => "読書中",
            ReadingStatus::Completed => "読了",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// SortKey
// ---------------------------------------------------------------------------

/// Named sort strategies for the book listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    RegisteredDesc,
    RegisteredAsc,
    CompletedDesc,
    CompletedAsc,
    Title,
    Author,
}

impl SortKey {
    /// Parse a client-supplied sort key, case-insensitively.
    /// Unrecognized keys yield `None`; callers fall back to the storage order.
    pub fn parse(s: &str) -> Option<SortKey> {
        match s.to_lowercase().as_str() {
            "registered_desc" => Some(SortKey::RegisteredDesc),
            "registered_asc" => Some(SortKey::RegisteredAsc),
            "completed_desc" => Some(SortKey::CompletedDesc),
            "completed_asc" => Some(SortKey::CompletedAsc),
            "title" => Some(SortKey::Title),
            "author" => Some(SortKey::Author),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_status_serializes_to_uppercase_names() {
        assert_eq!(
            serde_json::to_string(&ReadingStatus::Unread).unwrap(),
            "\"UNREAD\""
        );
        assert_eq!(
            serde_json::to_string(&ReadingStatus::Completed).unwrap(),
            "\"COMPLETED\""
        );
        let parsed: ReadingStatus = serde_json::from_str("\"READING\"").unwrap();
        assert_eq!(parsed, ReadingStatus::Reading);
    }

    #[test]
    fn reading_status_rejects_unknown_values() {
        assert!(serde_json::from_str::<ReadingStatus>("\"PAUSED\"").is_err());
    }

    #[test]
    fn sort_key_parse_is_case_insensitive() {
        assert_eq!(SortKey::parse("registered_desc"), Some(SortKey::RegisteredDesc));
        assert_eq!(SortKey::parse("Registered_Desc"), Some(SortKey::RegisteredDesc));
        assert_eq!(SortKey::parse("TITLE"), Some(SortKey::Title));
        assert_eq!(SortKey::parse("author"), Some(SortKey::Author));
    }

    #[test]
    fn sort_key_parse_rejects_unknown_keys() {
        assert_eq!(SortKey::parse("isbn"), None);
        assert_eq!(SortKey::parse(""), None);
    }
}
