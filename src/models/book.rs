//! Book model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::enums::ReadingStatus;

/// Book record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    /// Free-form shelf category
    pub category: String,
    pub status: ReadingStatus,
    pub memo: Option<String>,
    /// Set by the storage layer on first persist, immutable afterwards
    pub registered_at: DateTime<Utc>,
    /// Derived: present exactly while the book is in `Completed` status
    pub completed_at: Option<DateTime<Utc>>,
}

/// Create book request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub category: String,
    pub status: ReadingStatus,
    pub memo: Option<String>,
}

/// Update book request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub title: String,
    pub author: String,
    pub category: String,
    pub status: ReadingStatus,
    pub memo: Option<String>,
}

/// Search filters, all optional; absent filters match everything
#[derive(Debug, Deserialize)]
pub struct BookSearchQuery {
    pub title: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub status: Option<ReadingStatus>,
}

/// Sort request for the sorted listing
#[derive(Debug, Deserialize)]
pub struct SortQuery {
    #[serde(rename = "sortBy")]
    pub sort_by: String,
}

impl Book {
    /// Merge an update payload onto the stored record.
    ///
    /// Copies exactly the mutable fields (title, author, category, status,
    /// memo); `id`, `registered_at` and `completed_at` are carried over from
    /// the stored record. `completed_at` is re-derived at persist time.
    pub fn apply_update(&self, data: &UpdateBook) -> Book {
        Book {
            id: self.id,
            title: data.title.clone(),
            author: data.author.clone(),
            category: data.category.clone(),
            status: data.status,
            memo: data.memo.clone(),
            registered_at: self.registered_at,
            completed_at: self.completed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn stored_book() -> Book {
        Book {
            id: 42,
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            category: "SciFi".to_string(),
            status: ReadingStatus::Completed,
            memo: None,
            registered_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            completed_at: Some(Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap()),
        }
    }

    #[test]
    fn apply_update_overwrites_mutable_fields() {
        let stored = stored_book();
        let merged = stored.apply_update(&UpdateBook {
            title: "Dune Messiah".to_string(),
            author: "Frank Herbert".to_string(),
            category: "Science Fiction".to_string(),
            status: ReadingStatus::Reading,
            memo: Some("sequel".to_string()),
        });

        assert_eq!(merged.title, "Dune Messiah");
        assert_eq!(merged.author, "Frank Herbert");
        assert_eq!(merged.category, "Science Fiction");
        assert_eq!(merged.status, ReadingStatus::Reading);
        assert_eq!(merged.memo.as_deref(), Some("sequel"));
    }

    #[test]
    fn apply_update_preserves_id_and_timestamps() {
        let stored = stored_book();
        let merged = stored.apply_update(&UpdateBook {
            title: "x".to_string(),
            author: "y".to_string(),
            category: "z".to_string(),
            status: ReadingStatus::Unread,
            memo: None,
        });

        assert_eq!(merged.id, stored.id);
        assert_eq!(merged.registered_at, stored.registered_at);
        assert_eq!(merged.completed_at, stored.completed_at);
    }

    #[test]
    fn book_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(stored_book()).unwrap();
        assert!(json.get("registeredAt").is_some());
        assert!(json.get("completedAt").is_some());
        assert_eq!(json["status"], "COMPLETED");
    }
}
