//! Books repository

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, BookSearchQuery, CreateBook},
        enums::{ReadingStatus, SortKey},
    },
};

/// Derive the completion timestamp for a record about to be persisted.
///
/// Entering `Completed` stamps the current instant unless a stamp is already
/// present; any other status clears it. Applied on every write path so a
/// stored record can never pair `Completed` with a missing stamp, or a
/// non-`Completed` status with one.
pub fn derive_completed_at(
    status: ReadingStatus,
    previous: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    match status {
        ReadingStatus::Completed => previous.or(Some(now)),
        _ => None,
    }
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all books in storage order
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT * FROM books")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get a book by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Create a book. The id is assigned by the database; `registered_at` is
    /// stamped here and never touched again.
    pub async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        let now = Utc::now();
        let completed_at = derive_completed_at(data.status, None, now);

        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, category, status, memo, registered_at, completed_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.author)
        .bind(&data.category)
        .bind(data.status)
        .bind(&data.memo)
        .bind(now)
        .bind(completed_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Persist a merged record. Status and the derived completion stamp are
    /// written in one statement, so readers never see the pair inconsistent.
    pub async fn update(&self, book: &Book) -> AppResult<Book> {
        let completed_at = derive_completed_at(book.status, book.completed_at, Utc::now());

        sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = $1, author = $2, category = $3, status = $4, memo = $5, completed_at = $6
            WHERE id = $7
            RETURNING *
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.category)
        .bind(book.status)
        .bind(&book.memo)
        .bind(completed_at)
        .bind(book.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book {} not found", book.id)))
    }

    /// Delete a book
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        Ok(())
    }

    /// Search books; every supplied filter must match, absent filters are
    /// wildcards. Title and author match as case-insensitive substrings,
    /// category and status match exactly.
    pub async fn search(&self, query: &BookSearchQuery) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            r#"
            SELECT * FROM books
            WHERE ($1::text IS NULL OR title ILIKE '%' || $1 || '%')
              AND ($2::text IS NULL OR author ILIKE '%' || $2 || '%')
              AND ($3::text IS NULL OR category = $3)
              AND ($4::reading_status IS NULL OR status = $4::reading_status)
            "#,
        )
        .bind(&query.title)
        .bind(&query.author)
        .bind(&query.category)
        .bind(query.status)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// List all books ordered by the given sort strategy, or in storage order
    /// when no strategy is given.
    pub async fn sorted(&self, key: Option<SortKey>) -> AppResult<Vec<Book>> {
        let query = match key {
            Some(SortKey::RegisteredDesc) => "SELECT * FROM books ORDER BY registered_at DESC",
            Some(SortKey::RegisteredAsc) => "SELECT * FROM books ORDER BY registered_at ASC",
            Some(SortKey::CompletedDesc) => "SELECT * FROM books ORDER BY completed_at DESC",
            Some(SortKey::CompletedAsc) => "SELECT * FROM books ORDER BY completed_at ASC",
            Some(SortKey::Title) => "SELECT * FROM books ORDER BY title ASC",
            Some(SortKey::Author) => "SELECT * FROM books ORDER BY author ASC",
            None => "SELECT * FROM books",
        };

        let rows = sqlx::query_as::<_, Book>(query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Distinct category values, ascending
    pub async fn categories(&self) -> AppResult<Vec<String>> {
        let rows: Vec<String> =
            sqlx::query_scalar("SELECT DISTINCT category FROM books ORDER BY category")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }
}
