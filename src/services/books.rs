//! Books service

use crate::{
    error::AppResult,
    models::{
        book::{Book, BookSearchQuery, CreateBook, UpdateBook},
        enums::SortKey,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        self.repository.books.create(data).await
    }

    /// Update a book: read the stored record, overwrite its mutable fields
    /// from the payload, persist. Identity and registration time always come
    /// from the stored record.
    pub async fn update(&self, id: i64, data: &UpdateBook) -> AppResult<Book> {
        let existing = self.repository.books.get_by_id(id).await?;
        let merged = existing.apply_update(data);
        self.repository.books.update(&merged).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.books.delete(id).await
    }

    pub async fn search(&self, query: &BookSearchQuery) -> AppResult<Vec<Book>> {
        self.repository.books.search(query).await
    }

    /// List books ordered by a named sort strategy. Unrecognized keys fall
    /// back to the storage order rather than failing.
    pub async fn sorted_by(&self, sort_by: &str) -> AppResult<Vec<Book>> {
        self.repository.books.sorted(SortKey::parse(sort_by)).await
    }

    pub async fn categories(&self) -> AppResult<Vec<String>> {
        self.repository.books.categories().await
    }
}
