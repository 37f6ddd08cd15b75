//! API handlers for Shiori REST endpoints

pub mod books;
pub mod health;
pub mod openapi;
