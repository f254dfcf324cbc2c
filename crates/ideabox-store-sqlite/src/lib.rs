//! # ideabox-store-sqlite
//!
//! SQLite adapter for the idea store.
//! Implements `IdeaRepository` over a single `ideas` table.

pub mod migrations;
mod query_builder;
pub mod repository;
mod repository_impl;
mod row_mapping;

pub use repository::SqliteIdeaRepository;
