//! Storage layer
//!
//! Uses SQLite (embedded) through sqlx. The `Database` implements the store
//! ports from `marquee-core`, so the query layer never sees SQL.

pub mod db;

pub use db::Database;
