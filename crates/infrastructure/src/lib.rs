//! Persistence for customers, products and orders.
//!
//! This crate provides:
//! - [`Repository`] trait with create/update/find/find_all
//! - SQLite implementations for each entity, backed by a shared [`SqlitePool`]
//! - [`DatabaseConfig`] and helpers to open a pool and apply migrations

pub mod config;
pub mod customer;
pub mod db;
pub mod error;
pub mod order;
pub mod product;
pub mod repository;

pub use config::DatabaseConfig;
pub use customer::CustomerRepository;
pub use db::{connect, run_migrations};
pub use error::{RepositoryError, Result};
pub use order::OrderRepository;
pub use product::ProductRepository;
pub use repository::Repository;
pub use sqlx::SqlitePool;
