//! # Rota Core Library
//!
//! Task scheduling library with a calendar-date recurrence engine and a
//! SQLite-backed task store.
//!
//! ## Core Modules
//!
//! - [`rule`]: the repeat-rule grammar (`y` / `d` / `w` / `m`) and parser
//! - [`recurrence`]: next-occurrence computation for parsed rules
//! - [`date`]: the fixed-width `YYYYMMDD` date codec
//! - [`models`]: task data structures and transfer objects
//! - [`repository`]: data access layer with Repository pattern
//! - [`db`]: database connection and migration management
//! - [`error`]: error types
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use rota_core::{db, models::NewTaskData, repository::{SqliteRepository, TaskRepository}};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), rota_core::error::CoreError> {
//!     let pool = db::establish_connection("rota.db").await?;
//!     let repo = SqliteRepository::new(pool);
//!
//!     let task = repo
//!         .add_task(NewTaskData {
//!             title: "Water the plants".to_string(),
//!             repeat: "d 3".to_string(),
//!             ..Default::default()
//!         })
//!         .await?;
//!     println!("Created task {}", task.id);
//!
//!     Ok(())
//! }
//! ```

pub mod date;
pub mod db;
pub mod error;
pub mod models;
pub mod recurrence;
pub mod repository;
pub mod rule;
