//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let activity = factory::create_activity(&db).await?;
//!     factory::create_participant(&db, &activity.name, "student@mergington.edu").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let activity = factory::activity::ActivityFactory::new(&db)
//!     .name("Chess Club")
//!     .max_participants(1)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `activity` - Create activity entities
//! - `participant` - Create participant records
//! - `helpers` - Unique ID generation and multi-entity helpers

pub mod activity;
pub mod helpers;
pub mod participant;

// Re-export commonly used factory functions for concise usage
pub use activity::create_activity;
pub use helpers::create_activity_with_participants;
pub use participant::create_participant;
