//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. They supply the
//! default values factories build from and in-memory models for conversion tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let activity = fixture::activity::entity_builder()
//!     .max_participants(2)
//!     .build();
//! ```

pub mod activity;

pub use activity::{entity as activity_entity, entity_builder as activity_entity_builder};
