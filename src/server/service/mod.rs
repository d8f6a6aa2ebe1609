//! Service layer for business logic and orchestration.
//!
//! This module sits between the controller (API) layer and the data (repository) layer.
//! Services enforce the enrollment rules (capacity, duplicate signups), run seeding, and
//! assemble the read models returned to controllers.

pub mod activity;
