//! Database repository layer.
//!
//! Repositories handle the CRUD operations for activities and participant records. They
//! use SeaORM entity models internally and return domain models from `server::model`, so
//! the service layer never touches entities directly.

pub mod activity;
pub mod participant;
