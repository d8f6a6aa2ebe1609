//! SeaORM entities for the activities database.

pub mod prelude;

pub mod activity;
pub mod participant;
