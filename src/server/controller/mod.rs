//! HTTP request handlers.
//!
//! Controllers translate requests into service calls and service outcomes into status
//! codes and JSON bodies. They hold no state of their own.

pub mod activity;
pub mod root;
