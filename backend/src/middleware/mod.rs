//! Request middleware.
//!
//! Purpose: request lifecycle concerns shared by every route. API key
//! authentication is route-scoped and lives with the HTTP adapter.

pub mod trace;

pub use trace::Trace;
