//! Shared types and models for the weather evaluation API
//!
//! This crate contains the wire-level response shapes and the ordinal
//! classifications (tendencies, Beaufort bands) shared between the backend
//! and API consumers.

pub mod models;

pub use models::*;
