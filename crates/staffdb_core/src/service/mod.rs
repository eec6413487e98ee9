//! Core use-case services.
//!
//! # Responsibility
//! - Enforce cross-entity rules the storage engine does not check.
//! - Convert repository outcomes into typed, non-panicking results for
//!   presentation callers.

pub mod employee_service;
