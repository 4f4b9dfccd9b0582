// Rust guideline compliant 2026-10-15

//! Stockroom Core Library
//!
//! This crate provides the validation-and-mutation engine for Stockroom:
//! - Data models (Record, Category, Candidate)
//! - Validator (ordered rules, single rejection reason)
//! - Record store (insertion order, never-reused ids)
//! - Session state machine (form fields, error line, focus)
//! - Category icon table
//! - Configuration and error types

pub mod config;
pub mod error;
pub mod icons;
pub mod models;
pub mod session;
pub mod store;
pub mod validate;

pub use config::{CategorySet, Config, OutputFormat};
pub use error::{Error, Rejection, Result};
pub use icons::Icon;
pub use models::{Candidate, Category, Record};
pub use session::{Feedback, Field, Form, Session};
pub use store::RecordStore;
pub use validate::validate;
