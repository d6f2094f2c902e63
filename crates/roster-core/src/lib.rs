//! Roster Core Library
//!
//! In-memory patient roster with validated fields, sequential identifiers,
//! and binary-search lookup.
//!
//! # Data flow
//!
//! ```text
//! user input → validation → store mutation (add / update / delete)
//!                         → lookup (get / list)
//!                                  │
//!                                  ▼
//!                           console output
//! ```
//!
//! Identifiers are assigned in strictly increasing order, so the store's
//! backing sequence is always sorted ascending by id and lookup stays
//! O(log n). Nothing is persisted; the roster lives for the session.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Patient, PatientDetails, PatientUpdate)
//! - [`validate`]: Date-of-birth and phone-number format checks
//! - [`store`]: Ordered record store and binary-search lookup

pub mod models;
pub mod store;
pub mod validate;

// Re-export commonly used types
pub use models::{Patient, PatientDetails, PatientUpdate};
pub use store::{PatientStore, StoreError, StoreResult};
pub use validate::{validate_date_of_birth, validate_phone_number, ValidationError};
