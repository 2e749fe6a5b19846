//! Domain models for the adoption marketplace.
//!
//! This module contains the draft record being assembled by the wizard,
//! the fixed breed and personality catalogues, field formatters, and
//! configuration.

/// The in-progress donation record and its catalogues.
pub mod record;
pub use record::{AgeUnit, CatDraft, Gender, BREEDS, MAX_IMAGES, MAX_PERSONALITY, PERSONALITY_TRAITS};

mod config;
pub use config::Config;

/// Input masking for postal codes and phone numbers.
pub mod format;
pub use format::{digits_only, format_phone, format_postal_code};

/// Partial updates to a draft, keyed by field.
pub mod patch;
pub use patch::{DraftPatch, Field};
