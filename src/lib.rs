//! Cat-adoption marketplace core.
//!
//! A donation is assembled through a four-step wizard, validated per step,
//! and appended to a locally persisted catalogue.

pub mod domain;
pub use domain::{AgeUnit, CatDraft, Config, DraftPatch, Field, Gender};

/// Postal-code address resolution via the ViaCEP service.
pub mod lookup;
pub use lookup::{Address, ViaCep};

/// Persistence of finished donation records.
pub mod storage;
pub use storage::{CatStore, JsonStore, MemoryStore, PersistedCat, StoreError};

/// The multi-step donation wizard and its validation rules.
pub mod wizard;
pub use wizard::{State, Step, StepErrors, SubmitError, Wizard};
