//! The four-step donation wizard.
//!
//! The wizard owns the draft record, gates step advancement on per-step
//! validation, and hands the finished draft to a [`crate::CatStore`] on
//! submission.

mod session;
pub use session::{State, Step, SubmitError, Wizard};

/// Per-step validation of the draft.
pub mod validate;
pub use validate::{validate, StepErrors};

/// Staging of locally encoded photos.
pub mod images;
