use tracing::instrument;

use super::validate::{validate, StepErrors};
use crate::{
    domain::{digits_only, format_postal_code, CatDraft, DraftPatch},
    lookup::Address,
    storage::{CatStore, PersistedCat, StoreError},
};

/// Length of a fully entered postal code, in digits.
const POSTAL_CODE_DIGITS: usize = 8;

/// One of the four editing steps of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    /// Step 1: name, age, breed, description, personality, health.
    CatInfo,
    /// Step 2: photos.
    Photos,
    /// Step 3: postal code and address.
    Location,
    /// Step 4: owner contact details.
    Contact,
}

impl Step {
    /// The 1-based step number shown to the user.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::CatInfo => 1,
            Self::Photos => 2,
            Self::Location => 3,
            Self::Contact => 4,
        }
    }

    /// The following step, saturating at [`Step::Contact`].
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::CatInfo => Self::Photos,
            Self::Photos => Self::Location,
            Self::Location | Self::Contact => Self::Contact,
        }
    }

    /// The preceding step, saturating at [`Step::CatInfo`].
    #[must_use]
    pub const fn back(self) -> Self {
        match self {
            Self::CatInfo | Self::Photos => Self::CatInfo,
            Self::Location => Self::Photos,
            Self::Contact => Self::Location,
        }
    }
}

/// The wizard's current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Editing one of the four steps.
    Editing(Step),
    /// A submission is in flight.
    Submitting,
    /// The donation was persisted; the session can be [`Wizard::reset`].
    Success,
}

/// Error returned by [`Wizard::submit`].
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The wizard is not on the contact step (or a submission already
    /// ran); nothing was persisted.
    #[error("submission is only possible from the contact step")]
    NotReady,
    /// Step-4 validation failed; the field errors are surfaced on the
    /// session.
    #[error("the contact step has validation errors")]
    Invalid,
    /// The store rejected the record. The wizard returns to the contact
    /// step so the submission can be retried.
    #[error("failed to persist the donation")]
    Store(#[from] StoreError),
}

/// The donation wizard session.
///
/// Owns the draft, the current step and the per-field error state.
/// All transitions are explicit methods so the machine can be driven by
/// any boundary: the interactive CLI, tests, or a future UI.
#[derive(Debug, Clone)]
pub struct Wizard {
    state: State,
    draft: CatDraft,
    errors: StepErrors,
    submit_error: Option<String>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self {
            state: State::Editing(Step::CatInfo),
            draft: CatDraft::default(),
            errors: StepErrors::default(),
            submit_error: None,
        }
    }
}

impl Wizard {
    /// A fresh session on step 1 with an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    /// The draft being assembled.
    #[must_use]
    pub const fn draft(&self) -> &CatDraft {
        &self.draft
    }

    /// The current per-field validation errors.
    #[must_use]
    pub const fn errors(&self) -> &StepErrors {
        &self.errors
    }

    /// The banner message from a failed submission, if any.
    #[must_use]
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Merge a partial update into the draft.
    ///
    /// Allowed in any state except `Submitting`. Errors on the updated
    /// fields are cleared optimistically; nothing is re-validated until
    /// the next [`advance`](Self::advance) or [`submit`](Self::submit).
    pub fn update(&mut self, patch: DraftPatch) {
        if self.state == State::Submitting {
            return;
        }
        for field in patch.apply(&mut self.draft) {
            self.errors.clear(field);
        }
    }

    /// Set the postal code from raw input, applying the display mask.
    ///
    /// Returns `true` when the normalized code has exactly eight digits,
    /// i.e. when the caller should fire an address lookup.
    pub fn set_postal_code(&mut self, raw: &str) -> bool {
        self.update(DraftPatch {
            postal_code: Some(format_postal_code(raw)),
            ..DraftPatch::default()
        });
        digits_only(raw).len() == POSTAL_CODE_DIGITS
    }

    /// Auto-fill the address fields from a successful lookup.
    ///
    /// City and neighborhood remain user-editable afterwards; a failed
    /// lookup should simply not call this, leaving the draft untouched.
    pub fn apply_address(&mut self, address: &Address) {
        self.update(DraftPatch {
            street: Some(address.street.clone()),
            neighborhood: Some(address.neighborhood.clone()),
            city: Some(address.city.clone()),
            state: Some(address.state.clone()),
            ..DraftPatch::default()
        });
    }

    /// Validate the current step and, if it passes, move to the next one.
    ///
    /// Returns `true` on advancement. On failure the wizard stays put and
    /// the errors are surfaced via [`errors`](Self::errors).
    pub fn advance(&mut self) -> bool {
        let State::Editing(step) = self.state else {
            return false;
        };
        self.errors = validate(step, &self.draft);
        if self.errors.is_empty() {
            self.state = State::Editing(step.next());
            true
        } else {
            false
        }
    }

    /// Move to the previous step unconditionally (no validation).
    pub fn retreat(&mut self) {
        if let State::Editing(step) = self.state {
            self.state = State::Editing(step.back());
        }
    }

    /// Submit the finished draft to the store.
    ///
    /// Only callable from the contact step; step 4 is re-validated first
    /// (the same gate as [`advance`](Self::advance)). On success the
    /// wizard moves to [`State::Success`]. On a store failure it returns
    /// to the contact step with a retryable banner. Re-entry while
    /// submitting or after success is rejected without touching the
    /// store.
    ///
    /// # Errors
    ///
    /// See [`SubmitError`].
    #[instrument(skip(self, store))]
    pub fn submit<S: CatStore>(&mut self, store: &mut S) -> Result<PersistedCat, SubmitError> {
        if self.state != State::Editing(Step::Contact) {
            return Err(SubmitError::NotReady);
        }
        self.errors = validate(Step::Contact, &self.draft);
        if !self.errors.is_empty() {
            return Err(SubmitError::Invalid);
        }

        self.state = State::Submitting;
        self.submit_error = None;

        let record = PersistedCat::from_draft(&self.draft);
        match store.append(record.clone()) {
            Ok(()) => {
                self.state = State::Success;
                Ok(record)
            }
            Err(e) => {
                // Retryable: back to the contact step with a banner.
                self.state = State::Editing(Step::Contact);
                self.submit_error = Some(format!("Nao foi possivel publicar o anuncio: {e}"));
                Err(SubmitError::Store(e))
            }
        }
    }

    /// Return to step 1 with an empty draft, for "submit another".
    ///
    /// Only meaningful from [`State::Success`]; a no-op elsewhere.
    pub fn reset(&mut self) {
        if self.state == State::Success {
            *self = Self::new();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{State, Step, SubmitError, Wizard};
    use crate::{
        domain::{CatDraft, DraftPatch},
        lookup::Address,
        storage::{CatStore, MemoryStore, PersistedCat, StoreError},
    };

    fn filled_draft() -> CatDraft {
        CatDraft {
            name: "Luna".to_string(),
            age: "2".to_string(),
            breed: "Siames".to_string(),
            description: "Uma gatinha muito carinhosa e brincalhona".to_string(),
            personality: vec!["Carinhoso".to_string()],
            images: vec!["data:image/png;base64,AAAA".to_string()],
            postal_code: "01310-930".to_string(),
            city: "Sao Paulo".to_string(),
            neighborhood: "Bela Vista".to_string(),
            owner_name: "Maria".to_string(),
            owner_whatsapp: "11987654321".to_string(),
            ..CatDraft::default()
        }
    }

    fn wizard_on_contact_step() -> Wizard {
        let mut wizard = Wizard::new();
        wizard.update(DraftPatch {
            name: Some(filled_draft().name),
            age: Some(filled_draft().age),
            breed: Some(filled_draft().breed),
            description: Some(filled_draft().description),
            personality: Some(filled_draft().personality),
            images: Some(filled_draft().images),
            postal_code: Some(filled_draft().postal_code),
            city: Some(filled_draft().city),
            neighborhood: Some(filled_draft().neighborhood),
            owner_name: Some(filled_draft().owner_name),
            owner_whatsapp: Some(filled_draft().owner_whatsapp),
            ..DraftPatch::default()
        });
        assert!(wizard.advance());
        assert!(wizard.advance());
        assert!(wizard.advance());
        assert_eq!(wizard.state(), State::Editing(Step::Contact));
        wizard
    }

    /// A store that always fails, for exercising the retry path.
    struct FailingStore;

    impl CatStore for FailingStore {
        fn append(&mut self, _cat: PersistedCat) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk full")))
        }

        fn list_all(&self) -> Result<Vec<PersistedCat>, StoreError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn starts_on_step_one_with_empty_draft() {
        let wizard = Wizard::new();
        assert_eq!(wizard.state(), State::Editing(Step::CatInfo));
        assert_eq!(wizard.draft(), &CatDraft::default());
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn advance_blocks_on_invalid_step() {
        let mut wizard = Wizard::new();
        assert!(!wizard.advance());
        assert_eq!(wizard.state(), State::Editing(Step::CatInfo));
        assert!(!wizard.errors().is_empty());
    }

    #[test]
    fn update_clears_errors_for_touched_fields_only() {
        let mut wizard = Wizard::new();
        wizard.advance();
        assert!(wizard.errors().name.is_some());
        assert!(wizard.errors().age.is_some());

        wizard.update(DraftPatch {
            name: Some("Luna".to_string()),
            ..DraftPatch::default()
        });
        assert!(wizard.errors().name.is_none());
        assert!(wizard.errors().age.is_some());
    }

    #[test]
    fn retreat_never_validates_and_clamps_at_step_one() {
        let mut wizard = Wizard::new();
        wizard.retreat();
        assert_eq!(wizard.state(), State::Editing(Step::CatInfo));
    }

    #[test]
    fn set_postal_code_masks_and_gates_lookup() {
        let mut wizard = Wizard::new();
        assert!(!wizard.set_postal_code("01310"));
        assert_eq!(wizard.draft().postal_code, "01310");

        assert!(wizard.set_postal_code("01310930"));
        assert_eq!(wizard.draft().postal_code, "01310-930");
    }

    #[test]
    fn apply_address_fills_location_fields() {
        let mut wizard = Wizard::new();
        wizard.apply_address(&Address {
            postal_code: "01310-930".to_string(),
            street: "Avenida Paulista".to_string(),
            neighborhood: "Bela Vista".to_string(),
            city: "Sao Paulo".to_string(),
            state: "SP".to_string(),
        });
        assert_eq!(wizard.draft().city, "Sao Paulo");
        assert_eq!(wizard.draft().state, "SP");
    }

    #[test]
    fn submit_persists_exactly_one_record() {
        let mut wizard = wizard_on_contact_step();
        let mut store = MemoryStore::default();

        let record = wizard.submit(&mut store).unwrap();
        assert_eq!(wizard.state(), State::Success);
        assert!(!record.id.is_empty());

        // A second submit must not append another record.
        assert!(matches!(wizard.submit(&mut store), Err(SubmitError::NotReady)));
        assert_eq!(store.list_all().unwrap().len(), 1);
    }

    #[test]
    fn submit_rejected_before_contact_step() {
        let mut wizard = Wizard::new();
        let mut store = MemoryStore::default();
        assert!(matches!(wizard.submit(&mut store), Err(SubmitError::NotReady)));
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn submit_with_invalid_contact_surfaces_errors() {
        let mut wizard = wizard_on_contact_step();
        wizard.update(DraftPatch {
            owner_whatsapp: Some("119".to_string()),
            ..DraftPatch::default()
        });

        let mut store = MemoryStore::default();
        assert!(matches!(wizard.submit(&mut store), Err(SubmitError::Invalid)));
        assert!(wizard.errors().owner_whatsapp.is_some());
        assert_eq!(wizard.state(), State::Editing(Step::Contact));
    }

    #[test]
    fn store_failure_returns_to_contact_with_banner() {
        let mut wizard = wizard_on_contact_step();

        let result = wizard.submit(&mut FailingStore);
        assert!(matches!(result, Err(SubmitError::Store(_))));
        assert_eq!(wizard.state(), State::Editing(Step::Contact));
        assert!(wizard.submit_error().is_some());

        // The draft survives, so the submission can be retried.
        let mut store = MemoryStore::default();
        wizard.submit(&mut store).unwrap();
        assert_eq!(wizard.state(), State::Success);
        assert!(wizard.submit_error().is_none());
    }

    #[test]
    fn reset_only_applies_after_success() {
        let mut wizard = wizard_on_contact_step();
        wizard.reset();
        assert_eq!(wizard.state(), State::Editing(Step::Contact));

        let mut store = MemoryStore::default();
        wizard.submit(&mut store).unwrap();
        wizard.reset();
        assert_eq!(wizard.state(), State::Editing(Step::CatInfo));
        assert_eq!(wizard.draft(), &CatDraft::default());
    }

    #[test]
    fn end_to_end_submission_normalizes_whatsapp_and_renders_age() {
        let mut wizard = Wizard::new();
        let draft = filled_draft();
        wizard.update(DraftPatch {
            name: Some(draft.name),
            age: Some(draft.age),
            breed: Some(draft.breed),
            description: Some(draft.description),
            personality: Some(draft.personality),
            ..DraftPatch::default()
        });
        assert!(wizard.advance());

        wizard.update(DraftPatch {
            images: Some(vec!["data:image/png;base64,AAAA".to_string()]),
            ..DraftPatch::default()
        });
        assert!(wizard.advance());

        assert!(wizard.set_postal_code("01310930"));
        wizard.update(DraftPatch {
            city: Some("Sao Paulo".to_string()),
            neighborhood: Some("Bela Vista".to_string()),
            ..DraftPatch::default()
        });
        assert!(wizard.advance());

        wizard.update(DraftPatch {
            owner_name: Some("Maria".to_string()),
            owner_whatsapp: Some("(11) 98765-4321".to_string()),
            ..DraftPatch::default()
        });

        let mut store = MemoryStore::default();
        let record = wizard.submit(&mut store).unwrap();

        assert_eq!(record.owner.whatsapp, "11987654321");
        assert!(!record.id.is_empty());
        assert_eq!(record.age, "2 anos");
        assert_eq!(record.location.city, "Sao Paulo");
        assert_eq!(store.list_all().unwrap().len(), 1);
    }
}
