use super::session::Step;
use crate::domain::{digits_only, CatDraft, Field};

/// Minimum description length accepted by step 1.
pub const MIN_DESCRIPTION_LEN: usize = 20;

/// Minimum number of digits for a valid WhatsApp number.
pub const MIN_WHATSAPP_DIGITS: usize = 10;

const MSG_NAME_REQUIRED: &str = "Nome e obrigatorio";
const MSG_AGE_REQUIRED: &str = "Idade e obrigatoria";
const MSG_BREED_REQUIRED: &str = "Selecione uma raca";
const MSG_DESCRIPTION_REQUIRED: &str = "Descricao e obrigatoria";
const MSG_DESCRIPTION_TOO_SHORT: &str = "Descricao deve ter pelo menos 20 caracteres";
const MSG_PERSONALITY_REQUIRED: &str = "Selecione pelo menos uma caracteristica";
const MSG_IMAGES_REQUIRED: &str = "Adicione pelo menos uma foto";
const MSG_CEP_REQUIRED: &str = "CEP e obrigatorio";
const MSG_CITY_REQUIRED: &str = "Cidade e obrigatoria";
const MSG_NEIGHBORHOOD_REQUIRED: &str = "Bairro e obrigatorio";
const MSG_OWNER_NAME_REQUIRED: &str = "Seu nome e obrigatorio";
const MSG_WHATSAPP_REQUIRED: &str = "WhatsApp e obrigatorio";
const MSG_WHATSAPP_INVALID: &str = "WhatsApp invalido";

/// Validation errors for a single step, one optional message per field.
///
/// A closed struct rather than an open map so the set of validatable
/// fields is statically checkable. An empty value means the step passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepErrors {
    /// Error on the cat's name.
    pub name: Option<String>,
    /// Error on the cat's age.
    pub age: Option<String>,
    /// Error on the breed selection.
    pub breed: Option<String>,
    /// Error on the description.
    pub description: Option<String>,
    /// Error on the personality selection.
    pub personality: Option<String>,
    /// Error on the photo list.
    pub images: Option<String>,
    /// Error on the postal code.
    pub postal_code: Option<String>,
    /// Error on the city.
    pub city: Option<String>,
    /// Error on the neighborhood.
    pub neighborhood: Option<String>,
    /// Error on the owner's name.
    pub owner_name: Option<String>,
    /// Error on the WhatsApp number.
    pub owner_whatsapp: Option<String>,
}

impl StepErrors {
    /// `true` if no field has an error, i.e. the step passed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.breed.is_none()
            && self.description.is_none()
            && self.personality.is_none()
            && self.images.is_none()
            && self.postal_code.is_none()
            && self.city.is_none()
            && self.neighborhood.is_none()
            && self.owner_name.is_none()
            && self.owner_whatsapp.is_none()
    }

    /// Clear the error for a single field, if that field carries errors.
    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Age => self.age = None,
            Field::Breed => self.breed = None,
            Field::Description => self.description = None,
            Field::Personality => self.personality = None,
            Field::Images => self.images = None,
            Field::PostalCode => self.postal_code = None,
            Field::City => self.city = None,
            Field::Neighborhood => self.neighborhood = None,
            Field::OwnerName => self.owner_name = None,
            Field::OwnerWhatsapp => self.owner_whatsapp = None,
            _ => {}
        }
    }

    /// Iterate over the fields that currently carry an error.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        [
            (Field::Name, &self.name),
            (Field::Age, &self.age),
            (Field::Breed, &self.breed),
            (Field::Description, &self.description),
            (Field::Personality, &self.personality),
            (Field::Images, &self.images),
            (Field::PostalCode, &self.postal_code),
            (Field::City, &self.city),
            (Field::Neighborhood, &self.neighborhood),
            (Field::OwnerName, &self.owner_name),
            (Field::OwnerWhatsapp, &self.owner_whatsapp),
        ]
        .into_iter()
        .filter_map(|(field, msg)| msg.as_deref().map(|m| (field, m)))
    }
}

/// Validate one step of the draft.
///
/// Pure and deterministic; only the rules of the given step are checked,
/// so a passing step 1 implies nothing about step 3. An empty
/// [`StepErrors`] means the step is valid.
#[must_use]
pub fn validate(step: Step, draft: &CatDraft) -> StepErrors {
    let mut errors = StepErrors::default();

    match step {
        Step::CatInfo => {
            if draft.name.trim().is_empty() {
                errors.name = Some(MSG_NAME_REQUIRED.to_string());
            }
            if draft.age.trim().is_empty() {
                errors.age = Some(MSG_AGE_REQUIRED.to_string());
            }
            if draft.breed.is_empty() {
                errors.breed = Some(MSG_BREED_REQUIRED.to_string());
            }
            if draft.description.trim().is_empty() {
                errors.description = Some(MSG_DESCRIPTION_REQUIRED.to_string());
            }
            // Last check wins: a short description overrides the
            // required-field message. Counted in characters, not bytes,
            // so accented text is measured the way the user sees it.
            if draft.description.chars().count() < MIN_DESCRIPTION_LEN {
                errors.description = Some(MSG_DESCRIPTION_TOO_SHORT.to_string());
            }
            if draft.personality.is_empty() {
                errors.personality = Some(MSG_PERSONALITY_REQUIRED.to_string());
            }
        }
        Step::Photos => {
            if draft.images.is_empty() {
                errors.images = Some(MSG_IMAGES_REQUIRED.to_string());
            }
        }
        Step::Location => {
            if draft.postal_code.trim().is_empty() {
                errors.postal_code = Some(MSG_CEP_REQUIRED.to_string());
            }
            if draft.city.trim().is_empty() {
                errors.city = Some(MSG_CITY_REQUIRED.to_string());
            }
            if draft.neighborhood.trim().is_empty() {
                errors.neighborhood = Some(MSG_NEIGHBORHOOD_REQUIRED.to_string());
            }
        }
        Step::Contact => {
            if draft.owner_name.trim().is_empty() {
                errors.owner_name = Some(MSG_OWNER_NAME_REQUIRED.to_string());
            }
            if draft.owner_whatsapp.trim().is_empty() {
                errors.owner_whatsapp = Some(MSG_WHATSAPP_REQUIRED.to_string());
            }
            // Last check wins, matching step 1's description pattern.
            if digits_only(&draft.owner_whatsapp).len() < MIN_WHATSAPP_DIGITS {
                errors.owner_whatsapp = Some(MSG_WHATSAPP_INVALID.to_string());
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::{validate, Step, StepErrors, MSG_DESCRIPTION_TOO_SHORT, MSG_WHATSAPP_INVALID};
    use crate::domain::CatDraft;

    fn valid_step1_draft() -> CatDraft {
        CatDraft {
            name: "Luna".to_string(),
            age: "2".to_string(),
            breed: "Siames".to_string(),
            description: "Uma gatinha muito carinhosa e brincalhona".to_string(),
            personality: vec!["Carinhoso".to_string()],
            ..CatDraft::default()
        }
    }

    #[test]
    fn step1_valid_draft_passes() {
        assert_eq!(validate(Step::CatInfo, &valid_step1_draft()), StepErrors::default());
    }

    #[test]
    fn step1_empty_draft_reports_every_field() {
        let errors = validate(Step::CatInfo, &CatDraft::default());
        assert!(errors.name.is_some());
        assert!(errors.age.is_some());
        assert!(errors.breed.is_some());
        assert!(errors.description.is_some());
        assert!(errors.personality.is_some());
        assert_eq!(errors.iter().count(), 5);
    }

    #[test]
    fn step1_short_description_reports_length_not_required() {
        let draft = CatDraft {
            description: "so dezenove letras!".to_string(), // 19 chars
            ..valid_step1_draft()
        };
        assert_eq!(draft.description.len(), 19);

        let errors = validate(Step::CatInfo, &draft);
        assert_eq!(errors.description.as_deref(), Some(MSG_DESCRIPTION_TOO_SHORT));
    }

    #[test]
    fn step1_description_length_counts_characters_not_bytes() {
        // 19 characters but 21 bytes in UTF-8: still too short.
        let draft = CatDraft {
            description: "dócil, calma e só a".to_string(),
            ..valid_step1_draft()
        };
        assert_eq!(draft.description.chars().count(), 19);
        assert!(draft.description.len() > 19);

        let errors = validate(Step::CatInfo, &draft);
        assert_eq!(errors.description.as_deref(), Some(MSG_DESCRIPTION_TOO_SHORT));
    }

    #[test]
    fn step1_accented_description_of_twenty_characters_passes() {
        let draft = CatDraft {
            description: "dócil, calma e sócia".to_string(),
            ..valid_step1_draft()
        };
        assert_eq!(draft.description.chars().count(), 20);
        assert!(validate(Step::CatInfo, &draft).description.is_none());
    }

    #[test]
    fn step2_requires_at_least_one_image() {
        let mut draft = CatDraft::default();
        assert!(validate(Step::Photos, &draft).images.is_some());

        draft.images.push("data:image/png;base64,AAAA".to_string());
        assert!(validate(Step::Photos, &draft).is_empty());
    }

    #[test]
    fn step3_street_and_state_never_required() {
        let draft = CatDraft {
            postal_code: "01310-930".to_string(),
            city: "Sao Paulo".to_string(),
            neighborhood: "Bela Vista".to_string(),
            ..CatDraft::default()
        };
        assert!(validate(Step::Location, &draft).is_empty());
    }

    #[test]
    fn step4_short_whatsapp_is_invalid() {
        let draft = CatDraft {
            owner_name: "Maria".to_string(),
            owner_whatsapp: "(11) 987".to_string(),
            ..CatDraft::default()
        };
        let errors = validate(Step::Contact, &draft);
        assert_eq!(errors.owner_whatsapp.as_deref(), Some(MSG_WHATSAPP_INVALID));
    }

    #[test]
    fn step4_masked_whatsapp_counts_digits_only() {
        let draft = CatDraft {
            owner_name: "Maria".to_string(),
            owner_whatsapp: "(11) 98765-4321".to_string(),
            ..CatDraft::default()
        };
        assert!(validate(Step::Contact, &draft).is_empty());
    }

    #[test]
    fn steps_are_independent() {
        // A draft failing step 1 can still pass step 3.
        let draft = CatDraft {
            postal_code: "01310-930".to_string(),
            city: "Sao Paulo".to_string(),
            neighborhood: "Bela Vista".to_string(),
            ..CatDraft::default()
        };
        assert!(!validate(Step::CatInfo, &draft).is_empty());
        assert!(validate(Step::Location, &draft).is_empty());
    }
}
