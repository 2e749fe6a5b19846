use serde::{Deserialize, Serialize};

/// Maximum number of photos attached to a single donation.
///
/// The first photo is always treated as the cover image.
pub const MAX_IMAGES: usize = 5;

/// Maximum number of personality traits that can be selected.
pub const MAX_PERSONALITY: usize = 5;

/// The fixed breed catalogue offered by the form.
///
/// The last entry, "Outro", is the catch-all for unlisted breeds.
pub const BREEDS: [&str; 12] = [
    "Vira-lata",
    "Siames",
    "Persa",
    "Maine Coon",
    "Angora",
    "Bengal",
    "Ragdoll",
    "British Shorthair",
    "Laranjinha",
    "Frajola",
    "Malhado",
    "Outro",
];

/// The fixed personality-trait catalogue offered by the form.
pub const PERSONALITY_TRAITS: [&str; 12] = [
    "Carinhoso",
    "Brincalhao",
    "Calmo",
    "Energetico",
    "Independente",
    "Curioso",
    "Timido",
    "Sociavel",
    "Dorminhoco",
    "Falante",
    "Protetor",
    "Afetuoso",
];

/// Unit qualifying the cat's age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeUnit {
    /// Age expressed in months.
    Months,
    /// Age expressed in years.
    Years,
}

impl AgeUnit {
    /// The Portuguese label used when rendering an age for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Months => "meses",
            Self::Years => "anos",
        }
    }
}

/// The cat's sex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
}

/// The donation record being assembled by the wizard.
///
/// All fields start empty (or at their form defaults) and are filled in
/// step by step. The draft is owned exclusively by the wizard session;
/// persistence takes a deep snapshot at submission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatDraft {
    /// The cat's name.
    pub name: String,
    /// The cat's age, kept as the raw numeric input.
    pub age: String,
    /// Whether `age` counts months or years.
    pub age_unit: AgeUnit,
    /// Breed, drawn from [`BREEDS`].
    pub breed: String,
    /// The cat's sex.
    pub gender: Gender,
    /// Free-text description (at least 20 characters to pass validation).
    pub description: String,
    /// Selected personality traits, at most [`MAX_PERSONALITY`].
    pub personality: Vec<String>,
    /// Encoded photos as data URLs; the first is the cover image.
    pub images: Vec<String>,
    /// Whether the cat is vaccinated.
    pub vaccinated: bool,
    /// Whether the cat is neutered.
    pub neutered: bool,
    /// Optional free-text health notes.
    pub health_info: String,
    /// Gets along with children.
    pub good_with_kids: bool,
    /// Gets along with dogs.
    pub good_with_dogs: bool,
    /// Gets along with other cats.
    pub good_with_cats: bool,
    /// Postal code (CEP), masked as `NNNNN-NNN`.
    pub postal_code: String,
    /// Street; optional and never displayed publicly.
    pub street: String,
    /// Neighborhood; auto-filled by lookup but user-editable.
    pub neighborhood: String,
    /// City; auto-filled by lookup but user-editable.
    pub city: String,
    /// State (UF); populated by lookup.
    pub state: String,
    /// The owner's display name.
    pub owner_name: String,
    /// Optional secondary phone, masked.
    pub owner_phone: String,
    /// WhatsApp number, masked; required, at least 10 digits.
    pub owner_whatsapp: String,
    /// Optional contact e-mail.
    pub owner_email: String,
}

impl Default for CatDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: String::new(),
            age_unit: AgeUnit::Years,
            breed: String::new(),
            gender: Gender::Female,
            description: String::new(),
            personality: Vec::new(),
            images: Vec::new(),
            vaccinated: false,
            neutered: false,
            health_info: String::new(),
            good_with_kids: true,
            good_with_dogs: true,
            good_with_cats: true,
            postal_code: String::new(),
            street: String::new(),
            neighborhood: String::new(),
            city: String::new(),
            state: String::new(),
            owner_name: String::new(),
            owner_phone: String::new(),
            owner_whatsapp: String::new(),
            owner_email: String::new(),
        }
    }
}

impl CatDraft {
    /// Toggle a personality trait on the draft.
    ///
    /// Adding a trait is refused once [`MAX_PERSONALITY`] traits are
    /// selected; toggling an already-selected trait always removes it.
    ///
    /// Returns `true` if the trait is selected after the call.
    pub fn toggle_personality(&mut self, trait_name: &str) -> bool {
        if let Some(pos) = self.personality.iter().position(|t| t == trait_name) {
            self.personality.remove(pos);
            false
        } else if self.personality.len() < MAX_PERSONALITY {
            self.personality.push(trait_name.to_string());
            true
        } else {
            false
        }
    }

    /// The age rendered for display, e.g. `"2 anos"` or `"6 meses"`.
    #[must_use]
    pub fn age_display(&self) -> String {
        format!("{} {}", self.age, self.age_unit.label())
    }
}

#[cfg(test)]
mod tests {
    use super::{AgeUnit, CatDraft, MAX_PERSONALITY};

    #[test]
    fn defaults_match_empty_form() {
        let draft = CatDraft::default();
        assert!(draft.name.is_empty());
        assert_eq!(draft.age_unit, AgeUnit::Years);
        assert!(draft.good_with_kids && draft.good_with_dogs && draft.good_with_cats);
        assert!(!draft.vaccinated);
        assert!(draft.personality.is_empty());
    }

    #[test]
    fn toggle_personality_adds_and_removes() {
        let mut draft = CatDraft::default();
        assert!(draft.toggle_personality("Calmo"));
        assert_eq!(draft.personality, vec!["Calmo".to_string()]);
        assert!(!draft.toggle_personality("Calmo"));
        assert!(draft.personality.is_empty());
    }

    #[test]
    fn toggle_personality_refuses_sixth_trait() {
        let mut draft = CatDraft::default();
        for trait_name in ["Calmo", "Curioso", "Timido", "Falante", "Protetor"] {
            assert!(draft.toggle_personality(trait_name));
        }
        assert!(!draft.toggle_personality("Afetuoso"));
        assert_eq!(draft.personality.len(), MAX_PERSONALITY);
    }

    #[test]
    fn age_display_uses_unit_label() {
        let mut draft = CatDraft {
            age: "2".to_string(),
            ..CatDraft::default()
        };
        assert_eq!(draft.age_display(), "2 anos");
        draft.age_unit = AgeUnit::Months;
        assert_eq!(draft.age_display(), "2 meses");
    }
}
