use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{digits_only, AgeUnit, CatDraft, Gender};

/// Placeholder avatar shown next to the owner's name.
pub const DEFAULT_OWNER_AVATAR: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150";

/// The public location of a donation, without the street.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// City.
    pub city: String,
    /// State (UF).
    pub state: String,
    /// Neighborhood.
    pub neighborhood: String,
}

/// Contact details of the person offering the cat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// Display name.
    pub name: String,
    /// WhatsApp number, digits only.
    pub whatsapp: String,
    /// Avatar image URL.
    pub avatar: String,
}

/// Compatibility flags, grouped for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoodWith {
    /// Gets along with children.
    pub kids: bool,
    /// Gets along with dogs.
    pub dogs: bool,
    /// Gets along with other cats.
    pub cats: bool,
}

/// A donation record as stored in the local catalogue.
///
/// Carries the flat draft fields plus the derived nested groupings the
/// listing surfaces consume. Created exactly once per submission from a
/// deep snapshot of the draft; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedCat {
    /// Generated unique identifier.
    pub id: String,
    /// The cat's name.
    pub name: String,
    /// Age rendered for display, e.g. `"2 anos"`.
    pub age: String,
    /// The unit the age was entered in.
    pub age_unit: AgeUnit,
    /// Breed.
    pub breed: String,
    /// The cat's sex.
    pub gender: Gender,
    /// Free-text description.
    pub description: String,
    /// Selected personality traits.
    pub personality: Vec<String>,
    /// Encoded photos; the first is the cover image.
    pub images: Vec<String>,
    /// Whether the cat is vaccinated.
    pub vaccinated: bool,
    /// Whether the cat is neutered.
    pub neutered: bool,
    /// Free-text health notes.
    pub health_info: String,
    /// Postal code, masked.
    pub cep: String,
    /// Street; kept on the record but never displayed publicly.
    pub street: String,
    /// Owner's secondary phone, masked as entered; may be empty.
    pub owner_phone: String,
    /// Owner's contact e-mail; may be empty.
    pub owner_email: String,
    /// Public location grouping.
    pub location: Location,
    /// Owner contact grouping.
    pub owner: Owner,
    /// Compatibility grouping.
    pub good_with: GoodWith,
    /// Creation timestamp (ISO-8601 in the stored JSON).
    pub created_at: DateTime<Utc>,
}

impl PersistedCat {
    /// Build a record from a deep snapshot of the draft.
    ///
    /// Generates the identifier, stamps the creation time, normalizes the
    /// WhatsApp number to digits and derives the nested groupings. Later
    /// draft mutations (such as a wizard reset) cannot affect the result.
    #[must_use]
    pub fn from_draft(draft: &CatDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: draft.name.clone(),
            age: draft.age_display(),
            age_unit: draft.age_unit,
            breed: draft.breed.clone(),
            gender: draft.gender,
            description: draft.description.clone(),
            personality: draft.personality.clone(),
            images: draft.images.clone(),
            vaccinated: draft.vaccinated,
            neutered: draft.neutered,
            health_info: draft.health_info.clone(),
            cep: draft.postal_code.clone(),
            street: draft.street.clone(),
            owner_phone: draft.owner_phone.clone(),
            owner_email: draft.owner_email.clone(),
            location: Location {
                city: draft.city.clone(),
                state: draft.state.clone(),
                neighborhood: draft.neighborhood.clone(),
            },
            owner: Owner {
                name: draft.owner_name.clone(),
                whatsapp: digits_only(&draft.owner_whatsapp),
                avatar: DEFAULT_OWNER_AVATAR.to_string(),
            },
            good_with: GoodWith {
                kids: draft.good_with_kids,
                dogs: draft.good_with_dogs,
                cats: draft.good_with_cats,
            },
            created_at: Utc::now(),
        }
    }
}
