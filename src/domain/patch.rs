use super::record::{AgeUnit, CatDraft, Gender};

/// A draft field name.
///
/// Used to report which fields a patch touched so the wizard can clear
/// their error messages, and to key validation errors with a closed set
/// of names rather than an open map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Cat name.
    Name,
    /// Cat age.
    Age,
    /// Age unit.
    AgeUnit,
    /// Breed.
    Breed,
    /// Sex.
    Gender,
    /// Free-text description.
    Description,
    /// Personality traits.
    Personality,
    /// Photos.
    Images,
    /// Vaccinated flag.
    Vaccinated,
    /// Neutered flag.
    Neutered,
    /// Health notes.
    HealthInfo,
    /// Compatible with children.
    GoodWithKids,
    /// Compatible with dogs.
    GoodWithDogs,
    /// Compatible with other cats.
    GoodWithCats,
    /// Postal code.
    PostalCode,
    /// Street.
    Street,
    /// Neighborhood.
    Neighborhood,
    /// City.
    City,
    /// State.
    State,
    /// Owner display name.
    OwnerName,
    /// Secondary phone.
    OwnerPhone,
    /// WhatsApp number.
    OwnerWhatsapp,
    /// Contact e-mail.
    OwnerEmail,
}

/// A partial update to a [`CatDraft`].
///
/// Each set field replaces the corresponding draft field when applied;
/// unset fields are left untouched.
#[derive(Debug, Clone, Default)]
#[allow(clippy::struct_field_names, missing_docs)]
pub struct DraftPatch {
    pub name: Option<String>,
    pub age: Option<String>,
    pub age_unit: Option<AgeUnit>,
    pub breed: Option<String>,
    pub gender: Option<Gender>,
    pub description: Option<String>,
    pub personality: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub vaccinated: Option<bool>,
    pub neutered: Option<bool>,
    pub health_info: Option<String>,
    pub good_with_kids: Option<bool>,
    pub good_with_dogs: Option<bool>,
    pub good_with_cats: Option<bool>,
    pub postal_code: Option<String>,
    pub street: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub owner_name: Option<String>,
    pub owner_phone: Option<String>,
    pub owner_whatsapp: Option<String>,
    pub owner_email: Option<String>,
}

impl DraftPatch {
    /// Merge this patch into `draft`, returning the fields that were set.
    ///
    /// The returned list reflects which fields the patch carried, not
    /// whether the new value differs from the old one.
    pub fn apply(self, draft: &mut CatDraft) -> Vec<Field> {
        let mut touched = Vec::new();

        macro_rules! merge {
            ($field:ident, $variant:ident) => {
                if let Some(value) = self.$field {
                    draft.$field = value;
                    touched.push(Field::$variant);
                }
            };
        }

        merge!(name, Name);
        merge!(age, Age);
        merge!(age_unit, AgeUnit);
        merge!(breed, Breed);
        merge!(gender, Gender);
        merge!(description, Description);
        merge!(personality, Personality);
        merge!(images, Images);
        merge!(vaccinated, Vaccinated);
        merge!(neutered, Neutered);
        merge!(health_info, HealthInfo);
        merge!(good_with_kids, GoodWithKids);
        merge!(good_with_dogs, GoodWithDogs);
        merge!(good_with_cats, GoodWithCats);
        merge!(postal_code, PostalCode);
        merge!(street, Street);
        merge!(neighborhood, Neighborhood);
        merge!(city, City);
        merge!(state, State);
        merge!(owner_name, OwnerName);
        merge!(owner_phone, OwnerPhone);
        merge!(owner_whatsapp, OwnerWhatsapp);
        merge!(owner_email, OwnerEmail);

        touched
    }
}
