//! HTTP request types.

use serde::Deserialize;

use crate::application::dto::CreateListingDto;

/// Form submitted by the add view.
///
/// Absent fields deserialize as empty strings so they surface as validation
/// problems instead of extractor rejections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AddListingForm {
    /// Listing title.
    #[serde(default)]
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Price as typed.
    #[serde(default)]
    pub price: String,
    /// Location of the property.
    #[serde(default)]
    pub location: String,
}

impl From<AddListingForm> for CreateListingDto {
    fn from(form: AddListingForm) -> Self {
        Self {
            title: form.title,
            description: form.description,
            price: form.price,
            location: form.location,
        }
    }
}
