//! Property listing records.

use super::errors::{FieldProblem, ListingField, ValidationError};
use super::value_objects::{ListingId, Price};

/// Maximum title length in characters.
pub const TITLE_MAX_CHARS: usize = 100;

/// Maximum location length in characters.
pub const LOCATION_MAX_CHARS: usize = 200;

/// A validated listing that has not been stored yet.
///
/// The only way to obtain one is [`NewListing::parse`], so every value a
/// store receives already satisfies the field rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewListing {
    title: String,
    description: String,
    price: Price,
    location: String,
}

impl NewListing {
    /// Validate raw form input.
    ///
    /// Text fields are trimmed. All problems are collected rather than
    /// stopping at the first one.
    pub fn parse(
        title: &str,
        description: &str,
        price: &str,
        location: &str,
    ) -> Result<Self, ValidationError> {
        let mut problems = Vec::new();

        let title = required_text(
            ListingField::Title,
            title,
            Some(TITLE_MAX_CHARS),
            &mut problems,
        );
        let description =
            required_text(ListingField::Description, description, None, &mut problems);

        let price = if price.trim().is_empty() {
            problems.push(FieldProblem::Missing {
                field: ListingField::Price,
            });
            None
        } else {
            match Price::parse(price) {
                Ok(price) => Some(price),
                Err(problem) => {
                    problems.push(problem);
                    None
                }
            }
        };

        let location = required_text(
            ListingField::Location,
            location,
            Some(LOCATION_MAX_CHARS),
            &mut problems,
        );

        match (title, description, price, location) {
            (Some(title), Some(description), Some(price), Some(location)) => Ok(Self {
                title,
                description,
                price,
                location,
            }),
            _ => Err(ValidationError::new(problems)),
        }
    }

    /// Listing title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Listing description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Listing price.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Listing location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Attach the id assigned by storage.
    #[must_use]
    pub fn into_listing(self, id: ListingId) -> PropertyListing {
        PropertyListing {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            location: self.location,
        }
    }
}

fn required_text(
    field: ListingField,
    raw: &str,
    max_chars: Option<usize>,
    problems: &mut Vec<FieldProblem>,
) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        problems.push(FieldProblem::Missing { field });
        return None;
    }
    if let Some(max) = max_chars
        && value.chars().count() > max
    {
        problems.push(FieldProblem::TooLong { field, max });
        return None;
    }
    Some(value.to_string())
}

/// A stored rental property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyListing {
    id: ListingId,
    title: String,
    description: String,
    price: Price,
    location: String,
}

impl PropertyListing {
    /// Rebuild a listing from stored columns.
    ///
    /// Used by storage adapters when reading rows back; no validation is
    /// repeated since rows were validated on the way in.
    #[must_use]
    pub const fn restore(
        id: ListingId,
        title: String,
        description: String,
        price: Price,
        location: String,
    ) -> Self {
        Self {
            id,
            title,
            description,
            price,
            location,
        }
    }

    /// Storage-assigned id.
    #[must_use]
    pub const fn id(&self) -> ListingId {
        self.id
    }

    /// Listing title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Listing description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Listing price.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Listing location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }
}
