//! Catalog errors.

use std::fmt;

use thiserror::Error;

/// A user-editable field of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingField {
    /// Listing title.
    Title,
    /// Free-form description.
    Description,
    /// Monthly price.
    Price,
    /// Location of the property.
    Location,
}

impl ListingField {
    /// Form field name, as submitted by the add form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Price => "price",
            Self::Location => "location",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Price => "Price",
            Self::Location => "Location",
        }
    }
}

impl fmt::Display for ListingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reason a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldProblem {
    /// Field absent or blank.
    Missing {
        /// Offending field.
        field: ListingField,
    },

    /// Field longer than the column allows.
    TooLong {
        /// Offending field.
        field: ListingField,
        /// Maximum number of characters.
        max: usize,
    },

    /// Price text does not parse as a decimal number.
    NotANumber {
        /// Submitted text.
        value: String,
    },

    /// Price below zero.
    Negative {
        /// Submitted text.
        value: String,
    },
}

impl FieldProblem {
    /// The field this problem refers to.
    #[must_use]
    pub const fn field(&self) -> ListingField {
        match self {
            Self::Missing { field } | Self::TooLong { field, .. } => *field,
            Self::NotANumber { .. } | Self::Negative { .. } => ListingField::Price,
        }
    }
}

impl fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field.label()),
            Self::TooLong { field, max } => {
                write!(f, "{} must be at most {max} characters", field.label())
            }
            Self::NotANumber { value } => write!(f, "Price '{value}' is not a number"),
            Self::Negative { value } => write!(f, "Price must not be negative (got {value})"),
        }
    }
}

/// Rejected listing input.
///
/// Carries every problem found, so a form can report them all at once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid listing: {}", join_problems(.problems))]
pub struct ValidationError {
    problems: Vec<FieldProblem>,
}

impl ValidationError {
    /// Build from a non-empty list of problems.
    #[must_use]
    pub const fn new(problems: Vec<FieldProblem>) -> Self {
        Self { problems }
    }

    /// All problems, in field order.
    #[must_use]
    pub fn problems(&self) -> &[FieldProblem] {
        &self.problems
    }

    /// Whether the given field has at least one problem.
    #[must_use]
    pub fn affects(&self, field: ListingField) -> bool {
        self.problems.iter().any(|p| p.field() == field)
    }
}

fn join_problems(problems: &[FieldProblem]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors returned by catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Input rejected before anything was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backend unavailable or write rejected.
    #[error("Storage error: {message}")]
    Storage {
        /// Backend error description.
        message: String,
    },
}

impl CatalogError {
    /// Create a storage error from any displayable backend error.
    pub fn storage(err: impl fmt::Display) -> Self {
        Self::Storage {
            message: err.to_string(),
        }
    }
}
