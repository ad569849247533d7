//! Server-rendered HTML pages.
//!
//! Every page is the shared [`page_shell`] wrapped around a view-specific
//! body. Spliced values are escaped by `maud`.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::application::dto::ListingDto;
use crate::domain::listing::{
    LOCATION_MAX_CHARS, ListingField, TITLE_MAX_CHARS, ValidationError,
};

use super::request::AddListingForm;

const STYLESHEET: &str = "
body { font-family: sans-serif; margin: 0; color: #222; }
header { background: #2c3e50; color: #fff; padding: 1rem 2rem; }
header h1 { margin: 0 0 .5rem 0; }
nav a { color: #fff; margin-right: 1rem; }
main { padding: 1rem 2rem; }
ul.listings { list-style: none; padding: 0; }
ul.listings li { border: 1px solid #ddd; border-radius: 4px; margin-bottom: 1rem; padding: .5rem 1rem; }
form label { display: block; margin-top: .75rem; }
form input, form textarea { width: 100%; max-width: 30rem; }
form button { margin-top: 1rem; }
.error { background: #fdecea; border: 1px solid #f5c2c0; padding: .5rem 1rem; }
footer { border-top: 1px solid #ddd; padding: 1rem 2rem; color: #666; }
";

/// Feedback shown above the add form after a failed submission.
#[derive(Debug, Clone, Copy)]
pub enum FormFeedback<'a> {
    /// The input was rejected.
    Invalid(&'a ValidationError),
    /// The listing could not be saved.
    StorageFailure,
}

impl FormFeedback<'_> {
    fn marks(self, field: ListingField) -> Option<&'static str> {
        match self {
            Self::Invalid(err) if err.affects(field) => Some("true"),
            _ => None,
        }
    }
}

/// Shared page layout: header with navigation, content, footer.
#[must_use]
pub fn page_shell(content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Rental House" }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                header {
                    h1 { "Rental House System" }
                    nav {
                        a href="/" { "Home" }
                        a href="/add" { "Add Property" }
                    }
                }
                main { (content) }
                footer {
                    p { "© Rental House System" }
                }
            }
        }
    }
}

/// The home page listing every property.
#[must_use]
pub fn list_page(listings: &[ListingDto]) -> Markup {
    page_shell(&html! {
        h2 { "Available Properties" }
        ul.listings {
            @for listing in listings {
                li id=(format!("listing-{}", listing.id)) {
                    h3 { (listing.title) }
                    p { (listing.description) }
                    p { "Price: " (listing.price) }
                    p { "Location: " (listing.location) }
                }
            }
        }
        @if listings.is_empty() {
            p.empty { "No properties listed yet." }
        }
    })
}

/// The add form, optionally pre-filled and with feedback from a failed submit.
#[must_use]
pub fn add_page(values: &AddListingForm, feedback: Option<FormFeedback<'_>>) -> Markup {
    let invalid = |field: ListingField| feedback.and_then(|f| f.marks(field));

    page_shell(&html! {
        h2 { "Add a New Property" }
        @match feedback {
            Some(FormFeedback::Invalid(err)) => {
                div.error role="alert" {
                    p { "Please fix the following:" }
                    ul {
                        @for problem in err.problems() {
                            li { (problem.to_string()) }
                        }
                    }
                }
            }
            Some(FormFeedback::StorageFailure) => {
                div.error role="alert" {
                    p { "The property could not be saved. Please try again." }
                }
            }
            None => {}
        }
        form method="POST" action="/add" {
            label for="title" { "Title:" }
            input type="text" id="title" name="title" maxlength=(TITLE_MAX_CHARS)
                value=(values.title) required aria-invalid=[invalid(ListingField::Title)];

            label for="description" { "Description:" }
            textarea id="description" name="description" required
                aria-invalid=[invalid(ListingField::Description)] { (values.description) }

            label for="price" { "Price:" }
            input type="number" id="price" name="price" step="0.01" min="0"
                value=(values.price) required aria-invalid=[invalid(ListingField::Price)];

            label for="location" { "Location:" }
            input type="text" id="location" name="location" maxlength=(LOCATION_MAX_CHARS)
                value=(values.location) required aria-invalid=[invalid(ListingField::Location)];

            button type="submit" { "Add Property" }
        }
    })
}

/// Generic failure page.
#[must_use]
pub fn error_page(message: &str) -> Markup {
    page_shell(&html! {
        div.error role="alert" {
            p { (message) }
        }
    })
}
