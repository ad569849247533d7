//! HTTP Controller (Driver Adapter)
//!
//! Axum routes for the catalog pages, delegating to application use cases.

use std::sync::Arc;

use axum::{
    Form, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};

use crate::application::dto::ListingDto;
use crate::application::use_cases::{CreateListingUseCase, ListListingsUseCase};
use crate::domain::listing::{CatalogError, CatalogStore};

use super::request::AddListingForm;
use super::views::{self, FormFeedback};

/// Application state shared across handlers.
pub struct AppState<S>
where
    S: CatalogStore,
{
    /// Use case for adding a listing.
    pub create_listing: Arc<CreateListingUseCase<S>>,
    /// Use case for reading the catalog.
    pub list_listings: Arc<ListListingsUseCase<S>>,
}

impl<S> AppState<S>
where
    S: CatalogStore,
{
    /// Wire both use cases to the same store.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self {
            create_listing: Arc::new(CreateListingUseCase::new(Arc::clone(&store))),
            list_listings: Arc::new(ListListingsUseCase::new(store)),
        }
    }
}

impl<S> Clone for AppState<S>
where
    S: CatalogStore,
{
    fn clone(&self) -> Self {
        Self {
            create_listing: Arc::clone(&self.create_listing),
            list_listings: Arc::clone(&self.list_listings),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<S>(state: AppState<S>) -> Router
where
    S: CatalogStore + 'static,
{
    Router::new()
        .route("/", get(list_listings::<S>))
        .route("/add", get(add_form).post(submit_listing::<S>))
        .with_state(state)
}

/// Home page: every listing.
async fn list_listings<S>(State(state): State<AppState<S>>) -> Response
where
    S: CatalogStore,
{
    match state.list_listings.execute().await {
        Ok(listings) => {
            let listings: Vec<ListingDto> = listings.iter().map(ListingDto::from).collect();
            Html(views::list_page(&listings).into_string()).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Rendering listings failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(
                    views::error_page(
                        "Listings are unavailable right now. Please try again later.",
                    )
                    .into_string(),
                ),
            )
                .into_response()
        }
    }
}

/// Empty add form.
async fn add_form() -> Html<String> {
    Html(views::add_page(&AddListingForm::default(), None).into_string())
}

/// Add form submission.
///
/// Redirects home on success; otherwise re-renders the form with the
/// submitted values.
async fn submit_listing<S>(
    State(state): State<AppState<S>>,
    Form(form): Form<AddListingForm>,
) -> Response
where
    S: CatalogStore,
{
    match state.create_listing.execute(form.clone().into()).await {
        Ok(listing) => {
            tracing::debug!(listing_id = %listing.id(), "Redirecting to listings");
            Redirect::to("/").into_response()
        }
        Err(CatalogError::Validation(e)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(views::add_page(&form, Some(FormFeedback::Invalid(&e))).into_string()),
        )
            .into_response(),
        Err(e @ CatalogError::Storage { .. }) => {
            tracing::error!(error = %e, "Saving listing failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(views::add_page(&form, Some(FormFeedback::StorageFailure)).into_string()),
            )
                .into_response()
        }
    }
}
