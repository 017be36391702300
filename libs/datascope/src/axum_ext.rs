//! Axum extractor for the request's access filter.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::context::filter_from_extensions;
use crate::filter::AccessFilter;

/// Extracts the [`AccessFilter`] rebuilt from request extensions.
///
/// Infallible by design: authorization never rejects at query time. A request
/// that skipped the scope middleware gets the fail-open empty-map filter, and
/// an unauthenticated one a filter with no user id.
#[derive(Debug, Clone)]
pub struct Scoped(pub AccessFilter);

impl<S> FromRequestParts<S> for Scoped
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Scoped(filter_from_extensions(&parts.extensions)))
    }
}
