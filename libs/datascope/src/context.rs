//! Request-context binding.
//!
//! The effective scope map is computed once per request and parked in the
//! request's [`http::Extensions`], alongside the identity layer's user id.
//! The binding is a cache keyed by request lifetime: rebuild-from-context is
//! an `Arc` clone, never a second merge, and nothing here is mutated after
//! the authorization middleware has run.

use std::sync::Arc;

use http::Extensions;
use uuid::Uuid;

use crate::filter::AccessFilter;
use crate::merge::{ScopeMap, merge_from_roles};
use crate::role::ScopeSource;

/// Effective scope map as stored in request extensions.
#[derive(Clone, Debug, Default)]
pub struct ResolvedScopes(Arc<ScopeMap>);

impl ResolvedScopes {
    #[must_use]
    pub fn new(scopes: ScopeMap) -> Self {
        Self(Arc::new(scopes))
    }

    #[inline]
    #[must_use]
    pub fn scopes(&self) -> &ScopeMap {
        &self.0
    }
}

/// Acting user id, inserted by the host's authentication middleware.
/// Absence from the extensions means "no authenticated user".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentUserId(pub Uuid);

/// Warehouse ids derived once from the user's assignments, cached for
/// callers that build warehouse scopes or render pickers.
#[derive(Clone, Debug)]
pub struct AssignedWarehouses(Arc<Vec<String>>);

impl AssignedWarehouses {
    #[must_use]
    pub fn new(warehouse_ids: Vec<String>) -> Self {
        Self(Arc::new(warehouse_ids))
    }

    #[inline]
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.0
    }
}

/// Merges `roles` once and stores the effective scope map in `extensions`.
pub fn with_data_scopes<R: ScopeSource>(extensions: &mut Extensions, roles: &[R]) {
    let scopes = merge_from_roles(roles);
    extensions.insert(ResolvedScopes(Arc::new(scopes)));
}

/// Rebuilds the request's [`AccessFilter`] from `extensions`.
///
/// Uses the scope map cached by [`with_data_scopes`] (an empty map when the
/// middleware never ran) and the [`CurrentUserId`] extension. Total: an
/// unconfigured request yields a fail-open filter rather than an error.
#[must_use]
pub fn filter_from_extensions(extensions: &Extensions) -> AccessFilter {
    let scopes = extensions
        .get::<ResolvedScopes>()
        .map_or_else(|| Arc::new(ScopeMap::new()), |resolved| resolved.0.clone());
    let user_id = extensions.get::<CurrentUserId>().map(|user| user.0);

    if user_id.is_none() {
        tracing::trace!("building access filter without an authenticated user");
    }
    AccessFilter::from_resolved(user_id, scopes)
}

/// Stores the user's warehouse assignments in `extensions`.
pub fn with_warehouse_ids(extensions: &mut Extensions, warehouse_ids: Vec<String>) {
    extensions.insert(AssignedWarehouses(Arc::new(warehouse_ids)));
}

/// Warehouse assignments cached by [`with_warehouse_ids`]; `None` when the
/// request carries none.
#[must_use]
pub fn warehouse_ids_from_extensions(extensions: &Extensions) -> Option<AssignedWarehouses> {
    extensions.get::<AssignedWarehouses>().cloned()
}
