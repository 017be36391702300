use std::collections::HashMap;

use crate::data_scope::DataScope;
use crate::role::ScopeSource;
use crate::scope_type::ScopeType;

/// Effective scope per resource after merging all active roles.
///
/// Resources absent from the map are unrestricted by convention; resources
/// present carry exactly the broadest scope any enabled role declared.
pub type ScopeMap = HashMap<String, DataScope>;

/// Merges scope lists into one effective scope per resource.
///
/// For each resource the scope with the highest [`ScopeType::priority`] wins;
/// on a tie the first one seen is kept, so the outcome is deterministic for a
/// given input order and the *type-level* outcome is order-independent (the
/// priority ladder has no ties between distinct types). Empty input yields an
/// empty map.
#[must_use]
pub fn merge_scopes(scope_lists: &[&[DataScope]]) -> ScopeMap {
    let mut merged = ScopeMap::new();
    for scopes in scope_lists {
        for scope in *scopes {
            let broader = merged.get(scope.resource()).is_none_or(|existing| {
                ScopeType::compare(scope.scope_type(), existing.scope_type()) > 0
            });
            if broader {
                merged.insert(scope.resource().to_owned(), scope.clone());
            }
        }
    }
    merged
}

/// Merges the scopes of every enabled role.
///
/// Enablement is checked once here, while gathering inputs; the merge itself
/// never looks at roles again. Scopes are assumed valid by construction; no
/// re-validation happens on the request path.
#[must_use]
pub fn merge_from_roles<R: ScopeSource>(roles: &[R]) -> ScopeMap {
    let active: Vec<&[DataScope]> = roles
        .iter()
        .filter(|role| role.is_enabled())
        .map(ScopeSource::data_scopes)
        .collect();

    let merged = merge_scopes(&active);
    tracing::debug!(
        roles = roles.len(),
        active = active.len(),
        resources = merged.len(),
        "resolved effective data scopes"
    );
    merged
}
