use std::sync::Arc;

use uuid::Uuid;

use crate::data_scope::DataScope;
use crate::merge::{ScopeMap, merge_from_roles};
use crate::predicate::Predicate;
use crate::role::ScopeSource;
use crate::scope_type::ScopeType;

/// Per-request view over the acting user and the effective scope map.
///
/// Built once when the request is authorized, read-only afterwards; the map
/// sits behind an `Arc`, so cloning the filter or handing it to concurrent
/// readers within the request is cheap and lock-free. Never reuse a filter
/// across requests.
///
/// Every query method is total. A resource absent from the map is
/// unrestricted (ALL) by convention; a restricted scope with no memberships
/// matches nothing.
#[derive(Clone, Debug)]
pub struct AccessFilter {
    user_id: Option<Uuid>,
    scopes: Arc<ScopeMap>,
}

impl AccessFilter {
    /// Builds a filter by merging the scopes of every enabled role.
    /// `user_id` is `None` when no authenticated user is present.
    #[must_use]
    pub fn new<R: ScopeSource>(user_id: Option<Uuid>, roles: &[R]) -> Self {
        Self {
            user_id,
            scopes: Arc::new(merge_from_roles(roles)),
        }
    }

    /// Builds a filter from an already-merged scope map, e.g. one cached in
    /// the request context. Skips the merge entirely.
    #[must_use]
    pub fn from_resolved(user_id: Option<Uuid>, scopes: Arc<ScopeMap>) -> Self {
        Self { user_id, scopes }
    }

    #[inline]
    #[must_use]
    pub fn user_id(&self) -> Option<Uuid> {
        self.user_id
    }

    #[must_use]
    pub fn data_scope(&self, resource: &str) -> Option<&DataScope> {
        self.scopes.get(resource)
    }

    /// Effective scope type for `resource`; ALL when unconfigured.
    #[must_use]
    pub fn scope_type(&self, resource: &str) -> ScopeType {
        self.scopes
            .get(resource)
            .map_or(ScopeType::All, DataScope::scope_type)
    }

    /// True when at least one enabled role declared a scope for `resource`,
    /// whatever its type.
    #[must_use]
    pub fn has_scope(&self, resource: &str) -> bool {
        self.scopes.contains_key(resource)
    }

    /// True when the user sees every record of `resource`.
    #[must_use]
    pub fn can_access_all(&self, resource: &str) -> bool {
        self.scope_type(resource) == ScopeType::All
    }

    /// True when the acting user owns the record. False whenever either side
    /// is absent.
    #[must_use]
    pub fn is_owner(&self, owned_by: Option<Uuid>) -> bool {
        match (self.user_id, owned_by) {
            (Some(user), Some(owner)) => user == owner,
            _ => false,
        }
    }

    /// Warehouse ids the user may touch for `resource`. `None` unless the
    /// effective scope type is WAREHOUSE, including for unconfigured
    /// resources, where no warehouse restriction exists to report.
    #[must_use]
    pub fn warehouse_ids(&self, resource: &str) -> Option<&[String]> {
        let scope = self.scopes.get(resource)?;
        (scope.scope_type() == ScopeType::Warehouse).then(|| scope.scope_values())
    }

    /// Whether the user may touch `warehouse_id` within `resource`.
    ///
    /// Fail-open for unconfigured resources and ALL; a WAREHOUSE scope is a
    /// membership test (an empty set matches nothing); every other restricted
    /// type does not grant warehouse access.
    #[must_use]
    pub fn has_warehouse_access(&self, resource: &str, warehouse_id: &str) -> bool {
        let Some(scope) = self.scopes.get(resource) else {
            return true;
        };
        match scope.scope_type() {
            ScopeType::All => true,
            ScopeType::Warehouse => scope
                .scope_values()
                .iter()
                .any(|id| id == warehouse_id),
            ScopeType::Department | ScopeType::Custom | ScopeType::SelfOnly => false,
        }
    }

    /// True iff the effective scope type for `resource` is exactly WAREHOUSE.
    #[must_use]
    pub fn is_warehouse_scoped(&self, resource: &str) -> bool {
        self.scopes
            .get(resource)
            .is_some_and(|s| s.scope_type() == ScopeType::Warehouse)
    }

    /// The restriction a list/count query over `resource` must apply.
    #[must_use]
    pub fn predicate(&self, resource: &str) -> Predicate {
        Predicate::for_scope(resource, self.scopes.get(resource), self.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::RoleScopes;

    fn role_with(scope: DataScope) -> RoleScopes {
        let mut role = RoleScopes::new();
        role.set_data_scope(scope);
        role
    }

    #[test]
    fn empty_roles_fail_open() {
        let filter = AccessFilter::new::<RoleScopes>(None, &[]);
        assert_eq!(filter.scope_type("sales_order"), ScopeType::All);
        assert!(!filter.has_scope("sales_order"));
        assert!(filter.can_access_all("sales_order"));
        assert_eq!(filter.warehouse_ids("sales_order"), None);
        assert!(filter.has_warehouse_access("sales_order", "w1"));
        assert!(!filter.is_warehouse_scoped("sales_order"));
    }

    #[test]
    fn broader_role_wins() {
        let roles = [
            role_with(DataScope::new("sales_order", ScopeType::SelfOnly).unwrap()),
            role_with(DataScope::new("sales_order", ScopeType::All).unwrap()),
        ];
        let filter = AccessFilter::new(Some(Uuid::new_v4()), &roles);
        assert_eq!(filter.scope_type("sales_order"), ScopeType::All);
        assert!(filter.has_scope("sales_order"));
        assert!(filter.can_access_all("sales_order"));
    }

    #[test]
    fn is_owner_truth_table() {
        let user = Uuid::new_v4();
        let with_user = AccessFilter::new::<RoleScopes>(Some(user), &[]);
        let without_user = AccessFilter::new::<RoleScopes>(None, &[]);

        assert!(with_user.is_owner(Some(user)));
        assert!(!with_user.is_owner(Some(Uuid::new_v4())));
        assert!(!with_user.is_owner(None));
        assert!(!without_user.is_owner(Some(user)));
        assert!(!without_user.is_owner(None));
    }

    #[test]
    fn warehouse_queries() {
        let ids = vec!["w1".to_owned()];
        let roles = [
            role_with(DataScope::warehouse("inventory", &ids).unwrap()),
            role_with(DataScope::new("inventory", ScopeType::SelfOnly).unwrap()),
        ];
        let filter = AccessFilter::new(Some(Uuid::new_v4()), &roles);

        assert_eq!(filter.scope_type("inventory"), ScopeType::Warehouse);
        assert!(filter.is_warehouse_scoped("inventory"));
        assert_eq!(filter.warehouse_ids("inventory"), Some(ids.as_slice()));
        assert!(filter.has_warehouse_access("inventory", "w1"));
        assert!(!filter.has_warehouse_access("inventory", "w2"));
    }

    #[test]
    fn non_warehouse_restrictions_do_not_grant_warehouse_access() {
        let roles = [role_with(
            DataScope::new("inventory", ScopeType::SelfOnly).unwrap(),
        )];
        let filter = AccessFilter::new(Some(Uuid::new_v4()), &roles);
        assert_eq!(filter.warehouse_ids("inventory"), None);
        assert!(!filter.has_warehouse_access("inventory", "w1"));
        assert!(!filter.is_warehouse_scoped("inventory"));
    }

    #[test]
    fn empty_warehouse_membership_always_denies() {
        let roles = [role_with(
            DataScope::new("inventory", ScopeType::Warehouse).unwrap(),
        )];
        let filter = AccessFilter::new(Some(Uuid::new_v4()), &roles);
        assert!(filter.is_warehouse_scoped("inventory"));
        assert!(!filter.has_warehouse_access("inventory", "w1"));
        assert_eq!(filter.warehouse_ids("inventory"), Some(&[] as &[String]));
        assert!(filter.predicate("inventory").is_deny_all());
    }

    #[test]
    fn predicate_entry_point_matches_scope() {
        let user = Uuid::new_v4();
        let roles = [role_with(
            DataScope::new("sales_order", ScopeType::SelfOnly).unwrap(),
        )];
        let filter = AccessFilter::new(Some(user), &roles);
        assert_eq!(
            filter.predicate("sales_order"),
            Predicate::OwnerEq { user_id: user }
        );
        assert!(filter.predicate("untouched").is_unrestricted());
    }

    #[test]
    fn filters_share_the_map_cheaply() {
        let roles = [role_with(DataScope::new("product", ScopeType::All).unwrap())];
        let filter = AccessFilter::new(None, &roles);
        let clone = filter.clone();
        assert!(Arc::ptr_eq(&filter.scopes, &clone.scopes));
    }
}
