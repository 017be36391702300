#![allow(clippy::unwrap_used, clippy::expect_used)]

use datascope::context::{
    CurrentUserId, filter_from_extensions, warehouse_ids_from_extensions, with_data_scopes,
    with_warehouse_ids,
};
use datascope::{AccessFilter, DataScope, RoleScopes, ScopeType};
use http::Extensions;
use uuid::Uuid;

fn sample_roles() -> Vec<RoleScopes> {
    let mut sales = RoleScopes::new();
    sales.set_data_scope(DataScope::new("sales_order", ScopeType::SelfOnly).unwrap());
    sales.set_data_scope(
        DataScope::warehouse("inventory", &["w1".to_owned(), "w2".to_owned()]).unwrap(),
    );

    let mut manager = RoleScopes::new();
    manager.set_data_scope(DataScope::new("sales_order", ScopeType::All).unwrap());

    let mut retired = RoleScopes::new();
    retired.set_data_scope(DataScope::new("inventory", ScopeType::All).unwrap());
    retired.set_enabled(false);

    vec![sales, manager, retired]
}

#[test]
fn context_filter_matches_direct_construction() {
    let user = Uuid::new_v4();
    let roles = sample_roles();

    let direct = AccessFilter::new(Some(user), &roles);

    let mut extensions = Extensions::new();
    extensions.insert(CurrentUserId(user));
    with_data_scopes(&mut extensions, &roles);
    let rebuilt = filter_from_extensions(&extensions);

    assert_eq!(rebuilt.user_id(), direct.user_id());
    for resource in ["sales_order", "inventory", "untouched"] {
        assert_eq!(
            rebuilt.scope_type(resource),
            direct.scope_type(resource),
            "{resource}"
        );
        assert_eq!(
            rebuilt.warehouse_ids(resource),
            direct.warehouse_ids(resource),
            "{resource}"
        );
        assert_eq!(
            rebuilt.predicate(resource),
            direct.predicate(resource),
            "{resource}"
        );
    }
}

#[test]
fn reconstruction_shares_the_cached_map() {
    let mut extensions = Extensions::new();
    with_data_scopes(&mut extensions, &sample_roles());

    let first = filter_from_extensions(&extensions);
    let second = filter_from_extensions(&extensions);

    // Same resolved state both times; the merge ran once, at insert time.
    assert_eq!(
        first.scope_type("sales_order"),
        second.scope_type("sales_order")
    );
    assert_eq!(
        first.warehouse_ids("inventory"),
        second.warehouse_ids("inventory")
    );
}

#[test]
fn absent_bindings_degrade_cleanly() {
    let extensions = Extensions::new();

    let filter = filter_from_extensions(&extensions);
    assert_eq!(filter.user_id(), None);
    assert!(filter.can_access_all("anything"));

    assert!(warehouse_ids_from_extensions(&extensions).is_none());
}

#[test]
fn warehouse_assignment_cache() {
    let mut extensions = Extensions::new();
    with_warehouse_ids(&mut extensions, vec!["w7".to_owned()]);

    let assigned = warehouse_ids_from_extensions(&extensions).unwrap();
    assert_eq!(assigned.ids(), ["w7".to_owned()]);
}
