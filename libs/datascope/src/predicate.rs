use uuid::Uuid;

use crate::data_scope::DataScope;
use crate::resources;
use crate::scope_type::ScopeType;

/// Column recording who created a row. The fallback target whenever a scope
/// names no usable field.
pub const OWNER_FIELD: &str = "created_by";

/// Storage-agnostic description of the restriction a query must apply.
///
/// This is the engine's output at the persistence boundary: the adapter
/// translates it into a concrete `WHERE` fragment, and nothing here ever
/// contains SQL. Generation is total: an unknown resource is simply
/// [`Predicate::Unrestricted`], a restricted scope with nothing to match is
/// [`Predicate::DenyAll`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Predicate {
    /// No restriction; the query runs unfiltered.
    Unrestricted,
    /// Nothing matches. Emitted for restricted scopes with no memberships and
    /// for owner/department scopes with no acting user.
    DenyAll,
    /// Owner column equals the acting user.
    OwnerEq { user_id: Uuid },
    /// `field` must be one of `values`.
    FieldIn { field: String, values: Vec<String> },
    /// Department membership for the acting user. Resolution is delegated to
    /// the host's department collaborator at the persistence boundary.
    Department { user_id: Uuid },
}

impl Predicate {
    #[must_use]
    pub fn is_deny_all(&self) -> bool {
        matches!(self, Predicate::DenyAll)
    }

    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        matches!(self, Predicate::Unrestricted)
    }

    /// Builds the predicate for one effective scope.
    ///
    /// `scope` is `None` when the resource is absent from the effective map,
    /// which is unrestricted by convention.
    #[must_use]
    pub(crate) fn for_scope(
        resource: &str,
        scope: Option<&DataScope>,
        user_id: Option<Uuid>,
    ) -> Self {
        let Some(scope) = scope else {
            return Predicate::Unrestricted;
        };

        match scope.scope_type() {
            ScopeType::All => Predicate::Unrestricted,
            ScopeType::SelfOnly => match user_id {
                Some(user_id) => Predicate::OwnerEq { user_id },
                None => Predicate::DenyAll,
            },
            ScopeType::Department => match user_id {
                Some(user_id) => Predicate::Department { user_id },
                None => Predicate::DenyAll,
            },
            ScopeType::Warehouse => {
                if scope.scope_values().is_empty() {
                    Predicate::DenyAll
                } else {
                    Predicate::FieldIn {
                        field: resources::WAREHOUSE_ID_FIELD.to_owned(),
                        values: scope.scope_values().to_vec(),
                    }
                }
            }
            ScopeType::Custom => {
                if scope.scope_values().is_empty() {
                    return Predicate::DenyAll;
                }
                Predicate::FieldIn {
                    field: custom_field(resource, scope).to_owned(),
                    values: scope.scope_values().to_vec(),
                }
            }
        }
    }
}

/// Resolves the column a CUSTOM scope filters on: the explicit field when it
/// passes the whitelist, else the resource default, else the owner column.
fn custom_field<'a>(resource: &str, scope: &'a DataScope) -> &'a str {
    match scope.scope_field() {
        Some(field) if resources::is_allowed_scope_field(field) => field,
        _ => resources::default_scope_field(resource).unwrap_or(OWNER_FIELD),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScopeError;

    fn user() -> Uuid {
        Uuid::new_v4()
    }

    fn predicate(scope: &DataScope, user_id: Option<Uuid>) -> Predicate {
        Predicate::for_scope(scope.resource(), Some(scope), user_id)
    }

    #[test]
    fn absent_scope_is_unrestricted() {
        assert_eq!(
            Predicate::for_scope("sales_order", None, Some(user())),
            Predicate::Unrestricted
        );
    }

    #[test]
    fn all_scope_is_unrestricted() {
        let ds = DataScope::new("sales_order", ScopeType::All).unwrap();
        assert_eq!(predicate(&ds, None), Predicate::Unrestricted);
    }

    #[test]
    fn self_scope_needs_a_user() {
        let ds = DataScope::new("sales_order", ScopeType::SelfOnly).unwrap();
        let id = user();
        assert_eq!(predicate(&ds, Some(id)), Predicate::OwnerEq { user_id: id });
        assert_eq!(predicate(&ds, None), Predicate::DenyAll);
    }

    #[test]
    fn department_is_delegated() {
        let ds = DataScope::new("sales_order", ScopeType::Department).unwrap();
        let id = user();
        assert_eq!(
            predicate(&ds, Some(id)),
            Predicate::Department { user_id: id }
        );
        assert_eq!(predicate(&ds, None), Predicate::DenyAll);
    }

    #[test]
    fn warehouse_scope_filters_on_warehouse_id() {
        let ids = vec!["w1".to_owned(), "w2".to_owned()];
        let ds = DataScope::warehouse("inventory", &ids).unwrap();
        assert_eq!(
            predicate(&ds, None),
            Predicate::FieldIn {
                field: "warehouse_id".to_owned(),
                values: ids,
            }
        );
    }

    #[test]
    fn empty_membership_denies_all() {
        let warehouse = DataScope::new("inventory", ScopeType::Warehouse).unwrap();
        assert_eq!(predicate(&warehouse, Some(user())), Predicate::DenyAll);

        let custom = DataScope::new("report", ScopeType::Custom).unwrap();
        assert_eq!(predicate(&custom, Some(user())), Predicate::DenyAll);
    }

    #[test]
    fn custom_uses_whitelisted_explicit_field() {
        let values = vec!["r1".to_owned()];
        let ds = DataScope::custom_with_field("report", "region_id", &values).unwrap();
        assert_eq!(
            predicate(&ds, None),
            Predicate::FieldIn {
                field: "region_id".to_owned(),
                values,
            }
        );
    }

    #[test]
    fn custom_with_unlisted_field_falls_back_to_owner_column() {
        let values = vec!["x".to_owned()];
        let ds = DataScope::custom_with_field("report", "secret_column", &values).unwrap();
        assert_eq!(
            predicate(&ds, None),
            Predicate::FieldIn {
                field: OWNER_FIELD.to_owned(),
                values,
            }
        );
    }

    #[test]
    fn custom_without_field_uses_resource_default_then_owner() -> Result<(), ScopeError> {
        let values = vec!["v1".to_owned()];

        // inventory has a registered default.
        let ds = DataScope::custom("inventory", &values)?;
        assert_eq!(
            predicate(&ds, None),
            Predicate::FieldIn {
                field: "warehouse_id".to_owned(),
                values: values.clone(),
            }
        );

        // report has none: owner column fallback.
        let ds = DataScope::custom("report", &values)?;
        assert_eq!(
            predicate(&ds, None),
            Predicate::FieldIn {
                field: OWNER_FIELD.to_owned(),
                values,
            }
        );
        Ok(())
    }
}
