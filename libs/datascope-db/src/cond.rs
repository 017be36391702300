use sea_orm::Condition;
use sea_orm::sea_query::{Alias, Expr};
use uuid::Uuid;

use datascope::{OWNER_FIELD, Predicate};

/// Resolves department membership into a query condition.
///
/// Department scoping is declared in role configuration but its membership
/// model lives in the host application; this trait is the seam. The resolver
/// runs once per query, synchronously; implementations should consult
/// request-scoped data, not the database.
pub trait DepartmentResolver: Send + Sync {
    fn department_condition(&self, user_id: Uuid) -> Condition;
}

/// Fail-closed resolver for hosts without a department model: every
/// DEPARTMENT-scoped query matches nothing.
pub struct DenyDepartments;

impl DepartmentResolver for DenyDepartments {
    fn department_condition(&self, _user_id: Uuid) -> Condition {
        deny_all()
    }
}

fn deny_all() -> Condition {
    Condition::all().add(Expr::value(false))
}

/// Builds the `WHERE` condition for one predicate descriptor.
///
/// Rules:
/// 1. `Unrestricted` → empty condition, the query runs unfiltered
/// 2. `DenyAll` → constant-false condition
/// 3. `OwnerEq` → `created_by = user`
/// 4. `FieldIn` → `field IN (values)`; the core has already vetted the field
///    name against its whitelist
/// 5. `Department` → delegated to the [`DepartmentResolver`]
#[must_use]
pub fn scope_condition(predicate: &Predicate, departments: &dyn DepartmentResolver) -> Condition {
    match predicate {
        Predicate::Unrestricted => Condition::all(),
        Predicate::DenyAll => deny_all(),
        Predicate::OwnerEq { user_id } => {
            Condition::all().add(Expr::col(Alias::new(OWNER_FIELD)).eq(*user_id))
        }
        Predicate::FieldIn { field, values } => {
            Condition::all().add(Expr::col(Alias::new(field.as_str())).is_in(values.iter().cloned()))
        }
        Predicate::Department { user_id } => departments.department_condition(*user_id),
    }
}
