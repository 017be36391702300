use sea_orm::{EntityTrait, QueryFilter, Select};

use datascope::AccessFilter;

use crate::cond::{DepartmentResolver, scope_condition};

/// Attaches a request's data-scope restriction to a select.
pub trait ScopedSelectExt: Sized {
    /// Applies the effective scope for `resource` as a `WHERE` restriction.
    ///
    /// Unrestricted scopes leave the query untouched; everything else adds
    /// the condition built by [`scope_condition`].
    #[must_use]
    fn with_scope(
        self,
        filter: &AccessFilter,
        resource: &str,
        departments: &dyn DepartmentResolver,
    ) -> Self;
}

impl<E: EntityTrait> ScopedSelectExt for Select<E> {
    fn with_scope(
        self,
        filter: &AccessFilter,
        resource: &str,
        departments: &dyn DepartmentResolver,
    ) -> Self {
        let predicate = filter.predicate(resource);
        if predicate.is_unrestricted() {
            return self;
        }
        self.filter(scope_condition(&predicate, departments))
    }
}
