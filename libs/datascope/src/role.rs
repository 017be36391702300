use crate::data_scope::DataScope;

/// Read access to a role's scope declarations.
///
/// The role/permission domain model lives in the host application; the
/// engine only needs to know whether a role is active and what scopes it
/// declares. Disabled roles contribute nothing to merging.
pub trait ScopeSource {
    fn is_enabled(&self) -> bool;

    fn data_scopes(&self) -> &[DataScope];
}

impl<T: ScopeSource> ScopeSource for &T {
    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }

    fn data_scopes(&self) -> &[DataScope] {
        (**self).data_scopes()
    }
}

/// A role's scope set as carried by configuration.
///
/// At most one scope per resource: a later [`RoleScopes::set_data_scope`] for
/// the same resource replaces the earlier one.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RoleScopes {
    enabled: bool,
    scopes: Vec<DataScope>,
}

impl RoleScopes {
    #[must_use]
    pub fn new() -> Self {
        Self {
            enabled: true,
            scopes: Vec::new(),
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            scopes: Vec::new(),
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Declares a scope for its resource, replacing any earlier declaration
    /// for the same resource.
    pub fn set_data_scope(&mut self, scope: DataScope) {
        self.scopes.retain(|s| s.resource() != scope.resource());
        self.scopes.push(scope);
    }

    /// Replaces the whole scope set. Last declaration per resource wins.
    pub fn set_data_scopes(&mut self, scopes: Vec<DataScope>) {
        self.scopes.clear();
        for scope in scopes {
            self.set_data_scope(scope);
        }
    }

    /// Removes the scope for `resource`; returns whether one existed.
    pub fn remove_data_scope(&mut self, resource: &str) -> bool {
        let before = self.scopes.len();
        self.scopes.retain(|s| s.resource() != resource);
        self.scopes.len() != before
    }

    #[must_use]
    pub fn data_scope(&self, resource: &str) -> Option<&DataScope> {
        self.scopes.iter().find(|s| s.resource() == resource)
    }

    #[must_use]
    pub fn has_data_scope(&self, resource: &str) -> bool {
        self.data_scope(resource).is_some()
    }
}

impl Default for RoleScopes {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeSource for RoleScopes {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn data_scopes(&self) -> &[DataScope] {
        &self.scopes
    }
}
