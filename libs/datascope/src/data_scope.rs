use crate::error::ScopeError;
use crate::resources;
use crate::scope_type::ScopeType;

/// A role's declared restriction on one resource.
///
/// Immutable once built; all constructors validate their inputs and copy any
/// value list they are given, so a caller mutating its own buffer afterwards
/// cannot affect a stored scope.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DataScope {
    resource: String,
    scope_type: ScopeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scope_field: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    scope_values: Vec<String>,
}

impl DataScope {
    /// Creates a scope with no field or values attached.
    ///
    /// This is the configuration path for ALL / SELF / DEPARTMENT. The
    /// restricted kinds are accepted too (a WAREHOUSE or CUSTOM scope loaded
    /// without values is a valid "restricted to nothing" state); use
    /// [`DataScope::custom`] or [`DataScope::warehouse`] when granting actual
    /// memberships.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::EmptyResource`] or [`ScopeError::InvalidResource`]
    /// when the resource name fails validation.
    pub fn new(resource: &str, scope_type: ScopeType) -> Result<Self, ScopeError> {
        let resource = normalize_resource(resource)?;
        Ok(Self {
            resource,
            scope_type,
            scope_field: None,
            scope_values: Vec::new(),
        })
    }

    /// Creates a CUSTOM scope restricted to `values`.
    ///
    /// The filtered field defaults to the resource's registered scope field
    /// (see [`resources::default_scope_field`]); resources without a default
    /// are filtered on the owner column at predicate time.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::EmptyScopeValues`] when `values` is empty, or a
    /// resource-name validation error.
    pub fn custom(resource: &str, values: &[String]) -> Result<Self, ScopeError> {
        if values.is_empty() {
            return Err(ScopeError::EmptyScopeValues);
        }
        let resource = normalize_resource(resource)?;
        let scope_field = resources::default_scope_field(&resource).map(str::to_owned);
        Ok(Self {
            resource,
            scope_type: ScopeType::Custom,
            scope_field,
            scope_values: values.to_vec(),
        })
    }

    /// Creates a CUSTOM scope restricted to `values` on an explicit field.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::EmptyScopeField`] when `field` is blank,
    /// [`ScopeError::EmptyScopeValues`] when `values` is empty, or a
    /// resource-name validation error.
    pub fn custom_with_field(
        resource: &str,
        field: &str,
        values: &[String],
    ) -> Result<Self, ScopeError> {
        let field = field.trim();
        if field.is_empty() {
            return Err(ScopeError::EmptyScopeField);
        }
        if values.is_empty() {
            return Err(ScopeError::EmptyScopeValues);
        }
        let resource = normalize_resource(resource)?;
        Ok(Self {
            resource,
            scope_type: ScopeType::Custom,
            scope_field: Some(field.to_owned()),
            scope_values: values.to_vec(),
        })
    }

    /// Creates a WAREHOUSE scope granting access to `warehouse_ids`.
    ///
    /// The field is always `warehouse_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::EmptyWarehouseIds`] when `warehouse_ids` is
    /// empty, or a resource-name validation error.
    pub fn warehouse(resource: &str, warehouse_ids: &[String]) -> Result<Self, ScopeError> {
        if warehouse_ids.is_empty() {
            return Err(ScopeError::EmptyWarehouseIds);
        }
        let resource = normalize_resource(resource)?;
        Ok(Self {
            resource,
            scope_type: ScopeType::Warehouse,
            scope_field: Some(resources::WAREHOUSE_ID_FIELD.to_owned()),
            scope_values: warehouse_ids.to_vec(),
        })
    }

    #[inline]
    #[must_use]
    pub fn resource(&self) -> &str {
        &self.resource
    }

    #[inline]
    #[must_use]
    pub fn scope_type(&self) -> ScopeType {
        self.scope_type
    }

    #[inline]
    #[must_use]
    pub fn scope_field(&self) -> Option<&str> {
        self.scope_field.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn scope_values(&self) -> &[String] {
        &self.scope_values
    }

    /// True when the scope restricts to an explicit set but the set is empty.
    /// Such a scope matches nothing; it never widens to unrestricted.
    #[must_use]
    pub fn is_restricted_to_nothing(&self) -> bool {
        matches!(self.scope_type, ScopeType::Warehouse | ScopeType::Custom)
            && self.scope_values.is_empty()
    }
}

/// Trims, lowercases and validates a resource name.
fn normalize_resource(resource: &str) -> Result<String, ScopeError> {
    let resource = resource.trim().to_lowercase();
    if resource.is_empty() {
        return Err(ScopeError::EmptyResource);
    }
    if resource.len() > 50 {
        return Err(ScopeError::InvalidResource(resource));
    }
    let mut chars = resource.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_lowercase());
    if !starts_with_letter || !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return Err(ScopeError::InvalidResource(resource));
    }
    Ok(resource)
}
