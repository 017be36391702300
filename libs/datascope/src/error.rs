use thiserror::Error;

/// Validation failures raised while configuring scopes.
///
/// These surface on the role-configuration path only. Query methods on a
/// built [`crate::AccessFilter`] are total and never return an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScopeError {
    #[error("resource name cannot be empty")]
    EmptyResource,

    /// Resource names must start with a letter, contain only lowercase
    /// letters, digits and underscores, and not exceed 50 characters.
    #[error("invalid resource name: {0:?}")]
    InvalidResource(String),

    #[error("scope field cannot be empty for a custom data scope")]
    EmptyScopeField,

    #[error("custom data scope must have at least one scope value")]
    EmptyScopeValues,

    #[error("warehouse data scope must have at least one warehouse id")]
    EmptyWarehouseIds,

    #[error("unknown scope type: {0:?}")]
    UnknownScopeType(String),
}
