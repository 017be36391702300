use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ScopeError;

/// Visibility scope a role declares for a resource.
///
/// The set is closed: anything outside these five kinds fails parsing and
/// deserialization. Conflicts between roles are resolved by
/// [`ScopeType::priority`]; the broader grant always wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeType {
    /// Unrestricted access to the resource (within the tenant).
    All,
    /// Restricted to the user's department.
    Department,
    /// Restricted to an explicit set of warehouse identifiers.
    Warehouse,
    /// Restricted to explicit values on a configurable field.
    Custom,
    /// Only records owned by the acting user.
    #[serde(rename = "self")]
    SelfOnly,
}

impl ScopeType {
    /// Conflict-resolution weight. Higher means broader access.
    ///
    /// The ladder is fixed: ALL(100) > DEPARTMENT(50) > WAREHOUSE(45) >
    /// CUSTOM(40) > SELF(10). WAREHOUSE sits between DEPARTMENT and CUSTOM;
    /// an explicit warehouse grant outranks value-list restrictions.
    #[must_use]
    pub const fn priority(self) -> i32 {
        match self {
            ScopeType::All => 100,
            ScopeType::Department => 50,
            ScopeType::Warehouse => 45,
            ScopeType::Custom => 40,
            ScopeType::SelfOnly => 10,
        }
    }

    /// Compares two scope types by priority.
    ///
    /// Positive means `a` grants strictly broader access than `b`, zero means
    /// they are the same type.
    #[must_use]
    pub const fn compare(a: ScopeType, b: ScopeType) -> i32 {
        a.priority() - b.priority()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ScopeType::All => "all",
            ScopeType::Department => "department",
            ScopeType::Warehouse => "warehouse",
            ScopeType::Custom => "custom",
            ScopeType::SelfOnly => "self",
        }
    }
}

impl PartialOrd for ScopeType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScopeType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl fmt::Display for ScopeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScopeType {
    type Err = ScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ScopeType::All),
            "department" => Ok(ScopeType::Department),
            "warehouse" => Ok(ScopeType::Warehouse),
            "custom" => Ok(ScopeType::Custom),
            "self" => Ok(ScopeType::SelfOnly),
            other => Err(ScopeError::UnknownScopeType(other.to_owned())),
        }
    }
}
