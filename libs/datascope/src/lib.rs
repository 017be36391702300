//! Row-level data-access authorization for Stockline services.
//!
//! Roles declare a per-resource visibility scope (from "everything" down to
//! "only records the user owns"). This crate merges the scopes of every
//! enabled role attached to a request into one effective scope per resource,
//! answers access queries against that map, and emits a storage-agnostic
//! [`Predicate`] the persistence layer turns into a `WHERE` restriction.
//!
//! ```
//! use datascope::{AccessFilter, DataScope, RoleScopes, ScopeType};
//!
//! let mut sales = RoleScopes::new();
//! sales.set_data_scope(DataScope::new("sales_order", ScopeType::SelfOnly).unwrap());
//!
//! let mut manager = RoleScopes::new();
//! manager.set_data_scope(DataScope::new("sales_order", ScopeType::All).unwrap());
//!
//! // The broader grant wins.
//! let filter = AccessFilter::new(None, &[sales, manager]);
//! assert!(filter.can_access_all("sales_order"));
//! ```

pub mod context;
pub mod data_scope;
pub mod error;
pub mod filter;
pub mod merge;
pub mod predicate;
pub mod resources;
pub mod role;
pub mod scope_type;

#[cfg(feature = "axum-ext")]
pub mod axum_ext;

pub use context::{AssignedWarehouses, CurrentUserId, ResolvedScopes};
pub use data_scope::DataScope;
pub use error::ScopeError;
pub use filter::AccessFilter;
pub use merge::{ScopeMap, merge_from_roles, merge_scopes};
pub use predicate::{OWNER_FIELD, Predicate};
pub use role::{RoleScopes, ScopeSource};
pub use scope_type::ScopeType;

#[cfg(feature = "axum-ext")]
pub use axum_ext::Scoped;
