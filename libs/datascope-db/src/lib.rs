//! SeaORM adapter for Stockline data scopes.
//!
//! Translates the [`datascope::Predicate`] descriptors emitted by the
//! authorization core into SeaORM [`Condition`](sea_orm::Condition)s and
//! attaches them to list/count queries. The core never sees SQL; this crate
//! never decides policy.
//!
//! ```ignore
//! use datascope_db::{DenyDepartments, ScopedSelectExt};
//!
//! let orders = sales_order::Entity::find()
//!     .with_scope(&filter, resources::SALES_ORDER, &DenyDepartments)
//!     .all(conn)
//!     .await?;
//! ```

pub mod cond;
pub mod select;

pub use cond::{DenyDepartments, DepartmentResolver, scope_condition};
pub use select::ScopedSelectExt;
