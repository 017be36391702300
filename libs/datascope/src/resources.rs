//! The resource vocabulary and its scoping defaults.
//!
//! Resources are a closed set of names shared by role configuration, the
//! effective-scope map and the persistence layer. This module is the single
//! source of truth for which resources are warehouse-scoped and which fields
//! a CUSTOM scope may filter on.

use crate::data_scope::DataScope;
use crate::error::ScopeError;

pub const PRODUCT: &str = "product";
pub const CATEGORY: &str = "category";
pub const CUSTOMER: &str = "customer";
pub const SUPPLIER: &str = "supplier";
pub const WAREHOUSE: &str = "warehouse";
pub const INVENTORY: &str = "inventory";
pub const SALES_ORDER: &str = "sales_order";
pub const PURCHASE_ORDER: &str = "purchase_order";
pub const SALES_RETURN: &str = "sales_return";
pub const PURCHASE_RETURN: &str = "purchase_return";
pub const STOCK_BATCH: &str = "stock_batch";
pub const STOCK_LOCK: &str = "stock_lock";
pub const STOCK_TAKE: &str = "stock_take";
pub const STOCK_TRANSFER: &str = "stock_transfer";
pub const ACCOUNT_RECEIVABLE: &str = "account_receivable";
pub const ACCOUNT_PAYABLE: &str = "account_payable";
pub const RECEIPT: &str = "receipt";
pub const PAYMENT: &str = "payment";
pub const EXPENSE: &str = "expense";
pub const INCOME: &str = "income";
pub const REPORT: &str = "report";
pub const USER: &str = "user";
pub const ROLE: &str = "role";
pub const TENANT: &str = "tenant";

/// Column used by every WAREHOUSE scope.
pub const WAREHOUSE_ID_FIELD: &str = "warehouse_id";

/// Resources that carry a `warehouse_id` column and therefore support
/// warehouse-level scoping.
pub const WAREHOUSE_SCOPED_RESOURCES: [&str; 9] = [
    INVENTORY,
    SALES_ORDER,
    PURCHASE_ORDER,
    STOCK_BATCH,
    STOCK_LOCK,
    SALES_RETURN,
    PURCHASE_RETURN,
    STOCK_TAKE,
    STOCK_TRANSFER,
];

/// Fields a CUSTOM scope may filter on. Predicate generation falls back to
/// the owner column for anything outside this list, so a misconfigured field
/// name can never reach the query builder.
pub const ALLOWED_SCOPE_FIELDS: [&str; 6] = [
    "warehouse_id",
    "region_id",
    "department_id",
    "created_by",
    "owner_id",
    "assigned_to",
];

/// Default scoping column for a resource, used when a CUSTOM scope omits an
/// explicit field. `None` for resources without one.
#[must_use]
pub fn default_scope_field(resource: &str) -> Option<&'static str> {
    is_warehouse_scoped(resource).then_some(WAREHOUSE_ID_FIELD)
}

/// True when the resource supports warehouse-level scoping.
#[must_use]
pub fn is_warehouse_scoped(resource: &str) -> bool {
    WAREHOUSE_SCOPED_RESOURCES.contains(&resource)
}

#[must_use]
pub fn is_allowed_scope_field(field: &str) -> bool {
    ALLOWED_SCOPE_FIELDS.contains(&field)
}

/// Builds one WAREHOUSE scope per warehouse-scoped resource, all sharing the
/// same id list. The standard way to configure a warehouse-bound role.
///
/// An empty `warehouse_ids` list means "grant nothing" and yields an empty
/// vector, not an error.
///
/// # Errors
///
/// Never fails for the registered resource set; the `Result` mirrors the
/// fallibility of [`DataScope::warehouse`].
pub fn warehouse_scopes_for_role(warehouse_ids: &[String]) -> Result<Vec<DataScope>, ScopeError> {
    if warehouse_ids.is_empty() {
        return Ok(Vec::new());
    }

    WAREHOUSE_SCOPED_RESOURCES
        .iter()
        .map(|resource| DataScope::warehouse(resource, warehouse_ids))
        .collect()
}
