//! Access scope policy.
//!
//! One closed role enum and one capability function replace the per-route
//! string comparisons of typical CRUD backends. Handlers call
//! [`require`] before touching any store, and pass the actor's
//! [`OrderScope`] into list/get queries so restricted roles get narrowed
//! result sets instead of post-hoc filtering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;

/// User role. Stored as lowercase text in the `users.role` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
    Shipper,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Staff, Role::Shipper];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
            Role::Shipper => "shipper",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "staff" => Ok(Role::Staff),
            "shipper" => Ok(Role::Shipper),
            _ => Err(()),
        }
    }
}

/// Everything a role may be asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    ViewOrders,
    CreateOrder,
    UpdateOrderFields,
    UpdateOrderStatus,
    DeleteOrder,
    ManagePricing,
    ManageServiceTypes,
    ManageUsers,
    ViewStats,
}

impl Role {
    /// Capability table. Admin is unrestricted; staff create and maintain
    /// their own orders; shippers only move status on orders in their scope.
    pub fn allows(self, cap: Capability) -> bool {
        use Capability::*;
        match self {
            Role::Admin => true,
            Role::Staff => matches!(
                cap,
                ViewOrders | CreateOrder | UpdateOrderFields | UpdateOrderStatus
            ),
            Role::Shipper => matches!(cap, ViewOrders | UpdateOrderStatus),
        }
    }

    /// Visibility scope for order queries. Staff and shipper only see
    /// orders they created; admin sees everything.
    pub fn order_scope(self, user_id: i64) -> OrderScope {
        match self {
            Role::Admin => OrderScope::All,
            Role::Staff | Role::Shipper => OrderScope::Own(user_id),
        }
    }
}

/// The subset of orders an actor may see or touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderScope {
    All,
    Own(i64),
}

impl OrderScope {
    /// Whether an order with the given creator falls inside this scope.
    pub fn permits(self, created_by: Option<i64>) -> bool {
        match self {
            OrderScope::All => true,
            OrderScope::Own(id) => created_by == Some(id),
        }
    }
}

/// Fail with 403 before any store access if the role lacks the capability.
pub fn require(role: Role, cap: Capability) -> Result<(), ApiError> {
    if role.allows(cap) {
        Ok(())
    } else {
        Err(ApiError::forbidden("Insufficient permissions"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_is_unrestricted() {
        use Capability::*;
        for cap in [
            ViewOrders,
            CreateOrder,
            UpdateOrderFields,
            UpdateOrderStatus,
            DeleteOrder,
            ManagePricing,
            ManageServiceTypes,
            ManageUsers,
            ViewStats,
        ] {
            assert!(Role::Admin.allows(cap), "admin should allow {cap:?}");
        }
    }

    #[test]
    fn test_staff_capabilities() {
        assert!(Role::Staff.allows(Capability::CreateOrder));
        assert!(Role::Staff.allows(Capability::UpdateOrderFields));
        assert!(Role::Staff.allows(Capability::UpdateOrderStatus));
        assert!(!Role::Staff.allows(Capability::DeleteOrder));
        assert!(!Role::Staff.allows(Capability::ManagePricing));
        assert!(!Role::Staff.allows(Capability::ManageServiceTypes));
        assert!(!Role::Staff.allows(Capability::ManageUsers));
        assert!(!Role::Staff.allows(Capability::ViewStats));
    }

    #[test]
    fn test_shipper_capabilities() {
        assert!(Role::Shipper.allows(Capability::ViewOrders));
        assert!(Role::Shipper.allows(Capability::UpdateOrderStatus));
        assert!(!Role::Shipper.allows(Capability::CreateOrder));
        assert!(!Role::Shipper.allows(Capability::UpdateOrderFields));
        assert!(!Role::Shipper.allows(Capability::ManagePricing));
    }

    #[test]
    fn test_order_scope() {
        assert_eq!(Role::Admin.order_scope(7), OrderScope::All);
        assert_eq!(Role::Staff.order_scope(7), OrderScope::Own(7));
        assert_eq!(Role::Shipper.order_scope(9), OrderScope::Own(9));
    }

    #[test]
    fn test_scope_permits() {
        assert!(OrderScope::All.permits(Some(1)));
        assert!(OrderScope::All.permits(None));
        assert!(OrderScope::Own(5).permits(Some(5)));
        assert!(!OrderScope::Own(5).permits(Some(6)));
        assert!(!OrderScope::Own(5).permits(None));
    }

    #[test]
    fn test_role_round_trip() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
        assert!("superuser".parse::<Role>().is_err());
    }

    #[test]
    fn test_require_forbidden() {
        assert!(require(Role::Shipper, Capability::CreateOrder).is_err());
        assert!(require(Role::Staff, Capability::CreateOrder).is_ok());
    }
}
