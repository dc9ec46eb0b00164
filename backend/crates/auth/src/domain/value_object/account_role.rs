use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role
///
/// Customers register through the public path; employee and admin
/// accounts are provisioned out of band. Role is never changed by a
/// self-service operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i16)]
pub enum AccountRole {
    #[default]
    Customer = 0,
    Employee = 1,
    Admin = 2,
}

impl AccountRole {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        use AccountRole::*;
        match self {
            Customer => "customer",
            Employee => "employee",
            Admin => "admin",
        }
    }

    /// Staff roles log in with email instead of account number
    #[inline]
    pub const fn is_staff(&self) -> bool {
        use AccountRole::*;
        matches!(self, Employee | Admin)
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, AccountRole::Admin)
    }

    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        use AccountRole::*;
        match id {
            0 => Some(Customer),
            1 => Some(Employee),
            2 => Some(Admin),
            _ => None,
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use AccountRole::*;
        match code {
            "customer" => Some(Customer),
            "employee" => Some(Employee),
            "admin" => Some(Admin),
            _ => None,
        }
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_id() {
        assert_eq!(AccountRole::from_id(0), Some(AccountRole::Customer));
        assert_eq!(AccountRole::from_id(1), Some(AccountRole::Employee));
        assert_eq!(AccountRole::from_id(2), Some(AccountRole::Admin));
        assert_eq!(AccountRole::from_id(9), None);
    }

    #[test]
    fn test_role_from_code() {
        assert_eq!(AccountRole::from_code("customer"), Some(AccountRole::Customer));
        assert_eq!(AccountRole::from_code("employee"), Some(AccountRole::Employee));
        assert_eq!(AccountRole::from_code("admin"), Some(AccountRole::Admin));
        assert_eq!(AccountRole::from_code("root"), None);
    }

    #[test]
    fn test_role_checks() {
        assert!(!AccountRole::Customer.is_staff());
        assert!(AccountRole::Employee.is_staff());
        assert!(AccountRole::Admin.is_staff());
        assert!(!AccountRole::Employee.is_admin());
        assert!(AccountRole::Admin.is_admin());
    }

    #[test]
    fn test_role_display() {
        assert_eq!(AccountRole::Customer.to_string(), "customer");
        assert_eq!(AccountRole::Employee.to_string(), "employee");
        assert_eq!(AccountRole::Admin.to_string(), "admin");
    }
}
