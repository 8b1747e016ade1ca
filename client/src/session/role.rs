//! User roles and the fixed navigation targets they resolve to.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::SessionError;

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const ROUTER_PATH: &str = "/dashboard";

/// User category carried in the session token's `role` claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Donor,
    Foodbank,
    Volunteer,
    Individual,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Donor, Role::Foodbank, Role::Volunteer, Role::Individual];

    /// Wire name of the role, as it appears in the claim set.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Donor => "donor",
            Role::Foodbank => "foodbank",
            Role::Volunteer => "volunteer",
            Role::Individual => "individual",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Role::Donor => "Donor",
            Role::Foodbank => "Food Bank",
            Role::Volunteer => "Volunteer",
            Role::Individual => "Individual",
        }
    }

    /// Dashboard route owned by this role.
    #[must_use]
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Role::Donor => "/dashboard/donor",
            Role::Foodbank => "/dashboard/foodbank",
            Role::Volunteer => "/dashboard/volunteer",
            Role::Individual => "/dashboard/individual",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = SessionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "donor" => Ok(Role::Donor),
            "foodbank" => Ok(Role::Foodbank),
            "volunteer" => Ok(Role::Volunteer),
            "individual" => Ok(Role::Individual),
            other => Err(SessionError::UnknownRole(other.to_owned())),
        }
    }
}

/// Navigation target chosen by the session router.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard(Role),
}

impl Route {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => LOGIN_PATH,
            Route::Dashboard(role) => role.dashboard_path(),
        }
    }
}
