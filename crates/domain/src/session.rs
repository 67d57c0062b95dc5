// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::AdminRole;
use serde::{Deserialize, Serialize};

/// The authenticated administrator, as returned by the verify and validate
/// endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    /// Server id.
    pub id: i64,
    /// Login email.
    pub email: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Role.
    pub role: AdminRole,
    /// Club scope for club admins.
    #[serde(default)]
    pub club_id: Option<i64>,
}

impl AdminProfile {
    /// Returns `true` for platform-wide administrators.
    #[must_use]
    pub const fn is_super_admin(&self) -> bool {
        matches!(self.role, AdminRole::SuperAdmin)
    }

    /// Returns `true` if this admin may manage the given club.
    ///
    /// Super admins manage every club; club admins only their own.
    #[must_use]
    pub fn can_manage_club(&self, club_id: i64) -> bool {
        match self.role {
            AdminRole::SuperAdmin => true,
            AdminRole::ClubAdmin => self.club_id == Some(club_id),
        }
    }
}

/// The authenticated customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    /// Server id.
    pub id: i64,
    /// Login email.
    pub email: String,
    /// Full name.
    #[serde(default)]
    pub name: Option<String>,
    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,
}
