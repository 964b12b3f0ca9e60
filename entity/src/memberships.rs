use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::roles::EntityRole;

/// Binds a user to one entity with a role and a status.
///
/// Only an `Active` membership grants anything; `Pending` and `Suspended`
/// memberships are inert for authorization purposes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMembership {
    pub entity_id: Uuid,
    pub role: EntityRole,
    pub status: MembershipStatus,
    pub joined_at: DateTime<Utc>,
}

impl EntityMembership {
    pub fn is_active(&self) -> bool {
        self.status == MembershipStatus::Active
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipStatus {
    Active,
    Pending,
    Suspended,
}
