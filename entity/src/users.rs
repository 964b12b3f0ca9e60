use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::memberships::EntityMembership;
use crate::roles::PlatformRole;

/// A user as supplied by the session provider.
///
/// Authorization-relevant fields are read-only inputs: the core never
/// mutates a user. `current_entity_id` is the implicit scope when a
/// permission check names no entity explicitly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    #[serde(default)]
    pub platform_role: Option<PlatformRole>,
    #[serde(default)]
    pub memberships: Vec<EntityMembership>,
    #[serde(default)]
    pub current_entity_id: Option<Uuid>,
}

impl User {
    /// First active membership to `entity_id`, if any.
    ///
    /// Duplicate active memberships to one entity should not occur, but the
    /// lookup stays deterministic if they do: first match in list order wins.
    pub fn active_membership(&self, entity_id: Uuid) -> Option<&EntityMembership> {
        self.memberships
            .iter()
            .find(|m| m.entity_id == entity_id && m.is_active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memberships::MembershipStatus;
    use crate::roles::EntityRole;
    use chrono::Utc;

    fn membership(entity_id: Uuid, role: EntityRole, status: MembershipStatus) -> EntityMembership {
        EntityMembership {
            entity_id,
            role,
            status,
            joined_at: Utc::now(),
        }
    }

    fn user(memberships: Vec<EntityMembership>) -> User {
        User {
            id: Uuid::new_v4(),
            email: "pm@example.test".into(),
            name: None,
            platform_role: None,
            memberships,
            current_entity_id: None,
        }
    }

    #[test]
    fn skips_inactive_memberships() {
        let e = Uuid::new_v4();
        let u = user(vec![
            membership(e, EntityRole::Admin, MembershipStatus::Suspended),
            membership(e, EntityRole::Staff, MembershipStatus::Active),
        ]);
        let found = u.active_membership(e).unwrap();
        assert_eq!(found.role, EntityRole::Staff);
    }

    #[test]
    fn first_active_match_wins() {
        let e = Uuid::new_v4();
        let u = user(vec![
            membership(e, EntityRole::Manager, MembershipStatus::Active),
            membership(e, EntityRole::Admin, MembershipStatus::Active),
        ]);
        assert_eq!(u.active_membership(e).unwrap().role, EntityRole::Manager);
    }

    #[test]
    fn no_membership_yields_none() {
        let u = user(vec![]);
        assert!(u.active_membership(Uuid::new_v4()).is_none());
    }

    #[test]
    fn deserializes_with_optional_fields_missing() {
        let raw = r#"{"id":"7d5fa81a-9d60-4a36-9b5a-3f2e77b7a45e","email":"a@b.test","name":null}"#;
        let u: User = serde_json::from_str(raw).unwrap();
        assert!(u.platform_role.is_none());
        assert!(u.memberships.is_empty());
        assert!(u.current_entity_id.is_none());
    }
}
