//! Guard layer consumed by UI surfaces.
//!
//! A surface declares what it needs as a [`GuardRequirement`]; the
//! [`PermissionGuard`] turns that into a render-or-not decision by
//! delegating to the policy engine. Denial is silent — callers decide what
//! to show instead.

use entity::{EntityRole, User};
use platform_authz::{Permission, PolicyEngine};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// What a guarded surface requires before it renders.
///
/// A single `permission` is folded into `permissions`; `require_all` then
/// decides between all-of and any-of across the combined list. An explicit
/// `entity_id` pins the check to that entity, overriding the user's current
/// entity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardRequirement {
    #[serde(default)]
    pub permission: Option<Permission>,
    #[serde(default)]
    pub permissions: Vec<Permission>,
    #[serde(default)]
    pub require_all: bool,
    #[serde(default)]
    pub entity_id: Option<Uuid>,
}

impl GuardRequirement {
    /// No requirement at all: the guard allows unconditionally.
    ///
    /// This default-permit exists for always-visible regions. Sensitive
    /// surfaces must name a permission; an empty requirement never denies.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn permission(permission: impl Into<Permission>) -> Self {
        Self {
            permission: Some(permission.into()),
            ..Self::default()
        }
    }

    pub fn any_of(permissions: impl IntoIterator<Item = Permission>) -> Self {
        Self {
            permissions: permissions.into_iter().collect(),
            require_all: false,
            ..Self::default()
        }
    }

    pub fn all_of(permissions: impl IntoIterator<Item = Permission>) -> Self {
        Self {
            permissions: permissions.into_iter().collect(),
            require_all: true,
            ..Self::default()
        }
    }

    pub fn for_entity(mut self, entity_id: Uuid) -> Self {
        self.entity_id = Some(entity_id);
        self
    }

    fn combined(&self) -> Vec<Permission> {
        let mut all = Vec::with_capacity(self.permissions.len() + 1);
        all.extend(self.permission);
        all.extend(self.permissions.iter().copied());
        all
    }
}

/// UI-facing adapter over a [`PolicyEngine`].
#[derive(Clone, Debug)]
pub struct PermissionGuard<'a> {
    engine: &'a PolicyEngine,
}

impl<'a> PermissionGuard<'a> {
    pub fn new(engine: &'a PolicyEngine) -> Self {
        Self { engine }
    }

    /// The render-or-not decision for one requirement.
    pub fn allows(&self, user: Option<&User>, requirement: &GuardRequirement) -> bool {
        let required = requirement.combined();
        let allowed = if required.is_empty() {
            true
        } else if requirement.require_all {
            self.engine
                .has_all_permissions(user, &required, requirement.entity_id)
        } else {
            self.engine
                .has_any_permission(user, &required, requirement.entity_id)
        };
        debug!(
            required = ?required,
            require_all = requirement.require_all,
            entity_id = ?requirement.entity_id,
            allowed,
            "guard decision"
        );
        allowed
    }

    /// Label for the user's role at the resolved entity, for UI display.
    pub fn current_entity_role(
        &self,
        user: Option<&User>,
        entity_id: Option<Uuid>,
    ) -> Option<EntityRole> {
        self.engine.current_entity_role(user, entity_id)
    }

    pub fn is_platform_admin(&self, user: Option<&User>) -> bool {
        self.engine.is_platform_admin(user)
    }

    pub fn is_platform_staff(&self, user: Option<&User>) -> bool {
        self.engine.is_platform_staff(user)
    }

    pub fn is_entity_admin(&self, user: Option<&User>, entity_id: Option<Uuid>) -> bool {
        self.engine.is_entity_admin(user, entity_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use entity::{EntityMembership, EntityRole, MembershipStatus, PlatformRole};
    use platform_authz::{EntityPermission, PlatformPermission};

    fn staffer(role: PlatformRole) -> User {
        User {
            id: Uuid::new_v4(),
            email: "ops@propsuite.test".into(),
            name: None,
            platform_role: Some(role),
            memberships: vec![],
            current_entity_id: None,
        }
    }

    fn member(entity_id: Uuid, role: EntityRole) -> User {
        User {
            id: Uuid::new_v4(),
            email: "member@acme.test".into(),
            name: None,
            platform_role: None,
            memberships: vec![EntityMembership {
                entity_id,
                role,
                status: MembershipStatus::Active,
                joined_at: Utc::now(),
            }],
            current_entity_id: Some(entity_id),
        }
    }

    #[test]
    fn empty_requirement_allows_everyone() {
        let engine = PolicyEngine::default();
        let guard = PermissionGuard::new(&engine);
        let req = GuardRequirement::none();
        assert!(guard.allows(None, &req));
        assert!(guard.allows(Some(&staffer(PlatformRole::Support)), &req));
    }

    #[test]
    fn single_permission_gates() {
        let engine = PolicyEngine::default();
        let guard = PermissionGuard::new(&engine);
        let req = GuardRequirement::permission(PlatformPermission::BillingManage);
        assert!(guard.allows(Some(&staffer(PlatformRole::Manager)), &req));
        assert!(!guard.allows(Some(&staffer(PlatformRole::Support)), &req));
        assert!(!guard.allows(None, &req));
    }

    #[test]
    fn any_of_needs_one_hit() {
        let engine = PolicyEngine::default();
        let guard = PermissionGuard::new(&engine);
        let req = GuardRequirement::any_of([
            Permission::Platform(PlatformPermission::BillingManage),
            Permission::Platform(PlatformPermission::SupportTickets),
        ]);
        assert!(guard.allows(Some(&staffer(PlatformRole::Support)), &req));
    }

    #[test]
    fn all_of_needs_every_hit() {
        let engine = PolicyEngine::default();
        let guard = PermissionGuard::new(&engine);
        let req = GuardRequirement::all_of([
            Permission::Platform(PlatformPermission::BillingManage),
            Permission::Platform(PlatformPermission::SupportTickets),
        ]);
        assert!(!guard.allows(Some(&staffer(PlatformRole::Support)), &req));
        assert!(guard.allows(Some(&staffer(PlatformRole::Manager)), &req));
    }

    #[test]
    fn single_permission_folds_into_list() {
        let engine = PolicyEngine::default();
        let guard = PermissionGuard::new(&engine);
        let mut req = GuardRequirement::all_of([Permission::Platform(
            PlatformPermission::SupportTickets,
        )]);
        req.permission = Some(Permission::Platform(PlatformPermission::SystemLogs));
        // Developer has logs but not tickets; the combined list must fail.
        assert!(!guard.allows(Some(&staffer(PlatformRole::Developer)), &req));
        assert!(guard.allows(Some(&staffer(PlatformRole::Superadmin)), &req));
    }

    #[test]
    fn entity_pin_overrides_current_entity() {
        let engine = PolicyEngine::default();
        let guard = PermissionGuard::new(&engine);
        let home = Uuid::new_v4();
        let other = Uuid::new_v4();
        let user = member(home, EntityRole::Admin);
        let req = GuardRequirement::permission(EntityPermission::PropertyRead);
        assert!(guard.allows(Some(&user), &req));
        assert!(!guard.allows(Some(&user), &req.clone().for_entity(other)));
    }

    #[test]
    fn predicates_delegate_to_engine() {
        let engine = PolicyEngine::default();
        let guard = PermissionGuard::new(&engine);
        let e = Uuid::new_v4();
        let admin = member(e, EntityRole::Admin);
        assert!(guard.is_entity_admin(Some(&admin), None));
        assert_eq!(
            guard.current_entity_role(Some(&admin), None),
            Some(EntityRole::Admin)
        );
        assert!(!guard.is_platform_staff(Some(&admin)));
    }
}
