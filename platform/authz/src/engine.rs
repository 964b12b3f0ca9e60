//! The policy engine: pure allow/deny queries over caller-owned values.
//!
//! Every method is total and fail-closed: a missing user, role, membership,
//! or scope degrades to `false`, never to a panic or an error value. The
//! engine holds its tables as injected read-only state, so it is freely
//! shareable across threads.

use entity::{EntityRole, PlatformRole, User};
use uuid::Uuid;

use crate::permission::Permission;
use crate::tables::RoleTables;

/// Resolved scope for an entity-tier check.
///
/// An explicit entity named at the call site always beats the user's
/// current-entity default; the default is consulted only when the call names
/// nothing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EntityScope {
    pub requested: Option<Uuid>,
    pub default: Option<Uuid>,
}

impl EntityScope {
    pub fn resolve(self) -> Option<Uuid> {
        self.requested.or(self.default)
    }
}

/// Evaluates permission checks against a fixed set of [`RoleTables`].
#[derive(Clone, Debug, Default)]
pub struct PolicyEngine {
    tables: RoleTables,
}

impl PolicyEngine {
    pub fn new(tables: RoleTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &RoleTables {
        &self.tables
    }

    /// Does `user` hold `permission`, optionally scoped to `entity_id`?
    ///
    /// Platform-tier permissions check the user's platform role and ignore
    /// `entity_id`. Entity-tier permissions resolve a target entity
    /// (explicit argument, else the user's `current_entity_id`) and require
    /// an active membership there; pending and suspended memberships grant
    /// nothing.
    pub fn has_permission(
        &self,
        user: Option<&User>,
        permission: Permission,
        entity_id: Option<Uuid>,
    ) -> bool {
        let Some(user) = user else {
            return false;
        };
        match permission {
            Permission::Platform(wanted) => user
                .platform_role
                .is_some_and(|role| self.tables.platform_permissions_for(role).contains(&wanted)),
            Permission::Entity(wanted) => {
                let scope = EntityScope {
                    requested: entity_id,
                    default: user.current_entity_id,
                };
                let Some(target) = scope.resolve() else {
                    return false;
                };
                user.active_membership(target).is_some_and(|membership| {
                    self.tables
                        .entity_permissions_for(membership.role)
                        .contains(&wanted)
                })
            }
        }
    }

    /// String-boundary variant of [`has_permission`](Self::has_permission):
    /// anything outside the catalog denies rather than erroring.
    pub fn has_permission_str(
        &self,
        user: Option<&User>,
        permission: &str,
        entity_id: Option<Uuid>,
    ) -> bool {
        permission
            .parse::<Permission>()
            .map(|p| self.has_permission(user, p, entity_id))
            .unwrap_or(false)
    }

    /// At least one of `permissions` is held. Empty list → `false`.
    pub fn has_any_permission(
        &self,
        user: Option<&User>,
        permissions: &[Permission],
        entity_id: Option<Uuid>,
    ) -> bool {
        permissions
            .iter()
            .any(|&p| self.has_permission(user, p, entity_id))
    }

    /// Every one of `permissions` is held. Empty list → vacuously `true`;
    /// callers gating sensitive surfaces must pass at least one permission.
    pub fn has_all_permissions(
        &self,
        user: Option<&User>,
        permissions: &[Permission],
        entity_id: Option<Uuid>,
    ) -> bool {
        permissions
            .iter()
            .all(|&p| self.has_permission(user, p, entity_id))
    }

    /// Role of the user's active membership at the resolved target entity.
    ///
    /// Labeling only: a `Some` result grants nothing by itself.
    pub fn current_entity_role(
        &self,
        user: Option<&User>,
        entity_id: Option<Uuid>,
    ) -> Option<EntityRole> {
        let user = user?;
        let scope = EntityScope {
            requested: entity_id,
            default: user.current_entity_id,
        };
        let target = scope.resolve()?;
        user.active_membership(target).map(|m| m.role)
    }

    /// Superadmin rank specifically, not just any platform role.
    pub fn is_platform_admin(&self, user: Option<&User>) -> bool {
        user.is_some_and(|u| u.platform_role == Some(PlatformRole::Superadmin))
    }

    /// Any platform role at all.
    pub fn is_platform_staff(&self, user: Option<&User>) -> bool {
        user.is_some_and(|u| u.platform_role.is_some())
    }

    pub fn is_entity_admin(&self, user: Option<&User>, entity_id: Option<Uuid>) -> bool {
        self.current_entity_role(user, entity_id) == Some(EntityRole::Admin)
    }
}
