//! The permission catalog.
//!
//! Every capability the platform knows is one variant here; nothing is ever
//! constructed from a free-form string at evaluation time. The namespace of
//! a permission is its variant ([`Permission::Platform`] vs
//! [`Permission::Entity`]), so tier dispatch is a compile-time match. The
//! dotted string form exists only for serialization boundaries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown permission: {0}")]
pub struct ParsePermissionError(pub String);

/// Capabilities of the SaaS operator's staff, `platform.*` on the wire.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlatformPermission {
    EntitiesCreate,
    EntitiesRead,
    EntitiesUpdate,
    EntitiesDelete,
    EntitiesSuspend,
    UsersManage,
    UsersRead,
    BillingManage,
    BillingRead,
    AnalyticsRead,
    SupportTickets,
    SystemSettings,
    SystemLogs,
    IntegrationsManage,
}

impl PlatformPermission {
    pub const ALL: [PlatformPermission; 14] = [
        PlatformPermission::EntitiesCreate,
        PlatformPermission::EntitiesRead,
        PlatformPermission::EntitiesUpdate,
        PlatformPermission::EntitiesDelete,
        PlatformPermission::EntitiesSuspend,
        PlatformPermission::UsersManage,
        PlatformPermission::UsersRead,
        PlatformPermission::BillingManage,
        PlatformPermission::BillingRead,
        PlatformPermission::AnalyticsRead,
        PlatformPermission::SupportTickets,
        PlatformPermission::SystemSettings,
        PlatformPermission::SystemLogs,
        PlatformPermission::IntegrationsManage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PlatformPermission::EntitiesCreate => "platform.entities.create",
            PlatformPermission::EntitiesRead => "platform.entities.read",
            PlatformPermission::EntitiesUpdate => "platform.entities.update",
            PlatformPermission::EntitiesDelete => "platform.entities.delete",
            PlatformPermission::EntitiesSuspend => "platform.entities.suspend",
            PlatformPermission::UsersManage => "platform.users.manage",
            PlatformPermission::UsersRead => "platform.users.read",
            PlatformPermission::BillingManage => "platform.billing.manage",
            PlatformPermission::BillingRead => "platform.billing.read",
            PlatformPermission::AnalyticsRead => "platform.analytics.read",
            PlatformPermission::SupportTickets => "platform.support.tickets",
            PlatformPermission::SystemSettings => "platform.system.settings",
            PlatformPermission::SystemLogs => "platform.system.logs",
            PlatformPermission::IntegrationsManage => "platform.integrations.manage",
        }
    }
}

/// Capabilities inside one tenant organization, `entity.*` on the wire.
///
/// `Tenant*` variants cover renter records (leaseholders), not the tenant
/// organization itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EntityPermission {
    DashboardRead,
    PropertyCreate,
    PropertyRead,
    PropertyUpdate,
    PropertyDelete,
    TenantCreate,
    TenantRead,
    TenantUpdate,
    TenantDelete,
    LeaseCreate,
    LeaseRead,
    LeaseUpdate,
    LeaseDelete,
    MaintenanceCreate,
    MaintenanceRead,
    MaintenanceUpdate,
    MaintenanceAssign,
    FinancialRead,
    FinancialProcess,
    FinancialExport,
    ReportsRead,
    ReportsExport,
    UsersManage,
    UsersRead,
    SettingsManage,
}

impl EntityPermission {
    pub const ALL: [EntityPermission; 25] = [
        EntityPermission::DashboardRead,
        EntityPermission::PropertyCreate,
        EntityPermission::PropertyRead,
        EntityPermission::PropertyUpdate,
        EntityPermission::PropertyDelete,
        EntityPermission::TenantCreate,
        EntityPermission::TenantRead,
        EntityPermission::TenantUpdate,
        EntityPermission::TenantDelete,
        EntityPermission::LeaseCreate,
        EntityPermission::LeaseRead,
        EntityPermission::LeaseUpdate,
        EntityPermission::LeaseDelete,
        EntityPermission::MaintenanceCreate,
        EntityPermission::MaintenanceRead,
        EntityPermission::MaintenanceUpdate,
        EntityPermission::MaintenanceAssign,
        EntityPermission::FinancialRead,
        EntityPermission::FinancialProcess,
        EntityPermission::FinancialExport,
        EntityPermission::ReportsRead,
        EntityPermission::ReportsExport,
        EntityPermission::UsersManage,
        EntityPermission::UsersRead,
        EntityPermission::SettingsManage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EntityPermission::DashboardRead => "entity.dashboard.read",
            EntityPermission::PropertyCreate => "entity.property.create",
            EntityPermission::PropertyRead => "entity.property.read",
            EntityPermission::PropertyUpdate => "entity.property.update",
            EntityPermission::PropertyDelete => "entity.property.delete",
            EntityPermission::TenantCreate => "entity.tenant.create",
            EntityPermission::TenantRead => "entity.tenant.read",
            EntityPermission::TenantUpdate => "entity.tenant.update",
            EntityPermission::TenantDelete => "entity.tenant.delete",
            EntityPermission::LeaseCreate => "entity.lease.create",
            EntityPermission::LeaseRead => "entity.lease.read",
            EntityPermission::LeaseUpdate => "entity.lease.update",
            EntityPermission::LeaseDelete => "entity.lease.delete",
            EntityPermission::MaintenanceCreate => "entity.maintenance.create",
            EntityPermission::MaintenanceRead => "entity.maintenance.read",
            EntityPermission::MaintenanceUpdate => "entity.maintenance.update",
            EntityPermission::MaintenanceAssign => "entity.maintenance.assign",
            EntityPermission::FinancialRead => "entity.financial.read",
            EntityPermission::FinancialProcess => "entity.financial.process",
            EntityPermission::FinancialExport => "entity.financial.export",
            EntityPermission::ReportsRead => "entity.reports.read",
            EntityPermission::ReportsExport => "entity.reports.export",
            EntityPermission::UsersManage => "entity.users.manage",
            EntityPermission::UsersRead => "entity.users.read",
            EntityPermission::SettingsManage => "entity.settings.manage",
        }
    }
}

/// A capability from either tier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Permission {
    Platform(PlatformPermission),
    Entity(EntityPermission),
}

impl Permission {
    /// The string prefix before the first `.`, which alone decides tier
    /// dispatch.
    pub fn namespace(self) -> &'static str {
        match self {
            Permission::Platform(_) => "platform",
            Permission::Entity(_) => "entity",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Permission::Platform(p) => p.as_str(),
            Permission::Entity(p) => p.as_str(),
        }
    }
}

impl From<PlatformPermission> for Permission {
    fn from(value: PlatformPermission) -> Self {
        Permission::Platform(value)
    }
}

impl From<EntityPermission> for Permission {
    fn from(value: EntityPermission) -> Self {
        Permission::Entity(value)
    }
}

impl FromStr for Permission {
    type Err = ParsePermissionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.starts_with("platform.") {
            if let Some(p) = PlatformPermission::ALL.iter().find(|p| p.as_str() == value) {
                return Ok(Permission::Platform(*p));
            }
        } else if value.starts_with("entity.") {
            if let Some(p) = EntityPermission::ALL.iter().find(|p| p.as_str() == value) {
                return Ok(Permission::Entity(*p));
            }
        }
        Err(ParsePermissionError(value.to_string()))
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Permission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
