//! The role tables: which role carries which permissions.
//!
//! Each row is authoritative on its own. Superadmin happens to be a superset
//! of Manager in the reference data, but the engine never relies on subset
//! relationships between rows. Cross-tier leakage is unrepresentable: the
//! platform map holds only [`PlatformPermission`], the entity map only
//! [`EntityPermission`].

use std::collections::{HashMap, HashSet};

use entity::{EntityRole, PlatformRole};
use once_cell::sync::Lazy;

use crate::permission::{EntityPermission, PlatformPermission};

/// Role → permission-set mappings for both tiers.
///
/// The single source of truth for every check: the engine consults nothing
/// else. Built once, never mutated.
#[derive(Clone, Debug)]
pub struct RoleTables {
    platform: HashMap<PlatformRole, HashSet<PlatformPermission>>,
    entity: HashMap<EntityRole, HashSet<EntityPermission>>,
}

static EMPTY_PLATFORM: Lazy<HashSet<PlatformPermission>> = Lazy::new(HashSet::new);
static EMPTY_ENTITY: Lazy<HashSet<EntityPermission>> = Lazy::new(HashSet::new);

static BUILTIN: Lazy<RoleTables> = Lazy::new(|| {
    use EntityPermission as E;
    use PlatformPermission as P;

    let mut platform = HashMap::new();
    platform.insert(
        PlatformRole::Superadmin,
        P::ALL.into_iter().collect::<HashSet<_>>(),
    );
    platform.insert(
        PlatformRole::Manager,
        HashSet::from([
            P::EntitiesCreate,
            P::EntitiesRead,
            P::EntitiesUpdate,
            P::EntitiesSuspend,
            P::UsersManage,
            P::UsersRead,
            P::BillingManage,
            P::BillingRead,
            P::AnalyticsRead,
            P::SupportTickets,
        ]),
    );
    platform.insert(
        PlatformRole::Staff,
        HashSet::from([
            P::EntitiesRead,
            P::UsersRead,
            P::AnalyticsRead,
            P::SupportTickets,
        ]),
    );
    platform.insert(
        PlatformRole::Support,
        HashSet::from([P::EntitiesRead, P::UsersRead, P::SupportTickets]),
    );
    platform.insert(
        PlatformRole::Developer,
        HashSet::from([P::EntitiesRead, P::SystemLogs, P::IntegrationsManage]),
    );

    let mut entity = HashMap::new();
    entity.insert(
        EntityRole::Admin,
        E::ALL.into_iter().collect::<HashSet<_>>(),
    );
    entity.insert(
        EntityRole::Manager,
        HashSet::from([
            E::DashboardRead,
            E::PropertyCreate,
            E::PropertyRead,
            E::PropertyUpdate,
            E::TenantCreate,
            E::TenantRead,
            E::TenantUpdate,
            E::LeaseCreate,
            E::LeaseRead,
            E::LeaseUpdate,
            E::MaintenanceCreate,
            E::MaintenanceRead,
            E::MaintenanceUpdate,
            E::MaintenanceAssign,
            E::FinancialRead,
            E::FinancialExport,
            E::ReportsRead,
            E::ReportsExport,
            E::UsersRead,
        ]),
    );
    entity.insert(
        EntityRole::Staff,
        HashSet::from([
            E::DashboardRead,
            E::PropertyRead,
            E::TenantRead,
            E::LeaseRead,
            E::MaintenanceCreate,
            E::MaintenanceRead,
            E::MaintenanceUpdate,
            E::ReportsRead,
        ]),
    );
    entity.insert(
        EntityRole::Tenant,
        HashSet::from([
            E::DashboardRead,
            E::LeaseRead,
            E::MaintenanceCreate,
            E::MaintenanceRead,
        ]),
    );

    RoleTables { platform, entity }
});

impl Default for RoleTables {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

impl RoleTables {
    /// The built-in reference tables, shared process-wide.
    pub fn builtin() -> &'static RoleTables {
        &BUILTIN
    }

    /// Custom tables, for deployments that narrow or extend the reference
    /// data. Roles missing from a map behave as carrying no permissions.
    pub fn new(
        platform: HashMap<PlatformRole, HashSet<PlatformPermission>>,
        entity: HashMap<EntityRole, HashSet<EntityPermission>>,
    ) -> Self {
        Self { platform, entity }
    }

    /// Total lookup: every role resolves, an absent row reads as empty.
    pub fn platform_permissions_for(&self, role: PlatformRole) -> &HashSet<PlatformPermission> {
        self.platform.get(&role).unwrap_or(&EMPTY_PLATFORM)
    }

    /// Total lookup, entity tier.
    pub fn entity_permissions_for(&self, role: EntityRole) -> &HashSet<EntityPermission> {
        self.entity.get(&role).unwrap_or(&EMPTY_ENTITY)
    }
}
