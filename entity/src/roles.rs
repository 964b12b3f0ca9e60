use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

/// Role held by the SaaS operator's own staff, independent of any tenant.
///
/// A user carries at most one platform role. Superadmin outranks Manager
/// outranks Staff; Support and Developer are parallel specialist tracks.
/// Rank is expressed only through the role tables, never through this enum.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlatformRole {
    Superadmin,
    Manager,
    Staff,
    Support,
    Developer,
}

impl PlatformRole {
    pub const ALL: [PlatformRole; 5] = [
        PlatformRole::Superadmin,
        PlatformRole::Manager,
        PlatformRole::Staff,
        PlatformRole::Support,
        PlatformRole::Developer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PlatformRole::Superadmin => "platform_superadmin",
            PlatformRole::Manager => "platform_manager",
            PlatformRole::Staff => "platform_staff",
            PlatformRole::Support => "platform_support",
            PlatformRole::Developer => "platform_developer",
        }
    }
}

impl FromStr for PlatformRole {
    type Err = ParseRoleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "platform_superadmin" => Ok(PlatformRole::Superadmin),
            "platform_manager" => Ok(PlatformRole::Manager),
            "platform_staff" => Ok(PlatformRole::Staff),
            "platform_support" => Ok(PlatformRole::Support),
            "platform_developer" => Ok(PlatformRole::Developer),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

impl fmt::Display for PlatformRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PlatformRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PlatformRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Role a user holds within one specific entity membership.
///
/// `Tenant` is the renter-portal role, not to be confused with the tenant
/// *organization* (see [`crate::Entity`]).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EntityRole {
    Admin,
    Manager,
    Staff,
    Tenant,
}

impl EntityRole {
    pub const ALL: [EntityRole; 4] = [
        EntityRole::Admin,
        EntityRole::Manager,
        EntityRole::Staff,
        EntityRole::Tenant,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EntityRole::Admin => "entity_admin",
            EntityRole::Manager => "entity_manager",
            EntityRole::Staff => "entity_staff",
            EntityRole::Tenant => "entity_tenant",
        }
    }
}

impl FromStr for EntityRole {
    type Err = ParseRoleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "entity_admin" => Ok(EntityRole::Admin),
            "entity_manager" => Ok(EntityRole::Manager),
            "entity_staff" => Ok(EntityRole::Staff),
            "entity_tenant" => Ok(EntityRole::Tenant),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

impl fmt::Display for EntityRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EntityRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EntityRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_roles_round_trip() {
        for role in PlatformRole::ALL {
            assert_eq!(role.as_str().parse::<PlatformRole>(), Ok(role));
        }
    }

    #[test]
    fn entity_roles_round_trip() {
        for role in EntityRole::ALL {
            assert_eq!(role.as_str().parse::<EntityRole>(), Ok(role));
        }
    }

    #[test]
    fn rejects_cross_tier_strings() {
        assert!("entity_admin".parse::<PlatformRole>().is_err());
        assert!("platform_superadmin".parse::<EntityRole>().is_err());
        assert!("owner".parse::<EntityRole>().is_err());
    }

    #[test]
    fn serde_uses_wire_strings() {
        let json = serde_json::to_string(&PlatformRole::Support).unwrap();
        assert_eq!(json, "\"platform_support\"");
        let back: EntityRole = serde_json::from_str("\"entity_manager\"").unwrap();
        assert_eq!(back, EntityRole::Manager);
    }
}
