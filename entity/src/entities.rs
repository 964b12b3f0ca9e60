use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tenant organization (property-management company).
///
/// Directory metadata only: the authorization core never reads subscription
/// or lifecycle status when evaluating a permission. Entity lifecycle is
/// managed by platform operations behind an external store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub subscription: SubscriptionTier,
    pub status: EntityStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    Starter,
    Professional,
    Enterprise,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityStatus {
    Active,
    Suspended,
    Inactive,
}
