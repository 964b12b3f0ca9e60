//! Domain model for the propsuite multi-tenant platform.
//!
//! Entities here are plain values handed to the authorization core by the
//! session/identity provider. Persistence lives behind that provider; this
//! crate never touches storage.

pub mod entities;
pub mod memberships;
pub mod roles;
pub mod users;

pub use entities::{Entity, EntityStatus, SubscriptionTier};
pub use memberships::{EntityMembership, MembershipStatus};
pub use roles::{EntityRole, ParseRoleError, PlatformRole};
pub use users::User;
