//! Authorization core for the propsuite platform.
//!
//! Two-tier RBAC: platform roles gate `platform.*` capabilities held by the
//! operator's staff, entity roles gate `entity.*` capabilities inside one
//! tenant organization. The catalog is a closed enumeration, the role tables
//! are fixed at construction, and the [`PolicyEngine`] is a pure query over
//! caller-owned values: no I/O, no locks, fail-closed on anything missing.

pub mod engine;
pub mod permission;
pub mod tables;

pub use engine::{EntityScope, PolicyEngine};
pub use permission::{EntityPermission, ParsePermissionError, Permission, PlatformPermission};
pub use tables::RoleTables;
