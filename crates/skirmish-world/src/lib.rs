//! World geometry queries for SKIRMISH.
//!
//! Movement safety checks see the world through the [`SpatialQuery`] trait;
//! [`StaticWorld`] is the concrete axis-aligned-box geometry the simulation
//! and tests use.

pub mod aabb;
pub mod query;
pub mod static_world;

pub use aabb::Aabb;
pub use query::SpatialQuery;
pub use static_world::StaticWorld;
