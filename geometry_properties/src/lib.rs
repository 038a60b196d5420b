//! Typed access to the property mapping attached to a [`Geometry`].
//!
//! Values are stored as [`GeoValue`]s. The `property_*` getters return an error when a key is
//! missing or holds a different kind of value, the `property_must_*` getters fall back to a
//! default instead.

mod geo;

pub use geo::*;
