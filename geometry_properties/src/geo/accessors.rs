//! Typed getters and the setter for [`Geometry`] properties.
//!
//! A getter succeeds when the stored [`GeoValue`] has the requested variant. The only coercion
//! is `Double` to `int`, which truncates toward zero; `Int` is never widened to `float64`.

use super::{GeoProperties, GeoValue, Geometry};
use anyhow::{Result, bail};

/// Conversion from a stored [`GeoValue`] into a Rust type.
///
/// `Default::default()` is the value returned by the `property_must_*` getters when no
/// default is supplied.
pub trait FromGeoValue: Sized + Default {
	const TYPE_NAME: &'static str;

	fn from_geo_value(value: &GeoValue) -> Option<Self>;
}

impl FromGeoValue for bool {
	const TYPE_NAME: &'static str = "bool";

	fn from_geo_value(value: &GeoValue) -> Option<Self> {
		match value {
			GeoValue::Bool(v) => Some(*v),
			_ => None,
		}
	}
}

impl FromGeoValue for i64 {
	const TYPE_NAME: &'static str = "int";

	fn from_geo_value(value: &GeoValue) -> Option<Self> {
		match value {
			GeoValue::Int(v) => Some(*v),
			// saturates on overflow, NaN becomes 0
			GeoValue::Double(v) => Some(*v as i64),
			_ => None,
		}
	}
}

impl FromGeoValue for f64 {
	const TYPE_NAME: &'static str = "float64";

	fn from_geo_value(value: &GeoValue) -> Option<Self> {
		match value {
			GeoValue::Double(v) => Some(*v),
			_ => None,
		}
	}
}

impl FromGeoValue for String {
	const TYPE_NAME: &'static str = "string";

	fn from_geo_value(value: &GeoValue) -> Option<Self> {
		match value {
			GeoValue::String(v) => Some(v.clone()),
			_ => None,
		}
	}
}

impl Geometry {
	/// Inserts or overwrites `key`. The property mapping is created if it doesn't exist yet.
	pub fn set_property<K, V>(&mut self, key: K, value: V)
	where
		K: Into<String>,
		GeoValue: From<V>,
	{
		let properties = self.properties.get_or_insert_with(|| {
			log::trace!("allocate property mapping");
			GeoProperties::new()
		});
		properties.insert(key.into(), GeoValue::from(value));
	}

	/// Reads `key` as `T`.
	///
	/// Fails with ``type assertion of `key` to T failed`` if the key is missing or holds an
	/// incompatible value.
	pub fn property<T: FromGeoValue>(&self, key: &str) -> Result<T> {
		let value = self.properties.as_ref().and_then(|p| p.get(key));
		let Some(v) = value.and_then(T::from_geo_value) else {
			let found = value.map_or("missing", GeoValue::type_name);
			log::trace!("property `{key}` is {found}, expected {}", T::TYPE_NAME);
			bail!("type assertion of `{key}` to {} failed", T::TYPE_NAME)
		};
		Ok(v)
	}

	/// Reads `key` as `T`, returning `default` (or `T::default()`) instead of an error.
	pub fn property_must<T: FromGeoValue>(&self, key: &str, default: Option<T>) -> T {
		self.property(key).unwrap_or_else(|_| default.unwrap_or_default())
	}

	pub fn property_bool(&self, key: &str) -> Result<bool> {
		self.property(key)
	}

	/// Accepts `Int` values as well as `Double` values, which are truncated toward zero.
	pub fn property_int(&self, key: &str) -> Result<i64> {
		self.property(key)
	}

	/// Accepts `Double` values only.
	pub fn property_f64(&self, key: &str) -> Result<f64> {
		self.property(key)
	}

	pub fn property_string(&self, key: &str) -> Result<String> {
		self.property(key)
	}

	/// Useful when a plain `bool` is needed, e.g.
	/// `draw(g.property_must_bool("visible", None), g.property_must_bool("filled", Some(true)))`.
	pub fn property_must_bool(&self, key: &str, default: Option<bool>) -> bool {
		self.property_must(key, default)
	}

	pub fn property_must_int(&self, key: &str, default: Option<i64>) -> i64 {
		self.property_must(key, default)
	}

	pub fn property_must_f64(&self, key: &str, default: Option<f64>) -> f64 {
		self.property_must(key, default)
	}

	pub fn property_must_string(&self, key: &str, default: Option<String>) -> String {
		self.property_must(key, default)
	}
}
