use super::GeoValue;
use std::{
	collections::{BTreeMap, btree_map},
	fmt::Debug,
};

/// The property mapping of a geometry. Keys are unique; entries can be added or overwritten,
/// never removed.
#[derive(Clone, Default, PartialEq)]
pub struct GeoProperties {
	properties: BTreeMap<String, GeoValue>,
}

impl GeoProperties {
	pub fn new() -> GeoProperties {
		GeoProperties {
			properties: BTreeMap::new(),
		}
	}
	pub fn insert(&mut self, key: String, value: GeoValue) {
		self.properties.insert(key, value);
	}
	pub fn get(&self, key: &str) -> Option<&GeoValue> {
		self.properties.get(key)
	}
	pub fn len(&self) -> usize {
		self.properties.len()
	}
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}
	pub fn iter(&self) -> btree_map::Iter<'_, String, GeoValue> {
		self.properties.iter()
	}
}

impl IntoIterator for GeoProperties {
	type Item = (String, GeoValue);
	type IntoIter = btree_map::IntoIter<String, GeoValue>;
	fn into_iter(self) -> Self::IntoIter {
		self.properties.into_iter()
	}
}

impl<'a> IntoIterator for &'a GeoProperties {
	type Item = (&'a String, &'a GeoValue);
	type IntoIter = btree_map::Iter<'a, String, GeoValue>;
	fn into_iter(self) -> Self::IntoIter {
		self.properties.iter()
	}
}

impl From<Vec<(&str, GeoValue)>> for GeoProperties {
	fn from(value: Vec<(&str, GeoValue)>) -> Self {
		GeoProperties {
			properties: value.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
		}
	}
}

impl FromIterator<(String, GeoValue)> for GeoProperties {
	fn from_iter<T: IntoIterator<Item = (String, GeoValue)>>(iter: T) -> Self {
		GeoProperties {
			properties: BTreeMap::from_iter(iter),
		}
	}
}

impl Debug for GeoProperties {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.properties.iter()).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_insert_overwrites() {
		let mut properties = GeoProperties::new();
		assert!(properties.is_empty());

		properties.insert("name".to_string(), GeoValue::from("Nice"));
		properties.insert("name".to_string(), GeoValue::from("Paris"));

		assert_eq!(properties.len(), 1);
		assert_eq!(properties.get("name"), Some(&GeoValue::from("Paris")));
		assert_eq!(properties.get("other"), None);
	}

	#[test]
	fn test_from_vec_and_iter() {
		let properties = GeoProperties::from(vec![
			("population", GeoValue::from(348_085)),
			("is_nice", GeoValue::from(true)),
		]);

		let keys = properties.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>();
		assert_eq!(keys, vec!["is_nice", "population"]);

		let collected = properties.clone().into_iter().collect::<GeoProperties>();
		assert_eq!(collected, properties);
	}

	#[test]
	fn test_debug() {
		let properties = GeoProperties::from(vec![("a", GeoValue::from(1)), ("b", GeoValue::from("x"))]);
		assert_eq!(format!("{properties:?}"), "{\"a\": Int(1), \"b\": String(\"x\")}");
	}
}
