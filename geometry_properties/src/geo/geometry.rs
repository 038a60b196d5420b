use super::GeoProperties;

/// The object that owns a property mapping.
///
/// Coordinates and serialization live elsewhere; only the properties are modelled here. The
/// mapping stays `None` until the first call to [`Geometry::set_property`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Geometry {
	pub properties: Option<GeoProperties>,
}

impl Geometry {
	pub fn new() -> Self {
		Self { properties: None }
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		use super::GeoValue;
		Self {
			properties: Some(GeoProperties::from(vec![
				("name", GeoValue::from("Nice")),
				("population", GeoValue::from(348_085)),
				("area", GeoValue::from(71.92)),
				("is_nice", GeoValue::from(true)),
			])),
		}
	}
}
