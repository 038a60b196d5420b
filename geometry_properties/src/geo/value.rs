use std::fmt::{Debug, Display};

/// A single property value.
///
/// Numbers that come from an interchange format such as `GeoJSON` usually arrive as `Double`,
/// even when they are whole numbers.
#[derive(Clone, PartialEq)]
pub enum GeoValue {
	Bool(bool),
	Double(f64),
	Int(i64),
	Null,
	String(String),
}

impl GeoValue {
	/// Name of the variant, as used in type-mismatch messages.
	pub fn type_name(&self) -> &'static str {
		match self {
			GeoValue::Bool(_) => "bool",
			GeoValue::Double(_) => "float64",
			GeoValue::Int(_) => "int",
			GeoValue::Null => "null",
			GeoValue::String(_) => "string",
		}
	}
}

impl Debug for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
			Self::Double(v) => f.debug_tuple("Double").field(v).finish(),
			Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
			Self::Null => f.debug_tuple("Null").finish(),
			Self::String(v) => f.debug_tuple("String").field(v).finish(),
		}
	}
}

impl Display for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			GeoValue::Bool(v) => write!(f, "{v}"),
			GeoValue::Double(v) => write!(f, "{v}"),
			GeoValue::Int(v) => write!(f, "{v}"),
			GeoValue::Null => f.write_str("null"),
			GeoValue::String(v) => f.write_str(v),
		}
	}
}

impl From<&str> for GeoValue {
	fn from(value: &str) -> Self {
		GeoValue::String(value.to_string())
	}
}

impl From<&String> for GeoValue {
	fn from(value: &String) -> Self {
		GeoValue::String(value.clone())
	}
}

impl From<String> for GeoValue {
	fn from(value: String) -> Self {
		GeoValue::String(value)
	}
}

impl From<bool> for GeoValue {
	fn from(value: bool) -> Self {
		GeoValue::Bool(value)
	}
}

impl From<f32> for GeoValue {
	fn from(value: f32) -> Self {
		GeoValue::Double(f64::from(value))
	}
}

impl From<f64> for GeoValue {
	fn from(value: f64) -> Self {
		GeoValue::Double(value)
	}
}

macro_rules! impl_from_int {
	($($t:ty),*) => {$(
		impl From<$t> for GeoValue {
			fn from(value: $t) -> Self {
				GeoValue::Int(i64::from(value))
			}
		}
	)*}
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl<T> From<Option<T>> for GeoValue
where
	GeoValue: From<T>,
{
	fn from(value: Option<T>) -> Self {
		value.map_or(GeoValue::Null, GeoValue::from)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(GeoValue::from(true), "bool")]
	#[case(GeoValue::from(1.5), "float64")]
	#[case(GeoValue::from(1.5f32), "float64")]
	#[case(GeoValue::from(-3), "int")]
	#[case(GeoValue::from(3u32), "int")]
	#[case(GeoValue::from("a"), "string")]
	#[case(GeoValue::Null, "null")]
	fn test_type_name(#[case] value: GeoValue, #[case] expected: &str) {
		assert_eq!(value.type_name(), expected);
	}

	#[test]
	fn test_integers_stay_integers() {
		assert_eq!(GeoValue::from(7u8), GeoValue::Int(7));
		assert_eq!(GeoValue::from(-7i16), GeoValue::Int(-7));
		assert_eq!(GeoValue::from(i64::MAX), GeoValue::Int(i64::MAX));
		assert_ne!(GeoValue::from(7), GeoValue::from(7.0));
	}

	#[test]
	fn test_option() {
		assert_eq!(GeoValue::from(None::<bool>), GeoValue::Null);
		assert_eq!(GeoValue::from(Some("x")), GeoValue::from("x"));
		assert_eq!(GeoValue::from(None::<i32>), GeoValue::Null);
	}

	#[test]
	fn test_display() {
		assert_eq!(GeoValue::from(true).to_string(), "true");
		assert_eq!(GeoValue::from(3.9).to_string(), "3.9");
		assert_eq!(GeoValue::from(-2).to_string(), "-2");
		assert_eq!(GeoValue::from("Nice").to_string(), "Nice");
		assert_eq!(GeoValue::Null.to_string(), "null");
	}

	#[test]
	fn test_debug() {
		assert_eq!(format!("{:?}", GeoValue::from("a")), "String(\"a\")");
		assert_eq!(format!("{:?}", GeoValue::from(2)), "Int(2)");
		assert_eq!(format!("{:?}", GeoValue::Null), "Null");
	}
}
