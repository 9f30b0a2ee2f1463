// ============================================================================
// vlcvideo-core/src/binding/value.rs
// ============================================================================
//
// HOST VALUES: Values Crossing the Host Boundary
//
// Every argument a host passes in and every result a binding hands back is a
// `HostValue`. The numeric coercions follow the host's loose conversion rules
// closely enough for property writes: numbers and integers convert into each
// other, booleans become 0/1 and numeric strings parse.
//
// KEY COMPONENTS:
// - HostValue: The marshalled value enum
// - Coercion helpers: to_f64, to_i32, to_u32, ...
// - Serialize/Display implementations used by the CLI host

// ---- Internal crate imports ----
use super::HostObject;
use crate::error::{CoreResult, type_mismatch};

// ---- External crate imports ----
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

// ---- Standard library imports ----
use std::fmt;
use std::rc::Rc;

/// A value as seen by the scripting host.
#[derive(Clone)]
pub enum HostValue {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Integer(i64),
    String(String),
    Array(Vec<HostValue>),
    Object(Rc<dyn HostObject>),
}

impl HostValue {
    /// Host-side type name, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            HostValue::Undefined => "undefined",
            HostValue::Null => "null",
            HostValue::Bool(_) => "boolean",
            HostValue::Number(_) => "number",
            HostValue::Integer(_) => "integer",
            HostValue::String(_) => "string",
            HostValue::Array(_) => "array",
            HostValue::Object(_) => "object",
        }
    }

    pub fn is_nullish(&self) -> bool {
        matches!(self, HostValue::Undefined | HostValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            HostValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Rc<dyn HostObject>> {
        match self {
            HostValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Converts to a double.
    pub fn to_f64(&self) -> CoreResult<f64> {
        match self {
            HostValue::Number(n) => Ok(*n),
            HostValue::Integer(i) => Ok(*i as f64),
            HostValue::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            HostValue::String(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| type_mismatch("number", "non-numeric string")),
            other => Err(type_mismatch("number", other.type_name())),
        }
    }

    /// Converts to an integer, truncating fractions toward zero.
    pub fn to_i64(&self) -> CoreResult<i64> {
        match self {
            HostValue::Integer(i) => Ok(*i),
            _ => {
                let n = self.to_f64()?;
                if n.is_finite() {
                    Ok(n.trunc() as i64)
                } else {
                    Err(type_mismatch("integer", "non-finite number"))
                }
            }
        }
    }

    /// Converts to a signed 32-bit integer, saturating at the type's bounds.
    pub fn to_i32(&self) -> CoreResult<i32> {
        Ok(self.to_i64()?.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
    }

    /// Converts to an unsigned 32-bit integer, wrapping modulo 2^32 like the
    /// host's unsigned conversion (so `-1` becomes `u32::MAX`). Non-finite
    /// numbers become 0.
    pub fn to_u32(&self) -> CoreResult<u32> {
        if let HostValue::Integer(i) = self {
            return Ok(*i as u32);
        }
        let n = self.to_f64()?;
        if !n.is_finite() {
            return Ok(0);
        }
        Ok(n.trunc().rem_euclid(4_294_967_296.0) as u32)
    }

    /// Converts to a string; only strings qualify.
    pub fn to_string_value(&self) -> CoreResult<String> {
        match self {
            HostValue::String(s) => Ok(s.clone()),
            other => Err(type_mismatch("string", other.type_name())),
        }
    }
}

// ---- Conversions into host values ----

impl From<bool> for HostValue {
    fn from(value: bool) -> Self {
        HostValue::Bool(value)
    }
}

impl From<f64> for HostValue {
    fn from(value: f64) -> Self {
        HostValue::Number(value)
    }
}

impl From<i32> for HostValue {
    fn from(value: i32) -> Self {
        HostValue::Integer(value as i64)
    }
}

impl From<u32> for HostValue {
    fn from(value: u32) -> Self {
        HostValue::Integer(value as i64)
    }
}

impl From<String> for HostValue {
    fn from(value: String) -> Self {
        HostValue::String(value)
    }
}

impl From<&str> for HostValue {
    fn from(value: &str) -> Self {
        HostValue::String(value.to_string())
    }
}

impl From<Vec<String>> for HostValue {
    fn from(values: Vec<String>) -> Self {
        HostValue::Array(values.into_iter().map(HostValue::String).collect())
    }
}

impl PartialEq for HostValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (HostValue::Undefined, HostValue::Undefined) => true,
            (HostValue::Null, HostValue::Null) => true,
            (HostValue::Bool(a), HostValue::Bool(b)) => a == b,
            (HostValue::Number(a), HostValue::Number(b)) => a == b,
            (HostValue::Integer(a), HostValue::Integer(b)) => a == b,
            (HostValue::String(a), HostValue::String(b)) => a == b,
            (HostValue::Array(a), HostValue::Array(b)) => a == b,
            (HostValue::Object(a), HostValue::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostValue::Undefined => write!(f, "Undefined"),
            HostValue::Null => write!(f, "Null"),
            HostValue::Bool(b) => write!(f, "Bool({})", b),
            HostValue::Number(n) => write!(f, "Number({})", n),
            HostValue::Integer(i) => write!(f, "Integer({})", i),
            HostValue::String(s) => write!(f, "String({:?})", s),
            HostValue::Array(items) => f.debug_list().entries(items).finish(),
            HostValue::Object(obj) => write!(f, "Object({})", obj.class_name()),
        }
    }
}

/// Renders values the way a host console prints them.
impl fmt::Display for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostValue::Undefined => write!(f, "undefined"),
            HostValue::Null => write!(f, "null"),
            HostValue::Bool(b) => write!(f, "{}", b),
            HostValue::Number(n) => write!(f, "{}", n),
            HostValue::Integer(i) => write!(f, "{}", i),
            HostValue::String(s) => write!(f, "{}", s),
            HostValue::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    match item {
                        HostValue::String(s) => write!(f, "{:?}", s)?,
                        other => write!(f, "{}", other)?,
                    }
                }
                write!(f, "]")
            }
            HostValue::Object(obj) => write!(f, "[object {}]", obj.class_name()),
        }
    }
}

/// Objects serialise as a map of their readable properties.
impl Serialize for HostValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            HostValue::Undefined | HostValue::Null => serializer.serialize_unit(),
            HostValue::Bool(b) => serializer.serialize_bool(*b),
            HostValue::Number(n) => serializer.serialize_f64(*n),
            HostValue::Integer(i) => serializer.serialize_i64(*i),
            HostValue::String(s) => serializer.serialize_str(s),
            HostValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            HostValue::Object(obj) => {
                let properties = obj.properties();
                let mut map = serializer.serialize_map(Some(properties.len()))?;
                for property in properties {
                    match obj.get_property(property.name) {
                        Ok(value) => map.serialize_entry(property.name, &value)?,
                        Err(e) => log::debug!(
                            "Skipping {}.{} during serialization: {}",
                            obj.class_name(),
                            property.name,
                            e
                        ),
                    }
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_numeric_coercions() {
        assert_eq!(HostValue::Integer(3).to_f64().unwrap(), 3.0);
        assert_eq!(HostValue::Number(2.9).to_i64().unwrap(), 2);
        assert_eq!(HostValue::Number(-2.9).to_i64().unwrap(), -2);
        assert_eq!(HostValue::Bool(true).to_f64().unwrap(), 1.0);
        assert_eq!(HostValue::from(" 1.25 ").to_f64().unwrap(), 1.25);
        assert_eq!(HostValue::Integer(-1).to_u32().unwrap(), u32::MAX);
        assert_eq!(HostValue::Number(1e12).to_i32().unwrap(), i32::MAX);
        assert_eq!(HostValue::Number(1e20).to_u32().unwrap(), 1_661_992_960);
        assert_eq!(HostValue::Number(-1.5).to_u32().unwrap(), u32::MAX);
        assert_eq!(HostValue::Number(f64::NAN).to_u32().unwrap(), 0);
        assert!(HostValue::Number(f64::INFINITY).to_i32().is_err());
    }

    #[test]
    fn test_non_numeric_values_are_rejected() {
        for value in [
            HostValue::Undefined,
            HostValue::Null,
            HostValue::from("abc"),
            HostValue::Array(vec![]),
        ] {
            assert!(matches!(
                value.to_f64(),
                Err(CoreError::TypeMismatch { expected: "number", .. })
            ));
        }
        assert!(HostValue::Number(f64::INFINITY).to_i64().is_err());
    }

    #[test]
    fn test_display_quotes_strings_inside_arrays() {
        let value = HostValue::from(vec!["A".to_string(), "".to_string()]);
        assert_eq!(value.to_string(), r#"["A", ""]"#);
        assert_eq!(HostValue::from("A").to_string(), "A");
        assert_eq!(HostValue::Number(1.5).to_string(), "1.5");
    }

    #[test]
    fn test_serialize_scalars_and_arrays() {
        let value = HostValue::Array(vec![
            HostValue::Integer(2),
            HostValue::Number(0.5),
            HostValue::Null,
            HostValue::from("x"),
        ]);
        assert_eq!(serde_json::to_string(&value).unwrap(), r#"[2,0.5,null,"x"]"#);
    }
}
