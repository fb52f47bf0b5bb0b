// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion from JSON property bags.

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde_json::Value;

use crate::value::{PropValue, PropertyUpdate};

/// Error returned when a JSON value has no [`PropValue`] equivalent.
///
/// Arrays and objects are not style values.
#[derive(Clone, PartialEq, Eq)]
pub struct UnsupportedValueError {
    /// The property whose value was rejected, when converting a property bag.
    pub property: Option<String>,
    /// The JSON kind that was rejected: `"array"` or `"object"`.
    pub kind: &'static str,
}

impl fmt::Debug for UnsupportedValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UnsupportedValueError {{ property: {:?}, kind: {:?} }}",
            self.property, self.kind
        )
    }
}

impl fmt::Display for UnsupportedValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.property {
            Some(property) => write!(f, "property {property:?} has an unsupported {} value", self.kind),
            None => write!(f, "unsupported {} value", self.kind),
        }
    }
}

impl core::error::Error for UnsupportedValueError {}

impl TryFrom<&Value> for PropValue {
    type Error = UnsupportedValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let unsupported = |kind| UnsupportedValueError {
            property: None,
            kind,
        };
        match value {
            Value::Null => Ok(Self::Null),
            Value::Bool(b) => Ok(Self::Bool(*b)),
            // Every JSON number has an `f64` reading unless arbitrary precision is on.
            Value::Number(n) => Ok(n.as_f64().map_or(Self::Null, Self::Number)),
            Value::String(s) => Ok(Self::String(s.clone())),
            Value::Array(_) => Err(unsupported("array")),
            Value::Object(_) => Err(unsupported("object")),
        }
    }
}

/// Converts a JSON object of property names to values into a batch of updates.
///
/// Updates follow the object's iteration order. A non-object input yields an
/// empty batch.
///
/// # Errors
///
/// Returns [`UnsupportedValueError`] naming the first property whose value is
/// an array or an object.
///
/// # Example
///
/// ```rust
/// use understory_native_style::{PropValue, updates_from_json};
///
/// let props = serde_json::json!({ "fontSize": 14, "fontFamily": null });
/// let updates = updates_from_json(&props).unwrap();
///
/// assert_eq!(updates.len(), 2);
/// assert!(updates.iter().any(|u| u.name == "fontSize" && u.value == PropValue::Number(14.0)));
///
/// let bad = serde_json::json!({ "padding": [1, 2] });
/// let err = updates_from_json(&bad).unwrap_err();
/// assert_eq!(err.property.as_deref(), Some("padding"));
/// ```
pub fn updates_from_json(props: &Value) -> Result<Vec<PropertyUpdate>, UnsupportedValueError> {
    let Some(object) = props.as_object() else {
        return Ok(Vec::new());
    };

    object
        .iter()
        .map(|(name, value)| {
            let value = PropValue::try_from(value).map_err(|mut err| {
                err.property = Some(name.to_owned());
                err
            })?;
            Ok(PropertyUpdate {
                name: name.to_owned(),
                value,
            })
        })
        .collect()
}
