// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dynamically-typed property values delivered by the host.
//!
//! This module provides [`PropValue`], the value half of a property update,
//! and [`PropertyUpdate`], an owned `(name, value)` pair.

use alloc::string::String;
use core::fmt;

/// The dynamic type of a [`PropValue`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// No value; the property was removed.
    Null,
    /// A boolean.
    Bool,
    /// A double-precision number.
    Number,
    /// A string.
    String,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
        })
    }
}

/// A property value as delivered by the host's view-manager layer.
///
/// Handlers branch on the predicates ([`is_number`](Self::is_number),
/// [`is_string`](Self::is_string), ...) before calling the matching `as_*`
/// accessor. The `as_*` accessors treat a mismatch as a caller bug and panic;
/// the `Option`-returning accessors ([`number`](Self::number),
/// [`string`](Self::string), [`boolean`](Self::boolean)) never do.
///
/// # Example
///
/// ```rust
/// use understory_native_style::{PropValue, ValueKind};
///
/// let size = PropValue::from(14.0);
/// assert!(size.is_number());
/// assert_eq!(size.as_number(), 14.0);
///
/// let family = PropValue::from("Segoe UI");
/// assert_eq!(family.kind(), ValueKind::String);
/// assert_eq!(family.number(), None);
///
/// assert!(PropValue::from(None::<f64>).is_null());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum PropValue {
    /// No value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(f64),
    /// A string.
    String(String),
}

impl PropValue {
    /// Returns the dynamic type of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
        }
    }

    /// Returns `true` for [`PropValue::Null`].
    #[must_use]
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for [`PropValue::Bool`].
    #[must_use]
    #[inline]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    /// Returns `true` for [`PropValue::Number`].
    #[must_use]
    #[inline]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Returns `true` for [`PropValue::String`].
    #[must_use]
    #[inline]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Returns the number, if this is a number.
    #[must_use]
    #[inline]
    pub const fn number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string, if this is a string.
    #[must_use]
    #[inline]
    pub fn string(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean, if this is a boolean.
    #[must_use]
    #[inline]
    pub const fn boolean(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number.
    ///
    /// # Panics
    ///
    /// Panics if this is not a number.
    #[must_use]
    #[track_caller]
    pub fn as_number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            other => panic!("expected a number property value, found {}", other.kind()),
        }
    }

    /// Returns the string.
    ///
    /// # Panics
    ///
    /// Panics if this is not a string.
    #[must_use]
    #[track_caller]
    pub fn as_str(&self) -> &str {
        match self {
            Self::String(s) => s,
            other => panic!("expected a string property value, found {}", other.kind()),
        }
    }

    /// Returns the boolean.
    ///
    /// # Panics
    ///
    /// Panics if this is not a boolean.
    #[must_use]
    #[track_caller]
    pub fn as_bool(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            other => panic!("expected a bool property value, found {}", other.kind()),
        }
    }

    /// Returns the truthiness of this value.
    ///
    /// `Null`, `false`, `0` and NaN are falsy. Strings are read as boolean
    /// text: the empty string and the tokens `false`, `0`, `no`, `off`, `n`
    /// and `f` (ignoring ASCII case and surrounding whitespace) are falsy.
    /// Every other value is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !is_false_token(s.trim()),
        }
    }
}

fn is_false_token(token: &str) -> bool {
    token.is_empty()
        || ["false", "0", "no", "off", "n", "f"]
            .iter()
            .any(|falsy| token.eq_ignore_ascii_case(falsy))
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for PropValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for PropValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// One changed property: a name and its new value.
///
/// # Example
///
/// ```rust
/// use understory_native_style::{PropValue, PropertyUpdate};
///
/// let update = PropertyUpdate::new("paddingLeft", 4.0);
/// assert_eq!(update.name, "paddingLeft");
/// assert_eq!(update.value, PropValue::Number(4.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyUpdate {
    /// The host-side property name, e.g. `"borderTopWidth"`.
    pub name: String,
    /// The new value.
    pub value: PropValue,
}

impl PropertyUpdate {
    /// Creates a new update.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
