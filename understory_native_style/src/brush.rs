// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colour normalization and brush resources.
//!
//! Hosts deliver colours as 32-bit `0xAARRGGBB` numbers. This module turns
//! them into [`peniko::Brush`] values, keeps the lazily-created default border
//! brush ([`DefaultBrushStore`]), and defines the seam through which templated
//! controls keep their secondary brushes in sync ([`ResourceBrushes`]).

#[cfg(not(feature = "std"))]
use core::cell::OnceCell as BrushCell;
#[cfg(feature = "std")]
use std::sync::OnceLock as BrushCell;

use peniko::{Brush, Color};

use crate::value::PropValue;

/// Builds an sRGB colour from a packed `0xAARRGGBB` value.
///
/// # Example
///
/// ```rust
/// use peniko::Color;
/// use understory_native_style::color_from_argb;
///
/// assert_eq!(color_from_argb(0x80FF_0000), Color::from_rgba8(0xFF, 0, 0, 0x80));
/// ```
#[must_use]
pub fn color_from_argb(argb: u32) -> Color {
    let [a, r, g, b] = argb.to_be_bytes();
    Color::from_rgba8(r, g, b, a)
}

/// Returns `true` if `value` can be turned into a brush.
#[must_use]
#[inline]
pub fn is_valid_color_value(value: &PropValue) -> bool {
    value.is_number()
}

/// Converts a colour value into a solid brush.
///
/// Returns `None` when [`is_valid_color_value`] is `false`.
#[must_use]
pub fn brush_from(value: &PropValue) -> Option<Brush> {
    value
        .number()
        .map(|n| Brush::Solid(color_from_argb(argb_bits(n))))
}

/// Reinterprets a numeric colour as its packed bits.
///
/// Colours may arrive as signed 32-bit integers, so `-16777216` and
/// `4278190080` both mean opaque black.
#[expect(
    clippy::cast_possible_truncation,
    reason = "packed colours only use the low 32 bits"
)]
fn argb_bits(value: f64) -> u32 {
    value as i64 as u32
}

/// Holds the brush applied to borders that have a width but no colour.
///
/// The brush is created on first use and never changes afterwards. One store
/// is shared by every applier and passed to them by reference.
///
/// With the `std` feature the store is `Sync` and creation happens exactly
/// once, so it can live in a `static` read from any thread. Without `std` it
/// is confined to one thread.
///
/// # Example
///
/// ```rust
/// use peniko::{Brush, Color};
/// use understory_native_style::DefaultBrushStore;
///
/// let store = DefaultBrushStore::new(|| Brush::Solid(Color::from_rgba8(1, 2, 3, 255)));
/// assert!(!store.is_initialized());
/// assert_eq!(
///     store.default_border_brush(),
///     &Brush::Solid(Color::from_rgba8(1, 2, 3, 255))
/// );
/// assert!(store.is_initialized());
/// ```
#[derive(Debug)]
pub struct DefaultBrushStore {
    border: BrushCell<Brush>,
    make_border: fn() -> Brush,
}

impl DefaultBrushStore {
    /// Creates a store that builds the default border brush with `make_border`.
    #[must_use]
    pub const fn new(make_border: fn() -> Brush) -> Self {
        Self {
            border: BrushCell::new(),
            make_border,
        }
    }

    /// Returns the default border brush, creating it on first call.
    pub fn default_border_brush(&self) -> &Brush {
        self.border.get_or_init(self.make_border)
    }

    /// Returns `true` once the default border brush has been created.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.border.get().is_some()
    }
}

impl Default for DefaultBrushStore {
    fn default() -> Self {
        Self::new(opaque_black)
    }
}

/// Borders drawn without a colour are black on the other platforms.
fn opaque_black() -> Brush {
    Brush::Solid(Color::from_rgba8(0, 0, 0, 0xFF))
}

/// Keeps secondary brushes of a composite control in sync with its primary ones.
///
/// Templated controls draw parts of themselves with brushes looked up from
/// their own resources (pointer-over backgrounds, focus borders, ...). After
/// every brush-affecting update the applier calls the matching `refresh_*`
/// method with the new brush, or `None` when the property was cleared.
pub trait ResourceBrushes<E: ?Sized> {
    /// Called after the background brush of `element` changed.
    fn refresh_background(&self, element: &mut E, brush: Option<&Brush>);

    /// Called after the foreground brush of `element` changed.
    fn refresh_foreground(&self, element: &mut E, brush: Option<&Brush>);

    /// Called after the border brush of `element` changed.
    fn refresh_border(&self, element: &mut E, brush: Option<&Brush>);
}

/// A [`ResourceBrushes`] implementation for elements without secondary brushes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoResourceBrushes;

impl<E: ?Sized> ResourceBrushes<E> for NoResourceBrushes {
    #[inline]
    fn refresh_background(&self, _element: &mut E, _brush: Option<&Brush>) {}

    #[inline]
    fn refresh_foreground(&self, _element: &mut E, _brush: Option<&Brush>) {}

    #[inline]
    fn refresh_border(&self, _element: &mut E, _brush: Option<&Brush>) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn argb_unpacks_channels() {
        assert_eq!(
            color_from_argb(0xFF11_2233),
            Color::from_rgba8(0x11, 0x22, 0x33, 0xFF)
        );
    }

    #[test]
    fn signed_and_unsigned_colours_agree() {
        let unsigned = brush_from(&PropValue::Number(4_278_190_080.0));
        let signed = brush_from(&PropValue::Number(-16_777_216.0));
        assert_eq!(unsigned, signed);
        assert_eq!(unsigned, Some(Brush::Solid(Color::from_rgba8(0, 0, 0, 0xFF))));
    }

    #[test]
    fn only_numbers_are_colours() {
        assert!(is_valid_color_value(&PropValue::Number(0.0)));
        assert!(!is_valid_color_value(&PropValue::from("red")));
        assert!(!is_valid_color_value(&PropValue::Null));
        assert_eq!(brush_from(&PropValue::Bool(true)), None);
    }

    #[test]
    fn default_store_builds_once() {
        static CALLS: AtomicU32 = AtomicU32::new(0);
        fn counting() -> Brush {
            CALLS.fetch_add(1, Ordering::Relaxed);
            opaque_black()
        }

        let store = DefaultBrushStore::new(counting);
        let first = store.default_border_brush().clone();
        let second = store.default_border_brush().clone();
        assert_eq!(first, second);
        assert_eq!(CALLS.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn default_store_is_black() {
        let store = DefaultBrushStore::default();
        assert_eq!(store.default_border_brush(), &opaque_black());
    }

    #[cfg(feature = "std")]
    #[test]
    fn static_store_is_shared_across_threads() {
        static STORE: DefaultBrushStore = DefaultBrushStore::new(opaque_black);

        let workers: [_; 4] = core::array::from_fn(|_| {
            std::thread::spawn(|| STORE.default_border_brush().clone())
        });
        for worker in workers {
            assert_eq!(worker.join().unwrap(), opaque_black());
        }
        assert!(STORE.is_initialized());
        assert!(core::ptr::eq(
            STORE.default_border_brush(),
            STORE.default_border_brush()
        ));
    }
}
