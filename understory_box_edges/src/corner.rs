// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box corners and corner-radius resolution.

use kurbo::RoundedRectRadii;

use crate::slots::{Slots, non_negative};

/// One addressable slot of a corner-radius property.
///
/// Physical corners come first, then their writing-direction-relative
/// counterparts, then the uniform [`Corner::All`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Corner {
    /// Physical top-left corner.
    TopLeft,
    /// Physical top-right corner.
    TopRight,
    /// Physical bottom-left corner.
    BottomLeft,
    /// Physical bottom-right corner.
    BottomRight,
    /// Top corner on the leading side.
    TopStart,
    /// Top corner on the trailing side.
    TopEnd,
    /// Bottom corner on the leading side.
    BottomStart,
    /// Bottom corner on the trailing side.
    BottomEnd,
    /// Every corner.
    All,
}

impl Corner {
    /// Number of corner slots.
    pub const COUNT: usize = 9;

    /// Every corner slot, in slot order.
    pub const VARIANTS: [Self; Self::COUNT] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
        Self::TopStart,
        Self::TopEnd,
        Self::BottomStart,
        Self::BottomEnd,
        Self::All,
    ];

    /// Returns the slot index of this corner.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Raw per-corner radius values.
///
/// # Example
///
/// ```rust
/// use kurbo::RoundedRectRadii;
/// use understory_box_edges::{Corner, CornerValues};
///
/// let mut radii = CornerValues::new();
/// radii.set(Corner::TopStart, 6.0);
/// radii.set(Corner::All, 1.0);
/// assert_eq!(radii.resolve(), RoundedRectRadii::new(6.0, 1.0, 1.0, 1.0));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct CornerValues {
    slots: Slots<{ Corner::COUNT }>,
}

impl CornerValues {
    /// Creates an array with every slot undefined.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an array from raw values, treating [`UNDEFINED`](crate::UNDEFINED)
    /// as an empty slot.
    #[must_use]
    pub fn from_raw(raw: [f64; Corner::COUNT]) -> Self {
        Self {
            slots: Slots::from_raw(raw),
        }
    }

    /// Returns the raw values, writing [`UNDEFINED`](crate::UNDEFINED) for empty slots.
    #[must_use]
    pub fn to_raw(&self) -> [f64; Corner::COUNT] {
        self.slots.to_raw()
    }

    /// Returns the value stored for `corner`, if any.
    #[must_use]
    #[inline]
    pub fn get(&self, corner: Corner) -> Option<f64> {
        self.slots.get(corner.index())
    }

    /// Stores an explicit radius for `corner`.
    #[inline]
    pub fn set(&mut self, corner: Corner, value: f64) {
        self.slots.put(corner.index(), Some(value));
    }

    /// Stores `value` for `corner`, or clears the slot when `None`.
    #[inline]
    pub fn set_value(&mut self, corner: Corner, value: Option<f64>) {
        self.slots.put(corner.index(), value);
    }

    /// Clears the slot for `corner`.
    #[inline]
    pub fn clear(&mut self, corner: Corner) {
        self.slots.put(corner.index(), None);
    }

    /// Returns `true` if no slot holds a value.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Resolves the slots into concrete radii.
    ///
    /// Each physical corner takes its own slot, else its logical counterpart,
    /// else `All` (or zero). Negative and NaN results are clamped to zero.
    #[must_use]
    pub fn resolve(&self) -> RoundedRectRadii {
        let uniform = non_negative(self.get(Corner::All).unwrap_or(0.0));
        let pick = |physical: Corner, logical: Corner| {
            non_negative(
                self.get(physical)
                    .or(self.get(logical))
                    .unwrap_or(uniform),
            )
        };

        RoundedRectRadii::new(
            pick(Corner::TopLeft, Corner::TopStart),
            pick(Corner::TopRight, Corner::TopEnd),
            pick(Corner::BottomRight, Corner::BottomEnd),
            pick(Corner::BottomLeft, Corner::BottomStart),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UNDEFINED;

    #[test]
    fn empty_resolves_to_square_corners() {
        assert_eq!(
            CornerValues::new().resolve(),
            RoundedRectRadii::from_single_radius(0.0)
        );
    }

    #[test]
    fn single_corner_over_uniform() {
        let mut radii = CornerValues::new();
        radii.set(Corner::BottomRight, 5.0);
        radii.set(Corner::All, 2.0);
        let resolved = radii.resolve();
        assert_eq!(resolved.top_left, 2.0);
        assert_eq!(resolved.top_right, 2.0);
        assert_eq!(resolved.bottom_left, 2.0);
        assert_eq!(resolved.bottom_right, 5.0);
    }

    #[test]
    fn physical_corner_beats_logical_corner() {
        let mut radii = CornerValues::new();
        radii.set(Corner::TopEnd, 9.0);
        radii.set(Corner::TopRight, 4.0);
        radii.set(Corner::BottomStart, 3.0);
        let resolved = radii.resolve();
        assert_eq!(resolved.top_right, 4.0);
        assert_eq!(resolved.bottom_left, 3.0);
        assert_eq!(resolved.top_left, 0.0);
    }

    #[test]
    fn negative_uniform_is_clamped() {
        let mut radii = CornerValues::new();
        radii.set(Corner::All, -2.0);
        radii.set(Corner::BottomEnd, -1.0);
        assert_eq!(radii.resolve(), RoundedRectRadii::from_single_radius(0.0));
    }

    #[test]
    fn undefined_slot_falls_back_after_clear() {
        let mut radii = CornerValues::new();
        radii.set(Corner::All, 3.0);
        radii.set(Corner::TopLeft, 8.0);
        radii.set_value(Corner::TopLeft, None);
        assert_eq!(radii.resolve(), RoundedRectRadii::from_single_radius(3.0));
    }

    #[test]
    fn raw_interop() {
        let mut raw = [UNDEFINED; Corner::COUNT];
        raw[Corner::BottomStart.index()] = 7.0;
        let radii = CornerValues::from_raw(raw);
        assert_eq!(radii.resolve(), RoundedRectRadii::new(0.0, 0.0, 0.0, 7.0));
        assert_eq!(radii.to_raw(), raw);
    }
}
