// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box edges and edge-value resolution.

use kurbo::Insets;

use crate::slots::{Slots, non_negative};

/// One addressable slot of a four-sided box property.
///
/// The first four variants are physical edges. [`Edge::Start`] and
/// [`Edge::End`] are writing-direction-relative; [`Edge::Horizontal`] and
/// [`Edge::Vertical`] address both edges of an axis; [`Edge::All`] is the
/// uniform shorthand.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Edge {
    /// The physical left edge.
    Left,
    /// The physical top edge.
    Top,
    /// The physical right edge.
    Right,
    /// The physical bottom edge.
    Bottom,
    /// The leading edge in the writing direction.
    Start,
    /// The trailing edge in the writing direction.
    End,
    /// Left and right together.
    Horizontal,
    /// Top and bottom together.
    Vertical,
    /// Every edge.
    All,
}

impl Edge {
    /// Number of edge slots.
    pub const COUNT: usize = 9;

    /// Every edge slot, in slot order.
    pub const VARIANTS: [Self; Self::COUNT] = [
        Self::Left,
        Self::Top,
        Self::Right,
        Self::Bottom,
        Self::Start,
        Self::End,
        Self::Horizontal,
        Self::Vertical,
        Self::All,
    ];

    /// Returns the slot index of this edge.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Raw per-edge values for one box property (padding, border width, ...).
///
/// Slots are written in place as updates arrive and the full array is
/// re-resolved with [`EdgeValues::resolve`] whenever a concrete thickness is
/// needed.
///
/// # Example
///
/// ```rust
/// use kurbo::Insets;
/// use understory_box_edges::{Edge, EdgeValues};
///
/// let mut border = EdgeValues::new();
/// border.set(Edge::Horizontal, 2.0);
/// border.set(Edge::Top, 1.0);
/// assert_eq!(border.resolve(), Insets::new(2.0, 1.0, 2.0, 0.0));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct EdgeValues {
    slots: Slots<{ Edge::COUNT }>,
}

impl EdgeValues {
    /// Creates an array with every slot undefined.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an array from raw values, treating [`UNDEFINED`](crate::UNDEFINED)
    /// as an empty slot.
    #[must_use]
    pub fn from_raw(raw: [f64; Edge::COUNT]) -> Self {
        Self {
            slots: Slots::from_raw(raw),
        }
    }

    /// Returns the raw values, writing [`UNDEFINED`](crate::UNDEFINED) for empty slots.
    #[must_use]
    pub fn to_raw(&self) -> [f64; Edge::COUNT] {
        self.slots.to_raw()
    }

    /// Returns the value stored for `edge`, if any.
    #[must_use]
    #[inline]
    pub fn get(&self, edge: Edge) -> Option<f64> {
        self.slots.get(edge.index())
    }

    /// Stores an explicit value for `edge`.
    #[inline]
    pub fn set(&mut self, edge: Edge, value: f64) {
        self.slots.put(edge.index(), Some(value));
    }

    /// Stores `value` for `edge`, or clears the slot when `None`.
    #[inline]
    pub fn set_value(&mut self, edge: Edge, value: Option<f64>) {
        self.slots.put(edge.index(), value);
    }

    /// Clears the slot for `edge`.
    #[inline]
    pub fn clear(&mut self, edge: Edge) {
        self.slots.put(edge.index(), None);
    }

    /// Returns `true` if no slot holds a value.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Resolves the slots into a concrete thickness.
    ///
    /// The result's `x0`, `y0`, `x1`, `y1` are the left, top, right and bottom
    /// widths. Starting from `All` (or zero), each step overrides only when its
    /// source slot is set:
    ///
    /// 1. `Horizontal` sets left and right.
    /// 2. `Vertical` sets top and bottom.
    /// 3. `Left` (else `Start`) sets left; `Right` (else `End`) sets right.
    /// 4. `Top` sets top; `Bottom` sets bottom.
    ///
    /// Negative and NaN results are clamped to zero.
    #[must_use]
    pub fn resolve(&self) -> Insets {
        let uniform = non_negative(self.get(Edge::All).unwrap_or(0.0));
        let (mut left, mut top, mut right, mut bottom) = (uniform, uniform, uniform, uniform);

        if let Some(width) = self.get(Edge::Horizontal) {
            left = width;
            right = width;
        }
        if let Some(width) = self.get(Edge::Vertical) {
            top = width;
            bottom = width;
        }

        // Physical edges beat logical ones.
        if let Some(width) = self.get(Edge::Left).or(self.get(Edge::Start)) {
            left = width;
        }
        if let Some(width) = self.get(Edge::Right).or(self.get(Edge::End)) {
            right = width;
        }
        if let Some(width) = self.get(Edge::Top) {
            top = width;
        }
        if let Some(width) = self.get(Edge::Bottom) {
            bottom = width;
        }

        Insets::new(
            non_negative(left),
            non_negative(top),
            non_negative(right),
            non_negative(bottom),
        )
    }
}
