// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-size optional slot storage shared by edges and corners.

/// The reserved raw value meaning "no explicit override" in sentinel arrays.
///
/// Only used at the raw-array boundary ([`EdgeValues::from_raw`](crate::EdgeValues::from_raw),
/// [`EdgeValues::to_raw`](crate::EdgeValues::to_raw) and the corner equivalents).
/// Inside this crate empty slots are `None`.
pub const UNDEFINED: f64 = -1.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Slots<const N: usize>([Option<f64>; N]);

impl<const N: usize> Default for Slots<N> {
    fn default() -> Self {
        Self([None; N])
    }
}

impl<const N: usize> Slots<N> {
    #[inline]
    pub(crate) fn get(&self, index: usize) -> Option<f64> {
        self.0[index]
    }

    #[inline]
    pub(crate) fn put(&mut self, index: usize, value: Option<f64>) {
        self.0[index] = value;
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    pub(crate) fn from_raw(raw: [f64; N]) -> Self {
        Self(raw.map(|v| if v == UNDEFINED { None } else { Some(v) }))
    }

    pub(crate) fn to_raw(self) -> [f64; N] {
        self.0.map(|v| v.unwrap_or(UNDEFINED))
    }
}

/// Clamps a resolved value into the applied range. NaN becomes `0.0`.
#[inline]
pub(crate) fn non_negative(value: f64) -> f64 {
    value.max(0.0)
}
