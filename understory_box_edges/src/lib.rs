// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Box Edges: per-edge and per-corner values with shorthand precedence.
//!
//! Style systems descended from CSS let authors describe the same box edge in
//! several ways: a uniform shorthand (`padding`), an axis (`paddingHorizontal`),
//! a writing-direction-relative edge (`paddingStart`) or a physical edge
//! (`paddingLeft`). This crate keeps every one of those inputs in a fixed-size
//! slot array and resolves the whole array into concrete values on demand.
//!
//! ## Core Concepts
//!
//! ### Slot arrays
//!
//! [`EdgeValues`] holds one optional slot per [`Edge`], and [`CornerValues`]
//! holds one optional slot per [`Corner`]. An empty slot means "no explicit
//! override here", which is distinct from an explicit `0.0`.
//!
//! ### Resolution
//!
//! [`EdgeValues::resolve`] produces a [`kurbo::Insets`] and
//! [`CornerValues::resolve`] produces a [`kurbo::RoundedRectRadii`]. Resolution
//! always starts from scratch, so the order in which slots were written never
//! matters; only their specificity does.
//!
//! Edge precedence, broadest first (later steps win when their slot is set):
//!
//! **All → Horizontal/Vertical → Left-or-Start / Right-or-End → Top / Bottom**
//!
//! Corner precedence: a physical corner wins over its logical counterpart,
//! which wins over [`Corner::All`].
//!
//! Every resolved value is finite-or-zero and never negative.
//!
//! ## Quick Start
//!
//! ```rust
//! use kurbo::{Insets, RoundedRectRadii};
//! use understory_box_edges::{Corner, CornerValues, Edge, EdgeValues};
//!
//! let mut padding = EdgeValues::new();
//! padding.set(Edge::Left, 4.0);
//! // A broader shorthand arriving later does not override the narrower edge.
//! padding.set(Edge::All, 10.0);
//! assert_eq!(padding.resolve(), Insets::new(4.0, 10.0, 10.0, 10.0));
//!
//! let mut radii = CornerValues::new();
//! radii.set(Corner::All, 2.0);
//! radii.set(Corner::BottomRight, 5.0);
//! assert_eq!(radii.resolve(), RoundedRectRadii::new(2.0, 2.0, 5.0, 2.0));
//! ```
//!
//! ## Interop with sentinel arrays
//!
//! Hosts that keep raw `[f64; 9]` arrays with a reserved "undefined" number can
//! convert with [`EdgeValues::from_raw`] / [`EdgeValues::to_raw`] (and the
//! corner equivalents) using [`UNDEFINED`].
//!
//! ## `no_std` Support
//!
//! This crate is `no_std`. Enable either the `std` (default) or `libm` feature
//! for `kurbo`.

#![no_std]

mod corner;
mod edge;
mod slots;

pub use corner::{Corner, CornerValues};
pub use edge::{Edge, EdgeValues};
pub use slots::UNDEFINED;
