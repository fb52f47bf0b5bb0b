// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Native Style: apply declarative style properties to native views.
//!
//! A host framework describes styling as a stream of named properties with
//! loosely typed values: `backgroundColor: 0xFF336699`, `paddingStart: 4`,
//! `fontWeight: "600"`, `borderColor: null`. This crate turns each of those
//! updates into concrete calls on a native toolkit element, keeping the small
//! amount of per-node state (box edges, corner radii, mouse-event interest)
//! that the toolkit itself cannot hold.
//!
//! ## Core Concepts
//!
//! ### Values
//!
//! [`PropValue`] is the host value model: null, boolean, number or string.
//! Colours arrive as 32-bit ARGB numbers and become [`peniko::Brush`]es via
//! [`brush_from`].
//!
//! ### Capability traits
//!
//! Native elements expose the properties they support through one trait per
//! family ([`BackgroundTarget`], [`BorderTarget`], [`FontTarget`], ...). A
//! control implements only the traits that match the dependency properties it
//! actually has.
//!
//! ### The applier
//!
//! [`StyleApplier`] carries the name table, the shared [`DefaultBrushStore`],
//! a [`ResourceBrushes`] coordinator for templated controls, the
//! text-decoration capability and a [`StyleTrace`] sink. Each `try_update_*`
//! method handles one [`PropertyGroup`] and returns `false` for any other name.
//!
//! ### Shadow state
//!
//! [`ShadowStyle`] lives on the host's shadow node and stores every edge and
//! corner slot ever written, so shorthands and specific edges compose through
//! [`understory_box_edges`] precedence no matter their arrival order.
//!
//! ### Dispatch chains
//!
//! [`PropertyChain`] lists the groups one kind of control handles, in order,
//! and routes each update to the first group that recognizes it.
//!
//! ## Quick Start
//!
//! ```rust
//! use kurbo::Insets;
//! use peniko::Brush;
//! use understory_native_style::{
//!     BorderTarget, DefaultBrushStore, PaddingTarget, PropValue, PropertyChain,
//!     PropertyGroup, PropertyUpdate, ShadowStyle, StyleApplier,
//! };
//!
//! #[derive(Default)]
//! struct Border {
//!     brush: Option<Brush>,
//!     thickness: Insets,
//!     padding: Insets,
//! }
//!
//! impl BorderTarget for Border {
//!     fn border_brush(&self) -> Option<&Brush> { self.brush.as_ref() }
//!     fn set_border_brush(&mut self, brush: Brush) { self.brush = Some(brush); }
//!     fn clear_border_brush(&mut self) { self.brush = None; }
//!     fn border_thickness(&self) -> Insets { self.thickness }
//!     fn set_border_thickness(&mut self, thickness: Insets) { self.thickness = thickness; }
//! }
//!
//! impl PaddingTarget for Border {
//!     fn set_padding(&mut self, padding: Insets) { self.padding = padding; }
//! }
//!
//! let chain: PropertyChain<ShadowStyle, Border> = PropertyChain::builder()
//!     .border()
//!     .padding()
//!     .build();
//!
//! let brushes = DefaultBrushStore::default();
//! let applier = StyleApplier::new(&brushes);
//! let mut node = ShadowStyle::new();
//! let mut view = Border::default();
//!
//! let updates = [
//!     PropertyUpdate::new("paddingLeft", 4.0),
//!     PropertyUpdate::new("padding", 10.0),
//!     PropertyUpdate::new("borderWidth", 1.0),
//!     PropertyUpdate::new("fontSize", 12.0),
//! ];
//! assert_eq!(chain.apply_all(&applier, &mut node, &mut view, &updates), 3);
//!
//! // The specific edge survives the later shorthand.
//! assert_eq!(view.padding, Insets::new(4.0, 10.0, 10.0, 10.0));
//! // A width with no colour picks up the default border brush.
//! assert_eq!(view.brush.as_ref(), Some(brushes.default_border_brush()));
//!
//! assert_eq!(
//!     chain.apply(&applier, &mut node, &mut view, "borderColor", &PropValue::Null),
//!     Some(PropertyGroup::Border)
//! );
//! ```
//!
//! ## Diagnostics
//!
//! Styling is best-effort: unusable values are skipped, never reported as
//! errors. Pass a [`TraceLog`] (or any [`StyleTrace`]) to
//! [`StyleApplierBuilder::trace`] to observe every decision.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: math backend for `kurbo` and `peniko`. With
//!   `std`, [`DefaultBrushStore`] is `Sync` and can live in a `static`.
//! - `json`: build [`PropValue`]s and update batches from `serde_json` values.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod applier;
mod box_model;
mod brush;
mod chain;
mod element;
#[cfg(feature = "json")]
mod json;
mod names;
mod node;
mod text;
mod trace;
mod value;

#[cfg(test)]
mod testing;

pub use applier::{StyleApplier, StyleApplierBuilder};
pub use box_model::apply_corner_radius;
pub use brush::{
    DefaultBrushStore, NoResourceBrushes, ResourceBrushes, brush_from, color_from_argb,
    is_valid_color_value,
};
pub use chain::{PropertyChain, PropertyChainBuilder};
pub use element::{
    BackgroundTarget, BorderTarget, CharacterSpacingTarget, CornerRadiusTarget, FlowDirection,
    FlowDirectionTarget, FontStyle, FontTarget, FontWeight, ForegroundTarget, Orientation,
    OrientationTarget, PaddingTarget, TextAlignment, TextAlignmentTarget, TextDecorations,
    TextDecorationsTarget, TextTrimming, TextTrimmingTarget,
};
#[cfg(feature = "json")]
pub use json::{UnsupportedValueError, updates_from_json};
pub use names::{PropertyGroup, PropertyKey, PropertyNames};
pub use node::{MouseEvents, ShadowNode, ShadowStyle};
pub use trace::{NoTrace, StyleTrace, TraceEvent, TraceLog, TraceOutcome, TraceRecord};
pub use value::{PropValue, PropertyUpdate, ValueKind};

pub use understory_box_edges::{Corner, CornerValues, Edge, EdgeValues};
