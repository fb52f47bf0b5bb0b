// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The property applier and its configuration.
//!
//! [`StyleApplier`] bundles everything property application needs beyond the
//! node and element themselves: the name table, the default border brush, the
//! secondary-brush coordinator, the text-decoration capability and the trace
//! sink. Each `try_update_*` method handles one [`PropertyGroup`](crate::PropertyGroup)
//! and returns `false` for names outside it, so callers can chain them.

use core::cell::OnceCell;
use core::fmt;

use crate::brush::{DefaultBrushStore, NoResourceBrushes, ResourceBrushes, brush_from};
use crate::element::{BackgroundTarget, ForegroundTarget, Orientation, OrientationTarget};
use crate::names::{PropertyKey, PropertyNames};
use crate::node::{MouseEvents, ShadowNode};
use crate::trace::{NoTrace, StyleTrace, TraceEvent, TraceOutcome};
use crate::value::PropValue;

/// Applies host style properties to native elements.
///
/// # Type Parameters
///
/// * `R` - The [`ResourceBrushes`] coordinator notified after brush changes.
///
/// # Example
///
/// ```rust
/// use peniko::Brush;
/// use understory_native_style::{
///     BackgroundTarget, DefaultBrushStore, PropValue, StyleApplier,
/// };
///
/// #[derive(Default)]
/// struct Panel {
///     background: Option<Brush>,
/// }
///
/// impl BackgroundTarget for Panel {
///     fn set_background(&mut self, brush: Brush) { self.background = Some(brush); }
///     fn clear_background(&mut self) { self.background = None; }
/// }
///
/// let brushes = DefaultBrushStore::default();
/// let applier = StyleApplier::new(&brushes);
/// let mut panel = Panel::default();
///
/// assert!(applier.try_update_background(&mut panel, "backgroundColor", &PropValue::from(0xFF00_FF00_u32)));
/// assert!(panel.background.is_some());
///
/// // Not a background property: left for the next group.
/// assert!(!applier.try_update_background(&mut panel, "color", &PropValue::Null));
/// ```
pub struct StyleApplier<'a, R = NoResourceBrushes> {
    names: PropertyNames,
    brushes: &'a DefaultBrushStore,
    resources: &'a R,
    decorations_check: fn() -> bool,
    decorations_supported: OnceCell<bool>,
    trace: &'a dyn StyleTrace,
}

impl<R> fmt::Debug for StyleApplier<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleApplier")
            .field("names", &self.names.len())
            .field("brushes", &self.brushes)
            .field("resources", &core::any::type_name::<R>())
            .field("decorations_supported", &self.decorations_supported.get())
            .finish_non_exhaustive()
    }
}

impl<'a> StyleApplier<'a> {
    /// Creates an applier with no secondary brushes and no tracing.
    #[must_use]
    pub fn new(brushes: &'a DefaultBrushStore) -> Self {
        StyleApplierBuilder::new(brushes).build()
    }

    /// Starts configuring an applier.
    #[must_use]
    pub fn builder(brushes: &'a DefaultBrushStore) -> StyleApplierBuilder<'a> {
        StyleApplierBuilder::new(brushes)
    }
}

impl<'a, R> StyleApplier<'a, R> {
    /// Returns the property-name table.
    #[must_use]
    #[inline]
    pub fn names(&self) -> &PropertyNames {
        &self.names
    }

    /// Returns the default brush store.
    #[must_use]
    #[inline]
    pub fn default_brushes(&self) -> &'a DefaultBrushStore {
        self.brushes
    }

    /// Returns the secondary-brush coordinator.
    #[must_use]
    #[inline]
    pub fn resources(&self) -> &'a R {
        self.resources
    }

    /// Returns whether the platform can decorate text.
    ///
    /// The check runs on first call; the answer is cached for the lifetime of
    /// the applier.
    pub fn text_decorations_supported(&self) -> bool {
        *self.decorations_supported.get_or_init(self.decorations_check)
    }

    #[inline]
    pub(crate) fn key(&self, name: &str) -> Option<PropertyKey> {
        self.names.get(name)
    }

    pub(crate) fn note(&self, property: &str, outcome: TraceOutcome) {
        self.trace.event(TraceEvent {
            property,
            outcome,
            token: None,
        });
    }

    pub(crate) fn note_mismatch(&self, property: &str, value: &PropValue) {
        self.note(property, TraceOutcome::TypeMismatch(value.kind()));
    }

    pub(crate) fn note_token(&self, property: &str, token: &str) {
        self.trace.event(TraceEvent {
            property,
            outcome: TraceOutcome::UnrecognizedToken,
            token: Some(token),
        });
    }

    /// Handles `backgroundColor`.
    ///
    /// A colour sets the background and refreshes secondary background brushes;
    /// `null` clears both. Other values are ignored.
    pub fn try_update_background<E>(&self, element: &mut E, name: &str, value: &PropValue) -> bool
    where
        E: BackgroundTarget,
        R: ResourceBrushes<E>,
    {
        if self.key(name) != Some(PropertyKey::BackgroundColor) {
            return false;
        }

        if let Some(brush) = brush_from(value) {
            element.set_background(brush.clone());
            self.resources.refresh_background(element, Some(&brush));
            self.note(name, TraceOutcome::Applied);
        } else if value.is_null() {
            element.clear_background();
            self.resources.refresh_background(element, None);
            self.note(name, TraceOutcome::Cleared);
        } else {
            self.note_mismatch(name, value);
        }
        true
    }

    /// Handles `color`.
    ///
    /// Same contract as [`try_update_background`](Self::try_update_background),
    /// targeting the foreground brush.
    pub fn try_update_foreground<E>(&self, element: &mut E, name: &str, value: &PropValue) -> bool
    where
        E: ForegroundTarget,
        R: ResourceBrushes<E>,
    {
        if self.key(name) != Some(PropertyKey::Color) {
            return false;
        }

        if let Some(brush) = brush_from(value) {
            element.set_foreground(brush.clone());
            self.resources.refresh_foreground(element, Some(&brush));
            self.note(name, TraceOutcome::Applied);
        } else if value.is_null() {
            element.clear_foreground();
            self.resources.refresh_foreground(element, None);
            self.note(name, TraceOutcome::Cleared);
        } else {
            self.note_mismatch(name, value);
        }
        true
    }

    /// Handles `orientation`.
    ///
    /// `null` clears. An unknown string or a non-string leaves the current
    /// orientation untouched; the property is still reported handled.
    pub fn try_update_orientation<E>(&self, element: &mut E, name: &str, value: &PropValue) -> bool
    where
        E: OrientationTarget,
    {
        if self.key(name) != Some(PropertyKey::Orientation) {
            return false;
        }

        match value {
            PropValue::Null => {
                element.clear_orientation();
                self.note(name, TraceOutcome::Cleared);
            }
            PropValue::String(token) => match Orientation::from_token(token) {
                Some(orientation) => {
                    element.set_orientation(orientation);
                    self.note(name, TraceOutcome::Applied);
                }
                None => self.note_token(name, token),
            },
            other => self.note_mismatch(name, other),
        }
        true
    }

    /// Handles `onMouseEnter`, `onMouseLeave` and `onMouseMove`.
    ///
    /// The node's flag is set only when the value is present and truthy (see
    /// [`PropValue::is_truthy`]). Boolean text counts, so `"false"` clears the
    /// flag just like `false`.
    pub fn try_update_mouse_events<N>(&self, node: &mut N, name: &str, value: &PropValue) -> bool
    where
        N: ShadowNode,
    {
        let flag = match self.key(name) {
            Some(PropertyKey::MouseEnter) => MouseEvents::ENTER,
            Some(PropertyKey::MouseLeave) => MouseEvents::LEAVE,
            Some(PropertyKey::MouseMove) => MouseEvents::MOVE,
            _ => return false,
        };

        node.shadow_style_mut()
            .mouse_events
            .set(flag, value.is_truthy());
        self.note(name, TraceOutcome::Applied);
        true
    }
}

/// Builder for [`StyleApplier`].
///
/// # Example
///
/// ```rust
/// use understory_native_style::{DefaultBrushStore, StyleApplier, TraceLog};
///
/// let brushes = DefaultBrushStore::default();
/// let log = TraceLog::new();
/// let applier = StyleApplier::builder(&brushes)
///     .text_decorations_check(|| false)
///     .trace(&log)
///     .build();
///
/// assert!(!applier.text_decorations_supported());
/// ```
pub struct StyleApplierBuilder<'a, R = NoResourceBrushes> {
    brushes: &'a DefaultBrushStore,
    resources: &'a R,
    decorations_check: fn() -> bool,
    trace: &'a dyn StyleTrace,
}

impl<R> fmt::Debug for StyleApplierBuilder<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleApplierBuilder")
            .field("brushes", &self.brushes)
            .field("resources", &core::any::type_name::<R>())
            .finish_non_exhaustive()
    }
}

impl<'a> StyleApplierBuilder<'a> {
    /// Starts a builder using `brushes` for the default border brush.
    #[must_use]
    pub fn new(brushes: &'a DefaultBrushStore) -> Self {
        Self {
            brushes,
            resources: &NoResourceBrushes,
            decorations_check: always_supported,
            trace: &NoTrace,
        }
    }
}

impl<'a, R> StyleApplierBuilder<'a, R> {
    /// Notifies `resources` after every brush change.
    #[must_use]
    pub fn resources<R2>(self, resources: &'a R2) -> StyleApplierBuilder<'a, R2> {
        StyleApplierBuilder {
            brushes: self.brushes,
            resources,
            decorations_check: self.decorations_check,
            trace: self.trace,
        }
    }

    /// Sets the capability check for text decorations.
    ///
    /// The check is called at most once per applier.
    #[must_use]
    pub fn text_decorations_check(mut self, check: fn() -> bool) -> Self {
        self.decorations_check = check;
        self
    }

    /// Reports decisions to `trace`.
    #[must_use]
    pub fn trace(mut self, trace: &'a dyn StyleTrace) -> Self {
        self.trace = trace;
        self
    }

    /// Builds the applier.
    #[must_use]
    pub fn build(self) -> StyleApplier<'a, R> {
        StyleApplier {
            names: PropertyNames::new(),
            brushes: self.brushes,
            resources: self.resources,
            decorations_check: self.decorations_check,
            decorations_supported: OnceCell::new(),
            trace: self.trace,
        }
    }
}

fn always_supported() -> bool {
    true
}
