// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style state kept on shadow nodes between updates.
//!
//! Border and padding updates arrive one edge at a time, but the toolkit only
//! accepts a complete thickness. The raw per-edge and per-corner inputs live
//! here so each update can re-resolve the whole box.

use understory_box_edges::{CornerValues, EdgeValues};

bitflags::bitflags! {
    /// Pointer events a node has subscribed to.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MouseEvents: u8 {
        /// The pointer entered the element.
        const ENTER = 0b0000_0001;
        /// The pointer left the element.
        const LEAVE = 0b0000_0010;
        /// The pointer moved over the element.
        const MOVE  = 0b0000_0100;
    }
}

/// Per-node style inputs that outlive a single update.
///
/// Owned by the node; written by the shadow tree and by the applier.
///
/// # Example
///
/// ```rust
/// use kurbo::Insets;
/// use understory_box_edges::Edge;
/// use understory_native_style::ShadowStyle;
///
/// let mut style = ShadowStyle::new();
/// style.padding.set(Edge::Vertical, 3.0);
/// assert_eq!(style.padding.resolve(), Insets::new(0.0, 3.0, 0.0, 3.0));
/// assert!(!style.on_mouse_move());
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ShadowStyle {
    /// Raw padding inputs.
    pub padding: EdgeValues,
    /// Raw border width inputs.
    pub border: EdgeValues,
    /// Raw corner radius inputs.
    pub corner_radius: CornerValues,
    /// Subscribed pointer events.
    pub mouse_events: MouseEvents,
}

impl ShadowStyle {
    /// Creates empty style state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the node wants pointer-enter events.
    #[must_use]
    #[inline]
    pub fn on_mouse_enter(&self) -> bool {
        self.mouse_events.contains(MouseEvents::ENTER)
    }

    /// Returns `true` if the node wants pointer-leave events.
    #[must_use]
    #[inline]
    pub fn on_mouse_leave(&self) -> bool {
        self.mouse_events.contains(MouseEvents::LEAVE)
    }

    /// Returns `true` if the node wants pointer-move events.
    #[must_use]
    #[inline]
    pub fn on_mouse_move(&self) -> bool {
        self.mouse_events.contains(MouseEvents::MOVE)
    }
}

/// A shadow-tree node that carries [`ShadowStyle`].
pub trait ShadowNode {
    /// Returns the node's style state.
    fn shadow_style(&self) -> &ShadowStyle;

    /// Returns the node's style state for mutation.
    fn shadow_style_mut(&mut self) -> &mut ShadowStyle;
}

impl ShadowNode for ShadowStyle {
    #[inline]
    fn shadow_style(&self) -> &ShadowStyle {
        self
    }

    #[inline]
    fn shadow_style_mut(&mut self) -> &mut ShadowStyle {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_flags_default_off() {
        let style = ShadowStyle::new();
        assert!(!style.on_mouse_enter());
        assert!(!style.on_mouse_leave());
        assert!(!style.on_mouse_move());
        assert!(style.padding.is_empty());
        assert!(style.border.is_empty());
        assert!(style.corner_radius.is_empty());
    }

    #[test]
    fn mouse_flags_are_independent() {
        let mut style = ShadowStyle::new();
        style.mouse_events.set(MouseEvents::LEAVE, true);
        assert!(style.on_mouse_leave());
        assert!(!style.on_mouse_enter());
        assert!(!style.on_mouse_move());
    }
}
