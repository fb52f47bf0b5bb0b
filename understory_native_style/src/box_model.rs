// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Border, padding and corner-radius properties.
//!
//! These properties arrive one edge or corner at a time. Each update writes
//! one slot of the node's [`ShadowStyle`](crate::ShadowStyle) and the whole
//! slot array is re-resolved before anything reaches the element.

use kurbo::Insets;
use understory_box_edges::Edge;

use crate::applier::StyleApplier;
use crate::brush::{ResourceBrushes, brush_from};
use crate::element::{BorderTarget, CornerRadiusTarget, PaddingTarget};
use crate::names::PropertyKey;
use crate::node::ShadowNode;
use crate::trace::TraceOutcome;
use crate::value::PropValue;

impl<R> StyleApplier<'_, R> {
    /// Handles `borderColor`, `borderWidth` and `border{Left,Top,Right,Bottom,Start,End}Width`.
    ///
    /// - A colour sets the border brush and refreshes secondary border brushes.
    /// - `borderColor: null` substitutes the default border brush while the
    ///   element still has a non-zero thickness, and clears the brush
    ///   otherwise. Secondary brushes are refreshed with `None` either way.
    /// - A numeric width writes the node slot and applies the re-resolved
    ///   thickness. A non-zero width on an element with no border brush also
    ///   applies the default border brush.
    /// - A `null` width writes `0` to the slot.
    pub fn try_update_border<N, E>(
        &self,
        node: &mut N,
        element: &mut E,
        name: &str,
        value: &PropValue,
    ) -> bool
    where
        N: ShadowNode,
        E: BorderTarget,
        R: ResourceBrushes<E>,
    {
        match self.key(name) {
            Some(PropertyKey::BorderColor) => {
                if let Some(brush) = brush_from(value) {
                    element.set_border_brush(brush.clone());
                    self.resources().refresh_border(element, Some(&brush));
                    self.note(name, TraceOutcome::Applied);
                } else if value.is_null() {
                    if element.border_thickness() != Insets::ZERO {
                        self.apply_default_border_brush(element, name);
                    } else {
                        element.clear_border_brush();
                        self.note(name, TraceOutcome::Cleared);
                    }
                    self.resources().refresh_border(element, None);
                } else {
                    self.note_mismatch(name, value);
                }
                true
            }
            Some(PropertyKey::BorderWidth(edge)) => {
                if let Some(width) = value.number() {
                    set_border_thickness(node, element, edge, width);
                    self.note(name, TraceOutcome::Applied);
                    // Borders without a colour still draw on other platforms.
                    if width != 0.0 && element.border_brush().is_none() {
                        self.apply_default_border_brush(element, name);
                    }
                } else if value.is_null() {
                    set_border_thickness(node, element, edge, 0.0);
                    self.note(name, TraceOutcome::Cleared);
                } else {
                    self.note_mismatch(name, value);
                }
                true
            }
            _ => false,
        }
    }

    fn apply_default_border_brush<E: BorderTarget>(&self, element: &mut E, name: &str) {
        element.set_border_brush(self.default_brushes().default_border_brush().clone());
        self.note(name, TraceOutcome::DefaultBorderBrush);
    }

    /// Handles `padding` and `padding{Left,Top,Right,Bottom,Start,End,Horizontal,Vertical}`.
    ///
    /// Numbers write the node slot and apply the re-resolved padding. Anything
    /// else, `null` included, is ignored.
    pub fn try_update_padding<N, E>(
        &self,
        node: &mut N,
        element: &mut E,
        name: &str,
        value: &PropValue,
    ) -> bool
    where
        N: ShadowNode,
        E: PaddingTarget,
    {
        let Some(PropertyKey::Padding(edge)) = self.key(name) else {
            return false;
        };

        if let Some(width) = value.number() {
            let padding = &mut node.shadow_style_mut().padding;
            padding.set(edge, width);
            element.set_padding(padding.resolve());
            self.note(name, TraceOutcome::Applied);
        } else {
            self.note_mismatch(name, value);
        }
        true
    }

    /// Handles `borderRadius` and `border{Top,Bottom}{Left,Right,Start,End}Radius`
    /// on the node only.
    ///
    /// Numbers write the corner slot; any other value empties it. The element
    /// is not touched: call [`apply_corner_radius`] once the batch is done.
    pub fn try_update_corner_radius_on_node<N>(
        &self,
        node: &mut N,
        name: &str,
        value: &PropValue,
    ) -> bool
    where
        N: ShadowNode,
    {
        let Some(PropertyKey::BorderRadius(corner)) = self.key(name) else {
            return false;
        };

        node.shadow_style_mut()
            .corner_radius
            .set_value(corner, value.number());
        let outcome = if value.is_number() {
            TraceOutcome::Applied
        } else {
            TraceOutcome::Cleared
        };
        self.note(name, outcome);
        true
    }
}

fn set_border_thickness<N, E>(node: &mut N, element: &mut E, edge: Edge, width: f64)
where
    N: ShadowNode,
    E: BorderTarget,
{
    let border = &mut node.shadow_style_mut().border;
    border.set(edge, width);
    element.set_border_thickness(border.resolve());
}

/// Resolves the node's corner slots and applies them to `element`.
pub fn apply_corner_radius<N, E>(node: &N, element: &mut E)
where
    N: ShadowNode,
    E: CornerRadiusTarget,
{
    element.set_corner_radius(node.shadow_style().corner_radius.resolve());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::DefaultBrushStore;
    use crate::node::ShadowStyle;
    use crate::testing::{FakeView, RecordingResources};
    use crate::trace::TraceLog;
    use alloc::vec;
    use kurbo::RoundedRectRadii;
    use peniko::{Brush, Color};
    use understory_box_edges::Corner;

    fn blue() -> PropValue {
        PropValue::from(0xFF00_00FF_u32)
    }

    fn blue_brush() -> Brush {
        Brush::Solid(Color::from_rgba8(0, 0, 0xFF, 0xFF))
    }

    fn default_brush() -> Brush {
        Brush::Solid(Color::from_rgba8(0, 0, 0, 0xFF))
    }

    #[test]
    fn border_width_resolves_whole_array() {
        let brushes = DefaultBrushStore::default();
        let applier = StyleApplier::new(&brushes);
        let mut node = ShadowStyle::new();
        let mut view = FakeView::default();

        assert!(applier.try_update_border(&mut node, &mut view, "borderLeftWidth", &2.0.into()));
        assert!(applier.try_update_border(&mut node, &mut view, "borderWidth", &1.0.into()));
        assert_eq!(view.border_thickness, Insets::new(2.0, 1.0, 1.0, 1.0));
        assert_eq!(node.border.get(Edge::Left), Some(2.0));
    }

    #[test]
    fn nonzero_width_without_brush_gets_default_brush() {
        let brushes = DefaultBrushStore::default();
        let applier = StyleApplier::new(&brushes);
        let mut node = ShadowStyle::new();
        let mut view = FakeView::default();

        assert!(applier.try_update_border(&mut node, &mut view, "borderTopWidth", &3.0.into()));
        assert_eq!(view.border_brush, Some(default_brush()));
    }

    #[test]
    fn zero_width_without_brush_keeps_no_brush() {
        let brushes = DefaultBrushStore::default();
        let applier = StyleApplier::new(&brushes);
        let mut node = ShadowStyle::new();
        let mut view = FakeView::default();

        assert!(applier.try_update_border(&mut node, &mut view, "borderWidth", &0.0.into()));
        assert_eq!(view.border_brush, None);
        assert!(!brushes.is_initialized());
    }

    #[test]
    fn width_keeps_user_brush() {
        let brushes = DefaultBrushStore::default();
        let applier = StyleApplier::new(&brushes);
        let mut node = ShadowStyle::new();
        let mut view = FakeView::default();

        assert!(applier.try_update_border(&mut node, &mut view, "borderColor", &blue()));
        assert!(applier.try_update_border(&mut node, &mut view, "borderWidth", &2.0.into()));
        assert_eq!(view.border_brush, Some(blue_brush()));
    }

    #[test]
    fn null_width_writes_zero_slot() {
        let brushes = DefaultBrushStore::default();
        let applier = StyleApplier::new(&brushes);
        let mut node = ShadowStyle::new();
        let mut view = FakeView::default();

        assert!(applier.try_update_border(&mut node, &mut view, "borderWidth", &4.0.into()));
        assert!(applier.try_update_border(&mut node, &mut view, "borderEndWidth", &PropValue::Null));
        assert_eq!(node.border.get(Edge::End), Some(0.0));
        assert_eq!(view.border_thickness, Insets::new(4.0, 4.0, 0.0, 4.0));
    }

    #[test]
    fn null_colour_with_thickness_uses_default_brush() {
        let brushes = DefaultBrushStore::default();
        let resources = RecordingResources::default();
        let log = TraceLog::new();
        let applier = StyleApplier::builder(&brushes)
            .resources(&resources)
            .trace(&log)
            .build();
        let mut node = ShadowStyle::new();
        let mut view = FakeView::default();

        assert!(applier.try_update_border(&mut node, &mut view, "borderColor", &blue()));
        assert!(applier.try_update_border(&mut node, &mut view, "borderWidth", &1.0.into()));
        assert!(applier.try_update_border(&mut node, &mut view, "borderColor", &PropValue::Null));

        assert_eq!(view.border_brush, Some(default_brush()));
        assert!(view.cleared.is_empty());
        assert_eq!(resources.border(), vec![Some(blue_brush()), None]);
        assert_eq!(log.last_for("borderColor"), Some(TraceOutcome::DefaultBorderBrush));
    }

    #[test]
    fn null_colour_without_thickness_clears() {
        let brushes = DefaultBrushStore::default();
        let resources = RecordingResources::default();
        let applier = StyleApplier::builder(&brushes).resources(&resources).build();
        let mut node = ShadowStyle::new();
        let mut view = FakeView::default();
        view.border_brush = Some(blue_brush());

        assert!(applier.try_update_border(&mut node, &mut view, "borderColor", &PropValue::Null));
        assert_eq!(view.border_brush, None);
        assert_eq!(view.cleared, vec!["border_brush"]);
        assert_eq!(resources.border(), vec![None]);
    }

    #[test]
    fn border_has_no_axis_widths() {
        let brushes = DefaultBrushStore::default();
        let applier = StyleApplier::new(&brushes);
        let mut node = ShadowStyle::new();
        let mut view = FakeView::default();

        assert!(!applier.try_update_border(&mut node, &mut view, "borderHorizontalWidth", &1.0.into()));
        assert!(!applier.try_update_border(&mut node, &mut view, "padding", &1.0.into()));
        assert!(node.border.is_empty());
        assert_eq!(view, FakeView::default());
    }

    #[test]
    fn padding_later_shorthand_does_not_override_edge() {
        let brushes = DefaultBrushStore::default();
        let applier = StyleApplier::new(&brushes);
        let mut node = ShadowStyle::new();
        let mut view = FakeView::default();

        assert!(applier.try_update_padding(&mut node, &mut view, "paddingLeft", &4.0.into()));
        assert!(applier.try_update_padding(&mut node, &mut view, "padding", &10.0.into()));
        assert_eq!(view.padding, Some(Insets::new(4.0, 10.0, 10.0, 10.0)));

        assert!(applier.try_update_padding(&mut node, &mut view, "paddingVertical", &2.0.into()));
        assert_eq!(view.padding, Some(Insets::new(4.0, 2.0, 10.0, 2.0)));
    }

    #[test]
    fn padding_ignores_non_numbers() {
        let brushes = DefaultBrushStore::default();
        let applier = StyleApplier::new(&brushes);
        let mut node = ShadowStyle::new();
        let mut view = FakeView::default();

        assert!(applier.try_update_padding(&mut node, &mut view, "paddingTop", &PropValue::Null));
        assert!(applier.try_update_padding(&mut node, &mut view, "paddingTop", &"4px".into()));
        assert!(node.padding.is_empty());
        assert_eq!(view.padding, None);
    }

    #[test]
    fn padding_rejects_other_names() {
        let brushes = DefaultBrushStore::default();
        let applier = StyleApplier::new(&brushes);
        let mut node = ShadowStyle::new();
        let mut view = FakeView::default();

        assert!(!applier.try_update_padding(&mut node, &mut view, "margin", &4.0.into()));
        assert!(!applier.try_update_padding(&mut node, &mut view, "borderLeftWidth", &4.0.into()));
        assert!(!applier.try_update_padding(&mut node, &mut view, "paddingInline", &PropValue::Null));
        assert!(node.padding.is_empty());
        assert_eq!(node, ShadowStyle::default());
        assert_eq!(view, FakeView::default());
    }

    #[test]
    fn corner_radius_waits_for_apply() {
        let brushes = DefaultBrushStore::default();
        let applier = StyleApplier::new(&brushes);
        let mut node = ShadowStyle::new();
        let mut view = FakeView::default();

        assert!(applier.try_update_corner_radius_on_node(&mut node, "borderBottomRightRadius", &5.0.into()));
        assert!(applier.try_update_corner_radius_on_node(&mut node, "borderRadius", &2.0.into()));
        assert_eq!(view.corner_radius, None);

        apply_corner_radius(&node, &mut view);
        assert_eq!(view.corner_radius, Some(RoundedRectRadii::new(2.0, 2.0, 5.0, 2.0)));
    }

    #[test]
    fn corner_radius_non_number_empties_slot() {
        let brushes = DefaultBrushStore::default();
        let applier = StyleApplier::new(&brushes);
        let mut node = ShadowStyle::new();

        assert!(applier.try_update_corner_radius_on_node(&mut node, "borderTopStartRadius", &3.0.into()));
        assert_eq!(node.corner_radius.get(Corner::TopStart), Some(3.0));
        assert!(applier.try_update_corner_radius_on_node(&mut node, "borderTopStartRadius", &"3".into()));
        assert_eq!(node.corner_radius.get(Corner::TopStart), None);
        assert!(!applier.try_update_corner_radius_on_node(&mut node, "borderWidth", &3.0.into()));
    }
}
