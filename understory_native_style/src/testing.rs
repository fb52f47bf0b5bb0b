// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory stand-ins for toolkit elements, used by unit tests.

use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use kurbo::{Insets, RoundedRectRadii};
use peniko::Brush;

use crate::brush::ResourceBrushes;
use crate::element::{
    BackgroundTarget, BorderTarget, CharacterSpacingTarget, CornerRadiusTarget, FlowDirection,
    FlowDirectionTarget, FontStyle, FontTarget, FontWeight, ForegroundTarget, Orientation,
    OrientationTarget, PaddingTarget, TextAlignment, TextAlignmentTarget, TextDecorations,
    TextDecorationsTarget, TextTrimming, TextTrimmingTarget,
};

/// An element exposing every capability, recording local values.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct FakeView {
    pub(crate) background: Option<Brush>,
    pub(crate) foreground: Option<Brush>,
    pub(crate) border_brush: Option<Brush>,
    pub(crate) border_thickness: Insets,
    pub(crate) padding: Option<Insets>,
    pub(crate) corner_radius: Option<RoundedRectRadii>,
    pub(crate) font_size: Option<f64>,
    pub(crate) font_family: Option<String>,
    pub(crate) font_weight: Option<FontWeight>,
    pub(crate) font_style: Option<FontStyle>,
    pub(crate) text_alignment: Option<TextAlignment>,
    pub(crate) text_trimming: Option<TextTrimming>,
    pub(crate) text_decorations: Option<TextDecorations>,
    pub(crate) flow_direction: Option<FlowDirection>,
    pub(crate) character_spacing: Option<i32>,
    pub(crate) orientation: Option<Orientation>,
    /// Names of properties reset to the toolkit default, in order.
    pub(crate) cleared: Vec<&'static str>,
}

impl BackgroundTarget for FakeView {
    fn set_background(&mut self, brush: Brush) {
        self.background = Some(brush);
    }
    fn clear_background(&mut self) {
        self.background = None;
        self.cleared.push("background");
    }
}

impl ForegroundTarget for FakeView {
    fn set_foreground(&mut self, brush: Brush) {
        self.foreground = Some(brush);
    }
    fn clear_foreground(&mut self) {
        self.foreground = None;
        self.cleared.push("foreground");
    }
}

impl BorderTarget for FakeView {
    fn border_brush(&self) -> Option<&Brush> {
        self.border_brush.as_ref()
    }
    fn set_border_brush(&mut self, brush: Brush) {
        self.border_brush = Some(brush);
    }
    fn clear_border_brush(&mut self) {
        self.border_brush = None;
        self.cleared.push("border_brush");
    }
    fn border_thickness(&self) -> Insets {
        self.border_thickness
    }
    fn set_border_thickness(&mut self, thickness: Insets) {
        self.border_thickness = thickness;
    }
}

impl PaddingTarget for FakeView {
    fn set_padding(&mut self, padding: Insets) {
        self.padding = Some(padding);
    }
}

impl CornerRadiusTarget for FakeView {
    fn set_corner_radius(&mut self, radii: RoundedRectRadii) {
        self.corner_radius = Some(radii);
    }
}

impl FontTarget for FakeView {
    fn set_font_size(&mut self, size: f64) {
        self.font_size = Some(size);
    }
    fn clear_font_size(&mut self) {
        self.font_size = None;
        self.cleared.push("font_size");
    }
    fn set_font_family(&mut self, family: &str) {
        self.font_family = Some(family.into());
    }
    fn clear_font_family(&mut self) {
        self.font_family = None;
        self.cleared.push("font_family");
    }
    fn set_font_weight(&mut self, weight: FontWeight) {
        self.font_weight = Some(weight);
    }
    fn clear_font_weight(&mut self) {
        self.font_weight = None;
        self.cleared.push("font_weight");
    }
    fn set_font_style(&mut self, style: FontStyle) {
        self.font_style = Some(style);
    }
    fn clear_font_style(&mut self) {
        self.font_style = None;
        self.cleared.push("font_style");
    }
}

impl TextAlignmentTarget for FakeView {
    fn set_text_alignment(&mut self, alignment: TextAlignment) {
        self.text_alignment = Some(alignment);
    }
    fn clear_text_alignment(&mut self) {
        self.text_alignment = None;
        self.cleared.push("text_alignment");
    }
}

impl TextTrimmingTarget for FakeView {
    fn set_text_trimming(&mut self, trimming: TextTrimming) {
        self.text_trimming = Some(trimming);
    }
    fn clear_text_trimming(&mut self) {
        self.text_trimming = None;
        self.cleared.push("text_trimming");
    }
}

impl TextDecorationsTarget for FakeView {
    fn set_text_decorations(&mut self, decorations: TextDecorations) {
        self.text_decorations = Some(decorations);
    }
    fn clear_text_decorations(&mut self) {
        self.text_decorations = None;
        self.cleared.push("text_decorations");
    }
}

impl FlowDirectionTarget for FakeView {
    fn set_flow_direction(&mut self, direction: FlowDirection) {
        self.flow_direction = Some(direction);
    }
    fn clear_flow_direction(&mut self) {
        self.flow_direction = None;
        self.cleared.push("flow_direction");
    }
}

impl CharacterSpacingTarget for FakeView {
    fn set_character_spacing(&mut self, spacing: i32) {
        self.character_spacing = Some(spacing);
    }
    fn clear_character_spacing(&mut self) {
        self.character_spacing = None;
        self.cleared.push("character_spacing");
    }
}

impl OrientationTarget for FakeView {
    fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = Some(orientation);
    }
    fn clear_orientation(&mut self) {
        self.orientation = None;
        self.cleared.push("orientation");
    }
}

/// Records every secondary-brush refresh.
#[derive(Debug, Default)]
pub(crate) struct RecordingResources {
    background: RefCell<Vec<Option<Brush>>>,
    foreground: RefCell<Vec<Option<Brush>>>,
    border: RefCell<Vec<Option<Brush>>>,
}

impl RecordingResources {
    pub(crate) fn background(&self) -> Vec<Option<Brush>> {
        self.background.borrow().clone()
    }
    pub(crate) fn foreground(&self) -> Vec<Option<Brush>> {
        self.foreground.borrow().clone()
    }
    pub(crate) fn border(&self) -> Vec<Option<Brush>> {
        self.border.borrow().clone()
    }
}

impl ResourceBrushes<FakeView> for RecordingResources {
    fn refresh_background(&self, _element: &mut FakeView, brush: Option<&Brush>) {
        self.background.borrow_mut().push(brush.cloned());
    }
    fn refresh_foreground(&self, _element: &mut FakeView, brush: Option<&Brush>) {
        self.foreground.borrow_mut().push(brush.cloned());
    }
    fn refresh_border(&self, _element: &mut FakeView, brush: Option<&Brush>) {
        self.border.borrow_mut().push(brush.cloned());
    }
}
