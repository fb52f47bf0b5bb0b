// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font and text-layout properties.

use crate::applier::StyleApplier;
use crate::element::{
    CharacterSpacingTarget, FlowDirection, FlowDirectionTarget, FontStyle, FontTarget, FontWeight,
    TextAlignment, TextAlignmentTarget, TextDecorations, TextDecorationsTarget, TextTrimming,
    TextTrimmingTarget,
};
use crate::names::PropertyKey;
use crate::trace::TraceOutcome;
use crate::value::PropValue;

impl<R> StyleApplier<'_, R> {
    /// Handles `fontSize`, `fontFamily`, `fontWeight` and `fontStyle`.
    ///
    /// Size takes a number, the others take strings; `null` clears any of them.
    /// An unknown weight falls back to [`FontWeight::NORMAL`].
    pub fn try_update_font<E>(&self, element: &mut E, name: &str, value: &PropValue) -> bool
    where
        E: FontTarget,
    {
        let Some(key) = self.key(name) else {
            return false;
        };

        match (key, value) {
            (PropertyKey::FontSize, PropValue::Number(size)) => {
                element.set_font_size(*size);
                self.note(name, TraceOutcome::Applied);
            }
            (PropertyKey::FontSize, PropValue::Null) => {
                element.clear_font_size();
                self.note(name, TraceOutcome::Cleared);
            }
            (PropertyKey::FontFamily, PropValue::String(family)) => {
                element.set_font_family(family);
                self.note(name, TraceOutcome::Applied);
            }
            (PropertyKey::FontFamily, PropValue::Null) => {
                element.clear_font_family();
                self.note(name, TraceOutcome::Cleared);
            }
            (PropertyKey::FontWeight, PropValue::String(token)) => {
                let weight = FontWeight::from_token(token).unwrap_or_else(|| {
                    self.note_token(name, token);
                    FontWeight::NORMAL
                });
                element.set_font_weight(weight);
                self.note(name, TraceOutcome::Applied);
            }
            (PropertyKey::FontWeight, PropValue::Null) => {
                element.clear_font_weight();
                self.note(name, TraceOutcome::Cleared);
            }
            (PropertyKey::FontStyle, PropValue::String(token)) => {
                element.set_font_style(FontStyle::from_token(token));
                self.note(name, TraceOutcome::Applied);
            }
            (PropertyKey::FontStyle, PropValue::Null) => {
                element.clear_font_style();
                self.note(name, TraceOutcome::Cleared);
            }
            (
                PropertyKey::FontSize
                | PropertyKey::FontFamily
                | PropertyKey::FontWeight
                | PropertyKey::FontStyle,
                other,
            ) => self.note_mismatch(name, other),
            _ => return false,
        }
        true
    }

    /// Handles `textAlign`.
    ///
    /// `left`, `right`, `center` and `justify` map directly; other strings
    /// detect alignment from content. `null` clears.
    pub fn try_update_text_alignment<E>(
        &self,
        element: &mut E,
        name: &str,
        value: &PropValue,
    ) -> bool
    where
        E: TextAlignmentTarget,
    {
        if self.key(name) != Some(PropertyKey::TextAlign) {
            return false;
        }

        match value {
            PropValue::String(token) => {
                element.set_text_alignment(TextAlignment::from_token(token));
                self.note(name, TraceOutcome::Applied);
            }
            PropValue::Null => {
                element.clear_text_alignment();
                self.note(name, TraceOutcome::Cleared);
            }
            other => self.note_mismatch(name, other),
        }
        true
    }

    /// Handles `ellipsizeMode`.
    ///
    /// See [`TextTrimming::from_ellipsize_mode`] for the mapping. `null` clears.
    pub fn try_update_text_trimming<E>(&self, element: &mut E, name: &str, value: &PropValue) -> bool
    where
        E: TextTrimmingTarget,
    {
        if self.key(name) != Some(PropertyKey::EllipsizeMode) {
            return false;
        }

        match value {
            PropValue::String(mode) => {
                element.set_text_trimming(TextTrimming::from_ellipsize_mode(mode));
                self.note(name, TraceOutcome::Applied);
            }
            PropValue::Null => {
                element.clear_text_trimming();
                self.note(name, TraceOutcome::Cleared);
            }
            other => self.note_mismatch(name, other),
        }
        true
    }

    /// Handles `textDecorationLine`.
    ///
    /// When the platform cannot decorate text the update is dropped but still
    /// reported handled. Unknown lines set no decoration. `null` clears.
    pub fn try_update_text_decoration_line<E>(
        &self,
        element: &mut E,
        name: &str,
        value: &PropValue,
    ) -> bool
    where
        E: TextDecorationsTarget,
    {
        if self.key(name) != Some(PropertyKey::TextDecorationLine) {
            return false;
        }

        if !self.text_decorations_supported() {
            self.note(name, TraceOutcome::Unsupported);
            return true;
        }

        match value {
            PropValue::String(line) => {
                element.set_text_decorations(TextDecorations::from_line(line));
                self.note(name, TraceOutcome::Applied);
            }
            PropValue::Null => {
                element.clear_text_decorations();
                self.note(name, TraceOutcome::Cleared);
            }
            other => self.note_mismatch(name, other),
        }
        true
    }

    /// Handles `writingDirection` and `direction`.
    ///
    /// `rtl` and `ltr` set the direction. Any other string, or `null`, clears
    /// the local direction so the inherited one applies.
    pub fn try_update_flow_direction<E>(
        &self,
        element: &mut E,
        name: &str,
        value: &PropValue,
    ) -> bool
    where
        E: FlowDirectionTarget,
    {
        if self.key(name) != Some(PropertyKey::Direction) {
            return false;
        }

        match value {
            PropValue::String(token) => match FlowDirection::from_token(token) {
                Some(direction) => {
                    element.set_flow_direction(direction);
                    self.note(name, TraceOutcome::Applied);
                }
                None => {
                    element.clear_flow_direction();
                    self.note(name, TraceOutcome::Cleared);
                }
            },
            PropValue::Null => {
                element.clear_flow_direction();
                self.note(name, TraceOutcome::Cleared);
            }
            other => self.note_mismatch(name, other),
        }
        true
    }

    /// Handles `letterSpacing` and `characterSpacing`.
    ///
    /// Numbers are truncated toward zero. `null` clears.
    pub fn try_update_character_spacing<E>(
        &self,
        element: &mut E,
        name: &str,
        value: &PropValue,
    ) -> bool
    where
        E: CharacterSpacingTarget,
    {
        if self.key(name) != Some(PropertyKey::CharacterSpacing) {
            return false;
        }

        match value {
            PropValue::Number(spacing) => {
                element.set_character_spacing(spacing_units(*spacing));
                self.note(name, TraceOutcome::Applied);
            }
            PropValue::Null => {
                element.clear_character_spacing();
                self.note(name, TraceOutcome::Cleared);
            }
            other => self.note_mismatch(name, other),
        }
        true
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "spacing is integral in the toolkit; saturating truncation is intended"
)]
fn spacing_units(spacing: f64) -> i32 {
    spacing as i32
}
