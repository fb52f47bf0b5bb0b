// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capabilities of native toolkit elements.
//!
//! Each trait mirrors one family of dependency properties that a native
//! control may expose. A control implements only the families it has; the
//! applier methods and [`PropertyChainBuilder`](crate::PropertyChainBuilder)
//! are bounded on exactly the capability they touch.
//!
//! `clear_*` methods reset the property to the toolkit's own default (the
//! equivalent of clearing the local value), which is not the same as setting
//! some explicit value.

use kurbo::{Insets, RoundedRectRadii};
use peniko::Brush;

/// An element with a background brush.
pub trait BackgroundTarget {
    /// Sets the background brush.
    fn set_background(&mut self, brush: Brush);
    /// Resets the background to the toolkit default.
    fn clear_background(&mut self);
}

/// An element with a foreground (text) brush.
pub trait ForegroundTarget {
    /// Sets the foreground brush.
    fn set_foreground(&mut self, brush: Brush);
    /// Resets the foreground to the toolkit default.
    fn clear_foreground(&mut self);
}

/// An element with a border.
pub trait BorderTarget {
    /// Returns the locally set border brush, if any.
    fn border_brush(&self) -> Option<&Brush>;
    /// Sets the border brush.
    fn set_border_brush(&mut self, brush: Brush);
    /// Resets the border brush to the toolkit default.
    fn clear_border_brush(&mut self);
    /// Returns the current border thickness.
    fn border_thickness(&self) -> Insets;
    /// Sets the border thickness.
    fn set_border_thickness(&mut self, thickness: Insets);
}

/// An element with padding.
pub trait PaddingTarget {
    /// Sets the padding.
    fn set_padding(&mut self, padding: Insets);
}

/// An element with rounded corners.
pub trait CornerRadiusTarget {
    /// Sets the corner radii.
    fn set_corner_radius(&mut self, radii: RoundedRectRadii);
}

/// An element that renders text with a font.
pub trait FontTarget {
    /// Sets the font size.
    fn set_font_size(&mut self, size: f64);
    /// Resets the font size to the toolkit default.
    fn clear_font_size(&mut self);
    /// Sets the font family by name.
    fn set_font_family(&mut self, family: &str);
    /// Resets the font family to the toolkit default.
    fn clear_font_family(&mut self);
    /// Sets the font weight.
    fn set_font_weight(&mut self, weight: FontWeight);
    /// Resets the font weight to the toolkit default.
    fn clear_font_weight(&mut self);
    /// Sets the font style.
    fn set_font_style(&mut self, style: FontStyle);
    /// Resets the font style to the toolkit default.
    fn clear_font_style(&mut self);
}

/// An element with horizontal text alignment.
pub trait TextAlignmentTarget {
    /// Sets the alignment.
    fn set_text_alignment(&mut self, alignment: TextAlignment);
    /// Resets the alignment to the toolkit default.
    fn clear_text_alignment(&mut self);
}

/// An element that can trim overflowing text.
pub trait TextTrimmingTarget {
    /// Sets the trimming mode.
    fn set_text_trimming(&mut self, trimming: TextTrimming);
    /// Resets trimming to the toolkit default.
    fn clear_text_trimming(&mut self);
}

/// An element that can decorate text.
pub trait TextDecorationsTarget {
    /// Sets the decorations.
    fn set_text_decorations(&mut self, decorations: TextDecorations);
    /// Resets decorations to the toolkit default.
    fn clear_text_decorations(&mut self);
}

/// An element with a flow direction.
pub trait FlowDirectionTarget {
    /// Sets the flow direction.
    fn set_flow_direction(&mut self, direction: FlowDirection);
    /// Clears the local flow direction so the inherited one applies.
    fn clear_flow_direction(&mut self);
}

/// An element with adjustable spacing between characters.
pub trait CharacterSpacingTarget {
    /// Sets the spacing, in the toolkit's integral units.
    fn set_character_spacing(&mut self, spacing: i32);
    /// Resets spacing to the toolkit default.
    fn clear_character_spacing(&mut self);
}

/// An element laid out along an orientation.
pub trait OrientationTarget {
    /// Sets the orientation.
    fn set_orientation(&mut self, orientation: Orientation);
    /// Resets the orientation to the toolkit default.
    fn clear_orientation(&mut self);
}

/// A numeric font weight, `1..=1000`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(u16);

impl FontWeight {
    /// Weight 400.
    pub const NORMAL: Self = Self(400);
    /// Weight 700.
    pub const BOLD: Self = Self(700);

    /// Creates a weight from its numeric value.
    ///
    /// `weight` must lie in `1..=1000`; this is checked in debug builds.
    #[must_use]
    #[inline]
    pub const fn new(weight: u16) -> Self {
        debug_assert!(
            matches!(weight, 1..=1000),
            "font weight must lie in 1..=1000"
        );
        Self(weight)
    }

    /// Returns the numeric value.
    #[must_use]
    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Parses one of `normal`, `bold`, `100`, `200`, ..., `900`.
    ///
    /// ```rust
    /// use understory_native_style::FontWeight;
    ///
    /// assert_eq!(FontWeight::from_token("600"), Some(FontWeight::new(600)));
    /// assert_eq!(FontWeight::from_token("bold"), Some(FontWeight::BOLD));
    /// assert_eq!(FontWeight::from_token("650"), None);
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let weight = match token {
            "normal" => return Some(Self::NORMAL),
            "bold" => return Some(Self::BOLD),
            "100" => 100,
            "200" => 200,
            "300" => 300,
            "400" => 400,
            "500" => 500,
            "600" => 600,
            "700" => 700,
            "800" => 800,
            "900" => 900,
            _ => return None,
        };
        Some(Self(weight))
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Upright or italic glyphs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Upright.
    #[default]
    Normal,
    /// Italic.
    Italic,
}

impl FontStyle {
    /// `italic` is italic; every other token is normal.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        if token == "italic" {
            Self::Italic
        } else {
            Self::Normal
        }
    }
}

/// Horizontal text alignment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    /// Align to the left edge.
    Left,
    /// Center.
    Center,
    /// Align to the right edge.
    Right,
    /// Stretch lines to both edges.
    Justify,
    /// Follow the reading order of the content.
    DetectFromContent,
}

impl TextAlignment {
    /// Maps `left`, `right`, `center` and `justify`; anything else detects
    /// alignment from content.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "left" => Self::Left,
            "right" => Self::Right,
            "center" => Self::Center,
            "justify" => Self::Justify,
            _ => Self::DetectFromContent,
        }
    }
}

/// How overflowing text is cut off.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextTrimming {
    /// Overflow is neither clipped nor ellipsized by the text element.
    None,
    /// Clip at the element bounds.
    Clip,
    /// Replace trailing characters with an ellipsis.
    CharacterEllipsis,
}

impl TextTrimming {
    /// Maps an ellipsize mode to a trimming mode.
    ///
    /// `clip` clips. `head`, `middle` and `tail` all become
    /// [`TextTrimming::CharacterEllipsis`], the closest the toolkit offers to
    /// leading or centred ellipses. Anything else disables trimming.
    #[must_use]
    pub fn from_ellipsize_mode(mode: &str) -> Self {
        match mode {
            "clip" => Self::Clip,
            "head" | "middle" | "tail" => Self::CharacterEllipsis,
            _ => Self::None,
        }
    }
}

bitflags::bitflags! {
    /// Lines drawn through or under text.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TextDecorations: u8 {
        /// A line under the text.
        const UNDERLINE     = 0b0000_0001;
        /// A line through the text.
        const STRIKETHROUGH = 0b0000_0010;
    }
}

impl TextDecorations {
    /// Maps a decoration line value.
    ///
    /// ```rust
    /// use understory_native_style::TextDecorations;
    ///
    /// assert_eq!(
    ///     TextDecorations::from_line("underline line-through"),
    ///     TextDecorations::UNDERLINE | TextDecorations::STRIKETHROUGH
    /// );
    /// assert_eq!(TextDecorations::from_line("overline"), TextDecorations::empty());
    /// ```
    #[must_use]
    pub fn from_line(line: &str) -> Self {
        match line {
            "underline" => Self::UNDERLINE,
            "line-through" => Self::STRIKETHROUGH,
            "underline line-through" => Self::UNDERLINE | Self::STRIKETHROUGH,
            _ => Self::empty(),
        }
    }
}

/// Direction in which content flows horizontally.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FlowDirection {
    /// Left to right.
    LeftToRight,
    /// Right to left.
    RightToLeft,
}

impl FlowDirection {
    /// Maps `ltr` and `rtl`. Other tokens (`auto`, `inherit`) have no local
    /// direction.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "ltr" => Some(Self::LeftToRight),
            "rtl" => Some(Self::RightToLeft),
            _ => None,
        }
    }
}

/// Main axis of a stacking control.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Children stack left to right.
    Horizontal,
    /// Children stack top to bottom.
    Vertical,
}

impl Orientation {
    /// Maps `horizontal` and `vertical`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "horizontal" => Some(Self::Horizontal),
            "vertical" => Some(Self::Vertical),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_weight_tokens() {
        for (token, weight) in [
            ("100", 100),
            ("300", 300),
            ("400", 400),
            ("600", 600),
            ("900", 900),
            ("normal", 400),
            ("bold", 700),
        ] {
            assert_eq!(FontWeight::from_token(token).map(FontWeight::value), Some(weight));
        }
        assert_eq!(FontWeight::from_token("purple"), None);
        assert_eq!(FontWeight::from_token("Bold"), None);
        assert_eq!(FontWeight::default(), FontWeight::NORMAL);
    }

    #[test]
    fn font_weight_bounds() {
        assert_eq!(FontWeight::new(1).value(), 1);
        assert_eq!(FontWeight::new(1000).value(), 1000);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "font weight must lie in 1..=1000")]
    fn zero_font_weight_is_rejected() {
        let _ = FontWeight::new(0);
    }

    #[test]
    fn font_style_tokens() {
        assert_eq!(FontStyle::from_token("italic"), FontStyle::Italic);
        assert_eq!(FontStyle::from_token("oblique"), FontStyle::Normal);
    }

    #[test]
    fn text_alignment_falls_back_to_content() {
        assert_eq!(TextAlignment::from_token("justify"), TextAlignment::Justify);
        assert_eq!(TextAlignment::from_token("auto"), TextAlignment::DetectFromContent);
    }

    #[test]
    fn ellipsize_modes() {
        assert_eq!(TextTrimming::from_ellipsize_mode("clip"), TextTrimming::Clip);
        assert_eq!(
            TextTrimming::from_ellipsize_mode("head"),
            TextTrimming::CharacterEllipsis
        );
        assert_eq!(
            TextTrimming::from_ellipsize_mode("middle"),
            TextTrimming::CharacterEllipsis
        );
        assert_eq!(
            TextTrimming::from_ellipsize_mode("tail"),
            TextTrimming::CharacterEllipsis
        );
        assert_eq!(TextTrimming::from_ellipsize_mode("wrap"), TextTrimming::None);
    }

    #[test]
    fn decoration_lines() {
        assert_eq!(TextDecorations::from_line("none"), TextDecorations::empty());
        assert_eq!(TextDecorations::from_line("underline"), TextDecorations::UNDERLINE);
        assert_eq!(
            TextDecorations::from_line("line-through"),
            TextDecorations::STRIKETHROUGH
        );
    }

    #[test]
    fn direction_and_orientation_tokens() {
        assert_eq!(FlowDirection::from_token("rtl"), Some(FlowDirection::RightToLeft));
        assert_eq!(FlowDirection::from_token("auto"), None);
        assert_eq!(Orientation::from_token("vertical"), Some(Orientation::Vertical));
        assert_eq!(Orientation::from_token("diagonal"), None);
    }
}
