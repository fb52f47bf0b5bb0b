// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-name lookup.
//!
//! Every host property name the applier understands maps to exactly one
//! [`PropertyKey`], and every key belongs to exactly one [`PropertyGroup`].

use hashbrown::HashMap;
use understory_box_edges::{Corner, Edge};

/// A family of related properties handled together.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PropertyGroup {
    /// `backgroundColor`.
    Background,
    /// `color`.
    Foreground,
    /// `borderColor` and the border widths.
    Border,
    /// `padding` and its edges and axes.
    Padding,
    /// `borderRadius` and its corners.
    CornerRadius,
    /// `fontSize`, `fontFamily`, `fontWeight`, `fontStyle`.
    Font,
    /// `textAlign`.
    TextAlignment,
    /// `ellipsizeMode`.
    TextTrimming,
    /// `textDecorationLine`.
    TextDecoration,
    /// `writingDirection`, `direction`.
    FlowDirection,
    /// `letterSpacing`, `characterSpacing`.
    CharacterSpacing,
    /// `orientation`.
    Orientation,
    /// `onMouseEnter`, `onMouseLeave`, `onMouseMove`.
    MouseEvents,
}

/// A recognized property, with the slot it writes where relevant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    /// `backgroundColor`.
    BackgroundColor,
    /// `color`.
    Color,
    /// `borderColor`.
    BorderColor,
    /// `borderWidth` and `border{Left,Top,Right,Bottom,Start,End}Width`.
    BorderWidth(Edge),
    /// `padding` and `padding{Left,Top,Right,Bottom,Start,End,Horizontal,Vertical}`.
    Padding(Edge),
    /// `borderRadius` and `border{Top,Bottom}{Left,Right,Start,End}Radius`.
    BorderRadius(Corner),
    /// `fontSize`.
    FontSize,
    /// `fontFamily`.
    FontFamily,
    /// `fontWeight`.
    FontWeight,
    /// `fontStyle`.
    FontStyle,
    /// `textAlign`.
    TextAlign,
    /// `ellipsizeMode`.
    EllipsizeMode,
    /// `textDecorationLine`.
    TextDecorationLine,
    /// `writingDirection` or `direction`.
    Direction,
    /// `letterSpacing` or `characterSpacing`.
    CharacterSpacing,
    /// `orientation`.
    Orientation,
    /// `onMouseEnter`.
    MouseEnter,
    /// `onMouseLeave`.
    MouseLeave,
    /// `onMouseMove`.
    MouseMove,
}

impl PropertyKey {
    /// Returns the group that handles this property.
    #[must_use]
    pub const fn group(self) -> PropertyGroup {
        match self {
            Self::BackgroundColor => PropertyGroup::Background,
            Self::Color => PropertyGroup::Foreground,
            Self::BorderColor | Self::BorderWidth(_) => PropertyGroup::Border,
            Self::Padding(_) => PropertyGroup::Padding,
            Self::BorderRadius(_) => PropertyGroup::CornerRadius,
            Self::FontSize | Self::FontFamily | Self::FontWeight | Self::FontStyle => {
                PropertyGroup::Font
            }
            Self::TextAlign => PropertyGroup::TextAlignment,
            Self::EllipsizeMode => PropertyGroup::TextTrimming,
            Self::TextDecorationLine => PropertyGroup::TextDecoration,
            Self::Direction => PropertyGroup::FlowDirection,
            Self::CharacterSpacing => PropertyGroup::CharacterSpacing,
            Self::Orientation => PropertyGroup::Orientation,
            Self::MouseEnter | Self::MouseLeave | Self::MouseMove => PropertyGroup::MouseEvents,
        }
    }
}

const NAMES: &[(&str, PropertyKey)] = &[
    ("backgroundColor", PropertyKey::BackgroundColor),
    ("color", PropertyKey::Color),
    ("borderColor", PropertyKey::BorderColor),
    ("borderLeftWidth", PropertyKey::BorderWidth(Edge::Left)),
    ("borderTopWidth", PropertyKey::BorderWidth(Edge::Top)),
    ("borderRightWidth", PropertyKey::BorderWidth(Edge::Right)),
    ("borderBottomWidth", PropertyKey::BorderWidth(Edge::Bottom)),
    ("borderStartWidth", PropertyKey::BorderWidth(Edge::Start)),
    ("borderEndWidth", PropertyKey::BorderWidth(Edge::End)),
    ("borderWidth", PropertyKey::BorderWidth(Edge::All)),
    ("paddingLeft", PropertyKey::Padding(Edge::Left)),
    ("paddingTop", PropertyKey::Padding(Edge::Top)),
    ("paddingRight", PropertyKey::Padding(Edge::Right)),
    ("paddingBottom", PropertyKey::Padding(Edge::Bottom)),
    ("paddingStart", PropertyKey::Padding(Edge::Start)),
    ("paddingEnd", PropertyKey::Padding(Edge::End)),
    ("paddingHorizontal", PropertyKey::Padding(Edge::Horizontal)),
    ("paddingVertical", PropertyKey::Padding(Edge::Vertical)),
    ("padding", PropertyKey::Padding(Edge::All)),
    ("borderTopLeftRadius", PropertyKey::BorderRadius(Corner::TopLeft)),
    ("borderTopRightRadius", PropertyKey::BorderRadius(Corner::TopRight)),
    ("borderTopStartRadius", PropertyKey::BorderRadius(Corner::TopStart)),
    ("borderTopEndRadius", PropertyKey::BorderRadius(Corner::TopEnd)),
    ("borderBottomLeftRadius", PropertyKey::BorderRadius(Corner::BottomLeft)),
    ("borderBottomRightRadius", PropertyKey::BorderRadius(Corner::BottomRight)),
    ("borderBottomStartRadius", PropertyKey::BorderRadius(Corner::BottomStart)),
    ("borderBottomEndRadius", PropertyKey::BorderRadius(Corner::BottomEnd)),
    ("borderRadius", PropertyKey::BorderRadius(Corner::All)),
    ("fontSize", PropertyKey::FontSize),
    ("fontFamily", PropertyKey::FontFamily),
    ("fontWeight", PropertyKey::FontWeight),
    ("fontStyle", PropertyKey::FontStyle),
    ("textAlign", PropertyKey::TextAlign),
    ("ellipsizeMode", PropertyKey::EllipsizeMode),
    ("textDecorationLine", PropertyKey::TextDecorationLine),
    ("writingDirection", PropertyKey::Direction),
    ("direction", PropertyKey::Direction),
    ("letterSpacing", PropertyKey::CharacterSpacing),
    ("characterSpacing", PropertyKey::CharacterSpacing),
    ("orientation", PropertyKey::Orientation),
    ("onMouseEnter", PropertyKey::MouseEnter),
    ("onMouseLeave", PropertyKey::MouseLeave),
    ("onMouseMove", PropertyKey::MouseMove),
];

/// Table from host property names to [`PropertyKey`]s.
///
/// Built once per applier. Names are case-sensitive.
///
/// # Example
///
/// ```rust
/// use understory_box_edges::Edge;
/// use understory_native_style::{PropertyGroup, PropertyKey, PropertyNames};
///
/// let names = PropertyNames::new();
/// assert_eq!(names.get("paddingStart"), Some(PropertyKey::Padding(Edge::Start)));
/// assert_eq!(names.group("direction"), Some(PropertyGroup::FlowDirection));
/// assert_eq!(names.get("margin"), None);
/// ```
#[derive(Clone, Debug)]
pub struct PropertyNames {
    by_name: HashMap<&'static str, PropertyKey>,
}

impl PropertyNames {
    /// Builds the table of every recognized property name.
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_name: NAMES.iter().copied().collect(),
        }
    }

    /// Looks up a property name.
    #[must_use]
    #[inline]
    pub fn get(&self, name: &str) -> Option<PropertyKey> {
        self.by_name.get(name).copied()
    }

    /// Returns the group that handles `name`, if it is recognized.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<PropertyGroup> {
        self.get(name).map(PropertyKey::group)
    }

    /// Returns the number of recognized names.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns `true` if the table is empty.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Returns an iterator over every recognized name and its key.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, PropertyKey)> + '_ {
        self.by_name.iter().map(|(name, key)| (*name, *key))
    }
}

impl Default for PropertyNames {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn names_are_unique() {
        let names = PropertyNames::new();
        assert_eq!(names.len(), NAMES.len());
    }

    #[test]
    fn border_widths_have_no_axis_names() {
        let names = PropertyNames::new();
        assert_eq!(names.get("borderHorizontalWidth"), None);
        assert_eq!(names.get("borderVerticalWidth"), None);
        assert_eq!(
            names.get("borderWidth"),
            Some(PropertyKey::BorderWidth(Edge::All))
        );
    }

    #[test]
    fn every_corner_has_a_name() {
        let names = PropertyNames::new();
        let corners: Vec<Corner> = names
            .iter()
            .filter_map(|(_, key)| match key {
                PropertyKey::BorderRadius(corner) => Some(corner),
                _ => None,
            })
            .collect();
        for corner in Corner::VARIANTS {
            assert!(corners.contains(&corner), "missing {corner:?}");
        }
    }

    #[test]
    fn every_edge_has_a_padding_name() {
        let names = PropertyNames::new();
        for edge in Edge::VARIANTS {
            assert!(
                names.iter().any(|(_, key)| key == PropertyKey::Padding(edge)),
                "missing padding {edge:?}"
            );
        }
    }

    #[test]
    fn aliases_share_a_key() {
        let names = PropertyNames::new();
        assert_eq!(names.get("direction"), names.get("writingDirection"));
        assert_eq!(names.get("letterSpacing"), names.get("characterSpacing"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let names = PropertyNames::new();
        assert_eq!(names.get("BackgroundColor"), None);
        assert_eq!(names.group("color"), Some(PropertyGroup::Foreground));
    }
}
