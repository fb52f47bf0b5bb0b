// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered property dispatch for one kind of control.
//!
//! A control registers only the property groups its element supports. Each
//! builder method is bounded by the group's capability trait, so registering
//! a group the element cannot honor is a compile error.

use alloc::vec::Vec;
use core::fmt;

use crate::applier::StyleApplier;
use crate::box_model::apply_corner_radius;
use crate::brush::{NoResourceBrushes, ResourceBrushes};
use crate::element::{
    BackgroundTarget, BorderTarget, CharacterSpacingTarget, CornerRadiusTarget,
    FlowDirectionTarget, FontTarget, ForegroundTarget, OrientationTarget, PaddingTarget,
    TextAlignmentTarget, TextDecorationsTarget, TextTrimmingTarget,
};
use crate::names::PropertyGroup;
use crate::node::ShadowNode;
use crate::value::{PropValue, PropertyUpdate};

type Handler<N, E, R> = fn(&StyleApplier<'_, R>, &mut N, &mut E, &str, &PropValue) -> bool;

/// The property groups a control handles, in the order they are tried.
///
/// # Type Parameters
///
/// * `N` - The shadow node type.
/// * `E` - The native element type.
/// * `R` - The [`ResourceBrushes`] coordinator of the applier.
///
/// # Example
///
/// ```rust
/// use understory_native_style::{
///     DefaultBrushStore, PropValue, PropertyChain, PropertyGroup, ShadowStyle, StyleApplier,
///     OrientationTarget, Orientation,
/// };
///
/// #[derive(Default)]
/// struct Stack {
///     orientation: Option<Orientation>,
/// }
///
/// impl OrientationTarget for Stack {
///     fn set_orientation(&mut self, orientation: Orientation) {
///         self.orientation = Some(orientation);
///     }
///     fn clear_orientation(&mut self) {
///         self.orientation = None;
///     }
/// }
///
/// let chain: PropertyChain<ShadowStyle, Stack> = PropertyChain::builder()
///     .orientation()
///     .mouse_events()
///     .build();
///
/// let brushes = DefaultBrushStore::default();
/// let applier = StyleApplier::new(&brushes);
/// let mut node = ShadowStyle::new();
/// let mut stack = Stack::default();
///
/// let handled = chain.apply(&applier, &mut node, &mut stack, "orientation", &"vertical".into());
/// assert_eq!(handled, Some(PropertyGroup::Orientation));
/// assert_eq!(stack.orientation, Some(Orientation::Vertical));
///
/// // Stacks have no background.
/// assert_eq!(chain.apply(&applier, &mut node, &mut stack, "backgroundColor", &PropValue::Null), None);
/// ```
pub struct PropertyChain<N, E, R = NoResourceBrushes> {
    entries: Vec<(PropertyGroup, Handler<N, E, R>)>,
}

impl<N, E, R> PropertyChain<N, E, R> {
    /// Starts an empty chain.
    #[must_use]
    pub fn builder() -> PropertyChainBuilder<N, E, R> {
        PropertyChainBuilder::new()
    }

    /// Applies one property.
    ///
    /// Groups are tried in registration order. Returns the group that handled
    /// the property, or `None` when no registered group recognizes the name.
    pub fn apply(
        &self,
        applier: &StyleApplier<'_, R>,
        node: &mut N,
        element: &mut E,
        name: &str,
        value: &PropValue,
    ) -> Option<PropertyGroup> {
        self.entries
            .iter()
            .find(|(_, handler)| handler(applier, node, element, name, value))
            .map(|(group, _)| *group)
    }

    /// Applies one [`PropertyUpdate`].
    pub fn apply_update(
        &self,
        applier: &StyleApplier<'_, R>,
        node: &mut N,
        element: &mut E,
        update: &PropertyUpdate,
    ) -> Option<PropertyGroup> {
        self.apply(applier, node, element, &update.name, &update.value)
    }

    /// Applies a batch in order and returns how many updates were handled.
    pub fn apply_all<'u>(
        &self,
        applier: &StyleApplier<'_, R>,
        node: &mut N,
        element: &mut E,
        updates: impl IntoIterator<Item = &'u PropertyUpdate>,
    ) -> usize {
        updates
            .into_iter()
            .filter(|update| {
                self.apply_update(applier, node, element, update)
                    .is_some()
            })
            .count()
    }

    /// Returns whether `group` is registered.
    #[must_use]
    pub fn contains(&self, group: PropertyGroup) -> bool {
        self.entries.iter().any(|(g, _)| *g == group)
    }

    /// Iterates the registered groups in dispatch order.
    pub fn groups(&self) -> impl Iterator<Item = PropertyGroup> + '_ {
        self.entries.iter().map(|(group, _)| *group)
    }

    /// Returns the number of registered groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no group is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N, E, R> Clone for PropertyChain<N, E, R> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<N, E, R> fmt::Debug for PropertyChain<N, E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.groups()).finish()
    }
}

/// Builder for [`PropertyChain`].
///
/// Registering a group twice keeps its first position.
pub struct PropertyChainBuilder<N, E, R = NoResourceBrushes> {
    entries: Vec<(PropertyGroup, Handler<N, E, R>)>,
}

impl<N, E, R> PropertyChainBuilder<N, E, R> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn push(mut self, group: PropertyGroup, handler: Handler<N, E, R>) -> Self {
        if !self.entries.iter().any(|(g, _)| *g == group) {
            self.entries.push((group, handler));
        }
        self
    }

    /// Registers [`PropertyGroup::Background`].
    #[must_use]
    pub fn background(self) -> Self
    where
        E: BackgroundTarget,
        R: ResourceBrushes<E>,
    {
        self.push(PropertyGroup::Background, |applier, _, element, name, value| {
            applier.try_update_background(element, name, value)
        })
    }

    /// Registers [`PropertyGroup::Foreground`].
    #[must_use]
    pub fn foreground(self) -> Self
    where
        E: ForegroundTarget,
        R: ResourceBrushes<E>,
    {
        self.push(PropertyGroup::Foreground, |applier, _, element, name, value| {
            applier.try_update_foreground(element, name, value)
        })
    }

    /// Registers [`PropertyGroup::Border`].
    #[must_use]
    pub fn border(self) -> Self
    where
        N: ShadowNode,
        E: BorderTarget,
        R: ResourceBrushes<E>,
    {
        self.push(PropertyGroup::Border, |applier, node, element, name, value| {
            applier.try_update_border(node, element, name, value)
        })
    }

    /// Registers [`PropertyGroup::Padding`].
    #[must_use]
    pub fn padding(self) -> Self
    where
        N: ShadowNode,
        E: PaddingTarget,
    {
        self.push(PropertyGroup::Padding, |applier, node, element, name, value| {
            applier.try_update_padding(node, element, name, value)
        })
    }

    /// Registers [`PropertyGroup::CornerRadius`].
    ///
    /// Each corner update is written to the node and the resolved radii are
    /// applied to the element right away.
    #[must_use]
    pub fn corner_radius(self) -> Self
    where
        N: ShadowNode,
        E: CornerRadiusTarget,
    {
        self.push(
            PropertyGroup::CornerRadius,
            |applier, node, element, name, value| {
                if !applier.try_update_corner_radius_on_node(node, name, value) {
                    return false;
                }
                apply_corner_radius(node, element);
                true
            },
        )
    }

    /// Registers [`PropertyGroup::Font`].
    #[must_use]
    pub fn font(self) -> Self
    where
        E: FontTarget,
    {
        self.push(PropertyGroup::Font, |applier, _, element, name, value| {
            applier.try_update_font(element, name, value)
        })
    }

    /// Registers [`PropertyGroup::TextAlignment`].
    #[must_use]
    pub fn text_alignment(self) -> Self
    where
        E: TextAlignmentTarget,
    {
        self.push(
            PropertyGroup::TextAlignment,
            |applier, _, element, name, value| {
                applier.try_update_text_alignment(element, name, value)
            },
        )
    }

    /// Registers [`PropertyGroup::TextTrimming`].
    #[must_use]
    pub fn text_trimming(self) -> Self
    where
        E: TextTrimmingTarget,
    {
        self.push(
            PropertyGroup::TextTrimming,
            |applier, _, element, name, value| {
                applier.try_update_text_trimming(element, name, value)
            },
        )
    }

    /// Registers [`PropertyGroup::TextDecoration`].
    #[must_use]
    pub fn text_decoration(self) -> Self
    where
        E: TextDecorationsTarget,
    {
        self.push(
            PropertyGroup::TextDecoration,
            |applier, _, element, name, value| {
                applier.try_update_text_decoration_line(element, name, value)
            },
        )
    }

    /// Registers [`PropertyGroup::FlowDirection`].
    #[must_use]
    pub fn flow_direction(self) -> Self
    where
        E: FlowDirectionTarget,
    {
        self.push(
            PropertyGroup::FlowDirection,
            |applier, _, element, name, value| {
                applier.try_update_flow_direction(element, name, value)
            },
        )
    }

    /// Registers [`PropertyGroup::CharacterSpacing`].
    #[must_use]
    pub fn character_spacing(self) -> Self
    where
        E: CharacterSpacingTarget,
    {
        self.push(
            PropertyGroup::CharacterSpacing,
            |applier, _, element, name, value| {
                applier.try_update_character_spacing(element, name, value)
            },
        )
    }

    /// Registers [`PropertyGroup::Orientation`].
    #[must_use]
    pub fn orientation(self) -> Self
    where
        E: OrientationTarget,
    {
        self.push(PropertyGroup::Orientation, |applier, _, element, name, value| {
            applier.try_update_orientation(element, name, value)
        })
    }

    /// Registers [`PropertyGroup::MouseEvents`].
    #[must_use]
    pub fn mouse_events(self) -> Self
    where
        N: ShadowNode,
    {
        self.push(PropertyGroup::MouseEvents, |applier, node, _, name, value| {
            applier.try_update_mouse_events(node, name, value)
        })
    }

    /// Finishes the chain.
    #[must_use]
    pub fn build(self) -> PropertyChain<N, E, R> {
        PropertyChain {
            entries: self.entries,
        }
    }
}

impl<N, E, R> Default for PropertyChainBuilder<N, E, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E, R> fmt::Debug for PropertyChainBuilder<N, E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(group, _)| group))
            .finish()
    }
}
