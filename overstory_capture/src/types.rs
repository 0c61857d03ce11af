// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for autocapture: elements, events, payloads, and the tree lookup.
//!
//! ## Overview
//!
//! These types describe the capture protocol and its inputs/outputs.
//! They are referenced by the [`resolver`](crate::resolver) and consumed by
//! downstream analytics clients through [`dispatch`](crate::dispatch).

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;

use crate::props::{AttrMap, AttrValue, PropMap};

/// Maximum number of ancestors visited per resolution unless overridden via
/// [`Resolver::set_max_depth`](crate::resolver::Resolver::set_max_depth).
///
/// Bounds the walk so pathological (or accidentally cyclic) host trees can
/// never stall the UI thread.
pub const DEFAULT_MAX_TREE_DEPTH: usize = 20;

/// Reserved prop key carrying an explicit capture label.
///
/// Namespaced to avoid collision with ordinary component props; stable across
/// versions.
pub const LABEL_PROP: &str = "ov-label";

/// Reserved prop key marking a component — and its whole ancestor chain — as
/// not capturable. Any truthy value aborts the resolution.
pub const NO_CAPTURE_PROP: &str = "ov-no-capture";

/// Host accessibility label prop, consulted when [`LABEL_PROP`] is absent.
/// Only string-typed values qualify. Spelled the host's way.
pub const ACCESSIBILITY_LABEL_PROP: &str = "accessibilityLabel";

/// Event kind attached to every payload this crate produces.
pub const TOUCH_EVENT_KIND: &str = "touch";

/// Conventional property key for the interaction's x coordinate.
pub const TOUCH_X_PROP: &str = "$touch_x";

/// Conventional property key for the interaction's y coordinate.
pub const TOUCH_Y_PROP: &str = "$touch_y";

/// Phases of an interaction gesture as delivered by the host.
///
/// Only [`End`](Self::End) — the phase signifying gesture completion — ever
/// triggers a capture; starts and intermediate movement are ignored by
/// [`Autocapture::on_gesture`](crate::dispatch::Autocapture::on_gesture).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GesturePhase {
    /// Gesture began.
    Start,
    /// Pointer moved mid-gesture.
    Move,
    /// Gesture completed.
    End,
}

/// Describe the host component tree to the resolver.
///
/// The chain is borrowed, read-only, for the duration of one resolution call;
/// the resolver never owns or mutates host nodes. `K` is a small copyable
/// node key, the same shape a responder-chain parent lookup uses.
pub trait InstanceLookup<K> {
    /// Returns the component's declared display name for `node`, if any.
    fn display_name(&self, node: &K) -> Option<&str>;

    /// Returns the component's declared type name for `node`, if any.
    /// Consulted only when [`display_name`](Self::display_name) is absent.
    fn type_name(&self, node: &K) -> Option<&str>;

    /// Returns the prop mapping the host retains for `node`, if any.
    fn props(&self, node: &K) -> Option<&PropMap>;

    /// Returns the parent of `node`, or `None` if `node` is a root.
    fn parent_of(&self, node: &K) -> Option<K>;
}

/// A raw interaction event as delivered by the host UI framework.
#[derive(Copy, Clone, Debug)]
pub struct InteractionEvent<K> {
    /// Node that originated the interaction. Events without a target
    /// instance resolve to nothing (a no-op, not an error).
    pub target: Option<K>,
    /// Interaction location in host window coordinates.
    pub point: Point,
}

/// One entry per visited, label-bearing ancestor in a capture payload.
///
/// `attr_class`, `nth_child`, `nth_of_type`, and `order` are DOM concepts with
/// no component-tree equivalent; they are carried at their empty/zero values
/// for schema parity with web captures.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CaptureElement {
    /// Label derived for this node; may be empty.
    pub tag_name: String,
    /// Reserved for web-capture parity; always empty here.
    pub attr_class: Vec<String>,
    /// Reserved for web-capture parity; always 0 here.
    pub nth_child: u32,
    /// Reserved for web-capture parity; always 0 here.
    pub nth_of_type: u32,
    /// The node's props, filtered to primitive values.
    pub attributes: AttrMap,
    /// Reserved position hint; always 0 here.
    pub order: u32,
}

/// The finished unit handed to the analytics client.
///
/// Constructed once per resolved interaction, handed off, then discarded.
#[derive(Clone, Debug, PartialEq)]
pub struct CapturePayload {
    /// Event kind; always [`TOUCH_EVENT_KIND`] in this crate.
    pub kind: &'static str,
    /// Ordered elements, nearest ancestor first.
    pub elements: Vec<CaptureElement>,
    /// The resolution's active label: the first explicit or accessibility
    /// label nearest the origin, falling back to the first display name.
    pub label: Option<String>,
    /// Auxiliary event properties ([`TOUCH_X_PROP`] / [`TOUCH_Y_PROP`]).
    pub properties: AttrMap,
}

/// Build the conventional touch-coordinate properties for `point`.
pub fn touch_properties(point: Point) -> AttrMap {
    let mut out = AttrMap::new();
    out.insert(String::from(TOUCH_X_PROP), AttrValue::Num(point.x));
    out.insert(String::from(TOUCH_Y_PROP), AttrValue::Num(point.y));
    out
}
