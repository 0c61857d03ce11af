// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolver implementation.
//!
//! ## Overview
//!
//! Walks the ancestor chain of an interaction's target instance and derives a
//! capture payload: one element per label-bearing ancestor, attributes
//! filtered to primitives, and a single active label for the whole resolution.
//!
//! ## Walk rules
//!
//! - Iterative with an explicit depth counter; at most
//!   [`DEFAULT_MAX_TREE_DEPTH`](crate::types::DEFAULT_MAX_TREE_DEPTH) nodes
//!   are visited unless reconfigured.
//! - A truthy [`NO_CAPTURE_PROP`](crate::types::NO_CAPTURE_PROP) anywhere in
//!   the chain aborts the whole resolution, not just the carrying node.
//! - Per node, label priority is: explicit label prop, string-typed
//!   accessibility label, declared display name (then type name). The first
//!   satisfied rule wins; lower-priority rules are not also applied.
//! - Label-less nodes contribute no element, but the walk continues upward.
//!
//! ## See Also
//!
//! [`dispatch`](crate::dispatch) for the gesture-phase gate that sits above
//! this resolver.

use alloc::string::String;
use alloc::vec::Vec;

use crate::props::{PropValue, filter_primitive_attrs};
use crate::types::{
    ACCESSIBILITY_LABEL_PROP, CaptureElement, CapturePayload, DEFAULT_MAX_TREE_DEPTH,
    InstanceLookup, InteractionEvent, LABEL_PROP, NO_CAPTURE_PROP, TOUCH_EVENT_KIND,
    touch_properties,
};

/// Bounded component-tree event resolver.
///
/// ## Usage
///
/// - Construct with [`Resolver::new`] over an
///   [`InstanceLookup`](crate::types::InstanceLookup) describing the host tree.
/// - Optionally configure policies:
///   - [`Resolver::set_max_depth`] to change the walk bound.
///   - [`Resolver::set_name_filter`] to suppress specific label names
///     (disabled by default; nothing is suppressed).
/// - Call [`Resolver::resolve`] per interaction event to produce a payload,
///   or `None` when nothing qualifies for capture.
pub struct Resolver<K, L: InstanceLookup<K>> {
    pub(crate) lookup: L,
    pub(crate) max_depth: usize,
    pub(crate) ignore_name: Option<fn(&str) -> bool>,
    pub(crate) _phantom: core::marker::PhantomData<fn() -> K>,
}

impl<K: Copy + Eq, L: InstanceLookup<K>> core::fmt::Debug for Resolver<K, L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Resolver")
            .field("max_depth", &self.max_depth)
            .finish_non_exhaustive()
    }
}

impl<K: Copy + Eq, L: InstanceLookup<K>> Resolver<K, L> {
    /// Create a resolver with the default depth bound and no name filter.
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            max_depth: DEFAULT_MAX_TREE_DEPTH,
            ignore_name: None,
            _phantom: core::marker::PhantomData,
        }
    }

    /// Set the maximum number of ancestors visited per resolution.
    pub fn set_max_depth(&mut self, depth: usize) {
        self.max_depth = depth;
    }

    /// Set an optional name-suppression predicate; labels it rejects fall
    /// through to the next priority rule for that node.
    pub fn set_name_filter(&mut self, filter: Option<fn(&str) -> bool>) {
        self.ignore_name = filter;
    }

    /// Resolve one interaction event into a capture payload.
    ///
    /// Returns `None` — silently, never an error — when the event has no
    /// target instance, when an opt-out marker is found anywhere in the
    /// chain, or when no visited ancestor yields a label.
    pub fn resolve(&self, event: &InteractionEvent<K>) -> Option<CapturePayload> {
        let target = event.target?;

        let mut elements: Vec<CaptureElement> = Vec::new();
        let mut active_label: Option<String> = None;
        let mut active_display_name: Option<String> = None;

        let mut current = Some(target);
        let mut visited = 0;
        while let Some(node) = current {
            if visited == self.max_depth {
                break;
            }
            visited += 1;

            let props = self.lookup.props(&node);

            let mut el = CaptureElement::default();
            if let Some(props) = props {
                el.attributes = filter_primitive_attrs(props);

                // Opt-out is absolute and chain-wide: abort the whole
                // resolution, not merely this node.
                if props
                    .get(NO_CAPTURE_PROP)
                    .is_some_and(PropValue::is_truthy)
                {
                    return None;
                }
            }

            let explicit = props
                .and_then(|p| p.get(LABEL_PROP))
                .and_then(PropValue::as_label);

            // An empty explicit label is treated as absent: it must neither
            // claim the active-label slot nor shadow this node's other rules.
            if let Some(label) = explicit.filter(|l| !l.is_empty() && !self.is_name_ignored(l)) {
                if active_label.is_none() {
                    active_label = Some(label.clone());
                }
                el.tag_name = label;
                elements.push(el);
            } else if let Some(PropValue::Str(a11y)) =
                props.and_then(|p| p.get(ACCESSIBILITY_LABEL_PROP))
                && !self.is_name_ignored(a11y)
            {
                if active_label.is_none() {
                    active_label = Some(a11y.clone());
                }
                el.tag_name = a11y.clone();
                elements.push(el);
            } else if let Some(name) = self
                .lookup
                .display_name(&node)
                .or_else(|| self.lookup.type_name(&node))
                && !self.is_name_ignored(name)
            {
                if active_display_name.is_none() {
                    active_display_name = Some(String::from(name));
                }
                el.tag_name = String::from(name);
                elements.push(el);
            }

            current = self.lookup.parent_of(&node);
        }

        if elements.is_empty() {
            return None;
        }

        Some(CapturePayload {
            kind: TOUCH_EVENT_KIND,
            elements,
            label: active_label.or(active_display_name),
            properties: touch_properties(event.point),
        })
    }

    fn is_name_ignored(&self, name: &str) -> bool {
        self.ignore_name.is_some_and(|f| f(name))
    }
}
