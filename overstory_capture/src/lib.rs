// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overstory_capture --heading-base-level=0

//! Overstory Capture: a bounded, `no_std` autocapture layer for UI component trees.
//!
//! ## Overview
//!
//! This crate turns a raw interaction event into a structured capture payload by
//! walking the ancestor chain of the component that originated it.
//! It does not own the component tree.
//! Instead, describe your tree through an [`InstanceLookup`](crate::types::InstanceLookup)
//! (node keys plus parent links, the same shape as a responder-chain parent lookup),
//! and the [`Resolver`](crate::resolver::Resolver) emits a
//! [`CapturePayload`](crate::types::CapturePayload) you can hand to your analytics client.
//!
//! ## Walk semantics
//!
//! - The walk is iterative and bounded: at most
//!   [`DEFAULT_MAX_TREE_DEPTH`](crate::types::DEFAULT_MAX_TREE_DEPTH) ancestors are
//!   visited (configurable), so deep or cyclic host trees cannot stall the UI thread.
//! - A truthy [`NO_CAPTURE_PROP`](crate::types::NO_CAPTURE_PROP) anywhere in the chain
//!   cancels the whole resolution. Opt-out is chain-wide, not per node.
//! - Per node, the label is chosen by priority: the explicit
//!   [`LABEL_PROP`](crate::types::LABEL_PROP), then a string-typed
//!   [`ACCESSIBILITY_LABEL_PROP`](crate::types::ACCESSIBILITY_LABEL_PROP), then the
//!   declared display name (falling back to the type name). The first non-empty label
//!   nearest the origin becomes the payload label and is never overridden by farther
//!   ancestors, though those still contribute their own elements.
//! - Node attributes are filtered to primitives (string/number/boolean) via
//!   [`filter_primitive_attrs`](crate::props::filter_primitive_attrs); handlers and
//!   nested collections are dropped silently.
//!
//! ## Layering
//!
//! The resolver only produces payloads. [`Autocapture`](crate::dispatch::Autocapture)
//! sits above it, gating on an enable flag and the terminal gesture phase, and forwards
//! finished payloads to a [`CaptureSink`](crate::dispatch::CaptureSink) — the seam for
//! the external analytics client. Transport, batching, and retry live behind that seam.
//!
//! Every "error-like" condition here is a silent no-op by design: missing targets,
//! opt-outs, and empty walks all degrade to "nothing captured". Instrumentation must
//! never destabilize the host.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use overstory_capture::resolver::Resolver;
//! use overstory_capture::types::{InstanceLookup, InteractionEvent};
//! use overstory_capture::props::{PropMap, PropValue};
//!
//! #[derive(Copy, Clone, Debug, Eq, PartialEq)]
//! struct Node(u32);
//!
//! struct Chain {
//!     button_props: PropMap,
//! }
//!
//! impl InstanceLookup<Node> for Chain {
//!     fn display_name(&self, node: &Node) -> Option<&str> {
//!         (node.0 == 1).then_some("Screen")
//!     }
//!     fn type_name(&self, _node: &Node) -> Option<&str> {
//!         None
//!     }
//!     fn props(&self, node: &Node) -> Option<&PropMap> {
//!         (node.0 == 2).then_some(&self.button_props)
//!     }
//!     fn parent_of(&self, node: &Node) -> Option<Node> {
//!         (node.0 == 2).then_some(Node(1))
//!     }
//! }
//!
//! let mut button_props = PropMap::new();
//! button_props.insert("ov-label".into(), PropValue::from("Buy"));
//! let resolver = Resolver::new(Chain { button_props });
//!
//! let event = InteractionEvent { target: Some(Node(2)), point: Point::new(10.0, 20.0) };
//! let payload = resolver.resolve(&event).unwrap();
//! assert_eq!(payload.label.as_deref(), Some("Buy"));
//! assert_eq!(payload.elements[0].tag_name, "Buy");
//! assert_eq!(payload.elements[1].tag_name, "Screen");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod dispatch;
pub mod props;
pub mod resolver;
pub mod types;
