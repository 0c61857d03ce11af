// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Autocapture basics.
//!
//! This minimal example describes a small component tree through an
//! `InstanceLookup`, resolves a tap on the innermost node, and prints the
//! payload the dispatcher would hand to an analytics client.
//!
//! Run:
//! - `cargo run -p overstory_demos --example autocapture_basics`

use kurbo::Point;
use overstory_capture::dispatch::{Autocapture, CaptureSink};
use overstory_capture::props::{PropMap, PropValue};
use overstory_capture::resolver::Resolver;
use overstory_capture::types::{
    CapturePayload, GesturePhase, InstanceLookup, InteractionEvent, LABEL_PROP,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Node(u32);

/// A fixed three-level tree: BuyButton(3) → CartPanel(2) → Screen(1).
struct Tree {
    buy_props: PropMap,
}

impl Tree {
    fn new() -> Self {
        let mut buy_props = PropMap::new();
        buy_props.insert(LABEL_PROP.into(), PropValue::from("Buy"));
        buy_props.insert("sku".into(), PropValue::from("tree-001"));
        buy_props.insert("onPress".into(), PropValue::Opaque);
        Self { buy_props }
    }
}

impl InstanceLookup<Node> for Tree {
    fn display_name(&self, node: &Node) -> Option<&str> {
        match node.0 {
            2 => Some("CartPanel"),
            1 => Some("Screen"),
            _ => None,
        }
    }
    fn type_name(&self, _node: &Node) -> Option<&str> {
        None
    }
    fn props(&self, node: &Node) -> Option<&PropMap> {
        (node.0 == 3).then_some(&self.buy_props)
    }
    fn parent_of(&self, node: &Node) -> Option<Node> {
        (node.0 > 1).then(|| Node(node.0 - 1))
    }
}

struct PrintSink;

impl CaptureSink for PrintSink {
    fn capture(&mut self, payload: &CapturePayload) {
        println!("== Capture ({}) ==", payload.kind);
        println!("  label: {:?}", payload.label);
        for el in &payload.elements {
            println!("  element {:?}  attrs={:?}", el.tag_name, el.attributes);
        }
        println!("  properties: {:?}", payload.properties);
    }
}

fn main() {
    let resolver = Resolver::new(Tree::new());
    let mut auto = Autocapture::new(Some(PrintSink));
    auto.set_enabled(true);

    let event = InteractionEvent {
        target: Some(Node(3)),
        point: Point::new(120.0, 480.0),
    };

    // Starts and moves are ignored; only the terminal phase captures.
    auto.on_gesture(GesturePhase::Start, &event, &resolver);
    auto.on_gesture(GesturePhase::Move, &event, &resolver);
    auto.on_gesture(GesturePhase::End, &event, &resolver);
}
