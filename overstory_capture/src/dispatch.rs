// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Autocapture dispatcher: the enable/phase gate above the resolver.
//!
//! ## Overview
//!
//! [`Autocapture`] owns the capture switch and the downstream
//! [`CaptureSink`]. It invokes the resolver only on the terminal phase of a
//! gesture — starts and intermediate movement are never captured — and
//! forwards any produced payload to the sink. A missing sink or a disabled
//! switch is a silent no-op, never an error.

use crate::resolver::Resolver;
use crate::types::{CapturePayload, GesturePhase, InstanceLookup, InteractionEvent};

/// Downstream entry point of the external analytics client.
///
/// Implementations own batching, transport, and retry; none of that is this
/// crate's concern. The payload is borrowed for the duration of the call.
pub trait CaptureSink {
    /// Accept one finished capture payload.
    fn capture(&mut self, payload: &CapturePayload);
}

/// Wraps the resolver behind an enable flag and an optional sink.
pub struct Autocapture<S: CaptureSink> {
    pub(crate) enabled: bool,
    pub(crate) sink: Option<S>,
}

impl<S: CaptureSink> core::fmt::Debug for Autocapture<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Autocapture")
            .field("enabled", &self.enabled)
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}

impl<S: CaptureSink> Autocapture<S> {
    /// Create a dispatcher; capture starts disabled until
    /// [`set_enabled`](Self::set_enabled) turns it on.
    pub fn new(sink: Option<S>) -> Self {
        Self {
            enabled: false,
            sink,
        }
    }

    /// Turn capture on or off.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether capture is currently enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Replace the downstream sink; `None` silences dispatch.
    pub fn set_sink(&mut self, sink: Option<S>) {
        self.sink = sink;
    }

    /// Handle one gesture callback from the host.
    ///
    /// Resolves and forwards only when `phase` is [`GesturePhase::End`],
    /// capture is enabled, and a sink is present; every other combination is
    /// a silent no-op.
    pub fn on_gesture<K: Copy + Eq, L: InstanceLookup<K>>(
        &mut self,
        phase: GesturePhase,
        event: &InteractionEvent<K>,
        resolver: &Resolver<K, L>,
    ) {
        if phase != GesturePhase::End || !self.enabled {
            return;
        }
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        if let Some(payload) = resolver.resolve(event) {
            sink.capture(&payload);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::{PropMap, PropValue};
    use crate::types::LABEL_PROP;
    use alloc::string::ToString;
    use alloc::vec::Vec;
    use kurbo::Point;

    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    struct Node;

    struct Leaf {
        props: PropMap,
    }

    impl Leaf {
        fn labeled(label: &str) -> Self {
            let mut props = PropMap::new();
            props.insert(LABEL_PROP.to_string(), PropValue::from(label));
            Self { props }
        }
    }

    impl InstanceLookup<Node> for Leaf {
        fn display_name(&self, _node: &Node) -> Option<&str> {
            None
        }
        fn type_name(&self, _node: &Node) -> Option<&str> {
            None
        }
        fn props(&self, _node: &Node) -> Option<&PropMap> {
            Some(&self.props)
        }
        fn parent_of(&self, _node: &Node) -> Option<Node> {
            None
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        captured: Vec<CapturePayload>,
    }

    impl CaptureSink for RecordingSink {
        fn capture(&mut self, payload: &CapturePayload) {
            self.captured.push(payload.clone());
        }
    }

    fn tap() -> InteractionEvent<Node> {
        InteractionEvent {
            target: Some(Node),
            point: Point::new(1.0, 2.0),
        }
    }

    #[test]
    fn end_phase_forwards_payload_to_sink() {
        let resolver = Resolver::new(Leaf::labeled("Buy"));
        let mut auto = Autocapture::new(Some(RecordingSink::default()));
        auto.set_enabled(true);
        auto.on_gesture(GesturePhase::End, &tap(), &resolver);
        let sink = auto.sink.as_ref().unwrap();
        assert_eq!(sink.captured.len(), 1);
        assert_eq!(sink.captured[0].label.as_deref(), Some("Buy"));
    }

    #[test]
    fn non_terminal_phases_are_ignored() {
        let resolver = Resolver::new(Leaf::labeled("Buy"));
        let mut auto = Autocapture::new(Some(RecordingSink::default()));
        auto.set_enabled(true);
        auto.on_gesture(GesturePhase::Start, &tap(), &resolver);
        auto.on_gesture(GesturePhase::Move, &tap(), &resolver);
        assert!(auto.sink.as_ref().unwrap().captured.is_empty());
    }

    #[test]
    fn disabled_dispatcher_captures_nothing() {
        let resolver = Resolver::new(Leaf::labeled("Buy"));
        let mut auto = Autocapture::new(Some(RecordingSink::default()));
        auto.on_gesture(GesturePhase::End, &tap(), &resolver);
        assert!(auto.sink.as_ref().unwrap().captured.is_empty());
    }

    #[test]
    fn missing_sink_is_a_silent_no_op() {
        let resolver = Resolver::new(Leaf::labeled("Buy"));
        let mut auto: Autocapture<RecordingSink> = Autocapture::new(None);
        auto.set_enabled(true);
        auto.on_gesture(GesturePhase::End, &tap(), &resolver);
    }

    #[test]
    fn unresolved_event_reaches_no_sink_call() {
        let resolver = Resolver::new(Leaf {
            props: PropMap::new(),
        });
        let mut auto = Autocapture::new(Some(RecordingSink::default()));
        auto.set_enabled(true);
        auto.on_gesture(GesturePhase::End, &tap(), &resolver);
        assert!(auto.sink.as_ref().unwrap().captured.is_empty());
    }
}
