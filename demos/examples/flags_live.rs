// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live flag bridging.
//!
//! This example binds a bridge to an in-memory flag client, shows the
//! snapshot seeded from the synchronous read, replaces it with a pushed
//! update, then releases and demonstrates that later pushes no longer land.
//!
//! Run:
//! - `cargo run -p overstory_demos --example flags_live`

use std::cell::RefCell;
use std::rc::Rc;

use overstory_flags::bridge::FlagBridge;
use overstory_flags::client::{AmbientFlags, FlagCallback, FlagClient, Unsubscribe};
use overstory_flags::types::{FlagSnapshot, FlagValue};

/// In-memory stand-in for the wrapped flag library.
#[derive(Default)]
struct MemoryClient {
    current: RefCell<Option<FlagSnapshot>>,
    listeners: Rc<RefCell<Vec<(u64, FlagCallback)>>>,
    next_id: std::cell::Cell<u64>,
}

impl MemoryClient {
    fn push(&self, flags: FlagSnapshot) {
        *self.current.borrow_mut() = Some(flags.clone());
        for (_, callback) in self.listeners.borrow_mut().iter_mut() {
            callback(flags.clone());
        }
    }
}

impl FlagClient for MemoryClient {
    fn current_flags(&self) -> Option<FlagSnapshot> {
        self.current.borrow().clone()
    }

    fn on_flags(&self, callback: FlagCallback) -> Unsubscribe {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, callback));
        let listeners = Rc::clone(&self.listeners);
        Unsubscribe::new(move || listeners.borrow_mut().retain(|(lid, _)| *lid != id))
    }
}

fn print_snapshot(stage: &str, bridge: &FlagBridge) {
    match bridge.snapshot() {
        Some(snapshot) => println!("{stage}: {snapshot:?}"),
        None => println!("{stage}: <no snapshot>"),
    }
}

fn main() {
    let client = Rc::new(MemoryClient::default());
    client.push(FlagSnapshot::from([(
        "betaFeature".to_string(),
        FlagValue::Bool(true),
    )]));

    // Bootstrap registers the shared client once; consumers resolve at the
    // boundary instead of reaching into ambient state themselves.
    let mut ambient = AmbientFlags::new();
    ambient.set_shared(Some(Rc::clone(&client) as Rc<dyn FlagClient>));

    let mut bridge = FlagBridge::new();
    bridge.bind(ambient.resolve(None));
    print_snapshot("after bind (seeded synchronously)", &bridge);

    client.push(FlagSnapshot::from([
        ("betaFeature".to_string(), FlagValue::Bool(false)),
        ("newFlag".to_string(), FlagValue::Variant("on".to_string())),
    ]));
    print_snapshot("after push", &bridge);

    bridge.release();
    client.push(FlagSnapshot::from([(
        "late".to_string(),
        FlagValue::Bool(true),
    )]));
    print_snapshot("after release (stale push ignored)", &bridge);
}
