// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overstory_flags --heading-base-level=0

//! Overstory Flags: a live, `no_std` bridge over an asynchronously updated flag store.
//!
//! ## Overview
//!
//! Feature-flag state is owned by an external client: it exposes a synchronous
//! "current flags" read and an asynchronous "on change" subscription. This crate
//! keeps application code synchronized with that state through
//! [`FlagBridge`](crate::bridge::FlagBridge): a single-writer cell that is seeded
//! from the synchronous read the moment a client is bound, then replaced wholesale
//! on every pushed update.
//!
//! ## Snapshot identity
//!
//! Snapshots are shared as `Rc<FlagSnapshot>` and never mutated in place.
//! Consumers detect change by pointer identity (`Rc::ptr_eq`) and always observe
//! a complete mapping, never a partially updated one.
//!
//! ## Subscription lifecycle
//!
//! The subscription is the only long-lived resource here, and its acquisition and
//! release are paired per client-reference lifetime:
//!
//! - binding a distinct client releases any prior subscription first;
//! - re-binding the same client (`Rc::ptr_eq`) is a no-op;
//! - [`release`](crate::bridge::FlagBridge::release) — also run on drop — runs the
//!   [`Unsubscribe`](crate::client::Unsubscribe) action exactly once and
//!   deactivates the registered callback, so a stale late-firing push can no
//!   longer touch the snapshot.
//!
//! ## Ambient clients
//!
//! The bridge itself takes explicit client references only. Consumers that rely
//! on a shared, context-provided client resolve it at the boundary through
//! [`AmbientFlags`](crate::client::AmbientFlags), never inside the core.
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use overstory_flags::bridge::FlagBridge;
//! use overstory_flags::client::{FlagCallback, FlagClient, Unsubscribe};
//! use overstory_flags::types::{FlagSnapshot, FlagValue};
//!
//! #[derive(Default)]
//! struct Client {
//!     listeners: Rc<RefCell<Vec<FlagCallback>>>,
//! }
//!
//! impl FlagClient for Client {
//!     fn current_flags(&self) -> Option<FlagSnapshot> {
//!         let mut flags = FlagSnapshot::new();
//!         flags.insert("betaFeature".into(), FlagValue::Bool(true));
//!         Some(flags)
//!     }
//!     fn on_flags(&self, callback: FlagCallback) -> Unsubscribe {
//!         self.listeners.borrow_mut().push(callback);
//!         Unsubscribe::noop()
//!     }
//! }
//!
//! let client: Rc<dyn FlagClient> = Rc::new(Client::default());
//! let mut bridge = FlagBridge::new();
//! bridge.bind(Some(client));
//!
//! // Seeded from the synchronous read, before any push arrives.
//! let snapshot = bridge.snapshot().unwrap();
//! assert_eq!(snapshot.get("betaFeature"), Some(&FlagValue::Bool(true)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod bridge;
pub mod client;
pub mod types;
