// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bridge implementation.
//!
//! ## Overview
//!
//! [`FlagBridge`] is the reactive cell between application code and a
//! [`FlagClient`](crate::client::FlagClient). Binding seeds the snapshot from
//! the client's synchronous read, then holds exactly one live subscription per
//! distinct client reference. Each push replaces the snapshot wholesale; each
//! release is paired with exactly one successful subscribe and runs on every
//! exit path — re-bind, explicit [`release`](FlagBridge::release), or drop.
//!
//! ## Change detection
//!
//! [`snapshot`](FlagBridge::snapshot) hands out `Rc<FlagSnapshot>`. A consumer
//! holding the previous `Rc` compares with `Rc::ptr_eq` to decide whether
//! anything changed; content is never mutated behind a handed-out pointer.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use crate::client::{FlagClient, Unsubscribe};
use crate::types::FlagSnapshot;

/// A live, reactively updating view over one flag client.
///
/// ## Usage
///
/// - [`bind`](Self::bind) a client (resolved at the boundary, explicitly or
///   via [`AmbientFlags`](crate::client::AmbientFlags)); binding `None`
///   clears the view.
/// - Read [`snapshot`](Self::snapshot) at any time; it is `None` until a
///   bound client has reported flags.
/// - [`release`](Self::release) when the owning consumer is torn down; drop
///   does the same.
pub struct FlagBridge {
    cell: Rc<RefCell<Option<Rc<FlagSnapshot>>>>,
    live: Option<Live>,
}

/// One bound client with its paired subscription state.
struct Live {
    client: Rc<dyn FlagClient>,
    // Shared with the registered callback; cleared on release so a stale
    // late-firing push cannot touch the cell.
    active: Rc<Cell<bool>>,
    unsubscribe: Option<Unsubscribe>,
}

impl core::fmt::Debug for FlagBridge {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlagBridge")
            .field("bound", &self.live.is_some())
            .field("has_snapshot", &self.cell.borrow().is_some())
            .finish()
    }
}

impl Default for FlagBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl FlagBridge {
    /// Create an unbound bridge with no snapshot.
    pub fn new() -> Self {
        Self {
            cell: Rc::new(RefCell::new(None)),
            live: None,
        }
    }

    /// Whether a client is currently bound.
    pub fn is_bound(&self) -> bool {
        self.live.is_some()
    }

    /// The last known complete flag mapping, or `None` if no bound client has
    /// reported flags yet.
    pub fn snapshot(&self) -> Option<Rc<FlagSnapshot>> {
        self.cell.borrow().clone()
    }

    /// Bind the bridge to `client`.
    ///
    /// Re-binding the same client reference (`Rc::ptr_eq`) is a no-op. A
    /// distinct reference releases the previous subscription, seeds the
    /// snapshot from the synchronous read — before any asynchronous update
    /// arrives — and subscribes exactly once. `None` releases and clears.
    pub fn bind(&mut self, client: Option<Rc<dyn FlagClient>>) {
        if let Some(live) = &self.live
            && let Some(next) = &client
            && Rc::ptr_eq(&live.client, next)
        {
            return;
        }

        self.release();

        let Some(client) = client else {
            *self.cell.borrow_mut() = None;
            return;
        };

        *self.cell.borrow_mut() = client.current_flags().map(Rc::new);

        let active = Rc::new(Cell::new(true));
        let guard = Rc::clone(&active);
        let cell = Rc::clone(&self.cell);
        let unsubscribe = client.on_flags(Box::new(move |flags| {
            if guard.get() {
                *cell.borrow_mut() = Some(Rc::new(flags));
            }
        }));

        self.live = Some(Live {
            client,
            active,
            unsubscribe: Some(unsubscribe),
        });
    }

    /// Release the current subscription, if any.
    ///
    /// Runs the client's unsubscribe action exactly once and deactivates the
    /// registered callback. The last snapshot stays readable. Safe to call
    /// when nothing is bound, including immediately after subscribing and
    /// before any update has arrived.
    pub fn release(&mut self) {
        if let Some(mut live) = self.live.take() {
            live.active.set(false);
            if let Some(unsubscribe) = live.unsubscribe.take() {
                unsubscribe.run();
            }
        }
    }
}

impl Drop for FlagBridge {
    fn drop(&mut self) {
        self.release();
    }
}
