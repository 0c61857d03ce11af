// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The external flag client seam: reads, subscriptions, and the ambient default.
//!
//! ## Overview
//!
//! [`FlagClient`] is the boundary to the library that actually owns flag
//! state — its network, storage, and retry behavior are out of scope here.
//! [`Unsubscribe`] is the paired release action for one subscription, and
//! [`AmbientFlags`] resolves a shared default client for consumers that do
//! not pass one explicitly. Resolution happens at this boundary only; the
//! [`bridge`](crate::bridge) itself never consults ambient state.

use alloc::boxed::Box;
use alloc::rc::Rc;

use crate::types::FlagSnapshot;

/// Callback invoked by the client with each newly pushed flag mapping.
pub type FlagCallback = Box<dyn FnMut(FlagSnapshot)>;

/// A client owning asynchronously updated flag state.
///
/// Methods take `&self`: clients are shared (`Rc<dyn FlagClient>`) and manage
/// their own interior state.
pub trait FlagClient {
    /// Synchronous read of the currently known flags, or `None` if the client
    /// has not learned them yet.
    fn current_flags(&self) -> Option<FlagSnapshot>;

    /// Register `callback` for subsequent flag pushes and return the paired
    /// release action.
    ///
    /// The callback must be invoked once per push, in arrival order, with the
    /// complete new mapping.
    fn on_flags(&self, callback: FlagCallback) -> Unsubscribe;
}

/// The release action returned by [`FlagClient::on_flags`].
///
/// Runs at most once; consuming it via [`run`](Self::run) is the only way to
/// fire it, so a double release cannot be expressed.
pub struct Unsubscribe(Option<Box<dyn FnOnce()>>);

impl Unsubscribe {
    /// Wrap a release action.
    pub fn new(action: impl FnOnce() + 'static) -> Self {
        Self(Some(Box::new(action)))
    }

    /// A release action that does nothing, for clients without per-listener
    /// bookkeeping.
    pub fn noop() -> Self {
        Self(None)
    }

    /// Run the release action.
    pub fn run(mut self) {
        if let Some(action) = self.0.take() {
            action();
        }
    }
}

impl core::fmt::Debug for Unsubscribe {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Unsubscribe")
            .field("armed", &self.0.is_some())
            .finish()
    }
}

/// Resolves the shared, context-provided flag client.
///
/// A thin adapter over "explicit argument wins, ambient default otherwise".
/// Host bootstrap registers the shared client once; consumers resolve at the
/// boundary and hand the result to [`FlagBridge::bind`](crate::bridge::FlagBridge::bind).
#[derive(Clone, Default)]
pub struct AmbientFlags {
    shared: Option<Rc<dyn FlagClient>>,
}

impl core::fmt::Debug for AmbientFlags {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AmbientFlags")
            .field("has_shared", &self.shared.is_some())
            .finish()
    }
}

impl AmbientFlags {
    /// Create an empty registry with no shared client.
    pub fn new() -> Self {
        Self { shared: None }
    }

    /// Register (or clear) the shared client.
    pub fn set_shared(&mut self, client: Option<Rc<dyn FlagClient>>) {
        self.shared = client;
    }

    /// The shared client, if one is registered.
    pub fn shared(&self) -> Option<Rc<dyn FlagClient>> {
        self.shared.clone()
    }

    /// Resolve a consumer's client: an explicitly passed client wins over the
    /// shared default; `None` when neither exists.
    pub fn resolve(&self, explicit: Option<Rc<dyn FlagClient>>) -> Option<Rc<dyn FlagClient>> {
        explicit.or_else(|| self.shared.clone())
    }
}
