// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flag values and snapshots.

use alloc::collections::BTreeMap;
use alloc::string::String;

/// The value of one feature flag: a plain on/off switch or a named variant
/// from a multivariate rollout.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FlagValue {
    /// Boolean flag.
    Bool(bool),
    /// Multivariate flag; carrying a variant implies the flag is on.
    Variant(String),
}

impl FlagValue {
    /// Whether this flag counts as enabled.
    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Variant(_) => true,
        }
    }

    /// The variant name, if this is a multivariate flag.
    pub fn variant(&self) -> Option<&str> {
        match self {
            Self::Bool(_) => None,
            Self::Variant(v) => Some(v),
        }
    }
}

impl From<bool> for FlagValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for FlagValue {
    fn from(v: &str) -> Self {
        Self::Variant(String::from(v))
    }
}

/// The last known complete mapping from flag key to value.
///
/// Always replaced wholesale, never mutated in place; see the
/// [`bridge`](crate::bridge) module for the identity contract.
pub type FlagSnapshot = BTreeMap<String, FlagValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_flags_report_enablement() {
        assert!(FlagValue::Bool(true).is_enabled());
        assert!(!FlagValue::Bool(false).is_enabled());
        assert_eq!(FlagValue::Bool(true).variant(), None);
    }

    #[test]
    fn variants_are_always_enabled() {
        let v = FlagValue::from("treatment-b");
        assert!(v.is_enabled());
        assert_eq!(v.variant(), Some("treatment-b"));
    }
}
