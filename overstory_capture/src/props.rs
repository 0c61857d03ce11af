// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host prop values and the primitive attribute filter.
//!
//! ## Overview
//!
//! Hosts attach arbitrary values to their components. [`PropValue`] is the
//! capture-side view of those values: primitives are carried verbatim, and
//! everything else (collections, handlers, opaque host objects) collapses to
//! shapes the filter can drop. [`filter_primitive_attrs`] keeps only the
//! entries whose value is a string, number, or boolean — the subset that is
//! safe and meaningful to ship with an analytics event.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

/// A component property value as supplied by the host UI framework.
///
/// Non-primitive variants exist so the filter has something concrete to
/// reject; the capture layer never looks inside them.
#[derive(Clone, Debug, PartialEq)]
pub enum PropValue {
    /// A string value.
    Str(String),
    /// A numeric value (hosts deliver all numbers as doubles).
    Num(f64),
    /// A boolean value.
    Bool(bool),
    /// An ordered collection. Never captured.
    List(Vec<PropValue>),
    /// A nested mapping. Never captured.
    Map(BTreeMap<String, PropValue>),
    /// A handler, closure, or other host object with no data view. Never captured.
    Opaque,
}

/// A component's prop mapping, keyed by prop name.
pub type PropMap = BTreeMap<String, PropValue>;

/// A primitive-only attribute value, the result of filtering a [`PropValue`].
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    /// A string attribute.
    Str(String),
    /// A numeric attribute.
    Num(f64),
    /// A boolean attribute.
    Bool(bool),
}

/// Filtered attributes attached to a capture element, keyed by prop name.
pub type AttrMap = BTreeMap<String, AttrValue>;

impl PropValue {
    /// Returns the primitive view of this value, or `None` for collections
    /// and opaque host objects.
    pub fn as_attr(&self) -> Option<AttrValue> {
        match self {
            Self::Str(s) => Some(AttrValue::Str(s.clone())),
            Self::Num(n) => Some(AttrValue::Num(*n)),
            Self::Bool(b) => Some(AttrValue::Bool(*b)),
            Self::List(_) | Self::Map(_) | Self::Opaque => None,
        }
    }

    /// Renders this value as a capture label.
    ///
    /// Primitives stringify; collections and opaque values have no meaningful
    /// text form and are treated as absent.
    pub fn as_label(&self) -> Option<String> {
        match self {
            Self::Str(s) => Some(s.clone()),
            Self::Num(n) => Some(alloc::format!("{n}")),
            Self::Bool(b) => Some(String::from(if *b { "true" } else { "false" })),
            Self::List(_) | Self::Map(_) | Self::Opaque => None,
        }
    }

    /// Host-style truthiness, used for the opt-out marker: empty strings,
    /// zero, and NaN are falsy; collections and opaque values are truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Str(s) => !s.is_empty(),
            Self::Num(n) => *n != 0.0 && !n.is_nan(),
            Self::Bool(b) => *b,
            Self::List(_) | Self::Map(_) | Self::Opaque => true,
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        Self::Str(String::from(s))
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        Self::Num(n)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Filter a prop mapping down to its primitive entries.
///
/// Keeps string/number/boolean values verbatim and silently drops everything
/// else. Pure; the input mapping is not modified.
pub fn filter_primitive_attrs(props: &PropMap) -> AttrMap {
    props
        .iter()
        .filter_map(|(key, value)| value.as_attr().map(|attr| (key.clone(), attr)))
        .collect()
}
