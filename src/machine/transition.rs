//! Transition representation

use serde::{Deserialize, Serialize};

/// A guard predicate attached to a transition.
///
/// `Truthy` is the defining library's built-in always-pass default. Whether a
/// guard is "present" for visualization purposes is decided by this sentinel
/// identity alone, never by behavior: two distinct user predicates both count
/// as present even if they do the same thing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Guard {
    #[default]
    Truthy,
    /// User-supplied predicate, identified by its display name
    Predicate(String),
}

impl Guard {
    pub fn predicate(name: impl Into<String>) -> Self {
        Self::Predicate(name.into())
    }

    /// True unless this is the built-in `truthy` sentinel
    pub fn is_custom(&self) -> bool {
        !matches!(self, Guard::Truthy)
    }
}

/// A context-transforming function attached to a transition.
///
/// `Identity` is the built-in no-op default and is elided from the
/// visualization, under the same sentinel-identity rule as [`Guard`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Reducer {
    #[default]
    Identity,
    /// User-supplied reducer, identified by its display name
    Fn(String),
}

impl Reducer {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Fn(name.into())
    }

    /// True unless this is the built-in `identity` sentinel
    pub fn is_custom(&self) -> bool {
        !matches!(self, Reducer::Identity)
    }
}

/// A single transition, event-triggered or immediate depending on where it
/// hangs off its source state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Destination state name
    pub to: String,

    #[serde(default)]
    pub guard: Guard,

    #[serde(default)]
    pub reducer: Reducer,
}

impl Transition {
    /// A plain transition to `dest` with the default guard and reducer
    pub fn to(dest: impl Into<String>) -> Self {
        Self {
            to: dest.into(),
            guard: Guard::Truthy,
            reducer: Reducer::Identity,
        }
    }

    pub fn with_guard(mut self, name: impl Into<String>) -> Self {
        self.guard = Guard::predicate(name);
        self
    }

    pub fn with_reducer(mut self, name: impl Into<String>) -> Self {
        self.reducer = Reducer::named(name);
        self
    }
}
