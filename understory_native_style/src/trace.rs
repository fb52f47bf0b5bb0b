// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explainability hooks for property application.
//!
//! Malformed styling input never fails: it is ignored or replaced by a
//! default. That keeps rendering going, but makes "why didn't my border show
//! up?" hard to answer. The applier therefore reports each decision to a
//! [`StyleTrace`] sink. Tracing is purely additive; it never changes what is
//! applied.

use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::value::ValueKind;

/// What the applier did with one property.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TraceOutcome {
    /// A value was written to the element or node.
    Applied,
    /// The property was reset to the toolkit default.
    Cleared,
    /// The value had a type the property does not accept and was ignored.
    TypeMismatch(ValueKind),
    /// A string outside the property's closed set of tokens; the property fell
    /// back to its default or was left untouched.
    UnrecognizedToken,
    /// The platform lacks the feature; the update was accepted and dropped.
    Unsupported,
    /// The default border brush was substituted for a missing one.
    DefaultBorderBrush,
}

/// One traced decision.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TraceEvent<'a> {
    /// The host property name.
    pub property: &'a str,
    /// What happened.
    pub outcome: TraceOutcome,
    /// The offending token for [`TraceOutcome::UnrecognizedToken`].
    pub token: Option<&'a str>,
}

impl TraceEvent<'_> {
    /// Copies the event into an owned [`TraceRecord`].
    #[must_use]
    pub fn to_record(&self) -> TraceRecord {
        TraceRecord {
            property: self.property.into(),
            outcome: self.outcome,
            token: self.token.map(Into::into),
        }
    }
}

/// An owned copy of a [`TraceEvent`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceRecord {
    /// The host property name.
    pub property: String,
    /// What happened.
    pub outcome: TraceOutcome,
    /// The offending token, if any.
    pub token: Option<String>,
}

/// A callback sink for applier decisions.
///
/// Sinks receive `&self` so a single sink can be shared by every applier on
/// the UI thread; use interior mutability to record.
pub trait StyleTrace {
    /// Called once per decision.
    fn event(&self, event: TraceEvent<'_>);
}

/// A sink that discards everything.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoTrace;

impl StyleTrace for NoTrace {
    #[inline]
    fn event(&self, _event: TraceEvent<'_>) {}
}

/// A sink that records every event in order.
///
/// # Example
///
/// ```rust
/// use understory_native_style::{StyleTrace, TraceEvent, TraceLog, TraceOutcome};
///
/// let log = TraceLog::new();
/// log.event(TraceEvent {
///     property: "fontWeight",
///     outcome: TraceOutcome::UnrecognizedToken,
///     token: Some("heavy"),
/// });
/// assert_eq!(log.count(TraceOutcome::UnrecognizedToken), 1);
/// assert_eq!(log.records()[0].token.as_deref(), Some("heavy"));
/// ```
#[derive(Debug, Default)]
pub struct TraceLog {
    records: RefCell<Vec<TraceRecord>>,
}

impl TraceLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded events.
    #[must_use]
    pub fn records(&self) -> Vec<TraceRecord> {
        self.records.borrow().clone()
    }

    /// Removes and returns the recorded events.
    pub fn take(&self) -> Vec<TraceRecord> {
        self.records.take()
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    /// Returns how many recorded events have `outcome`.
    #[must_use]
    pub fn count(&self, outcome: TraceOutcome) -> usize {
        self.records
            .borrow()
            .iter()
            .filter(|r| r.outcome == outcome)
            .count()
    }

    /// Returns the last outcome recorded for `property`.
    #[must_use]
    pub fn last_for(&self, property: &str) -> Option<TraceOutcome> {
        self.records
            .borrow()
            .iter()
            .rev()
            .find(|r| r.property == property)
            .map(|r| r.outcome)
    }

    /// Clears the log.
    pub fn clear(&self) {
        self.records.borrow_mut().clear();
    }
}

impl StyleTrace for TraceLog {
    fn event(&self, event: TraceEvent<'_>) {
        self.records.borrow_mut().push(event.to_record());
    }
}
