// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::RefluxError;
use std::fmt;

/// A signal flowing from a publisher to its subscriber.
///
/// A sequence of signals is any number of `Next` followed by at most one terminal
/// signal (`Error` or `Complete`). Nothing is delivered after a terminal signal.
#[derive(Debug, Clone)]
pub enum Signal<T> {
    /// A value
    Next(T),
    /// An error that terminates the sequence
    Error(RefluxError),
    /// Successful termination
    Complete,
}

impl<T: PartialEq> PartialEq for Signal<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Signal::Next(a), Signal::Next(b)) => a == b,
            (Signal::Complete, Signal::Complete) => true,
            _ => false, // Errors are never equal
        }
    }
}

impl<T> Signal<T> {
    /// Returns `true` if this is a `Next`.
    pub const fn is_next(&self) -> bool {
        matches!(self, Signal::Next(_))
    }

    /// Returns `true` if this is an `Error`.
    pub const fn is_error(&self) -> bool {
        matches!(self, Signal::Error(_))
    }

    /// Returns `true` if this is a `Complete`.
    pub const fn is_complete(&self) -> bool {
        matches!(self, Signal::Complete)
    }

    /// Returns `true` for `Error` and `Complete`.
    pub const fn is_terminal(&self) -> bool {
        !self.is_next()
    }

    /// Converts from `Signal<T>` to `Option<T>`, discarding terminal signals.
    pub fn next(self) -> Option<T> {
        match self {
            Signal::Next(v) => Some(v),
            _ => None,
        }
    }

    /// Converts from `Signal<T>` to `Option<RefluxError>`.
    pub fn err(self) -> Option<RefluxError> {
        match self {
            Signal::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Maps a `Signal<T>` to `Signal<U>` by applying a function to the contained value.
    ///
    /// Terminal signals are propagated unchanged.
    pub fn map<U, F>(self, f: F) -> Signal<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Signal::Next(v) => Signal::Next(f(v)),
            Signal::Error(e) => Signal::Error(e),
            Signal::Complete => Signal::Complete,
        }
    }

    /// Maps a `Signal<T>` to `Signal<U>` by applying a function that can fail.
    ///
    /// Terminal signals are propagated unchanged.
    pub fn and_then<U, F>(self, f: F) -> Signal<U>
    where
        F: FnOnce(T) -> Signal<U>,
    {
        match self {
            Signal::Next(v) => f(v),
            Signal::Error(e) => Signal::Error(e),
            Signal::Complete => Signal::Complete,
        }
    }

    /// Returns a reference to the value of a `Next`.
    pub const fn as_next(&self) -> Option<&T> {
        match self {
            Signal::Next(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<crate::Result<T>> for Signal<T> {
    fn from(result: crate::Result<T>) -> Self {
        match result {
            Ok(v) => Signal::Next(v),
            Err(e) => Signal::Error(e),
        }
    }
}

impl<T: fmt::Debug> fmt::Display for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Next(v) => write!(f, "onNext({v:?})"),
            Signal::Error(e) => write!(f, "onError({e})"),
            Signal::Complete => write!(f, "onComplete()"),
        }
    }
}
