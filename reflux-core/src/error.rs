// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the Reflux reactive engine
//!
//! Errors in Reflux are ordinary terminal signals: a publisher that fails emits
//! [`Signal::Error`](crate::Signal::Error) carrying a [`RefluxError`], and the error
//! travels downstream until an error-recovery operator or the subscriber consumes it.
//!
//! # Examples
//!
//! ```
//! use reflux_core::{RefluxError, Result};
//!
//! fn validate(count: usize) -> Result<()> {
//!     if count == 0 {
//!         return Err(RefluxError::stream_error("nothing to emit"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate(0).is_err());
//! ```

use std::sync::Arc;

/// Root error type for all Reflux operations
///
/// The variants follow the error taxonomy of the engine: producer errors and
/// transformation faults arrive as [`UserError`](Self::UserError) or
/// [`StreamProcessingError`](Self::StreamProcessingError), failing side-effect hooks
/// as [`HookError`](Self::HookError), and protocol violations by a subscriber as
/// [`InvalidDemand`](Self::InvalidDemand).
///
/// Wrapped errors are shared, so cloning an error (e.g. to replay it on every
/// subscribe of `error(..)`) keeps the original source.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RefluxError {
    /// Stream processing encountered an error
    ///
    /// General error for sources and operators that don't fit other categories.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong during stream processing
        context: String,
    },

    /// Custom error from user code
    ///
    /// Wraps errors produced by user-provided functions, e.g. the closure passed
    /// to `try_map`.
    #[error("User error: {0}")]
    UserError(#[source] Arc<dyn std::error::Error + Send + Sync>),

    /// A side-effect hook failed
    ///
    /// The failing hook terminates the sequence and cancels upstream.
    #[error("Hook `{hook}` failed: {source}")]
    HookError {
        /// Name of the hook, e.g. `do_on_next`
        hook: &'static str,
        /// The error returned by the hook
        #[source]
        source: Arc<dyn std::error::Error + Send + Sync>,
    },

    /// A subscriber requested a non-positive amount of elements
    #[error("Invalid demand: request({requested}) must be positive")]
    InvalidDemand {
        /// The amount that was requested
        requested: u64,
    },
}

impl RefluxError {
    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Arc::new(error))
    }

    /// Wrap the error returned by the named hook
    pub fn hook_error(
        hook: &'static str,
        error: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let source: Box<dyn std::error::Error + Send + Sync> = error.into();
        Self::HookError {
            hook,
            source: source.into(),
        }
    }

    /// Returns `true` if the error was produced by a side-effect hook
    #[must_use]
    pub const fn is_hook_error(&self) -> bool {
        matches!(self, Self::HookError { .. })
    }

    /// Returns `true` if the error was produced by a subscriber protocol violation
    #[must_use]
    pub const fn is_invalid_demand(&self) -> bool {
        matches!(self, Self::InvalidDemand { .. })
    }
}

/// Specialized Result type for Reflux operations
pub type Result<T> = std::result::Result<T, RefluxError>;
