// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use reflux_core::RefluxError;

/// Error raised on purpose by fixtures and test closures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TestError(pub String);

impl TestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// The same error as a `RefluxError`.
    pub fn reflux(message: impl Into<String>) -> RefluxError {
        RefluxError::user_error(Self::new(message))
    }
}
