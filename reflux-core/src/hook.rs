// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::RefluxError;

/// Return type accepted from side-effect hooks.
///
/// Hooks may be infallible (returning `()`) or fallible (returning
/// `Result<(), E>`). A failing hook terminates the sequence with
/// [`RefluxError::HookError`].
///
/// ```
/// use reflux_core::HookOutcome;
///
/// assert!(().into_hook_result("do_on_next").is_ok());
///
/// let failed: Result<(), std::io::Error> = Err(std::io::Error::other("boom"));
/// assert!(failed.into_hook_result("do_on_next").unwrap_err().is_hook_error());
/// ```
pub trait HookOutcome {
    /// Converts the hook's return value, naming the hook in the error.
    ///
    /// # Errors
    /// Returns [`RefluxError::HookError`] when the hook failed.
    fn into_hook_result(self, hook: &'static str) -> crate::Result<()>;
}

impl HookOutcome for () {
    fn into_hook_result(self, _hook: &'static str) -> crate::Result<()> {
        Ok(())
    }
}

impl<E> HookOutcome for Result<(), E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn into_hook_result(self, hook: &'static str) -> crate::Result<()> {
        self.map_err(|e| RefluxError::hook_error(hook, e))
    }
}
