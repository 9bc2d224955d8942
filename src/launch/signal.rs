use std::env;

use thiserror::Error;

/// Why the process environment would not take a key/value pair.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SignalRejection {
    #[error("key is empty")]
    EmptyKey,
    #[error("key contains '=' or NUL")]
    InvalidKey,
    #[error("value contains NUL")]
    InvalidValue,
}

/// Process-wide key/value settings read by the windowing toolkit.
pub trait PlatformSignalSink {
    /// Set `key` to `value`, replacing any previous value.
    fn set_signal(&mut self, key: &str, value: &str) -> Result<(), SignalRejection>;
}

/// [`PlatformSignalSink`] writing the real process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl PlatformSignalSink for ProcessEnv {
    fn set_signal(&mut self, key: &str, value: &str) -> Result<(), SignalRejection> {
        validate(key, value)?;

        // SAFETY: `set_var` races only with environment access that bypasses
        // std's environment lock. On device the hook runs on the launch thread
        // before the runtime it hands off to starts any native thread. Test
        // threads reach the environment through std alone.
        unsafe {
            env::set_var(key, value);
        }

        Ok(())
    }
}

pub(crate) fn validate(key: &str, value: &str) -> Result<(), SignalRejection> {
    if key.is_empty() {
        return Err(SignalRejection::EmptyKey);
    }
    if key.contains(['=', '\0']) {
        return Err(SignalRejection::InvalidKey);
    }
    if value.contains('\0') {
        return Err(SignalRejection::InvalidValue);
    }
    Ok(())
}
