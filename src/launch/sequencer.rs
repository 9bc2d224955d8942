use std::io;

use tracing::{debug, info, warn};

use super::{
    config::LaunchConfig,
    error::BootstrapError,
    handoff::LaunchContinuation,
    signal::PlatformSignalSink,
    storage::{EntryKind, PrivateStorage},
};

/// Where a bootstrap run currently is. Stages only move forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    NotStarted,
    DirectoryChecked,
    SignalSet,
    HandedOff,
}

impl Stage {
    pub fn next(self) -> Option<Self> {
        match self {
            Self::NotStarted => Some(Self::DirectoryChecked),
            Self::DirectoryChecked => Some(Self::SignalSet),
            Self::SignalSet => Some(Self::HandedOff),
            Self::HandedOff => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectoryStatus {
    Created,
    AlreadyPresent,
}

/// Outcome attached to each step of a finished run.
#[derive(Debug)]
pub struct BootstrapReport {
    pub stage: Stage,
    pub directory: Result<DirectoryStatus, BootstrapError>,
    pub signal: Result<(), BootstrapError>,
}

impl BootstrapReport {
    pub fn is_clean(&self) -> bool {
        self.directory.is_ok() && self.signal.is_ok()
    }
}

/// Runs the launch hook: data directory, platform signal, then handoff.
///
/// `run` consumes the sequencer, so one value performs at most one launch.
pub struct BootstrapSequencer<P, E> {
    config: LaunchConfig,
    storage: P,
    signals: E,
    stage: Stage,
}

impl<P, E> BootstrapSequencer<P, E>
where
    P: PrivateStorage,
    E: PlatformSignalSink,
{
    pub fn new(config: LaunchConfig, storage: P, signals: E) -> Self {
        Self {
            config,
            storage,
            signals,
            stage: Stage::NotStarted,
        }
    }

    /// Prepare both preconditions and hand `saved_state` to `continuation`.
    ///
    /// Always reaches the handoff. Step failures are logged and returned in the
    /// report, never as an error.
    pub fn run<S, H>(mut self, saved_state: S, mut continuation: H) -> BootstrapReport
    where
        H: LaunchContinuation<S>,
    {
        let directory = self.ensure_data_dir();
        if let Err(err) = &directory {
            warn!(error = %err, "Continuing launch without a data directory");
        }
        self.advance(Stage::DirectoryChecked);

        let signal = self.set_platform_signal();
        if let Err(err) = &signal {
            warn!(error = %err, "Continuing launch without the platform signal");
        }
        self.advance(Stage::SignalSet);

        debug!("Handing off to the launch continuation");
        self.advance(Stage::HandedOff);
        continuation.continue_launch(saved_state);

        BootstrapReport {
            stage: self.stage,
            directory,
            signal,
        }
    }

    fn advance(&mut self, next: Stage) {
        debug_assert_eq!(self.stage.next(), Some(next), "bootstrap stages are linear");
        self.stage = next;
    }

    fn ensure_data_dir(&self) -> Result<DirectoryStatus, BootstrapError> {
        let root = self
            .storage
            .root()
            .map_err(|err| BootstrapError::StorageRootUnavailable {
                reason: err.to_string(),
            })?;
        let data_dir = root.join(&self.config.data_dir_name);

        match self.storage.entry_kind(&data_dir) {
            EntryKind::Directory => {
                debug!(path = %data_dir.display(), "Data directory already present");
                return Ok(DirectoryStatus::AlreadyPresent);
            }
            EntryKind::Other => {
                return Err(BootstrapError::DirectoryCreateFailed {
                    path: data_dir,
                    source: io::Error::new(
                        io::ErrorKind::NotADirectory,
                        "an entry that is not a directory occupies the path",
                    ),
                });
            }
            EntryKind::Missing => {}
        }

        match self.storage.create_dir(&data_dir) {
            Ok(()) => {
                info!(path = %data_dir.display(), "Created data directory");
                Ok(DirectoryStatus::Created)
            }
            // Someone else made it between the check and the create.
            Err(err)
                if err.kind() == io::ErrorKind::AlreadyExists
                    && self.storage.entry_kind(&data_dir) == EntryKind::Directory =>
            {
                Ok(DirectoryStatus::AlreadyPresent)
            }
            Err(source) => Err(BootstrapError::DirectoryCreateFailed {
                path: data_dir,
                source,
            }),
        }
    }

    fn set_platform_signal(&mut self) -> Result<(), BootstrapError> {
        let key = &self.config.platform_key;
        let value = &self.config.platform_value;

        self.signals
            .set_signal(key, value)
            .map_err(|rejection| BootstrapError::SignalSetFailed {
                key: key.clone(),
                value: value.clone(),
                reason: rejection.to_string(),
            })?;

        debug!(key = %key, value = %value, "Platform signal set");
        Ok(())
    }
}

/// Run the launch hook once with the default [`LaunchConfig`].
pub fn bootstrap<P, E, S, H>(
    storage: P,
    signals: E,
    saved_state: S,
    continuation: H,
) -> BootstrapReport
where
    P: PrivateStorage,
    E: PlatformSignalSink,
    H: LaunchContinuation<S>,
{
    BootstrapSequencer::new(LaunchConfig::default(), storage, signals).run(saved_state, continuation)
}
