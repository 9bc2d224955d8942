mod config;
mod error;
mod handoff;
mod logs;
mod sequencer;
mod signal;
mod storage;

#[cfg(target_os = "android")]
mod android;

pub use config::{
    DEFAULT_DATA_DIR_NAME, DEFAULT_PLATFORM_KEY, DEFAULT_PLATFORM_VALUE, LaunchConfig,
};
pub use error::{BootstrapError, Step};
pub use handoff::LaunchContinuation;
pub use logs::init_logging;
pub use sequencer::{BootstrapReport, BootstrapSequencer, DirectoryStatus, Stage, bootstrap};
pub use signal::{PlatformSignalSink, ProcessEnv, SignalRejection};
pub use storage::{EntryKind, OsStorage, PrivateStorage};
