use mimalloc::MiMalloc;

pub mod launch;

pub use launch::{
    BootstrapError, BootstrapReport, BootstrapSequencer, DirectoryStatus, EntryKind, LaunchConfig,
    LaunchContinuation, OsStorage, PlatformSignalSink, PrivateStorage, ProcessEnv,
    SignalRejection, Stage, Step, bootstrap, init_logging,
};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;
