use std::{io, path::PathBuf};

use thiserror::Error;

/// Bootstrap step a failure belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Directory,
    Signal,
}

/// Failures the launch hook records and then steps over.
///
/// None of these abort the sequence; they are logged and kept in the
/// [`BootstrapReport`](super::BootstrapReport) for whoever wants to look.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("private storage root is unavailable: {reason}")]
    StorageRootUnavailable { reason: String },

    #[error("failed to create data directory at {}", .path.display())]
    DirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to set {key}={value}: {reason}")]
    SignalSetFailed {
        key: String,
        value: String,
        reason: String,
    },
}

impl BootstrapError {
    pub fn step(&self) -> Step {
        match self {
            Self::StorageRootUnavailable { .. } | Self::DirectoryCreateFailed { .. } => {
                Step::Directory
            }
            Self::SignalSetFailed { .. } => Step::Signal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn errors_map_to_their_step() {
        let root = BootstrapError::StorageRootUnavailable {
            reason: "no context".into(),
        };
        let dir = BootstrapError::DirectoryCreateFailed {
            path: PathBuf::from("/data/files/.bitcoindx"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        let signal = BootstrapError::SignalSetFailed {
            key: "QT_QPA_PLATFORM".into(),
            value: "android".into(),
            reason: "refused".into(),
        };

        assert_eq!(root.step(), Step::Directory);
        assert_eq!(dir.step(), Step::Directory);
        assert_eq!(signal.step(), Step::Signal);
    }

    #[test]
    fn directory_failure_keeps_io_source() {
        let err = BootstrapError::DirectoryCreateFailed {
            path: PathBuf::from("/data/files/.bitcoindx"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };

        assert_eq!(
            err.to_string(),
            "failed to create data directory at /data/files/.bitcoindx"
        );
        let source = err
            .source()
            .and_then(|source| source.downcast_ref::<io::Error>())
            .expect("io error should be the source");
        assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
    }
}
