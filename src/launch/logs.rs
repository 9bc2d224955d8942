use anyhow::Result;
#[cfg(not(target_os = "android"))]
use tracing::level_filters::LevelFilter;
#[cfg(not(target_os = "android"))]
use tracing_subscriber::{EnvFilter, fmt::layer, layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(target_os = "android")]
const LOGCAT_TAG: &str = "bitcoindx";

/// Install the process-wide diagnostic subscriber.
///
/// Filtering follows `RUST_LOG`, defaulting to `info`. Fails if a global
/// subscriber is already installed; the launch hook ignores that failure.
#[cfg(not(target_os = "android"))]
pub fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Route diagnostics to logcat.
///
/// Native stderr is discarded on Android, so no `tracing` subscriber is
/// installed here: `tracing` events fall through to `log` records, and
/// `android_logger` writes those under the `bitcoindx` tag.
#[cfg(target_os = "android")]
pub fn init_logging() -> Result<()> {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Info)
            .with_tag(LOGCAT_TAG),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launch::{OsStorage, PlatformSignalSink, SignalRejection, bootstrap};
    use std::{
        fmt,
        sync::{Arc, Mutex},
    };
    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt as _};

    #[derive(Clone, Default)]
    struct Captured {
        events: Arc<Mutex<Vec<(Level, String)>>>,
    }

    struct DiscardingSink;

    impl PlatformSignalSink for DiscardingSink {
        fn set_signal(&mut self, _key: &str, _value: &str) -> Result<(), SignalRejection> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct MessageVisitor {
        message: Option<String>,
    }

    impl Visit for MessageVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                self.message = Some(format!("{value:?}"));
            }
        }
    }

    impl<S: Subscriber> Layer<S> for Captured {
        fn on_event(&self, event: &Event<'_>, _context: Context<'_, S>) {
            let mut visitor = MessageVisitor::default();
            event.record(&mut visitor);
            self.events
                .lock()
                .expect("capture mutex poisoned")
                .push((*event.metadata().level(), visitor.message.unwrap_or_default()));
        }
    }

    #[test]
    fn logging_initializes_once() {
        init_logging().expect("first initialization should succeed");
        assert!(init_logging().is_err());
    }

    #[test]
    fn unavailable_storage_is_reported_as_warning() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::registry().with(captured.clone());

        tracing::subscriber::with_default(subscriber, || {
            let _ = bootstrap(
                OsStorage::unavailable("Android context is not available"),
                DiscardingSink,
                (),
                |()| {},
            );
        });

        let events = captured.events.lock().expect("capture mutex poisoned");
        assert!(events.iter().any(|(level, message)| {
            *level == Level::WARN && message.contains("without a data directory")
        }));
    }
}
