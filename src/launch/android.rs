use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use jni::{
    JNIEnv,
    objects::{JObject, JString, JValue},
};
use tracing::{error, warn};

use super::{
    BootstrapSequencer, LaunchConfig, LaunchContinuation, OsStorage, ProcessEnv, init_logging,
};

const QT_ACTIVITY_CLASS: &str = "org/qtproject/qt5/android/bindings/QtActivity";

/// Native body of `BitcoinDXQtActivity.onCreate(Bundle)`.
///
/// Prepares the data directory and the Qt platform signal, then runs
/// `QtActivity.onCreate` on the same activity with the same bundle.
#[unsafe(no_mangle)]
pub extern "system" fn Java_org_bitcoindxcore_qt_BitcoinDXQtActivity_onCreate<'local>(
    mut env: JNIEnv<'local>,
    activity: JObject<'local>,
    saved_state: JObject<'local>,
) {
    let _ = init_logging();

    let storage = match files_dir(&mut env, &activity) {
        Ok(root) => OsStorage::new(root),
        Err(err) => {
            warn!(error = %err, "Unable to resolve the Android files directory");
            clear_pending_exception(&mut env);
            OsStorage::unavailable(format!("{err:#}"))
        }
    };

    let sequencer = BootstrapSequencer::new(LaunchConfig::packaged(), storage, ProcessEnv);
    let _ = sequencer.run(
        saved_state,
        QtActivitySuper {
            env: &mut env,
            activity: &activity,
        },
    );
}

/// Hands the launch back to the Qt activity implementation.
struct QtActivitySuper<'a, 'local> {
    env: &'a mut JNIEnv<'local>,
    activity: &'a JObject<'local>,
}

impl<'local> LaunchContinuation<JObject<'local>> for QtActivitySuper<'_, 'local> {
    fn continue_launch(&mut self, saved_state: JObject<'local>) {
        // A Java exception thrown here stays pending for the caller of onCreate.
        if let Err(err) = self.env.call_nonvirtual_method(
            self.activity,
            QT_ACTIVITY_CLASS,
            "onCreate",
            "(Landroid/os/Bundle;)V",
            &[JValue::Object(&saved_state)],
        ) {
            error!(error = %err, "QtActivity.onCreate() failed");
        }
    }
}

fn files_dir(env: &mut JNIEnv<'_>, activity: &JObject<'_>) -> Result<PathBuf> {
    let files_dir = env
        .call_method(activity, "getFilesDir", "()Ljava/io/File;", &[])
        .context("Context.getFilesDir() call failed")?
        .l()
        .context("Context.getFilesDir() did not return an object")?;

    if files_dir.is_null() {
        return Err(anyhow!("Context.getFilesDir() returned null"));
    }

    let absolute_path = env
        .call_method(&files_dir, "getAbsolutePath", "()Ljava/lang/String;", &[])
        .context("File.getAbsolutePath() call failed")?
        .l()
        .context("File.getAbsolutePath() did not return an object")?;

    if absolute_path.is_null() {
        return Err(anyhow!("File.getAbsolutePath() returned null"));
    }

    let path: String = env
        .get_string(&JString::from(absolute_path))
        .context("Failed to read absolute path string from Java")?
        .into();

    Ok(PathBuf::from(path))
}

fn clear_pending_exception(env: &mut JNIEnv<'_>) {
    if env.exception_check().unwrap_or(false) {
        let _ = env.exception_describe();
        let _ = env.exception_clear();
    }
}
