//! Application directories resolved with the `dirs` crate.
//!
//! The data root is `<data_local_dir>/clipshelf`, or
//! `<data_local_dir>/clipshelf-<profile>` when `CS_PROFILE` is set to a
//! non-empty value. Profiles let several viewers run side by side without
//! sharing config or logs.

use std::path::PathBuf;

use cs_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

const APP_DIR_NAME: &str = "clipshelf";
const PROFILE_ENV: &str = "CS_PROFILE";

fn app_dir_name(profile: Option<&str>) -> String {
    match profile {
        Some(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

/// [`AppDirsPort`] backed by the platform's data-local directory.
#[derive(Default)]
pub struct DirsAppDirsAdapter {
    data_local_override: Option<PathBuf>,
}

impl DirsAppDirsAdapter {
    /// Creates an adapter resolving under the system data-local directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use cs_infra::DirsAppDirsAdapter;
    ///
    /// let _adapter = DirsAppDirsAdapter::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Test-only adapter resolving under `base` instead of the system
    /// data-local directory.
    #[cfg(test)]
    pub fn with_base_data_local_dir(base: PathBuf) -> Self {
        Self {
            data_local_override: Some(base),
        }
    }

    /// The directory the app data root is placed in.
    ///
    /// Returns `None` when no override is set and the platform reports no
    /// data-local directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use cs_infra::DirsAppDirsAdapter;
    ///
    /// let adapter = DirsAppDirsAdapter::new();
    /// let _base = adapter.base_data_local_dir();
    /// ```
    pub fn base_data_local_dir(&self) -> Option<PathBuf> {
        self.data_local_override
            .clone()
            .or_else(dirs::data_local_dir)
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    /// Resolves the app data root, honoring `CS_PROFILE`.
    ///
    /// # Errors
    ///
    /// Returns [`AppDirsError::DataLocalDirUnavailable`] when no base
    /// directory can be determined.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use cs_core::ports::AppDirsPort;
    /// use cs_infra::DirsAppDirsAdapter;
    ///
    /// let dirs = DirsAppDirsAdapter::new().get_app_dirs().unwrap();
    /// assert!(dirs.app_data_root.ends_with("clipshelf"));
    /// ```
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base = self
            .base_data_local_dir()
            .ok_or(AppDirsError::DataLocalDirUnavailable)?;
        let profile = std::env::var(PROFILE_ENV).ok();

        Ok(AppDirs {
            app_data_root: base.join(app_dir_name(profile.as_deref())),
        })
    }
}
