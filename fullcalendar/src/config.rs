use std::path::{Path, PathBuf};
use tera::Tera;

/// environment variable read by [`FullCalendarConfig::from_env`] for the license key
pub const LICENSE_KEY_ENV: &str = "FULL_CALENDAR_LICENSE_KEY";

/// environment variable read by [`FullCalendarConfig::from_env`] for the templates directory
pub const HANDLEBARS_DIR_ENV: &str = "FULL_CALENDAR_HANDLEBARS_DIR";

/**
Configuration for the fullcalendar template functions.

This is built once when the application starts and handed to
[`FullCalendarTeraExt::register_full_calendar`](crate::FullCalendarTeraExt::register_full_calendar)
or [`FullCalendarHandler`](crate::FullCalendarHandler). Nothing is
read from global state at render time.

```
use trillium_fullcalendar::FullCalendarConfig;

let config = FullCalendarConfig::new()
    .with_license_key("ABC-123")
    .with_templates_dir("/srv/app/handlebars");

assert_eq!(config.license_key(), Some("ABC-123"));
assert_eq!(config.templates_dir(), std::path::Path::new("/srv/app/handlebars"));
```
*/
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FullCalendarConfig {
    license_key: Option<String>,
    templates_dir: PathBuf,
}

impl Default for FullCalendarConfig {
    fn default() -> Self {
        Self {
            license_key: None,
            templates_dir: Self::default_templates_dir(),
        }
    }
}

impl FullCalendarConfig {
    /// constructs a config with no license key and the bundled
    /// handlebars directory
    pub fn new() -> Self {
        Self::default()
    }

    /**
    constructs a config from the process environment.

    * `FULL_CALENDAR_LICENSE_KEY` populates the license key. If it is
      unset (or not unicode), there is no license key.
    * `FULL_CALENDAR_HANDLEBARS_DIR` overrides the templates directory.
      An empty value is treated as unset.
    */
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.license_key = std::env::var(LICENSE_KEY_ENV).ok();
        match std::env::var_os(HANDLEBARS_DIR_ENV) {
            Some(dir) if dir.is_empty() => log::warn!(
                "{} is empty, using the bundled handlebars templates",
                HANDLEBARS_DIR_ENV
            ),
            Some(dir) => config.templates_dir = dir.into(),
            None => {}
        }
        config
    }

    /// the directory of handlebars templates that ship with this crate
    pub fn default_templates_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("handlebars")
    }

    /// chainable setter for the license key
    pub fn with_license_key(mut self, license_key: impl Into<String>) -> Self {
        self.license_key = Some(license_key.into());
        self
    }

    /// chainable setter for the directory that
    /// `include_handlebars_template` resolves paths against
    pub fn with_templates_dir(mut self, templates_dir: impl Into<PathBuf>) -> Self {
        self.templates_dir = templates_dir.into();
        self
    }

    /// the configured license key, if any
    pub fn license_key(&self) -> Option<&str> {
        self.license_key.as_deref()
    }

    /// the base directory for handlebars template includes
    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    /// registers both template functions on the provided [`Tera`].
    /// Alias for
    /// [`FullCalendarTeraExt::register_full_calendar`](crate::FullCalendarTeraExt::register_full_calendar)
    pub fn register(&self, tera: &mut Tera) {
        crate::FullCalendarTeraExt::register_full_calendar(tera, self);
    }
}
