use crate::{
    FcLicense, FullCalendarConfig, IncludeHandlebarsTemplate, GET_FC_LICENSE,
    INCLUDE_HANDLEBARS_TEMPLATE,
};
use tera::Tera;

/**
Extends [`Tera`] with registration of the fullcalendar template
functions.
*/
pub trait FullCalendarTeraExt {
    /// Registers `get_fc_license` and `include_handlebars_template`
    /// using the provided config. Registering again replaces the
    /// previously registered functions.
    fn register_full_calendar(&mut self, config: &FullCalendarConfig) -> &mut Self;
}

impl FullCalendarTeraExt for Tera {
    fn register_full_calendar(&mut self, config: &FullCalendarConfig) -> &mut Self {
        log::debug!(
            "registering fullcalendar template functions (license key {}, handlebars dir {:?})",
            if config.license_key().is_some() {
                "present"
            } else {
                "absent"
            },
            config.templates_dir()
        );

        self.register_function(GET_FC_LICENSE, FcLicense::from(config.license_key()));
        self.register_function(
            INCLUDE_HANDLEBARS_TEMPLATE,
            IncludeHandlebarsTemplate::new(config.templates_dir()),
        );
        self
    }
}
