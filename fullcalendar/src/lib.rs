#![forbid(unsafe_code)]
#![deny(
    missing_copy_implementations,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    unused_qualifications
)]

/*!
# FullCalendar web component template functions for trillium

This crate provides two [tera](https://keats.github.io/tera/) functions
for pages that embed the FullCalendar web component:

* `get_fc_license()` renders the configured FullCalendar license
  key, or nothing when there is none.
* `include_handlebars_template(path="...")` inlines a client-side
  handlebars template, unescaped, from the configured templates
  directory.

The calendar web component scripts are bundled as well, see
[`full_calendar_assets`].

```
# fn main() -> Result<(), Box<dyn std::error::Error>> {
use trillium::Conn;
use trillium_fullcalendar::{FullCalendarConfig, FullCalendarTeraExt};
use trillium_tera::{Tera, TeraConnExt, TeraHandler};

let dir = tempfile::tempdir()?;
std::fs::write(dir.path().join("widget.html"), "<div>X</div>")?;

let config = FullCalendarConfig::new()
    .with_license_key("ABC-123")
    .with_templates_dir(dir.path());

let mut tera = Tera::default();
tera.register_full_calendar(&config);
tera.add_raw_template(
    "calendar.html",
    r#"<full-calendar license="{{ get_fc_license() }}">{{ include_handlebars_template(path="widget.html") }}</full-calendar>"#,
)?;

let handler = (
    TeraHandler::new(tera),
    |conn: Conn| async move { conn.render("calendar.html") },
);

use trillium_testing::prelude::*;
assert_ok!(
    get("/").on(&handler),
    r#"<full-calendar license="ABC-123"><div>X</div></full-calendar>"#
);
# Ok(()) }
```
*/

mod assets;
pub use assets::{full_calendar_assets, ASSETS_ROUTE};

mod config;
pub use config::{FullCalendarConfig, HANDLEBARS_DIR_ENV, LICENSE_KEY_ENV};

mod error;
pub use error::{Error, Result};

mod license;
pub use license::{FcLicense, GET_FC_LICENSE};

mod include;
pub use include::{
    read_handlebars_template, IncludeHandlebarsTemplate, INCLUDE_HANDLEBARS_TEMPLATE,
};

mod tera_ext;
pub use tera_ext::FullCalendarTeraExt;

mod handler;
pub use handler::{FullCalendarConnExt, FullCalendarHandler, FC_LICENSE_ASSIGN};

pub use tera;
