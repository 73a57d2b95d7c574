use crate::FullCalendarConfig;
use std::sync::Arc;
use trillium::{async_trait, Conn, Handler};
use trillium_tera::Context;

/// the tera context key that [`FullCalendarHandler`] assigns the license key to
pub const FC_LICENSE_ASSIGN: &str = "fc_license";

/**
A trillium handler that makes the fullcalendar config available to
downsequence handlers.

When run after a [`TeraHandler`](trillium_tera::TeraHandler), the
license key is also assigned to the tera context as `fc_license`
(`null` if there is none), so templates can use `{{ fc_license }}`
without calling a function.

```
use trillium::Conn;
use trillium_fullcalendar::{FullCalendarConfig, FullCalendarHandler};
use trillium_tera::{Tera, TeraConnExt, TeraHandler};

let mut tera = Tera::default();
tera.add_raw_template("key.html", "{{ fc_license }}").unwrap();

let handler = (
    TeraHandler::new(tera),
    FullCalendarHandler::new(FullCalendarConfig::new().with_license_key("ABC-123")),
    |conn: Conn| async move { conn.render("key.html") },
);

use trillium_testing::prelude::*;
assert_ok!(get("/").on(&handler), "ABC-123");
```
*/
#[derive(Clone, Debug)]
pub struct FullCalendarHandler(Arc<FullCalendarConfig>);

impl FullCalendarHandler {
    /// builds a new handler from the provided config
    pub fn new(config: impl Into<Arc<FullCalendarConfig>>) -> Self {
        Self(config.into())
    }

    /// borrow the config
    pub fn config(&self) -> &FullCalendarConfig {
        &self.0
    }
}

impl From<FullCalendarConfig> for FullCalendarHandler {
    fn from(config: FullCalendarConfig) -> Self {
        Self::new(config)
    }
}

#[async_trait]
impl Handler for FullCalendarHandler {
    async fn run(&self, mut conn: Conn) -> Conn {
        match conn.state_mut::<Context>() {
            Some(context) => context.insert(FC_LICENSE_ASSIGN, &self.0.license_key()),
            None => log::warn!(
                "FullCalendarHandler was run without a tera context, {} will not be assigned",
                FC_LICENSE_ASSIGN
            ),
        }

        conn.with_state(Arc::clone(&self.0))
    }
}

/**
Extension trait to retrieve the fullcalendar config from a
[`Conn`]. Returns `None` unless run downsequence of a
[`FullCalendarHandler`].
*/
pub trait FullCalendarConnExt {
    /// the fullcalendar config for this conn
    fn fc_config(&self) -> Option<&FullCalendarConfig>;

    /// the fullcalendar license key for this conn, if one is configured
    fn fc_license(&self) -> Option<&str>;
}

impl FullCalendarConnExt for Conn {
    fn fc_config(&self) -> Option<&FullCalendarConfig> {
        self.state::<Arc<FullCalendarConfig>>().map(|config| &**config)
    }

    fn fc_license(&self) -> Option<&str> {
        self.fc_config()?.license_key()
    }
}
