use trillium_static_compiled::{root as include_dir, StaticCompiledHandler};

/// the route the bundled assets are expected to be mounted at
pub const ASSETS_ROUTE: &str = "/static/*";

/**
Serves the calendar web component scripts that ship with this crate,
compiled into the binary.

Files are served relative to the bundled `static` directory, so when
mounted at [`ASSETS_ROUTE`] the web component is available at
`/static/fullcalendar/js/web-component.js`.

```
use trillium_fullcalendar::{full_calendar_assets, ASSETS_ROUTE};
use trillium_router::Router;

let router = Router::new().get(ASSETS_ROUTE, full_calendar_assets());

use trillium_testing::prelude::*;
assert_ok!(get("/static/fullcalendar/js/fc-tooltip.js").on(&router));
assert_not_handled!(get("/static/fullcalendar/js/missing.js").on(&router));
```
*/
pub fn full_calendar_assets() -> StaticCompiledHandler {
    StaticCompiledHandler::new(include_dir!("static"))
}
