use trillium::{Conn, Handler};
use trillium_fullcalendar::{
    full_calendar_assets, FullCalendarConfig, FullCalendarHandler, FullCalendarTeraExt,
    ASSETS_ROUTE,
};
use trillium_logger::logger;
use trillium_router::Router;
use trillium_tera::{Tera, TeraConnExt, TeraHandler};

const TEMPLATES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*.html");

fn app(config: FullCalendarConfig) -> impl Handler {
    let mut tera = Tera::new(TEMPLATES).expect("could not load templates");
    tera.register_full_calendar(&config);

    (
        logger(),
        TeraHandler::new(tera),
        FullCalendarHandler::new(config),
        Router::new()
            .get("/", |conn: Conn| async move {
                conn.assign("title", "Reservations").render("calendar.html")
            })
            .get(ASSETS_ROUTE, full_calendar_assets()),
    )
}

fn main() {
    env_logger::init();
    let config = FullCalendarConfig::from_env();
    if config.license_key().is_none() {
        log::warn!("FULL_CALENDAR_LICENSE_KEY is not set, premium calendar views will be unlicensed");
    }
    trillium_smol::run(app(config));
}
