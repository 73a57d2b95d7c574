use std::fs;
use trillium::Conn;
use trillium_fullcalendar::{
    FullCalendarConfig, FullCalendarConnExt, FullCalendarHandler, FullCalendarTeraExt,
};
use trillium_tera::{Tera, TeraConnExt, TeraHandler};
use trillium_testing::prelude::*;

fn tera(config: &FullCalendarConfig) -> Tera {
    let mut tera = Tera::default();
    tera.register_full_calendar(config);
    tera.add_raw_templates(vec![
        (
            "assigned.html",
            "{% if fc_license %}{{ fc_license }}{% else %}unlicensed{% endif %}",
        ),
        (
            "calendar.html",
            r#"<full-calendar license="{{ get_fc_license() }}"></full-calendar>{{ include_handlebars_template(path="widget.html") }}"#,
        ),
        (
            "missing.html",
            r#"{{ include_handlebars_template(path="missing.html") }}"#,
        ),
    ])
    .unwrap();
    tera
}

#[test]
fn assigns_license_key() {
    let config = FullCalendarConfig::new().with_license_key("ABC-123");
    let handler = (
        TeraHandler::new(tera(&config)),
        FullCalendarHandler::new(config),
        |conn: Conn| async move { conn.render("assigned.html") },
    );

    assert_ok!(get("/").on(&handler), "ABC-123");
}

#[test]
fn assigns_null_without_license_key() {
    let config = FullCalendarConfig::new();
    let handler = (
        TeraHandler::new(tera(&config)),
        FullCalendarHandler::new(config),
        |conn: Conn| async move { conn.render("assigned.html") },
    );

    assert_ok!(get("/").on(&handler), "unlicensed");
}

#[test]
fn renders_calendar_page() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("widget.html"), "<div>X</div>").unwrap();
    let config = FullCalendarConfig::new()
        .with_license_key("ABC-123")
        .with_templates_dir(dir.path());

    let handler = (TeraHandler::new(tera(&config)), |conn: Conn| async move {
        conn.render("calendar.html")
    });

    assert_ok!(
        get("/").on(&handler),
        r#"<full-calendar license="ABC-123"></full-calendar><div>X</div>"#
    );
}

#[test]
fn missing_handlebars_template_is_a_server_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = FullCalendarConfig::new().with_templates_dir(dir.path());
    let handler = (TeraHandler::new(tera(&config)), |conn: Conn| async move {
        conn.render("missing.html")
    });

    assert_status!(get("/").on(&handler), 500);
}

#[test]
fn conn_ext_without_tera() {
    let handler = (
        FullCalendarHandler::new(FullCalendarConfig::new().with_license_key("ABC-123")),
        |conn: Conn| async move {
            let license = conn.fc_license().unwrap_or("none").to_string();
            conn.ok(license)
        },
    );

    assert_ok!(get("/").on(&handler), "ABC-123");
}

#[test]
fn conn_ext_without_handler() {
    let handler = |conn: Conn| async move {
        let has_config = conn.fc_config().is_some();
        conn.ok(has_config.to_string())
    };

    assert_ok!(get("/").on(&handler), "false");
}
