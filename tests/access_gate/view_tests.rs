use chrono::{TimeZone, Utc};
use iap_access_gate::access_gate::{
    domain::model::entities::login_event::LoginEvent,
    interfaces::web::{
        dashboard_view::render_dashboard, template_environment::build_template_environment,
        unauthorized_view::render_unauthorized,
    },
};

use crate::support::ALLOWED_EMAIL;

#[test]
fn dashboard_lists_logins_with_placeholder_for_unknown_ip() {
    let templates = build_template_environment().expect("templates compile");
    let logs = vec![LoginEvent {
        id: 1,
        email: ALLOWED_EMAIL.to_string(),
        timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
        ip_address: None,
    }];

    let page = render_dashboard(&templates, ALLOWED_EMAIL, &logs).expect("dashboard renders");

    assert!(page.contains("<td>2024-03-01 09:30:00 UTC</td><td>-</td>"));
}

#[test]
fn dashboard_without_logins_shows_empty_row() {
    let templates = build_template_environment().expect("templates compile");

    let page = render_dashboard(&templates, ALLOWED_EMAIL, &[]).expect("dashboard renders");

    assert!(page.contains("No logins recorded yet."));
}

#[test]
fn denial_page_escapes_name_and_email() {
    let templates = build_template_environment().expect("templates compile");

    let page = render_unauthorized(&templates, "\"eve\"@example.com", "<b>Eve</b>")
        .expect("denial page renders");

    assert!(!page.contains("<b>Eve</b>"));
    assert!(page.contains("&lt;b&gt;Eve"));
    assert!(page.contains("&quot;eve&quot;@example.com"));
}
