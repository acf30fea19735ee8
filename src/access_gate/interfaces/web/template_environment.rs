use minijinja::Environment;

pub const EMAIL_FORM_TEMPLATE: &str = "email_form.html";
pub const DASHBOARD_TEMPLATE: &str = "dashboard.html";
pub const UNAUTHORIZED_TEMPLATE: &str = "unauthorized.html";

/// Compiles every page template once. Names end in `.html`, which turns on
/// HTML auto-escaping for all interpolated values.
pub fn build_template_environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut environment = Environment::new();
    environment.add_template("layout.html", include_str!("templates/layout.html"))?;
    environment.add_template(EMAIL_FORM_TEMPLATE, include_str!("templates/email_form.html"))?;
    environment.add_template(DASHBOARD_TEMPLATE, include_str!("templates/dashboard.html"))?;
    environment.add_template(UNAUTHORIZED_TEMPLATE, include_str!("templates/unauthorized.html"))?;
    Ok(environment)
}
