use minijinja::{Environment, context};

use crate::access_gate::interfaces::web::template_environment::EMAIL_FORM_TEMPLATE;

pub fn render_email_form(environment: &Environment<'_>) -> Result<String, minijinja::Error> {
    environment
        .get_template(EMAIL_FORM_TEMPLATE)?
        .render(context! {})
}
