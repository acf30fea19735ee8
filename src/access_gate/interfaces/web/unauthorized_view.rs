use minijinja::{Environment, context};

use crate::access_gate::interfaces::web::template_environment::UNAUTHORIZED_TEMPLATE;

pub fn render_unauthorized(
    environment: &Environment<'_>,
    user_email: &str,
    user_name: &str,
) -> Result<String, minijinja::Error> {
    environment
        .get_template(UNAUTHORIZED_TEMPLATE)?
        .render(context! { email => user_email, name => user_name })
}
