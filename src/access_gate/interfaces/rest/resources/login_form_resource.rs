use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct LoginFormResource {
    #[validate(length(max = 120))]
    pub email: Option<String>,
}
