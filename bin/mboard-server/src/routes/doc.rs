use utoipa::OpenApi;

use crate::routes::{health, messages};

#[derive(OpenApi)]
#[openapi(info(
    title = "mboard-server",
    description = "Minimal message board API",
    version = "1.0.0"
))]
pub struct ApiDoc;

pub fn get_docs() -> utoipa::openapi::OpenApi {
    let mut root = ApiDoc::openapi();
    root.merge(health::HealthApi::openapi());
    root.merge(messages::MessagesApi::openapi());
    root
}
