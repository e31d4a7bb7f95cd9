use std::sync::Arc;

use axum::{Router, response::Html, routing::get};
use sha2::{Digest, Sha512};
use tera::{Context, Tera};
use tower_cookies::{CookieManagerLayer, Key};
use tower_http::trace::TraceLayer;

use crate::{
    config::Config,
    db::{DbPool, cafe_store::CafeStore},
    error::Result,
    handlers::cafe,
};

const TEMPLATE_GLOB: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*");

/// Everything a request handler needs, built once at startup
#[derive(Clone)]
pub struct AppState {
    pub store: CafeStore,
    pub templates: Arc<Tera>,
    pub key: Key,
    pub csrf_enabled: bool,
}

impl AppState {
    pub fn new(config: &Config, pool: DbPool) -> Result<Self> {
        let key = signing_key(&config.secret_key);
        let templates = Tera::new(TEMPLATE_GLOB)?;

        Ok(Self {
            store: CafeStore::new(pool),
            templates: Arc::new(templates),
            key,
            csrf_enabled: config.csrf_enabled,
        })
    }

    pub fn render(&self, template: &str, ctx: &Context) -> Result<Html<String>> {
        Ok(Html(self.templates.render(template, ctx)?))
    }
}

/// Derive the 64-byte cookie signing key from a secret of any length.
pub fn signing_key(secret: &str) -> Key {
    Key::from(Sha512::digest(secret.as_bytes()).as_slice())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(cafe::home))
        .route("/all-cafes", get(cafe::all_cafes))
        .route("/add-cafe", get(cafe::add_cafe_form).post(cafe::add_cafe))
        .route(
            "/update/{id}",
            get(cafe::update_cafe_form).post(cafe::update_cafe),
        )
        .route("/delete/{id}", get(cafe::delete_cafe))
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
