use crate::endpoints::handlers::{config_handler, popup_handler, webmap_handler};
use crate::render::MapArtifact;
use crate::utils::status::print_map_summary;
use anyhow::Context;
use axum::{Router, response::Redirect, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;

pub struct AppState {
    pub artifact: MapArtifact,
    pub html: String,
    pub spec: serde_json::Value,
}

impl AppState {
    pub fn new(artifact: MapArtifact) -> anyhow::Result<Self> {
        let html = artifact.to_html()?;
        let spec = artifact.spec_json()?;
        Ok(Self {
            artifact,
            html,
            spec,
        })
    }
}

/// Hosts the rendered map as an embedded page
pub struct MapServer {
    port: u16,
    state: AppState,
}

impl MapServer {
    pub fn new(artifact: MapArtifact, port: u16) -> anyhow::Result<Self> {
        Ok(Self {
            port,
            state: AppState::new(artifact)?,
        })
    }

    pub fn router(state: Arc<AppState>) -> Router {
        Router::new()
            .route("/", get(|| async { Redirect::temporary("/map") }))
            .route("/map", get(webmap_handler))
            .route("/config", get(config_handler))
            .route("/popup", get(popup_handler))
            .with_state(state)
    }

    pub async fn start(self) -> anyhow::Result<()> {
        print_map_summary(&self.state.artifact);

        let state = Arc::new(self.state);
        let app = Self::router(state.clone());
        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        let reference = state.artifact.popup.reference;
        println!(
            r#"
    🚀 BloomWatch serving on {}

    🌍 Interactive NDVI map
       → http://{}/map

    📚 Map configuration (JSON)
       → http://{}/config

    🌱 Popup for a coordinate
       → http://{}/popup?lat={:.4}&lng={:.4}
            "#,
            addr, addr, addr, addr, reference.lat, reference.lng
        );

        axum::serve(listener, app)
            .await
            .context("Map server stopped unexpectedly")?;

        Ok(())
    }
}
