//! mm3d - headless cube transform demo
//!
//! Loads the configured cube and camera, then logs the cube's world-space and
//! normalized-device-space vertices along with a few random sample points.

use mm3d::config::AppConfig;
use mm3d::scene::Scene;

fn init_logging(default_level: &str) {
    // RUST_LOG still wins over the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() {
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_logging(&config.debug.log_level);
    if let Some(e) = load_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting mm3d");

    let scene = Scene::from_config(&config);
    log::debug!("Model: {}", scene.model());
    log::debug!("View: {}", scene.view());
    log::debug!("Projection: {}", scene.projection());
    log::debug!("MVP: {}", scene.model_view_projection());

    let world = scene.world_vertices();
    let clip = scene.clip_vertices();
    for (i, (w, c)) in world.iter().zip(clip.iter()).enumerate() {
        log::info!("Vertex {}: world {} ndc {}", i, w, c);
    }

    for (i, p) in scene.jitter_points().iter().enumerate() {
        log::info!("Sample {}: local {} world {}", i, p, scene.model() * *p);
    }

    log::info!("Transformed {} vertices", world.len());
}
