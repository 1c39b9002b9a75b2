//! Symbol-Layer-Demo.
//!
//! Treibt die Marker-Registry headless gegen die In-Memory-Oberfläche und
//! protokolliert jeden Oberflächen-Aufruf.

use nav_symbol_layer::{
    GeoPoint, InMemorySurface, LayerOptions, MarkerOptions, MarkerRegistry, SurfaceCommand,
};

fn main() -> anyhow::Result<()> {
    DemoRunner::run()
}

struct DemoRunner;

impl DemoRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Symbol-Layer-Demo v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = LayerOptions::config_path();
        let options = LayerOptions::load_from_file(&config_path);

        let mut surface = InMemorySurface::with_log_capacity(options.command_log_capacity);
        {
            let mut registry = MarkerRegistry::with_options(&mut surface, options);

            registry.add_destination_marker(GeoPoint::new(52.5200, 13.4050))?;
            registry.add_custom_marker(
                MarkerOptions::new()
                    .with_position(GeoPoint::new(52.5163, 13.3777))
                    .with_icon_image("feedback")
                    .with_text_field("Baustelle"),
            )?;
            registry.add_custom_marker(
                MarkerOptions::new()
                    .with_position(GeoPoint::new(52.5076, 13.3904))
                    .with_icon_image("feedback"),
            )?;
            registry.add_destination_marker(GeoPoint::new(48.1372, 11.5755))?;

            let removed = registry.remove_markers_by_icon_tag("feedback")?;
            log::info!("{} Feedback-Marker entfernt, {} verbleiben", removed, registry.len());

            registry.remove_all_markers()?;
        }

        for command in surface.command_log().entries() {
            match command {
                SurfaceCommand::Create { id, icon_image } => {
                    log::info!("create #{} ({})", id, icon_image.as_deref().unwrap_or("-"))
                }
                SurfaceCommand::Delete { id } => log::info!("delete #{}", id),
                other => log::info!("{:?}", other),
            }
        }

        Ok(())
    }
}
