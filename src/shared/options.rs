//! Zentrale Konfiguration für den Symbol-Layer.
//!
//! `LayerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{GeoPoint, MarkerOptions};
use glam::Vec2;
use serde::{Deserialize, Serialize};

// ── Ziel-Marker ─────────────────────────────────────────────────────

/// Reservierter Icon-Tag für Ziel-Marker.
pub const DESTINATION_ICON_IMAGE: &str = "mapbox-navigation-marker";
/// Standard-Skalierung des Ziel-Icons.
pub const DESTINATION_ICON_SIZE: f32 = 1.0;
/// Standard-Versatz des Ziel-Icons in Pixeln.
pub const DESTINATION_ICON_OFFSET: [f32; 2] = [0.0, 0.0];

// ── Oberfläche ──────────────────────────────────────────────────────

/// Obergrenze des Aufruf-Protokolls der Headless-Oberfläche.
pub const COMMAND_LOG_CAPACITY: usize = 1000;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Layer-Optionen.
/// Wird als `nav_symbol_layer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayerOptions {
    /// Icon-Tag, mit dem Ziel-Marker erstellt werden
    pub destination_icon_image: String,
    /// Skalierung des Ziel-Icons
    #[serde(default = "default_destination_icon_size")]
    pub destination_icon_size: f32,
    /// Versatz des Ziel-Icons in Pixeln
    #[serde(default = "default_destination_icon_offset")]
    pub destination_icon_offset: [f32; 2],
    /// Obergrenze des Aufruf-Protokolls der Headless-Oberfläche
    #[serde(default = "default_command_log_capacity")]
    pub command_log_capacity: usize,
}

impl Default for LayerOptions {
    fn default() -> Self {
        Self {
            destination_icon_image: DESTINATION_ICON_IMAGE.to_string(),
            destination_icon_size: DESTINATION_ICON_SIZE,
            destination_icon_offset: DESTINATION_ICON_OFFSET,
            command_log_capacity: COMMAND_LOG_CAPACITY,
        }
    }
}

/// Serde-Default für `destination_icon_size` (Abwärtskompatibilität).
fn default_destination_icon_size() -> f32 {
    DESTINATION_ICON_SIZE
}

/// Serde-Default für `destination_icon_offset` (Abwärtskompatibilität).
fn default_destination_icon_offset() -> [f32; 2] {
    DESTINATION_ICON_OFFSET
}

/// Serde-Default für `command_log_capacity` (Abwärtskompatibilität).
fn default_command_log_capacity() -> usize {
    COMMAND_LOG_CAPACITY
}

impl LayerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("nav_symbol_layer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("nav_symbol_layer.toml")
    }

    /// Baut die Marker-Optionen eines Ziel-Markers an `position`.
    pub fn destination_marker_options(&self, position: GeoPoint) -> MarkerOptions {
        MarkerOptions::new()
            .with_position(position)
            .with_icon_image(self.destination_icon_image.clone())
            .with_icon_size(self.destination_icon_size)
            .with_icon_offset(Vec2::from(self.destination_icon_offset))
    }
}
