//! Application-Layer: Marker-Buchführung über der Karten-Oberfläche.

pub mod marker_registry;

pub use marker_registry::MarkerRegistry;
