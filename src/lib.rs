//! Navigations-Symbol-Layer.
//! Verwaltet Ziel- und Custom-Marker auf einer austauschbaren Karten-Oberfläche.

pub mod app;
pub mod core;
pub mod shared;

pub use app::MarkerRegistry;
pub use core::{
    GeoPoint, InMemorySurface, InMemorySymbol, MarkerHandle, MarkerOptions, MarkerSurface,
    SurfaceCommand, SurfaceCommandLog,
};
pub use shared::{LayerOptions, DESTINATION_ICON_IMAGE};
