//! Core-Domänentypen: Positionen, Marker-Optionen, Oberflächen-Vertrag.

pub mod geo_point;
pub mod marker_options;
pub mod surface;

pub use geo_point::GeoPoint;
pub use marker_options::MarkerOptions;
pub use surface::{
    InMemorySurface, InMemorySymbol, MarkerHandle, MarkerSurface, SurfaceCommand,
    SurfaceCommandLog,
};
