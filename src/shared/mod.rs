//! Geteilte Typen für layer-übergreifende Verträge.

pub mod options;

pub use options::LayerOptions;
pub use options::DESTINATION_ICON_IMAGE;
