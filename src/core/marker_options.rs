//! Beschreibung eines zu zeichnenden Markers (Position, Icon, Darstellung).

use super::GeoPoint;
use glam::Vec2;

/// Eingabe-Wertobjekt für [`MarkerSurface::create`](super::MarkerSurface::create).
///
/// Alle Darstellungs-Attribute sind optional; nicht gesetzte Werte überlässt
/// die Oberfläche ihren eigenen Standardwerten.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarkerOptions {
    /// Geografische Position
    pub position: Option<GeoPoint>,
    /// Icon-Tag (Name des Icon-Bildes im Style)
    pub icon_image: Option<String>,
    /// Skalierungsfaktor des Icons
    pub icon_size: Option<f32>,
    /// Icon-Versatz in Pixeln
    pub icon_offset: Option<Vec2>,
    /// Icon-Rotation in Grad
    pub icon_rotate: Option<f32>,
    /// Icon-Deckkraft (0.0 – 1.0)
    pub icon_opacity: Option<f32>,
    /// Beschriftung
    pub text_field: Option<String>,
    /// Beschriftungs-Versatz in em
    pub text_offset: Option<Vec2>,
    /// Sortierschlüssel für die Zeichenreihenfolge
    pub symbol_sort_key: Option<f32>,
    /// Marker per Drag verschiebbar
    pub draggable: bool,
}

impl MarkerOptions {
    /// Erstellt leere Optionen.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, position: GeoPoint) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_icon_image(mut self, icon_image: impl Into<String>) -> Self {
        self.icon_image = Some(icon_image.into());
        self
    }

    pub fn with_icon_size(mut self, icon_size: f32) -> Self {
        self.icon_size = Some(icon_size);
        self
    }

    /// Setzt den Icon-Versatz. Ein Null-Versatz wird nicht gesetzt.
    pub fn with_icon_offset(mut self, icon_offset: Vec2) -> Self {
        self.icon_offset = (icon_offset != Vec2::ZERO).then_some(icon_offset);
        self
    }

    pub fn with_icon_rotate(mut self, degrees: f32) -> Self {
        self.icon_rotate = Some(degrees);
        self
    }

    /// Setzt die Deckkraft, begrenzt auf 0.0 – 1.0.
    pub fn with_icon_opacity(mut self, opacity: f32) -> Self {
        self.icon_opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    pub fn with_text_field(mut self, text: impl Into<String>) -> Self {
        self.text_field = Some(text.into());
        self
    }

    pub fn with_text_offset(mut self, text_offset: Vec2) -> Self {
        self.text_offset = Some(text_offset);
        self
    }

    pub fn with_symbol_sort_key(mut self, sort_key: f32) -> Self {
        self.symbol_sort_key = Some(sort_key);
        self
    }

    pub fn with_draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }
}
