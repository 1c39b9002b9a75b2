//! Geografische Position eines Markers.

/// Position in WGS84-Koordinaten (Grad).
///
/// Wird ungeprüft an die Oberfläche durchgereicht, die Projektion übernimmt das SDK.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
    /// Breitengrad
    pub latitude: f64,
    /// Längengrad
    pub longitude: f64,
}

impl GeoPoint {
    /// Erstellt eine Position aus Breiten- und Längengrad.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Erstellt eine Position in GeoJSON-Reihenfolge (Länge zuerst).
    pub fn from_lng_lat(longitude: f64, latitude: f64) -> Self {
        Self::new(latitude, longitude)
    }
}
