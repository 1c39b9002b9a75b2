//! Vertrag zur Karten-Oberfläche (Annotation-Manager des Karten-SDKs).
//!
//! Die Registry spricht das SDK ausschließlich über [`MarkerSurface`] an.
//! Jede Implementierung mit `create`, `delete` und den beiden
//! Platzierungs-Schaltern ist austauschbar.

mod command_log;
mod in_memory;

pub use command_log::{SurfaceCommand, SurfaceCommandLog};
pub use in_memory::{InMemorySurface, InMemorySymbol};

use super::MarkerOptions;

/// Von der Oberfläche vergebenes Handle eines gezeichneten Markers.
pub trait MarkerHandle {
    /// Identität des Markers (eindeutig pro Oberfläche).
    fn id(&self) -> u64;

    /// Icon-Tag, mit dem der Marker gezeichnet wird.
    fn icon_image(&self) -> Option<&str>;
}

/// Externe Oberfläche, die Marker tatsächlich zeichnet und entfernt.
///
/// Fehler sind oberflächen-definiert und werden von der Registry unverändert
/// weitergereicht.
pub trait MarkerSurface {
    /// Handle-Typ der Oberfläche
    type Handle: MarkerHandle;

    /// Icons auch bei Überlappung mit anderen Icons zeichnen.
    fn set_icon_allow_overlap(&mut self, allow: bool);

    /// Icons unabhängig von der Kollisions-Platzierung zeichnen.
    fn set_icon_ignore_placement(&mut self, ignore: bool);

    /// Erstellt synchron einen Marker und liefert sein Handle.
    fn create(&mut self, options: MarkerOptions) -> anyhow::Result<Self::Handle>;

    /// Entfernt synchron einen zuvor erstellten Marker.
    fn delete(&mut self, handle: &Self::Handle) -> anyhow::Result<()>;
}

/// Geliehene Oberfläche: der Aufrufer behält Besitz und Lebensdauer.
impl<T: MarkerSurface + ?Sized> MarkerSurface for &mut T {
    type Handle = T::Handle;

    fn set_icon_allow_overlap(&mut self, allow: bool) {
        (**self).set_icon_allow_overlap(allow);
    }

    fn set_icon_ignore_placement(&mut self, ignore: bool) {
        (**self).set_icon_ignore_placement(ignore);
    }

    fn create(&mut self, options: MarkerOptions) -> anyhow::Result<Self::Handle> {
        (**self).create(options)
    }

    fn delete(&mut self, handle: &Self::Handle) -> anyhow::Result<()> {
        (**self).delete(handle)
    }
}

impl<T: MarkerSurface + ?Sized> MarkerSurface for Box<T> {
    type Handle = T::Handle;

    fn set_icon_allow_overlap(&mut self, allow: bool) {
        (**self).set_icon_allow_overlap(allow);
    }

    fn set_icon_ignore_placement(&mut self, ignore: bool) {
        (**self).set_icon_ignore_placement(ignore);
    }

    fn create(&mut self, options: MarkerOptions) -> anyhow::Result<Self::Handle> {
        (**self).create(options)
    }

    fn delete(&mut self, handle: &Self::Handle) -> anyhow::Result<()> {
        (**self).delete(handle)
    }
}
