//! Registry aller auf der Karte platzierten Marker.
//!
//! Einzige Quelle der Wahrheit dafür, welche Marker aktuell auf der
//! Oberfläche existieren. Übersetzt die Absichten „Ziel setzen",
//! „Custom-Marker hinzufügen" und die drei Entfernen-Varianten in Aufrufe
//! an die [`MarkerSurface`] und hält die lokale Buchführung konsistent.
//!
//! Schlägt ein Oberflächen-Aufruf fehl, wird der Fehler unverändert
//! zurückgegeben. Verfolgt bleiben genau die Handles, deren `delete` nicht
//! erfolgreich war.

use crate::core::{GeoPoint, MarkerHandle, MarkerOptions, MarkerSurface};
use crate::shared::LayerOptions;
use indexmap::IndexMap;

/// Marker-Buchführung über einer austauschbaren Oberfläche.
pub struct MarkerRegistry<S: MarkerSurface> {
    surface: S,
    options: LayerOptions,
    /// Alle platzierten Marker in Einfüge-Reihenfolge (inkl. Ziel-Marker)
    placed: IndexMap<u64, S::Handle>,
    /// ID des aktuellen Ziel-Markers, immer ein Schlüssel in `placed`
    destination: Option<u64>,
}

impl<S: MarkerSurface> MarkerRegistry<S> {
    /// Erstellt eine Registry mit Standard-Optionen.
    ///
    /// Konfiguriert die Oberfläche so, dass Icons immer gezeichnet werden.
    pub fn new(surface: S) -> Self {
        Self::with_options(surface, LayerOptions::default())
    }

    /// Erstellt eine Registry mit eigenen Layer-Optionen.
    pub fn with_options(mut surface: S, options: LayerOptions) -> Self {
        surface.set_icon_allow_overlap(true);
        surface.set_icon_ignore_placement(true);

        Self {
            surface,
            options,
            placed: IndexMap::new(),
            destination: None,
        }
    }

    /// Setzt den Ziel-Marker an `position` und gibt seine ID zurück.
    ///
    /// Ein vorhandener Ziel-Marker wird zuerst entfernt.
    pub fn add_destination_marker(&mut self, position: GeoPoint) -> anyhow::Result<u64> {
        if let Some(previous) = self.destination {
            if let Some(handle) = self.placed.get(&previous) {
                self.surface.delete(handle)?;
            }
            self.placed.shift_remove(&previous);
            self.destination = None;
            log::debug!("Vorheriger Ziel-Marker {} entfernt", previous);
        }

        let options = self.options.destination_marker_options(position);
        let id = self.create_tracked(options)?;
        self.destination = Some(id);
        log::debug!(
            "Ziel-Marker {} gesetzt ({}, {})",
            id,
            position.latitude,
            position.longitude
        );
        Ok(id)
    }

    /// Erstellt einen beliebigen Marker und gibt seine ID zurück.
    pub fn add_custom_marker(&mut self, options: MarkerOptions) -> anyhow::Result<u64> {
        let id = self.create_tracked(options)?;
        log::debug!("Custom-Marker {} erstellt", id);
        Ok(id)
    }

    /// Entfernt alle Marker in Einfüge-Reihenfolge.
    pub fn remove_all_markers(&mut self) -> anyhow::Result<()> {
        let mut deleted = 0usize;
        let result = self.placed.values().try_for_each(|handle| {
            self.surface.delete(handle)?;
            deleted += 1;
            anyhow::Ok(())
        });

        for (id, _) in self.placed.drain(..deleted) {
            if self.destination == Some(id) {
                self.destination = None;
            }
        }
        log::info!("{} Marker entfernt", deleted);
        result
    }

    /// Entfernt den Marker mit der ID, falls vorhanden.
    ///
    /// Gibt `true` zurück, wenn ein Marker entfernt wurde. Ein zweiter Aufruf
    /// mit derselben ID ist ein No-Op.
    pub fn remove_marker_by_id(&mut self, id: u64) -> anyhow::Result<bool> {
        let Some(handle) = self.placed.get(&id) else {
            log::debug!("Kein Marker mit ID {}", id);
            return Ok(false);
        };

        self.surface.delete(handle)?;
        self.untrack(id);
        log::debug!("Marker {} entfernt", id);
        Ok(true)
    }

    /// Entfernt alle Marker mit dem Icon-Tag und gibt ihre Anzahl zurück.
    pub fn remove_markers_by_icon_tag(&mut self, tag: &str) -> anyhow::Result<usize> {
        let matching: Vec<u64> = self
            .placed
            .iter()
            .filter(|(_, handle)| handle.icon_image() == Some(tag))
            .map(|(id, _)| *id)
            .collect();

        for &id in &matching {
            if let Some(handle) = self.placed.get(&id) {
                self.surface.delete(handle)?;
            }
            self.untrack(id);
        }

        if !matching.is_empty() {
            log::info!("{} Marker mit Icon '{}' entfernt", matching.len(), tag);
        }
        Ok(matching.len())
    }

    /// Handle des aktuellen Ziel-Markers.
    pub fn destination(&self) -> Option<&S::Handle> {
        self.destination.and_then(|id| self.placed.get(&id))
    }

    /// ID des aktuellen Ziel-Markers.
    pub fn destination_id(&self) -> Option<u64> {
        self.destination
    }

    /// Alle verfolgten Marker in Einfüge-Reihenfolge.
    pub fn markers(&self) -> impl Iterator<Item = &S::Handle> + '_ {
        self.placed.values()
    }

    /// Prüft ob ein Marker mit der ID verfolgt wird.
    pub fn contains(&self, id: u64) -> bool {
        self.placed.contains_key(&id)
    }

    /// Anzahl der verfolgten Marker.
    pub fn len(&self) -> usize {
        self.placed.len()
    }

    /// Gibt zurück ob keine Marker verfolgt werden.
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    pub fn options(&self) -> &LayerOptions {
        &self.options
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Direkter Zugriff auf die Oberfläche.
    ///
    /// Marker, die hierüber am Registry vorbei gelöscht werden, bleiben verfolgt.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Gibt die Oberfläche frei. Verfolgte Marker bleiben gezeichnet.
    pub fn into_surface(self) -> S {
        self.surface
    }

    fn create_tracked(&mut self, options: MarkerOptions) -> anyhow::Result<u64> {
        let handle = self.surface.create(options)?;
        let id = handle.id();
        if self.placed.insert(id, handle).is_some() {
            log::warn!("Oberfläche hat bereits verfolgte Marker-ID {} erneut vergeben", id);
        }
        Ok(id)
    }

    fn untrack(&mut self, id: u64) {
        self.placed.shift_remove(&id);
        if self.destination == Some(id) {
            self.destination = None;
        }
    }
}

#[cfg(test)]
mod tests;
