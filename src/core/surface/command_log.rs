//! Begrenztes Protokoll aller Aufrufe an eine Oberfläche.

/// Ein an die Oberfläche gerichteter Aufruf.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    /// Überlappungs-Schalter gesetzt
    SetIconAllowOverlap(bool),
    /// Platzierungs-Schalter gesetzt
    SetIconIgnorePlacement(bool),
    /// Marker erstellt
    Create {
        /// Vergebene Marker-ID
        id: u64,
        /// Icon-Tag des Markers
        icon_image: Option<String>,
    },
    /// Marker entfernt
    Delete {
        /// ID des entfernten Markers
        id: u64,
    },
}

/// Speichert Oberflächen-Aufrufe in Reihenfolge.
#[derive(Debug, Clone)]
pub struct SurfaceCommandLog {
    entries: Vec<SurfaceCommand>,
    capacity: usize,
}

impl Default for SurfaceCommandLog {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

impl SurfaceCommandLog {
    /// Standard-Obergrenze der gespeicherten Einträge.
    pub const DEFAULT_CAPACITY: usize = 1000;

    /// Erstellt ein leeres Protokoll mit Standard-Obergrenze.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt ein leeres Protokoll mit eigener Obergrenze (mindestens 2).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(2),
        }
    }

    /// Fügt einen Aufruf hinzu.
    /// Ist die Obergrenze erreicht, wird die ältere Hälfte verworfen.
    pub fn record(&mut self, command: SurfaceCommand) {
        if self.entries.len() >= self.capacity {
            self.entries.drain(..self.capacity / 2);
        }
        self.entries.push(command);
    }

    /// Gibt die Anzahl der geloggten Aufrufe zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Aufrufe vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[SurfaceCommand] {
        &self.entries
    }

    /// IDs aller erstellten Marker in Aufruf-Reihenfolge.
    pub fn created_ids(&self) -> Vec<u64> {
        self.entries
            .iter()
            .filter_map(|c| match c {
                SurfaceCommand::Create { id, .. } => Some(*id),
                _ => None,
            })
            .collect()
    }

    /// IDs aller entfernten Marker in Aufruf-Reihenfolge.
    pub fn deleted_ids(&self) -> Vec<u64> {
        self.entries
            .iter()
            .filter_map(|c| match c {
                SurfaceCommand::Delete { id } => Some(*id),
                _ => None,
            })
            .collect()
    }

    /// Leert das Protokoll.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
