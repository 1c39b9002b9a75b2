//! Headless-Oberfläche: hält gezeichnete Marker im Speicher.
//!
//! Dient als Referenz-Implementierung von [`MarkerSurface`] für Tests,
//! Benchmarks und die Demo. Jeder Aufruf landet im [`SurfaceCommandLog`].

use super::{MarkerHandle, MarkerSurface, SurfaceCommand, SurfaceCommandLog};
use crate::core::MarkerOptions;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Handle eines Markers auf der [`InMemorySurface`].
#[derive(Debug, Clone, PartialEq)]
pub struct InMemorySymbol {
    /// Vergebene Marker-ID
    pub id: u64,
    /// Optionen, mit denen der Marker erstellt wurde
    pub options: MarkerOptions,
}

impl MarkerHandle for InMemorySymbol {
    fn id(&self) -> u64 {
        self.id
    }

    fn icon_image(&self) -> Option<&str> {
        self.options.icon_image.as_deref()
    }
}

/// Oberfläche ohne Rendering, mit Fehler-Injektion für Tests.
#[derive(Debug, Default)]
pub struct InMemorySurface {
    symbols: IndexMap<u64, MarkerOptions>,
    next_id: u64,
    icon_allow_overlap: bool,
    icon_ignore_placement: bool,
    log: SurfaceCommandLog,
    pending_create_failure: Option<String>,
    failing_deletes: HashSet<u64>,
}

impl InMemorySurface {
    /// Erstellt eine leere Oberfläche.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt eine leere Oberfläche mit eigener Protokoll-Obergrenze.
    pub fn with_log_capacity(capacity: usize) -> Self {
        Self {
            log: SurfaceCommandLog::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Aktuell gezeichnete Marker in Erstellungs-Reihenfolge.
    pub fn symbols(&self) -> impl Iterator<Item = (u64, &MarkerOptions)> + '_ {
        self.symbols.iter().map(|(id, options)| (*id, options))
    }

    /// Anzahl der aktuell gezeichneten Marker.
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// Prüft ob ein Marker mit dieser ID gezeichnet ist.
    pub fn has_symbol(&self, id: u64) -> bool {
        self.symbols.contains_key(&id)
    }

    pub fn icon_allow_overlap(&self) -> bool {
        self.icon_allow_overlap
    }

    pub fn icon_ignore_placement(&self) -> bool {
        self.icon_ignore_placement
    }

    /// Protokoll aller bisherigen Aufrufe.
    pub fn command_log(&self) -> &SurfaceCommandLog {
        &self.log
    }

    /// Lässt den nächsten `create`-Aufruf mit der Meldung scheitern.
    pub fn fail_next_create(&mut self, message: impl Into<String>) {
        self.pending_create_failure = Some(message.into());
    }

    /// Lässt jeden `delete`-Aufruf für diese ID scheitern.
    pub fn fail_delete_of(&mut self, id: u64) {
        self.failing_deletes.insert(id);
    }

    /// Hebt alle injizierten Fehler auf.
    pub fn clear_failures(&mut self) {
        self.pending_create_failure = None;
        self.failing_deletes.clear();
    }
}

impl MarkerSurface for InMemorySurface {
    type Handle = InMemorySymbol;

    fn set_icon_allow_overlap(&mut self, allow: bool) {
        self.icon_allow_overlap = allow;
        self.log.record(SurfaceCommand::SetIconAllowOverlap(allow));
    }

    fn set_icon_ignore_placement(&mut self, ignore: bool) {
        self.icon_ignore_placement = ignore;
        self.log.record(SurfaceCommand::SetIconIgnorePlacement(ignore));
    }

    fn create(&mut self, options: MarkerOptions) -> anyhow::Result<InMemorySymbol> {
        if let Some(message) = self.pending_create_failure.take() {
            anyhow::bail!(message);
        }

        let id = self.next_id;
        self.next_id += 1;
        self.symbols.insert(id, options.clone());
        self.log.record(SurfaceCommand::Create {
            id,
            icon_image: options.icon_image.clone(),
        });
        Ok(InMemorySymbol { id, options })
    }

    fn delete(&mut self, handle: &InMemorySymbol) -> anyhow::Result<()> {
        if self.failing_deletes.contains(&handle.id) {
            anyhow::bail!("Symbol {} konnte nicht entfernt werden", handle.id);
        }
        if self.symbols.shift_remove(&handle.id).is_none() {
            anyhow::bail!("Symbol {} existiert nicht", handle.id);
        }
        self.log.record(SurfaceCommand::Delete { id: handle.id });
        Ok(())
    }
}
