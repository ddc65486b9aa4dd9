//! Linear undo/redo over full-document snapshots.
//!
//! Snapshots, not diffs: documents are small, and a self-consistent copy
//! per step keeps restore trivially safe. The sequence is bounded at
//! [`config::MAX_HISTORY`]; once full, the window slides by evicting the
//! oldest snapshot.

use crate::config;
use crate::layer::Layer;
use crate::layer_manager::LayerManager;
use crate::util::time;

/// A deep, independent copy of the layer collection. Never aliases the
/// live document, so restoring one cannot be corrupted by later edits.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub layers: Vec<Layer>,
    pub timestamp: u64,
}

/// Bounded snapshot sequence plus a cursor pointing at the current state.
/// `cursor == None` means no snapshot has been taken yet.
#[derive(Debug, Default)]
pub struct History {
    snapshots: Vec<Snapshot>,
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the current layer collection.
    ///
    /// Any snapshots after the cursor (the redo branch) are discarded
    /// first. When the sequence would exceed the limit the oldest
    /// snapshot is evicted instead of advancing the cursor, so the cursor
    /// always ends up on the snapshot just taken.
    pub fn save(&mut self, layers: &LayerManager) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        self.snapshots.truncate(keep);

        self.snapshots.push(Snapshot {
            layers: layers.export(),
            timestamp: time::timestamp_millis(),
        });

        if self.snapshots.len() > config::MAX_HISTORY {
            self.snapshots.remove(0);
        } else {
            self.cursor = Some(self.cursor.map_or(0, |c| c + 1));
        }
    }

    /// Steps back one snapshot and restores it. Returns `false` when
    /// already at the oldest state.
    pub fn undo(&mut self, layers: &mut LayerManager) -> bool {
        match self.cursor {
            Some(cursor) if cursor > 0 => {
                self.cursor = Some(cursor - 1);
                self.restore(layers);
                true
            }
            _ => false,
        }
    }

    /// Steps forward one snapshot and restores it. Returns `false` when
    /// there is nothing to redo.
    pub fn redo(&mut self, layers: &mut LayerManager) -> bool {
        match self.cursor {
            Some(cursor) if cursor + 1 < self.snapshots.len() => {
                self.cursor = Some(cursor + 1);
                self.restore(layers);
                true
            }
            _ => false,
        }
    }

    /// Pushes the snapshot under the cursor into the layer manager.
    fn restore(&self, layers: &mut LayerManager) {
        if let Some(snapshot) = self.cursor.and_then(|c| self.snapshots.get(c)) {
            layers.load_layers(snapshot.layers.clone());
        }
    }

    /// Drops all snapshots (new or freshly loaded project).
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.cursor = None;
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.snapshots.len())
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Oldest retained snapshot, mostly useful to observe the sliding
    /// window in tests.
    pub fn oldest(&self) -> Option<&Snapshot> {
        self.snapshots.first()
    }
}
