//! Spatial-Index (KD-Tree) für schnelle Handle-Abfragen beim Picking.

use glam::Vec2;
use indexmap::IndexMap;
use kiddo::{KdTree, SquaredEuclidean};

use crate::core::DiveHandle;

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// ID des gefundenen Handles
    pub handle_id: u64,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f32,
}

/// Read-only Spatial-Index über allen Handles eines Tauchplans.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    handle_ids: Vec<u64>,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            handle_ids: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus den übergebenen Handles.
    pub fn from_handles(handles: &IndexMap<u64, DiveHandle>) -> Self {
        let handle_ids: Vec<u64> = handles.keys().copied().collect();

        let entries: Vec<[f64; 2]> = handle_ids
            .iter()
            .filter_map(|id| {
                handles
                    .get(id)
                    .map(|handle| [handle.position.x as f64, handle.position.y as f64])
            })
            .collect();

        let tree: KdTree<f64, 2> = (&entries).into();

        Self { tree, handle_ids }
    }

    /// Gibt die Anzahl indexierter Handles zurück.
    pub fn len(&self) -> usize {
        self.handle_ids.len()
    }

    /// Gibt `true` zurück, wenn keine Handles im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.handle_ids.is_empty()
    }

    /// Findet das nächste Handle zur gegebenen Plan-Position.
    pub fn nearest(&self, query: Vec2) -> Option<SpatialMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x as f64, query.y as f64]);
        let handle_id = *self.handle_ids.get(result.item as usize)?;

        Some(SpatialMatch {
            handle_id,
            distance: (result.distance as f32).sqrt(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_handles() -> IndexMap<u64, DiveHandle> {
        let mut handles = IndexMap::new();
        handles.insert(1, DiveHandle::new(1, Vec2::new(10.0, 10.0)));
        handles.insert(2, DiveHandle::new(2, Vec2::new(20.0, 30.0)));
        handles.insert(3, DiveHandle::new(3, Vec2::new(40.0, 15.0)));
        handles
    }

    #[test]
    fn nearest_returns_expected_handle() {
        let index = SpatialIndex::from_handles(&sample_handles());
        let nearest = index
            .nearest(Vec2::new(19.5, 29.5))
            .expect("Treffer erwartet");

        assert_eq!(nearest.handle_id, 2);
        assert!(nearest.distance < 1.0);
    }

    #[test]
    fn empty_index_has_no_entries() {
        let index = SpatialIndex::empty();

        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.nearest(Vec2::new(0.0, 0.0)).is_none());
    }
}
