//! Die zentrale DivePlan-Datenstruktur mit Handles, Segmenten und Spatial-Index.

use glam::Vec2;
use indexmap::IndexMap;

use super::{DiveHandle, Segment, SegmentEnd};
use super::{SpatialIndex, SpatialMatch};

/// Container für den gesamten Tauchplan
///
/// Handles und Segmente liegen arena-artig in indexierten Containern;
/// Querverweise sind stabile IDs, keine Besitz-Zeiger. Die Einfügereihenfolge
/// der Handles entspricht der Zeitachse (strikt aufsteigendes x).
#[derive(Debug, Clone)]
pub struct DivePlan {
    /// Alle Handles in Zeit-Reihenfolge, indexiert nach ihrer ID
    handles: IndexMap<u64, DiveHandle>,
    /// Alle Nutzer-Segmente in Erstellungsreihenfolge, indexiert nach ihrer ID
    segments: IndexMap<u64, Segment>,
    /// Generierte Deko-Segmente hinter dem letzten Handle (flüchtig)
    deco_segments: Vec<Segment>,
    /// Nächste freie Handle-ID
    next_handle_id: u64,
    /// Nächste freie Segment-ID
    next_segment_id: u64,
    /// Persistenter Spatial-Index für schnelle Handle-Abfragen
    spatial_index: SpatialIndex,
}

impl DivePlan {
    /// Erstellt einen neuen leeren Tauchplan
    pub fn new() -> Self {
        Self {
            handles: IndexMap::new(),
            segments: IndexMap::new(),
            deco_segments: Vec::new(),
            next_handle_id: 1,
            next_segment_id: 1,
            spatial_index: SpatialIndex::empty(),
        }
    }

    /// Prüft ob ein neues Handle an `position` angehängt werden darf.
    ///
    /// Erlaubt nur strikt aufsteigende Zeitkoordinaten: das neue Handle muss
    /// zeitlich hinter dem aktuell letzten liegen.
    pub fn can_append(&self, position: Vec2) -> bool {
        match self.last_handle() {
            Some(last) => position.x > last.position.x,
            None => true,
        }
    }

    /// Hängt ein neues Handle ans Ende des Plans an.
    ///
    /// Das erste Handle erhält ein Segment vom Plan-Ursprung `(0, 0)`,
    /// jedes weitere ein Segment vom bisher letzten Handle. Gibt `None`
    /// zurück (No-op), wenn die Zeitordnung verletzt würde.
    pub fn append_handle(&mut self, position: Vec2) -> Option<u64> {
        if !self.can_append(position) {
            return None;
        }

        let handle_id = self.next_handle_id;
        self.next_handle_id += 1;
        let segment_id = self.next_segment_id;
        self.next_segment_id += 1;

        let mut handle = DiveHandle::new(handle_id, position);
        handle.incoming_segment = Some(segment_id);

        let previous = self
            .handles
            .last()
            .map(|(_, prev)| (prev.id, prev.position));

        let segment = match previous {
            None => Segment::from_origin(segment_id, handle_id, position),
            Some((prev_id, prev_pos)) => {
                let segment =
                    Segment::between_handles(segment_id, prev_id, handle_id, prev_pos, position);
                if let Some(prev) = self.handles.get_mut(&prev_id) {
                    prev.outgoing_segment = Some(segment_id);
                }
                segment
            }
        };

        self.segments.insert(segment_id, segment);
        self.handles.insert(handle_id, handle);
        self.rebuild_spatial_index();

        Some(handle_id)
    }

    /// Verschiebt ein Handle unter Wahrung der Zeitordnung gegen die Nachbarn.
    ///
    /// Erlaubt ist die Bewegung nur, wenn das Handle strikt zwischen seinen
    /// Nachbarn bleibt (erstes: vor dem zweiten, letztes: hinter dem
    /// vorletzten, einziges: immer). Bei Erfolg werden die angrenzenden
    /// Segment-Endpunkte mitgezogen. Abgelehnte Bewegungen sind ein No-op,
    /// es wird nicht auf die Grenze geklemmt.
    pub fn move_handle(&mut self, handle_id: u64, new_position: Vec2) -> bool {
        let Some(idx) = self.handles.get_index_of(&handle_id) else {
            return false;
        };

        if !self.is_move_allowed(idx, new_position) {
            return false;
        }

        let (incoming, outgoing) = {
            let Some(handle) = self.handles.get_mut(&handle_id) else {
                return false;
            };
            handle.position = new_position;
            (handle.incoming_segment, handle.outgoing_segment)
        };

        if let Some(segment) = incoming.and_then(|id| self.segments.get_mut(&id)) {
            segment.set_end_pos(new_position);
        }
        if let Some(segment) = outgoing.and_then(|id| self.segments.get_mut(&id)) {
            segment.set_start_pos(new_position);
        }

        self.rebuild_spatial_index();
        true
    }

    fn is_move_allowed(&self, idx: usize, new_position: Vec2) -> bool {
        if self.handles.len() <= 1 {
            return true;
        }

        let prev_x = idx
            .checked_sub(1)
            .and_then(|i| self.handles.get_index(i))
            .map(|(_, h)| h.position.x);
        let next_x = self.handles.get_index(idx + 1).map(|(_, h)| h.position.x);

        match (prev_x, next_x) {
            (None, Some(next)) => new_position.x < next,
            (Some(prev), None) => new_position.x > prev,
            (Some(prev), Some(next)) => prev < new_position.x && new_position.x < next,
            (None, None) => true,
        }
    }

    /// Verwirft alle generierten Deko-Segmente.
    /// Mehrfacher Aufruf ist ein No-op.
    pub fn clear_deco(&mut self) {
        self.deco_segments.clear();
    }

    /// Hängt ein generiertes Deko-Segment an und gibt seine ID zurück.
    ///
    /// Fällt der Startpunkt exakt auf das letzte Handle, verweist das
    /// Segment auf dieses Handle, sonst auf einen festen Plan-Punkt.
    pub fn push_deco_segment(&mut self, start: Vec2, end: Vec2) -> u64 {
        let segment_id = self.next_segment_id;
        self.next_segment_id += 1;

        let start_end = match self.last_handle() {
            Some(last) if last.position == start => SegmentEnd::Handle(last.id),
            _ => SegmentEnd::Fixed(start),
        };

        self.deco_segments
            .push(Segment::deco(segment_id, start_end, start, end));
        segment_id
    }

    /// Entfernt alle Handles und Segmente (entspricht dem Startzustand).
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Gibt das Handle mit der angegebenen ID zurück.
    pub fn handle(&self, handle_id: u64) -> Option<&DiveHandle> {
        self.handles.get(&handle_id)
    }

    /// Gibt das zeitlich letzte Handle zurück.
    pub fn last_handle(&self) -> Option<&DiveHandle> {
        self.handles.last().map(|(_, handle)| handle)
    }

    /// Prüft ob die ID das zeitlich letzte Handle bezeichnet.
    pub fn is_last_handle(&self, handle_id: u64) -> bool {
        self.last_handle().is_some_and(|last| last.id == handle_id)
    }

    /// Iterator über alle Handles in Zeit-Reihenfolge (read-only).
    pub fn handles_iter(&self) -> impl Iterator<Item = &DiveHandle> {
        self.handles.values()
    }

    /// Iterator über alle Nutzer-Segmente in Erstellungsreihenfolge (read-only).
    pub fn segments_iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.values()
    }

    /// Gibt ein Nutzer-Segment anhand seiner ID zurück.
    pub fn segment(&self, segment_id: u64) -> Option<&Segment> {
        self.segments.get(&segment_id)
    }

    /// Die aktuell generierten Deko-Segmente (read-only).
    pub fn deco_segments(&self) -> &[Segment] {
        &self.deco_segments
    }

    /// Gibt die Anzahl der Handles zurück
    pub fn handle_count(&self) -> usize {
        self.handles.len()
    }

    /// Gibt die Anzahl der Nutzer-Segmente zurück (inkl. Ursprungs-Segment)
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Gibt die Anzahl der Segmente zwischen Handles zurück.
    /// Das Ursprungs-Segment zählt hier nicht mit.
    pub fn segments_between_handles(&self) -> usize {
        self.handles.len().saturating_sub(1)
    }

    /// Gibt die Anzahl der generierten Deko-Segmente zurück
    pub fn deco_count(&self) -> usize {
        self.deco_segments.len()
    }

    /// Baut den persistenten Spatial-Index aus den aktuellen Handles neu auf.
    pub fn rebuild_spatial_index(&mut self) {
        self.spatial_index = SpatialIndex::from_handles(&self.handles);
    }

    /// Findet das nächstgelegene Handle zur Plan-Position.
    pub fn nearest_handle(&self, query: Vec2) -> Option<SpatialMatch> {
        self.spatial_index.nearest(query)
    }
}

impl Default for DivePlan {
    fn default() -> Self {
        Self::new()
    }
}
