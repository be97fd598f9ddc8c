//! # Selection Engine
//!
//! Tracks a rectangular drag gesture over the (staff, day) grid and resolves
//! it into a finalized, ordered set of coordinates. The engine is a plain
//! state machine driven by press/move/release/dismiss events; it knows nothing
//! about any UI framework and is only ever driven from one input stream.

/// A position in the current month's grid: indices into the ordered staff
/// list and day list. Transient: only valid for one rendering of one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPoint {
    pub staff_index: usize,
    pub day_index: usize,
}

impl GridPoint {
    pub fn new(staff_index: usize, day_index: usize) -> Self {
        Self {
            staff_index,
            day_index,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum SelectionState {
    #[default]
    Idle,
    Dragging {
        anchor: GridPoint,
        current: GridPoint,
    },
    Finalized(Vec<GridPoint>),
}

/// Rectangular drag-selection state machine: Idle -> Dragging -> Finalized.
#[derive(Debug, Clone, Default)]
pub struct SelectionEngine {
    state: SelectionState,
}

impl SelectionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Press on a grid cell: enter Dragging with the cell as both anchor and
    /// current point. A press while a selection is finalized discards it.
    pub fn begin_drag(&mut self, point: GridPoint) {
        self.state = SelectionState::Dragging {
            anchor: point,
            current: point,
        };
    }

    /// Pointer moved over a different cell while the button is held: update
    /// the current corner only. Ignored unless a drag is in progress.
    pub fn drag_to(&mut self, point: GridPoint) {
        if let SelectionState::Dragging { current, .. } = &mut self.state {
            *current = point;
        }
    }

    /// Pointer released: resolve the inclusive rectangle between anchor and
    /// current into the finalized set and return it. A release without an
    /// in-progress drag is a no-op returning `None`.
    pub fn release(&mut self) -> Option<&[GridPoint]> {
        if let SelectionState::Dragging { anchor, current } = &self.state {
            let (anchor, current) = (*anchor, *current);
            self.state = SelectionState::Finalized(Self::rectangle(anchor, current));
        }
        self.selection()
    }

    /// Outside click, escape, or a successfully applied bulk edit: back to Idle.
    pub fn dismiss(&mut self) {
        self.state = SelectionState::Idle;
    }

    /// The finalized coordinate set, row-major, if one exists.
    pub fn selection(&self) -> Option<&[GridPoint]> {
        match &self.state {
            SelectionState::Finalized(points) => Some(points),
            _ => None,
        }
    }

    /// True while a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, SelectionState::Dragging { .. })
    }

    /// Whether a cell should render highlighted: the live rectangle while
    /// dragging, the finalized set afterwards, nothing while idle.
    pub fn is_highlighted(&self, staff_index: usize, day_index: usize) -> bool {
        match &self.state {
            SelectionState::Idle => false,
            SelectionState::Dragging { anchor, current } => {
                let (min_s, max_s) = ordered(anchor.staff_index, current.staff_index);
                let (min_d, max_d) = ordered(anchor.day_index, current.day_index);
                staff_index >= min_s
                    && staff_index <= max_s
                    && day_index >= min_d
                    && day_index <= max_d
            }
            SelectionState::Finalized(points) => points
                .iter()
                .any(|p| p.staff_index == staff_index && p.day_index == day_index),
        }
    }

    /// Inclusive axis-aligned rectangle between two corners, row-major
    /// (staff outer, day inner), regardless of drag direction.
    fn rectangle(anchor: GridPoint, current: GridPoint) -> Vec<GridPoint> {
        let (min_s, max_s) = ordered(anchor.staff_index, current.staff_index);
        let (min_d, max_d) = ordered(anchor.day_index, current.day_index);

        let mut points = Vec::with_capacity((max_s - min_s + 1) * (max_d - min_d + 1));
        for staff_index in min_s..=max_s {
            for day_index in min_d..=max_d {
                points.push(GridPoint::new(staff_index, day_index));
            }
        }
        points
    }
}

fn ordered(a: usize, b: usize) -> (usize, usize) {
    (a.min(b), a.max(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(engine: &mut SelectionEngine, from: (usize, usize), to: (usize, usize)) -> Vec<GridPoint> {
        engine.begin_drag(GridPoint::new(from.0, from.1));
        engine.drag_to(GridPoint::new(to.0, to.1));
        engine.release().unwrap().to_vec()
    }

    #[test]
    fn test_single_click_selects_one_cell() {
        let mut engine = SelectionEngine::new();
        engine.begin_drag(GridPoint::new(2, 5));
        let selection = engine.release().unwrap();
        assert_eq!(selection, &[GridPoint::new(2, 5)]);
    }

    #[test]
    fn test_rectangle_symmetric_under_corner_swap() {
        let mut a = SelectionEngine::new();
        let mut b = SelectionEngine::new();
        let forward = drag(&mut a, (0, 1), (2, 5));
        let backward = drag(&mut b, (2, 5), (0, 1));
        assert_eq!(forward, backward);
        assert_eq!(forward.len(), 3 * 5);
    }

    #[test]
    fn test_rectangle_is_row_major() {
        let mut engine = SelectionEngine::new();
        let points = drag(&mut engine, (1, 2), (0, 3));
        assert_eq!(
            points,
            vec![
                GridPoint::new(0, 2),
                GridPoint::new(0, 3),
                GridPoint::new(1, 2),
                GridPoint::new(1, 3),
            ]
        );
    }

    #[test]
    fn test_highlight_tracks_live_rectangle_while_dragging() {
        let mut engine = SelectionEngine::new();
        engine.begin_drag(GridPoint::new(3, 3));
        engine.drag_to(GridPoint::new(1, 1));

        assert!(engine.is_dragging());
        assert!(engine.is_highlighted(2, 2));
        assert!(engine.is_highlighted(1, 1));
        assert!(engine.is_highlighted(3, 3));
        assert!(!engine.is_highlighted(0, 2));
        assert!(!engine.is_highlighted(2, 4));
    }

    #[test]
    fn test_highlight_uses_finalized_set_after_release() {
        let mut engine = SelectionEngine::new();
        drag(&mut engine, (0, 0), (1, 1));

        assert!(!engine.is_dragging());
        assert!(engine.is_highlighted(0, 1));
        assert!(!engine.is_highlighted(2, 2));
    }

    #[test]
    fn test_idle_highlights_nothing() {
        let engine = SelectionEngine::new();
        assert!(!engine.is_highlighted(0, 0));
        assert_eq!(engine.selection(), None);
    }

    #[test]
    fn test_dismiss_returns_to_idle() {
        let mut engine = SelectionEngine::new();
        drag(&mut engine, (0, 0), (1, 1));
        engine.dismiss();

        assert_eq!(engine.selection(), None);
        assert!(!engine.is_highlighted(0, 0));
    }

    #[test]
    fn test_new_press_discards_finalized_selection() {
        let mut engine = SelectionEngine::new();
        drag(&mut engine, (0, 0), (2, 2));

        engine.begin_drag(GridPoint::new(4, 4));
        assert!(engine.is_dragging());
        // the old finalized set no longer highlights
        assert!(!engine.is_highlighted(0, 0));
        assert!(engine.is_highlighted(4, 4));

        let selection = engine.release().unwrap();
        assert_eq!(selection, &[GridPoint::new(4, 4)]);
    }

    #[test]
    fn test_release_without_drag_is_noop() {
        let mut engine = SelectionEngine::new();
        assert_eq!(engine.release(), None);

        // release twice: the second keeps the finalized set
        engine.begin_drag(GridPoint::new(0, 0));
        engine.release();
        let again = engine.release().unwrap().to_vec();
        assert_eq!(again, vec![GridPoint::new(0, 0)]);
    }

    #[test]
    fn test_drag_to_ignored_when_not_dragging() {
        let mut engine = SelectionEngine::new();
        engine.drag_to(GridPoint::new(5, 5));
        assert_eq!(engine.selection(), None);
        assert!(!engine.is_highlighted(5, 5));
    }
}
