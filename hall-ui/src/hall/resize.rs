/// Axis a resize handle moves along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Coordinate of a pointer on this axis.
    pub fn pick(self, client_x: i32, client_y: i32) -> i32 {
        match self {
            Axis::Horizontal => client_x,
            Axis::Vertical => client_y,
        }
    }

    pub fn cursor(self) -> &'static str {
        match self {
            Axis::Horizontal => "col-resize",
            Axis::Vertical => "row-resize",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeGesture {
    #[default]
    Idle,
    Dragging {
        last: i32,
    },
}

impl ResizeGesture {
    pub fn is_dragging(&self) -> bool {
        matches!(self, ResizeGesture::Dragging { .. })
    }

    pub fn start(&mut self, position: i32) {
        *self = ResizeGesture::Dragging { last: position };
    }

    /// Incremental delta since the previous move, or `None` when idle.
    pub fn move_to(&mut self, position: i32) -> Option<i32> {
        match self {
            ResizeGesture::Dragging { last } => {
                let delta = position - *last;
                *last = position;
                Some(delta)
            }
            ResizeGesture::Idle => None,
        }
    }

    /// Returns whether a drag was actually ended.
    pub fn end(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        *self = ResizeGesture::Idle;
        was_dragging
    }
}

/// Pointer-move deltas waiting to be handed to the owner of a handle.
/// Each move is kept separately so the owner can clamp after every step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeltaQueue {
    deltas: Vec<i32>,
}

impl DeltaQueue {
    /// Zero deltas are dropped.
    pub fn push(&mut self, delta: i32) {
        if delta != 0 {
            self.deltas.push(delta);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    /// Takes every queued delta in arrival order.
    pub fn drain(&mut self) -> Vec<i32> {
        std::mem::take(&mut self.deltas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_are_incremental() {
        let mut gesture = ResizeGesture::default();
        gesture.start(100);
        assert_eq!(gesture.move_to(110), Some(10));
        assert_eq!(gesture.move_to(105), Some(-5));
        assert_eq!(gesture.move_to(105), Some(0));
        assert!(gesture.end());
        assert_eq!(gesture.move_to(200), None);
    }

    #[test]
    fn moves_before_start_are_ignored() {
        let mut gesture = ResizeGesture::default();
        assert_eq!(gesture.move_to(50), None);
        assert!(!gesture.end());
        assert_eq!(gesture, ResizeGesture::Idle);
    }

    #[test]
    fn axis_picks_coordinate() {
        assert_eq!(Axis::Horizontal.pick(3, 7), 3);
        assert_eq!(Axis::Vertical.pick(3, 7), 7);
    }

    #[test]
    fn queued_moves_are_kept_one_by_one() {
        let mut queue = DeltaQueue::default();
        queue.push(50);
        queue.push(0);
        queue.push(-50);
        assert_eq!(queue.drain(), vec![50, -50]);
        assert!(queue.is_empty());
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn per_move_clamping_differs_from_summed_deltas() {
        use crate::hall::layout_store::MAX_LEFT_WIDTH;
        use crate::hall::LayoutStore;

        let mut gesture = ResizeGesture::default();
        let mut queue = DeltaQueue::default();
        gesture.start(0);
        for position in [60, 0] {
            if let Some(delta) = gesture.move_to(position) {
                queue.push(delta);
            }
        }

        let mut store = LayoutStore::default();
        store.set_left_width(MAX_LEFT_WIDTH);
        for delta in queue.drain() {
            store.resize_left(delta);
        }
        assert_eq!(store.left_width(), MAX_LEFT_WIDTH - 60);
    }
}
