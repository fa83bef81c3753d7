/// Discrete, bounded zoom level.
///
/// The level ranges over `[min, -1] ∪ [1, max]`; zero is never reachable and
/// `1` is the base level. The controller only counts ticks; the floating
/// point scale they drive lives in [`super::Magnifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomController {
    level: i32,
    min: i32,
    max: i32,
    changed: bool,
}

impl ZoomController {
    /// Bounds are forced to `min <= -1` and `max >= 1`.
    pub fn new(min: i32, max: i32) -> Self {
        Self {
            level: 1,
            min: min.min(-1),
            max: max.max(1),
            changed: true,
        }
    }

    pub fn step_up(&mut self) {
        let mut next = self.max.min(self.level.saturating_add(1));
        if next == 0 {
            next = 1;
        }
        self.commit(next);
    }

    pub fn step_down(&mut self) {
        let mut next = self.min.max(self.level.saturating_sub(1));
        if next == 0 {
            next = -1;
        }
        self.commit(next);
    }

    /// Back to base. Leaves [`has_changed`](Self::has_changed) untouched.
    pub fn reset(&mut self) {
        self.level = 1;
    }

    /// Whether the most recent step moved the level.
    pub fn has_changed(&self) -> bool {
        self.changed
    }

    pub fn at_base(&self) -> bool {
        self.level == 1
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    fn commit(&mut self, next: i32) {
        self.changed = next != self.level;
        self.level = next;
    }
}
