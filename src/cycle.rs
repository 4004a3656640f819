/// Position in a fixed-size ring of items.
///
/// Used by the success carousel, the outcomes pager and the testimonial
/// rotation. An empty ring stays at zero and never moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CyclicIndex {
    index: usize,
    len: usize,
}

impl CyclicIndex {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn get(self) -> usize {
        self.index
    }

    pub fn len(self) -> usize {
        self.len
    }

    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    pub fn next(self) -> Self {
        self.step(1)
    }

    pub fn prev(self) -> Self {
        self.step(-1)
    }

    /// `(index + direction + len) mod len`, for any direction.
    pub fn step(self, direction: isize) -> Self {
        if self.len == 0 {
            return self;
        }
        let len = self.len as isize;
        let index = (self.index as isize + direction.rem_euclid(len) + len) % len;
        Self {
            index: index as usize,
            len: self.len,
        }
    }

    /// 1-based position for page indicators.
    pub fn display_position(self) -> usize {
        if self.len == 0 {
            0
        } else {
            self.index + 1
        }
    }

    pub fn is_active(self, position: usize) -> bool {
        self.len > 0 && position == self.index
    }
}
