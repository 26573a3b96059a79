/// Fixed-capacity circular history of `(x, y)` samples. Capacity is never
/// zero: the only caller sizes it from validated window params.
///
/// Samples are written at a cursor that walks *backward* through storage, so
/// the sample written `k` steps ago sits at `cursor + k` (mod capacity) and an
/// age is always a non-negative offset. Storage is allocated once and never
/// resized.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRing {
    xs: Box<[f64]>,
    ys: Box<[f64]>,
    cursor: usize,
}

impl HistoryRing {
    /// `capacity` must be at least 1.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "history ring needs a non-zero capacity");
        Self {
            xs: vec![0.0; capacity].into_boxed_slice(),
            ys: vec![0.0; capacity].into_boxed_slice(),
            cursor: capacity.saturating_sub(1),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.xs.len()
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Zeroes every slot and puts the cursor back at the last one.
    pub fn clear(&mut self) {
        self.xs.fill(0.0);
        self.ys.fill(0.0);
        self.cursor = self.capacity() - 1;
    }

    /// Overwrites the slot under the cursor.
    #[inline]
    pub fn write(&mut self, x: f64, y: f64) {
        self.xs[self.cursor] = x;
        self.ys[self.cursor] = y;
    }

    /// Sample `offset` slots ahead of the cursor, wrapping around.
    #[inline]
    pub fn get_from_cursor(&self, offset: usize) -> (f64, f64) {
        let ix = (self.cursor + offset) % self.capacity();
        (self.xs[ix], self.ys[ix])
    }

    /// Moves the cursor one slot back, wrapping to the last slot.
    #[inline]
    pub fn advance(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        } else {
            self.cursor = self.capacity() - 1;
        }
    }
}
