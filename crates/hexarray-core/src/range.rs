use crate::error::RangeError;

/// An arithmetic sequence from `start` towards `end`, advancing by `step`.
///
/// `end` is inclusive: it is produced when `(end - start)` is an exact
/// multiple of `step`, and no value past it is ever produced. A positive
/// `step` with `end < start` yields nothing; a negative `step` counts down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SteppedRange {
    next: i64,
    end: i64,
    step: i64,
    done: bool,
}

impl SteppedRange {
    /// Build the sequence, rejecting a zero step up front.
    ///
    /// A zero step never reaches the bound; the sequence would be infinite.
    pub fn inclusive(start: i64, end: i64, step: i64) -> Result<Self, RangeError> {
        if step == 0 {
            return Err(RangeError::ZeroStep);
        }
        Ok(Self { next: start, end, step, done: false })
    }

    /// Number of values still to be yielded.
    pub fn len(&self) -> usize {
        if self.done {
            return 0;
        }
        // Widen so the difference never overflows.
        let diff = i128::from(self.end) - i128::from(self.next);
        let step = i128::from(self.step);
        if diff != 0 && diff.signum() != step.signum() {
            return 0;
        }
        // Same signs, so truncation is floor division here.
        (diff / step + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Iterator for SteppedRange {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.done {
            return None;
        }
        let in_bounds = if self.step > 0 {
            self.next <= self.end
        } else {
            self.next >= self.end
        };
        if !in_bounds {
            self.done = true;
            return None;
        }
        let value = self.next;
        match value.checked_add(self.step) {
            Some(next) => self.next = next,
            // Overflow means the next value would be past the bound anyway.
            None => self.done = true,
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SteppedRange {}
