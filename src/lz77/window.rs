use crate::error::{Error, Result};

/// Growing output buffer that resolves back-references against itself
pub struct OutputWindow {
    buffer: Vec<u8>,
}

impl OutputWindow {
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { buffer: Vec::with_capacity(capacity) }
    }

    /// Add a single symbol to the window
    #[inline]
    pub fn push_symbol(&mut self, symbol: u8) {
        self.buffer.push(symbol);
    }

    /// Append `length` symbols starting `distance` symbols back
    ///
    /// Note: distance=1 means the most recently written symbol.
    /// Length can exceed distance, in which case symbols are copied one at a
    /// time from output that is still being written.
    pub fn copy_back(&mut self, distance: usize, length: usize) -> Result<()> {
        let available = self.buffer.len();
        if distance == 0 || distance > available {
            return Err(Error::DanglingReference { distance, available });
        }

        let start = available - distance;
        if length <= distance {
            // Simple case: source span is already fully written
            self.buffer.extend_from_within(start..start + length);
        } else {
            for i in 0..length {
                let symbol = self.buffer[start + i];
                self.buffer.push(symbol);
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Finish and return the reconstructed symbols
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }
}

impl Default for OutputWindow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_back_simple() {
        let mut window = OutputWindow::new();
        for &b in b"abcd" {
            window.push_symbol(b);
        }
        window.copy_back(4, 3).unwrap();
        assert_eq!(window.into_inner(), b"abcdabc");
    }

    #[test]
    fn test_copy_back_overlapping() {
        let mut window = OutputWindow::new();
        window.push_symbol(7);
        window.copy_back(1, 4).unwrap();
        assert_eq!(window.into_inner(), vec![7, 7, 7, 7, 7]);
    }

    #[test]
    fn test_copy_back_repeating_pattern() {
        let mut window = OutputWindow::new();
        window.push_symbol(1);
        window.push_symbol(2);
        window.copy_back(2, 5).unwrap();
        assert_eq!(window.into_inner(), vec![1, 2, 1, 2, 1, 2, 1]);
    }

    #[test]
    fn test_dangling_reference() {
        let mut window = OutputWindow::new();
        window.push_symbol(1);
        window.push_symbol(2);
        let err = window.copy_back(10, 2).unwrap_err();
        assert!(matches!(err, Error::DanglingReference { distance: 10, available: 2 }));
    }

    #[test]
    fn test_zero_distance() {
        let mut window = OutputWindow::new();
        window.push_symbol(1);
        assert!(matches!(window.copy_back(0, 1), Err(Error::DanglingReference { .. })));
    }
}
