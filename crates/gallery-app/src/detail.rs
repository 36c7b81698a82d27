//! Single-item detail navigator
//!
//! Tracks which card of the ordered sequence is open in the detail overlay.
//! Stepping past either end wraps around.

use gallery_core::prelude::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailNavigator {
    open: Option<usize>,
    len: usize,
}

impl DetailNavigator {
    pub fn new(len: usize) -> Self {
        Self { open: None, len }
    }

    /// Index of the open item, if any
    pub fn current(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn open(&mut self, index: usize) -> Result<usize> {
        if index >= self.len {
            return Err(Error::ItemOutOfRange {
                index,
                len: self.len,
            });
        }
        self.open = Some(index);
        Ok(index)
    }

    pub fn next(&mut self) -> Result<usize> {
        let current = self.open.ok_or(Error::NoItemOpen)?;
        let next = (current + 1) % self.len;
        self.open = Some(next);
        Ok(next)
    }

    pub fn prev(&mut self) -> Result<usize> {
        let current = self.open.ok_or(Error::NoItemOpen)?;
        let prev = (current + self.len - 1) % self.len;
        self.open = Some(prev);
        Ok(prev)
    }

    pub fn close(&mut self) -> Option<usize> {
        self.open.take()
    }

    /// Adopt a new sequence length after a redraw
    ///
    /// An open index that no longer exists closes the overlay.
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        if matches!(self.open, Some(idx) if idx >= len) {
            debug!("Closing detail view: item no longer in collection");
            self.open = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_to_start() {
        let mut nav = DetailNavigator::new(3);
        nav.open(2).unwrap();
        assert_eq!(nav.next().unwrap(), 0);
        assert_eq!(nav.next().unwrap(), 1);
    }

    #[test]
    fn test_prev_wraps_to_end() {
        let mut nav = DetailNavigator::new(3);
        nav.open(0).unwrap();
        assert_eq!(nav.prev().unwrap(), 2);
        assert_eq!(nav.prev().unwrap(), 1);
    }

    #[test]
    fn test_single_item_wraps_to_itself() {
        let mut nav = DetailNavigator::new(1);
        nav.open(0).unwrap();
        assert_eq!(nav.next().unwrap(), 0);
        assert_eq!(nav.prev().unwrap(), 0);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut nav = DetailNavigator::new(5);
        nav.open(3).unwrap();
        for _ in 0..5 {
            nav.next().unwrap();
        }
        assert_eq!(nav.current(), Some(3));
    }

    #[test]
    fn test_open_out_of_range_rejected() {
        let mut nav = DetailNavigator::new(2);
        let err = nav.open(2).unwrap_err();
        assert!(matches!(err, Error::ItemOutOfRange { index: 2, len: 2 }));
        assert!(!nav.is_open());
    }

    #[test]
    fn test_navigation_without_open_item() {
        let mut nav = DetailNavigator::new(4);
        assert!(matches!(nav.next(), Err(Error::NoItemOpen)));
        assert!(matches!(nav.prev(), Err(Error::NoItemOpen)));
    }

    #[test]
    fn test_close() {
        let mut nav = DetailNavigator::new(4);
        nav.open(1).unwrap();
        assert_eq!(nav.close(), Some(1));
        assert_eq!(nav.close(), None);
    }

    #[test]
    fn test_resize_closes_vanished_item() {
        let mut nav = DetailNavigator::new(4);
        nav.open(3).unwrap();
        nav.resize(5);
        assert_eq!(nav.current(), Some(3));
        nav.resize(2);
        assert!(!nav.is_open());
    }
}
