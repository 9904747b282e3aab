use std::iter::FusedIterator;

use super::FixFifo;

/// Borrowing iterator over the live elements of a [`FixFifo`], oldest first.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    fifo: &'a FixFifo<T>,
    head: usize,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(fifo: &'a FixFifo<T>) -> Self {
        Self {
            fifo,
            head: fifo.begin_index(),
            remaining: fifo.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.head;
        self.head = self.fifo.next_index(idx);
        self.remaining -= 1;
        self.fifo.underlying_array()[idx].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let idx = (self.head + self.remaining) % self.fifo.capacity();
        self.fifo.underlying_array()[idx].as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::fifo::FixFifo;

    #[test]
    fn test_iter_follows_logical_order() {
        let mut fifo = FixFifo::new(3).unwrap();
        for i in 1..=5 {
            fifo.push_back_forced(i);
        }
        assert_eq!(fifo.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
        assert_eq!(fifo.iter().rev().copied().collect::<Vec<_>>(), vec![5, 4, 3]);
        assert_eq!(fifo.iter().len(), 3);
    }

    #[test]
    fn test_iter_meets_in_the_middle() {
        let mut fifo = FixFifo::new(4).unwrap();
        for i in 0..6 {
            fifo.push_back_forced(i);
        }
        let mut iter = fifo.iter();
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&5));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_iter_is_restartable() {
        let mut fifo = FixFifo::new(2).unwrap();
        assert_eq!(fifo.iter().next(), None);
        fifo.push_back("a");
        let first: Vec<_> = fifo.iter().collect();
        let second: Vec<_> = (&fifo).into_iter().collect();
        assert_eq!(first, second);
    }
}
