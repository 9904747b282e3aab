use crate::config::{FixFifoConfig, OverflowPolicy};
use crate::error::{FixFifoError, FixFifoResult};

mod codec;
mod iter;

pub use iter::Iter;

/// Result of a policy-driven [`FixFifo::push`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome<T> {
    /// There was room, the element was appended.
    Pushed,
    /// Queue was full under [`OverflowPolicy::Reject`], the element is handed back.
    Rejected(T),
    /// Queue was full under [`OverflowPolicy::EvictOldest`], carries the dropped oldest element.
    Evicted(T),
}

/// Fixed-capacity FIFO queue backed by one contiguous array used as a circular buffer.
///
/// All slots are allocated at construction and never reallocated. `begin` is the
/// read cursor (oldest element), `end` is the write cursor (where the next push
/// lands), and `end == (begin + len) % capacity` always holds.
#[derive(Debug, Clone)]
pub struct FixFifo<T> {
    slots: Vec<Option<T>>,
    begin: usize,
    end: usize,
    len: usize,
    overflow: OverflowPolicy,
}

impl<T> FixFifo<T> {
    /// Creates an empty queue holding at most `capacity` elements.
    ///
    /// Fails with [`FixFifoError::InvalidArgument`] when `capacity` is zero or
    /// the slots cannot be allocated.
    pub fn new(capacity: usize) -> FixFifoResult<Self> {
        Self::from_config(FixFifoConfig::default().with_capacity(capacity))
    }

    pub fn from_config(config: FixFifoConfig) -> FixFifoResult<Self> {
        if config.capacity == 0 {
            return Err(FixFifoError::InvalidArgument(
                "capacity must be positive".to_string(),
            ));
        }
        let mut slots = Vec::new();
        slots.try_reserve_exact(config.capacity).map_err(|e| {
            FixFifoError::InvalidArgument(format!(
                "cannot allocate {} slots: {}",
                config.capacity, e
            ))
        })?;
        slots.resize_with(config.capacity, || None);
        log::debug!(
            "Created fifo with capacity {} and overflow policy {}",
            config.capacity,
            config.overflow
        );
        Ok(Self {
            slots,
            begin: 0,
            end: 0,
            len: 0,
            overflow: config.overflow,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }
    pub fn overflow_policy(&self) -> OverflowPolicy {
        self.overflow
    }

    /// Makes the queue empty in O(1).
    ///
    /// Slot contents are left in place and are only dropped when a later push
    /// overwrites them or the queue itself is dropped.
    pub fn clear(&mut self) {
        self.begin = 0;
        self.end = 0;
        self.len = 0;
    }

    /// Appends `elem` unless the queue is full.
    ///
    /// Returns `false` when full, in which case `elem` is dropped and the queue
    /// is unchanged.
    pub fn push_back(&mut self, elem: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.write_back(elem);
        true
    }

    /// Appends `elem`, evicting the oldest element first if the queue is full.
    ///
    /// The eviction is silent: nothing tells the caller an element was lost.
    /// Check [`is_full`](Self::is_full) beforehand, or use
    /// [`push_back_evicting`](Self::push_back_evicting) to get the evicted
    /// element back.
    pub fn push_back_forced(&mut self, elem: T) {
        if self.is_full() {
            log::trace!("Evicting oldest element at slot {}", self.begin);
            self.advance_begin();
        }
        self.write_back(elem);
    }

    /// Same as [`push_back_forced`](Self::push_back_forced) but returns the
    /// evicted element, if any.
    pub fn push_back_evicting(&mut self, elem: T) -> Option<T> {
        let evicted = if self.is_full() {
            log::trace!("Evicting oldest element at slot {}", self.begin);
            self.take_front()
        } else {
            None
        };
        self.write_back(elem);
        evicted
    }

    /// Appends `elem` according to the queue's [`OverflowPolicy`].
    pub fn push(&mut self, elem: T) -> PushOutcome<T> {
        if !self.is_full() {
            self.write_back(elem);
            return PushOutcome::Pushed;
        }
        match self.overflow {
            OverflowPolicy::Reject => PushOutcome::Rejected(elem),
            OverflowPolicy::EvictOldest => match self.push_back_evicting(elem) {
                Some(old) => PushOutcome::Evicted(old),
                None => PushOutcome::Pushed,
            },
        }
    }

    /// Removes and returns the oldest element.
    pub fn pop_front(&mut self) -> FixFifoResult<T> {
        if self.is_empty() {
            return Err(FixFifoError::EmptyContainer);
        }
        let index = self.begin;
        self.take_front()
            .ok_or_else(|| FixFifoError::Internal(format!("slot {} holds no element", index)))
    }

    /// Removes the oldest element without handing it to the caller.
    pub fn discard_front(&mut self) -> FixFifoResult<()> {
        if self.is_empty() {
            return Err(FixFifoError::EmptyContainer);
        }
        self.slots[self.begin] = None;
        self.advance_begin();
        Ok(())
    }

    /// Oldest element.
    pub fn front(&self) -> FixFifoResult<&T> {
        if self.is_empty() {
            return Err(FixFifoError::EmptyContainer);
        }
        self.slot(self.begin)
    }

    /// Newest element.
    pub fn back(&self) -> FixFifoResult<&T> {
        if self.is_empty() {
            return Err(FixFifoError::EmptyContainer);
        }
        self.slot(self.rbegin_index())
    }

    /// Index into [`underlying_array`](Self::underlying_array) of the oldest element.
    /// Can be greater than [`end_index`](Self::end_index) once the cursors wrapped.
    pub fn begin_index(&self) -> usize {
        self.begin
    }

    /// Index one past the newest element, i.e. where the next push writes.
    pub fn end_index(&self) -> usize {
        self.end
    }

    /// Index of the newest element. Only meaningful when the queue is not empty.
    pub fn rbegin_index(&self) -> usize {
        self.prev_index(self.end)
    }

    /// Walks the backing store forward in logical order:
    ///
    /// ```
    /// # use fix_fifo::FixFifo;
    /// let mut fifo = FixFifo::new(2).unwrap();
    /// fifo.push_back_forced('a');
    /// fifo.push_back_forced('b');
    /// fifo.push_back_forced('c');
    ///
    /// let mut i = fifo.begin_index();
    /// let mut seen = Vec::new();
    /// for _ in 0..fifo.len() {
    ///     seen.extend(fifo.underlying_array()[i]);
    ///     i = fifo.next_index(i);
    /// }
    /// assert_eq!(seen, vec!['b', 'c']);
    /// ```
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.capacity()
    }

    pub fn prev_index(&self, index: usize) -> usize {
        if index == 0 {
            self.capacity() - 1
        } else {
            (index - 1) % self.capacity()
        }
    }

    /// Raw backing store, for diagnostics.
    ///
    /// Physical order differs from logical order after wraparound, and slots
    /// outside the live window may still hold stale values left by
    /// [`clear`](Self::clear). Prefer [`iter`](Self::iter).
    pub fn underlying_array(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Iterates live elements from oldest to newest.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    fn slot(&self, index: usize) -> FixFifoResult<&T> {
        self.slots[index]
            .as_ref()
            .ok_or_else(|| FixFifoError::Internal(format!("slot {} holds no element", index)))
    }

    fn write_back(&mut self, elem: T) {
        debug_assert!(self.len < self.capacity());
        debug_assert_eq!(self.end, (self.begin + self.len) % self.capacity());
        self.slots[self.end] = Some(elem);
        self.end = self.next_index(self.end);
        self.len += 1;
    }

    fn take_front(&mut self) -> Option<T> {
        let item = self.slots[self.begin].take();
        self.advance_begin();
        item
    }

    fn advance_begin(&mut self) {
        debug_assert!(self.len > 0);
        self.begin = self.next_index(self.begin);
        self.len -= 1;
    }
}

impl<T: PartialEq> PartialEq for FixFifo<T> {
    fn eq(&self, other: &Self) -> bool {
        self.capacity() == other.capacity()
            && self.len == other.len
            && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for FixFifo<T> {}

impl<'a, T> IntoIterator for &'a FixFifo<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
