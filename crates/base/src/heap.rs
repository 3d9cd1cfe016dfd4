use crate::error::*;
use crate::scalar::Priority;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct HeapOptions {
    #[validate(range(min = 1, max = 4_000_000_000u32))]
    pub capacity: u32,
}

// Binary min-heap of (priority, item) pairs with storage fixed at creation.
// The root is always the minimum, which makes it a running top-n list when
// fed through `insert_or_replace`.
#[derive(Debug, Clone)]
pub struct BoundedMinHeap<T> {
    entries: Vec<(Priority, T)>,
    capacity: usize,
}

impl<T> BoundedMinHeap<T> {
    pub fn create(options: &HeapOptions) -> Result<Self, CreateError> {
        if let Err(err) = options.validate() {
            return Err(CreateError::InvalidHeapOptions {
                reason: err.to_string(),
            });
        }
        Ok(Self::new(options.capacity as usize))
    }

    pub fn new(capacity: usize) -> Self {
        assert!(capacity != 0);
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn insert(&mut self, priority: Priority, item: T) -> Result<(), InsertError> {
        if self.is_full() {
            return Err(InsertError::Full);
        }
        self.entries.push((priority, item));
        self.sift_up(self.entries.len() - 1);
        Ok(())
    }

    pub fn min_item(&self) -> Result<&T, PeekError> {
        match self.entries.first() {
            Some((_, item)) => Ok(item),
            None => Err(PeekError::Empty),
        }
    }

    pub fn min_priority(&self) -> Result<Priority, PeekError> {
        match self.entries.first() {
            Some(&(priority, _)) => Ok(priority),
            None => Err(PeekError::Empty),
        }
    }

    pub fn pop_min(&mut self) -> Result<(Priority, T), PopError> {
        if self.entries.is_empty() {
            return Err(PopError::Empty);
        }
        // moves the last entry to the root, then the root sinks
        let entry = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Ok(entry)
    }

    pub fn replace_min(&mut self, priority: Priority, item: T) -> Result<(), ReplaceError> {
        let Some(root) = self.entries.first_mut() else {
            return Err(ReplaceError::Empty);
        };
        if priority < root.0 {
            // worse than everything kept, dropped silently
            return Ok(());
        }
        *root = (priority, item);
        self.sift_down(0);
        Ok(())
    }

    pub fn insert_or_replace(&mut self, priority: Priority, item: T) {
        if self.is_full() {
            // capacity != 0, so a full heap is never empty
            self.replace_min(priority, item).unwrap();
        } else {
            self.insert(priority, item).unwrap();
        }
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos != 0 {
            let parent = (pos - 1) / 2;
            if self.entries[pos].0 >= self.entries[parent].0 {
                break;
            }
            self.entries.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let n = self.entries.len();
        // pos < n / 2 <=> pos has at least a left child
        while pos < n / 2 {
            let mut child = 2 * pos + 1;
            if child + 1 < n && self.entries[child + 1].0 < self.entries[child].0 {
                child += 1;
            }
            if self.entries[pos].0 <= self.entries[child].0 {
                break;
            }
            self.entries.swap(pos, child);
            pos = child;
        }
    }
}
