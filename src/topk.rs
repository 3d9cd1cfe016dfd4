use base::heap::BoundedMinHeap;
use base::scalar::Priority;

// Scoring accumulator: feed every scored candidate through `push`, the k
// best survive. Draining yields them in ascending priority order.
pub struct TopK<T> {
    heap: BoundedMinHeap<T>,
}

impl<T> TopK<T> {
    pub fn new(k: usize) -> Self {
        assert!(k != 0);
        Self {
            heap: BoundedMinHeap::new(k),
        }
    }

    pub fn k(&self) -> usize {
        self.heap.capacity()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn admits(&self, priority: Priority) -> bool {
        !self.heap.is_full() || priority >= self.heap.min_priority().unwrap()
    }

    pub fn push(&mut self, priority: Priority, item: T) {
        self.heap.insert_or_replace(priority, item);
    }

    // the admission threshold, once k candidates are held
    pub fn cutoff(&self) -> Option<Priority> {
        if self.heap.is_full() {
            self.heap.min_priority().ok()
        } else {
            None
        }
    }

    pub fn into_sorted_vec(mut self) -> Vec<(Priority, T)> {
        let mut vec = Vec::with_capacity(self.heap.len());
        while let Ok(entry) = self.heap.pop_min() {
            vec.push(entry);
        }
        vec
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::Rng;

    fn check(k: usize, stream: &[f64]) {
        let brute_force = {
            let mut sorted = stream.to_vec();
            sorted.sort_by(f64::total_cmp);
            sorted.reverse();
            sorted.truncate(k);
            sorted.sort_by(f64::total_cmp);
            sorted
        };
        let top_k = {
            let mut top_k = TopK::new(k);
            for (i, &x) in stream.iter().enumerate() {
                top_k.push(Priority(x), i);
            }
            top_k
                .into_sorted_vec()
                .iter()
                .map(|&(priority, _)| priority.to_f64())
                .collect::<Vec<_>>()
        };
        assert_eq!(brute_force, top_k);
    }

    #[test]
    fn test_hardcode() {
        check(1, &[]);
        check(3, &[5.0, 1.0, 3.0]);
        check(2, &[4.0, 7.0, 2.0]);
        check(2, &[4.0, 7.0, 5.0]);
        check(4, &[1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
        check(5, &[0.5, -3.0]);
        check(3, &[9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_random() {
        fn stream() -> Vec<f64> {
            let n = rand::thread_rng().gen_range(0..10000);
            let mut vec = vec![0.0f64; n];
            vec.fill_with(|| rand::thread_rng().gen_range(-1000.0..1000.0));
            vec
        }

        for _ in 0..10 {
            let k = rand::thread_rng().gen_range(1..100);
            check(k, &stream());
        }
    }

    #[test]
    fn test_admits() {
        let mut top_k = TopK::new(2);
        assert!(top_k.admits(Priority(-100.0)));
        assert_eq!(top_k.cutoff(), None);
        top_k.push(Priority(4.0), "a");
        top_k.push(Priority(7.0), "b");
        assert_eq!(top_k.cutoff(), Some(Priority(4.0)));
        assert!(!top_k.admits(Priority(2.0)));
        assert!(top_k.admits(Priority(4.0)));
        assert!(top_k.admits(Priority(5.0)));
        top_k.push(Priority(2.0), "x");
        assert_eq!(top_k.cutoff(), Some(Priority(4.0)));
        top_k.push(Priority(5.0), "y");
        assert_eq!(top_k.cutoff(), Some(Priority(5.0)));
        assert_eq!(
            top_k.into_sorted_vec(),
            vec![(Priority(5.0), "y"), (Priority(7.0), "b")]
        );
    }

    #[test]
    fn test_rejected_push_changes_nothing() {
        let mut top_k = TopK::new(8);
        for i in 0..64 {
            top_k.push(Priority(i as f64), i);
        }
        let cutoff = top_k.cutoff();
        top_k.push(Priority(-1.0), 64);
        assert_eq!(top_k.len(), 8);
        assert_eq!(top_k.cutoff(), cutoff);
    }
}
