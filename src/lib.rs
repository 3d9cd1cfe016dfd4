pub mod topk;

pub use base::error::*;
pub use base::heap::{BoundedMinHeap, HeapOptions};
pub use base::scalar::Priority;
pub use topk::TopK;
