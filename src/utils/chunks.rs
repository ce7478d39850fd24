/// Iterator adapter yielding contiguous `Vec` chunks of at most `size` items.
///
/// Only the chunk being built is held in memory; the source iterator is
/// advanced on demand.
#[derive(Debug)]
pub struct Chunked<I> {
    inner: I,
    size: usize,
}

impl<I: Iterator> Chunked<I> {
    /// A `size` of zero is treated as one.
    pub fn new(inner: I, size: usize) -> Self {
        Self {
            inner,
            size: size.max(1),
        }
    }
}

impl<I: Iterator> Iterator for Chunked<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk: Vec<I::Item> = self.inner.by_ref().take(self.size).collect();
        if chunk.is_empty() { None } else { Some(chunk) }
    }
}

/// Extension trait so any iterator can be split with `.chunked(n)`
pub trait ChunkedExt: Iterator + Sized {
    fn chunked(self, size: usize) -> Chunked<Self> {
        Chunked::new(self, size)
    }
}

impl<I: Iterator> ChunkedExt for I {}
