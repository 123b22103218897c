//! Append-only allocator for table body regions

/// Append-only allocator for the body region of a table file.
///
/// Encoding is body-before-header: pointer values are unknown until
/// every string is sized, so the writers allocate body data through
/// this arena and collect the returned offsets. Offsets are absolute
/// file offsets (the arena is based at the end of the fixed header
/// region), allocation order is the final layout, and nothing is ever
/// freed or moved.
#[derive(Debug)]
pub struct BodyArena {
    base: usize,
    bytes: Vec<u8>,
}

impl BodyArena {
    /// Creates an arena whose first allocation lands at `base`.
    pub fn new(base: usize) -> Self {
        Self {
            base,
            bytes: Vec::new(),
        }
    }

    /// Appends `data` and returns its absolute file offset.
    pub fn allocate(&mut self, data: &[u8]) -> u32 {
        let offset = self.base + self.bytes.len();
        self.bytes.extend_from_slice(data);
        offset as u32
    }

    /// Absolute file offset one past the last allocation.
    pub fn end_offset(&self) -> usize {
        self.base + self.bytes.len()
    }

    /// Number of body bytes allocated so far.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` while nothing has been allocated.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consumes the arena, yielding the body region bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocations_are_sequential() {
        let mut arena = BodyArena::new(100);
        assert_eq!(arena.allocate(b"abc\0"), 100);
        assert_eq!(arena.allocate(b"de\0"), 104);
        assert_eq!(arena.allocate(b"\0"), 107);
        assert_eq!(arena.end_offset(), 108);
        assert_eq!(arena.len(), 8);
    }

    #[test]
    fn test_zero_length_allocation_keeps_offset() {
        let mut arena = BodyArena::new(16);
        assert_eq!(arena.allocate(b""), 16);
        assert_eq!(arena.allocate(b"x"), 16);
        assert_eq!(arena.end_offset(), 17);
    }

    #[test]
    fn test_into_bytes_excludes_header_region() {
        let mut arena = BodyArena::new(8);
        arena.allocate(b"body");
        assert_eq!(arena.into_bytes(), b"body");
    }

    #[test]
    fn test_empty_arena() {
        let arena = BodyArena::new(2240);
        assert!(arena.is_empty());
        assert_eq!(arena.end_offset(), 2240);
    }
}
