use crate::core::ElementHandle;

/// Mints element handles for the rendering layer.
///
/// Handles are never reused by one allocator, so handles from a superseded
/// render cannot alias elements of the current one.
#[derive(Debug, Default)]
pub struct HandleAllocator {
    next: u64,
}

impl HandleAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> ElementHandle {
        let handle = ElementHandle::from_raw(self.next);
        self.next += 1;
        handle
    }

    #[must_use]
    pub fn allocated(&self) -> u64 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::HandleAllocator;

    #[test]
    fn allocator_never_repeats_handles() {
        let mut allocator = HandleAllocator::new();
        let first = allocator.allocate();
        let second = allocator.allocate();
        assert_ne!(first, second);
        assert_eq!(allocator.allocated(), 2);
    }
}
