pub const DEFAULT_CAPACITY: usize = 4096;
/// Largest value Linux stores for one attribute (`XATTR_SIZE_MAX`).
pub const MAX_CAPACITY: usize = 65536;

/// Fixed-capacity storage an [`AttributeSource`](crate::AttributeSource) copies a value into.
///
/// The buffer never grows. Reads go through [`AttributeBuffer::filled`], which only
/// exposes the bytes the source reported as written.
#[derive(Debug)]
pub struct AttributeBuffer {
    bytes: Box<[u8]>,
}

impl AttributeBuffer {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: vec![0; capacity].into_boxed_slice(),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// The first `len` bytes, clamped to the capacity.
    #[must_use]
    pub fn filled(&self, len: usize) -> &[u8] {
        &self.bytes[..len.min(self.capacity())]
    }
}

impl Default for AttributeBuffer {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}
