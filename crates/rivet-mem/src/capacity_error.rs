/// Failures that concern the block rather than the elements in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapacityError {
    /// The allocator could not provide a block of `new_capacity` elements.
    AllocFailed {
        new_capacity: usize,
    },
    IndexOutOfBounds {
        index: usize,
        len: usize,
    },
    /// `requested` elements do not fit in `isize::MAX` bytes.
    CapacityOverflow {
        requested: usize,
    },
    ZeroSizedElement,
}

impl core::fmt::Display for CapacityError {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AllocFailed { new_capacity } => {
                write!(f, "allocation failed with new capacity {}", new_capacity)
            },
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {} was out of bounds of len {}", index, len)
            },
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity of {} elements overflows the address space", requested)
            },
            Self::ZeroSizedElement => {
                write!(f, "size of element type is zero")
            },
        }
    }
}

impl core::error::Error for CapacityError {}
