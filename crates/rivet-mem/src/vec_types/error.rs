use core::{
    convert::Infallible,
    fmt::{self, Debug, Display, Formatter},
};

use crate::CapacityError;

/// Error of an operation that constructs elements with a fallible constructor.
///
/// `E` is the constructor's own error type. Operations whose constructors
/// cannot fail use `VecError<Infallible>`, which converts losslessly into
/// [`CapacityError`] with [`VecError::into_capacity`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum VecError<E = Infallible> {
    Capacity(CapacityError),
    /// The constructor of the `index`th element of the operation failed.
    ///
    /// Bulk operations report the position within the constructed run, which
    /// is also the number of elements that were successfully constructed.
    Construct {
        index: usize,
        err: E,
    },
}

impl<E> VecError<E> {

    #[inline(always)]
    pub fn capacity_error(&self) -> Option<CapacityError> {
        match self {
            Self::Capacity(err) => Some(*err),
            Self::Construct { .. } => None,
        }
    }

    #[inline(always)]
    pub fn construct_error(&self) -> Option<(usize, &E)> {
        match self {
            Self::Capacity(_) => None,
            Self::Construct { index, err } => Some((*index, err)),
        }
    }

    pub fn map_construct<F>(self, f: impl FnOnce(E) -> F) -> VecError<F> {
        match self {
            Self::Capacity(err) => VecError::Capacity(err),
            Self::Construct { index, err } => VecError::Construct { index, err: f(err) },
        }
    }
}

impl VecError<Infallible> {

    #[inline(always)]
    pub fn into_capacity(self) -> CapacityError {
        match self {
            Self::Capacity(err) => err,
            Self::Construct { err, .. } => match err {},
        }
    }
}

impl<E> From<CapacityError> for VecError<E> {

    fn from(value: CapacityError) -> Self {
        Self::Capacity(value)
    }
}

impl From<VecError<Infallible>> for CapacityError {

    fn from(value: VecError<Infallible>) -> Self {
        value.into_capacity()
    }
}

impl<E: Debug> Debug for VecError<E> {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capacity(err) => f.debug_tuple("Capacity").field(err).finish(),
            Self::Construct { index, err } => f
                .debug_struct("Construct")
                .field("index", index)
                .field("err", err)
                .finish(),
        }
    }
}

impl<E: Display> Display for VecError<E> {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capacity(err) => write!(f, "{}", err),
            Self::Construct { index, err } => {
                write!(f, "failed to construct element {}: {}", index, err)
            },
        }
    }
}

impl<E> core::error::Error for VecError<E>
    where
        E: core::error::Error + 'static,
{

    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Capacity(err) => Some(err),
            Self::Construct { err, .. } => Some(err),
        }
    }
}
