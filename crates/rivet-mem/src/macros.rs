#[macro_export]
macro_rules! const_assert {
    ($check:expr $(,$msg:tt)*) => {
        const _: () = assert!($check $(,$msg)*);
    };
}

/// Builds a [`Vector`](crate::Vector) from a literal list, like `vec!`.
///
/// Expands to a `Result<Vector<T>, CapacityError>`:
///
/// ```
/// use rivet_mem::vector;
///
/// let v = vector![1, 2, 3].unwrap();
/// assert_eq!(v, [1, 2, 3]);
///
/// let zeros = vector![0u8; 4].unwrap();
/// assert_eq!(zeros.capacity(), 4);
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        ::core::result::Result::<_, $crate::CapacityError>::Ok($crate::Vector::new())
    };
    ($elem:expr; $n:expr) => {
        $crate::Vector::with_len($n, &$elem)
    };
    ($($elem:expr),+ $(,)?) => {
        $crate::Vector::from_slice(&[$($elem),+])
    };
}
