use std::{
    io::{self, Write},
    process::ExitCode,
};

use core::convert::Infallible;

use rivet_mem::{vector, Allocator, CapacityError, Cursor, Vector, VecError};

use rivet_log::{debug, error, info};

#[derive(Debug)]
enum DemoError {
    Vec(CapacityError),
    NotFound(i32),
    Io(io::Error),
}

impl core::fmt::Display for DemoError {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Vec(err) => write!(f, "vector error: {}", err),
            Self::NotFound(value) => write!(f, "value {} not found", value),
            Self::Io(_) => write!(f, "failed to write output"),
        }
    }
}

impl core::error::Error for DemoError {

    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Vec(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<CapacityError> for DemoError {

    fn from(value: CapacityError) -> Self {
        Self::Vec(value)
    }
}

impl From<io::Error> for DemoError {

    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Linear scan from `begin` to `end`.
fn find<T: PartialEq, A: Allocator>(v: &Vector<T, A>, value: &T) -> Option<Cursor<T>> {
    let end = v.end();
    let mut pos = v.begin();
    while pos != end {
        if unsafe { pos.get() } == value {
            return Some(pos)
        }
        pos.inc();
    }
    None
}

fn insert_before<A: Allocator>(
    v: &mut Vector<i32, A>,
    before: i32,
    value: i32,
) -> Result<(), DemoError>
{
    let pos = find(v, &before).ok_or(DemoError::NotFound(before))?;
    debug!("inserting {} at index {}", value, pos - v.begin());
    v.emplace(pos, || Ok::<_, Infallible>(value))
        .map_err(VecError::into_capacity)?;
    Ok(())
}

fn run(out: &mut impl Write) -> Result<Vector<i32>, DemoError> {
    let mut v = vector![1, 2, 3, 4, 6, 7, 9]?;
    info!("built {:?} with capacity {}", v, v.capacity());
    insert_before(&mut v, 6, 5)?;
    insert_before(&mut v, 9, 8)?;
    info!("now {:?} with capacity {}", v, v.capacity());
    for value in &v {
        writeln!(out, "{}", value)?;
    }
    Ok(v)
}

fn main() -> ExitCode {
    if let Err(err) = rivet_log::init() {
        eprintln!("failed to initialize logger: {}", err);
    }
    let stdout = io::stdout();
    match run(&mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn prints_one_through_nine() {
        let mut out = Vec::new();
        let v = run(&mut out).unwrap();
        assert_eq!(v, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let expected: String = (1..=9).map(|i| format!("{}\n", i)).collect();
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn find_scans_in_order() {
        let v = vector![4, 7, 7, 1].unwrap();
        let pos = find(&v, &7).unwrap();
        assert_eq!(pos - v.begin(), 1);
        assert!(find(&v, &3).is_none());
        assert!(find(&Vector::<i32>::new(), &0).is_none());
    }

    #[test]
    fn missing_anchor_is_reported() {
        let mut v = vector![1, 2].unwrap();
        let err = insert_before(&mut v, 5, 4).unwrap_err();
        assert!(matches!(err, DemoError::NotFound(5)));
        assert_eq!(err.to_string(), "value 5 not found");
        assert_eq!(v, [1, 2]);
    }

    #[test]
    fn insert_before_front_and_back() {
        let mut v = vector![2, 3].unwrap();
        insert_before(&mut v, 2, 1).unwrap();
        insert_before(&mut v, 3, 0).unwrap();
        assert_eq!(v, [1, 2, 0, 3]);
    }
}
