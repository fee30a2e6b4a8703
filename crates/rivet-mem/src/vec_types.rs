mod error;
mod cursor;
mod vector;

pub use error::VecError;
pub use cursor::Cursor;
pub use vector::Vector;
