mod support;
mod cursor;
