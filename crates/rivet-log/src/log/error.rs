use rivet_mem::CapacityError;

#[derive(Debug)]
pub enum LogError {
    Io(std::io::Error),
    Capacity(CapacityError),
}

impl core::fmt::Display for LogError {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Io(_) => write!(f, "IO error"),
            Self::Capacity(_) => write!(f, "format segment storage error"),
        }
    }
}

impl core::error::Error for LogError {

    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Capacity(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for LogError {

    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<CapacityError> for LogError {

    fn from(value: CapacityError) -> Self {
        Self::Capacity(value)
    }
}
