mod error;
mod directives;
pub mod fmt;

use std::sync::{OnceLock, Mutex, MutexGuard, PoisonError};

use core::str::FromStr;

use termcolor::{WriteColor, StandardStream, ColorChoice};

pub use termcolor::{ColorSpec, Color};

pub use error::LogError;
pub use directives::Directives;
pub use fmt::{LogFmt, LogFmtBuilder, LogSpec, SegmentSpec};

pub type Result<T> = core::result::Result<T, LogError>;

#[repr(i8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Level {
    Always = -1,
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl FromStr for Level {

    type Err = ();

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("error") {
            Ok(Self::Error)
        } else if s.eq_ignore_ascii_case("warn") {
            Ok(Self::Warn)
        } else if s.eq_ignore_ascii_case("info") {
            Ok(Self::Info)
        } else if s.eq_ignore_ascii_case("debug") {
            Ok(Self::Debug)
        } else if s.eq_ignore_ascii_case("trace") {
            Ok(Self::Trace)
        } else {
            Err(())
        }
    }
}

struct Logger {
    stderr: StandardStream,
    always_fmt: LogFmt,
    error_fmt: LogFmt,
    warn_fmt: LogFmt,
    info_fmt: LogFmt,
    debug_fmt: LogFmt,
    trace_fmt: LogFmt,
    directives: Directives,
}

impl Logger {

    fn new(directives: Directives) -> Result<Self> {
        Ok(Self {
            stderr: StandardStream::stderr(ColorChoice::Auto),
            always_fmt: LogFmt::for_level(Level::Always)?,
            error_fmt: LogFmt::for_level(Level::Error)?,
            warn_fmt: LogFmt::for_level(Level::Warn)?,
            info_fmt: LogFmt::for_level(Level::Info)?,
            debug_fmt: LogFmt::for_level(Level::Debug)?,
            trace_fmt: LogFmt::for_level(Level::Trace)?,
            directives,
        })
    }

    #[inline(always)]
    fn fmt_mut(&mut self, level: Level) -> &mut LogFmt {
        match level {
            Level::Always => &mut self.always_fmt,
            Level::Error => &mut self.error_fmt,
            Level::Warn => &mut self.warn_fmt,
            Level::Info => &mut self.info_fmt,
            Level::Debug => &mut self.debug_fmt,
            Level::Trace => &mut self.trace_fmt,
        }
    }

    fn log(&mut self, target: &str, level: Level, msg: core::fmt::Arguments) -> Result<bool> {
        if !self.directives.enabled(target, level) {
            return Ok(false)
        }
        let fmt = match level {
            Level::Always => &self.always_fmt,
            Level::Error => &self.error_fmt,
            Level::Warn => &self.warn_fmt,
            Level::Info => &self.info_fmt,
            Level::Debug => &self.debug_fmt,
            Level::Trace => &self.trace_fmt,
        };
        let mut stderr = self.stderr.lock();
        fmt.write_line(&mut stderr, msg)?;
        Ok(true)
    }
}

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

#[inline(always)]
fn logger() -> Option<MutexGuard<'static, Logger>> {
    LOGGER
        .get()
        .map(|logger| logger.lock().unwrap_or_else(PoisonError::into_inner))
}

/// Installs the global logger configured from `RUST_LOG`.
///
/// Returns `Ok(false)` when a logger was already installed.
pub fn init() -> Result<bool> {
    init_with(Directives::from_env())
}

/// Installs the global logger with explicit directives.
///
/// Returns `Ok(false)` when a logger was already installed.
pub fn init_with(directives: Directives) -> Result<bool> {
    if LOGGER.get().is_some() {
        return Ok(false)
    }
    let logger = Logger::new(directives)?;
    Ok(LOGGER.set(Mutex::new(logger)).is_ok())
}

#[inline(always)]
pub fn is_initialized() -> bool {
    LOGGER.get().is_some()
}

/// Replaces the line layout of `level`.
///
/// Returns `Ok(false)` without calling `f` when no logger is installed.
pub fn set_fmt(
    level: Level,
    f: impl FnOnce(&mut LogFmtBuilder) -> Result<()>,
) -> Result<bool>
{
    let Some(mut logger) = logger() else {
        return Ok(false)
    };
    let mut builder = LogFmtBuilder::new(logger.fmt_mut(level));
    f(&mut builder)?;
    Ok(true)
}

#[inline(always)]
pub fn error_fmt(f: impl FnOnce(&mut LogFmtBuilder) -> Result<()>) -> Result<bool> {
    set_fmt(Level::Error, f)
}

#[inline(always)]
pub fn warn_fmt(f: impl FnOnce(&mut LogFmtBuilder) -> Result<()>) -> Result<bool> {
    set_fmt(Level::Warn, f)
}

#[inline(always)]
pub fn info_fmt(f: impl FnOnce(&mut LogFmtBuilder) -> Result<()>) -> Result<bool> {
    set_fmt(Level::Info, f)
}

#[inline(always)]
pub fn debug_fmt(f: impl FnOnce(&mut LogFmtBuilder) -> Result<()>) -> Result<bool> {
    set_fmt(Level::Debug, f)
}

#[inline(always)]
pub fn trace_fmt(f: impl FnOnce(&mut LogFmtBuilder) -> Result<()>) -> Result<bool> {
    set_fmt(Level::Trace, f)
}

/// Whether a line at `level` from `target` would be written.
#[inline(always)]
pub fn enabled(target: &str, level: Level) -> bool {
    logger().is_some_and(|logger| logger.directives.enabled(target, level))
}

/// Writes one line, returning whether it passed the filter.
///
/// Logging before [`init`] writes nothing and returns `Ok(false)`.
#[inline(always)]
pub fn log(target: &str, level: Level, args: core::fmt::Arguments) -> Result<bool> {
    match logger() {
        Some(mut logger) => logger.log(target, level, args),
        None => Ok(false),
    }
}

#[macro_export]
macro_rules! always {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Always, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! error {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Error, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! warn {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Warn, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! info {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Info, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! debug {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Debug, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[macro_export]
macro_rules! trace {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::log(module_path!(), $crate::Level::Trace, format_args!($fmt, $($arg),*))
            .unwrap_or(false)
    };
}

#[cfg(test)]
mod tests {

    use core::error::Error;

    use rivet_mem::CapacityError;

    use super::*;

    #[test]
    fn level_parsing_and_order() {
        assert_eq!("WARN".parse::<Level>(), Ok(Level::Warn));
        assert_eq!("trace".parse::<Level>(), Ok(Level::Trace));
        assert_eq!("always".parse::<Level>(), Err(()));
        assert!(Level::Always < Level::Error);
        assert!(Level::Error < Level::Warn);
        assert!(Level::Debug < Level::Trace);
    }

    // the only test touching the global logger
    #[test]
    fn global_lifecycle() {
        assert!(!is_initialized());
        assert_eq!(log("tests", Level::Error, format_args!("dropped")).unwrap(), false);
        assert!(!error!("dropped {}", 2));
        assert_eq!(error_fmt(|_| Ok(())).unwrap(), false);
        assert!(!enabled("tests", Level::Always));

        assert!(init_with(Directives::parse("warn,chatty=trace")).unwrap());
        assert!(!init_with(Directives::default()).unwrap());
        assert!(!init().unwrap());
        assert!(is_initialized());

        assert!(enabled("chatty::inner", Level::Trace));
        assert!(!enabled("quiet", Level::Info));
        assert!(log("quiet", Level::Warn, format_args!("written")).unwrap());
        assert!(!log("quiet", Level::Info, format_args!("filtered")).unwrap());
        assert!(log("quiet", Level::Always, format_args!("always written")).unwrap());

        assert!(warn_fmt(|builder| {
            builder
                .text("W ", |spec| spec)?
                .message(|spec| spec)?;
            Ok(())
        }).unwrap());
        assert!(warn!("custom layout"));
    }

    #[test]
    fn error_sources() {
        let err = LogError::from(CapacityError::AllocFailed { new_capacity: 4 });
        assert_eq!(err.to_string(), "format segment storage error");
        assert!(err.source().is_some());
        let err = LogError::from(std::io::Error::other("closed"));
        assert_eq!(err.to_string(), "IO error");
        assert_eq!(err.source().map(|e| e.to_string()), Some("closed".to_string()));
    }
}
