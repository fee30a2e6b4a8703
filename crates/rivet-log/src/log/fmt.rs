use compact_str::CompactString;

use rivet_mem::Vector;

use super::*;

/// Layout of a single log line: a sequence of literal text segments and
/// message placeholders, each with an optional color.
#[derive(Default)]
pub struct LogFmt {
    segments: Vector<SegmentSpec>,
}

impl LogFmt {

    /// The layout installed for `level` until it is replaced through
    /// [`LogFmtBuilder`].
    pub fn for_level(level: Level) -> Result<Self> {
        let mut fmt = Self::default();
        let mut builder = LogFmtBuilder::new(&mut fmt);
        let (tag, color) = match level {
            Level::Always => {
                builder.message(|spec| spec)?;
                return Ok(fmt)
            },
            Level::Error => ("error", Color::Red),
            Level::Warn => ("warn", Color::Yellow),
            Level::Info => ("info", Color::Green),
            Level::Debug => ("debug", Color::Blue),
            Level::Trace => ("trace", Color::Magenta),
        };
        builder
            .text(tag, |spec| spec.with_color_spec(|c| {
                c.set_fg(Some(color)).set_bold(true);
            }))?
            .text(": ", |spec| spec)?
            .message(|spec| spec)?;
        Ok(fmt)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn clear(&mut self) {
        self.segments.clear();
    }

    /// Writes one line, terminated by a newline.
    pub fn write_line(
        &self,
        out: &mut impl WriteColor,
        msg: core::fmt::Arguments,
    ) -> Result<()>
    {
        for segment in self {
            match segment {
                SegmentSpec::Message(log_spec) => {
                    if let Some(color_spec) = &log_spec.color_spec {
                        out.set_color(color_spec)?;
                        write!(out, "{}", msg)?;
                        out.reset()?;
                    } else {
                        write!(out, "{}", msg)?;
                    }
                },
                SegmentSpec::Text(text, log_spec) => {
                    if let Some(color_spec) = &log_spec.color_spec {
                        out.set_color(color_spec)?;
                        out.write_all(text.as_bytes())?;
                        out.reset()?;
                    } else {
                        out.write_all(text.as_bytes())?;
                    }
                },
            }
        }
        out.write_all(b"\n")?;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a LogFmt {

    type Item = &'a SegmentSpec;
    type IntoIter = core::slice::Iter<'a, SegmentSpec>;

    fn into_iter(self) -> Self::IntoIter {
        (&self.segments).into_iter()
    }
}

#[derive(Default, Clone, Debug)]
pub struct LogSpec {
    pub color_spec: Option<ColorSpec>,
}

impl LogSpec {

    #[inline(always)]
    pub fn with_color_spec(mut self, f: impl FnOnce(&mut ColorSpec)) -> Self {
        let color_spec = self.color_spec.insert(ColorSpec::new());
        f(color_spec);
        self
    }
}

#[derive(Clone, Debug)]
pub enum SegmentSpec {
    Message(LogSpec),
    Text(CompactString, LogSpec),
}

/// Replaces the segments of a [`LogFmt`].
///
/// Creating the builder clears the format it edits.
pub struct LogFmtBuilder<'a> {
    fmt: &'a mut LogFmt,
}

impl<'a> LogFmtBuilder<'a> {

    #[inline(always)]
    pub fn new(fmt: &'a mut LogFmt) -> Self {
        fmt.clear();
        Self {
            fmt,
        }
    }

    #[inline(always)]
    pub fn message(&mut self, f: impl FnOnce(LogSpec) -> LogSpec) -> Result<&mut Self> {
        self.fmt.segments.push(SegmentSpec::Message(f(Default::default())))?;
        Ok(self)
    }

    #[inline(always)]
    pub fn text(&mut self, text: &str, f: impl FnOnce(LogSpec) -> LogSpec) -> Result<&mut Self> {
        self.fmt.segments.push(SegmentSpec::Text(CompactString::new(text), f(Default::default())))?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {

    use termcolor::Buffer;

    use super::*;

    fn render(fmt: &LogFmt, msg: core::fmt::Arguments) -> String {
        let mut buf = Buffer::no_color();
        fmt.write_line(&mut buf, msg).unwrap();
        String::from_utf8(buf.into_inner()).unwrap()
    }

    #[test]
    fn level_layouts() {
        let fmt = LogFmt::for_level(Level::Warn).unwrap();
        assert_eq!(fmt.len(), 3);
        assert_eq!(render(&fmt, format_args!("disk at {}%", 91)), "warn: disk at 91%\n");

        let fmt = LogFmt::for_level(Level::Always).unwrap();
        assert_eq!(render(&fmt, format_args!("plain")), "plain\n");
    }

    #[test]
    fn colored_segments_are_reset() {
        let fmt = LogFmt::for_level(Level::Error).unwrap();
        let mut buf = Buffer::ansi();
        fmt.write_line(&mut buf, format_args!("boom")).unwrap();
        let line = String::from_utf8(buf.into_inner()).unwrap();
        assert!(line.starts_with("\x1b["));
        assert!(line.contains("error\x1b[0m: boom"));
        assert!(line.ends_with("boom\n"));
    }

    #[test]
    fn builder_replaces_segments() {
        let mut fmt = LogFmt::for_level(Level::Error).unwrap();
        LogFmtBuilder::new(&mut fmt)
            .text("[", |spec| spec).unwrap()
            .message(|spec| spec.with_color_spec(|c| { c.set_fg(Some(Color::Cyan)); })).unwrap()
            .text("]", |spec| spec).unwrap();
        assert_eq!(fmt.len(), 3);
        assert!(matches!((&fmt).into_iter().nth(1), Some(SegmentSpec::Message(spec)) if spec.color_spec.is_some()));
        assert_eq!(render(&fmt, format_args!("x = {}", 1)), "[x = 1]\n");
    }

    #[test]
    fn empty_format_writes_bare_newline() {
        let mut fmt = LogFmt::for_level(Level::Info).unwrap();
        LogFmtBuilder::new(&mut fmt);
        assert!(fmt.is_empty());
        assert_eq!(render(&fmt, format_args!("ignored")), "\n");
    }
}
