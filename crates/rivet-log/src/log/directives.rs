use core::str::FromStr;

use compact_str::CompactString;

use rustc_hash::FxHashMap;

use super::Level;

/// Parsed `RUST_LOG` style filter.
///
/// A bare level sets the base level, `target=level` sets the level of a
/// module path and everything below it. Unknown levels are skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directives {
    target_levels: FxHashMap<CompactString, Level>,
    base_level: Level,
}

impl Default for Directives {

    fn default() -> Self {
        Self {
            target_levels: FxHashMap::default(),
            base_level: Level::Error,
        }
    }
}

impl Directives {

    pub fn parse(s: &str) -> Self {
        let mut directives = Self::default();
        for arg in s.split(',') {
            let (target, level) = match arg.find('=') {
                Some(i) => (Some(arg[..i].trim()), arg[i + 1..].trim()),
                None => (None, arg.trim()),
            };
            let Ok(level) = Level::from_str(level) else {
                continue
            };
            match target {
                Some(target) if !target.is_empty() => {
                    let entry = directives.target_levels
                        .entry(CompactString::new(target))
                        .or_insert(level);
                    *entry = (*entry).min(level);
                },
                Some(_) => {},
                None => directives.base_level = level,
            }
        }
        directives
    }

    /// Reads `RUST_LOG`, falling back to the defaults when it is unset.
    pub fn from_env() -> Self {
        std::env::var("RUST_LOG")
            .map(|env| Self::parse(&env))
            .unwrap_or_default()
    }

    #[inline(always)]
    pub fn base_level(&self) -> Level {
        self.base_level
    }

    /// The most verbose level enabled for `target`.
    ///
    /// The closest `::` separated prefix with a directive decides, the base
    /// level applies when none has one.
    pub fn level_for(&self, target: &str) -> Level {
        let mut substr = target;
        if let Some(&level) = self.target_levels.get(substr) {
            return level
        }
        while let Some(i) = substr.rfind("::") {
            substr = &substr[..i];
            if let Some(&level) = self.target_levels.get(substr) {
                return level
            }
        }
        self.base_level
    }

    #[inline(always)]
    pub fn enabled(&self, target: &str, level: Level) -> bool {
        level <= self.level_for(target)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn defaults_to_error() {
        let directives = Directives::parse("");
        assert_eq!(directives, Directives::default());
        assert_eq!(directives.level_for("any::module"), Level::Error);
        assert!(directives.enabled("any", Level::Error));
        assert!(!directives.enabled("any", Level::Warn));
    }

    #[test]
    fn base_and_targets() {
        let directives = Directives::parse(" info , rivet_demo = trace,rivet_mem::vec_types=warn");
        assert_eq!(directives.base_level(), Level::Info);
        assert_eq!(directives.level_for("rivet_demo"), Level::Trace);
        assert_eq!(directives.level_for("rivet_demo::scan"), Level::Trace);
        assert_eq!(directives.level_for("rivet_mem::vec_types::vector"), Level::Warn);
        assert_eq!(directives.level_for("rivet_mem"), Level::Info);
        assert_eq!(directives.level_for("rivet_demolition"), Level::Info);
    }

    #[test]
    fn most_restrictive_wins() {
        let directives = Directives::parse("app=debug,app=warn,app=trace");
        assert_eq!(directives.level_for("app"), Level::Warn);
    }

    #[test]
    fn unknown_levels_are_ignored() {
        let directives = Directives::parse("verbose,app=loud,=info,lib=DEBUG");
        assert_eq!(directives.base_level(), Level::Error);
        assert_eq!(directives.level_for("app"), Level::Error);
        assert_eq!(directives.level_for("lib"), Level::Debug);
    }

    #[test]
    fn always_is_never_filtered() {
        let directives = Directives::default();
        assert!(directives.enabled("quiet", Level::Always));
    }
}
