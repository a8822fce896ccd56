//! Sector labels and the two selectable label sources

use crate::settings::WheelConfig;

/// Which configured label list feeds the wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelSource {
    #[default]
    Players,
    Presents,
}

impl LabelSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelSource::Players => "players",
            LabelSource::Presents => "presents",
        }
    }

    /// Labels for this source from a configuration
    pub fn labels<'a>(&self, config: &'a WheelConfig) -> &'a [String] {
        match self {
            LabelSource::Players => &config.players,
            LabelSource::Presents => &config.presents,
        }
    }

    /// Mutable label list for this source
    pub fn labels_mut<'a>(&self, config: &'a mut WheelConfig) -> &'a mut Vec<String> {
        match self {
            LabelSource::Players => &mut config.players,
            LabelSource::Presents => &mut config.presents,
        }
    }
}

/// Split multi-line text into labels.
///
/// The whole text is trimmed first, then split on newlines; a trailing `\r`
/// is dropped from each line. Empty text yields a single blank entry.
pub fn parse_lines(text: &str) -> Vec<String> {
    text.trim()
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

/// Join labels for display in a multi-line field
pub fn format_lines(labels: &[String]) -> String {
    labels.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lines() {
        assert_eq!(parse_lines("a\r\nb\n"), vec!["a", "b"]);
        assert_eq!(parse_lines("  Alice\nBob  "), vec!["Alice", "Bob"]);
        // interior blank lines survive
        assert_eq!(parse_lines("a\n\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_parse_empty_is_single_blank() {
        assert_eq!(parse_lines(""), vec![""]);
        assert_eq!(parse_lines("   \n "), vec![""]);
    }

    #[test]
    fn test_source_labels() {
        let mut config = WheelConfig {
            players: vec!["p".into()],
            presents: vec!["x".into(), "y".into()],
            ..Default::default()
        };
        assert_eq!(LabelSource::Players.labels(&config), ["p"]);
        assert_eq!(LabelSource::Presents.labels(&config).len(), 2);

        LabelSource::Players.labels_mut(&mut config).push("q".into());
        assert_eq!(config.players, vec!["p", "q"]);
        assert_eq!(format_lines(&config.players), "p\nq");
    }
}
