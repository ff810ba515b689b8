// Layout configuration for the crossword engine.
// Defaults reproduce the canonical layout; every knob is a visual heuristic.

/// Block building and merging heuristics.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// A crossing word may hang left of the anchor by at most
    /// `word_len / max_overhang_divisor` cells (default 2, i.e. half the word).
    pub max_overhang_divisor: usize,

    /// Keep the anchor's first row free of crossings (default true).
    pub reserve_anchor_head: bool,

    /// Extra blank columns between two blocks whose anchors are both words (default 1).
    pub word_gap: i32,
}

impl LayoutConfig {
    /// Largest allowed left overhang for a crossing word of `word_len` characters.
    pub fn max_overhang(&self, word_len: usize) -> usize {
        word_len / self.max_overhang_divisor.max(1)
    }

    /// First row a crossing may use.
    pub fn first_crossing_row(&self) -> usize {
        usize::from(self.reserve_anchor_head)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_overhang_divisor: 2,
            reserve_anchor_head: true,
            word_gap: 1,
        }
    }
}

/// Master configuration for one build.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub layout: LayoutConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = LayoutConfig::default();
        assert_eq!(config.max_overhang(5), 2);
        assert_eq!(config.max_overhang(1), 0);
        assert_eq!(config.first_crossing_row(), 1);
        assert_eq!(config.word_gap, 1);
    }

    #[test]
    fn test_zero_divisor_does_not_panic() {
        let config = LayoutConfig {
            max_overhang_divisor: 0,
            ..LayoutConfig::default()
        };
        assert_eq!(config.max_overhang(4), 4);
    }

    #[test]
    fn test_unreserved_head() {
        let config = LayoutConfig {
            reserve_anchor_head: false,
            ..LayoutConfig::default()
        };
        assert_eq!(config.first_crossing_row(), 0);
    }
}
