/// Counters collected during one rebuild
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildStats {
    pub registry_rows: u64,
    pub emoji_pairs: u64,
    pub synthesized: u64,
    pub controls_skipped: u64,
    pub symbols_written: u64,
    pub keywords_written: u64,
    pub ranked_symbols: u64,
}

impl BuildStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_symbol(&mut self, priority: i64) {
        self.symbols_written += 1;
        if priority > 0 {
            self.ranked_symbols += 1;
        }
    }

    pub fn inc_controls(&mut self) {
        self.controls_skipped += 1;
    }

    pub fn inc_keywords(&mut self) {
        self.keywords_written += 1;
    }

    /// Rows written to `symbols` and `keywords` together
    pub fn rows_written(&self) -> u64 {
        self.symbols_written + self.keywords_written
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_zero() {
        let stats = BuildStats::new();
        assert_eq!(stats.registry_rows, 0);
        assert_eq!(stats.symbols_written, 0);
        assert_eq!(stats.keywords_written, 0);
        assert_eq!(stats.rows_written(), 0);
    }

    #[test]
    fn ranked_symbols_only_count_positive_priority() {
        let mut stats = BuildStats::new();
        stats.add_symbol(0);
        stats.add_symbol(8);
        stats.add_symbol(10);
        assert_eq!(stats.symbols_written, 3);
        assert_eq!(stats.ranked_symbols, 2);
    }

    #[test]
    fn mixed_operations() {
        let mut stats = BuildStats::new();
        stats.add_symbol(0);
        stats.inc_controls();
        stats.inc_keywords();
        stats.inc_keywords();
        assert_eq!(stats.controls_skipped, 1);
        assert_eq!(stats.rows_written(), 3);
    }
}
