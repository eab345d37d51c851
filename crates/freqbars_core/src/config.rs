use std::time::Duration;

pub const DEFAULT_LIMIT: i64 = 25;
pub const DEFAULT_BAR_CHAR: char = '█';
pub const DEFAULT_CHART_WIDTH: usize = 36;
pub const DEFAULT_TIME_STEP_MILLIS: u64 = 30;

/// Display settings for a whole run. Built and validated once by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Rows to show. Zero, negative, or at least the distinct count means all.
    pub limit: i64,
    pub bar_char: char,
    /// Cell width of the top-ranked bar.
    pub chart_width: usize,
    pub show_percentage: bool,
    pub time_step_millis: u64,
}

impl DisplayConfig {
    pub fn time_step(&self) -> Duration {
        Duration::from_millis(self.time_step_millis)
    }

    /// Number of rows to emit when `distinct` tokens are available.
    pub fn row_count(&self, distinct: usize) -> usize {
        match usize::try_from(self.limit) {
            Ok(limit) if limit > 0 => limit.min(distinct),
            _ => distinct,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            bar_char: DEFAULT_BAR_CHAR,
            chart_width: DEFAULT_CHART_WIDTH,
            show_percentage: false,
            time_step_millis: DEFAULT_TIME_STEP_MILLIS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_limit(limit: i64) -> DisplayConfig {
        DisplayConfig {
            limit,
            ..DisplayConfig::default()
        }
    }

    #[test]
    fn row_count_clamps_to_distinct() {
        assert_eq!(with_limit(2).row_count(5), 2);
        assert_eq!(with_limit(5).row_count(5), 5);
        assert_eq!(with_limit(9).row_count(5), 5);
    }

    #[test]
    fn non_positive_limit_shows_all() {
        assert_eq!(with_limit(0).row_count(4), 4);
        assert_eq!(with_limit(-1).row_count(4), 4);
        assert_eq!(with_limit(i64::MIN).row_count(4), 4);
    }
}
