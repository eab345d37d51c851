use std::sync::Once;

use freqbars_core::{chart_rows, render, Chart, DisplayConfig, FrequencyTable};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(freqbars_logging::initialize_for_tests);
}

fn table_of(tokens: &[&str]) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for token in tokens {
        table.increment(token);
    }
    table
}

fn config(limit: i64, width: usize) -> DisplayConfig {
    DisplayConfig {
        limit,
        bar_char: '#',
        chart_width: width,
        show_percentage: false,
        time_step_millis: 0,
    }
}

#[test]
fn empty_table_renders_nothing() {
    init_logging();
    let table = FrequencyTable::new();
    for limit in [-1, 0, 3] {
        let chart = render(&table.snapshot(), &config(limit, 10));
        assert_eq!(chart, Chart::default());
        assert_eq!(chart.rows, 0);
    }
}

#[test]
fn top_bar_spans_chart_width_and_others_scale() {
    init_logging();
    let table = table_of(&["a", "a", "a", "b"]);
    let rows = chart_rows(&table.snapshot(), &config(-1, 10));

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].token, "a");
    assert_eq!(rows[0].bar_len, 10);
    assert_eq!(rows[0].percentage, 0.75);
    assert_eq!(rows[1].token, "b");
    assert_eq!(rows[1].bar_len, 3);
    assert_eq!(rows[1].percentage, 0.25);
}

#[test]
fn top_bar_is_exact_for_awkward_ratios() {
    init_logging();
    for top in 1..50u64 {
        let mut table = FrequencyTable::new();
        for _ in 0..top {
            table.increment("top");
        }
        for _ in 0..7 {
            table.increment("rest");
        }
        let rows = chart_rows(&table.snapshot(), &config(1, 36));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].bar_len, 36, "top count {top}");
    }
}

#[test]
fn rows_are_right_aligned_to_longest_token() {
    init_logging();
    let table = table_of(&["return", "return", "if", "go", "go", "go"]);
    let chart = render(&table.snapshot(), &config(-1, 6));

    let expected = concat!(
        "    go ######\n",
        "return ####\n",
        "    if ##\n",
    );
    assert_eq!(chart.text, expected);
    assert_eq!(chart.rows, 3);
}

#[test]
fn field_width_counts_codepoints_not_bytes() {
    init_logging();
    let table = table_of(&["é", "é", "ab"]);
    let chart = render(&table.snapshot(), &config(-1, 4));

    assert_eq!(chart.text, " é ####\nab ##\n");
}

#[test]
fn percentage_is_appended_with_two_decimals() {
    init_logging();
    let table = table_of(&["x", "x", "y"]);
    let mut cfg = config(-1, 3);
    cfg.show_percentage = true;
    cfg.bar_char = '█';

    let chart = render(&table.snapshot(), &cfg);
    assert_eq!(chart.text, "x ███ 66.67%\ny █ 33.33%\n");
}

#[test]
fn limit_truncates_rows() {
    init_logging();
    let table = table_of(&["a", "a", "a", "b", "b", "c", "d"]);
    let snapshot = table.snapshot();

    assert_eq!(render(&snapshot, &config(1, 8)).rows, 1);
    assert_eq!(render(&snapshot, &config(2, 8)).rows, 2);
    assert_eq!(render(&snapshot, &config(4, 8)).rows, 4);
    assert_eq!(render(&snapshot, &config(10, 8)).rows, 4);
    assert_eq!(render(&snapshot, &config(0, 8)).rows, 4);
    assert_eq!(render(&snapshot, &config(-5, 8)).rows, 4);
}

#[test]
fn limited_chart_aligns_to_displayed_tokens_only() {
    init_logging();
    let table = table_of(&["ab", "ab", "abcdefgh"]);
    let chart = render(&table.snapshot(), &config(1, 2));

    assert_eq!(chart.text, "ab ##\n");
}

#[test]
fn ties_keep_first_occurrence_order() {
    init_logging();
    let table = table_of(&["zeta", "alpha", "mid", "alpha", "zeta", "mid"]);
    let rows = chart_rows(&table.snapshot(), &config(-1, 4));

    let tokens: Vec<_> = rows.iter().map(|row| row.token).collect();
    assert_eq!(tokens, vec!["zeta", "alpha", "mid"]);
    assert!(rows.iter().all(|row| row.bar_len == 4));
}

#[test]
fn higher_count_overtakes_earlier_token() {
    init_logging();
    let table = table_of(&["first", "second", "second"]);
    let rows = chart_rows(&table.snapshot(), &config(-1, 10));

    assert_eq!(rows[0].token, "second");
    assert_eq!(rows[1].token, "first");
    assert_eq!(rows[1].bar_len, 5);
}

#[test]
fn render_is_idempotent() {
    init_logging();
    let table = table_of(&["q", "w", "e", "q", "w", "q"]);
    let mut cfg = config(-1, 12);
    cfg.show_percentage = true;

    let first = render(&table.snapshot(), &cfg);
    let second = render(&table.snapshot(), &cfg);
    assert_eq!(first, second);
}

#[test]
fn no_bar_exceeds_chart_width() {
    init_logging();
    let table = table_of(&["a", "b", "b", "c", "c", "c", "d", "d", "d", "d"]);
    let rows = chart_rows(&table.snapshot(), &config(-1, 17));

    assert_eq!(rows[0].bar_len, 17);
    assert!(rows.iter().all(|row| row.bar_len <= 17));
    assert!(rows.windows(2).all(|w| w[0].bar_len >= w[1].bar_len));
}
