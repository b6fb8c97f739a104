//! Pipe table tests

use crate::common::{md_to_html, md_to_html_with};
use insta::assert_snapshot;
use mdbridge_convert::{convert, scan, BlockKind, ConversionConfig};

const TABLE: &str = "| Name | Age |\n|------|-----|\n| Ann | 30 |\n| Bob | 41 |";

#[test]
fn test_table_renders_head_and_body() {
    assert_snapshot!(md_to_html(TABLE), @r#"
    <table>
    <thead>
    <tr><th>Name</th><th>Age</th></tr>
    </thead>
    <tbody>
    <tr><td>Ann</td><td>30</td></tr>
    <tr><td>Bob</td><td>41</td></tr>
    </tbody>
    </table>
    "#);
}

#[test]
fn test_table_disabled_renders_nothing() {
    let config = ConversionConfig {
        enable_tables: false,
        ..ConversionConfig::default()
    };
    let result = convert(TABLE, &config).unwrap();
    assert!(!result.output.contains("<table"));
    assert_eq!(result.output, "");
    // Still scanned, so it still counts.
    assert_eq!(result.stats.table_count, 1);
}

#[test]
fn test_alignment_row_is_skipped() {
    let html = md_to_html("| L | R |\n|:---|---:|\n| a | b |");
    assert!(!html.contains("---"));
    assert!(html.contains("<tr><td>a</td><td>b</td></tr>"));
}

#[test]
fn test_header_only_table_has_no_body() {
    assert_eq!(
        md_to_html("| Only | Header |"),
        "<table>\n<thead>\n<tr><th>Only</th><th>Header</th></tr>\n</thead>\n</table>\n"
    );
}

#[test]
fn test_cells_get_inline_formatting() {
    let html = md_to_html("| **bold** | [link](/x) |\n| --- | --- |\n| `code` | ~~gone~~ |");
    assert!(html.contains("<th><strong>bold</strong></th><th><a href=\"/x\">link</a></th>"));
    assert!(html.contains("<td><code>code</code></td><td><del>gone</del></td>"));
}

#[test]
fn test_table_closed_by_first_non_pipe_line() {
    let blocks = scan("| a |\n| b |\nafter\n| c |");
    let kinds: Vec<_> = blocks.iter().map(|b| b.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![BlockKind::Table, BlockKind::Paragraph, BlockKind::Table]
    );
    assert_eq!(blocks[0].text, "| a |\n| b |");
}

#[test]
fn test_table_at_end_of_input_is_flushed() {
    let blocks = scan("intro\n| x | y |");
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[1].kind, BlockKind::Table);
}

#[test]
fn test_table_closes_open_list() {
    assert_eq!(
        md_to_html("- item\n| a |"),
        "<ul>\n<li>item</li>\n</ul>\n<table>\n<thead>\n<tr><th>a</th></tr>\n</thead>\n</table>\n"
    );
}

#[test]
fn test_fence_closes_table() {
    let blocks = scan("| a |\n```\ncode\n```");
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].kind, BlockKind::Table);
    assert_eq!(
        blocks[1].kind,
        BlockKind::CodeBlock {
            language: String::new()
        }
    );

    let config = ConversionConfig::default();
    assert!(md_to_html_with("| a |\n```\ncode\n```", &config)
        .ends_with("<pre><code>code</code></pre>\n"));
}
