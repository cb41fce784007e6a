//! Full-text search over an on-disk corpus.

mod common;

use assert2::check;
use common::*;
use ids_docs_mcp::search;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn test_matches_carry_file_line_and_context(sample_docs: DocsFixture) {
    let results = search(sample_docs.root(), "--iress-color-primary", false);

    check!(results.len() == 2);
    check!(results.iter().all(|r| r.file.path() == "foundations-colours.md"));
    check!(results[0].line_number == 5);
    check!(results[1].line_number == 9);
    check!(results[0].line_text == "Use `--iress-color-primary` for primary actions.");
    check!(results[0].context_text == "\nUse `--iress-color-primary` for primary actions.\n");
}

#[rstest]
fn test_results_follow_index_then_line_order(sample_docs: DocsFixture) {
    let results = search(sample_docs.root(), "button", false);

    let order: Vec<(&str, usize)> = results
        .iter()
        .map(|r| (r.file.path(), r.line_number))
        .collect();
    let mut sorted = order.clone();
    sorted.sort();

    check!(!results.is_empty());
    check!(order == sorted);
}

#[rstest]
#[case("IressButton")]
#[case("accessib")]
#[case("SPACING")]
fn test_case_insensitive_finds_at_least_as_much(sample_docs: DocsFixture, #[case] query: &str) {
    let sensitive = search(sample_docs.root(), query, true);
    let insensitive = search(sample_docs.root(), query, false);

    check!(insensitive.len() >= sensitive.len());
    for hit in &sensitive {
        check!(insensitive.contains(hit));
    }
}

#[rstest]
fn test_case_sensitive_excludes_other_cases(sample_docs: DocsFixture) {
    check!(search(sample_docs.root(), "BUTTONS", true).is_empty());
    check!(!search(sample_docs.root(), "BUTTONS", false).is_empty());
}

#[rstest]
fn test_context_is_clamped_at_file_edges(empty_docs: DocsFixture) {
    empty_docs.create_file("components-card-docs.md", "needle first\nmiddle\nneedle last");

    let results = search(empty_docs.root(), "needle", false);
    check!(results.len() == 2);
    check!(results[0].context_text == "needle first\nmiddle");
    check!(results[1].context_text == "middle\nneedle last");
}

#[rstest]
fn test_unreadable_file_is_skipped(empty_docs: DocsFixture) {
    empty_docs
        .create_file("components-alpha-docs.md", "shared term")
        .create_file("components-gamma-docs.md", "shared term");
    std::fs::write(
        empty_docs.root().join("components-beta-docs.md"),
        [0xff, 0xfe, 0xfd, b's', b'h', b'a', b'r', b'e', b'd'],
    )
    .unwrap();

    let results = search(empty_docs.root(), "shared", false);
    let files: Vec<&str> = results.iter().map(|r| r.file.path()).collect();
    check!(files == vec!["components-alpha-docs.md", "components-gamma-docs.md"]);
}

#[rstest]
fn test_missing_root_yields_no_results() {
    check!(search(std::path::Path::new("/nonexistent/ids/docs"), "button", false).is_empty());
}

#[rstest]
fn test_tool_caps_rendered_results(empty_docs: DocsFixture) {
    let body = (1..=20)
        .map(|n| format!("needle {}", n))
        .collect::<Vec<_>>()
        .join("\n");
    empty_docs.create_file("components-haystack-docs.md", &body);

    let text = empty_docs.call("search_ids_docs", json!({"query": "needle"}));

    check!(text.starts_with("Found 20 matches for 'needle' (showing first 15):"));
    check!(text.contains("15. components-haystack-docs.md (line 15)"));
    check!(!text.contains("16. components-haystack-docs.md"));
}

#[rstest]
fn test_tool_reports_no_results_with_tips(sample_docs: DocsFixture) {
    let text = sample_docs.call(
        "search_ids_docs",
        json!({"query": "zzz-not-here", "case_sensitive": true}),
    );

    check!(text.starts_with("No results found for 'zzz-not-here'."));
    check!(text.contains("Try again without case_sensitive"));
}

#[rstest]
fn test_tool_rejects_empty_query(sample_docs: DocsFixture) {
    let text = sample_docs.call("search_ids_docs", json!({"query": ""}));
    check!(text == "Please provide a search query.");
}
