//! Confined resource reads and listings.

mod common;

use assert2::{check, let_assert};
use common::*;
use ids_docs_mcp::{DocsError, list_resources, read_resource};
use rstest::rstest;
use std::path::Path;

fn uri_for(root: &Path, relative: &str) -> String {
    format!("file://{}", root.join(relative).display())
}

#[rstest]
fn test_reads_document_inside_root(sample_docs: DocsFixture) {
    let uri = uri_for(sample_docs.root(), "components-button-docs.md");

    let_assert!(Ok(content) = read_resource(sample_docs.root(), &uri));
    check!(content.uri == uri);
    check!(content.mime_type == "text/markdown");
    check!(content.text == BUTTON_DOC);
}

#[rstest]
fn test_relative_paths_resolve_against_root(sample_docs: DocsFixture) {
    let_assert!(Ok(content) = read_resource(sample_docs.root(), "file://guidelines.md"));
    check!(content.text == GUIDELINES_DOC);
}

#[rstest]
#[case("/../outside.md")]
#[case("/./../../etc/passwd")]
#[case("/nested/../../outside.md")]
fn test_traversal_is_denied(sample_docs: DocsFixture, #[case] suffix: &str) {
    let uri = format!("file://{}{}", sample_docs.root().display(), suffix);

    let_assert!(Err(err) = read_resource(sample_docs.root(), &uri));
    check!(matches!(err, DocsError::AccessDenied));
    check!(err.to_string() == "Access denied: File is outside the docs directory");
}

#[rstest]
fn test_dot_segments_that_stay_inside_are_allowed(sample_docs: DocsFixture) {
    let uri = format!(
        "file://{}/nested/../components-table-docs.md",
        sample_docs.root().display()
    );
    let_assert!(Ok(content) = read_resource(sample_docs.root(), &uri));
    check!(content.text.starts_with("# Table"));
}

#[rstest]
fn test_backslash_traversal_is_denied(sample_docs: DocsFixture) {
    let_assert!(Err(err) = read_resource(sample_docs.root(), r"file://..\..\etc\passwd"));
    check!(matches!(err, DocsError::AccessDenied));
}

#[rstest]
fn test_absolute_path_outside_mock_root_is_denied() {
    let_assert!(Err(err) = read_resource(Path::new("/mock/docs"), "file:///etc/passwd"));
    check!(matches!(err, DocsError::AccessDenied));
    check!(err.is_security_violation());
}

#[cfg(unix)]
#[rstest]
fn test_symlink_escape_is_denied(empty_docs: DocsFixture) {
    let outside = tempfile::TempDir::new().unwrap();
    std::fs::write(outside.path().join("secret.md"), "secret").unwrap();
    std::os::unix::fs::symlink(
        outside.path().join("secret.md"),
        empty_docs.root().join("components-secret-docs.md"),
    )
    .unwrap();

    let uri = uri_for(empty_docs.root(), "components-secret-docs.md");
    let_assert!(Err(err) = read_resource(empty_docs.root(), &uri));
    check!(matches!(err, DocsError::AccessDenied));
}

#[rstest]
fn test_missing_file_inside_root_is_a_read_error(sample_docs: DocsFixture) {
    let uri = uri_for(sample_docs.root(), "components-missing-docs.md");

    let_assert!(Err(err) = read_resource(sample_docs.root(), &uri));
    check!(matches!(err, DocsError::ResourceRead { .. }));
    check!(err.to_string().starts_with("Failed to read resource"));
    check!(!err.is_security_violation());
}

#[rstest]
#[case("http://example.com/docs/a.md", "Unsupported protocol: http")]
#[case("https:///etc/passwd", "Unsupported protocol: https")]
fn test_non_file_scheme_is_rejected(
    sample_docs: DocsFixture,
    #[case] uri: &str,
    #[case] message: &str,
) {
    let_assert!(Err(err) = read_resource(sample_docs.root(), uri));
    check!(err.to_string() == message);
}

#[rstest]
fn test_list_resources_describes_every_document(sample_docs: DocsFixture) {
    let resources = list_resources(sample_docs.root());

    check!(resources.len() == 8);
    check!(resources.iter().all(|r| r.mime_type == "text/markdown"));
    check!(resources.iter().all(|r| r.uri.starts_with("file://")));
    check!(resources[0].name == "components-button-docs.md");

    // Every listed URI is readable through the same confinement rules.
    for resource in &resources {
        check!(read_resource(sample_docs.root(), &resource.uri).is_ok());
    }
}

#[rstest]
fn test_list_resources_skips_non_markdown(empty_docs: DocsFixture) {
    empty_docs
        .create_file("components-tag-docs.md", "# Tag")
        .create_file("notes.txt", "not indexed")
        .create_file("nested/foundations-typography.md", "# Typography");

    let names: Vec<String> = list_resources(empty_docs.root())
        .into_iter()
        .map(|r| r.name)
        .collect();
    check!(names == vec!["components-tag-docs.md", "nested/foundations-typography.md"]);
}
