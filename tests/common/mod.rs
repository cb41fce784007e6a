//! Shared test fixtures and utilities for integration tests.
//!
//! Every test builds its own corpus in a temporary directory, so tests never
//! share filesystem state.
//!
//! # Available Fixtures
//!
//! - `empty_docs`: an empty documentation root
//! - `sample_docs`: a small corpus covering every document category plus `guidelines.md`

use ids_docs_mcp::{Dispatcher, DocsConfig, ToolRequest};
use rstest::fixture;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

/// A temporary documentation root.
///
/// The directory is removed when the fixture is dropped.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct DocsFixture {
    temp: TempDir,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl DocsFixture {
    /// Creates a new empty documentation root.
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Returns the documentation root.
    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// Configuration pointing at this root.
    pub fn config(&self) -> DocsConfig {
        DocsConfig::new(self.root())
    }

    /// Dispatcher over this root.
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new(self.config())
    }

    /// Creates a file with the given content; parent directories are created as needed.
    ///
    /// # Panics
    /// Panics if file creation fails.
    pub fn create_file(&self, path: &str, content: &str) -> &Self {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent directory for '{}': {}", path, e)
            });
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
        self
    }

    /// Call a tool and return the response text, panicking on errors.
    pub fn call(&self, tool: &str, arguments: Value) -> String {
        self.dispatcher()
            .dispatch(ToolRequest::new(tool, Some(arguments)))
            .unwrap_or_else(|e| panic!("Tool {} failed: {}", tool, e))
            .joined_text()
    }
}

impl Default for DocsFixture {
    fn default() -> Self {
        Self::new()
    }
}

pub const BUTTON_DOC: &str = "\
# Button

Buttons let users trigger an action with a single click.

## Props

| Prop | Type | Default |
| --- | --- | --- |
| mode | 'primary' \\| 'secondary' | 'secondary' |
| loading | boolean | false |

### Events

onClick fires when the button is pressed.

## Examples

```tsx
<IressButton mode=\"primary\">Save</IressButton>
```

```tsx
<IressButton loading>Saving</IressButton>
```

## Accessibility

Always give icon-only buttons a label.";

pub const BUTTON_GROUP_DOC: &str = "\
# Button group

Groups related IressButton components.

## Examples

```tsx
<IressButtonGroup><IressButton>One</IressButton></IressButtonGroup>
```";

pub const COLOURS_DOC: &str = "\
# Colours

## Brand

Use `--iress-color-primary` for primary actions.

## Neutral

Backgrounds use `--iress-color-background` and `--iress-color-primary` again.

## Feedback

## Charts

## Legacy";

pub const SPACING_DOC: &str = "\
# Spacing

## Scale

`--iress-space-sm`, `--iress-space-md` and `--iress-space-lg`.";

pub const GUIDELINES_DOC: &str = "\
# IDS Guidelines

## Accessibility

All interactive components must be keyboard accessible.
### Colour contrast
Text contrast must be at least 4.5:1.

## Layout

Use the spacing scale for gaps.
Avoid fixed pixel widths.

## Content

Write in plain language.";

/// An empty documentation root.
#[fixture]
pub fn empty_docs() -> DocsFixture {
    DocsFixture::new()
}

/// A small corpus covering every category.
#[fixture]
pub fn sample_docs() -> DocsFixture {
    let docs = DocsFixture::new();
    docs.create_file("components-button-docs.md", BUTTON_DOC)
        .create_file("components-button-group-docs.md", BUTTON_GROUP_DOC)
        .create_file("components-table-docs.md", "# Table\n\nDisplays tabular data.")
        .create_file("foundations-colours.md", COLOURS_DOC)
        .create_file("foundations-spacing.md", SPACING_DOC)
        .create_file("resources-icons-docs.md", "# Icons\n\nIcon set reference.")
        .create_file("introduction.md", "# Introduction\n\nWelcome to IDS.")
        .create_file("guidelines.md", GUIDELINES_DOC);
    docs
}
