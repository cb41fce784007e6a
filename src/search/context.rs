//! Context windows around matching lines.

/// An inclusive range of line indices (0-based) shown around a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextWindow {
    pub start: usize,
    pub end: usize,
}

impl ContextWindow {
    /// Window of `radius` lines on both sides of `line`, clamped to `line_count`.
    pub fn around(line: usize, radius: usize, line_count: usize) -> Self {
        Self {
            start: line.saturating_sub(radius),
            end: (line + radius).min(line_count.saturating_sub(1)),
        }
    }

    /// Render the window's lines joined with `\n`.
    pub fn render(&self, lines: &[&str]) -> String {
        lines
            .get(self.start..=self.end)
            .map(|slice| slice.join("\n"))
            .unwrap_or_default()
    }
}

/// Merge overlapping or touching windows. Input must be sorted by `start`.
pub fn merge_windows(windows: impl IntoIterator<Item = ContextWindow>) -> Vec<ContextWindow> {
    let mut merged: Vec<ContextWindow> = Vec::new();
    for window in windows {
        match merged.last_mut() {
            Some(last) if window.start <= last.end + 1 => {
                last.end = last.end.max(window.end);
            }
            _ => merged.push(window),
        }
    }
    merged
}
