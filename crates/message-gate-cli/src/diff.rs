// crates/message-gate-cli/src/diff.rs
// ============================================================================
// Module: Context Diff Rendering
// Description: Line-based diff between current and proposed catalog text.
// Purpose: Show what the interactive change strategy would ask about.
// Dependencies: Standard library only.
// ============================================================================

//! ## Overview
//! The unimplemented `ask` change strategy still shows the operator what
//! would change before failing. Catalogs are small, so the diff is computed
//! with a full longest-common-subsequence table and rendered with every
//! context line: unchanged lines are prefixed with two spaces, removals
//! with `- `, additions with `+ `, under the caller-supplied labels.

// ============================================================================
// SECTION: Diff Rendering
// ============================================================================

/// Renders a labeled, full-context diff between `current` and `proposed`.
#[must_use]
pub fn render_context_diff(
    from_label: &str,
    to_label: &str,
    current: &str,
    proposed: &str,
) -> String {
    let from_lines: Vec<&str> = current.lines().collect();
    let to_lines: Vec<&str> = proposed.lines().collect();

    let mut out = String::new();
    out.push_str("*** ");
    out.push_str(from_label);
    out.push('\n');
    out.push_str("--- ");
    out.push_str(to_label);
    out.push('\n');
    out.push_str("***************\n");
    for (prefix, line) in diff_lines(&from_lines, &to_lines) {
        out.push_str(prefix);
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Produces prefixed diff lines via a longest-common-subsequence walk.
fn diff_lines<'a>(from: &[&'a str], to: &[&'a str]) -> Vec<(&'static str, &'a str)> {
    // lcs[i][j] = LCS length of from[i..] and to[j..].
    let mut lcs = vec![vec![0_usize; to.len() + 1]; from.len() + 1];
    for i in (0..from.len()).rev() {
        for j in (0..to.len()).rev() {
            lcs[i][j] = if from[i] == to[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut lines = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < from.len() && j < to.len() {
        if from[i] == to[j] {
            lines.push(("  ", from[i]));
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            lines.push(("- ", from[i]));
            i += 1;
        } else {
            lines.push(("+ ", to[j]));
            j += 1;
        }
    }
    for line in &from[i..] {
        lines.push(("- ", line));
    }
    for line in &to[j..] {
        lines.push(("+ ", line));
    }
    lines
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test-only panic-based assertions are permitted."
    )]

    use super::render_context_diff;

    #[test]
    fn renders_labels_and_prefixes() {
        let rendered = render_context_diff(
            "original a.en.yml",
            "proposed a.en.yml",
            "greeting: Hi\nyes: Yes\n",
            "greeting: Hi\n'yes': 'Yes'\n",
        );
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "*** original a.en.yml");
        assert_eq!(lines[1], "--- proposed a.en.yml");
        assert_eq!(lines[2], "***************");
        assert!(lines.contains(&"  greeting: Hi"));
        assert!(lines.contains(&"- yes: Yes"));
        assert!(lines.contains(&"+ 'yes': 'Yes'"));
    }

    #[test]
    fn identical_text_renders_context_only() {
        let rendered = render_context_diff("original x", "proposed x", "a: b\n", "a: b\n");
        assert!(rendered.lines().all(|line| !line.starts_with("- ") && !line.starts_with("+ ")));
    }
}
