// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for `quarto inspect`.
//!
//! Plain box drawing, bold labels when stdout is a TTY. Respects `NO_COLOR`.

use serde::Serialize;

/// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 56;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Format bytes as human-readable size
pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Statistics printed by `inspect`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectReport {
    pub path: String,
    pub corpus_bytes: usize,
    pub suffix_entries: usize,
    pub tokens: usize,
    pub vocabulary: usize,
    pub fuzzy_depth: usize,
}

impl InspectReport {
    pub fn render(&self, colors: bool) -> String {
        let rows = [
            ("corpus", format_size(self.corpus_bytes)),
            ("suffix array entries", self.suffix_entries.to_string()),
            ("tokens", self.tokens.to_string()),
            ("vocabulary", self.vocabulary.to_string()),
            ("fuzzy depth", self.fuzzy_depth.to_string()),
        ];

        let mut out = String::new();
        out.push_str(&format!("┌{}┐\n", "─".repeat(BOX_WIDTH)));
        out.push_str(&boxed_line(&truncate_path(&self.path, BOX_WIDTH - 2), colors));
        out.push_str(&format!("├{}┤\n", "─".repeat(BOX_WIDTH)));
        for (label, value) in rows {
            let gap = BOX_WIDTH.saturating_sub(label.len() + value.chars().count() + 2);
            let line = format!("{}{}{}", label, " ".repeat(gap), value);
            out.push_str(&boxed_line(&line, false));
        }
        out.push_str(&format!("└{}┘\n", "─".repeat(BOX_WIDTH)));
        out
    }
}

fn boxed_line(text: &str, bold: bool) -> String {
    let pad = (BOX_WIDTH - 2).saturating_sub(text.chars().count());
    if bold {
        format!("│ {}{}{}{} │\n", BOLD, text, RESET, " ".repeat(pad))
    } else {
        format!("│ {}{} │\n", text, " ".repeat(pad))
    }
}

/// Truncate a path to fit in the given width
fn truncate_path(path: &str, max_len: usize) -> String {
    let chars: Vec<char> = path.chars().collect();
    if chars.len() <= max_len {
        path.to_string()
    } else {
        let tail: String = chars[chars.len() - (max_len - 3)..].iter().collect();
        format!("...{}", tail)
    }
}
