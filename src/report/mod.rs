//! Fixed-width text rendering of per-language statistics.

pub mod bar;
pub mod number;

use std::fmt;

use crate::domain::language::LanguageStat;

const NAME_WIDTH: usize = 10;
const COUNT_WIDTH: usize = 7;
const BAR_WIDTH: usize = 21;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub lines: Vec<String>,
}

impl Report {
    pub fn from_stats(stats: &[LanguageStat]) -> Self {
        Self {
            lines: stats.iter().map(format_line).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn format_line(stat: &LanguageStat) -> String {
    let name = truncate(&stat.name, NAME_WIDTH);
    let additions = format!("+{}", number::abbreviate(stat.additions));
    let deletions = format!("-{}", number::abbreviate(stat.deletions));
    let bar = bar::render(stat.percent, BAR_WIDTH);
    let percent = number::one_decimal(stat.percent);
    format!(
        "{name:<NAME_WIDTH$} {additions:>COUNT_WIDTH$}/{deletions:>COUNT_WIDTH$} {bar}{percent:>5}%"
    )
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() > max {
        let mut cut: String = value.chars().take(max - 1).collect();
        cut.push('…');
        cut
    } else {
        value.to_string()
    }
}
