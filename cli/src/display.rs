//! Report rendering.
//!
//! `render_*` functions are pure and return the full text; the `print_*`
//! wrappers only write it out.

use breachcheck_breaches::{BreachRecord, BreachSummary};
use regex::Regex;
use serde::Serialize;
use std::fmt::Write as _;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

const DATA_COMPROMISED_WIDTH: usize = 40;
const ELLIPSIS: &str = "...";

const RESULT_HEADERS: [&str; 6] = [
    "Breach Name",
    "Domain",
    "Date",
    "Data Compromised",
    "Affected",
    "Status",
];
const CATALOG_HEADERS: [&str; 5] = ["Breach Name", "Domain", "Date", "Affected", "Status"];

const RECOMMENDATIONS: [&str; 5] = [
    "Change passwords for all affected accounts immediately",
    "Enable two-factor authentication (2FA) where possible",
    "Monitor your accounts for suspicious activity",
    "Consider using a password manager with unique passwords",
    "Check your credit reports if financial data was compromised",
];

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

/// Grid table in the style of `+---+` borders with a `+===+` header rule.
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn render(&self) -> String {
        // Terminal columns, not chars: emoji glyphs occupy two cells.
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(width) = widths.get_mut(i) {
                    *width = (*width).max(cell.width());
                }
            }
        }

        let rule = |fill: char| -> String {
            let mut line = String::from("+");
            for width in &widths {
                line.push_str(&fill.to_string().repeat(width + 2));
                line.push('+');
            }
            line
        };
        let line = |cells: &[String]| -> String {
            let mut line = String::from("|");
            for (i, width) in widths.iter().enumerate() {
                let cell = cells.get(i).map_or("", String::as_str);
                let pad = width.saturating_sub(cell.width());
                let _ = write!(line, " {cell}{} |", " ".repeat(pad));
            }
            line
        };

        let mut out = Vec::with_capacity(self.rows.len() * 2 + 3);
        out.push(rule('-'));
        out.push(line(&self.headers));
        out.push(rule('='));
        for row in &self.rows {
            out.push(line(row));
            out.push(rule('-'));
        }
        out.join("\n")
    }
}

/// Cut `text` to `max_chars` characters, appending `...` when shortened.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars).collect();
    format!("{kept}{ELLIPSIS}")
}

/// `1234567` becomes `1,234,567`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn format_affected(count: u64) -> String {
    if count > 0 {
        format_thousands(count)
    } else {
        "Unknown".to_string()
    }
}

fn status_glyphs(record: &BreachRecord) -> String {
    let mut glyphs = Vec::new();
    if record.is_verified {
        glyphs.push("✓");
    }
    if record.is_sensitive {
        glyphs.push("🔒");
    }
    if record.is_retired {
        glyphs.push("🗄️");
    }
    glyphs.join(" ")
}

fn strip_html(text: &str) -> String {
    static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = TAG_REGEX.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid regex"));
    regex
        .replace_all(text, "")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

/// Build the per-breach table of a lookup result.
pub fn results_table(records: &[BreachRecord]) -> Table {
    let mut table = Table::new(&RESULT_HEADERS);
    for record in records {
        table.add_row(vec![
            record.name.clone(),
            record.domain.clone(),
            record.date.clone(),
            truncate_text(&record.compromised_data, DATA_COMPROMISED_WIDTH),
            format_affected(record.affected_count),
            status_glyphs(record),
        ]);
    }
    table
}

/// Full report for a lookup.
pub fn render_results(email: &str, records: &[BreachRecord]) -> String {
    let mut out = String::new();

    if records.is_empty() {
        let _ = writeln!(out, "\n✅ Good news! No breaches found for: {email}");
        let _ = writeln!(
            out,
            "This email address does not appear in any known data breaches."
        );
        return out;
    }

    let verified = records.iter().filter(|r| r.is_verified).count();
    let sensitive = records.iter().filter(|r| r.is_sensitive).count();

    let _ = writeln!(out, "\n⚠️  BREACHES FOUND for: {email}");
    let _ = writeln!(out, "Total breaches: {}", records.len());
    let _ = writeln!(out, "Verified breaches: {verified}");
    if sensitive > 0 {
        let _ = writeln!(out, "⚠️  Sensitive breaches: {sensitive}");
    }

    let _ = writeln!(out, "\nDetailed Results:");
    let _ = writeln!(out, "{}", "=".repeat(80));
    let table = results_table(records);
    tracing::debug!(rows = table.row_count(), "rendering breach table");
    let _ = writeln!(out, "{}", table.render());

    let _ = writeln!(out, "\nStatus Legend:");
    let _ = writeln!(out, "✓ = Verified breach");
    let _ = writeln!(out, "🔒 = Sensitive breach");
    let _ = writeln!(out, "🗄️ = Retired/historical breach");

    let _ = writeln!(out, "\n🔒 Security Recommendations:");
    for tip in RECOMMENDATIONS {
        let _ = writeln!(out, "• {tip}");
    }

    out
}

pub fn render_summary(email: &str, summary: &BreachSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n📊 Breach Summary for: {email}");
    let _ = writeln!(out, "{}", "=".repeat(50));

    if summary.total == 0 {
        let _ = writeln!(out, "✅ No breaches found");
        return out;
    }

    let _ = writeln!(out, "Total breaches: {}", summary.total);
    let _ = writeln!(out, "Verified breaches: {}", summary.verified_count);
    let _ = writeln!(out, "Sensitive breaches: {}", summary.sensitive_count);
    if let Some(latest) = &summary.latest {
        let _ = writeln!(out, "Latest breach: {} ({})", latest.name, latest.date);
    }
    if let Some(earliest) = &summary.earliest {
        let _ = writeln!(out, "Oldest breach: {} ({})", earliest.name, earliest.date);
    }
    out
}

pub fn render_breach_details(record: &BreachRecord) -> String {
    let yes_no = |flag: bool| if flag { "Yes" } else { "No" };
    let details = [
        ("Name", record.name.clone()),
        ("Domain", record.domain.clone()),
        ("Breach Date", record.date.clone()),
        ("Affected Accounts", format_affected(record.affected_count)),
        ("Data Compromised", record.compromised_data.clone()),
        ("Verified", yes_no(record.is_verified).to_string()),
        ("Sensitive", yes_no(record.is_sensitive).to_string()),
        ("Retired", yes_no(record.is_retired).to_string()),
    ];

    let mut out = String::new();
    let _ = writeln!(out, "\n📋 Breach Details: {}", record.name);
    let _ = writeln!(out, "{}", "=".repeat(50));
    for (label, value) in details {
        let _ = writeln!(out, "{label:.<20} {value}");
    }

    if !record.description.is_empty() {
        let _ = writeln!(out, "\nDescription:");
        let _ = writeln!(out, "{}", strip_html(&record.description));
    }
    out
}

pub fn render_catalog(records: &[BreachRecord], limit: Option<usize>) -> String {
    let shown = limit.unwrap_or(records.len()).min(records.len());

    let mut table = Table::new(&CATALOG_HEADERS);
    for record in records.iter().take(shown) {
        table.add_row(vec![
            record.name.clone(),
            record.domain.clone(),
            record.date.clone(),
            format_affected(record.affected_count),
            status_glyphs(record),
        ]);
    }

    let mut out = String::new();
    let _ = writeln!(out, "\n📚 Known breaches: {}", records.len());
    if shown < records.len() {
        let _ = writeln!(out, "Showing the newest {shown}");
    }
    let _ = writeln!(out, "{}", table.render());
    out
}

pub fn render_json<T: Serialize>(data: T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&JsonOut { ok: true, data })?)
}

pub fn render_error(message: &str) -> String {
    format!("\n❌ Error: {message}")
}

pub fn print_out(text: &str) {
    print!("{text}");
}

pub fn print_error(message: &str) {
    eprintln!("{}", render_error(message));
}
