//! Display formatting shared by the CLI and TUI.

use chrono::NaiveDate;

/// "Jan 15, 2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Plain number with up to four decimals and trailing zeros removed:
/// `1.0950` → "1.095", `145.20` → "145.2", `35.0` → "35".
pub fn format_number(value: f64) -> String {
    let s = format!("{value:.4}");
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Signed pnl: "+35", "-40", "+0".
pub fn format_pnl(pnl: f64) -> String {
    let n = format_number(pnl);
    if n.starts_with('-') {
        n
    } else {
        format!("+{n}")
    }
}

/// Currency net pnl: "$65", "-$40".
pub fn format_net_pnl(pnl: f64) -> String {
    let n = format_number(pnl);
    match n.strip_prefix('-') {
        Some(abs) => format!("-${abs}"),
        None => format!("${n}"),
    }
}

/// "66.7%"
pub fn format_win_rate(percent: f64) -> String {
    format!("{percent:.1}%")
}
