//! Debug dump helpers for troubleshooting page layout changes.
//!
//! Only compiled with the `debug-dumps` feature, and only active when
//! `ETF_DEBUG=1`.

use std::fmt::Write as _;
use std::fs;

use scraper::{ElementRef, Html, Selector};

pub(crate) fn enabled() -> bool {
    std::env::var("ETF_DEBUG").ok().as_deref() == Some("1")
}

fn compact(s: &str, max_chars: usize) -> String {
    let flat = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let mut out: String = flat.chars().take(max_chars).collect();
    out.push_str(" …[trunc]");
    out
}

/// Writes the raw page plus a summary of every label/value pair and classed
/// element count, so a selector that stopped matching is easy to spot.
pub(crate) fn debug_dump_html(source: &str, ticker: &str, html: &str) -> std::io::Result<()> {
    let tmp = std::env::temp_dir();
    let base = format!("etf_snapshot-{source}-{ticker}");

    let raw_path = tmp.join(format!("{base}.html"));
    fs::write(&raw_path, html)?;
    tracing::debug!(path = %raw_path.display(), "ETF_DEBUG: wrote page");

    let document = Html::parse_document(html);
    let mut summary = String::new();
    let _ = writeln!(summary, "# {source} page for {ticker} ({} bytes)", html.len());

    if let Ok(title) = Selector::parse("title")
        && let Some(t) = document.select(&title).next()
    {
        let _ = writeln!(summary, "title: {}", compact(&t.text().collect::<String>(), 200));
    }

    if let Ok(labels) = Selector::parse("label") {
        let _ = writeln!(summary, "\n## labels");
        for label in document.select(&labels) {
            let caption: String = label.text().collect();
            let value = label
                .next_siblings()
                .find_map(ElementRef::wrap)
                .map(|v| v.text().collect::<String>())
                .unwrap_or_default();
            let _ = writeln!(
                summary,
                "{:?} => {:?}",
                compact(&caption, 80),
                compact(&value, 80)
            );
        }
    }

    let summary_path = tmp.join(format!("{base}-summary.txt"));
    fs::write(&summary_path, summary)?;
    tracing::debug!(path = %summary_path.display(), "ETF_DEBUG: wrote summary");
    Ok(())
}
