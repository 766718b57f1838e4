//! Field extraction from the rendered profile DOM.
//!
//! Each field is read independently. A missing or malformed fragment degrades
//! that one field (empty text, zero, `None` or [`Rated::Unavailable`]) and never
//! fails the whole extraction.

use std::str::FromStr;
use std::sync::LazyLock;

use rust_decimal::Decimal;
use scraper::{ElementRef, Html, Selector};

use super::model::{FundProfile, Performance, Rated};
use crate::core::normalize::parse_abbreviated_number;

/// Fund display name. Its presence is also the page readiness signal.
pub const NAME_SELECTOR: &str = ".font18.medium_blue_type.w-100.pull-left";
pub(crate) const SEGMENT_SELECTOR: &str = ".field-content.fundReportSegment";
pub(crate) const RATING_SELECTOR: &str = "#fund-rating";
pub(crate) const PICK_SELECTOR: &str = "#analystPick";

pub(crate) const AUM_LABEL: &str = "Assets Under Management";
pub(crate) const EXPENSE_RATIO_LABEL: &str = "Expense Ratio";
pub(crate) const DIVIDEND_LABEL: &str = "Distribution Yield";
pub(crate) const INCEPTION_LABEL: &str = "Inception Date";

/// The profile page renders its performance table twice and the first copy is a
/// hidden placeholder, so the figures are read from the second match.
pub(crate) const PERFORMANCE_OCCURRENCE: usize = 1;

static LABEL: LazyLock<Selector> = LazyLock::new(|| css("label"));
static NAME: LazyLock<Selector> = LazyLock::new(|| css(NAME_SELECTOR));
static SEGMENT: LazyLock<Selector> = LazyLock::new(|| css(SEGMENT_SELECTOR));
static RATING: LazyLock<Selector> = LazyLock::new(|| css(RATING_SELECTOR));
static PICK: LazyLock<Selector> = LazyLock::new(|| css(PICK_SELECTOR));

static PERF_YTD: LazyLock<Selector> = LazyLock::new(|| css(".perfYtd"));
static PERF_1M: LazyLock<Selector> = LazyLock::new(|| css(".perf1Mo"));
static PERF_3M: LazyLock<Selector> = LazyLock::new(|| css(".perf3Mo"));
static PERF_1Y: LazyLock<Selector> = LazyLock::new(|| css(".perf1Yr"));
static PERF_3Y: LazyLock<Selector> = LazyLock::new(|| css(".perf3YrAnnualized"));
static PERF_5Y: LazyLock<Selector> = LazyLock::new(|| css(".perf5YrAnnualized"));
static PERF_10Y: LazyLock<Selector> = LazyLock::new(|| css(".perf10YrAnnualized"));

// Only ever called with the compile-time selectors above.
fn css(s: &str) -> Selector {
    Selector::parse(s).unwrap_or_else(|e| panic!("invalid built-in selector `{s}`: {e}"))
}

fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

fn nth_text(document: &Html, selector: &Selector, index: usize) -> Option<String> {
    document.select(selector).nth(index).map(text_of)
}

/// Finds the first `<label>` whose trimmed text equals `label` and returns the
/// text of its next sibling element, untrimmed.
///
/// Only the document side is trimmed; `label` must be the exact caption. With
/// duplicate captions the first one in document order wins.
#[must_use]
pub fn find_value_by_label(document: &Html, label: &str) -> Option<String> {
    let caption = document
        .select(&LABEL)
        .find(|el| text_of(*el).trim() == label)?;
    caption
        .next_siblings()
        .find_map(ElementRef::wrap)
        .map(text_of)
}

/// Maps a rating letter to its position in the alphabet (`"A"` -> 1, `"Z"` -> 26).
///
/// Anything but exactly one uppercase ASCII letter is unavailable.
#[must_use]
pub fn letter_grade(letter: Option<&str>) -> Rated<u8> {
    let mut chars = letter.unwrap_or_default().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_uppercase() => Rated::Value(c as u8 - b'A' + 1),
        _ => Rated::Unavailable,
    }
}

/// Parses a rating score attribute; non-numeric text is unavailable.
#[must_use]
pub fn rating_score(score: Option<&str>) -> Rated<Decimal> {
    score
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| {
            Decimal::from_str(s)
                .or_else(|_| Decimal::from_scientific(s))
                .ok()
        })
        .into()
}

fn performance(document: &Html) -> Performance {
    let at = |selector: &Selector| {
        nth_text(document, selector, PERFORMANCE_OCCURRENCE).unwrap_or_default()
    };
    Performance {
        ytd: at(&*PERF_YTD),
        one_month: at(&*PERF_1M),
        three_months: at(&*PERF_3M),
        one_year: at(&*PERF_1Y),
        three_years: at(&*PERF_3Y),
        five_years: at(&*PERF_5Y),
        ten_years: at(&*PERF_10Y),
    }
}

fn labelled(document: &Html, label: &str) -> Option<String> {
    let value = find_value_by_label(document, label);
    if value.is_none() {
        tracing::debug!(label, "label not found on profile page");
    }
    value
}

/// Extracts every profile field from a rendered DOM snapshot.
#[must_use]
pub fn extract_profile(html: &str) -> FundProfile {
    let document = Html::parse_document(html);
    let rating = document.select(&RATING).next();

    if rating.is_none() {
        tracing::debug!("fund rating element missing");
    }

    FundProfile {
        name: nth_text(&document, &NAME, 0).unwrap_or_default(),
        segment: nth_text(&document, &SEGMENT, 0).unwrap_or_default(),
        aum: parse_abbreviated_number(labelled(&document, AUM_LABEL).as_deref()),
        grade: letter_grade(rating.and_then(|el| el.value().attr("letter"))),
        score: rating_score(rating.and_then(|el| el.value().attr("score"))),
        pick: document.select(&PICK).next().is_some(),
        expense_ratio: labelled(&document, EXPENSE_RATIO_LABEL),
        performance: performance(&document),
        dividend: labelled(&document, DIVIDEND_LABEL),
        inception: labelled(&document, INCEPTION_LABEL),
    }
}
