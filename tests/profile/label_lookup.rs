use etf_snapshot::profile::extract::find_value_by_label;
use scraper::Html;

fn doc(body: &str) -> Html {
    Html::parse_document(&format!("<html><body>{body}</body></html>"))
}

#[test]
fn returns_sibling_text_regardless_of_label_order() {
    let forward = doc(
        "<div><label>Expense Ratio</label><span>0.09%</span></div>\
         <div><label>Assets Under Management</label><span>$375.62B</span></div>",
    );
    let reversed = doc(
        "<div><label>Assets Under Management</label><span>$375.62B</span></div>\
         <div><label>Expense Ratio</label><span>0.09%</span></div>",
    );

    for d in [&forward, &reversed] {
        assert_eq!(find_value_by_label(d, "Expense Ratio").as_deref(), Some("0.09%"));
        assert_eq!(
            find_value_by_label(d, "Assets Under Management").as_deref(),
            Some("$375.62B")
        );
    }
}

#[test]
fn absent_label_is_none() {
    let d = doc("<div><label>Expense Ratio</label><span>0.09%</span></div>");
    assert_eq!(find_value_by_label(&d, "Distribution Yield"), None);
}

#[test]
fn document_side_is_trimmed_but_value_is_not() {
    let d = doc("<div><label>\n  Inception Date  </label><span> 01/22/93 </span></div>");
    assert_eq!(find_value_by_label(&d, "Inception Date").as_deref(), Some(" 01/22/93 "));
    // the caller's target is never trimmed
    assert_eq!(find_value_by_label(&d, " Inception Date"), None);
}

#[test]
fn match_is_case_sensitive() {
    let d = doc("<div><label>Expense Ratio</label><span>0.09%</span></div>");
    assert_eq!(find_value_by_label(&d, "expense ratio"), None);
}

#[test]
fn first_matching_label_wins() {
    let d = doc(
        "<div><label>Expense Ratio</label><span>0.09%</span></div>\
         <div><label>Expense Ratio</label><span>0.20%</span></div>",
    );
    assert_eq!(find_value_by_label(&d, "Expense Ratio").as_deref(), Some("0.09%"));
}

#[test]
fn skips_text_nodes_to_the_next_element() {
    let d = doc("<div><label>Expense Ratio</label>\n  text\n  <b>0.<i>09</i>%</b></div>");
    assert_eq!(find_value_by_label(&d, "Expense Ratio").as_deref(), Some("0.09%"));
}

#[test]
fn label_without_sibling_element_is_none() {
    let d = doc("<div><label>Expense Ratio</label> 0.09%</div>");
    assert_eq!(find_value_by_label(&d, "Expense Ratio"), None);
}
