use scraper::{Html, Selector};
use std::collections::HashSet;

/// Extracts absolute hyperlinks from an HTML document
///
/// Returns the href of every anchor element that starts with `http`, in
/// document order, with duplicates removed. Relative and otherwise
/// non-absolute hrefs are discarded. Malformed HTML yields whatever
/// anchors the parser can recover.
pub fn extract_links(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);

    let link_selector = Selector::parse("a").unwrap();
    let mut seen = HashSet::new();
    let links: Vec<String> = doc
        .select(&link_selector)
        .filter_map(|e| e.value().attr("href"))
        .filter(|href| href.starts_with("http"))
        .filter(|href| seen.insert(href.to_string()))
        .map(|s| s.to_string())
        .collect();

    ::log::debug!("HTML parser found {} links", links.len());

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_absolute_links_in_document_order() {
        let html = r#"
            <html><body>
                <a href="https://b.com">b</a>
                <a href="https://a.com">a</a>
                <a href="http://c.com/page">c</a>
            </body></html>
        "#;
        assert_eq!(
            extract_links(html),
            vec!["https://b.com", "https://a.com", "http://c.com/page"]
        );
    }

    #[test]
    fn drops_relative_and_invalid_hrefs() {
        let html = r##"
            <a href="https://a.com">ok</a>
            <a href="/relative">relative</a>
            <a href="mailto:someone@example.com">mail</a>
            <a href="#fragment">fragment</a>
            <a>no href</a>
        "##;
        assert_eq!(extract_links(html), vec!["https://a.com"]);
    }

    #[test]
    fn removes_duplicates_keeping_first_occurrence() {
        let html = r#"
            <a href="https://a.com">one</a>
            <a href="https://b.com">two</a>
            <a href="https://a.com">again</a>
        "#;
        assert_eq!(extract_links(html), vec!["https://a.com", "https://b.com"]);
    }

    #[test]
    fn recovers_anchors_from_malformed_html() {
        let html = r#"<div><a href="https://a.com">unclosed<p><a href="https://b.com""#;
        let links = extract_links(html);
        assert!(links.contains(&"https://a.com".to_string()));
    }

    #[test]
    fn empty_document_yields_no_links() {
        assert!(extract_links("").is_empty());
        assert!(extract_links("<html><body>no links here</body></html>").is_empty());
    }
}
