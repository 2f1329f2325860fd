use tracing::debug;

use sfd_core::{ArticleStub, Error, ExtractionResult, Result};

use crate::document::NewsletterDoc;
use crate::resolver;

/// The two surface forms that mark an article link. Matching is deliberately
/// case-sensitive: "read more" in other casings does not qualify.
const MARKERS: [&str; 2] = ["READ MORE", "Read more"];

/// Walks the newsletter and collects article stubs from every "read more"
/// style anchor, in document order, deduplicated by exact title.
///
/// A candidate is dropped when its title is empty, its URL is empty or
/// unresolvable, or an earlier candidate already claimed its title. Zero
/// surviving candidates is an error, never an empty result.
pub fn extract(doc: &NewsletterDoc) -> Result<ExtractionResult> {
    let mut result = ExtractionResult::default();

    for anchor in doc.anchors() {
        let text = anchor.text();
        if !MARKERS.iter().any(|marker| text.contains(marker)) {
            continue;
        }

        let title = anchor.parent_title().unwrap_or_default();
        let href = anchor.href().unwrap_or_default();
        let url = match resolver::resolve(href) {
            Ok(url) => url,
            Err(err) => {
                debug!("skipping candidate (href {:?}): {}", href, err);
                continue;
            }
        };

        if title.is_empty() || url.is_empty() {
            debug!("skipping candidate with empty title or URL (href {:?})", href);
            continue;
        }

        if !result.accept(ArticleStub { title: title.clone(), url }) {
            debug!("skipping duplicate title {:?}", title);
        }
    }

    if result.is_empty() {
        return Err(Error::NoArticles);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    fn extract_html(html: &str) -> Result<ExtractionResult> {
        extract(&NewsletterDoc::parse(html))
    }

    #[test]
    fn test_single_article() {
        let result = extract_html(
            r#"<div><h2>Piece One</h2><p>Teaser.</p><a href="https://example.com/a">READ MORE</a></div>"#,
        )
        .unwrap();
        assert_eq!(
            result.articles,
            vec![ArticleStub {
                title: "Piece One".to_string(),
                url: "https://example.com/a".to_string(),
            }]
        );
    }

    #[test]
    fn test_no_matching_anchors() {
        let err = extract_html(
            r#"<div><h2>Piece One</h2><a href="https://example.com/a">Continue</a></div>"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::NoArticles));
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        // "read more" and "READ More" are not among the two accepted forms.
        let err = extract_html(
            r#"<div><h2>Piece One</h2><a href="https://example.com/a">read more</a></div>
               <div><h2>Piece Two</h2><a href="https://example.com/b">READ More</a></div>"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::NoArticles));
    }

    #[test]
    fn test_marker_may_be_embedded_in_longer_text() {
        let result = extract_html(
            r#"<div><h2>Piece One</h2><a href="https://example.com/a">Click to Read more now</a></div>"#,
        )
        .unwrap();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_duplicate_titles_first_wins() {
        let result = extract_html(
            r#"<div><h2>Same Headline</h2><a href="https://example.com/first">READ MORE</a></div>
               <div><h2>Same Headline</h2><a href="https://example.com/second">READ MORE</a></div>"#,
        )
        .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.articles[0].url, "https://example.com/first");
    }

    #[test]
    fn test_candidate_without_title_is_dropped() {
        let result = extract_html(
            r#"<div><a href="https://example.com/untitled">READ MORE</a></div>
               <div><h3>Titled</h3><a href="https://example.com/titled">READ MORE</a></div>"#,
        )
        .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.articles[0].title, "Titled");
    }

    #[test]
    fn test_candidate_without_href_is_dropped() {
        let err = extract_html(r#"<div><h2>Piece One</h2><a>READ MORE</a></div>"#).unwrap_err();
        assert!(matches!(err, Error::NoArticles));
    }

    #[test]
    fn test_embedded_redirect_is_resolved() {
        let encoded = STANDARD.encode(r#"<a href="https://example.com/real">x</a>"#);
        let html = format!(
            r#"<div><h2>Wrapped</h2><a href="data:text/html;base64,{encoded}">READ MORE</a></div>"#
        );
        let result = extract_html(&html).unwrap();
        assert_eq!(result.articles[0].url, "https://example.com/real");
    }

    #[test]
    fn test_unresolvable_redirect_is_skipped() {
        let encoded = STANDARD.encode("<p>no anchor here</p>");
        let html = format!(
            r#"<div><h2>Broken</h2><a href="data:text/html;base64,{encoded}">READ MORE</a></div>
               <div><h2>Fine</h2><a href="https://example.com/fine">READ MORE</a></div>"#
        );
        let result = extract_html(&html).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.articles[0].title, "Fine");
    }

    #[test]
    fn test_document_order_is_preserved() {
        let result = extract_html(
            r#"<div><h2>Alpha</h2><a href="https://example.com/1">READ MORE</a></div>
               <div><h2>Beta</h2><a href="https://example.com/2">Read more</a></div>
               <div><h2>Gamma</h2><a href="https://example.com/3">READ MORE</a></div>"#,
        )
        .unwrap();
        let titles: Vec<&str> = result.articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "Beta", "Gamma"]);
    }
}
