use scraper::{ElementRef, Html, Selector};

/// Tags that may carry an article title, tried in priority order against
/// the descendants of a candidate anchor's parent.
const TITLE_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "b", "strong"];

/// Parsed newsletter HTML exposing the tree queries the extractor needs,
/// so extraction logic never touches parser internals directly.
pub struct NewsletterDoc {
    html: Html,
}

impl NewsletterDoc {
    pub fn parse(raw: &str) -> Self {
        Self {
            html: Html::parse_document(raw),
        }
    }

    /// All anchor elements, in document order.
    pub fn anchors(&self) -> Vec<Anchor<'_>> {
        let selector = Selector::parse("a").unwrap();
        self.html
            .select(&selector)
            .map(|element| Anchor { element })
            .collect()
    }
}

/// One anchor element within a [`NewsletterDoc`].
pub struct Anchor<'a> {
    element: ElementRef<'a>,
}

impl<'a> Anchor<'a> {
    /// Trimmed visible text of the anchor.
    pub fn text(&self) -> String {
        self.element.text().collect::<String>().trim().to_string()
    }

    /// Raw `href` attribute value, if present.
    pub fn href(&self) -> Option<&'a str> {
        self.element.value().attr("href")
    }

    /// Title text for this anchor: the first descendant of the anchor's
    /// parent element matching one of [`TITLE_TAGS`], trimmed. `None` when
    /// the anchor has no parent element or no such descendant exists.
    pub fn parent_title(&self) -> Option<String> {
        let parent = self.element.parent().and_then(ElementRef::wrap)?;
        for tag in TITLE_TAGS {
            let selector = Selector::parse(tag).unwrap();
            if let Some(heading) = parent.select(&selector).next() {
                return Some(heading.text().collect::<String>().trim().to_string());
            }
        }
        None
    }
}
