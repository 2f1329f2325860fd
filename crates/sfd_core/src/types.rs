use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Minimal extracted record: title plus resolved destination URL.
/// Enrichment (summary, tags, rating) happens downstream of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleStub {
    pub title: String,
    pub url: String,
}

/// Ordered, title-unique list of stubs produced by one extraction walk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub articles: Vec<ArticleStub>,
}

impl ExtractionResult {
    /// Accepts the stub unless an earlier article already claimed its title.
    /// First occurrence wins; document order is preserved.
    pub fn accept(&mut self, stub: ArticleStub) -> bool {
        if self.articles.iter().any(|a| a.title == stub.title) {
            return false;
        }
        self.articles.push(stub);
        true
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

/// Success report for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub date: NaiveDate,
    pub articles_count: usize,
    pub artifact_path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stub(title: &str, url: &str) -> ArticleStub {
        ArticleStub {
            title: title.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_accept_keeps_first_occurrence() {
        let mut result = ExtractionResult::default();
        assert!(result.accept(stub("Piece One", "https://example.com/a")));
        assert!(!result.accept(stub("Piece One", "https://example.com/b")));
        assert_eq!(result.len(), 1);
        assert_eq!(result.articles[0].url, "https://example.com/a");
    }

    #[test]
    fn test_accept_preserves_order() {
        let mut result = ExtractionResult::default();
        result.accept(stub("First", "https://example.com/1"));
        result.accept(stub("Second", "https://example.com/2"));
        result.accept(stub("First", "https://example.com/3"));
        result.accept(stub("Third", "https://example.com/4"));

        let titles: Vec<&str> = result.articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }
}
