pub mod document;
pub mod extractor;
pub mod resolver;

pub use document::NewsletterDoc;
pub use extractor::extract;
pub use resolver::{resolve, ResolveError};

pub mod prelude {
    pub use super::document::NewsletterDoc;
    pub use super::extractor::extract;
    pub use sfd_core::{ArticleStub, Error, ExtractionResult, Result};
}
