use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use scraper::{Html, Selector};
use thiserror::Error;

const DATA_HTML_PREFIX: &str = "data:text/html";
const BASE64_TOKEN: &str = "base64,";

/// Per-candidate resolution failure. Absorbed by the extractor (the
/// candidate is skipped), never fatal for a run.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("data URI carries no base64 payload")]
    MissingPayload,

    #[error("invalid base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("decoded payload is not UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("no anchor in decoded fragment")]
    MissingAnchor,
}

/// Resolves an anchor's raw `href` value to its true destination.
///
/// Some newsletter exports wrap outbound links in an inline
/// `data:text/html;base64,...` redirect page whose first anchor holds the
/// real URL. Anything not carrying that marker passes through unchanged.
pub fn resolve(href: &str) -> Result<String, ResolveError> {
    if !href.starts_with(DATA_HTML_PREFIX) {
        return Ok(href.to_string());
    }

    let payload = href
        .split_once(BASE64_TOKEN)
        .map(|(_, rest)| rest)
        .ok_or(ResolveError::MissingPayload)?;
    let bytes = STANDARD.decode(payload)?;
    let fragment = Html::parse_fragment(&String::from_utf8(bytes)?);

    let selector = Selector::parse("a").unwrap();
    fragment
        .select(&selector)
        .next()
        .and_then(|anchor| anchor.value().attr("href"))
        .map(str::to_string)
        .ok_or(ResolveError::MissingAnchor)
}
