use std::fmt::Write as _;

use chrono::NaiveDate;
use sfd_core::ExtractionResult;

/// The `articles` relation is an external contract shared with the loading
/// tooling; column names and types must not drift.
const SCHEMA: &str = r#"CREATE TABLE IF NOT EXISTS articles (
    id SERIAL PRIMARY KEY,
    date DATE NOT NULL,
    title VARCHAR(500) NOT NULL,
    summary_fr TEXT,
    tags TEXT[],
    rating INTEGER DEFAULT 0 CHECK (rating >= 0 AND rating <= 5),
    url TEXT
);
"#;

/// Deterministic artifact filename for one newsletter date.
pub fn filename(date: NaiveDate) -> String {
    format!("self-daily-{date}.sql")
}

/// Renders the migration script for one date: idempotent schema declaration
/// followed by one insert block per stub, in acceptance order. Rendering the
/// same input twice yields byte-identical text.
pub fn render(date: NaiveDate, result: &ExtractionResult) -> String {
    let mut sql = format!(
        "-- Self Daily Articles for {date}\n-- Table creation if not exists\n\n{SCHEMA}\n-- Insert articles for {date}\n"
    );

    for article in &result.articles {
        let _ = write!(
            sql,
            r#"INSERT INTO articles (date, title, summary_fr, tags, rating, url) VALUES (
    '{date}',
    '{title}',
    'Summary to be generated',
    '{{}}',
    0,
    '{url}'
);

"#,
            title = escape(&article.title),
            url = escape(&article.url),
        );
    }

    sql
}

/// Doubles single quotes, the SQL-standard escape for a literal quote inside
/// a quoted string. The only sanitization the artifact needs: it is reviewed
/// and replayed as a file, never executed inline.
fn escape(text: &str) -> String {
    text.replace('\'', "''")
}
