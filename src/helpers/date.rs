//! Date helper functions

use chrono::NaiveDate;

use crate::content::Post;

/// Format a date the way post cards show it (like "Jan 2, 2006")
pub fn short_date(date: &NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Display date for a post, or the raw date string if it does not parse
pub fn display_date(post: &Post) -> String {
    post.published_on()
        .map(|d| short_date(&d))
        .unwrap_or_else(|| post.date.clone())
}
