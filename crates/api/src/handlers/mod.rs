//! Request handlers for the wiki pages.
//!
//! Each entity submodule provides the add-form pair (GET form, POST create)
//! and the detail page. Handlers delegate to the corresponding repository in
//! `lore_db`, render through [`crate::views::Views`] and map errors via
//! [`AppError`].

pub mod article;
pub mod character;
pub mod home;
pub mod pages;
pub mod place;

use lore_core::types::DbId;

use crate::error::{AppError, AppResult};

/// Parse the `{id}` path segment of a detail page.
///
/// Only plain ASCII digits name a record. Signs, whitespace and anything
/// else are reported as a missing page rather than a bad request.
pub(crate) fn parse_id(raw: &str) -> AppResult<DbId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::PageNotFound);
    }
    raw.parse().map_err(|_| AppError::PageNotFound)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parse_id_accepts_integers_only() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_matches!(parse_id("abc"), Err(AppError::PageNotFound));
        assert_matches!(parse_id(""), Err(AppError::PageNotFound));
        assert_matches!(parse_id("+1"), Err(AppError::PageNotFound));
        assert_matches!(parse_id("-1"), Err(AppError::PageNotFound));
        assert_matches!(parse_id(" 1"), Err(AppError::PageNotFound));
        assert_matches!(parse_id("99999999999999999999"), Err(AppError::PageNotFound));
    }
}
