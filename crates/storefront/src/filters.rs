//! Custom Askama template filters.
//!
//! Both filters ignore their piped value; templates invoke them as
//! `{{ ""|current_year }}` and `{{ ""|css_hash }}`.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// The current year, for the footer copyright line.
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// The build-time content hash of `main.css`, so the stylesheet link
/// changes whenever the file does.
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}
