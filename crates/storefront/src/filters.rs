//! Askama filters shared by every page.

use std::fmt::Display;

/// Current calendar year for the footer copyright.
///
/// Usage: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Cache-busting token for `/static` stylesheet and script URLs.
///
/// Static assets are served with a one-day max-age; the token is a hash of
/// their content taken at build time. Usage: `main.css?v={{ ""|asset_version }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn asset_version(
    _value: impl Display,
    _env: &dyn askama::Values,
) -> askama::Result<&'static str> {
    Ok(env!("ASSET_HASH"))
}
