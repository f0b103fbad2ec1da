// src/core/html.rs
// Small helpers over `scraper` shared by the page specs.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::sanitize::normalize_ws;

/// Compile a selector written in source. Only ever called with literals.
pub fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("bad selector {css:?}: {e:?}"))
}

/// First element in the whole document matching `css`.
pub fn find_in_doc<'a>(doc: &'a Html, css: &'static str) -> Option<ElementRef<'a>> {
    doc.select(&selector(css)).next()
}

/// First descendant of `scope` matching `css`.
pub fn find_in<'a>(scope: ElementRef<'a>, css: &'static str) -> Option<ElementRef<'a>> {
    scope.select(&selector(css)).next()
}

/// Visible text of an element, whitespace collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// The element's `href`, if it has a non-empty one.
pub fn href_of<'a>(el: ElementRef<'a>) -> Option<&'a str> {
    el.value().attr("href").map(str::trim).filter(|h| !h.is_empty())
}

/// Resolve a (usually root-relative) link against the site base.
pub fn absolutize(base: &Url, href: &str) -> Option<Url> {
    base.join(href).ok()
}
