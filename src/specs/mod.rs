// src/specs/mod.rs
//! # Page specs
//!
//! One module per nps.gov page shape. Each spec knows *where the data lives in
//! the HTML* and turns a fetched page into typed records:
//!
//! - `states`  – home page navigation → `StateDirectory`
//! - `listing` – state page `#list_parks` headings → ordered `SiteLocator`s
//! - `site`    – site detail page → `Site`
//!
//! Every spec exposes a `parse_*` function that works on a document string
//! (testable offline against `tests/fixtures/`) and a thin fetching wrapper
//! that goes through `core::net::Fetch`.
//!
//! Specs do not decide *when* to scrape or what to show; that belongs to
//! `scrape` and `session`. A missing structural element is a `ParseError`,
//! never a silent default.
pub mod listing;
pub mod site;
pub mod states;
