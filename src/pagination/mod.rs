//! Pagination module
//!
//! Follows "next page" URLs embedded in list responses.
//!
//! # Overview
//!
//! Every list response implements [`Pageable`], which exposes the URL of
//! the following page. A [`Paginator`] owns the cursor and a stateless
//! fetch function; it advances the cursor one page per call to
//! [`Paginator::next`] and never moves it backwards. [`Paginator::all`]
//! turns the same sequence into a lazily produced [`Pages`] stream.

mod paginator;
mod types;

pub use paginator::{Pages, Paginator};
pub use types::{Page, Pageable};
