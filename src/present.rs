// src/present.rs
//! Render-shaping for the dashboard.
//!
//! Everything the pages display that is *derived* rather than copied lives
//! here, as plain functions over the wire types:
//! - product card image / title fallbacks,
//! - "latest price" (last element of a listing's history) and its formatting,
//! - the four states a fetched list can be in.
//!
//! The GUI and CLI both render from these, so the fallbacks only exist once.

use crate::api::{Client, Listing, Product, Query};
use crate::config::consts::{PLACEHOLDER_IMG_URL, PRICE_NOT_AVAILABLE};
use crate::state::Collection;

/// What a list area should show.
#[derive(Debug, PartialEq)]
pub enum ListState<'a, T> {
    /// Never fetched, nothing in flight.
    NotLoaded,
    /// First fetch in flight.
    Loading,
    /// Fetched; the backend returned zero rows.
    Empty,
    Rows(&'a [T]),
}

pub fn list_state<T>(c: &Collection<T>) -> ListState<'_, T> {
    match c.items() {
        None if c.is_loading() => ListState::Loading,
        None => ListState::NotLoaded,
        Some([]) => ListState::Empty,
        Some(rows) => ListState::Rows(rows),
    }
}

/// One result card, ready to draw.
#[derive(Debug, PartialEq)]
pub struct ProductCard<'a> {
    pub image_url: &'a str,
    pub title: String,
    pub listings: Vec<ListingLine<'a>>,
}

#[derive(Debug, PartialEq)]
pub struct ListingLine<'a> {
    pub url: &'a str,
    pub title: Option<&'a str>,
    /// Latest price, formatted, or "N/A".
    pub price: String,
    /// Full history, oldest first.
    pub history: Vec<PricePoint<'a>>,
    /// Every listing but the last is followed by a separator.
    pub separator_after: bool,
}

impl ListingLine<'_> {
    /// Any recorded price can be expanded, even a lone one.
    pub fn has_history(&self) -> bool {
        !self.history.is_empty()
    }
}

#[derive(Debug, PartialEq)]
pub struct PricePoint<'a> {
    pub price: String,
    pub at: Option<&'a str>,
}

pub fn product_card(p: &Product) -> ProductCard<'_> {
    let n = p.listings.len();
    ProductCard {
        image_url: card_image(p),
        title: card_title(p),
        listings: p
            .listings
            .iter()
            .enumerate()
            .map(|(i, l)| ListingLine {
                url: &l.url,
                title: l.title.as_deref().filter(|t| !t.is_empty()),
                price: display_price(l),
                history: l
                    .prices
                    .iter()
                    .map(|p| PricePoint {
                        price: p.price.map(format_price).unwrap_or_else(|| s!(PRICE_NOT_AVAILABLE)),
                        at: p.created_at.as_deref(),
                    })
                    .collect(),
                separator_after: i + 1 < n,
            })
            .collect(),
    }
}

/// First listing's image, else the placeholder.
pub fn card_image(p: &Product) -> &str {
    p.listings
        .first()
        .and_then(|l| l.img_url.as_deref())
        .filter(|u| !u.is_empty())
        .unwrap_or(PLACEHOLDER_IMG_URL)
}

pub fn card_title(p: &Product) -> String {
    match p.title.as_deref() {
        Some(t) if !t.is_empty() => s!(t),
        _ => format!("Producto {}", p.id),
    }
}

/// Last entry of the history. Zero counts as missing, like an absent price.
pub fn latest_price(l: &Listing) -> Option<f64> {
    l.prices.last()?.price.filter(|v| *v != 0.0 && v.is_finite())
}

pub fn display_price(l: &Listing) -> String {
    latest_price(l).map(format_price).unwrap_or_else(|| s!(PRICE_NOT_AVAILABLE))
}

/// en-US grouping, at most three decimals, no trailing zeros.
pub fn format_price(v: f64) -> String {
    let fixed = format!("{:.3}", v.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((&fixed, ""));
    let frac = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if v < 0.0 && (grouped != "0" || !frac.is_empty()) { "-" } else { "" };
    if frac.is_empty() { format!("{sign}{grouped}") } else { format!("{sign}{grouped}.{frac}") }
}

/// Option text for client selectors.
pub fn client_option(c: &Client) -> String {
    format!("ID: {} - {} ({})", c.id, c.name, c.email)
}

/// Owner column for a query row; listings do not always echo it.
pub fn query_owner(q: &Query, requested_for: Option<i64>) -> String {
    q.client_id
        .or(requested_for)
        .map(|id| id.to_string())
        .unwrap_or_else(|| s!("—"))
}
