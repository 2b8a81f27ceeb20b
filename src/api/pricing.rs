//! # Pricing Display Module
//!
//! Turns the raw digit-only price strings of a payload into the figures the
//! landing view renders: Colombian-peso formatting, per-installment amounts
//! and the markup of each installment tier against the immediate-liquidity
//! base price.

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rust_decimal_macros::dec;
use serde::Serialize;
use std::str::FromStr;

use crate::models::quote::PricingPayload;

/// One renderable product card of the landing view
#[derive(Debug, Serialize, PartialEq)]
pub struct ProductCard {
    /// Number of installments; `0` means immediate liquidity
    pub installments: u32,
    /// Formatted purchase price, e.g. `$153.226.755`
    pub price: String,
    /// Formatted amount of a single installment, absent for immediate liquidity
    pub installment_price: Option<String>,
    /// Markup against the base price, e.g. `+3.1%`; absent when the base
    /// price is unusable or for the base card itself
    pub markup: Option<String>,
}

fn parse_amount(raw: &str) -> Option<Decimal> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    Decimal::from_str(&digits).ok()
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    grouped
}

/// Renders an amount in Colombian-peso style: `$` sign, `.` as thousands
/// separator, no decimal places
pub fn format_cop(amount: Decimal) -> String {
    let pesos = amount.round_dp(0).to_i64().unwrap_or_default();
    if pesos < 0 {
        return format!("-${}", group_thousands(&pesos.unsigned_abs().to_string()));
    }

    format!("${}", group_thousands(&pesos.to_string()))
}

/// Formats a raw payload price string. Anything unparseable renders as the
/// zero-currency string instead of failing.
pub fn format_price(raw: &str) -> String {
    match parse_amount(raw) {
        Some(amount) => format_cop(amount),
        None => "$0".into(),
    }
}

/// Amount of one installment when `price` is paid in `installments` parts,
/// rounded to whole pesos
pub fn installment_amount(price: &str, installments: u32) -> Decimal {
    if installments == 0 {
        return Decimal::ZERO;
    }

    let Some(total) = parse_amount(price) else {
        return Decimal::ZERO;
    };

    (total / Decimal::from(installments)).round_dp(0)
}

/// Percentage markup of an installment tier over the immediate-liquidity
/// base price, one decimal place with an explicit sign.
///
/// Returns `None` when either amount is unparseable or the base is zero, so
/// the view can omit the badge instead of dividing by zero.
pub fn markup_pct(tier: &str, base: &str) -> Option<String> {
    let tier = parse_amount(tier)?;
    let base = parse_amount(base)?;
    if base.is_zero() {
        return None;
    }

    let pct = ((tier - base) / base * dec!(100)).round_dp(1);
    let sign = if pct.is_sign_negative() { "" } else { "+" };

    Some(format!("{sign}{pct}%"))
}

/// Assembles the product cards of the landing view: the three BNPL tiers
/// from longest to shortest, then the immediate-liquidity offer.
pub fn build_product_cards(payload: &PricingPayload) -> Vec<ProductCard> {
    let base = payload.precio_comite_final.as_str();

    let mut cards: Vec<ProductCard> = [
        (&payload.bnpl9, 9u32),
        (&payload.bnpl6, 6),
        (&payload.bnpl3, 3),
    ]
    .into_iter()
    .map(|(raw, installments)| ProductCard {
        installments,
        price: format_price(raw),
        installment_price: Some(format_cop(installment_amount(raw, installments))),
        markup: markup_pct(raw, base),
    })
    .collect();

    cards.push(ProductCard {
        installments: 0,
        price: format_price(base),
        installment_price: None,
        markup: None,
    });

    cards
}
