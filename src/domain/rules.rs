//! The receipt scoring rules.
//!
//! Seven independent rules each award a non-negative number of points and the
//! receipt's score is their sum. Rules are best-effort: a field a rule cannot
//! parse makes that rule award nothing, it never fails the whole calculation.

use super::points::Points;
use super::receipt::{Item, Receipt};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const ROUND_DOLLAR_BONUS: u64 = 50;
const QUARTER_MULTIPLE_BONUS: u64 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const ODD_DAY_BONUS: u64 = 6;
const AFTERNOON_BONUS: u64 = 10;

/// Purchases at or after 14:00 and strictly before 16:00 earn the afternoon bonus.
const AFTERNOON_HOURS: std::ops::Range<i64> = 14..16;

/// Share of an item's price awarded by the description rule: 0.2
fn description_price_rate() -> Decimal {
    Decimal::new(2, 1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// One point per ASCII letter or digit in the retailer name.
    RetailerName,
    /// 50 points when the total has no cents.
    RoundDollarTotal,
    /// 25 points when the total is a multiple of 0.25.
    QuarterMultipleTotal,
    /// 5 points for every two items.
    ItemPairs,
    /// `ceil(price * 0.2)` for each item whose trimmed description length, in
    /// UTF-8 bytes, is a positive multiple of 3.
    ItemDescription,
    /// 6 points when the day of the purchase date is odd.
    OddPurchaseDay,
    /// 10 points when the purchase hour is 14 or 15.
    AfternoonPurchase,
}

impl Rule {
    pub const ALL: [Rule; 7] = [
        Rule::RetailerName,
        Rule::RoundDollarTotal,
        Rule::QuarterMultipleTotal,
        Rule::ItemPairs,
        Rule::ItemDescription,
        Rule::OddPurchaseDay,
        Rule::AfternoonPurchase,
    ];

    /// Points this rule awards to `receipt`; zero when the rule does not apply
    /// or its input cannot be parsed.
    pub fn apply(self, receipt: &Receipt) -> Points {
        self.evaluate(receipt).unwrap_or(Points::ZERO)
    }

    fn evaluate(self, receipt: &Receipt) -> Option<Points> {
        match self {
            Rule::RetailerName => Some(retailer_points(&receipt.retailer)),
            Rule::RoundDollarTotal => round_dollar_points(&receipt.total),
            Rule::QuarterMultipleTotal => quarter_multiple_points(&receipt.total),
            Rule::ItemPairs => Some(item_pair_points(receipt.items.len())),
            Rule::ItemDescription => Some(receipt.items.iter().map(description_points).sum()),
            Rule::OddPurchaseDay => odd_day_points(&receipt.purchase_date),
            Rule::AfternoonPurchase => afternoon_points(&receipt.purchase_time),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rule::RetailerName => "retailer_name",
            Rule::RoundDollarTotal => "round_dollar_total",
            Rule::QuarterMultipleTotal => "quarter_multiple_total",
            Rule::ItemPairs => "item_pairs",
            Rule::ItemDescription => "item_description",
            Rule::OddPurchaseDay => "odd_purchase_day",
            Rule::AfternoonPurchase => "afternoon_purchase",
        };
        f.write_str(name)
    }
}

/// Per-rule contributions for one receipt, in rule order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    entries: Vec<(Rule, Points)>,
}

impl PointsBreakdown {
    pub fn total(&self) -> Points {
        self.entries.iter().map(|(_, points)| *points).sum()
    }

    pub fn points_for(&self, rule: Rule) -> Points {
        self.entries
            .iter()
            .find(|(r, _)| *r == rule)
            .map(|(_, points)| *points)
            .unwrap_or(Points::ZERO)
    }

    pub fn entries(&self) -> &[(Rule, Points)] {
        &self.entries
    }
}

impl fmt::Display for PointsBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (rule, points)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{rule}={points}")?;
        }
        Ok(())
    }
}

/// Scores every rule against `receipt`.
pub fn breakdown(receipt: &Receipt) -> PointsBreakdown {
    PointsBreakdown {
        entries: Rule::ALL
            .iter()
            .map(|rule| (*rule, rule.apply(receipt)))
            .collect(),
    }
}

/// Total points awarded to `receipt`.
pub fn calculate_points(receipt: &Receipt) -> Points {
    breakdown(receipt).total()
}

fn retailer_points(retailer: &str) -> Points {
    let count = retailer.chars().filter(char::is_ascii_alphanumeric).count();
    Points::new(count as u64)
}

// A total shorter than ".00" simply does not qualify.
fn round_dollar_points(total: &str) -> Option<Points> {
    total
        .ends_with(".00")
        .then_some(Points::new(ROUND_DOLLAR_BONUS))
}

fn quarter_multiple_points(total: &str) -> Option<Points> {
    let cents = parse_amount(total)?
        .checked_mul(Decimal::ONE_HUNDRED)?
        .trunc();
    (cents % Decimal::from(25) == Decimal::ZERO).then_some(Points::new(QUARTER_MULTIPLE_BONUS))
}

fn item_pair_points(item_count: usize) -> Points {
    Points::new(((item_count / 2) as u64).saturating_mul(POINTS_PER_ITEM_PAIR))
}

fn description_points(item: &Item) -> Points {
    let length = item.short_description.trim().len();
    if length == 0 || length % 3 != 0 {
        return Points::ZERO;
    }
    parse_amount(&item.price)
        .and_then(|price| price.checked_mul(description_price_rate()))
        .map(|scaled| scaled.ceil().max(Decimal::ZERO))
        .and_then(|rounded| rounded.to_u64())
        .map(Points::new)
        .unwrap_or(Points::ZERO)
}

fn odd_day_points(purchase_date: &str) -> Option<Points> {
    let parts: Vec<&str> = purchase_date.split('-').collect();
    let [_, _, day] = parts.as_slice() else {
        return None;
    };
    let day: i64 = day.parse().ok()?;
    (day % 2 == 1).then_some(Points::new(ODD_DAY_BONUS))
}

fn afternoon_points(purchase_time: &str) -> Option<Points> {
    let parts: Vec<&str> = purchase_time.split(':').collect();
    let [hour, _] = parts.as_slice() else {
        return None;
    };
    let hour: i64 = hour.parse().ok()?;
    AFTERNOON_HOURS
        .contains(&hour)
        .then_some(Points::new(AFTERNOON_BONUS))
}

fn parse_amount(amount: &str) -> Option<Decimal> {
    Decimal::from_str(amount).ok()
}
