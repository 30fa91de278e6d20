//! Aggregation over transaction sets
//!
//! Everything here borrows its input and works on any iterator of
//! `&Transaction`, so the same helpers run over a full set or a window.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::Transaction;

/// Length of the "recent" window used by the budget summary
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

/// Number of categories shown in the category chart
pub const DEFAULT_CHART_LIMIT: usize = 8;

/// A category and its aggregated amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// Transactions dated within `days` of the latest transaction
///
/// Falls back to the full set when the window would be empty, so the result
/// is only empty when the input is. A `days` too large to represent as a
/// date offset leaves the window unbounded.
pub fn recent_window(transactions: &[Transaction], days: i64) -> Vec<&Transaction> {
    let Some(latest) = transactions.iter().map(|t| t.date).max() else {
        return Vec::new();
    };
    let Some(cutoff) = Duration::try_days(days).and_then(|d| latest.checked_sub_signed(d))
    else {
        return transactions.iter().collect();
    };

    let window: Vec<&Transaction> = transactions.iter().filter(|t| t.date >= cutoff).collect();
    if window.is_empty() {
        transactions.iter().collect()
    } else {
        window
    }
}

/// Earliest and latest dates, or None for an empty set
pub fn date_span<'a, I>(transactions: I) -> Option<(NaiveDate, NaiveDate)>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions.into_iter().fold(None, |span, t| match span {
        None => Some((t.date, t.date)),
        Some((from, to)) => Some((from.min(t.date), to.max(t.date))),
    })
}

/// Sum of amounts for which `predicate` holds
pub fn total_where<'a, I, P>(transactions: I, predicate: P) -> f64
where
    I: IntoIterator<Item = &'a Transaction>,
    P: Fn(f64) -> bool,
{
    transactions
        .into_iter()
        .map(|t| t.amount)
        .filter(|&amount| predicate(amount))
        .sum()
}

/// Total of positive (expense) amounts
pub fn total_spent<'a, I>(transactions: I) -> f64
where
    I: IntoIterator<Item = &'a Transaction>,
{
    total_where(transactions, |amount| amount > 0.0)
}

/// Total of negative (saving/investment) amounts, as a positive number
pub fn total_saved<'a, I>(transactions: I) -> f64
where
    I: IntoIterator<Item = &'a Transaction>,
{
    -total_where(transactions, |amount| amount < 0.0)
}

/// Sum of absolute amounts across all transactions
pub fn total_absolute<'a, I>(transactions: I) -> f64
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions.into_iter().map(|t| t.amount.abs()).sum()
}

/// Signed sum per category, ordered by category name
pub fn group_sum_by_category<'a, I>(transactions: I) -> BTreeMap<String, f64>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals = BTreeMap::new();
    for t in transactions {
        *totals.entry(t.category.clone()).or_insert(0.0) += t.amount;
    }
    totals
}

/// Categories ranked by the absolute value of their signed sum (largest first)
///
/// This is the series behind the category bar chart. Ties are broken by
/// category name.
pub fn category_totals<'a, I>(transactions: I, limit: usize) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals: Vec<CategoryTotal> = group_sum_by_category(transactions)
        .into_iter()
        .map(|(category, amount)| CategoryTotal {
            category,
            amount: amount.abs(),
        })
        .collect();

    sort_descending(&mut totals);
    totals.truncate(limit);
    totals
}

/// Stable sort by amount, largest first
///
/// Input coming from a `BTreeMap` is already name-ordered, so equal amounts
/// stay alphabetical.
pub(crate) fn sort_descending(totals: &mut [CategoryTotal]) {
    totals.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(Ordering::Equal));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::load_sample;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tx(date: NaiveDate, category: &str, amount: f64) -> Transaction {
        Transaction::new(date, category, amount, "")
    }

    #[test]
    fn test_recent_window_keeps_last_30_days() {
        let transactions = vec![
            tx(date(2025, 6, 1), "Food", 100.0),
            tx(date(2025, 7, 20), "Food", 50.0),
            tx(date(2025, 7, 21), "Bills", 70.0),
            tx(date(2025, 8, 20), "Food", 30.0),
        ];

        let window = recent_window(&transactions, DEFAULT_WINDOW_DAYS);
        // Cutoff is 2025-07-21 (inclusive)
        assert_eq!(window.len(), 2);
        assert_eq!(window[0].date, date(2025, 7, 21));
        assert_eq!(window[1].date, date(2025, 8, 20));
    }

    #[test]
    fn test_recent_window_negative_days_falls_back_to_full_set() {
        let transactions = load_sample();
        // A negative window puts the cutoff after the latest date
        let window = recent_window(&transactions, -1);
        assert_eq!(window.len(), transactions.len());
    }

    #[test]
    fn test_recent_window_out_of_range_days_is_unbounded() {
        let transactions = load_sample();
        for days in [100_000_000, i64::MAX, i64::MIN] {
            let window = recent_window(&transactions, days);
            assert_eq!(window.len(), transactions.len());
        }
    }

    #[test]
    fn test_recent_window_empty() {
        assert!(recent_window(&[], DEFAULT_WINDOW_DAYS).is_empty());
    }

    #[test]
    fn test_recent_window_never_empty_for_nonempty_input() {
        let sets = vec![
            load_sample(),
            vec![tx(date(2020, 1, 1), "Food", 1.0)],
            vec![
                tx(date(2020, 1, 1), "Food", 1.0),
                tx(date(2024, 1, 1), "Food", 1.0),
            ],
        ];
        for set in &sets {
            for days in [-5, 0, 1, 30, 365] {
                assert!(!recent_window(set, days).is_empty());
            }
        }
    }

    #[test]
    fn test_date_span() {
        let sample = load_sample();
        assert_eq!(
            date_span(&sample),
            Some((date(2025, 8, 1), date(2025, 8, 20)))
        );
        assert_eq!(date_span(&Vec::<Transaction>::new()), None);
    }

    #[test]
    fn test_totals_on_sample() {
        let sample = load_sample();
        assert_eq!(total_spent(&sample), 4969.0);
        assert_eq!(total_saved(&sample), 7000.0);
        assert_eq!(total_absolute(&sample), 11969.0);
        assert_eq!(total_where(&sample, |a| a > 1000.0), 3700.0);
    }

    #[test]
    fn test_group_sum_matches_overall_total() {
        let mut transactions = load_sample();
        transactions.push(tx(date(2025, 8, 21), "Food", 125.5));
        transactions.push(tx(date(2025, 8, 22), "Food", -25.5));
        transactions.push(tx(date(2025, 8, 23), "", 10.0));

        let groups = group_sum_by_category(&transactions);
        let grouped_total: f64 = groups.values().sum();
        let overall: f64 = transactions.iter().map(|t| t.amount).sum();

        assert!((grouped_total - overall).abs() < 1e-9);
        assert_eq!(groups["Food"], 350.0);
        assert_eq!(groups["Uncategorized"], 10.0);
    }

    #[test]
    fn test_category_totals_ranked_by_absolute_value() {
        let sample = load_sample();
        let totals = category_totals(&sample, DEFAULT_CHART_LIMIT);

        assert_eq!(totals.len(), 8);
        assert_eq!(totals[0].category, "Savings");
        assert_eq!(totals[0].amount, 5000.0);
        assert_eq!(totals[1].category, "Bills");
        assert_eq!(totals[2].category, "Investment");
        assert_eq!(totals[7].category, "Transport");

        let top3 = category_totals(&sample, 3);
        assert_eq!(top3.len(), 3);
    }

    #[test]
    fn test_category_totals_ties_by_name() {
        let transactions = vec![
            tx(date(2025, 8, 1), "Zoo", 100.0),
            tx(date(2025, 8, 1), "Art", -100.0),
        ];
        let totals = category_totals(&transactions, 5);
        assert_eq!(totals[0].category, "Art");
        assert_eq!(totals[1].category, "Zoo");
    }
}
