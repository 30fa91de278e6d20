//! Report command implementations

use anyhow::Result;
use purse_core::{
    aggregate::category_totals,
    models::{Profile, Transaction},
    reports::{
        format_currency, generate_spending_insights, generate_tax_guidance, investment_tips,
        summarize_budget, BudgetSummary,
    },
};

use super::truncate;

/// Widest bar in the category chart
const CHART_WIDTH: usize = 40;

pub fn render_budget(transactions: &[Transaction], json: bool) -> Result<String> {
    if json {
        let summary = BudgetSummary::compute(transactions);
        return Ok(serde_json::to_string_pretty(&summary)?);
    }
    Ok(summarize_budget(transactions))
}

pub fn cmd_budget(transactions: &[Transaction], json: bool) -> Result<()> {
    let output = render_budget(transactions, json)?;
    if !json {
        println!();
        println!("💰 Budget Summary");
        println!("   ─────────────────────────────────────────────────────────────");
    }
    println!("{}", output);
    Ok(())
}

pub fn cmd_insights(transactions: &[Transaction], profile: &Profile) -> Result<()> {
    println!();
    println!("📊 Spending Insights");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("{}", generate_spending_insights(transactions, profile));
    Ok(())
}

pub fn cmd_tax(profile: &Profile) -> Result<()> {
    println!();
    println!("🧾 Tax Guidance");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("{}", generate_tax_guidance(profile));
    Ok(())
}

pub fn cmd_invest() -> Result<()> {
    println!();
    println!("📈 Investment Tips");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("{}", investment_tips());
    Ok(())
}

/// Horizontal bar chart of the largest categories by absolute total
pub fn render_chart(transactions: &[Transaction], limit: usize) -> String {
    let totals = category_totals(transactions, limit);
    if totals.is_empty() {
        return "   No transactions to chart.".to_string();
    }

    let max = totals.iter().map(|c| c.amount).fold(0.0_f64, f64::max);
    let mut lines = Vec::with_capacity(totals.len());
    for total in &totals {
        let width = if max > 0.0 {
            ((total.amount / max) * CHART_WIDTH as f64).round() as usize
        } else {
            0
        };
        lines.push(format!(
            "   {:15} │{:<bar_width$} {}",
            truncate(&total.category, 15),
            "█".repeat(width),
            format_currency(total.amount, 0),
            bar_width = CHART_WIDTH
        ));
    }
    lines.join("\n")
}

pub fn cmd_chart(transactions: &[Transaction], limit: usize, json: bool) -> Result<()> {
    if json {
        let totals = category_totals(transactions, limit);
        println!("{}", serde_json::to_string_pretty(&totals)?);
        return Ok(());
    }

    println!();
    println!("📊 Top Expense Categories");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("{}", render_chart(transactions, limit));
    Ok(())
}

pub fn render_transactions(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "   No transactions loaded.".to_string();
    }

    let mut lines = vec![
        format!(
            "   {:10} │ {:15} │ {:>12} │ {}",
            "Date", "Category", "Amount", "Description"
        ),
        "   ───────────┼─────────────────┼──────────────┼────────────────────".to_string(),
    ];
    for tx in transactions {
        lines.push(format!(
            "   {:10} │ {:15} │ {:>12} │ {}",
            tx.date.to_string(),
            truncate(&tx.category, 15),
            format_currency(tx.amount, 2),
            truncate(&tx.description, 30)
        ));
    }
    lines.join("\n")
}

pub fn cmd_transactions(transactions: &[Transaction]) -> Result<()> {
    println!();
    println!("📋 Transactions ({})", transactions.len());
    println!("{}", render_transactions(transactions));
    Ok(())
}
