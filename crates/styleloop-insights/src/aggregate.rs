//! Grouping and ranking of recorded return intents.

use std::collections::HashMap;

use crate::types::{ProductReturnSummary, ReasonBreakdown, ReturnAnalytics, ReturnIntentRecord};

/// Summarize the full intent history for the dashboard.
///
/// Products rank by total record count, reasons within a product by
/// percentage share. Both sorts are stable and groups keep first-seen
/// order, so the output is deterministic for a given input ordering.
pub fn summarize(records: &[ReturnIntentRecord]) -> ReturnAnalytics {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&ReturnIntentRecord>> = HashMap::new();
    for record in records {
        let name = record.product_name.as_str();
        if !groups.contains_key(name) {
            order.push(name);
        }
        groups.entry(name).or_default().push(record);
    }

    let mut product_analysis: Vec<ProductReturnSummary> = order
        .into_iter()
        .map(|name| summarize_product(name, &groups[name]))
        .collect();
    product_analysis.sort_by(|a, b| b.total_returns.cmp(&a.total_returns));

    ReturnAnalytics {
        total_returns: records.len(),
        product_analysis,
    }
}

fn summarize_product(name: &str, group: &[&ReturnIntentRecord]) -> ProductReturnSummary {
    let total = group.len();

    let mut intent_order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in group {
        let intent = record.intent.as_str();
        if !counts.contains_key(intent) {
            intent_order.push(intent);
        }
        *counts.entry(intent).or_insert(0) += 1;
    }

    let mut reasons: Vec<ReasonBreakdown> = intent_order
        .into_iter()
        .map(|intent| {
            let count = counts[intent];
            ReasonBreakdown {
                intent: intent.to_string(),
                count,
                percentage: round_one(count as f64 / total as f64 * 100.0),
            }
        })
        .collect();
    reasons.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));

    ProductReturnSummary {
        product_name: name.to_string(),
        total_returns: total,
        reasons,
        messages: group.iter().map(|r| r.message.clone()).collect(),
        strategic_advice: None,
    }
}

fn round_one(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
