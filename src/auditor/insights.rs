use crate::auditor::report::total_spent;
use crate::models::{Receipt, Trip};

/// Category of an audit advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    OverBudget,
    UnderBudget,
    AboveDailyTarget,
    TopSpending,
    CostSaving,
}

impl InsightKind {
    /// Presentation heading.
    pub fn label(&self) -> &'static str {
        match self {
            InsightKind::OverBudget => "Over Budget",
            InsightKind::UnderBudget => "Under Budget",
            InsightKind::AboveDailyTarget => "Above Daily Target",
            InsightKind::TopSpending => "Top Spending",
            InsightKind::CostSaving => "Next Time",
        }
    }
}

/// One advisory produced by the audit rules.
#[derive(Debug, Clone)]
pub struct Insight {
    pub kind: InsightKind,
    pub message: String,
}

impl Insight {
    fn new(kind: InsightKind, message: String) -> Self {
        Self { kind, message }
    }
}

/// Advisory rules over a trip's receipts, in a fixed order.
///
/// Each rule fires independently except the budget pair, where over-budget
/// wins over under-budget and an exact match produces neither. An empty
/// result means nothing stood out.
pub fn insights(trip: &Trip, receipts: &[Receipt], target_per_scout_per_day: f64) -> Vec<Insight> {
    let spent = total_spent(receipts);
    let planned = trip.total_cost;
    let difference = spent - planned;
    let per_scout_actual = spent / trip.num_scouts as f64;
    let actual_per_day = per_scout_actual / trip.days as f64;

    let mut out = Vec::new();

    if difference > 0.0 {
        let percent = if planned > 0.0 {
            difference / planned * 100.0
        } else {
            0.0
        };
        out.push(Insight::new(
            InsightKind::OverBudget,
            format!(
                "You spent ${difference:.2} ({percent:.1}%) more than planned. \
                 Consider shopping at bulk stores or using coupons for next trip."
            ),
        ));
    } else if difference < 0.0 {
        out.push(Insight::new(
            InsightKind::UnderBudget,
            format!(
                "Great job! You saved ${:.2}. This could be allocated to other troop activities.",
                difference.abs()
            ),
        ));
    }

    if actual_per_day > target_per_scout_per_day {
        out.push(Insight::new(
            InsightKind::AboveDailyTarget,
            format!(
                "Your actual cost of ${actual_per_day:.2} per scout per day exceeds your \
                 target of ${target_per_scout_per_day:.2}. Try simpler recipes or buying in bulk."
            ),
        ));
    }

    if receipts.len() > 1 {
        if let Some((store, total)) = top_store(receipts) {
            out.push(Insight::new(
                InsightKind::TopSpending,
                format!(
                    "You spent the most at {store} (${total:.2}). \
                     Consider comparing prices with other stores for better deals."
                ),
            ));
        }
    }

    if difference > 0.0 {
        out.push(Insight::new(
            InsightKind::CostSaving,
            "Consider these budget-friendly options: Hot Dogs & Chips for lunch, \
             Pancakes instead of Bacon & Eggs, or Spaghetti for dinner."
                .to_string(),
        ));
    }

    out
}

/// Store with the highest summed spending. Ties keep the store that
/// appeared first in receipt order.
fn top_store(receipts: &[Receipt]) -> Option<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();
    for receipt in receipts {
        match totals.iter_mut().find(|(store, _)| *store == receipt.store) {
            Some((_, sum)) => *sum += receipt.amount,
            None => totals.push((receipt.store.clone(), receipt.amount)),
        }
    }

    let mut top: Option<(String, f64)> = None;
    for (store, total) in totals {
        if top.as_ref().map_or(true, |(_, best)| total > *best) {
            top = Some((store, total));
        }
    }
    top
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShoppingList;
    use chrono::NaiveDate;

    fn trip(total_cost: f64) -> Trip {
        Trip {
            id: "trip_1".to_string(),
            trip_name: "Fall Campout".to_string(),
            num_scouts: 10,
            days: 3,
            start_date: NaiveDate::from_ymd_opt(2025, 10, 3).unwrap(),
            plan: Vec::new(),
            shopping_list: ShoppingList::new(),
            total_cost,
        }
    }

    fn receipt(store: &str, amount: f64) -> Receipt {
        Receipt {
            id: String::new(),
            store: store.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            amount,
            notes: None,
        }
    }

    fn kinds(insights: &[Insight]) -> Vec<InsightKind> {
        insights.iter().map(|i| i.kind).collect()
    }

    #[test]
    fn test_over_budget_fires_first_and_last_rules() {
        let trip = trip(100.0);
        let receipts = vec![receipt("Costco", 120.0)];

        let result = insights(&trip, &receipts, 6.0);
        assert_eq!(
            kinds(&result),
            vec![InsightKind::OverBudget, InsightKind::CostSaving]
        );
        assert!(result[0].message.contains("$20.00"));
        assert!(result[0].message.contains("(20.0%)"));
    }

    #[test]
    fn test_zero_receipts_under_budget_only() {
        let trip = trip(100.0);

        let result = insights(&trip, &[], 6.0);
        assert_eq!(kinds(&result), vec![InsightKind::UnderBudget]);
        assert!(result[0].message.contains("$100.00"));
    }

    #[test]
    fn test_above_daily_target() {
        // $120 over 10 scouts over 3 days = $4/scout/day
        let trip = trip(120.0);
        let receipts = vec![receipt("Costco", 120.0)];

        let below = insights(&trip, &receipts, 6.0);
        assert!(!below.iter().any(|i| i.kind == InsightKind::AboveDailyTarget));

        let above = insights(&trip, &receipts, 3.5);
        let daily: Vec<&Insight> = above
            .iter()
            .filter(|i| i.kind == InsightKind::AboveDailyTarget)
            .collect();
        assert_eq!(daily.len(), 1);
        assert!(daily[0].message.contains("$4.00"));
        assert!(daily[0].message.contains("$3.50"));
    }

    #[test]
    fn test_top_store_sums_and_breaks_ties_by_first_seen() {
        let trip = trip(500.0);
        let receipts = vec![
            receipt("Walmart", 30.0),
            receipt("Costco", 50.0),
            receipt("Walmart", 20.0),
        ];

        let result = insights(&trip, &receipts, 100.0);
        let top: Vec<&Insight> = result
            .iter()
            .filter(|i| i.kind == InsightKind::TopSpending)
            .collect();
        assert_eq!(top.len(), 1);
        assert!(top[0].message.contains("Costco ($50.00)"));

        // Equal sums: the first store encountered wins
        let tied = vec![receipt("Walmart", 50.0), receipt("Costco", 50.0)];
        let result = insights(&trip, &tied, 100.0);
        let top: Vec<&Insight> = result
            .iter()
            .filter(|i| i.kind == InsightKind::TopSpending)
            .collect();
        assert!(top[0].message.contains("Walmart ($50.00)"));
    }

    #[test]
    fn test_single_receipt_has_no_top_store() {
        let trip = trip(500.0);
        let receipts = vec![receipt("Costco", 100.0)];

        let result = insights(&trip, &receipts, 100.0);
        assert!(!result.iter().any(|i| i.kind == InsightKind::TopSpending));
    }

    #[test]
    fn test_exact_budget_match_can_be_empty() {
        let trip = trip(100.0);
        let receipts = vec![receipt("Costco", 100.0)];

        let result = insights(&trip, &receipts, 100.0);
        assert!(result.is_empty());
    }

    #[test]
    fn test_labels() {
        assert_eq!(InsightKind::OverBudget.label(), "Over Budget");
        assert_eq!(InsightKind::CostSaving.label(), "Next Time");
    }
}
