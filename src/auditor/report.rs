use crate::models::{Receipt, Trip};

/// Planned-versus-actual cost comparison for one trip.
///
/// Derived on demand from the trip and its receipts, never persisted.
#[derive(Debug, Clone)]
pub struct AuditReport {
    pub trip_id: String,
    pub trip_name: String,
    pub planned_cost: f64,
    pub actual_spent: f64,
    pub difference: f64,
    pub percent_difference: f64,
    pub is_over_budget: bool,
    pub receipts_count: usize,
    pub per_scout_actual: f64,
}

/// Sum of all receipt amounts; zero when none exist.
pub fn total_spent(receipts: &[Receipt]) -> f64 {
    receipts.iter().map(|r| r.amount).sum()
}

/// Signed budget variance. Positive means the trip overspent its plan.
pub fn budget_difference(trip: &Trip, receipts: &[Receipt]) -> f64 {
    total_spent(receipts) - trip.total_cost
}

pub fn is_over_budget(trip: &Trip, receipts: &[Receipt]) -> bool {
    budget_difference(trip, receipts) > 0.0
}

/// Build the audit report for a trip from its receipts.
pub fn report(trip: &Trip, receipts: &[Receipt]) -> AuditReport {
    let actual_spent = total_spent(receipts);
    let difference = actual_spent - trip.total_cost;
    let percent_difference = if trip.total_cost > 0.0 {
        difference / trip.total_cost * 100.0
    } else {
        0.0
    };

    AuditReport {
        trip_id: trip.id.clone(),
        trip_name: trip.trip_name.clone(),
        planned_cost: trip.total_cost,
        actual_spent,
        difference,
        percent_difference,
        is_over_budget: difference > 0.0,
        receipts_count: receipts.len(),
        per_scout_actual: actual_spent / trip.num_scouts as f64,
    }
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

    fn receipt(id: &str, store: &str, amount: f64) -> Receipt {
        Receipt {
            id: id.to_string(),
            store: store.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            amount,
            notes: None,
        }
    }

    #[test]
    fn test_overspent_trip() {
        let trip = trip(100.0);
        let receipts = vec![
            receipt("receipt_1", "Costco", 80.0),
            receipt("receipt_2", "Walmart", 40.0),
        ];

        let report = report(&trip, &receipts);
        assert!((report.actual_spent - 120.0).abs() < 0.001);
        assert!((report.difference - 20.0).abs() < 0.001);
        assert!((report.percent_difference - 20.0).abs() < 0.001);
        assert!(report.is_over_budget);
        assert_eq!(report.receipts_count, 2);
        assert!((report.per_scout_actual - 12.0).abs() < 0.001);
    }

    #[test]
    fn test_no_receipts_is_under_budget() {
        let trip = trip(100.0);
        let report = report(&trip, &[]);

        assert!((report.actual_spent - 0.0).abs() < 0.001);
        assert!((report.difference + 100.0).abs() < 0.001);
        assert!((report.percent_difference + 100.0).abs() < 0.001);
        assert!(!report.is_over_budget);
        assert_eq!(report.receipts_count, 0);
    }

    #[test]
    fn test_zero_planned_cost_has_zero_percent() {
        let trip = trip(0.0);
        let receipts = vec![receipt("receipt_1", "Costco", 50.0)];

        let report = report(&trip, &receipts);
        assert!((report.difference - 50.0).abs() < 0.001);
        assert!((report.percent_difference - 0.0).abs() < 0.001);
        assert!(report.is_over_budget);
    }

    #[test]
    fn test_exactly_on_budget() {
        let trip = trip(75.0);
        let receipts = vec![receipt("receipt_1", "Kroger", 75.0)];

        assert!(!is_over_budget(&trip, &receipts));
        assert!((budget_difference(&trip, &receipts) - 0.0).abs() < 0.001);
    }
}
