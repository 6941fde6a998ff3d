pub mod insights;
pub mod report;

pub use insights::{insights, Insight, InsightKind};
pub use report::{budget_difference, is_over_budget, report, total_spent, AuditReport};
