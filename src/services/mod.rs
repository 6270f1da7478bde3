//! Service layer for daybudget
//!
//! The ledger and the budget allocator hold the only mutable state; the
//! metrics service and the alert evaluator derive everything else from them.

pub mod alerts;
pub mod allocator;
pub mod ledger;
pub mod metrics;

pub use alerts::{AlertEvaluator, DEFAULT_WARNING_AT};
pub use allocator::BudgetAllocator;
pub use ledger::Ledger;
pub use metrics::MetricsService;
