//! Revenue domain module.
//!
//! Turns a roster of membership periods into per-month cash (raw) and
//! accrual revenue. Everything here is pure: callers hand in a snapshot
//! of periods and get values back, with no I/O and no shared state.
//!
//! # Module Structure
//!
//! - `calendar` - CalendarMonth and the reporting window generator
//! - `proration` - One period's prorated share of one month
//! - `policy` - Which periods count toward raw revenue
//! - `aggregator` - Per-month totals and per-plan breakdowns
//! - `report` - Roster validation and the full monthly report
//! - `payments` - Payment totals by method
//! - `currency` - Display rounding

mod aggregator;
mod calendar;
mod currency;
mod errors;
mod payments;
mod policy;
mod proration;
mod report;

pub use aggregator::{aggregate_month, plan_breakdown, MonthlyRevenue, PlanRevenue};
pub use calendar::{month_window, CalendarMonth, MAX_WINDOW_MONTHS};
pub use currency::round_currency;
pub use errors::{InvalidPeriod, RevenueError};
pub use payments::{summarize_payments, MethodTotal, PaymentSummary};
pub use policy::RawRevenuePolicy;
pub use proration::{overlap_days, prorate, Proration};
pub use report::{compute_monthly_revenue, validate_roster};
