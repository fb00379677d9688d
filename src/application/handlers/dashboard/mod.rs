//! Dashboard query handlers.

mod get_overview;

pub use get_overview::{DashboardOverview, GetDashboardOverviewHandler, GetDashboardOverviewQuery};
