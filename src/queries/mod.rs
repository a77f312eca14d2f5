//! API operations.
//!
//! Each module provides a query struct that borrows the client's
//! [`Transport`](crate::transport::Transport) and exposes one operation with
//! its own response validation and failure policy.

pub mod auction;
pub mod auth;
pub mod dashboard;
pub mod prediction;

pub use auction::AuctionPriceQuery;
pub use auth::AuthQuery;
pub use dashboard::DashboardQuery;
pub use prediction::PredictionQuery;
