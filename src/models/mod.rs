pub mod auction;
pub mod auth;
pub mod dashboard;
pub mod prediction;

pub use auction::*;
pub use auth::*;
pub use dashboard::*;
pub use prediction::*;
