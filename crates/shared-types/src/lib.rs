pub mod activity;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod feature_flags;
pub mod models;
pub mod navigation;
pub mod requests;

pub use activity::*;
pub use config::*;
pub use dashboard::*;
pub use error::*;
pub use feature_flags::*;
pub use models::*;
pub use navigation::*;
pub use requests::*;
