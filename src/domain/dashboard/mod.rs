pub mod dto;
pub mod handler;
pub mod service;

pub use handler::{dashboard_handler, trends_handler};
pub use service::{build_dashboard, build_trends};
