pub mod middleware;
pub mod shutdown;
