//! Database layer - connection pool and query functions
//!
//! # Design Principles
//!
//! - Every query function takes the connection handle first and is generic
//!   over `PgExecutor`, so a pool, a connection or a transaction all work
//! - One statement per call; caller values are always bound parameters
//! - Storage errors propagate unchanged

pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
