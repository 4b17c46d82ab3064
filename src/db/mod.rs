pub mod initialize;
pub mod log;
#[cfg(test)]
pub mod memory;
pub mod migrate;
pub mod pool;
pub mod queries;
pub mod stats;
pub mod store;
