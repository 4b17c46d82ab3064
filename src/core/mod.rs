pub mod add;
pub mod del;
pub mod documents;
pub mod list;
pub mod log;
