pub mod cache;
pub mod initialize;
pub mod kv;
pub mod pool;
