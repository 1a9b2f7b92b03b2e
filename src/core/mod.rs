pub mod datekey;
pub mod day;
pub mod overlay;
pub mod range;
pub mod store;
