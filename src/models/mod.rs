pub mod event;
pub mod member;
pub mod overlay;
