pub mod add;
pub mod color;
pub mod config;
pub mod day;
pub mod group;
pub mod init;
pub mod login;
pub mod members;
pub mod upcoming;
pub mod week;
