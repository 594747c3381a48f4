pub mod age;
pub mod config;
pub mod feed;
