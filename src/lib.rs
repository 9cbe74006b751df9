#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod constants;
pub mod validate;

pub use config::{Config, CONFIG};
