//! Macro Calculator Library
//!
//! Converts estimated food volumes into macronutrient totals using a catalog
//! of FNDDS food records.

pub mod build_info;
pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod nutrition;
pub mod store;
pub mod tools;
