//! WorldCodex Engine library.
//!
//! ## Structure
//!
//! - `infrastructure/` - Ports and their adapters (store, fuzzy matcher, clock)
//! - `use_cases/` - Default element naming and the search facade
//! - `app` - Application composition
//! - `config` - Runner configuration

pub mod app;
pub mod config;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
