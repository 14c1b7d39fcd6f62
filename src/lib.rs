//! tallydesk - a pocket calculator and personal ledger for the terminal
//!
//! This library provides the core of the `tally` application: a desk
//! calculator engine, an income/expense ledger with chart aggregation, and a
//! small to-do list.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `calculator`: Four-function calculator engine and keypad keys
//! - `models`: Core data models (money, transactions, tasks, periods)
//! - `services`: Ledger and to-do business logic
//! - `reports`: Chart windows and category breakdowns
//! - `storage`: JSON file storage layer
//! - `audit`: Audit logging system
//! - `config`: Configuration and path management
//! - `export`: CSV, JSON and YAML exports
//! - `cli`, `display`, `tui`: User-facing surfaces
//!
//! # Example
//!
//! ```rust,ignore
//! use tallydesk::config::{paths::TallyPaths, settings::Settings};
//!
//! let paths = TallyPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod calculator;
pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{TallyError, TallyResult};
