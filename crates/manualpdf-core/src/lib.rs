//! manualpdf-core - shared pieces of the manual-to-PDF converter
//!
//! This crate holds everything both rendering strategies agree on:
//!
//! - [`Settings`] loaded from `manualpdf.toml`
//! - the fixed [`Theme`]
//! - the [`ConversionStrategy`] trait and [`ConversionJob`]
//! - the direct-layout story model in [`layout`]
//! - the [`Converter`] that tries strategies in order
//!
//! # Example
//!
//! ```ignore
//! use manualpdf_core::{ConversionJob, Converter};
//!
//! let converter = Converter::empty()
//!     .with_strategy(Box::new(HtmlStrategy::new()))
//!     .with_strategy(Box::new(DirectLayoutStrategy::new()));
//! let outcome = converter.run(&ConversionJob::new("manual.md"), &mut std::io::stdout())?;
//! ```

pub mod config;
pub mod converter;
pub mod error;
pub mod layout;
pub mod strategy;
pub mod theme;

pub use config::{Settings, StrategyKind, CONFIG_FILE, DEFAULT_INPUT};
pub use converter::{format_kb, Attempt, Converter, Outcome};
pub use error::{ConvertError, Result};
pub use strategy::{output_size, ConversionJob, ConversionStrategy, UnavailableStrategy};
pub use theme::{PageSize, Theme};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
