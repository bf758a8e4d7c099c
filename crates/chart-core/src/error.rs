// File: crates/chart-core/src/error.rs
// Summary: Error kinds for chart configuration, mounting and annotation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// No drawable surface could be created for the requested size.
    #[error("no drawing surface available ({width}x{height})")]
    MissingMountPoint { width: i32, height: i32 },

    /// Milestone index has no rendered tick on the x axis.
    #[error("milestone index {index} has no rendered tick")]
    UnresolvedMilestone { index: i64 },

    #[error("month {month} out of range (expected 0..=11)")]
    InvalidMonth { month: u32 },

    #[error("date range ends ({end_year}/{end_month}) before it starts ({start_year}/{start_month})")]
    InvalidDateRange {
        start_year: i32,
        start_month: u32,
        end_year: i32,
        end_month: u32,
    },

    #[error("date range spans {months} months (at most {max} allowed)")]
    RangeTooLong { months: u64, max: u64 },

    #[error("unknown theme '{0}' (expected light or dark)")]
    UnknownTheme(String),

    #[error("invalid color '{0}' (expected #RRGGBB or #RRGGBBAA)")]
    InvalidColor(String),

    #[error("tick_every must be at least 1")]
    InvalidTickEvery,

    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
}
