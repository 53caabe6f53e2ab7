#[cfg(test)]
macro_rules! inline_csv {
    ($line:literal) => {
        $line
    };
    ($line:literal, $($lines:literal),+ $(,)?) => {
        concat!($line, "\n", inline_csv!($($lines),+))
    };
}

pub mod config;

pub mod core;
pub use crate::core::*;

pub mod error;
pub use crate::error::*;

pub mod reading;
pub use crate::reading::*;

pub mod clean;
pub use crate::clean::*;

pub mod aggregate;
pub use crate::aggregate::*;

pub mod filter;
pub use crate::filter::*;

pub mod prompt;
pub use crate::prompt::*;

pub mod session;
pub use crate::session::*;

pub mod observability;
