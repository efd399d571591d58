//! Format-specific checkers.
//!
//! Each sub-module counts how many expected values occur in one kind of file:
//! - `tabular`: CSV rows, rescanned per value
//! - `record`: JSON tree search over values (never keys)
//! - `text`: plain lines, stream rewound per value
//!
//! Checkers only count. Logging the verdict is the dispatcher's job.

pub mod record;
pub mod tabular;
pub mod text;
