//! Report generator module.

mod report;

pub use report::{format_mm, format_money, generate_report};
