//! Sort resolution for list requests
//!
//! This module provides:
//! - Parsing of the raw `sort` parameter into a direction and candidate key
//! - Validation of the candidate against the stored and external shapes
//! - Fallback to a configured default that never fails

pub mod directive;
pub mod resolver;


pub use directive::*;
pub use resolver::*;
