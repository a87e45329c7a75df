//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the runtime:
//! - Math types and operations
//! - Shared read-only handles to engine-owned resources
//! - Frame timing and the fixed-step loop
//! - Logging utilities

pub mod math;
pub mod shared;
pub mod time;
pub mod logging;
