//! Common utilities for CRC computation.
//!
//! This module provides:
//! - Const-fn lookup table generation
//! - A bitwise reference implementation used as the test oracle

pub mod reference;
pub mod tables;
