//! panelize-test - Regression test framework for the panelize workspace
//!
//! Provides [`RegParams`], a comparison accumulator modeled on classic
//! regression-test drivers: every comparison in a test runs and is
//! recorded, and `cleanup()` reports the full list of deviations at the
//! end instead of stopping at the first failed assertion.
//!
//! # Usage
//!
//! ```
//! use panelize_test::RegParams;
//!
//! let mut rp = RegParams::new("doc");
//! rp.compare_values(4.0, 2.0 + 2.0, 0.0);
//! assert!(rp.cleanup());
//! ```

mod params;

pub use params::RegParams;
