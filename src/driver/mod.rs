// Copyright (c) 2025 - Cowboy AI, Inc.
//! Apply Driver Assembly
//!
//! - [`DriverFactory`] - validated construction of drivers
//! - [`Applier`] / [`ApplyDriver`] - the assembled driver and its capability
//!   trait
//! - [`ApplyMode`] - enumerated construction intent

pub mod applier;
pub mod factory;

pub use applier::{Applier, ApplyDriver, ApplyMode};
pub use factory::DriverFactory;
