// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Management leader designation for gateway pods.

pub mod designator;
pub mod marker;

pub use designator::{CycleOutcome, Designator, LeaderStatus};
