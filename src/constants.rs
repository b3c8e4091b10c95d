// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Label that marks a pod as the management leader
pub mod marker {
    /// Label key carried by the leader pod
    pub const KEY: &str = "management-access";
    /// Label value carried by the leader pod
    pub const VALUE: &str = "leader";
}

/// Container whose readiness is reported for leader pods
pub const GATEWAY_CONTAINER: &str = "gateway";

/// Location of the configuration file, relative to the working directory
pub const CONFIG_PATH: &str = "./config.yaml";

/// Delay between two reconcile cycles
pub const RECONCILE_INTERVAL_SECS: u64 = 10;
