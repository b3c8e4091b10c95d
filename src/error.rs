// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

/// Conditions the designator cannot recover from. Callers are expected to
/// terminate the process when one of these surfaces.
#[derive(Error, Debug)]
pub enum TaggerError {
    #[error("Failed to list gateway pods: {0}")]
    ListPods(#[source] kube::Error),

    #[error("Failed to promote pod {pod}: {source}")]
    PromotePod {
        pod: String,
        #[source]
        source: kube::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TaggerError>;
