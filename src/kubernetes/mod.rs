// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes access for the tagger: the pod capability seam and its kube-backed implementation.

pub mod pods;

pub use pods::{KubePodApi, PodApi};

#[cfg(test)]
pub use pods::MockPodApi;
