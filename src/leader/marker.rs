// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Leader marker policy: which pods lead, and which pod to promote when none does.

use crate::constants::{marker, GATEWAY_CONTAINER};
use k8s_openapi::api::core::v1::Pod;

/// Check if a pod carries the leader marker label
pub fn is_leader(pod: &Pod) -> bool {
    pod.metadata
        .labels
        .as_ref()
        .and_then(|l| l.get(marker::KEY))
        .is_some_and(|v| v == marker::VALUE)
}

/// Readiness of the pod's `gateway` container, if the pod reports one
pub fn gateway_readiness(pod: &Pod) -> Option<bool> {
    pod.status
        .as_ref()
        .and_then(|s| s.container_statuses.as_ref())
        .and_then(|statuses| statuses.iter().find(|c| c.name == GATEWAY_CONTAINER))
        .map(|c| c.ready)
}

/// The pod to promote: the first one listed, but only while no pod leads.
///
/// The list order is whatever the API returned; no ordering is imposed here.
pub fn promotion_target(pods: &[Pod]) -> Option<&Pod> {
    if pods.iter().any(is_leader) {
        return None;
    }
    pods.first()
}

/// Merge patch that applies the leader marker to a pod
pub fn leader_patch() -> serde_json::Value {
    let mut labels = serde_json::Map::new();
    labels.insert(marker::KEY.to_string(), marker::VALUE.into());

    serde_json::json!({ "metadata": { "labels": labels } })
}
