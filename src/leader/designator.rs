// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Leader designator - periodically makes sure one gateway pod carries the leader marker.

use crate::config::Config;
use crate::constants::RECONCILE_INTERVAL_SECS;
use crate::error::{Result, TaggerError};
use crate::kubernetes::PodApi;
use crate::leader::marker::{gateway_readiness, is_leader, leader_patch, promotion_target};
use kube::ResourceExt;
use std::convert::Infallible;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

/// A leader pod seen during a cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderStatus {
    pub name: String,
    /// `None` when the pod reports no `gateway` container status
    pub gateway_ready: Option<bool>,
}

/// Result of one non-fatal reconcile cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Nothing matched the selector
    NoCandidates,
    /// The API answered the list with a status error; nothing was changed
    ListFailed { message: String },
    /// At least one pod already leads
    LeaderPresent { leaders: Vec<LeaderStatus> },
    /// The named pod received the leader marker
    Promoted { pod: String },
}

/// How a failed list call is handled within a cycle
#[derive(Debug, PartialEq, Eq)]
enum ListFailure {
    NotFound,
    Status(String),
}

/// Structured API errors are survivable, anything else is fatal.
fn classify_list_error(err: kube::Error) -> Result<ListFailure> {
    match err {
        kube::Error::Api(e) if e.code == 404 => Ok(ListFailure::NotFound),
        kube::Error::Api(e) => Ok(ListFailure::Status(e.message)),
        other => Err(TaggerError::ListPods(other)),
    }
}

pub struct Designator<P> {
    pods: P,
    namespace: String,
    selector: String,
    interval: Duration,
}

impl<P: PodApi> Designator<P> {
    pub fn new(pods: P, config: &Config) -> Self {
        Self {
            pods,
            namespace: config.namespace.clone(),
            selector: config.label_selector(),
            interval: Duration::from_secs(RECONCILE_INTERVAL_SECS),
        }
    }

    /// Override the delay between cycles
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Reconcile forever. Only returns when a cycle hits a fatal error.
    pub async fn run(&self) -> Result<Infallible> {
        info!(
            "Designating management leader in namespace '{}' with selector '{}' every {:?}",
            self.namespace, self.selector, self.interval
        );

        loop {
            let outcome = self.reconcile().await?;
            debug!("Cycle finished: {:?}", outcome);
            sleep(self.interval).await;
        }
    }

    /// Run a single fetch-detect-promote cycle
    #[instrument(skip(self), fields(namespace = %self.namespace))]
    pub async fn reconcile(&self) -> Result<CycleOutcome> {
        let pods = match self.pods.list(&self.namespace, &self.selector).await {
            Ok(pods) => pods,
            Err(e) => {
                return match classify_list_error(e)? {
                    ListFailure::NotFound => {
                        info!("No gateway pods found");
                        Ok(CycleOutcome::NoCandidates)
                    }
                    ListFailure::Status(message) => {
                        warn!("Error getting gateway pod list {}", message);
                        Ok(CycleOutcome::ListFailed { message })
                    }
                };
            }
        };

        if pods.is_empty() {
            info!("No gateway pods found");
            return Ok(CycleOutcome::NoCandidates);
        }

        let leaders: Vec<LeaderStatus> = pods
            .iter()
            .filter(|p| is_leader(p))
            .map(|p| {
                let status = LeaderStatus {
                    name: p.name_any(),
                    gateway_ready: gateway_readiness(p),
                };
                match status.gateway_ready {
                    Some(true) => {
                        info!("management pod {} is ready for connections", status.name)
                    }
                    Some(false) => {
                        info!("management pod {} is not ready for connections", status.name)
                    }
                    None => debug!("management pod {} has no gateway container status", status.name),
                }
                status
            })
            .collect();

        if !leaders.is_empty() {
            return Ok(CycleOutcome::LeaderPresent { leaders });
        }

        let Some(target) = promotion_target(&pods) else {
            return Ok(CycleOutcome::NoCandidates);
        };
        let name = target.name_any();

        info!("tagging a new management pod");
        self.pods
            .patch(&self.namespace, &name, &leader_patch())
            .await
            .map_err(|source| TaggerError::PromotePod {
                pod: name.clone(),
                source,
            })?;
        info!("the new management pod is {}", name);

        Ok(CycleOutcome::Promoted { pod: name })
    }
}
