// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pod listing and label patching against the cluster API

use async_trait::async_trait;
use k8s_openapi::api::core::v1::Pod;
use kube::{
    api::{ListParams, Patch, PatchParams},
    Api, Client,
};
use tracing::{debug, instrument};

#[cfg(test)]
use mockall::automock;

/// The two cluster capabilities the designator relies on.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PodApi: Send + Sync {
    /// List the pods in `namespace` matching a `key=value,...` label selector
    async fn list(&self, namespace: &str, selector: &str) -> Result<Vec<Pod>, kube::Error>;

    /// Apply a JSON merge patch to the named pod
    async fn patch(
        &self,
        namespace: &str,
        name: &str,
        patch: &serde_json::Value,
    ) -> Result<(), kube::Error>;
}

/// `PodApi` backed by a live `kube::Client`
#[derive(Clone)]
pub struct KubePodApi {
    client: Client,
}

impl KubePodApi {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PodApi for KubePodApi {
    #[instrument(skip(self))]
    async fn list(&self, namespace: &str, selector: &str) -> Result<Vec<Pod>, kube::Error> {
        let pods: Api<Pod> = Api::namespaced(self.client.clone(), namespace);
        let mut lp = ListParams::default();
        if !selector.is_empty() {
            lp = lp.labels(selector);
        }

        let pod_list = pods.list(&lp).await?;
        debug!("Listed {} pods", pod_list.items.len());
        Ok(pod_list.items)
    }

    #[instrument(skip(self, patch))]
    async fn patch(
        &self,
        namespace: &str,
        name: &str,
        patch: &serde_json::Value,
    ) -> Result<(), kube::Error> {
        let pods: Api<Pod> = Api::namespaced(self.client.clone(), namespace);
        pods.patch(name, &PatchParams::default(), &Patch::Merge(patch))
            .await?;
        Ok(())
    }
}
