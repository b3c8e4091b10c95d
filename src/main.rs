// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::Client;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pm_tagger::config::Config;
use pm_tagger::constants::CONFIG_PATH;
use pm_tagger::kubernetes::KubePodApi;
use pm_tagger::leader::Designator;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_file(CONFIG_PATH)?;
    info!("starting pm-tagger version: {}", config.version);

    // In-cluster service account when running in a pod, kubeconfig otherwise
    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    let designator = Designator::new(KubePodApi::new(client), &config);

    match designator.run().await {
        Ok(never) => match never {},
        Err(e) => {
            error!("Stopping pm-tagger: {}", e);
            Err(e.into())
        }
    }
}
