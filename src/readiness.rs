//! Startup gate: block until every remote service accepts a connection.

use std::fmt;
use std::time::Duration;

use log::{error, info};
use tokio::time::{sleep, timeout};
use tonic::transport::Endpoint;

/// A fixed service address probed before the demo starts.
#[derive(Clone, Debug)]
pub struct ServiceTarget {
    pub name: String,
    pub port: u16,
}

impl ServiceTarget {
    pub fn new(name: impl Into<String>, port: u16) -> Self {
        Self {
            name: name.into(),
            port,
        }
    }

    /// URI used for the readiness probe and for the long-lived client channel.
    pub fn uri(&self) -> String {
        format!("http://{}:{}", self.name, self.port)
    }
}

impl fmt::Display for ServiceTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.port)
    }
}

/// A single connectivity check, distinct from a business call.
#[tonic::async_trait]
pub trait Probe {
    async fn probe(&mut self, target: &ServiceTarget, timeout: Duration) -> bool;
}

/// Probes by opening a transient gRPC channel and dropping it once connected.
pub struct GrpcProbe;

#[tonic::async_trait]
impl Probe for GrpcProbe {
    async fn probe(&mut self, target: &ServiceTarget, probe_timeout: Duration) -> bool {
        let endpoint = match Endpoint::from_shared(target.uri()) {
            Ok(endpoint) => endpoint.connect_timeout(probe_timeout),
            Err(_) => return false,
        };

        // The outer timeout also bounds name resolution, which
        // connect_timeout does not cover.
        matches!(timeout(probe_timeout, endpoint.connect()).await, Ok(Ok(_)))
    }
}

/// Waits for every target in list order, one at a time.
///
/// Each target gets at most `max_retries` probe attempts with `retry_delay`
/// between them. Exhausting the budget aborts the whole wait immediately;
/// the remaining targets are never probed.
pub async fn wait_for_targets<P: Probe>(
    probe: &mut P,
    targets: &[ServiceTarget],
    max_retries: u32,
    retry_delay: Duration,
    probe_timeout: Duration,
) -> bool {
    for target in targets {
        info!("Waiting for {} to be ready...", target.name);

        let mut retry_count = 0;
        loop {
            if probe.probe(target, probe_timeout).await {
                info!("{} is ready!", target.name);
                break;
            }

            retry_count += 1;
            if retry_count >= max_retries {
                error!(
                    "Failed to connect to {} after {} attempts",
                    target.name, max_retries
                );
                return false;
            }

            info!(
                "Retrying connection to {}... ({}/{})",
                target.name, retry_count, max_retries
            );
            sleep(retry_delay).await;
        }
    }

    true
}
