//! Application execution logic.
//!
//! One-shot flow: enumerate interfaces, classify, probe the external IP,
//! render the result.

use thiserror::Error;

use netcheck::classify::{ClassifyError, NetworkSummary, classify};
use netcheck::config::ValidatedConfig;
use netcheck::external::{ExternalIpProbe, HttpClient, ReqwestClient};
use netcheck::network::{InterfaceSource, SourceError, SystemSource};
use netcheck::output::{OutputError, render};
use netcheck::time::SystemClock;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to enumerate network interfaces.
    #[error("Failed to enumerate network interfaces: {0}")]
    Enumerate(#[source] SourceError),

    /// Classification failed (no primary interface).
    #[error(transparent)]
    Classify(#[from] ClassifyError),

    /// Failed to render the summary.
    #[error(transparent)]
    Render(#[from] OutputError),
}

/// Executes one snapshot and prints it.
///
/// # Errors
///
/// Returns an error if interface enumeration fails, no primary interface
/// qualifies, or rendering fails. A failed external IP lookup is NOT an
/// error; the summary is printed without the field and a warning logged.
///
/// # Coverage Note
///
/// This function is excluded from coverage because it touches the real
/// OS interface table and the network.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let client = ReqwestClient::with_timeout(config.timeout);
    let summary = snapshot(&SystemSource::new(), client, &config).await?;

    let rendered = render(&summary, config.format)?;
    println!("{rendered}");
    Ok(())
}

/// Builds the summary from any interface source and HTTP client.
///
/// Separated from [`execute`] so tests can inject mock collaborators.
async fn snapshot<S, C>(
    source: &S,
    client: C,
    config: &ValidatedConfig,
) -> Result<NetworkSummary, RunError>
where
    S: InterfaceSource,
    C: HttpClient + Clone + Send + Sync + 'static,
{
    let records = source.list().map_err(RunError::Enumerate)?;
    tracing::debug!("Enumerated {} interface record(s)", records.len());

    let summary = classify(&records, config.platform, &SystemClock)?;

    if !config.external_ip {
        tracing::debug!("External IP lookup disabled");
        return Ok(summary);
    }

    let probe = ExternalIpProbe::new(client, config.endpoints.clone());
    match probe.observe().await {
        Ok(ip) => Ok(summary.with_external_ip(ip.to_string())),
        Err(e) => {
            tracing::warn!("{e}");
            Ok(summary)
        }
    }
}
