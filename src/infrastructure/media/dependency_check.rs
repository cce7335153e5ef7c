use std::process::Stdio;

use tokio::process::Command;

#[derive(Debug, thiserror::Error)]
#[error("required executable not found on PATH: {0}")]
pub struct DependencyMissingError(pub String);

/// Probe the host executables the pipeline shells out to. Runs once at
/// startup, before any job is accepted; a missing tool is fatal.
pub async fn verify_host_tools(tools: &[&str]) -> Result<(), DependencyMissingError> {
    for tool in tools {
        let probe = Command::new(tool)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;
        match probe {
            Ok(_) => tracing::debug!(tool = %tool, "host dependency present"),
            Err(_) => return Err(DependencyMissingError(tool.to_string())),
        }
    }
    Ok(())
}
