//! Flash cross-domain policy file server: writes the policy XML and a NUL
//! terminator, then closes — no framing, no request parsing.

use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::common::error::ConnectionError;

const POLICY_FILE: &str = "<?xml version=\"1.0\"?>\n<cross-domain-policy>\n    <allow-access-from domain=\"*\" to-ports=\"*\" />\n</cross-domain-policy>\0";

pub async fn run(host: &str, port: u16) -> Result<(), ConnectionError> {
    let listener = TcpListener::bind((host, port))
        .await
        .map_err(|source| ConnectionError::BindFailed {
            host: host.to_string(),
            port,
            source,
        })?;
    info!(host, port, "policy listener bound");

    loop {
        let (mut stream, addr) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!(error = %e, "failed to accept policy connection");
                continue;
            }
        };

        if let Err(e) = stream.write_all(POLICY_FILE.as_bytes()).await {
            warn!(%addr, error = %e, "failed to write policy file");
        }
        let _ = stream.shutdown().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_file_ends_with_nul() {
        assert!(POLICY_FILE.ends_with('\0'));
        assert!(POLICY_FILE.starts_with("<?xml"));
    }
}
