// file: src/network/ssh.rs
// version: 1.1.0
// guid: e59c2a84-1d07-4f36-92be-a64f08c31d75

//! SSH session to one iDRAC controller

use crate::racadm::CommandOutcome;
use crate::Result;
use ssh2::{CheckResult, KnownHostFileKind, Session};
use std::io::Read;
use std::net::TcpStream;
use tracing::{debug, info, warn};

/// Authenticated SSH session to a management controller
pub struct IdracSession {
    session: Option<Session>,
    host: String,
}

impl IdracSession {
    /// Connect and authenticate against the controller's SSH service.
    ///
    /// `trust_on_first_use` controls what happens when the host key is not
    /// in the user's known_hosts: accept and continue, or refuse. A key
    /// that mismatches a known_hosts entry is always refused.
    pub async fn connect(
        host: &str,
        port: u16,
        username: &str,
        password: &str,
        trust_on_first_use: bool,
    ) -> Result<Self> {
        info!("Connecting to {} as {}", host, username);

        let tcp = TcpStream::connect(format!("{}:{}", host, port)).map_err(|e| {
            crate::error::PrepError::ssh(format!("Failed to connect to {}: {}", host, e))
        })?;

        let mut session = Session::new().map_err(|e| {
            crate::error::PrepError::ssh(format!("Failed to create SSH session: {}", e))
        })?;

        session.set_tcp_stream(tcp);
        session.handshake().map_err(|e| {
            crate::error::PrepError::ssh(format!("SSH handshake with {} failed: {}", host, e))
        })?;

        verify_host_key(&session, host, port, trust_on_first_use)?;

        session.userauth_password(username, password).map_err(|e| {
            crate::error::PrepError::ssh(format!(
                "Password authentication to {} failed: {}",
                host, e
            ))
        })?;

        if !session.authenticated() {
            return Err(crate::error::PrepError::ssh(format!(
                "SSH authentication to {} failed",
                host
            )));
        }

        info!("SSH connection established to {}", host);
        Ok(Self {
            session: Some(session),
            host: host.to_string(),
        })
    }

    /// Execute one command and capture its exit status and output.
    ///
    /// A non-zero exit is not an error here; callers decide what a failed
    /// command means. Only transport problems produce `Err`.
    pub async fn exec(&mut self, command: &str) -> Result<CommandOutcome> {
        debug!("Executing on {}: {}", self.host, command);

        let session = self
            .session
            .as_mut()
            .ok_or_else(|| crate::error::PrepError::ssh("No active SSH session"))?;

        let mut channel = session.channel_session().map_err(|e| {
            crate::error::PrepError::ssh(format!("Failed to create SSH channel: {}", e))
        })?;

        channel.exec(command).map_err(|e| {
            crate::error::PrepError::ssh(format!("Failed to execute command: {}", e))
        })?;

        let mut stdout = String::new();
        let mut stderr = String::new();

        channel.read_to_string(&mut stdout).map_err(|e| {
            crate::error::PrepError::ssh(format!("Failed to read stdout: {}", e))
        })?;
        channel.stderr().read_to_string(&mut stderr).map_err(|e| {
            crate::error::PrepError::ssh(format!("Failed to read stderr: {}", e))
        })?;

        channel.wait_close().map_err(|e| {
            crate::error::PrepError::ssh(format!("Failed to close SSH channel: {}", e))
        })?;

        let exit_code = channel.exit_status().map_err(|e| {
            crate::error::PrepError::ssh(format!("Failed to get exit status: {}", e))
        })?;

        Ok(CommandOutcome {
            command: command.to_string(),
            exit_code,
            stdout,
            stderr,
        })
    }

    /// Disconnect the session
    pub fn disconnect(&mut self) {
        if let Some(session) = self.session.take() {
            let _ = session.disconnect(None, "", None);
            debug!("SSH session to {} disconnected", self.host);
        }
    }
}

impl Drop for IdracSession {
    fn drop(&mut self) {
        self.disconnect();
    }
}

/// Check the server's host key against the user's known_hosts file
fn verify_host_key(
    session: &Session,
    host: &str,
    port: u16,
    trust_on_first_use: bool,
) -> Result<()> {
    let (key, _key_type) = session
        .host_key()
        .ok_or_else(|| crate::error::PrepError::ssh("Server offered no host key"))?;

    let mut known_hosts = session.known_hosts().map_err(|e| {
        crate::error::PrepError::ssh(format!("Failed to initialize known hosts: {}", e))
    })?;

    let known_hosts_path = dirs::home_dir().map(|home| home.join(".ssh").join("known_hosts"));
    if let Some(path) = known_hosts_path.filter(|p| p.exists()) {
        known_hosts
            .read_file(&path, KnownHostFileKind::OpenSSH)
            .map_err(|e| {
                crate::error::PrepError::ssh(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                ))
            })?;
    }

    match known_hosts.check_port(host, port, key) {
        CheckResult::Match => Ok(()),
        CheckResult::Mismatch => Err(crate::error::PrepError::ssh(format!(
            "Host key for {} does not match known_hosts entry",
            host
        ))),
        CheckResult::NotFound | CheckResult::Failure => {
            if trust_on_first_use {
                warn!("Accepting unknown host key for {} (trust_on_first_use)", host);
                Ok(())
            } else {
                Err(crate::error::PrepError::ssh(format!(
                    "Unknown host key for {}; enable ssh.trust_on_first_use to accept",
                    host
                )))
            }
        }
    }
}
