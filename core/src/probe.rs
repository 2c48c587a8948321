//! SSH pre-authentication banner capture.
//!
//! One probe is one handshake: connect to port 22, run the key exchange and
//! a single doomed password authentication attempt, and keep whatever banner
//! text the server volunteered along the way. Authentication is never
//! expected to succeed and its outcome is irrelevant to the result.

use std::net::{IpAddr, SocketAddr};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use russh::Disconnect;
use russh::client;
use russh_keys::key::PublicKey;
use tokio::time::timeout;
use tracing::debug;

use bannr_common::config::Config;

/// Credential pair sent with every probe. Intentionally invalid-looking;
/// its only job is to push the server through the pre-auth banner exchange.
const PROBE_USER: &str = "bannr";
const PROBE_PASSWORD: &str = "bannr";

const SSH_PORT: u16 = 22;

/// A single-shot banner probe against one host.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Returns the banner offered by `addr`, or an empty string when the
    /// host yields none (refused, timed out, or simply silent).
    async fn probe(&self, addr: IpAddr) -> String;
}

/// [`Probe`] implementation speaking real SSH.
pub struct SshProbe {
    ssh_config: Arc<client::Config>,
    timeout: Duration,
}

impl SshProbe {
    pub fn new(cfg: &Config) -> Self {
        Self {
            ssh_config: Arc::new(client::Config::default()),
            timeout: cfg.timeout,
        }
    }

    /// One connect + handshake + auth round trip. A banner captured before
    /// a later step failed still counts as a capture.
    async fn attempt(&self, addr: IpAddr) -> String {
        let captured: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
        let handler = BannerHandler {
            banner: captured.clone(),
        };
        let dest = SocketAddr::new(addr, SSH_PORT);

        match client::connect(self.ssh_config.clone(), dest, handler).await {
            Ok(mut session) => {
                // The banner, if the server sends one, arrives while this
                // request is in flight.
                match session
                    .authenticate_password(PROBE_USER, PROBE_PASSWORD)
                    .await
                {
                    Ok(true) => debug!(%addr, "authentication unexpectedly accepted"),
                    Ok(false) => {}
                    Err(err) => debug!(%addr, error = %err, "auth exchange failed"),
                }
                let _ = session
                    .disconnect(Disconnect::ByApplication, "", "en")
                    .await;
            }
            Err(err) => debug!(%addr, error = %err, "handshake failed"),
        }

        let mut guard = captured.lock().unwrap_or_else(PoisonError::into_inner);
        guard.take().unwrap_or_default()
    }
}

#[async_trait]
impl Probe for SshProbe {
    async fn probe(&self, addr: IpAddr) -> String {
        // One budget for the whole attempt: connect, key exchange and the
        // auth round trip. Running out of it is an ordinary negative result.
        match timeout(self.timeout, self.attempt(addr)).await {
            Ok(banner) => banner,
            Err(_elapsed) => String::new(),
        }
    }
}

/// Client handler that records the userauth banner and trusts any host key.
///
/// Host identity verification is disabled here on purpose. The scanner talks
/// to arbitrary hosts it has never seen and only wants their banner text;
/// there is no key to pin and nothing confidential crosses the channel. Do
/// not reuse this handler for anything that authenticates for real.
struct BannerHandler {
    banner: Arc<Mutex<Option<String>>>,
}

#[async_trait]
impl client::Handler for BannerHandler {
    type Error = russh::Error;

    async fn check_server_key(
        &mut self,
        _server_public_key: &PublicKey,
    ) -> Result<bool, Self::Error> {
        Ok(true)
    }

    async fn auth_banner(
        &mut self,
        banner: &str,
        _session: &mut client::Session,
    ) -> Result<(), Self::Error> {
        let mut guard = self.banner.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(banner.to_string());
        Ok(())
    }
}
