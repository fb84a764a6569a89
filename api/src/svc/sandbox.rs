//! Sandbox actions service

use serde::Serialize;
use tracing::{debug, trace};

use crate::{
    config::SandboxConfig,
    error::Error,
    mdl::{ActionOutcome, NewSandboxCard, NewSandboxTransfer, NewSandboxUser},
};

/// Sandbox actions service
///
/// Forwards the demo actions to the configured upstream API root. Every
/// action is a single best-effort request: no retry, no timeout, no
/// cancellation.
#[derive(Debug, Clone)]
pub struct SandboxService {
    /// Upstream API base URL
    pub api_root: String,
    /// Whether the demo actions are disabled
    pub disabled: bool,
    /// HTTP client
    http: reqwest::Client,
}

impl SandboxService {
    /// Creates a new service instance
    pub fn new(cfg: &SandboxConfig) -> Self {
        Self {
            api_root: cfg.api_root.clone(),
            disabled: cfg.actions_disabled(),
            http: reqwest::Client::new(),
        }
    }
}

impl SandboxService {
    /// Creates a sandbox user
    pub async fn create_user(&self, new_user: NewSandboxUser) -> ActionOutcome {
        self.post("/sandbox/users", &new_user).await
    }

    /// Creates a sandbox card
    pub async fn create_card(&self, new_card: NewSandboxCard) -> ActionOutcome {
        self.post("/sandbox/cards", &new_card).await
    }

    /// Simulates an internal transfer
    pub async fn transfer(&self, new_transfer: NewSandboxTransfer) -> ActionOutcome {
        self.post("/sandbox/transfers", &new_transfer).await
    }

    /// Runs one action POST against the upstream API
    ///
    /// Disabled actions short-circuit before any network activity.
    async fn post<B: Serialize>(&self, path: &str, body: &B) -> ActionOutcome {
        if self.disabled {
            trace!(path, "action disabled");
            return ActionOutcome::disabled();
        }

        match self.send(path, body).await {
            Ok(outcome) => outcome,
            Err(err) => ActionOutcome::failure(err.message()),
        }
    }

    /// Sends the request and converts the settled response into an outcome
    ///
    /// Any HTTP status is a displayable outcome; only transport failures
    /// surface as [Error].
    async fn send<B: Serialize>(&self, path: &str, body: &B) -> Result<ActionOutcome, Error> {
        let url = format!("{}{}", self.api_root, path);
        debug!(url, "posting to upstream");

        let res = self.http.post(&url).json(body).send().await?;
        let ok = res.status().is_success();
        let status = res.status().as_u16();
        let text = res.text().await?;

        Ok(ActionOutcome::received(ok, status, &text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::mdl::DISABLED_NOTICE;

    fn sandbox_cfg(api_root: &str, live_mode: &str, production_approved: &str) -> SandboxConfig {
        SandboxConfig {
            api_root: api_root.to_string(),
            live_mode: live_mode.to_string(),
            production_approved: production_approved.to_string(),
        }
    }

    #[tokio::test]
    async fn test_disabled_short_circuit() {
        // the api root is unroutable on purpose: a disabled action must
        // settle without touching the network
        let service = SandboxService::new(&sandbox_cfg("http://192.0.2.1:1/api", "true", "no"));
        assert!(service.disabled);

        let outcome = service
            .create_user(NewSandboxUser {
                email: "demo@example.com".to_string(),
                name: "Demo User".to_string(),
            })
            .await;
        assert!(!outcome.ok);
        assert_eq!(outcome.status, None);
        assert_eq!(outcome.error.as_deref(), Some(DISABLED_NOTICE));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // bind then drop a listener so the port is known to refuse
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api_root = format!("http://{}", addr);
        let service = SandboxService::new(&sandbox_cfg(&api_root, "false", "no"));

        let outcome = service
            .transfer(NewSandboxTransfer {
                from: "acct_sandbox_123".to_string(),
                to: "acct_sandbox_456".to_string(),
                amount: "10.00".to_string(),
            })
            .await;
        assert!(!outcome.ok);
        assert_eq!(outcome.status, None);
        assert!(!outcome.error.unwrap().is_empty());
    }
}
