//! Demo service client

pub mod error;

use bankdemo_api::error::HttpErrorResponse;
use error::Error;

// Re-exports
pub use bankdemo_api::mdl::{
    ActionOutcome, CardType, NewSandboxCard, NewSandboxTransfer, NewSandboxUser,
};

/// Demo service client
#[derive(Debug)]
pub struct Client {
    /// Base URL
    pub url: String,
}

impl Client {
    /// Creates a new client
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

impl Client {
    /// Creates a sandbox user
    pub async fn create_user(&self, new_user: NewSandboxUser) -> Result<ActionOutcome, Error> {
        let res = reqwest::Client::new()
            .post(format!("{}/sandbox/users", self.url))
            .json(&new_user)
            .send()
            .await?;

        if res.status().is_success() {
            let outcome = res.json::<ActionOutcome>().await?;
            Ok(outcome)
        } else {
            let err = res.json::<HttpErrorResponse>().await?;
            Err(err.into())
        }
    }

    /// Creates a sandbox card
    pub async fn create_card(&self, new_card: NewSandboxCard) -> Result<ActionOutcome, Error> {
        let res = reqwest::Client::new()
            .post(format!("{}/sandbox/cards", self.url))
            .json(&new_card)
            .send()
            .await?;

        if res.status().is_success() {
            let outcome = res.json::<ActionOutcome>().await?;
            Ok(outcome)
        } else {
            let err = res.json::<HttpErrorResponse>().await?;
            Err(err.into())
        }
    }

    /// Simulates an internal transfer
    pub async fn transfer(&self, new_transfer: NewSandboxTransfer) -> Result<ActionOutcome, Error> {
        let res = reqwest::Client::new()
            .post(format!("{}/sandbox/transfers", self.url))
            .json(&new_transfer)
            .send()
            .await?;

        if res.status().is_success() {
            let outcome = res.json::<ActionOutcome>().await?;
            Ok(outcome)
        } else {
            let err = res.json::<HttpErrorResponse>().await?;
            Err(err.into())
        }
    }
}
