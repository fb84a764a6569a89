//! Sandbox action endpoints

use salvo::prelude::*;
use tracing::trace;

use crate::{
    error::Error,
    mdl::{ActionOutcome, NewSandboxCard, NewSandboxTransfer, NewSandboxUser},
    svc::sandbox::SandboxService,
};

/// Creates a sandbox user
#[handler]
#[tracing::instrument(skip_all)]
pub async fn create_user(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ActionOutcome>, Error> {
    trace!("received request");
    let sandbox = depot.obtain::<SandboxService>().unwrap();

    let new_user = req.parse_json::<NewSandboxUser>().await?;
    Ok(Json(sandbox.create_user(new_user).await))
}

/// Creates a sandbox card
#[handler]
#[tracing::instrument(skip_all)]
pub async fn create_card(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ActionOutcome>, Error> {
    trace!("received request");
    let sandbox = depot.obtain::<SandboxService>().unwrap();

    let new_card = req.parse_json::<NewSandboxCard>().await?;
    Ok(Json(sandbox.create_card(new_card).await))
}

/// Simulates an internal transfer
#[handler]
#[tracing::instrument(skip_all)]
pub async fn transfer(req: &mut Request, depot: &mut Depot) -> Result<Json<ActionOutcome>, Error> {
    trace!("received request");
    let sandbox = depot.obtain::<SandboxService>().unwrap();

    let new_transfer = req.parse_json::<NewSandboxTransfer>().await?;
    Ok(Json(sandbox.transfer(new_transfer).await))
}
