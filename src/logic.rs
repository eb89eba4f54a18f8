//! The flows behind each subcommand, kept free of terminal concerns so
//! they can be driven directly in tests.

use libs::payload::{TaskCreate, TaskUpdate};

use crate::api::{ApiClient, ApiError};
use crate::render;

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Couldn't write the session file: {0}")]
    Session(#[from] std::io::Error),
}

pub fn sign_in(api: &ApiClient, email: &str, password: &str) -> Result<(), ClientError> {
    let token = api.login(email, password)?;
    api.session().set(&token.access_token)?;
    Ok(())
}

/// Registration returns no token, so a fresh account is followed by a login
/// with the same credentials. A failed login leg leaves no token behind;
/// the created account stays (the service has no rollback).
pub fn sign_up(api: &ApiClient, email: &str, password: &str) -> Result<(), ClientError> {
    api.register(email, password)?;
    sign_in(api, email, password)
}

pub fn sign_out(api: &ApiClient) -> Result<(), ClientError> {
    api.session().clear()?;
    Ok(())
}

/// Fetches the authoritative list and renders it. Every mutation below ends
/// here instead of patching a local copy.
pub fn load_list(api: &ApiClient) -> Result<String, ClientError> {
    let tasks = api.list_tasks()?;
    Ok(render::render_list(&tasks))
}

pub fn add_task(api: &ApiClient, task: TaskCreate) -> Result<String, ClientError> {
    api.create_task(&task)?;
    load_list(api)
}

pub fn edit_task(api: &ApiClient, id: i64, update: TaskUpdate) -> Result<String, ClientError> {
    api.update_task(id, &update)?;
    load_list(api)
}

/// `None` means the caller declined; nothing is sent in that case.
pub fn remove_task(
    api: &ApiClient,
    id: i64,
    confirmed: bool,
) -> Result<Option<String>, ClientError> {
    if !confirmed {
        return Ok(None);
    }
    api.delete_task(id)?;
    Ok(Some(load_list(api)?))
}

pub fn show_task(api: &ApiClient, id: i64) -> Result<String, ClientError> {
    let task = api.get_task(id)?;
    Ok(render::render_task(&task))
}

pub fn ping(api: &ApiClient) -> Result<String, ClientError> {
    Ok(api.health()?.status)
}
