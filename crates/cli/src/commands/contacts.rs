use anyhow::Result;
use contact_list_core::{Contact, ContactView, Outcome};

use super::{open_backend, open_service};

pub(crate) async fn run_init(database_url: &str) -> Result<()> {
    let backend = open_backend(database_url).await?;
    tracing::info!(backend = backend.kind(), "schema initialized");
    Ok(())
}

pub(crate) async fn run_search(database_url: &str, keyword: &str) -> Result<()> {
    let service = open_service(database_url).await?;
    let views: Vec<ContactView> =
        service.search(keyword).await?.iter().map(Contact::view).collect();
    println!("{}", serde_json::to_string_pretty(&views)?);
    Ok(())
}

pub(crate) async fn run_get(database_url: &str, name: &str) -> Result<()> {
    let service = open_service(database_url).await?;
    let view = service.find(name).await?.as_ref().map(Contact::view);
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

pub(crate) async fn run_add(database_url: &str, name: &str, number: &str) -> Result<()> {
    let service = open_service(database_url).await?;
    print_outcome(&service.add(name, number).await?);
    Ok(())
}

pub(crate) async fn run_update(database_url: &str, name: &str, number: &str) -> Result<()> {
    let service = open_service(database_url).await?;
    print_outcome(&service.update(name, number).await?);
    Ok(())
}

pub(crate) async fn run_delete(database_url: &str, name: &str) -> Result<()> {
    let service = open_service(database_url).await?;
    print_outcome(&service.delete(name).await?);
    Ok(())
}

fn print_outcome(outcome: &Outcome) {
    println!("{}", outcome.message());
}
