#[macro_use]
extern crate log;

use fbdb_core::repositories::FeedbackRepo;

mod adapters;
mod web;

pub async fn run(
    store: Box<dyn FeedbackRepo + Send + Sync>,
    enable_cors: bool,
    version: &'static str,
) -> anyhow::Result<()> {
    web::run(store, enable_cors, version).await
}
