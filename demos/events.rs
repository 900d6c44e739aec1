//! Walks the shop's activity feed.
//!
//! Reads credentials from `SHOPIFY_SHOP_URL` and `SHOPIFY_ACCESS_TOKEN`. Run with tracing
//! enabled:
//! ```sh
//! RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example events --features tracing
//! ```
//!
//! Optionally log to a file:
//! ```sh
//! LOG_FILE=events.log RUST_LOG=info cargo run --example events --features tracing
//! ```

use std::fs::File;

use futures::StreamExt as _;
use shopify_client_sdk::auth::Credentials;
use shopify_client_sdk::event::Events as _;
use shopify_client_sdk::event::types::{EventCountFilter, EventListFilter, Verb};
use shopify_client_sdk::filter::{Filter, ListFilter};
use shopify_client_sdk::pagination::stream_list;
use shopify_client_sdk::{Client, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(path) = std::env::var("LOG_FILE") {
        let file = File::create(path)?;
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let config = Config::builder().api_version("2024-10").build();
    let client = Client::with_credentials(Credentials::from_env()?, config)?;
    let events = client.events();

    match events.count_with(&EventCountFilter::default()).await {
        Ok(count) => info!(endpoint = "count", count),
        Err(e) => error!(endpoint = "count", error = %e),
    }

    let destroyed = EventListFilter::builder()
        .verb(Verb::Destroy)
        .limit(10)
        .build();
    match events.list_with(&destroyed).await {
        Ok(page) => {
            info!(endpoint = "list", count = page.items.len(), has_next = page.has_next_page());

            if let Some(event) = page.items.first()
                && let (Some(subject_id), Some(subject_type)) =
                    (event.subject_id, event.subject_type.as_deref())
            {
                match events
                    .list_for_subject(subject_id, subject_type, &Filter::new())
                    .await
                {
                    Ok(history) => info!(
                        endpoint = "list_for_subject",
                        subject_type,
                        subject_id,
                        count = history.items.len()
                    ),
                    Err(e) => error!(endpoint = "list_for_subject", error = %e),
                }
            }
        }
        Err(e) => error!(endpoint = "list", error = %e),
    }

    let first = Filter::from(ListFilter::builder().limit(250).build());
    let stream = stream_list(first, |filter| {
        let events = events.clone();
        async move { events.list(&filter).await }
    })
    .take(1_000);
    tokio::pin!(stream);

    let mut seen = 0_usize;
    while let Some(event) = stream.next().await {
        match event {
            Ok(_) => seen += 1,
            Err(e) => {
                error!(endpoint = "stream_list", error = %e);
                break;
            }
        }
    }
    info!(endpoint = "stream_list", seen);

    Ok(())
}
