//! Events: the read-only activity log of a shop.
//!
//! Every change to a subject (a product, an order, a blog, ...) is recorded as an
//! [`types::Event`]. Events can be listed for the whole shop or for a single subject.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/events.json` | GET | List events |
//! | `/events/count.json` | GET | Count events |
//! | `/events/{id}.json` | GET | Get a single event |
//! | `/{subject_type}/{subject_id}/events.json` | GET | List events of one subject |
//!
//! # Example
//!
//! ```no_run
//! use shopify_client_sdk::event::Events as _;
//! use shopify_client_sdk::event::types::EventListFilter;
//! use shopify_client_sdk::{Client, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("my-shop.myshopify.com", "shpat_token", Config::default())?;
//! let events = client.events();
//!
//! // Everything that happened to order 450789469
//! let filter = EventListFilter::builder().limit(50).build();
//! let page = events.list_for_subject_with(450_789_469, "Order", &filter).await?;
//!
//! for event in &page.items {
//!     println!("{}: {:?}", event.id, event.message);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

pub use client::{Client, Events};
