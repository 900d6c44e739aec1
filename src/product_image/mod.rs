//! Product images: the pictures attached to a product.
//!
//! Images only exist under a product, so every call takes the owning product's id.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/products/{product_id}/images.json` | GET | List images |
//! | `/products/{product_id}/images/count.json` | GET | Count images |
//! | `/products/{product_id}/images/{id}.json` | GET | Get a single image |
//! | `/products/{product_id}/images.json` | POST | Create an image |
//! | `/products/{product_id}/images/{id}.json` | PUT | Update an image |
//! | `/products/{product_id}/images/{id}.json` | DELETE | Delete an image |
//!
//! # Example
//!
//! ```no_run
//! use shopify_client_sdk::product_image::ProductImages as _;
//! use shopify_client_sdk::product_image::types::ProductImage;
//! use shopify_client_sdk::{Client, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("my-shop.myshopify.com", "shpat_token", Config::default())?;
//! let images = client.product_images();
//!
//! // Upload an image from raw bytes; the API turns the attachment into `src`.
//! let bytes = std::fs::read("front.png")?;
//! let image = ProductImage::builder()
//!     .filename("front.png")
//!     .alt("Front view")
//!     .build()
//!     .with_attachment_bytes(&bytes);
//!
//! let created = images.create(632_910_392, &image).await?;
//! println!("{:?}", created.src);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

pub use client::{Client, ProductImages};
