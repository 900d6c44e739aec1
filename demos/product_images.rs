//! Uploads, updates and removes an image on a product.
//!
//! ```sh
//! PRODUCT_ID=632910392 IMAGE_PATH=front.png RUST_LOG=info cargo run --example product_images --features tracing
//! ```

use shopify_client_sdk::auth::Credentials;
use shopify_client_sdk::filter::ListFilter;
use shopify_client_sdk::product_image::ProductImages as _;
use shopify_client_sdk::product_image::types::ProductImage;
use shopify_client_sdk::{Client, Config};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let product_id: u64 = std::env::var("PRODUCT_ID")?.parse()?;
    let image_path = std::env::var("IMAGE_PATH")?;

    let client = Client::with_credentials(Credentials::from_env()?, Config::default())?;
    let images = client.product_images();

    let existing = images
        .list_with(product_id, &ListFilter::builder().fields("id,position,src").build())
        .await?;
    info!(product_id, count = existing.items.len(), "existing images");

    let bytes = std::fs::read(&image_path)?;
    let upload = ProductImage::builder()
        .filename(image_path.as_str())
        .build()
        .with_attachment_bytes(&bytes);
    let created = images.create(product_id, &upload).await?;
    let Some(image_id) = created.id else {
        anyhow::bail!("created image has no id");
    };
    info!(image_id, src = ?created.src, "uploaded");

    let alt = ProductImage::builder().alt("Uploaded by demo").build();
    let updated = images.update(product_id, image_id, &alt).await?;
    info!(image_id, alt = ?updated.alt, "updated");

    images.delete(product_id, image_id).await?;
    info!(image_id, "deleted");

    Ok(())
}
