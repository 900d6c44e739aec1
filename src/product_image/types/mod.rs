//! Types for the product images resource.

pub mod request;
pub mod response;

pub use request::ProductImageCountFilter;
pub use response::ProductImage;
