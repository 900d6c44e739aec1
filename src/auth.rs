/// Secret string types that redact values in debug output for security.
pub use secrecy::{ExposeSecret, SecretString};
use reqwest::header::{HeaderMap, HeaderValue};

use crate::Result;
use crate::error::Error;

/// Environment variable read by [`Credentials::from_env`] for the shop URL.
pub const SHOP_URL_VAR: &str = "SHOPIFY_SHOP_URL";

/// Environment variable read by [`Credentials::from_env`] for the access token.
pub const ACCESS_TOKEN_VAR: &str = "SHOPIFY_ACCESS_TOKEN";

/// Header carrying the access token on every Admin API request.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// The shop a client talks to and the access token it authenticates with.
///
/// The token is held in a [`SecretString`] so it never shows up in `Debug` output.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub(crate) shop_url: String,
    pub(crate) access_token: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new<U: Into<String>, T: Into<String>>(shop_url: U, access_token: T) -> Self {
        Self {
            shop_url: shop_url.into(),
            access_token: SecretString::from(access_token.into()),
        }
    }

    /// Reads credentials from [`SHOP_URL_VAR`] and [`ACCESS_TOKEN_VAR`].
    pub fn from_env() -> Result<Self> {
        let shop_url = std::env::var(SHOP_URL_VAR)
            .map_err(|e| Error::validation(format!("{SHOP_URL_VAR} is not usable: {e}")))?;
        let access_token = std::env::var(ACCESS_TOKEN_VAR)
            .map_err(|e| Error::validation(format!("{ACCESS_TOKEN_VAR} is not usable: {e}")))?;

        Ok(Self::new(shop_url, access_token))
    }

    /// Returns the shop URL as supplied, before normalization.
    #[must_use]
    pub fn shop_url(&self) -> &str {
        &self.shop_url
    }

    /// Returns the access token.
    #[must_use]
    pub fn access_token(&self) -> &SecretString {
        &self.access_token
    }

    /// Builds the headers that authenticate a request.
    pub(crate) fn headers(&self) -> Result<HeaderMap> {
        let mut value = HeaderValue::from_str(self.access_token.expose_secret())?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCESS_TOKEN_HEADER, value);
        Ok(headers)
    }
}
