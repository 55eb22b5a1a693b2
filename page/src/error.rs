use thiserror::Error;

/// Errors raised while building a [`crate::PageConfig`].
///
/// Rendering itself never fails; only the checkout URL override is checked.
#[derive(Debug, Error)]
pub enum PageError {
    /// The checkout URL could not be parsed as an absolute URL.
    #[error("invalid checkout URL '{url}': {reason}")]
    InvalidCheckoutUrl {
        /// The rejected input
        url: String,
        /// Parser message
        reason: String,
    },

    /// The checkout URL parsed but does not use http or https.
    #[error("checkout URL '{url}' uses unsupported scheme '{scheme}' (expected http or https)")]
    UnsupportedScheme {
        /// The rejected input
        url: String,
        /// The scheme that was found
        scheme: String,
    },
}
