//! Greeting page handler.

use tracing::instrument;

use crate::config::GREETING_BODY;

/// Greeting handler for the root path.
///
/// Returns the greeting as plain text. The body is a constant and is served
/// byte-for-byte identical on every request.
#[instrument(name = "home::index")]
pub async fn index() -> &'static str {
    GREETING_BODY
}
