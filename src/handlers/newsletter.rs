//! Newsletter Handler

use axum::response::Redirect;

/// Handler for newsletter signups.
///
/// Submissions are not persisted yet; the CRM table and outbound queue
/// land in a later phase. Always answers with a 303 back to the home
/// page, whatever the body contained.
pub async fn subscribe() -> Redirect {
    Redirect::to("/")
}
