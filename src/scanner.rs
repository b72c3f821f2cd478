//! # List Scanner
//!
//! Answers "does this identity appear anywhere in the listing?" by walking
//! every page. A point lookup can lag behind list-based reads (or the other
//! way round), so stabilization consults both before declaring convergence.

use crate::constants::MAX_LIST_PAGES;
use crate::error::ApiError;
use crate::identity::ResourceIdentity;
use crate::provider::ListPages;
use std::collections::HashSet;
use tracing::{trace, warn};

/// Scan all pages for `identity`
///
/// Returns `Ok(true)` as soon as a page contains the identity, `Ok(false)`
/// only after the last page (no `next_token`) was consumed without a match.
///
/// # Errors
///
/// A failed page fetch is returned as-is; it is never folded into `false`.
/// A continuation token seen twice, or more than [`MAX_LIST_PAGES`] pages,
/// ends the scan with [`ApiError::Service`].
pub async fn resource_exists_in_listing<L>(
    lister: &L,
    identity: &ResourceIdentity,
) -> Result<bool, ApiError>
where
    L: ListPages + ?Sized,
{
    let scope = identity.scope.as_deref();
    let mut token: Option<String> = None;
    let mut seen_tokens: HashSet<String> = HashSet::new();
    let mut pages = 0_usize;

    loop {
        if pages >= MAX_LIST_PAGES {
            warn!(resource_id = %identity, pages, "listing exceeded page limit");
            return Err(ApiError::Service(format!(
                "listing did not terminate within {MAX_LIST_PAGES} pages"
            )));
        }

        let page = lister.list_page(scope, token.as_deref()).await?;
        pages += 1;

        if page.items.iter().any(|item| identity.matches(item)) {
            trace!(resource_id = %identity, pages, "identity found in listing");
            return Ok(true);
        }

        match page.next_token {
            Some(next) => {
                if !seen_tokens.insert(next.clone()) {
                    warn!(resource_id = %identity, pages, token = %next, "listing repeated a continuation token");
                    return Err(ApiError::Service(format!(
                        "listing repeated continuation token {next}"
                    )));
                }
                token = Some(next);
            }
            None => {
                trace!(resource_id = %identity, pages, "identity absent from listing");
                return Ok(false);
            }
        }
    }
}
