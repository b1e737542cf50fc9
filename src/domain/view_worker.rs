//! Background worker applying queued view events.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Semaphore, mpsc};
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, info, warn};

use crate::domain::repositories::LinkRepository;
use crate::domain::view_event::ViewEvent;

/// Retries after the first failed store write.
const MAX_RETRIES: usize = 3;

/// Consumes view events until every sender is dropped.
///
/// Up to `concurrency` increments run at once. Each increment is a
/// conditional store write, so a link deleted after the redirect was served
/// is simply not counted. Store failures are retried with exponential
/// backoff and then dropped; nothing is reported back to the redirect.
///
/// Returns after all in-flight increments have finished.
pub async fn run_view_worker<L>(
    mut rx: mpsc::Receiver<ViewEvent>,
    links: Arc<L>,
    concurrency: usize,
) where
    L: LinkRepository + ?Sized + 'static,
{
    let concurrency = concurrency.max(1);
    let permits = Arc::new(Semaphore::new(concurrency));

    while let Some(event) = rx.recv().await {
        let Ok(permit) = permits.clone().acquire_owned().await else {
            break;
        };
        let links = links.clone();

        tokio::spawn(async move {
            apply_view(links.as_ref(), &event).await;
            drop(permit);
        });
    }

    // Drain in-flight updates before returning.
    if let Err(e) = permits.acquire_many(concurrency as u32).await {
        warn!(error = %e, "View worker stopped before in-flight updates finished");
    }
    info!("View worker stopped");
}

async fn apply_view<L>(links: &L, event: &ViewEvent)
where
    L: LinkRepository + ?Sized,
{
    let strategy = ExponentialBackoff::from_millis(10)
        .max_delay(Duration::from_millis(500))
        .map(jitter)
        .take(MAX_RETRIES);

    match Retry::spawn(strategy, || links.increment_views(&event.slug)).await {
        Ok(true) => debug!(slug = %event.slug, "View counted"),
        Ok(false) => debug!(slug = %event.slug, "View not counted: link missing or deleted"),
        Err(e) => warn!(slug = %event.slug, error = %e, "View dropped after retries"),
    }
}
