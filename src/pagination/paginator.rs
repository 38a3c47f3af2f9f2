//! Cursor-following paginator
//!
//! The cursor is the only mutable state. It lives behind an async mutex
//! that is held across the fetch, so concurrent callers of
//! [`Paginator::next`] see each page exactly once and in order.

use super::types::{Page, Pageable};
use crate::error::Result;
use futures::future::BoxFuture;
use futures::{FutureExt, Stream};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

type FetchFn<T> = dyn Fn(String) -> BoxFuture<'static, Result<T>> + Send + Sync;

/// Lazily walks a chain of pages, starting from a fixed URL.
///
/// Cloning a paginator shares its cursor: clones observe and advance the
/// same sequence.
pub struct Paginator<T> {
    cursor: Arc<Mutex<Option<String>>>,
    fetch: Arc<FetchFn<T>>,
}

impl<T> Clone for Paginator<T> {
    fn clone(&self) -> Self {
        Self {
            cursor: Arc::clone(&self.cursor),
            fetch: Arc::clone(&self.fetch),
        }
    }
}

impl<T> fmt::Debug for Paginator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator").finish_non_exhaustive()
    }
}

impl<T> Paginator<T>
where
    T: Pageable + Send + 'static,
{
    /// Create a paginator that will start at `start`.
    ///
    /// Nothing is fetched until the first call to [`Paginator::next`]. An
    /// empty start URL yields an already exhausted paginator.
    pub fn new<F, Fut>(start: impl Into<String>, fetch: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        let start = Some(start.into()).filter(|url| !url.is_empty());

        Self {
            cursor: Arc::new(Mutex::new(start)),
            fetch: Arc::new(move |url| fetch(url).boxed()),
        }
    }

    /// Fetch the next page.
    ///
    /// Returns `None` once the last page has been returned, and on every
    /// call after that without fetching again. A failed fetch is returned
    /// as `Some(Err(..))` and leaves the cursor where it was, so the next
    /// call requests the same URL.
    ///
    /// Dropping the returned future mid-fetch releases the cursor unchanged.
    pub async fn next(&self) -> Option<Page<T>> {
        let mut cursor = self.cursor.lock().await;
        let url = cursor.clone()?;

        trace!(url = %url, "Fetching page");
        match (self.fetch)(url).await {
            Ok(page) => {
                *cursor = page
                    .next_url()
                    .filter(|next| !next.is_empty())
                    .map(str::to_owned);
                if cursor.is_none() {
                    debug!("Pagination exhausted");
                }
                Some(Ok(page))
            }
            Err(e) => Some(Err(e)),
        }
    }

    /// Check whether every page has been returned
    pub async fn is_exhausted(&self) -> bool {
        self.cursor.lock().await.is_none()
    }

    /// Stream every remaining page.
    ///
    /// A background task calls [`Paginator::next`] and hands pages over a
    /// single-slot channel, so at most one page waits ahead of the consumer.
    /// Error pages are yielded like any other page. The stream ends when the
    /// paginator is exhausted, when `cancel` fires, or when the [`Pages`]
    /// value is dropped; an in-flight fetch is abandoned in the last two
    /// cases.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn all(&self, cancel: CancellationToken) -> Pages<T> {
        let (tx, rx) = mpsc::channel(1);
        let paginator = self.clone();

        let producer = tokio::spawn(async move {
            loop {
                if cancel.is_cancelled() {
                    debug!("Page stream cancelled");
                    return;
                }

                let page = tokio::select! {
                    biased;
                    () = cancel.cancelled() => {
                        debug!("Page stream cancelled during fetch");
                        return;
                    }
                    () = tx.closed() => {
                        debug!("Page stream consumer dropped");
                        return;
                    }
                    page = paginator.next() => page,
                };

                let Some(page) = page else {
                    return;
                };

                tokio::select! {
                    biased;
                    () = cancel.cancelled() => {
                        debug!("Page stream cancelled during hand-off");
                        return;
                    }
                    sent = tx.send(page) => {
                        if sent.is_err() {
                            debug!("Page stream consumer dropped");
                            return;
                        }
                    }
                }
            }
        });

        Pages { rx, producer }
    }
}

/// Stream of pages produced by [`Paginator::all`].
///
/// Single pass and forward only. Dropping it stops the producer.
pub struct Pages<T> {
    rx: mpsc::Receiver<Page<T>>,
    producer: JoinHandle<()>,
}

impl<T> fmt::Debug for Pages<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pages")
            .field("finished", &self.producer.is_finished())
            .finish_non_exhaustive()
    }
}

impl<T> Stream for Pages<T> {
    type Item = Page<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}

impl<T> Drop for Pages<T> {
    fn drop(&mut self) {
        self.producer.abort();
    }
}
