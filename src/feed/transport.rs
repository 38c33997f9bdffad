use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use crossbeam_channel::Sender;
use futures_util::StreamExt;
use parking_lot::RwLock;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use super::dispatcher::{route, FeedAction};
use crate::common::{CameraId, LiveMessage};

/// First reconnect delay after a drop; doubles up to [`BACKOFF_CAP`] and
/// resets on a successful connect.
pub const BACKOFF_BASE: Duration = Duration::from_secs(3);
pub const BACKOFF_CAP: Duration = Duration::from_secs(30);

/// Connection factory for the live feed. Production uses [`WsTransport`];
/// tests substitute a scripted double.
#[async_trait]
pub trait FeedTransport: Send + 'static {
    type Stream: FeedStream;

    async fn connect(&mut self) -> Result<Self::Stream>;
}

/// One established feed connection.
#[async_trait]
pub trait FeedStream: Send {
    /// Next raw text frame; `None` once the connection is gone.
    async fn next_frame(&mut self) -> Option<Result<String>>;
}

/// WebSocket client transport for the backend's `/ws` endpoint.
pub struct WsTransport {
    url: String,
}

impl WsTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait]
impl FeedTransport for WsTransport {
    type Stream = WsStream;

    async fn connect(&mut self) -> Result<Self::Stream> {
        let (inner, _) = connect_async(self.url.as_str()).await?;
        Ok(WsStream { inner })
    }
}

pub struct WsStream {
    inner: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

#[async_trait]
impl FeedStream for WsStream {
    async fn next_frame(&mut self) -> Option<Result<String>> {
        loop {
            match self.inner.next().await? {
                Ok(Message::Text(text)) => return Some(Ok(text.to_string())),
                Ok(Message::Close(_)) => return None,
                // Pings and pongs are answered by tungstenite itself;
                // binary frames are not part of the feed schema.
                Ok(_) => continue,
                Err(err) => return Some(Err(err.into())),
            }
        }
    }
}

/// Feed observability counters, shared with whoever wants to watch them.
#[derive(Default, Debug)]
pub struct FeedStats {
    unknown_kinds: AtomicU64,
    parse_errors: AtomicU64,
    reconnects: AtomicU64,
}

impl FeedStats {
    pub fn unknown_kinds(&self) -> u64 {
        self.unknown_kinds.load(Ordering::Relaxed)
    }

    pub fn parse_errors(&self) -> u64 {
        self.parse_errors.load(Ordering::Relaxed)
    }

    pub fn reconnects(&self) -> u64 {
        self.reconnects.load(Ordering::Relaxed)
    }
}

/// In-flight marker preventing a second connection attempt while one feed
/// loop already runs. Cloneable so it can be shared across whatever might
/// try to start the feed.
#[derive(Default, Clone, Debug)]
pub struct ConnectGuard(Arc<AtomicBool>);

impl ConnectGuard {
    pub fn is_connected(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn acquire(&self) -> bool {
        self.0
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    fn release(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Drives one live-feed connection: read raw frames, parse them into
/// [`LiveMessage`]s, route them against the active camera, and hand every
/// actionable result to the UI side over a channel. Reconnects with backoff
/// when the connection drops.
pub struct LiveFeed<T: FeedTransport> {
    transport: T,
    actions: Sender<FeedAction>,
    active_camera: Arc<RwLock<Option<CameraId>>>,
    guard: ConnectGuard,
    stats: Arc<FeedStats>,
}

impl<T: FeedTransport> LiveFeed<T> {
    pub fn new(
        transport: T,
        actions: Sender<FeedAction>,
        active_camera: Arc<RwLock<Option<CameraId>>>,
    ) -> Self {
        Self {
            transport,
            actions,
            active_camera,
            guard: ConnectGuard::default(),
            stats: Arc::new(FeedStats::default()),
        }
    }

    /// Shares an in-flight guard with another starter of the same feed.
    pub fn with_guard(mut self, guard: ConnectGuard) -> Self {
        self.guard = guard;
        self
    }

    pub fn guard(&self) -> ConnectGuard {
        self.guard.clone()
    }

    pub fn stats(&self) -> Arc<FeedStats> {
        Arc::clone(&self.stats)
    }

    /// Runs the feed until the action channel closes (the UI side went
    /// away). Returns `false` immediately when a connection attempt is
    /// already in flight under the shared guard.
    pub async fn run(&mut self) -> bool {
        if !self.guard.acquire() {
            log::warn!("live feed already connected, ignoring start");
            return false;
        }
        self.run_inner().await;
        self.guard.release();
        true
    }

    async fn run_inner(&mut self) {
        let mut backoff = BACKOFF_BASE;
        loop {
            match self.transport.connect().await {
                Ok(mut stream) => {
                    log::info!("live feed connected");
                    backoff = BACKOFF_BASE;
                    while let Some(frame) = stream.next_frame().await {
                        match frame {
                            Ok(raw) => {
                                if !self.handle_frame(&raw) {
                                    return;
                                }
                            }
                            Err(err) => {
                                log::warn!("live feed read error: {err:#}");
                                break;
                            }
                        }
                    }
                    log::warn!("live feed disconnected, reconnecting in {backoff:?}");
                }
                Err(err) => {
                    log::warn!("live feed connect failed ({err:#}), retrying in {backoff:?}");
                }
            }

            self.stats.reconnects.fetch_add(1, Ordering::Relaxed);
            tokio::time::sleep(backoff).await;
            backoff = (backoff * 2).min(BACKOFF_CAP);
        }
    }

    /// Returns `false` once the action channel is closed.
    fn handle_frame(&self, raw: &str) -> bool {
        let message = match LiveMessage::from_wire(raw) {
            Ok(message) => message,
            Err(err) => {
                self.stats.parse_errors.fetch_add(1, Ordering::Relaxed);
                log::warn!("dropping unparseable live frame: {err:#}");
                return true;
            }
        };

        if let LiveMessage::Unknown { .. } = &message {
            self.stats.unknown_kinds.fetch_add(1, Ordering::Relaxed);
        }

        let action = route(message, *self.active_camera.read());
        if matches!(action, FeedAction::Ignore) {
            return true;
        }
        self.actions.send(action).is_ok()
    }
}
