//! Connection manager: the websocket lifecycle and the session event loop.
//!
//! One `CanvasSession` per joined canvas. The lifecycle is a one-way state
//! machine `Connecting → Open → Closed` with no reconnect; recovery is a new
//! session. While `Open`, a single task multiplexes three event sources —
//! the render ticker, the socket, and the command channel — so all shared
//! state (engine, tracker, connection state) is touched by exactly one
//! callback at a time and needs no locking.
//!
//! After the socket closes the loop keeps running on a slowed ticker:
//! nothing new will arrive, but pan/zoom commands still repaint the local
//! view.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::time::Duration;

use canvas::consts::{RENDER_PERIOD_MS, SLOW_RENDER_FACTOR};
use canvas::engine::Engine;
use canvas::render::Surface;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, info, warn};
use wire::{Payload, PointFrame, encode_frame};

use crate::input::PointerTracker;
use crate::ticker::RenderTicker;

/// Literal text greeting sent on open as a liveness probe. Peers ignore
/// text payloads, so the content is never parsed.
pub const GREETING: &str = "Hello Server!";

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The session id fails the 4–20 ASCII-alphanumeric rule; the server
    /// would answer 404 before upgrading, so the connection is refused
    /// client-side.
    #[error("invalid session id `{0}`: expected 4-20 ASCII alphanumeric characters")]
    InvalidSessionId(String),
    /// The base URL does not start with a scheme we can map to ws/wss.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    /// The websocket connection or handshake failed.
    #[error("websocket connect failed: {0}")]
    WsConnect(Box<tokio_tungstenite::tungstenite::Error>),
    /// A pointer trace line could not be parsed.
    #[error("invalid trace line {line}: {source}")]
    InvalidTrace {
        line: usize,
        source: serde_json::Error,
    },
    /// Reading the trace input failed.
    #[error("reading trace input failed: {0}")]
    TraceIo(#[from] std::io::Error),
}

/// Connection lifecycle. `Closed` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionState {
    /// Socket requested, handshake not finished.
    Connecting,
    /// Handshake done, greeting sent, frames flowing.
    Open,
    /// Socket gone. No reconnect; viewport controls stay live.
    Closed,
}

/// Commands fed into the session loop by the host (UI layer, trace replay).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Pointer pressed at screen coordinates.
    PointerDown { x: f64, y: f64 },
    /// Pointer moved at screen coordinates with device contact state.
    PointerMove { x: f64, y: f64, pressure: f64, buttons: u32 },
    /// Pointer released.
    PointerUp,
    ZoomIn,
    ZoomOut,
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
    /// Leave the session; the run loop returns.
    Shutdown,
}

/// Validate a session id and produce the canvas socket path.
///
/// Mirrors the server's route guard (`/ws/canvas/{id}`, 4–20 ASCII
/// alphanumeric characters): anything else would be rejected as not-found
/// before any connection is attempted.
///
/// # Errors
///
/// Returns [`ClientError::InvalidSessionId`] for ids outside the rule.
pub fn session_path(session_id: &str) -> Result<String, ClientError> {
    let len_ok = (4..=20).contains(&session_id.len());
    let chars_ok = session_id.chars().all(|c| c.is_ascii_alphanumeric());
    if !len_ok || !chars_ok {
        return Err(ClientError::InvalidSessionId(session_id.to_owned()));
    }
    Ok(format!("/ws/canvas/{session_id}"))
}

/// Build the websocket URL for a session from an HTTP base URL.
///
/// # Errors
///
/// Returns [`ClientError::InvalidBaseUrl`] for unsupported schemes and
/// [`ClientError::InvalidSessionId`] for bad session ids.
pub fn ws_url(base_url: &str, session_id: &str) -> Result<String, ClientError> {
    let path = session_path(session_id)?;
    if let Some(rest) = base_url.strip_prefix("http://") {
        return Ok(format!("ws://{}{path}", rest.trim_end_matches('/')));
    }
    if let Some(rest) = base_url.strip_prefix("https://") {
        return Ok(format!("wss://{}{path}", rest.trim_end_matches('/')));
    }

    Err(ClientError::InvalidBaseUrl(base_url.to_owned()))
}

/// All state for one joined canvas session.
pub struct CanvasSession<S: Surface> {
    engine: Engine,
    tracker: PointerTracker,
    surface: S,
    state: ConnectionState,
    render_passes: u64,
}

impl<S: Surface> CanvasSession<S> {
    /// Create a session for a local participant and a surface of the given
    /// pixel dimensions.
    #[must_use]
    pub fn new(participant: u16, width: f64, height: f64, surface: S) -> Self {
        Self {
            engine: Engine::new(width, height),
            tracker: PointerTracker::new(participant),
            surface,
            state: ConnectionState::Connecting,
            render_passes: 0,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// The drawing engine (read-only).
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The surface, for post-run inspection.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Connect and run the session loop until [`Command::Shutdown`] arrives
    /// or the command channel closes. Returns the session back for
    /// inspection.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::WsConnect`] when the initial connect fails;
    /// everything after that degrades to the `Closed` state instead of
    /// erroring.
    pub async fn run(
        mut self,
        url: &str,
        mut commands: mpsc::Receiver<Command>,
    ) -> Result<Self, ClientError> {
        info!(url, "connecting");
        let (stream, _) = connect_async(url)
            .await
            .map_err(|error| ClientError::WsConnect(Box::new(error)))?;
        let (mut sink, mut source) = stream.split();

        let mut ticker = RenderTicker::new(Duration::from_millis(RENDER_PERIOD_MS));

        if sink.send(Message::Text(GREETING.into())).await.is_err() {
            self.close(&mut ticker);
        } else {
            self.state = ConnectionState::Open;
            info!("connected");
        }

        loop {
            tokio::select! {
                () = ticker.tick() => {
                    if self.engine.render(&mut self.surface) {
                        self.render_passes += 1;
                        if self.render_passes % 1000 == 0 {
                            debug!(passes = self.render_passes, "rendered");
                        }
                    }
                }

                message = source.next(), if self.state == ConnectionState::Open => {
                    match message {
                        Some(Ok(message)) => self.handle_socket_message(message, &mut ticker),
                        Some(Err(error)) => {
                            warn!(%error, "websocket receive failed");
                            self.close(&mut ticker);
                        }
                        None => self.close(&mut ticker),
                    }
                }

                command = commands.recv() => {
                    let Some(command) = command else { break };
                    if command == Command::Shutdown {
                        break;
                    }
                    if let Some(frame) = self.handle_command(command) {
                        let bytes = encode_frame(&frame);
                        if sink.send(Message::Binary(bytes.to_vec().into())).await.is_err() {
                            warn!("websocket send failed");
                            self.close(&mut ticker);
                        }
                    }
                }
            }
        }

        Ok(self)
    }

    /// Classify and apply one inbound socket message. Never fatal: text is
    /// logged, malformed binary is dropped, only a close frame changes
    /// state.
    fn handle_socket_message(&mut self, message: Message, ticker: &mut RenderTicker) {
        let payload = match message {
            Message::Text(text) => Payload::from_text(text.to_string()),
            Message::Binary(bytes) => Payload::from_binary(&bytes),
            Message::Close(_) => {
                self.close(ticker);
                return;
            }
            Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => return,
        };

        match payload {
            Payload::Point(frame) => self.engine.apply(&frame),
            Payload::Text(text) => debug!(%text, "ignoring text payload"),
            Payload::Malformed { len } => warn!(len, "dropping malformed frame"),
        }
    }

    /// Apply a host command. Pointer commands may yield a frame to send;
    /// viewport commands mutate the engine (and thereby force a repaint).
    ///
    /// Pointer input is dropped outside `Open`: the tracker must only
    /// remember points that actually went out on the wire.
    fn handle_command(&mut self, command: Command) -> Option<PointFrame> {
        match command {
            Command::PointerDown { .. } | Command::PointerMove { .. } | Command::PointerUp
                if self.state != ConnectionState::Open =>
            {
                None
            }
            Command::PointerDown { x, y } => {
                self.tracker.pointer_down(x, y, self.engine.viewport())
            }
            Command::PointerMove { x, y, pressure, buttons } => {
                self.tracker
                    .pointer_move(x, y, pressure, buttons, self.engine.viewport())
            }
            Command::PointerUp => self.tracker.pointer_up(),
            Command::ZoomIn => {
                self.engine.zoom_in();
                None
            }
            Command::ZoomOut => {
                self.engine.zoom_out();
                None
            }
            Command::PanLeft => {
                self.engine.pan_left();
                None
            }
            Command::PanRight => {
                self.engine.pan_right();
                None
            }
            Command::PanUp => {
                self.engine.pan_up();
                None
            }
            Command::PanDown => {
                self.engine.pan_down();
                None
            }
            Command::Shutdown => None,
        }
    }

    /// Transition to `Closed` (idempotent) and slow the render ticker.
    fn close(&mut self, ticker: &mut RenderTicker) {
        if self.state == ConnectionState::Closed {
            return;
        }
        self.state = ConnectionState::Closed;
        ticker.slow_down(SLOW_RENDER_FACTOR);
        warn!("connection closed; start a new session to rejoin");
    }
}
