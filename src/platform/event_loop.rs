//! Single-threaded event loop.
//!
//! Each iteration blocks for one event, lets the session handle it, then
//! paints at most once. Every state change the event caused costs a single
//! frame, and the next event only sees the screen as painted.

use tracing::info;

use super::events::{EventReceiver, Flow};
use super::renderer::Renderer;
use crate::core::error::SessionError;
use crate::session::GameSession;

/// Run until a quit is requested or every event producer is gone.
pub fn run<R: Renderer>(session: &mut GameSession<R>, events: &EventReceiver) -> Result<(), SessionError> {
    if session.take_dirty() {
        session.render();
    }

    while let Ok(event) = events.recv() {
        let flow = session.handle_event(event)?;

        if session.take_dirty() {
            session.render();
        }

        if flow == Flow::Quit {
            info!("leaving event loop");
            return Ok(());
        }
    }

    session.shutdown();
    Ok(())
}
