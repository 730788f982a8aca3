//! Platform seam: renderer trait, events, countdown timer and event loop.
//!
//! ## Key Types
//!
//! - `Renderer`: Drawing and countdown services the session calls into
//! - `Event`: Pointer, timer and window events the session consumes
//! - `CountdownTimer`: Posts `Event::TimerTick` from a background thread
//! - `HeadlessRenderer`: Records draw calls; used by tests and the CLI

pub mod event_loop;
pub mod events;
pub mod headless;
pub mod renderer;
pub mod timer;

pub use event_loop::run;
pub use events::{channel, Event, EventReceiver, EventSender, Flow};
pub use headless::{DrawCommand, HeadlessRenderer};
pub use renderer::{Align, Renderer, Tint};
pub use timer::CountdownTimer;
