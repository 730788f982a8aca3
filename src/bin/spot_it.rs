//! Terminal front end.
//!
//! Reads commands from stdin and prints every presented frame to stdout:
//!
//! ```text
//! click 350 200
//! move 120 340
//! expose
//! quit
//! ```
//!
//! Usage:
//!   cargo run --bin spot-it -- --data-dir data

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use spot_it::cards::{IconId, Placement};
use spot_it::core::{GameConfig, IconPack, RenderError};
use spot_it::layout::{CardSlot, Geometry, Rect};
use spot_it::platform::{self, Align, CountdownTimer, DrawCommand, Event, EventSender, HeadlessRenderer, Renderer, Tint};
use spot_it::session::GameSession;

const CONFIG_FILE: &str = "spot-it.toml";

#[derive(Parser)]
#[command(name = "spot-it", about = "Spot It! card-matching game in the terminal")]
struct Cli {
    /// Directory holding content files and an optional spot-it.toml
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,
}

/// Prints each frame and drives a real countdown.
struct TerminalRenderer {
    inner: HeadlessRenderer,
    timer: CountdownTimer,
}

impl TerminalRenderer {
    fn print_frame(&self) -> std::io::Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        writeln!(out, "----")?;
        for command in self.inner.last_frame() {
            match command {
                DrawCommand::Text { text, .. } => writeln!(out, "{}", text)?,
                DrawCommand::CardShape { slot, tint } => writeln!(out, "[{:?} card{}]", slot, tint_label(*tint))?,
                DrawCommand::Icon { icon, center, .. } => {
                    writeln!(out, "  {} at ({}, {})", icon, center.0, center.1)?
                }
                DrawCommand::Button { label, rect, hovered } => {
                    let (x, y) = rect.center();
                    let marker = if *hovered { ">" } else { " " };
                    writeln!(out, "{} [{}] at ({}, {})", marker, label, x, y)?
                }
            }
        }
        out.flush()
    }
}

fn tint_label(tint: Tint) -> &'static str {
    match tint {
        Tint::Plain => "",
        Tint::Success => ", correct!",
        Tint::Failure => ", wrong!",
    }
}

impl Renderer for TerminalRenderer {
    fn geometry(&self) -> Geometry {
        self.inner.geometry()
    }

    fn load_icon_pack(&mut self, pack: &IconPack) -> Result<usize, RenderError> {
        self.inner.load_icon_pack(pack)
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, align: Align) {
        self.inner.draw_text(text, x, y, align);
    }

    fn draw_card_shape(&mut self, slot: CardSlot, tint: Tint) {
        self.inner.draw_card_shape(slot, tint);
    }

    fn draw_icon(&mut self, slot: CardSlot, icon: IconId, placement: &Placement) -> (i32, i32) {
        self.inner.draw_icon(slot, icon, placement)
    }

    fn draw_button(&mut self, label: &str, rect: Rect, hovered: bool) {
        self.inner.draw_button(label, rect, hovered);
    }

    fn present(&mut self) {
        self.inner.present();
        if let Err(error) = self.print_frame() {
            tracing::warn!(%error, "could not print frame");
        }
    }

    fn start_countdown(&mut self) {
        self.timer.start();
    }

    fn request_countdown_stop(&mut self) {
        self.timer.request_stop();
    }
}

fn load_config(data_dir: &Path) -> Result<GameConfig, Box<dyn std::error::Error>> {
    let path = data_dir.join(CONFIG_FILE);
    if path.is_file() {
        tracing::info!(path = %path.display(), "loading config");
        Ok(GameConfig::load(&path)?)
    } else {
        Ok(GameConfig::default().with_content_dir(data_dir))
    }
}

fn spawn_input_reader(sender: EventSender) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match Event::parse_command(&line) {
                Some(event) => {
                    if sender.send(event).is_err() {
                        break;
                    }
                }
                None if line.trim().is_empty() => {}
                None => tracing::warn!(%line, "unknown command"),
            }
        }
        let _ = sender.send(Event::Quit);
    });
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&cli.data_dir)?;
    let geometry = Geometry::from_config(&config.window);

    let (sender, receiver) = platform::channel();
    let renderer = TerminalRenderer {
        inner: HeadlessRenderer::new(geometry),
        timer: CountdownTimer::new(Duration::from_millis(config.rules.tick_millis), sender.clone()),
    };

    spawn_input_reader(sender);

    let mut session = GameSession::new(config, renderer);
    platform::run(&mut session, &receiver)?;
    println!("Thanks for playing!");
    Ok(())
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "fatal");
            eprintln!("spot-it: {}", error);
            ExitCode::FAILURE
        }
    }
}
