//! The game session state machine.
//!
//! ```text
//! ChoosingPack --pack--> ChoosingSize --size--> Playing --time out--> GameOver
//!      ^                                                                 |
//!      +------------------------------ replay ---------------------------+
//! ```
//!
//! Handlers only mutate state and mark the session dirty; painting happens
//! in `render`, once per event-loop iteration.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::menu::{Menu, MenuAction};
use crate::cards::{content_file_name, Deck};
use crate::core::config::{GameConfig, IconPack};
use crate::core::error::{DeckError, SessionError};
use crate::core::rng::GameRng;
use crate::layout::{CardSlot, Geometry, IconPlacer};
use crate::platform::events::{Event, Flow};
use crate::platform::renderer::{Align, Renderer, Tint};
use crate::round::{ClickOutcome, ClickResolver, Outcome, Round, RoundSelector, SlotOutcomes};

/// Life-cycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    ChoosingPack,
    ChoosingSize,
    Playing,
    GameOver,
}

/// Clock and counters of the current game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub remaining_secs: u32,
    pub elapsed_secs: u32,
    pub score: u32,
    pub errors: u32,
}

impl SessionStats {
    /// Fresh counters with a full clock.
    #[must_use]
    pub fn starting(starting_secs: u32) -> Self {
        Self {
            remaining_secs: starting_secs,
            ..Self::default()
        }
    }
}

/// Owns all mutable game state and the renderer it paints with.
pub struct GameSession<R: Renderer> {
    config: GameConfig,
    renderer: R,
    geometry: Geometry,
    placer: IconPlacer,
    resolver: ClickResolver,
    selection_rng: GameRng,
    layout_rng: GameRng,

    phase: Phase,
    stats: SessionStats,
    pack: Option<usize>,
    pack_capacity: usize,
    deck: Option<Deck>,
    round: Option<Round>,

    menu: Menu,
    hovered: Option<usize>,
    dirty: bool,
}

impl<R: Renderer> GameSession<R> {
    /// Create a session waiting for a pack choice.
    pub fn new(config: GameConfig, renderer: R) -> Self {
        let geometry = renderer.geometry();
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        info!(seed = rng.seed(), "session created");

        Self {
            placer: IconPlacer::from_geometry(&geometry),
            resolver: ClickResolver::new(geometry),
            selection_rng: rng.for_context("selection"),
            layout_rng: rng.for_context("layout"),
            phase: Phase::ChoosingPack,
            stats: SessionStats::starting(config.rules.starting_secs),
            pack: None,
            pack_capacity: 0,
            deck: None,
            round: None,
            menu: Menu::packs(&config.packs, &geometry),
            hovered: None,
            dirty: true,
            geometry,
            renderer,
            config,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The chosen pack, if any.
    #[must_use]
    pub fn pack(&self) -> Option<&IconPack> {
        self.pack.and_then(|i| self.config.packs.get(i))
    }

    /// The loaded deck, while a game is set up.
    #[must_use]
    pub fn deck(&self) -> Option<&Deck> {
        self.deck.as_ref()
    }

    /// The round on display, while playing.
    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Buttons of the current screen.
    #[must_use]
    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Check if a repaint is pending.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Return and clear the repaint flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    // === Event handling ===

    /// Dispatch one event.
    pub fn handle_event(&mut self, event: Event) -> Result<Flow, SessionError> {
        match event {
            Event::PointerMove { x, y } => self.on_pointer_move(x, y),
            Event::PointerClick { x, y } => return self.on_pointer_click(x, y),
            Event::TimerTick => self.on_timer_tick(),
            Event::Exposed => self.dirty = true,
            Event::Quit => {
                self.shutdown();
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Track which button is under the pointer.
    pub fn on_pointer_move(&mut self, x: i32, y: i32) {
        let hovered = self.menu.hit(x, y);
        if hovered != self.hovered {
            self.hovered = hovered;
            self.dirty = true;
        }
    }

    /// Route a click to gameplay or to the current menu.
    pub fn on_pointer_click(&mut self, x: i32, y: i32) -> Result<Flow, SessionError> {
        if self.phase == Phase::Playing {
            self.judge_click(x, y)?;
            return Ok(Flow::Continue);
        }

        match self.menu.action_at(x, y) {
            Some(action) => self.apply_menu_action(action),
            None => Ok(Flow::Continue),
        }
    }

    /// One second of countdown.
    pub fn on_timer_tick(&mut self) {
        if self.phase != Phase::Playing {
            trace!(phase = ?self.phase, "tick ignored");
            return;
        }

        self.stats.remaining_secs = self.stats.remaining_secs.saturating_sub(1);
        self.stats.elapsed_secs += 1;
        self.dirty = true;

        if self.stats.remaining_secs == 0 {
            self.end_game();
        }
    }

    fn apply_menu_action(&mut self, action: MenuAction) -> Result<Flow, SessionError> {
        match (self.phase, action) {
            (Phase::ChoosingPack, MenuAction::Pack(index)) => self.choose_pack(index)?,
            (Phase::ChoosingSize, MenuAction::Size(nb_icons)) => self.choose_size(nb_icons)?,
            (Phase::GameOver, MenuAction::Replay) => self.replay(),
            (Phase::GameOver, MenuAction::Quit) => {
                self.shutdown();
                return Ok(Flow::Quit);
            }
            (phase, action) => debug!(?phase, ?action, "menu action ignored"),
        }
        Ok(Flow::Continue)
    }

    // === Transitions ===

    /// Bind the pack at `index` and move on to the size menu.
    pub fn choose_pack(&mut self, index: usize) -> Result<(), SessionError> {
        if self.phase != Phase::ChoosingPack {
            return Ok(());
        }
        let pack = self
            .config
            .packs
            .get(index)
            .ok_or(SessionError::UnknownPack { index })?;

        self.pack_capacity = self.renderer.load_icon_pack(pack)?;
        info!(pack = %pack.name, icons = self.pack_capacity, "icon pack chosen");

        self.pack = Some(index);
        self.enter(Phase::ChoosingSize, Menu::sizes(&self.config.sizes, &self.geometry));
        Ok(())
    }

    /// Load the deck for `nb_icons` icons per card and start the countdown.
    pub fn choose_size(&mut self, nb_icons: usize) -> Result<(), SessionError> {
        if self.phase != Phase::ChoosingSize {
            return Ok(());
        }

        let path = self.config.content_dir.join(content_file_name(nb_icons));
        let deck = Deck::load(&path)?;
        if deck.nb_icons() != nb_icons {
            return Err(DeckError::malformed(
                1,
                format!(
                    "{} holds cards of {} icons, expected {}",
                    path.display(),
                    deck.nb_icons(),
                    nb_icons
                ),
            )
            .into());
        }
        if let Some(icon) = deck.max_icon_id() {
            if icon.raw() as usize >= self.pack_capacity {
                return Err(SessionError::IconOutOfRange {
                    icon,
                    available: self.pack_capacity,
                });
            }
        }

        self.deck = Some(deck);
        self.round = None;
        self.next_round(SlotOutcomes::default())?;

        self.renderer.start_countdown();
        info!(nb_icons, remaining = self.stats.remaining_secs, "game started");
        self.enter(Phase::Playing, Menu::empty());
        Ok(())
    }

    /// Reset the counters and go back to the pack menu.
    ///
    /// Score and errors are reset along with the clock; the pack and size
    /// must be chosen again.
    pub fn replay(&mut self) {
        self.stats = SessionStats::starting(self.config.rules.starting_secs);
        self.pack = None;
        self.pack_capacity = 0;
        self.deck = None;
        self.round = None;
        info!("replay");
        self.enter(Phase::ChoosingPack, Menu::packs(&self.config.packs, &self.geometry));
    }

    /// Stop the countdown before leaving.
    pub fn shutdown(&mut self) {
        self.renderer.request_countdown_stop();
        info!(score = self.stats.score, errors = self.stats.errors, "session closed");
    }

    fn end_game(&mut self) {
        self.renderer.request_countdown_stop();
        self.round = None;
        info!(
            score = self.stats.score,
            errors = self.stats.errors,
            elapsed = self.stats.elapsed_secs,
            "game over"
        );
        self.enter(Phase::GameOver, Menu::game_over(&self.geometry));
    }

    fn enter(&mut self, phase: Phase, menu: Menu) {
        debug!(from = ?self.phase, to = ?phase, "phase change");
        self.phase = phase;
        self.menu = menu;
        self.hovered = None;
        self.dirty = true;
    }

    // === Rounds ===

    fn judge_click(&mut self, x: i32, y: i32) -> Result<(), SessionError> {
        let Some(round) = &self.round else {
            return Ok(());
        };

        let verdict = self.resolver.resolve(x, y, &round.upper, &round.lower)?;
        let outcome = match verdict {
            ClickOutcome::OutOfBounds => {
                trace!(x, y, "click outside the card");
                return Ok(());
            }
            ClickOutcome::Correct => {
                self.stats.score += 1;
                self.stats.remaining_secs += self.config.rules.correct_bonus_secs;
                Outcome::Correct
            }
            ClickOutcome::Incorrect => {
                self.stats.errors += 1;
                self.stats.remaining_secs = self
                    .stats
                    .remaining_secs
                    .saturating_sub(self.config.rules.incorrect_penalty_secs);
                Outcome::Incorrect
            }
        };
        debug!(
            ?verdict,
            score = self.stats.score,
            errors = self.stats.errors,
            remaining = self.stats.remaining_secs,
            "click judged"
        );

        if self.stats.remaining_secs == 0 {
            self.end_game();
            return Ok(());
        }

        self.next_round(SlotOutcomes::both(outcome))?;
        self.dirty = true;
        Ok(())
    }

    /// Draw a new pair and lay out both cards.
    fn next_round(&mut self, outcomes: SlotOutcomes) -> Result<(), SessionError> {
        let Some(deck) = &self.deck else {
            return Ok(());
        };

        let previous = self.round.as_ref().map(Round::indices);
        let (upper, lower) = RoundSelector::draw(deck.nb_cards(), previous, &mut self.selection_rng)?;

        let mut upper = deck.cards()[upper.raw()].clone();
        let mut lower = deck.cards()[lower.raw()].clone();
        self.placer.layout(&mut upper, &mut self.layout_rng);
        self.placer.layout(&mut lower, &mut self.layout_rng);

        self.round = Some(Round {
            upper,
            lower,
            outcomes,
        });
        Ok(())
    }

    // === Painting ===

    /// Paint the current screen and clear one-frame state.
    pub fn render(&mut self) {
        let w = self.geometry.width as i32;
        let font = self.geometry.font_size as i32;

        self.renderer.clear();
        self.renderer.draw_text(
            &format!("Spot It!    Score {}", self.stats.score),
            w / 2,
            0,
            Align::Center,
        );

        match self.phase {
            Phase::ChoosingPack => {
                self.renderer
                    .draw_text("Choose an icon pack", w / 2, 2 * font, Align::Center);
                self.draw_menu();
            }
            Phase::ChoosingSize => {
                self.renderer
                    .draw_text("How many icons per card?", w / 2, 2 * font, Align::Center);
                self.draw_menu();
            }
            Phase::Playing => {
                self.renderer.draw_text(
                    &format!("Time {}s    Errors {}", self.stats.remaining_secs, self.stats.errors),
                    w / 2,
                    font + font / 2,
                    Align::Center,
                );
                self.draw_round();
            }
            Phase::GameOver => {
                self.renderer.draw_text("Game over", w / 2, 4 * font, Align::Center);
                self.renderer.draw_text(
                    &format!("Score {}    Errors {}", self.stats.score, self.stats.errors),
                    w / 2,
                    5 * font + font / 2,
                    Align::Center,
                );
                self.draw_menu();
            }
        }

        self.renderer.present();

        if let Some(round) = self.round.as_mut() {
            round.outcomes = SlotOutcomes::default();
        }
        self.dirty = false;
    }

    fn draw_menu(&mut self) {
        for (i, button) in self.menu.buttons().iter().enumerate() {
            self.renderer
                .draw_button(&button.label, button.rect, self.hovered == Some(i));
        }
    }

    fn draw_round(&mut self) {
        let Some(round) = self.round.as_mut() else {
            return;
        };

        for slot in CardSlot::ALL {
            let tint = Tint::from(round.outcomes.get(slot));
            self.renderer.draw_card_shape(slot, tint);

            let card = round.card_mut(slot);
            IconPlacer::shuffle_order(card, &mut self.layout_rng);
            for icon in card.icons.iter_mut() {
                icon.center = Some(self.renderer.draw_icon(slot, icon.id, &icon.placement));
            }
        }
    }
}
