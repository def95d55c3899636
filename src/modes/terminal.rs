use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{Stdout, stdout};
use std::time::Duration;
use tokio::time::interval;
use tracing::{info, warn};

use crate::game::{GameConfig, SharedClock};
use crate::input::{InputHandler, PointerTracker, TrackerFrame};
use crate::render::{Canvas, Renderer};
use crate::states::StateManager;

/// Device index of the terminal pointer, the only tracker built in
pub const POINTER_DEVICE: u32 = 0;

/// Frames per second the loop aims for
const FRAME_RATE: u64 = 30;

/// Resolve the requested capture device, falling back to auto-detection
pub fn select_device(requested: Option<u32>) -> u32 {
    match requested {
        Some(POINTER_DEVICE) | None => POINTER_DEVICE,
        Some(index) => {
            warn!(index, "could not open camera, falling back to auto-detection");
            POINTER_DEVICE
        }
    }
}

/// Runs the game in the terminal with the mouse standing in for the hand
pub struct TerminalMode {
    config: GameConfig,
    manager: StateManager,
    tracker: PointerTracker,
    renderer: Renderer,
    input_handler: InputHandler,
    pending_key: Option<i32>,
    should_quit: bool,
}

impl TerminalMode {
    pub fn new(config: GameConfig, clock: SharedClock, rng: StdRng) -> Result<Self> {
        let manager = StateManager::with_default_states(config.clone(), clock, rng)
            .context("Failed to set up game states")?;
        let tracker = PointerTracker::new(config.width, config.height, Rect::default());

        Ok(Self {
            config,
            manager,
            tracker,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            pending_key: None,
            should_quit: false,
        })
    }

    pub fn manager(&self) -> &StateManager {
        &self.manager
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(width = self.config.width, height = self.config.height, "game loop starting");

        // Run game loop with cleanup
        let result = self.run_frame_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_frame_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut frame_timer = interval(Duration::from_millis(1000 / FRAME_RATE));

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // One frame: update, render, key
                _ = frame_timer.tick() => {
                    let frame = self.tracker.sample();
                    let key = self.pending_key.take();
                    let (keep_going, canvas) = self.step(frame, key)?;

                    let mut area = Rect::default();
                    terminal.draw(|f| {
                        area = f.area();
                        self.renderer.render(f, &canvas);
                    }).context("Failed to draw frame")?;
                    self.tracker.set_area(Renderer::play_area(area));

                    if !keep_going {
                        self.should_quit = true;
                    }
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                info!("quitting");
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            // Only process key press events, not release
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(code) = self.input_handler.key_code(key) {
                    self.pending_key = Some(code);
                }
            }
            Event::Mouse(mouse) => self.tracker.handle_mouse(mouse),
            _ => {}
        }
    }

    /// One frame through the state manager: update, render, then the key
    ///
    /// Returns whether the game should keep running and the frame's draw intents.
    pub fn step(&mut self, frame: TrackerFrame, key: Option<i32>) -> Result<(bool, Canvas)> {
        let updated = self.manager.update(frame.landmarks.as_ref(), frame.finger)?;
        let canvas = self
            .manager
            .render(Canvas::new(self.config.width, self.config.height));
        let handled = self.manager.handle_key(key)?;
        Ok((updated && handled, canvas))
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
