use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{GameConfig, GameEngine, GameState, TickOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::RunMetrics;
use crate::render::Renderer;

/// Interactive play: one tick source, one input source, one renderer,
/// multiplexed on a single task. Game-over is not a stopping point; the
/// engine resets itself and the loop keeps ticking.
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: RunMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
    tick_interval: Duration,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let tick_interval = Duration::from_millis(config.tick_interval_ms);
        let mut engine = GameEngine::new(config).context("Failed to create game engine")?;
        let state = engine.reset().context("Failed to set up the first run")?;

        Ok(Self {
            engine,
            state,
            metrics: RunMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
            tick_interval,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.tick_interval);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event)?;
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game()?;
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, self.engine.board(), &self.state, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Direction(dir) => {
                    // Coalesced into the pending slot; last request
                    // before the next tick wins.
                    self.state.request_direction(dir);
                }
                KeyAction::Restart => {
                    self.restart_run()?;
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }

        Ok(())
    }

    fn update_game(&mut self) -> Result<()> {
        let outcome = self
            .engine
            .step(&mut self.state)
            .context("Game tick failed")?;

        if let TickOutcome::GameOver { final_score, .. } = outcome {
            self.metrics.on_run_end(final_score);
        }

        Ok(())
    }

    fn restart_run(&mut self) -> Result<()> {
        self.state = self.engine.reset().context("Failed to restart")?;
        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;

    #[test]
    fn test_mode_initialization() {
        let mode = HumanMode::new(GameConfig::small()).unwrap();
        assert_eq!(mode.state.score, 0);
        assert_eq!(mode.state.direction, Direction::Right);
        assert_eq!(mode.tick_interval, Duration::from_millis(550));
    }

    #[test]
    fn test_manual_restart() {
        let mut mode = HumanMode::new(GameConfig::small()).unwrap();
        mode.state.score = 10;
        mode.state.request_direction(Direction::Down);

        mode.restart_run().unwrap();

        assert_eq!(mode.state.score, 0);
        assert_eq!(mode.state.pending_direction, None);
        assert_eq!(mode.state.body.len(), 1);
    }

    #[test]
    fn test_invalid_size_surfaces_at_construction() {
        assert!(HumanMode::new(GameConfig::new(-1)).is_err());
    }
}
