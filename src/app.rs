use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::{Duration, Instant};
use tokio::time::interval;

use crate::audio::{Audio, Sfx};
use crate::game::{Game, GameConfig, TickGate, TickOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionStats;
use crate::render::Renderer;

/// Frame cadence; gameplay ticks are gated separately by the [`TickGate`]
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

pub struct App {
    game: Game,
    tick_gate: TickGate,
    stats: SessionStats,
    renderer: Renderer,
    input_handler: InputHandler,
    audio: Option<Audio>,
    muted: bool,
    should_quit: bool,
}

impl App {
    pub fn new(config: GameConfig, muted: bool) -> Self {
        let tick_gate = TickGate::new(config.tick_interval());

        Self {
            game: Game::new(config),
            tick_gate,
            stats: SessionStats::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            audio: None,
            muted,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        if !self.muted {
            // A missing audio device is not an error; the game runs silent
            self.audio = Audio::new().ok();
            if let Some(audio) = self.audio.as_mut() {
                audio.start_music();
            }
        }

        // Setup terminal
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor().context("failed to hide cursor")?;
        terminal.clear().context("failed to clear terminal")?;

        let result = self.run_event_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut frame_timer = interval(FRAME_INTERVAL);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Render frame; the gate decides whether gameplay advances
                _ = frame_timer.tick() => {
                    if self.tick_gate.poll(Instant::now()) {
                        let outcome = self.game.tick();
                        self.apply_outcome(outcome);
                    }

                    self.stats.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.game, &self.stats);
                    }).context("failed to draw frame")?;
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

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => {
                    // The controller enforces reversal and pause rules
                    self.game.steer(direction);
                }
                KeyAction::TogglePause => self.game.toggle_pause(),
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }
    }

    fn apply_outcome(&mut self, outcome: TickOutcome) {
        if outcome.ate_food {
            self.play(Sfx::Eat);
        }

        if let Some(end) = outcome.ended {
            self.stats.on_round_end(end.final_score);
            self.play(Sfx::Crash);
        }
    }

    fn play(&self, sfx: Sfx) {
        if let Some(audio) = self.audio.as_ref() {
            audio.play(sfx);
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("failed to leave alternate screen")?;
        terminal.show_cursor().context("failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Collision, Phase, RoundEnd};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_app_starts_idle() {
        let app = App::new(GameConfig::default(), true);
        assert_eq!(app.game.phase(), Phase::Idle);
        assert_eq!(app.game.score(), 0);
    }

    #[test]
    fn test_steer_key_starts_play() {
        let mut app = App::new(GameConfig::default(), true);

        let up = Event::Key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        app.handle_event(up);

        assert_eq!(app.game.phase(), Phase::Running);
    }

    #[test]
    fn test_quit_key_stops_the_loop() {
        let mut app = App::new(GameConfig::default(), true);

        let q = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        app.handle_event(q);

        assert!(app.should_quit);
    }

    #[test]
    fn test_round_end_outcome_feeds_stats() {
        let mut app = App::new(GameConfig::default(), true);

        app.apply_outcome(TickOutcome {
            ate_food: false,
            ended: Some(RoundEnd {
                collision: Collision::Wall,
                final_score: 9,
            }),
        });

        assert_eq!(app.stats.rounds_played, 1);
        assert_eq!(app.stats.best_score, 9);
    }
}
