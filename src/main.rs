//! Terminal blockfall runner (default binary).
//!
//! Loads the profile, resumes a saved game if there is one, runs the fixed
//! tick loop, then writes the profile back.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use blockfall::config::Config;
use blockfall::core::{GameState, Status};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::store::{Entry, JsonFileStore, MemoryStore, Profile, ProfileStore};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = Config::from_env();

    let mut store: Box<dyn ProfileStore> = if config.no_save {
        Box::new(MemoryStore::new())
    } else {
        Box::new(JsonFileStore::new(&config.profile_path))
    };
    let mut profile = load_profile(&*store, &config);
    let mut game = resume_or_start(&mut profile, &config);

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let result = run(&mut term, &mut game, &mut profile, &config);
    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    if game.status() != Status::GameOver {
        profile.saved_game = Some(game.snapshot());
        eprintln!("[Game] Saved game in progress");
    }
    profile.ghost = game.ghost_enabled();
    if !config.no_save {
        match store.save(&profile) {
            Ok(()) => eprintln!("[Store] Profile saved to {}", config.profile_path.display()),
            Err(e) => eprintln!("[Store] Failed to save profile: {e}"),
        }
    }

    let stats = game.stats();
    eprintln!(
        "[Game] Final score {} | lines {} | level {} | time {}",
        stats.score,
        stats.lines_cleared,
        stats.level,
        stats.formatted_time()
    );
    Ok(())
}

fn load_profile(store: &dyn ProfileStore, config: &Config) -> Profile {
    if config.no_save {
        return Profile::default();
    }
    match store.load() {
        Ok(Some(profile)) => {
            eprintln!("[Store] Loaded profile from {}", config.profile_path.display());
            profile
        }
        Ok(None) => {
            eprintln!("[Store] No profile at {}, starting fresh", config.profile_path.display());
            Profile::default()
        }
        Err(e) => {
            eprintln!("[Store] Warning: {e}; using defaults");
            Profile::default()
        }
    }
}

/// Restore and consume the saved game, or start a new one
fn resume_or_start(profile: &mut Profile, config: &Config) -> GameState {
    let mut game = match profile.saved_game.take().map(GameState::restore) {
        Some(Ok(game)) => {
            eprintln!("[Game] Restored saved game (score {})", game.score());
            game
        }
        Some(Err(e)) => {
            eprintln!("[Game] Saved game rejected: {e}; starting a new one");
            GameState::new(config.seed)
        }
        None => GameState::new(config.seed),
    };
    game.set_ghost(config.ghost.unwrap_or(profile.ghost));
    game
}

fn run(
    term: &mut TerminalRenderer,
    game: &mut GameState,
    profile: &mut Profile,
    config: &Config,
) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(config.tick_ms);
    let one_second = Duration::from_secs(1);
    let mut last_tick = Instant::now();
    let mut last_second = Instant::now();
    let mut was_over = game.game_over();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.frame(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick();
        }
        if last_second.elapsed() >= one_second {
            last_second += one_second;
            game.add_second();
        }

        // Record each finished game once.
        let over = game.game_over();
        if over && !was_over {
            let entry = Entry::from_stats(config.name.as_str(), game.stats());
            profile.leaderboard.log_or_overwrite(entry);
        }
        was_over = over;
    }
}
