use anyhow::{Context, Result};
use log::info;
use std::time::Duration;

use crate::engine::events::SessionEvent;
use crate::engine::game_loop::GameLoop;
use crate::engine::resources::ResourceLoader;
use crate::game::actors::Actor;
use crate::game::arena::{settings::data_root, ArenaSettings};
use crate::game::session::Session;
use crate::ui::{HudMenu, Menu, ShopMenu, Viewport};

mod core;
mod engine;
mod game;
mod ui;

/// Level the demo round is played on
const DEMO_LEVEL: &str = "levels/courtyard.toml";

/// Host frame time the headless driver simulates (~60 fps)
const FRAME_TIME: Duration = Duration::from_micros(16_667);

/// Seconds between scripted kills in the demo round
const KILL_INTERVAL: f32 = 4.0;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Arena Rounds...");

    let loader = ResourceLoader::new(data_root());
    let settings = ArenaSettings::load_from(&loader)?;
    let seed = std::env::var("ARENA_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0x5eed);

    let mut session = Session::new(Some(settings), seed);
    session
        .start_arena(true, DEMO_LEVEL, &loader)
        .with_context(|| format!("start arena on {DEMO_LEVEL}"))?
        .start_round();

    let mut viewport = Viewport::new(1280.0, 720.0);
    let mut hud = HudMenu::new();
    hud.init(viewport.size());

    let mut game_loop = GameLoop::new();
    let mut since_kill = 0.0;

    // Headless host loop: the player picks off one bot every few seconds
    while session.career.last_outcome().is_none() {
        let updates = game_loop.begin_frame(FRAME_TIME);
        for _ in 0..updates {
            let dt = game_loop.fixed_timestep();
            session.process(dt);
            hud.process(dt, &session);

            since_kill += dt;
            if since_kill >= KILL_INTERVAL {
                since_kill = 0.0;
                if let Some(event) = scripted_kill(&session) {
                    session.queue_event(event);
                }
            }
        }

        // Window drag halfway through
        if game_loop.frame_count() == 600 && viewport.set_size(1920.0, 1080.0) {
            hud.resize(viewport.size());
        }

        let expired = session.arena().is_some_and(|a| a.clock().is_expired());
        if expired {
            break;
        }
    }

    if let Some(arena) = session.arena_mut() {
        arena.end_round();
        info!("Time left: {}", arena.round_time_text());
    }
    hud.refresh(&session);
    info!("Objective: {}", hud.objective_box.text.replace('\n', " | "));
    info!(
        "Simulated {:.1}s over {} frames",
        game_loop.elapsed().as_secs_f32(),
        game_loop.frame_count()
    );

    // Between encounters the shop opens; leaving it completes the encounter
    let mut shop = ShopMenu::with_career_stock();
    shop.init(viewport.size());
    if let Some(button) = shop.item_buttons().first() {
        shop.activate(&button.action, &mut session.career);
    }
    if let Some(finish) = shop.finished_button() {
        shop.activate(&finish.action, &mut session.career);
    }
    shop.clear();

    info!("Encounters: {:?}", session.career.outcomes());
    Ok(())
}

/// Death event for the first bot, credited to the player
fn scripted_kill(session: &Session) -> Option<SessionEvent> {
    let arena = session.arena()?;
    let player = arena.player()?.path();
    let victim = arena
        .actors()
        .all()
        .iter()
        .find(|a| !a.brain.is_human())
        .map(Actor::path)?;
    Some(SessionEvent::actor_died(&victim, Some(&player)))
}
