// Crate-level lints: pixel math casts are intentional throughout the renderer
#![allow(clippy::cast_possible_truncation)] // u32->i32 casts for pixel coordinates
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive

//! Fuzzy-text watch face simulator.
//!
//! Draws the current time as a natural-language phrase rounded to 5-minute
//! marks ("five past ten"), the date after a tap, or a connection-lost alert
//! when the paired device drops off. The core is split into a pure phrase
//! generator ([`phrase`]) and a small view state machine ([`view`]); this
//! file is only the event loop wiring them to an SDL window.
//!
//! # Controls (Simulator Mode)
//!
//! | Input | Action |
//! |-------|--------|
//! | Mouse click / `SPACE` | Tap the face (clock -> date -> clock) |
//! | `C` | Peer connected signal |
//! | `D` | Peer disconnected signal (alert + haptic pulse) |
//! | `L` | Toggle event-log overlay |
//! | Close window | Quit |
//!
//! Key repeat is ignored to prevent tap spam when holding keys.
//!
//! # Architecture
//!
//! ```text
//!  window events ──┐
//!  minute tick ────┤                      ┌──> phrase (fuzzy time / date)
//!                  ├──> view state machine┤
//!  revert deadline─┘         │            └──> render (centered word block)
//!                            └──> effects ───> haptics
//! ```
//!
//! All events are delivered serially from this loop; the machine and the
//! phrase generator run to completion per event with no shared mutable
//! state, so nothing here needs locking. The minute tick re-aligns itself
//! to the wall clock after every firing (no drift), and the date view's
//! auto-revert deadline is polled each frame.

mod colors;
mod config;
mod haptics;
mod locale;
mod log;
mod phrase;
mod render;
mod styles;
mod timer;
mod view;

use std::process::ExitCode;
use std::thread;
use std::time::Instant;

use chrono::Local;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

use crate::colors::BLACK;
use crate::config::{FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::haptics::{Haptics, SimulatorHaptics};
use crate::locale::{CONNECTION_LOST, WordTables};
use crate::log::EventLog;
use crate::phrase::{EmphasizedPhrase, date_phrase, fuzzy_time};
use crate::render::{RenderState, draw_face, draw_log_overlay};
use crate::timer::AlignedTicker;
use crate::view::{Effect, View, WatchEvent, WatchView};

fn main() -> ExitCode {
    // Word tables are validated before any window exists: a malformed locale
    // aborts startup instead of rendering garbled phrases.
    let tables = match WordTables::english() {
        Ok(tables) => tables,
        Err(err) => {
            eprintln!("word table configuration error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let alert_phrase = EmphasizedPhrase::parse(CONNECTION_LOST);

    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Fuzzy Text Watch Face", &output_settings);
    display.clear(BLACK).ok();
    window.update(&display);

    // ==========================================================================
    // Main Loop State
    // ==========================================================================

    let mut watch = WatchView::new();
    let mut haptics = SimulatorHaptics::new();
    let mut event_log = EventLog::new();
    event_log.push("watch face started");

    let mut ticker = AlignedTicker::new(Instant::now(), Local::now().timestamp_millis());
    let mut render_state = RenderState::new();

    // Event-log overlay visibility (L key toggles)
    let mut show_log = false;

    // ==========================================================================
    // Main Render Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        // Collect window events first, then deliver them serially below:
        // one logical event queue, run to completion per event.
        let mut events: Vec<WatchEvent> = Vec::new();
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return ExitCode::SUCCESS,
                SimulatorEvent::MouseButtonDown { .. } => events.push(WatchEvent::Tap),
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent tap spam when holding keys
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Space => events.push(WatchEvent::Tap),
                        Keycode::C => events.push(WatchEvent::PeerConnected),
                        Keycode::D => events.push(WatchEvent::PeerDisconnected),
                        Keycode::L => {
                            show_log = !show_log;
                            // The overlay painted over the face; force a
                            // repaint when it closes.
                            if !show_log {
                                render_state.invalidate();
                            }
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        for event in events {
            let effect = watch.handle_event(event, Instant::now());
            event_log.push(match event {
                WatchEvent::Tap => "tap",
                WatchEvent::PeerConnected => "peer connected",
                WatchEvent::PeerDisconnected => "peer disconnected",
                WatchEvent::RenderTick => "minute tick",
            });
            if effect == Some(Effect::HapticAlert) {
                haptics.alert();
                event_log.push("haptic alert pattern played");
            }
        }

        // Fire the date view's auto-revert if its deadline has passed.
        watch.poll_revert(Instant::now());

        // Minute-aligned render tick; the view is unchanged, the phrase
        // below picks up the new time on its own.
        if ticker.poll(frame_start, Local::now().timestamp_millis()) {
            watch.handle_event(WatchEvent::RenderTick, Instant::now());
            event_log.push("minute tick");
        }

        // ======================================================================
        // Render
        // ======================================================================

        let now = Local::now().naive_local();
        let phrase = match watch.current() {
            View::Clock => fuzzy_time(now.time(), &tables),
            View::Date => date_phrase(now.date(), &tables),
            View::Alert => alert_phrase.clone(),
        };

        if show_log {
            draw_log_overlay(&mut display, &event_log, haptics.pulse_count());
            render_state.invalidate();
        } else if render_state.needs_redraw(watch.current(), &phrase) {
            draw_face(&mut display, watch.current(), &phrase);
        }

        window.update(&display);

        // Sleep to maintain target frame rate (~50 FPS)
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}
