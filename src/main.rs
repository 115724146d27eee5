use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use std::path::Path;
use std::time::Duration;

use tui_globe::app::App;
use tui_globe::data;
use tui_globe::globe::LandLookup;
use tui_globe::ui;

/// Frame pacing: render, then wait up to this long for input.
const FRAME_TIME: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    // Initialize terminal
    let mut terminal = ratatui::init();
    terminal.clear()?;

    let result = run(&mut terminal);

    ratatui::restore();
    result
}

fn run(terminal: &mut DefaultTerminal) -> Result<()> {
    // Prefer high-resolution GeoJSON boundaries when a data dir exists
    let data_dir = Path::new("data");
    let mut boundaries = Vec::new();
    if data_dir.exists() {
        match data::load_geojson_boundaries(data_dir) {
            Ok(loaded) => boundaries = loaded,
            Err(e) => eprintln!("Warning: failed to read data dir: {}", e),
        }
    }
    if boundaries.is_empty() {
        boundaries = data::builtin_boundaries();
    }

    // The land lookup is built once and read-only from here on
    let lookup = LandLookup::build(&boundaries);
    let mut app = App::new(lookup);

    loop {
        terminal.draw(|frame| ui::render(frame, &app))?;

        if event::poll(FRAME_TIME)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.quit(),
                    KeyCode::Char('n') => app.toggle_night(),
                    KeyCode::Char(' ') => app.toggle_pause(),
                    KeyCode::Char(c @ '1'..='4') => app.set_quality(c as u8 - b'0'),
                    KeyCode::Char('a') => app.toggle_atmosphere(),
                    KeyCode::Char('c') => app.toggle_clouds(),
                    KeyCode::Char('l') => app.toggle_city_lights(),
                    KeyCode::Char('s') => app.toggle_specular(),
                    KeyCode::Char('i') => app.toggle_polar_ice(),
                    KeyCode::Left => app.nudge(-1.0),
                    KeyCode::Right => app.nudge(1.0),
                    _ => {}
                },
                // The next draw picks up new dimensions; no state to fix up
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        app.tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
