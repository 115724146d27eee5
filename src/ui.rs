use crate::app::App;
use crate::braille::BrailleCanvas;
use crate::globe::frame::render_frame;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

/// Render the UI
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Split into globe area and status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Globe
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_globe(frame, app, chunks[0]);
    render_status_bar(frame, app, chunks[1]);
}

fn render_globe(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " Terminal Globe ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match render_frame(
        &app.config,
        &app.lookup,
        inner.width,
        inner.height,
        app.rotation.angle(),
    ) {
        Ok(canvas) => frame.render_widget(GlobeWidget { canvas }, inner),
        Err(err) => {
            let msg = Paragraph::new(err.to_string()).style(Style::default().fg(Color::Red));
            frame.render_widget(msg, area);
        }
    }
}

/// Blits the composited glyph grid into the terminal buffer.
struct GlobeWidget {
    canvas: BrailleCanvas,
}

impl Widget for GlobeWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (row_idx, row) in self.canvas.rows().enumerate() {
            if row_idx >= area.height as usize {
                break;
            }
            let y = area.y + row_idx as u16;

            for (col_idx, cell) in row.iter().enumerate() {
                if col_idx >= area.width as usize {
                    break;
                }
                // Leave empty cells as background
                if cell.is_blank() {
                    continue;
                }
                let x = area.x + col_idx as u16;
                buf[(x, y)]
                    .set_char(cell.glyph())
                    .set_fg(Color::Indexed(cell.color));
            }
        }
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let cfg = &app.config;

    let toggle = |on: bool, on_label: &'static str, off_label: &'static str| {
        Span::styled(
            if on { on_label } else { off_label },
            Style::default().fg(if on { Color::Green } else { Color::DarkGray }),
        )
    };

    let status = Line::from(vec![
        Span::styled(
            format!(" {} ", app.mode_label()),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.quality_label(), Style::default().fg(Color::Magenta)),
        Span::styled(" ", Style::default()),
        toggle(cfg.enable_atmosphere, "[A]tmo ", "[a]tmo "),
        toggle(cfg.enable_clouds, "[C]louds ", "[c]louds "),
        toggle(cfg.enable_city_lights, "[L]ights ", "[l]ights "),
        toggle(cfg.enable_ocean_specular, "[S]pec ", "[s]pec "),
        toggle(cfg.enable_polar_ice, "[I]ce ", "[i]ce "),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:.1} fps ", app.fps()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("θ={:.0}° ", app.theta_degrees()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            if app.paused { "⏸ paused " } else { "▶ " },
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            "| ←→:rotate n:night space:pause 1-4:quality q:quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let paragraph = Paragraph::new(status);
    frame.render_widget(paragraph, area);
}
