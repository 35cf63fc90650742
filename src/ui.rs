use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Field, Mode, StatusKind};
use crate::presets::PRESETS;
use crate::prompt::ValidationStatus;
use crate::theme::Palette;

pub fn draw(frame: &mut Frame, app: &App) {
    let palette = app.theme.palette();
    let area = frame.size();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(0),    // body
            Constraint::Length(3), // footer
        ])
        .split(area);

    // ── Header ──────────────────────────────────────────────────────────────
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "asmr",
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "gen",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  ·  ASMR video prompt builder"),
        Span::styled(
            format!("   [{}]", app.theme.preference().label()),
            Style::default().fg(palette.dim),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Plain)
            .border_style(Style::default().fg(palette.border)),
    );
    frame.render_widget(header, outer[0]);

    // ── Body ─────────────────────────────────────────────────────────────────
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Min(0)])
        .split(outer[1].inner(Margin {
            horizontal: 2,
            vertical: 1,
        }));

    draw_form_panel(frame, app, &palette, body[0]);
    draw_preview_panel(frame, app, &palette, body[1]);

    // ── Footer ───────────────────────────────────────────────────────────────
    draw_footer(frame, app, &palette, outer[2]);

    // Modal popups on top of everything else.
    match &app.mode {
        Mode::Form => {}
        Mode::EditingIdea(buf) => draw_idea_editor(frame, &palette, area, buf),
        Mode::PickingOption { cursor } => {
            draw_option_picker(frame, app, &palette, area, *cursor, false)
        }
        Mode::TogglingOptions { cursor } => {
            draw_option_picker(frame, app, &palette, area, *cursor, true)
        }
        Mode::PickingPreset { cursor } => draw_preset_picker(frame, &palette, area, *cursor),
    }
}

fn field_value(app: &App, field: Field) -> String {
    let join = |set: &[String]| {
        if set.is_empty() {
            "(none)".to_string()
        } else {
            set.join(", ")
        }
    };
    match field {
        Field::Idea => {
            if app.form.idea.is_empty() {
                "(empty)".to_string()
            } else {
                app.form.idea.clone()
            }
        }
        Field::Moods => join(&app.form.moods),
        Field::CameraMovement => app.form.camera_movement.clone(),
        Field::CameraAngle => app.form.camera_angle.clone(),
        Field::CameraFocus => app.form.camera_focus.clone(),
        Field::SoundscapePrimary => app.form.soundscape_primary.clone(),
        Field::SoundscapeSecondary => join(&app.form.soundscape_secondary),
        Field::SoundscapeQuality => app.form.soundscape_quality.clone(),
        Field::VisualEffects => join(&app.form.visual_effects),
    }
}

fn draw_form_panel(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let items: Vec<ListItem> = Field::ALL
        .iter()
        .map(|field| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<22}", field.label()),
                    Style::default().fg(palette.dim),
                ),
                Span::styled(field_value(app, *field), Style::default().fg(palette.text)),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(app.field_selected));

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.border))
                .title(" Form "),
        )
        .highlight_style(
            Style::default()
                .fg(palette.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_preview_panel(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let title = match app.validation {
        ValidationStatus::Unchecked => " Prompt JSON ".to_string(),
        ValidationStatus::Valid => " Prompt JSON · valid ".to_string(),
        ValidationStatus::Invalid => " Prompt JSON · INVALID ".to_string(),
    };

    let content: Vec<Line> = match &app.generated {
        Some(text) => text.lines().map(|l| highlight_json_line(l, palette)).collect(),
        None => vec![Line::from(Span::styled(
            "Press g to generate the prompt from the current form.",
            Style::default().fg(palette.dim),
        ))],
    };

    let preview = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border))
            .title(title),
    );
    frame.render_widget(preview, area);
}

/// Light JSON coloring: quoted keys, quoted string values, everything else
/// as punctuation.
fn highlight_json_line<'a>(line: &'a str, palette: &Palette) -> Line<'a> {
    let trimmed = line.trim_start();
    if let Some(colon) = line.find("\":") {
        if trimmed.starts_with('"') {
            let (key, rest) = line.split_at(colon + 1);
            let value_style = if rest.trim_start().starts_with(": \"") || rest.contains('"') {
                Style::default().fg(palette.json_string)
            } else {
                Style::default().fg(palette.json_punct)
            };
            return Line::from(vec![
                Span::styled(key, Style::default().fg(palette.json_key)),
                Span::styled(rest, value_style),
            ]);
        }
    }
    if trimmed.starts_with('"') {
        // Array element string.
        return Line::from(Span::styled(
            line,
            Style::default().fg(palette.json_string),
        ));
    }
    Line::from(Span::styled(line, Style::default().fg(palette.json_punct)))
}

fn draw_footer(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let line = if let Some(status) = &app.status {
        let fg = match status.kind {
            StatusKind::Info => palette.text,
            StatusKind::Ok => palette.ok,
            StatusKind::Error => palette.err,
        };
        Line::from(Span::styled(status.text.clone(), Style::default().fg(fg)))
    } else {
        let key = |k: &'static str| Span::styled(format!(" {k} "), Style::default().fg(palette.accent));
        Line::from(vec![
            key("↑↓"),
            Span::raw("field  "),
            key("Enter"),
            Span::raw("edit  "),
            key("p"),
            Span::raw("presets  "),
            key("g"),
            Span::raw("generate  "),
            key("c"),
            Span::raw("copy  "),
            key("s"),
            Span::raw("save  "),
            key("v"),
            Span::raw("self-test  "),
            key("r"),
            Span::raw("reset  "),
            key("t"),
            Span::raw("theme  "),
            key("q"),
            Span::raw("quit"),
        ])
    };

    let footer = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Plain)
            .border_style(Style::default().fg(palette.border)),
    );
    frame.render_widget(footer, area);
}

fn draw_idea_editor(frame: &mut Frame, palette: &Palette, area: Rect, buf: &str) {
    let popup = centered_rect(area, 60, 5);
    frame.render_widget(Clear, popup);
    let input = Paragraph::new(Line::from(vec![
        Span::styled(buf, Style::default().fg(palette.text)),
        Span::styled("▏", Style::default().fg(palette.accent)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.accent))
            .title(" Idea (Enter to apply, Esc to cancel) "),
    );
    frame.render_widget(input, popup);
}

fn draw_option_picker(
    frame: &mut Frame,
    app: &App,
    palette: &Palette,
    area: Rect,
    cursor: usize,
    multi: bool,
) {
    let field = app.selected_field();
    let options = field.options();
    let popup = centered_rect(area, 44, (options.len() as u16) + 2);
    frame.render_widget(Clear, popup);

    let selected_set: &[String] = match field {
        Field::Moods => &app.form.moods,
        Field::SoundscapeSecondary => &app.form.soundscape_secondary,
        Field::VisualEffects => &app.form.visual_effects,
        _ => &[],
    };

    let items: Vec<ListItem> = options
        .iter()
        .map(|opt| {
            if multi {
                let mark = if selected_set.iter().any(|s| s == opt) {
                    "[x] "
                } else {
                    "[ ] "
                };
                ListItem::new(format!("{mark}{opt}"))
            } else {
                ListItem::new(*opt)
            }
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(cursor));

    let hint = if multi { "Space toggles, Esc done" } else { "Enter selects" };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.accent))
                .title(format!(" {} ({hint}) ", field.label())),
        )
        .highlight_style(
            Style::default()
                .fg(palette.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, popup, &mut list_state);
}

fn draw_preset_picker(frame: &mut Frame, palette: &Palette, area: Rect, cursor: usize) {
    let popup = centered_rect(area, 40, (PRESETS.len() as u16) + 2);
    frame.render_widget(Clear, popup);

    let items: Vec<ListItem> = PRESETS.iter().map(|p| ListItem::new(p.name)).collect();
    let mut list_state = ListState::default();
    list_state.select(Some(cursor));

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.accent))
                .title(" Presets (Enter applies) "),
        )
        .highlight_style(
            Style::default()
                .fg(palette.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, popup, &mut list_state);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
