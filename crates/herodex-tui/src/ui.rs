use crate::app::{App, FormKind, Mode};
use herodex_domain::HERO_FIELDS;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_listing(app, frame, chunks[0]);
    render_page_indicator(app, frame, chunks[1]);
    render_footer(app, frame, chunks[2]);

    match &app.mode {
        Mode::Form(kind) => render_form_popup(app, kind, frame),
        Mode::ConfirmDelete(_) => render_confirm_popup(app, frame),
        Mode::List => {}
    }
}

fn render_listing(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default().title(" Herodex ").borders(Borders::ALL);

    if app.listing.is_empty() {
        // Empty-page state: no cursor is drawn.
        let empty = Paragraph::new("No heroes registered.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let selected = app.listing.selected_element();
    let items: Vec<ListItem> = app
        .heroes
        .iter()
        .enumerate()
        .map(|(idx, hero)| {
            let is_selected = selected == Some(idx);
            let marker = if is_selected { "> " } else { "  " };
            let line = Line::from(vec![
                Span::raw(marker),
                Span::styled(
                    format!("{:<24}", hero.alias),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("{}  {}", hero.debut, hero.full_name())),
            ]);
            let style = if is_selected {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn render_page_indicator(app: &App, frame: &mut Frame, area: Rect) {
    let current = app.paging.current_page();
    let mut spans = vec![Span::raw(" Page: ")];
    for number in app.paging.page_range() {
        let style = if number == current {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{number} "), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let text = match &app.status {
        Some(status) => status.clone(),
        None => app.keymap.legend(),
    };
    let footer = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

fn render_form_popup(app: &App, kind: &FormKind, frame: &mut Frame) {
    let Some(form) = app.form.as_ref() else {
        return;
    };
    let title = match kind {
        FormKind::Create => " Register hero ",
        FormKind::Edit(_) => " Update hero ",
    };

    let height = (HERO_FIELDS.len() as u16) * 2 + form.problems.len() as u16 + 4;
    let area = centered_rect(54, height, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = Vec::new();
    for (idx, field) in HERO_FIELDS.iter().enumerate() {
        let focused = idx == form.field_index;
        let value = if focused {
            format!("{}_", form.input.as_str())
        } else {
            (field.get)(&form.draft).to_string()
        };
        let label_style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("{}:", field.label),
            label_style,
        )));
        lines.push(Line::from(Span::raw(format!("  {value}"))));
    }
    for problem in &form.problems {
        lines.push(Line::from(Span::styled(
            problem.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let popup = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .title_bottom(" [enter] next/save  [esc] cancel ")
            .borders(Borders::ALL),
    );
    frame.render_widget(popup, area);
}

fn render_confirm_popup(app: &App, frame: &mut Frame) {
    let alias = app
        .selected_hero()
        .map(|hero| hero.alias.as_str())
        .unwrap_or("this hero");
    let area = centered_rect(44, 5, frame.area());
    frame.render_widget(Clear, area);

    let popup = Paragraph::new(format!("Delete {alias}? [y/n]")).block(
        Block::default()
            .title(" Confirm ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(popup, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
