use crate::cards::{Card, Suit};
use crate::game::Seat;
use crate::tui::app::{AppState, Prompt};
use ratatui::prelude::*;
use ratatui::widgets::*;

fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(height), Constraint::Min(0)])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(rows[1])[1]
}

pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // header
            Constraint::Length(5), // hand
            Constraint::Min(3),    // log
            Constraint::Length(4), // status
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);
    draw_hand(f, app, chunks[1]);
    draw_log(f, app, chunks[2]);
    draw_status(f, app, chunks[3]);

    if app.amount_entry_active() {
        draw_amount_entry(f, app);
    }
}

fn draw_header(f: &mut Frame, app: &AppState, area: Rect) {
    let dealer = app.dealer.map(Seat::name).unwrap_or("-");
    let mut lines = vec![Line::from(format!(
        "Hand #{}   Dealer: {dealer}   Blinds: {}/{}   Pot: {}",
        app.hand_number, app.blinds[0], app.blinds[1], app.pot
    ))];
    lines.push(Line::from(format!(
        "You: {}   Computer: {}",
        app.chips[Seat::Human.index()],
        app.chips[Seat::Computer.index()]
    )));
    let header = Paragraph::new(lines)
        .block(Block::default().title(format!("draw-poker {}", crate::VERSION)).borders(Borders::ALL));
    f.render_widget(header, area);
}

fn draw_hand(f: &mut Frame, app: &AppState, area: Rect) {
    let title = match app.hand() {
        Some((_, strength)) => format!("Your hand: {strength}"),
        None => "Your hand".to_string(),
    };
    f.render_widget(Block::default().title(title).borders(Borders::ALL), area);
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(7); 5])
        .split(inner(area));
    for (i, slot) in slots.iter().enumerate() {
        let card = app.hand().map(|(cards, _)| cards[i]);
        render_card(f, *slot, card);
    }
}

fn suit_style(s: Suit) -> Style {
    match s {
        Suit::Hearts | Suit::Diamonds => Style::default().fg(Color::Red),
        Suit::Spades | Suit::Clubs => Style::default().fg(Color::White),
    }
}

fn render_card(f: &mut Frame, area: Rect, card: Option<Card>) {
    let content = match card {
        Some(c) => Line::from(Span::styled(c.short(), suit_style(c.suit()))),
        None => Line::from("[  ]"),
    };
    let para = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(para, area);
}

fn draw_log(f: &mut Frame, app: &AppState, area: Rect) {
    // Show the tail that fits.
    let rows = area.height.saturating_sub(2) as usize;
    let log = app.log();
    let start = log.len().saturating_sub(rows);
    let lines: Vec<Line> = log[start..].iter().map(|l| Line::from(l.as_str())).collect();
    let para = Paragraph::new(lines).block(Block::default().title("Table").borders(Borders::ALL));
    f.render_widget(para, area);
}

fn draw_status(f: &mut Frame, app: &AppState, area: Rect) {
    let mut lines = Vec::new();
    match &app.prompt {
        Prompt::Action | Prompt::Amount(_) => {
            if let Some(v) = app.view() {
                lines.push(Line::from(format!(
                    "Your bet: {}   Computer bet: {}   To call: {}   Min raise: {}",
                    v.bet, v.opponent_bet, v.to_call, v.min_raise
                )));
            }
            lines.push(Line::from(vec![
                Span::styled("1/B bet", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" • "),
                Span::styled("2/C call", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" • "),
                Span::styled("3/F fold", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" • Q quit"),
            ]));
        }
        Prompt::Continue => {
            lines.push(Line::from("Hand over."));
            lines.push(Line::from("Space/Enter next hand • Q quit"));
        }
        Prompt::GameOver => {
            lines.push(Line::from("Game over."));
            lines.push(Line::from("Press Space or Q to exit"));
        }
        Prompt::Idle => lines.push(Line::from("Computer is thinking...")),
    }
    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Status").borders(Borders::ALL));
    f.render_widget(para, area);
}

fn draw_amount_entry(f: &mut Frame, app: &AppState) {
    let area = centered_rect(50, 6, f.area());
    f.render_widget(Clear, area);
    let text = app.amount_entry_text().unwrap_or_default();
    let mut lines = vec![Line::from(format!("Total bet: {text}"))];
    if let Some(v) = app.view() {
        lines.push(Line::from(format!(
            "{} to call, {} to raise, {} all in",
            v.opponent_bet, v.min_raise, v.max_total
        )));
    }
    lines.push(Line::from("Enter submit • Esc cancel • +/- big blind"));
    let para = Paragraph::new(lines)
        .block(Block::default().title("Bet").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(para, area);
}
