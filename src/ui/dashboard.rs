// ============================================================================
// Dashboard - Rendu de l'interface principale
// ============================================================================
// Dessine l'interface TUI en utilisant les widgets de ratatui :
//
//   ┌ header : titre, sous-titre, horloge ──────────────────┐
//   │                      œil animé                         │
//   ├ transactions (3/5) ──────────┬ alertes (2/5) ──────────┤
//   ├ soldes des portefeuilles (largeur complète) ───────────┤
//   └ footer : raccourcis ou confirmation de quit ───────────┘
//
// CONCEPTS RATATUI :
// 1. Layout : découpage de l'espace en zones (Constraint)
// 2. Table / Row / Cell : tableaux avec en-tête
// 3. Clear : efface une zone avant d'y dessiner une popup
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

use crate::app::{App, Panel};
use crate::config::{SUBTITLE, TITLE};
use crate::risk::Priority;
use crate::ui::eye_widget::{render_eye, EYE_ART};
use crate::ui::panels::{
    alert_card, balance_row, detail_fields, panel_badge, panel_title, transaction_row,
    BALANCE_HEADERS, TRANSACTION_HEADERS,
};

/// Dessine l'interface complète
///
/// L'écran de détail est une popup : le dashboard reste dessiné dessous.
pub fn render(frame: &mut Frame, app: &App) {
    render_dashboard(frame, app);

    if app.is_on_detail() {
        render_detail(frame, app);
    }
}

/// Dessine le dashboard (header, œil, panneaux, footer)
fn render_dashboard(frame: &mut Frame, app: &App) {
    let chunks = create_layout(frame.size());

    render_header(frame, app, chunks[0]);
    render_eye(frame, app.eye_coverage(), chunks[1]);
    render_panels(frame, app, chunks[2]);
    render_footer(frame, app, chunks[3]);
}

// ============================================================================
// Layout : Découpage de l'écran
// ============================================================================

/// Crée le layout principal (header, œil, panneaux, footer)
fn create_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),                      // Header : titre + sous-titre
            Constraint::Length(EYE_ART.len() as u16),   // Œil
            Constraint::Min(0),                         // Panneaux : tout le reste
            Constraint::Length(3),                      // Footer
        ])
        .split(area)
        .to_vec()
}

/// Bloc commun des panneaux : bordure cyan si le panneau a le focus
fn panel_block(app: &App, panel: Panel) -> Block<'static> {
    let focused = app.focused_panel == panel;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            format!(" {} ", panel_title(panel)),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ));

    if let Some(badge) = panel_badge(panel) {
        let color = match panel {
            Panel::WhaleAlerts => Color::Red,
            _ => Color::Green,
        };
        block = block.title(
            Title::from(Span::styled(format!(" {} ", badge), Style::default().fg(color)))
                .alignment(Alignment::Right),
        );
    }

    block
}

/// Style d'une ligne : inversée si c'est la sélection du panneau actif
fn row_style(app: &App, panel: Panel, index: usize, base: Style) -> Style {
    if app.focused_panel == panel && app.selected_index(panel) == index {
        base.add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        base
    }
}

// ============================================================================
// Header
// ============================================================================

/// Dessine le header avec le titre, le sous-titre et l'heure du dernier tick
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    if !app.clock.is_empty() {
        block = block.title(Title::from(format!(" {} ", app.clock)).alignment(Alignment::Right));
    }

    let text = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::Gray))),
    ];

    let paragraph = Paragraph::new(text).block(block).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

// ============================================================================
// Panneaux
// ============================================================================

/// Transactions à gauche (3/5), alertes à droite (2/5), soldes sur toute la
/// largeur en dessous
fn render_panels(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(app.wallet_balances.len() as u16 + 3), // bordures + en-tête
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(3, 5), Constraint::Ratio(2, 5)])
        .split(rows[0]);

    render_transactions(frame, app, top[0]);
    render_whale_alerts(frame, app, top[1]);
    render_balances(frame, app, rows[1]);
}

fn header_row<'a>(headers: &[&'a str], right_from: usize) -> Row<'a> {
    let cells: Vec<Cell> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let line = Line::from(*h);
            let line = if i >= right_from { line.alignment(Alignment::Right) } else { line };
            Cell::from(line)
        })
        .collect();

    Row::new(cells).style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD))
}

/// Flux de transactions : hash, from, to tronqués, montant et temps alignés à droite
fn render_transactions(frame: &mut Frame, app: &App, area: Rect) {
    let rows: Vec<Row> = app
        .transactions
        .iter()
        .enumerate()
        .map(|(index, tx)| {
            let [hash, from, to, amount, time] = transaction_row(tx);
            let cells = vec![
                Cell::from(hash).style(Style::default().fg(Color::Cyan)),
                Cell::from(from).style(Style::default().fg(Color::White)),
                Cell::from(to).style(Style::default().fg(Color::White)),
                Cell::from(Line::from(amount).alignment(Alignment::Right))
                    .style(Style::default().fg(Color::LightGreen)),
                Cell::from(Line::from(time).alignment(Alignment::Right))
                    .style(Style::default().fg(Color::Gray)),
            ];
            Row::new(cells).style(row_style(app, Panel::Transactions, index, Style::default()))
        })
        .collect();

    let widths = [
        Constraint::Length(13),
        Constraint::Length(13),
        Constraint::Length(13),
        Constraint::Min(12),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths)
        .header(header_row(&TRANSACTION_HEADERS, 3))
        .block(panel_block(app, Panel::Transactions));

    frame.render_widget(table, area);
}

/// Couleur du badge de priorité
fn priority_color(priority: Option<Priority>) -> Color {
    match priority {
        Some(Priority::Critical) => Color::Red,
        Some(Priority::High) => Color::LightRed,
        Some(Priority::Medium) => Color::Yellow,
        Some(Priority::Low) => Color::Green,
        None => Color::DarkGray,
    }
}

/// Alertes baleines : une carte de trois lignes par alerte, séparées par une ligne vide
fn render_whale_alerts(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    for (index, alert) in app.whale_alerts.iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(""));
        }

        let card = alert_card(alert);
        let marker = row_style(app, Panel::WhaleAlerts, index, Style::default().fg(Color::Yellow));
        let badge = card.priority.map(|p| p.label()).unwrap_or("n/a");

        lines.push(Line::from(vec![
            Span::styled("▲ ", marker),
            Span::styled(card.kind, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::styled(card.amount, Style::default().fg(Color::LightGreen)),
        ]));
        lines.push(Line::from(vec![
            Span::raw("  Address: "),
            Span::styled(card.address, Style::default().fg(Color::Cyan)),
        ]));
        lines.push(Line::from(vec![
            Span::styled(format!("  {}  ", card.time), Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("[{}]", badge),
                Style::default().fg(priority_color(card.priority)).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(panel_block(app, Panel::WhaleAlerts));
    frame.render_widget(paragraph, area);
}

/// Soldes des portefeuilles surveillés
fn render_balances(frame: &mut Frame, app: &App, area: Rect) {
    let rows: Vec<Row> = app
        .wallet_balances
        .iter()
        .enumerate()
        .map(|(index, wallet)| {
            let [address, usdc, usdt, dai] = balance_row(wallet);
            let mut cells = vec![Cell::from(address).style(Style::default().fg(Color::Cyan))];
            cells.extend([usdc, usdt, dai].into_iter().map(|balance| {
                Cell::from(Line::from(balance).alignment(Alignment::Right))
                    .style(Style::default().fg(Color::LightGreen))
            }));
            Row::new(cells).style(row_style(app, Panel::Balances, index, Style::default()))
        })
        .collect();

    let widths = [
        Constraint::Length(18),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ];

    let table = Table::new(rows, widths)
        .header(header_row(&BALANCE_HEADERS, 1))
        .block(panel_block(app, Panel::Balances));

    frame.render_widget(table, area);
}

// ============================================================================
// Footer
// ============================================================================

/// Dessine le footer avec les raccourcis clavier ou la confirmation de quit
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let key_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);

    let shortcuts = if app.is_awaiting_quit_confirmation() {
        Line::from(vec![
            Span::styled(
                "Appuyez sur ",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "[q]",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
            Span::styled(
                " à nouveau pour quitter, ou n'importe quelle autre touche pour annuler",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ])
    } else if app.is_on_detail() {
        Line::from(vec![
            Span::styled("[Esc / Space]", key_style),
            Span::raw(" Close  "),
            Span::styled("[q]", key_style),
            Span::raw(" Quit"),
        ])
    } else {
        Line::from(vec![
            Span::styled("[q]", key_style),
            Span::raw(" Quit  "),
            Span::styled("[Tab]", key_style),
            Span::raw(" Panel  "),
            Span::styled("[↑↓ / j k]", key_style),
            Span::raw(" Navigate  "),
            Span::styled("[Enter]", key_style),
            Span::raw(" Details"),
        ])
    };

    let paragraph = Paragraph::new(vec![shortcuts])
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

// ============================================================================
// Détail : popup centrée
// ============================================================================

/// Rectangle centré de taille fixe, borné à `area`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Dessine le détail de l'enregistrement sélectionné, sans troncature
fn render_detail(frame: &mut Frame, app: &App) {
    let fields = detail_fields(app);
    if fields.is_empty() {
        return;
    }

    let lines: Vec<Line> = fields
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<12}", label),
                    Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
                ),
                Span::styled(value, Style::default().fg(Color::White)),
            ])
        })
        .collect();

    let area = centered_rect(56, lines.len() as u16 + 2, frame.size());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} ", panel_title(app.focused_panel)));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

// ============================================================================
// Tests
// ============================================================================
