// ============================================================================
// Widget : l'œil
// ============================================================================
// Dessin texte de l'œil. Les paupières recouvrent les lignes depuis le haut
// et le bas à la fois, proportionnellement au recouvrement (0.0 → 1.0).
// ============================================================================

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Dessin de l'œil ouvert (toutes les lignes ont la même largeur)
pub const EYE_ART: [&str; 7] = [
    "         .-~~~~~~~~~~~-.         ",
    "     .-~~    .-----.    ~~-.     ",
    "   .'      .'  ___  '.      '.   ",
    "  (       :   (   )   :       )  ",
    "   '.      '.  ~~~  .'      .'   ",
    "     '-__    '-----'    __-'     ",
    "         '-___________-'         ",
];

/// Lignes centrales (iris et pupille) dessinées en vert
const IRIS_ROWS: std::ops::Range<usize> = 1..6;

/// Caractère de paupière
const LID: char = '█';

/// Nombre de lignes recouvertes depuis le haut (et autant depuis le bas)
pub fn covered_rows(coverage: f64, total: usize) -> usize {
    let half = (total + 1) / 2;
    let rows = (coverage.clamp(0.0, 1.0) * half as f64).round() as usize;
    rows.min(half)
}

/// Remplace le contenu d'une ligne, entre son premier et son dernier
/// caractère visible, par la paupière
fn lid_line(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let first = chars.iter().position(|c| !c.is_whitespace());
    let last = chars.iter().rposition(|c| !c.is_whitespace());

    match (first, last) {
        (Some(first), Some(last)) => chars
            .iter()
            .enumerate()
            .map(|(i, c)| if i >= first && i <= last { LID } else { *c })
            .collect(),
        _ => line.to_string(),
    }
}

/// Lignes de l'œil pour un recouvrement donné, et si chacune est une paupière
pub fn eye_lines(coverage: f64) -> Vec<(String, bool)> {
    let total = EYE_ART.len();
    let covered = covered_rows(coverage, total);

    EYE_ART
        .iter()
        .enumerate()
        .map(|(row, line)| {
            let is_lid = row < covered || row >= total - covered;
            if is_lid {
                (lid_line(line), true)
            } else {
                (line.to_string(), false)
            }
        })
        .collect()
}

/// Dessine l'œil centré dans `area`
pub fn render_eye(frame: &mut Frame, coverage: f64, area: Rect) {
    let lines: Vec<Line> = eye_lines(coverage)
        .into_iter()
        .enumerate()
        .map(|(row, (text, is_lid))| {
            let style = if is_lid {
                Style::default().fg(Color::DarkGray)
            } else if IRIS_ROWS.contains(&row) {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Magenta)
            };
            Line::from(Span::styled(text, style))
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
