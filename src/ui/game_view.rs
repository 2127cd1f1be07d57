use crate::game::{Cell, Grid, Outcome, Player, Snapshot};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PIECE: &str = " ● ";

/// Colours and display names for the two players and empty cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub player_a: Color,
    pub player_b: Color,
    pub empty: Color,
    pub player_a_name: String,
    pub player_b_name: String,
}

impl Palette {
    pub fn color(&self, cell: Cell) -> Color {
        match cell {
            Cell::Empty => self.empty,
            Cell::PlayerA => self.player_a,
            Cell::PlayerB => self.player_b,
        }
    }

    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::A => &self.player_a_name,
            Player::B => &self.player_b_name,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            player_a: Color::Magenta,
            player_b: Color::LightRed,
            empty: Color::White,
            player_a_name: "PURPLE".into(),
            player_b_name: "ORANGE".into(),
        }
    }
}

/// Status text and the colour of the player it is about.
pub fn status_message(snapshot: &Snapshot, palette: &Palette) -> (String, Color) {
    match snapshot.outcome {
        Outcome::Tie => ("It's a Tie!!!".to_string(), Color::Reset),
        Outcome::Win(player) => (
            format!("{} Wins!", palette.name(player)),
            palette.color(player.to_cell()),
        ),
        Outcome::InProgress => (
            format!("{}'s turn", palette.name(snapshot.turn)),
            palette.color(snapshot.turn.to_cell()),
        ),
    }
}

/// A drop marker shows only while its column can still take a piece.
pub fn marker_visible(snapshot: &Snapshot, column: usize) -> bool {
    !snapshot.outcome.is_terminal() && !snapshot.grid.is_column_full(column)
}

/// The play-again control shows only once the game is decided.
pub fn play_again_visible(snapshot: &Snapshot) -> bool {
    snapshot.outcome.is_terminal()
}

pub fn render(
    frame: &mut Frame,
    snapshot: &Snapshot,
    palette: &Palette,
    selected_column: usize,
    notice: &Option<String>,
) {
    // Marker, numbers and two border lines around the rows
    let board_height = u16::try_from(snapshot.grid.dimensions().rows())
        .unwrap_or(u16::MAX)
        .saturating_add(4);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status
            Constraint::Min(board_height), // Board
            Constraint::Length(3), // Notice
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_status(frame, snapshot, palette, chunks[0]);
    render_board(frame, snapshot, palette, selected_column, chunks[1]);
    render_notice(frame, notice, chunks[2]);
    render_controls(frame, snapshot, chunks[3]);
}

fn render_status(frame: &mut Frame, snapshot: &Snapshot, palette: &Palette, area: Rect) {
    let (text, color) = status_message(snapshot, palette);

    let status = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(status, area);
}

fn render_board(
    frame: &mut Frame,
    snapshot: &Snapshot,
    palette: &Palette,
    selected_column: usize,
    area: Rect,
) {
    let grid = &snapshot.grid;
    let columns = grid.dimensions().columns();
    let mut lines = Vec::new();

    // Drop markers
    let mut marker_line = vec![Span::raw("   ")]; // Padding to match "  ║"
    for col in 0..columns {
        let span = if !marker_visible(snapshot, col) {
            Span::raw("   ")
        } else if col == selected_column {
            Span::styled(
                " ▼ ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(" ▼ ", Style::default().fg(Color::DarkGray))
        };
        marker_line.push(span);
    }
    marker_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(marker_line));

    let width = columns.saturating_mul(PIECE.chars().count()).saturating_add(1);
    lines.push(Line::from(format!("  ╔{}╗", "═".repeat(width))));
    lines.extend(board_rows(grid, palette));
    lines.push(Line::from(format!("  ╚{}╝", "═".repeat(width))));

    // Column numbers
    let mut number_line = vec![Span::raw("   ")];
    for col in 0..columns {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            number_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            number_line.push(Span::raw(label));
        }
    }
    number_line.push(Span::raw("  "));
    lines.push(Line::from(number_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

/// Grid rows top first, each cell coloured by its owner.
fn board_rows(grid: &Grid, palette: &Palette) -> Vec<Line<'static>> {
    let dims = grid.dimensions();
    (0..dims.rows())
        .rev()
        .map(|row| {
            let mut spans = vec![Span::raw("  ║")];
            for col in 0..dims.columns() {
                let cell = grid.get(col, row).unwrap_or(Cell::Empty);
                spans.push(Span::styled(PIECE, Style::default().fg(palette.color(cell))));
            }
            spans.push(Span::raw(" ║"));
            Line::from(spans)
        })
        .collect()
}

fn render_notice(frame: &mut Frame, notice: &Option<String>, area: Rect) {
    let text = notice.as_deref().unwrap_or("");
    let widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let line = if play_again_visible(snapshot) {
        Line::from(vec![
            Span::styled(
                "R: Play again",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  |  Q: Quit"),
        ])
    } else {
        Line::from("←/→: Move  |  Enter/1-9: Drop  |  R: Restart  |  Q: Quit")
    };

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Dimensions, GameEngine};

    #[test]
    fn test_status_in_progress() {
        let palette = Palette::default();
        let mut engine = GameEngine::standard();
        assert_eq!(
            status_message(&engine.snapshot(), &palette),
            ("PURPLE's turn".to_string(), Color::Magenta)
        );

        let report = engine.drop(0);
        assert_eq!(
            status_message(&report.snapshot, &palette).0,
            "ORANGE's turn"
        );
    }

    #[test]
    fn test_status_win_names_winner_not_turn() {
        let palette = Palette::default();
        let mut engine = GameEngine::standard();
        for col in [0, 1, 0, 1, 0, 1, 0] {
            engine.drop(col);
        }
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.turn, Player::B);
        assert_eq!(
            status_message(&snapshot, &palette),
            ("PURPLE Wins!".to_string(), Color::Magenta)
        );
        assert!(play_again_visible(&snapshot));
    }

    #[test]
    fn test_markers_hide_on_full_column_and_game_over() {
        let mut engine = GameEngine::standard();
        for _ in 0..6 {
            engine.drop(6);
        }
        let snapshot = engine.snapshot();
        assert!(!marker_visible(&snapshot, 6));
        assert!(marker_visible(&snapshot, 0));
        assert!(!play_again_visible(&snapshot));

        for col in [0, 1, 0, 1, 0, 1, 0] {
            engine.drop(col);
        }
        let snapshot = engine.snapshot();
        assert!((0..7).all(|col| !marker_visible(&snapshot, col)));
    }

    #[test]
    fn test_render_largest_board() {
        use ratatui::{backend::TestBackend, Terminal};

        let side = Dimensions::MAX_SIDE;
        let mut engine = GameEngine::new(Dimensions::new(side, side).unwrap());
        engine.drop(0);
        let palette = Palette::default();

        for (w, h) in [(60, 24), (250, 80)] {
            let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
            terminal
                .draw(|f| render(f, &engine.snapshot(), &palette, side - 1, &None))
                .unwrap();
        }
    }

    #[test]
    fn test_board_rows_put_bottom_row_last() {
        let palette = Palette::default();
        let mut engine = GameEngine::standard();
        engine.drop(0);
        let lines = board_rows(engine.grid(), &palette);

        assert_eq!(lines.len(), 6);
        let bottom = &lines[5].spans[1];
        assert_eq!(bottom.style.fg, Some(Color::Magenta));
        let top = &lines[0].spans[1];
        assert_eq!(top.style.fg, Some(Color::White));
    }
}
