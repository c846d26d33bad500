use crossterm::{
    cursor::{Hide, MoveTo, Show},
    style::Print,
    ExecutableCommand,
};

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::search_algorithms::{DistanceMatrix, SearchStats, Tour};
use colored::{ColoredString, Colorize};

const LABEL_WIDTH: usize = 5;
const CELL_WIDTH: usize = 5;
// title and column header sit above the first matrix row
const HEADER_LINES: usize = 2;

/// Terminal rendering of a distance matrix and the tours found on it.
pub struct TourView<'a> {
    pub title: String,
    pub matrix: &'a DistanceMatrix,
    pub step_delay: Duration,
}

impl<'a> TourView<'a> {
    pub fn new(title: &str, matrix: &'a DistanceMatrix, step_delay: Duration) -> Self {
        Self {
            title: title.to_string(),
            matrix,
            step_delay,
        }
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn clear_screen() {
        print!("\x1B[2J"); // Clears the entire screen
    }

    pub fn reset_cursor() {
        print!("\x1B[H"); // Moves the cursor to the top-left corner
    }

    /// The matrix as text, one row per city, cells coloured by cost.
    pub fn render(&self) -> String {
        let size = self.matrix.size();
        let max_cost = self.matrix.max_cost();
        let mut buffer = String::new();

        buffer.push_str(&format!("{}\n", self.title));
        buffer.push_str(&" ".repeat(LABEL_WIDTH));
        for city in 0..size {
            buffer.push_str(&format!("{:>width$}", city, width = CELL_WIDTH));
        }
        buffer.push('\n');

        for from in 0..size {
            buffer.push_str(&format!("{:>3} |", from));
            for to in 0..size {
                let cost = self.matrix.edge(from, to);
                let text = format!("{:>width$}", cost, width = CELL_WIDTH);
                let cell = if from == to {
                    text.bright_black()
                } else {
                    Self::cost_to_color(&text, cost, max_cost)
                };
                buffer += &format!("{}", cell);
            }
            buffer.push('\n');
        }
        buffer
    }

    pub fn display(&self) {
        let mut buffer = String::new();
        // Hide the cursor to avoid flickering
        buffer.push_str("\x1B[?25l");
        // Move cursor to the top-left and clear below it
        buffer.push_str("\x1B[H");
        buffer.push_str("\x1B[J");
        buffer.push_str(&self.render());
        // Show the cursor again
        buffer.push_str("\x1B[?25h");
        print!("{}", buffer);
    }

    /// Redraws the matrix and then highlights each leg of `tour` in turn.
    pub fn display_tour(&self, tour: &Tour) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.execute(Hide)?;

        self.display();

        for (from, to) in tour.legs() {
            let (x, y) = Self::cell_position(from, to);
            stdout.execute(MoveTo(x, y))?;

            let text = format!("{:>width$}", self.matrix.edge(from, to), width = CELL_WIDTH);
            stdout.execute(Print(text.black().on_bright_green()))?;
            stdout.flush()?;

            thread::sleep(self.step_delay);
        }

        // Move the cursor below the last row of the grid
        let below = (HEADER_LINES + self.matrix.size()) as u16;
        stdout.execute(MoveTo(0, below))?;
        stdout.execute(Show)?;
        stdout.flush()
    }

    /// Terminal column and row of the `(from, to)` cell drawn by `render`.
    pub fn cell_position(from: usize, to: usize) -> (u16, u16) {
        let x = LABEL_WIDTH + to * CELL_WIDTH;
        let y = HEADER_LINES + from;
        (x as u16, y as u16)
    }

    /// One line per strategy: `"<label> Path: <tour> with cost <cost>"`.
    pub fn summary(label: &str, tour: &Tour, cost: u64) -> String {
        format!(
            "{} Path: {} with cost {}",
            label.bold(),
            tour,
            cost.to_string().green()
        )
    }

    pub fn stats_line(stats: &SearchStats) -> ColoredString {
        format!(
            "  expanded {} nodes, generated {}, peak frontier {}",
            stats.expanded, stats.generated, stats.max_frontier
        )
        .bright_black()
    }

    // Green for cheap edges, red for the most expensive one.
    fn cost_to_color(text: &str, cost: u32, max_cost: u32) -> ColoredString {
        let ratio = if max_cost == 0 {
            0
        } else {
            (255 * u64::from(cost) / u64::from(max_cost)).min(255) as u8
        };
        text.truecolor(ratio, 255 - ratio, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn renders_title_header_and_rows() {
        plain();
        let matrix = DistanceMatrix::demo();
        let view = TourView::new("Uniform Cost Search", &matrix, Duration::ZERO);
        let lines: Vec<String> = view.render().lines().map(str::to_string).collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Uniform Cost Search");
        assert_eq!(lines[1], "         0    1    2    3");
        assert_eq!(lines[2], "  0 |    0   29   20   21");
        assert_eq!(lines[5], "  3 |   21   17   28    0");
    }

    #[test]
    fn cell_positions_line_up_with_render() {
        plain();
        let matrix = DistanceMatrix::demo();
        let view = TourView::new("t", &matrix, Duration::ZERO);
        let rendered = view.render();
        let lines: Vec<&str> = rendered.lines().collect();

        let (x, y) = TourView::cell_position(1, 3);
        let line = lines[y as usize];
        let cell = &line[x as usize..x as usize + CELL_WIDTH];
        assert_eq!(cell.trim(), "17");
    }

    #[test]
    fn summary_matches_the_classic_output() {
        plain();
        let matrix = DistanceMatrix::demo();
        let tour = crate::search_algorithms::solve_ucs(&matrix, 0)
            .unwrap()
            .unwrap();
        let line = TourView::summary("UCS", &tour, 73);
        assert!(line.starts_with("UCS Path: 0 -> "));
        assert!(line.ends_with(" -> 0 with cost 73"));
    }
}
