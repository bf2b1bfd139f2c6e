//! ANSI board rendering.

use std::io::{self, Write};

use crate::board::{HexBoard, PLAYER_ONE, PLAYER_TWO};

const RESET: &str = "\x1b[0m";
const BLUE: &str = "\x1b[34m";
const RED: &str = "\x1b[31m";
const GRAY: &str = "\x1b[90m";

impl HexBoard {
    /// Write the colored ASCII board: blue column header, red row labels,
    /// odd rows indented to suggest the hex skew.
    pub fn render(&self, w: &mut impl Write) -> io::Result<()> {
        write!(w, "\n   ")?;
        for c in 0..self.cols() {
            write!(w, "{BLUE}{c:>3} {RESET}")?;
        }
        writeln!(w)?;

        for r in 0..self.rows() {
            if r % 2 != 0 {
                write!(w, "  ")?;
            }
            write!(w, "{RED}{r:>2} {RESET}")?;
            for c in 0..self.cols() {
                match self.cell_by_index(self.index(r, c)) {
                    PLAYER_ONE => write!(w, "{RED} X  {RESET}")?,
                    PLAYER_TWO => write!(w, "{BLUE} O  {RESET}")?,
                    _ => write!(w, "{GRAY} .  {RESET}")?,
                }
            }
            writeln!(w)?;
        }

        Ok(())
    }

    /// Render to stdout, ignoring write errors (demo convenience).
    pub fn print_board(&self) {
        let stdout = io::stdout();
        let _ = self.render(&mut stdout.lock());
    }
}
