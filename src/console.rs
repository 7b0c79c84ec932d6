use crossterm::{cursor, execute, queue, terminal};
use lifeboard::Board;
use std::io::{self, Write};

/// Redraws each generation in place instead of streaming digits
pub struct ConsoleRender;
impl ConsoleRender {
    pub fn new() -> io::Result<Self> {
        execute!(io::stdout(), cursor::Hide)?;
        Ok(Self)
    }

    pub fn render(&self, board: &Board, generation: usize) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let mut stdout = io::stdout().lock();
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;

        // the bottom terminal row is reserved for the footer
        let visible_rows = usize::from(rows.saturating_sub(1));
        for (y, row) in board.rows().iter().take(visible_rows).enumerate() {
            let line: String = row
                .iter()
                .take(usize::from(cols))
                .map(|cell| if cell.is_alive() { '█' } else { ' ' })
                .collect();
            queue!(stdout, cursor::MoveTo(0, y as u16))?;
            stdout.write_all(line.as_bytes())?;
        }

        // write footer
        queue!(stdout, cursor::MoveTo(0, rows.saturating_sub(1)))?;
        write!(
            stdout,
            "generation {} alive {}",
            generation,
            board.alive_count()
        )?;

        stdout.flush()
    }
}
impl Drop for ConsoleRender {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, cursor::Show, cursor::MoveToNextLine(1)) {
            log::warn!("failed to restore the terminal: {err}");
        }
    }
}
