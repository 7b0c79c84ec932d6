use crate::Board;
use std::io::{self, Write};

/// Writes `board` as rows of digits followed by a blank line
///
/// A missing board writes nothing.
pub fn write_board<W: Write>(out: &mut W, board: Option<&Board>) -> io::Result<()> {
    let Some(board) = board else {
        return Ok(());
    };
    writeln!(out, "{board}")
}

/// [`write_board`] to standard output
pub fn print_board(board: Option<&Board>) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_board(&mut stdout, board)?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_ends_with_blank_line() {
        let board = Board::from_digits(&[[1, 0, 1], [0, 1, 0]]);
        let mut out = Vec::new();

        write_board(&mut out, Some(&board)).unwrap();
        assert_eq!(out, b"101\n010\n\n");
    }

    #[test]
    fn missing_board_writes_nothing() {
        let mut out = Vec::new();

        write_board(&mut out, None).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn consecutive_boards_are_separated() {
        let mut out = Vec::new();
        write_board(&mut out, Some(&Board::from_digits(&[[1]]))).unwrap();
        write_board(&mut out, Some(&Board::dead(1, 1))).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "1\n\n0\n\n");
    }
}
