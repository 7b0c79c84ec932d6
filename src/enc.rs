use crate::{
    board::{Board, Cell, ParseBoardError},
    pos::Pos2,
};
use regex::Regex;
use std::{fmt, sync::LazyLock};

/// Largest row or column count a decoded pattern may have
pub const MAX_PATTERN_SIDE: usize = 1 << 14;

static RLE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^x\s*=\s*(\d+)\s*,\s*y\s*=\s*(\d+)").expect("valid header regex")
});
static RLE_BODY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d*[bo$!]|\s)*$").expect("valid body regex"));
static RLE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d*)([bo$!])").expect("valid token regex"));

pub trait BoardCodec {
    fn encode(self, board: &Board) -> String;
    fn decode(self, value: &str) -> Result<Board, DecodeError>;
}

#[derive(Debug)]
pub enum DecodeError {
    Digits(ParseBoardError),
    Header(String),
    Token { line: usize, text: String },
    TooLarge(usize),
    Empty,
}
impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digits(err) => write!(f, "invalid digit board: {err}"),
            Self::Header(line) => write!(f, "malformed pattern header {line:?}"),
            Self::Token { line, text } => write!(f, "unrecognized pattern data on line {line}: {text:?}"),
            Self::TooLarge(side) => write!(
                f,
                "pattern extends to {side} cells, more than the {MAX_PATTERN_SIDE} allowed"
            ),
            Self::Empty => write!(f, "pattern has no cells"),
        }
    }
}
impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Digits(err) => Some(err),
            _ => None,
        }
    }
}

/// Rows of `0`/`1` digits, the same text the simulation prints
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainDigits;

impl BoardCodec for PlainDigits {
    fn encode(self, board: &Board) -> String {
        board.to_string()
    }

    fn decode(self, value: &str) -> Result<Board, DecodeError> {
        value.parse().map_err(DecodeError::Digits)
    }
}

struct RunEncoder {
    sequence: String,
    line_len: usize,
    max_line_len: usize,
}
impl RunEncoder {
    fn new(max_line_len: usize) -> Self {
        Self {
            sequence: String::new(),
            line_len: 0,
            max_line_len,
        }
    }

    fn push_run(&mut self, run: i32, c: char) {
        let append = match run {
            0 => String::new(),
            1 => c.to_string(),
            n => format!("{}{}", n, c),
        };
        if self.line_len + append.len() > self.max_line_len {
            self.sequence.push('\n');
            self.line_len = 0;
        }
        self.line_len += append.len();
        self.sequence.push_str(&append);
    }

    pub fn end(mut self) -> String {
        self.sequence.push('!');
        self.sequence
    }
}

/// The Life RLE pattern format
pub struct RunLengthEncoded {
    name: Option<String>,
    header: bool,
}
impl RunLengthEncoded {
    pub fn set_name<T: AsRef<str>>(mut self, name: T) -> Self {
        self.name = Some(name.as_ref().to_owned());
        self
    }
    pub fn without_header(mut self) -> Self {
        self.header = false;
        self
    }

    fn encode_header(&self, board: &Board) -> String {
        let mut header = String::new();
        if !self.header {
            return header;
        }
        if let Some(name) = &self.name {
            header.push_str(&format!("#N {}\n", name));
        }
        let (rows, cols) = board.dimensions();
        header.push_str(&format!("x = {}, y = {}, rule = B3/S23\n", cols, rows));
        header
    }
    fn encode_cells(&self, board: &Board) -> String {
        // runs are measured from the board origin so empty leading rows and columns survive
        let mut last = Pos2 { x: -1, y: 0 };
        let mut alive_run = 0;
        let mut seq = RunEncoder::new(70);
        for pos in board.alive_positions() {
            // if we're one ahead of the last, then only increment the run
            if last.y == pos.y && (last.x + 1) == pos.x {
                alive_run += 1;
                last = pos;
                continue;
            }

            let lines_run = pos.y - last.y;
            let dead_run = match lines_run {
                0 => pos.x - last.x - 1,
                _ => pos.x,
            };
            // NOTE: order matters!
            seq.push_run(alive_run, 'o');
            seq.push_run(lines_run, '$');
            seq.push_run(dead_run, 'b');

            alive_run = 1;
            last = pos;
        }

        seq.push_run(alive_run, 'o');
        seq.end()
    }

    fn parse_header(line: &str) -> Result<(usize, usize), DecodeError> {
        let malformed = || DecodeError::Header(line.to_owned());
        let caps = RLE_HEADER.captures(line).ok_or_else(malformed)?;
        let cols: usize = caps[1].parse().map_err(|_| malformed())?;
        let rows: usize = caps[2].parse().map_err(|_| malformed())?;
        if cols > MAX_PATTERN_SIDE || rows > MAX_PATTERN_SIDE {
            return Err(DecodeError::TooLarge(cols.max(rows)));
        }
        Ok((cols, rows))
    }

    /// Moves a cursor coordinate `run` cells along, staying within [`MAX_PATTERN_SIDE`]
    fn advance(from: i32, run: i32, line: usize, text: &str) -> Result<i32, DecodeError> {
        let to = from.checked_add(run).ok_or_else(|| DecodeError::Token {
            line,
            text: text.to_owned(),
        })?;
        match usize::try_from(to) {
            Ok(side) if side <= MAX_PATTERN_SIDE => Ok(to),
            Ok(side) => Err(DecodeError::TooLarge(side)),
            Err(_) => Err(DecodeError::Token {
                line,
                text: text.to_owned(),
            }),
        }
    }

    fn build(size: Option<(usize, usize)>, alive: Vec<Pos2>) -> Result<Board, DecodeError> {
        let (mut cols, mut rows) = size.unwrap_or_default();
        for pos in &alive {
            let (row, col) = pos.to_row_col().ok_or(DecodeError::Empty)?;
            cols = cols.max(col + 1);
            rows = rows.max(row + 1);
        }
        if rows == 0 || cols == 0 {
            return Err(DecodeError::Empty);
        }
        if rows > MAX_PATTERN_SIDE || cols > MAX_PATTERN_SIDE {
            return Err(DecodeError::TooLarge(rows.max(cols)));
        }

        let mut cells = vec![vec![Cell::Dead; cols]; rows];
        for (row, col) in alive.into_iter().filter_map(Pos2::to_row_col) {
            cells[row][col] = Cell::Alive;
        }
        Ok(Board::from_rows(cells))
    }
}
impl Default for RunLengthEncoded {
    fn default() -> Self {
        Self {
            name: None,
            header: true,
        }
    }
}

impl BoardCodec for RunLengthEncoded {
    fn encode(self, board: &Board) -> String {
        format!("{}{}\n", self.encode_header(board), self.encode_cells(board))
    }

    fn decode(self, value: &str) -> Result<Board, DecodeError> {
        let mut size = None;
        let mut alive = Vec::new();
        let mut cursor = Pos2::zero();
        'lines_loop: for (i, line) in value.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if line.starts_with('x') {
                size = Some(Self::parse_header(line)?);
                continue;
            }

            // anything after the terminator is free-form
            let body = match line.find('!') {
                Some(end) => &line[..=end],
                None => line,
            };
            if !RLE_BODY.is_match(body) {
                return Err(DecodeError::Token {
                    line: i + 1,
                    text: line.to_owned(),
                });
            }

            for (_, [run_str, state]) in RLE_TOKEN.captures_iter(body).map(|c| c.extract()) {
                let run = match run_str {
                    "" => 1,
                    digits => digits.parse::<i32>().map_err(|_| DecodeError::Token {
                        line: i + 1,
                        text: line.to_owned(),
                    })?,
                };
                match state {
                    "!" => break 'lines_loop,
                    "o" => {
                        let end = Self::advance(cursor.x, run, i + 1, line)?;
                        alive.extend((cursor.x..end).map(|x| Pos2 { x, y: cursor.y }));
                        cursor.x = end;
                    }
                    "b" => cursor.x = Self::advance(cursor.x, run, i + 1, line)?,
                    "$" => {
                        cursor.x = 0;
                        cursor.y = Self::advance(cursor.y, run, i + 1, line)?;
                    }
                    _ => unreachable!(),
                }
            }
        }

        log::debug!("decoded pattern with {} alive cells", alive.len());
        Self::build(size, alive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glider() -> Board {
        "010\n001\n111".parse().expect("glider")
    }

    #[test]
    fn encodes_glider() {
        let encoded = RunLengthEncoded::default().set_name("glider").encode(&glider());

        assert_eq!(encoded, "#N glider\nx = 3, y = 3, rule = B3/S23\nbo$2bo$3o!\n");
    }

    #[test]
    fn encodes_leading_blank_rows() {
        let board = Board::from_digits(&[[0, 0, 0], [0, 0, 1]]);
        let encoded = RunLengthEncoded::default().without_header().encode(&board);

        assert_eq!(encoded, "$2bo!\n");
    }

    #[test]
    fn decodes_glider_with_comments() {
        let text = "#N glider\n#C a comment\nx = 3, y = 3, rule = B3/S23\nbo$2bo$3o!\n";

        let board = RunLengthEncoded::default().decode(text).expect("decodes");
        assert_eq!(board, glider());
    }

    #[test]
    fn header_size_pads_the_board() {
        let board = RunLengthEncoded::default()
            .decode("x = 5, y = 4\nbo!")
            .expect("decodes");

        assert_eq!(board.dimensions(), (4, 5));
        assert_eq!(board.alive_positions().collect::<Vec<_>>(), vec![Pos2::new(0, 1)]);
    }

    #[test]
    fn decode_without_header_uses_extent() {
        let board = RunLengthEncoded::default().decode("2o$\nb2o!").expect("decodes");

        assert_eq!(board.to_string(), "110\n011\n");
    }

    #[test]
    fn rejects_unknown_tokens() {
        let err = RunLengthEncoded::default()
            .decode("x = 3, y = 3\nbo$2bz!")
            .unwrap_err();

        assert!(matches!(err, DecodeError::Token { line: 2, .. }));
    }

    #[test]
    fn huge_runs_are_errors() {
        let decoder = RunLengthEncoded::default;

        let wide = decoder().decode("2147483647bo!").unwrap_err();
        assert!(matches!(wide, DecodeError::TooLarge(2147483647)));
        let tall = decoder().decode("2147483647$2147483647$o!").unwrap_err();
        assert!(matches!(tall, DecodeError::TooLarge(_)));
        let long_alive = decoder().decode("99999999o!").unwrap_err();
        assert!(matches!(long_alive, DecodeError::TooLarge(99999999)));
    }

    #[test]
    fn run_overflow_is_a_token_error() {
        let err = RunLengthEncoded::default()
            .decode("x = 3, y = 3\n16384b2147483647bo!")
            .unwrap_err();

        assert!(matches!(err, DecodeError::Token { line: 2, .. }));
    }

    #[test]
    fn oversized_header_is_rejected() {
        let err = RunLengthEncoded::default()
            .decode("x = 100000000, y = 100000000\no!")
            .unwrap_err();

        assert!(matches!(err, DecodeError::TooLarge(100000000)));
    }

    #[test]
    fn pattern_at_the_size_limit_decodes() {
        let text = format!("{}bo!", MAX_PATTERN_SIDE - 1);
        let board = RunLengthEncoded::default().decode(&text).expect("decodes");

        assert_eq!(board.dimensions(), (1, MAX_PATTERN_SIDE));
    }

    #[test]
    fn rejects_empty_pattern() {
        let err = RunLengthEncoded::default().decode("#C nothing\n!").unwrap_err();

        assert!(matches!(err, DecodeError::Empty));
    }

    #[test]
    fn rejects_bad_header() {
        let err = RunLengthEncoded::default().decode("x = ?, y = 3\no!").unwrap_err();

        assert!(matches!(err, DecodeError::Header(_)));
    }

    #[test]
    fn plain_digits_wraps_parse_errors() {
        let err = PlainDigits.decode("012").unwrap_err();

        assert!(matches!(err, DecodeError::Digits(ParseBoardError::InvalidCell { column: 3, .. })));
        assert_eq!(PlainDigits.encode(&glider()), "010\n001\n111\n");
    }
}
