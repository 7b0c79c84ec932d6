use anyhow::{Context, Result, anyhow};
use lifeboard::{Board, BoardCodec, PlainDigits, RunLengthEncoded};
use std::{fs, path::Path, time::Duration};

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>> {
        let mut opts = getopts::Options::new();
        opts.optflag("h", "help", "print this help menu");
        opts.optflag("c", "console", "redraw each generation in place");
        opts.optopt("i", "input", "read the initial board (.rle or digit rows)", "FILE");
        opts.optopt(
            "s",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );
        opts.optopt("g", "gens", "max number of generations", "COUNT");
        opts.optopt("l", "log", "log specification, e.g. info or lifeboard=trace", "SPEC");

        let matches = opts
            .parse(args.iter().map(T::as_ref))
            .context("invalid arguments")?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: lifeboard [options]"));
            Ok(None)
        } else {
            Ok(Some(Self { matches }))
        }
    }
    pub fn from_env() -> Result<Option<Self>> {
        let env = std::env::args().skip(1).collect::<Vec<_>>();
        Self::new(&env)
    }

    fn get<T: std::str::FromStr>(&self, name: &str) -> Result<Option<T>> {
        self.matches
            .opt_get(name)
            .map_err(|_| anyhow!("invalid value for --{name}"))
    }

    pub fn console(&self) -> bool {
        self.matches.opt_present("console")
    }

    pub fn generations(&self) -> Result<Option<usize>> {
        self.get("gens")
    }
    pub fn sleep(&self) -> Result<Option<Duration>> {
        Ok(match self.get("sleep")? {
            Some(millis) => Some(Duration::from_millis(millis)),
            None if self.console() => Some(Duration::from_millis(100)),
            None => None,
        })
    }

    pub fn log_spec(&self) -> Option<String> {
        self.matches.opt_str("log")
    }

    pub fn input_file(&self) -> Option<String> {
        self.matches.opt_str("input")
    }

    /// The board to start from: the `--input` file if given, the built-in board otherwise
    pub fn initial_board(&self) -> Result<Board> {
        match self.input_file() {
            Some(file_name) => load_board(Path::new(&file_name)),
            None => Ok(Board::initial()),
        }
    }
}

fn load_board(path: &Path) -> Result<Board> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    decode_board(path, &text)
}

/// Decodes `text` as RLE when `path` ends in `.rle`, as digit rows otherwise
fn decode_board(path: &Path, text: &str) -> Result<Board> {
    let is_rle = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("rle"));
    let board = if is_rle {
        RunLengthEncoded::default().decode(text)
    } else {
        PlainDigits.decode(text)
    };
    board.with_context(|| format!("failed to load a board from {}", path.display()))
}
