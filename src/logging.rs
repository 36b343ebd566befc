use simplelog::*;
use std::fs::{self, File, OpenOptions};
use std::io::{Error, ErrorKind};
use std::path::PathBuf;
use std::sync::Once;

static INIT: Once = Once::new();

/// `$HOME/.local/share/keyseq2midi/logs`
fn log_dir() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("keyseq2midi")
            .join("logs"),
    )
}

fn open_log_file() -> Result<File, Error> {
    let log_dir = log_dir()
        .ok_or_else(|| Error::new(ErrorKind::NotFound, "HOME environment variable not set"))?;

    fs::create_dir_all(&log_dir)?;

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("app.log"))
}

/// Install the terminal logger and, when the log directory is usable, the
/// file logger. Only the first call has any effect.
pub fn init_logger(verbose: bool) -> Result<(), Error> {
    let term_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut result = Ok(());

    INIT.call_once(|| {
        let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
            term_level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )];

        match open_log_file() {
            Ok(log_file) => loggers.push(WriteLogger::new(
                LevelFilter::Debug,
                Config::default(),
                log_file,
            )),
            Err(e) => eprintln!("File logging disabled: {}", e),
        }

        result = CombinedLogger::init(loggers).map_err(|e| Error::new(ErrorKind::Other, e));
    });

    result
}
