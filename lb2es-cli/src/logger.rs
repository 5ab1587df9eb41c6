//! Log output for the CLI: `env_logger` with a compact format, optionally
//! tee'd to a file with ANSI codes stripped.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

/// Writes log lines to stderr and, if configured, to a plain-text file.
struct TeeWriter {
    file: Option<File>,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        if let Some(ref mut file) = self.file {
            file.write_all(&strip_ansi_escapes::strip(buf))?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        if let Some(ref mut file) = self.file {
            file.flush()?;
        }
        Ok(())
    }
}

fn level_filter(verbose: bool, quiet: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

/// Install the global logger. `RUST_LOG` overrides the flag-derived level.
pub(crate) fn init(verbose: bool, quiet: bool, logfile: Option<&Path>) -> io::Result<()> {
    let file = logfile.map(File::create).transpose()?;

    env_logger::Builder::new()
        .filter_level(level_filter(verbose, quiet))
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(TeeWriter { file })))
        .format(move |buf, record| {
            let prefix = match record.level() {
                Level::Error => format!("{} ", "error:".if_supports_color(Stderr, |t| t.red())),
                Level::Warn => format!("{} ", "warning:".if_supports_color(Stderr, |t| t.yellow())),
                Level::Info => String::new(),
                Level::Debug | Level::Trace => {
                    format!("{} ", "debug:".if_supports_color(Stderr, |t| t.dimmed()))
                }
            };
            if verbose {
                writeln!(
                    buf,
                    "{} {}{}",
                    chrono::Local::now().format("%H:%M:%S%.3f"),
                    prefix,
                    record.args()
                )
            } else {
                writeln!(buf, "{}{}", prefix, record.args())
            }
        })
        .init();

    Ok(())
}

/// Log an empty line at info level.
pub(crate) fn log_blank() {
    log::info!("");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter(false, false), LevelFilter::Info);
        assert_eq!(level_filter(false, true), LevelFilter::Warn);
        assert_eq!(level_filter(true, false), LevelFilter::Debug);
        assert_eq!(level_filter(true, true), LevelFilter::Debug);
    }

    #[test]
    fn test_tee_strips_ansi_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        let mut tee = TeeWriter {
            file: Some(File::create(&path).unwrap()),
        };
        tee.write_all(b"\x1b[31merror:\x1b[0m boom\n").unwrap();
        tee.flush().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "error: boom\n");
    }
}
