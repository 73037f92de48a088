mod app;
mod browser;
mod help;
mod jumpto;
mod plan;
mod theme;
mod viewer;
use crate::app::App;
use crate::browser::WebBrowser;
use crate::plan::{day_of_year, DailyPlan, Day};
use crate::viewer::PlanCursor;
use anyhow::Context;
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::io::{self, Write};
use std::path::PathBuf;
use time::{format_description::FormatItem, macros::format_description, Date, OffsetDateTime};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        start: Option<Day>,
        print: bool,
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut start = None;
        let mut print = false;
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('p') | Arg::Long("print") => print = true,
                Arg::Short('d') | Arg::Long("day") if start.is_none() => {
                    // Out-of-range days are clamped, not rejected
                    let n = parser.value()?.parse::<i64>()?;
                    start = Some(Day::clamped(n));
                }
                Arg::Long("log-file") => log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Value(value) if start.is_none() => {
                    let value = value.string()?;
                    match Date::parse(&value, &YMD_FMT) {
                        Ok(d) => start = Some(day_of_year(d)),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run {
            start,
            print,
            log_file,
        })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run {
                start,
                print,
                log_file,
            } => {
                let _logger = log_file.map(init_logging).transpose()?;
                if print {
                    let day = match start {
                        Some(day) => day,
                        None => today()?,
                    };
                    return write_plan(&mut io::stdout().lock(), day)
                        .context("failed to print reading plan");
                }
                let today = today()?;
                let cursor = PlanCursor::new(today).start_day(start.unwrap_or(today));
                log::info!("starting viewer at day {}", cursor.day());
                with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    App::new(cursor, WebBrowser)
                        .run(terminal)
                        .context("failed to run viewer")
                })
            }
            Command::Help => {
                println!("Usage: readplan [options] [YYYY-MM-DD]");
                println!();
                println!("Terminal viewer for a one-year scripture reading plan");
                println!();
                println!("Options:");
                println!("  -d, --day <N>       Start at day N of the plan (clamped to 1-365)");
                println!("  -p, --print         Print the day's readings instead of browsing");
                println!("      --log-file <PATH>");
                println!("                      Write log messages to the given file");
                println!("  -h, --help          Display this help message and exit");
                println!("  -V, --version       Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn today() -> anyhow::Result<Day> {
    let today = OffsetDateTime::now_local()
        .context("failed to determine local date")?
        .date();
    Ok(day_of_year(today))
}

fn write_plan<W: Write>(out: &mut W, day: Day) -> io::Result<()> {
    write!(out, "{}", DailyPlan::from(day))?;
    out.flush()
}

// Log records go only to a file so that they never land on the terminal the
// viewer is drawing on.  `RUST_LOG` overrides the default level.
fn init_logging(path: PathBuf) -> anyhow::Result<LoggerHandle> {
    let file_spec = FileSpec::try_from(&path)
        .with_context(|| format!("invalid log file path {}", path.display()))?;
    Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)
        .context("invalid log specification")?
        .log_to_file(file_spec)
        .start()
        .context("failed to start logger")
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
