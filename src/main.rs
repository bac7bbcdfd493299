use std::env;
use std::error::Error;
use std::fmt;
use std::io::{self, IsTerminal, Write};

use dynarray::DynamicArray;
use log::{LevelFilter, ParseLevelError, info, warn};

/// Environment variable holding the log level (`off`, `error`, `warn`, `info`, `debug`, `trace`).
const LOG_LEVEL_VAR: &str = "DYNARRAY_LOG";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

struct Person {
    first_name: String,
    last_name: String,
}

impl Person {
    fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{} {}'", self.first_name, self.last_name)
    }
}

fn parse_log_level(raw: Option<&str>) -> Result<LevelFilter, ParseLevelError> {
    match raw {
        None => Ok(DEFAULT_LOG_LEVEL),
        Some(s) => s.trim().parse(),
    }
}

fn initialize_logging(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    use simplelog::*;
    // stdout belongs to the demo output, so everything goes to stderr
    let loggers: Vec<Box<dyn SharedLogger>> = vec![
        TermLogger::new(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto),
    ];
    CombinedLogger::init(loggers)
}

/// Writes the `Length` and `Empty` lines for `array`.
fn report<T, W: Write>(out: &mut W, array: &DynamicArray<T>) -> io::Result<()> {
    // booleans are printed capitalized, like the rest of the demo's output expects
    let empty = if array.is_empty() { "True" } else { "False" };
    writeln!(out, "Length : {} Item", array.count())?;
    writeln!(out, "Empty  : {empty} ")
}

fn run<W: Write>(out: &mut W) -> io::Result<()> {
    let mut nums = DynamicArray::new();
    for i in 1..=5 {
        nums.add(i);
    }
    nums.write_line(out)?;
    report(out, &nums)?;
    nums.remove_at(2);
    nums.write_line(out)?;

    let mut persons = DynamicArray::new();
    persons.add(Person::new("Mahmoud", "Hany"));
    persons.add(Person::new("Mohamed", "Hany"));
    persons.add(Person::new("Attia", "Hany"));
    report(out, &persons)?;
    persons.write_line(out)?;

    Ok(())
}

/// Waits for Enter, but only when someone is actually sitting at the terminal.
fn pause() -> io::Result<()> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        let mut line = String::new();
        stdin.read_line(&mut line)?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let raw_level = env::var(LOG_LEVEL_VAR).ok();
    let parsed = parse_log_level(raw_level.as_deref());
    initialize_logging(*parsed.as_ref().unwrap_or(&DEFAULT_LOG_LEVEL))?;
    if let Err(e) = &parsed {
        warn!("Bad {LOG_LEVEL_VAR} value {raw_level:?} ({e}), falling back to {DEFAULT_LOG_LEVEL}");
    }

    info!("Starting dynamic array demo");
    let stdout = io::stdout();
    run(&mut stdout.lock())?;
    pause()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[1,2,3,4,5]\n\
             Length : 5 Item\n\
             Empty  : False \n\
             [1,2,4,5]\n\
             Length : 3 Item\n\
             Empty  : False \n\
             ['Mahmoud Hany','Mohamed Hany','Attia Hany']\n"
        );
    }

    #[test]
    fn test_report_empty() {
        let mut out = Vec::new();
        report(&mut out, &DynamicArray::<Person>::new()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Length : 0 Item\nEmpty  : True \n");
    }

    #[test]
    fn test_person_display() {
        assert_eq!(Person::new("Attia", "Hany").to_string(), "'Attia Hany'");
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level(None).unwrap(), LevelFilter::Warn);
        assert_eq!(parse_log_level(Some("TRACE")).unwrap(), LevelFilter::Trace);
        assert_eq!(parse_log_level(Some(" off ")).unwrap(), LevelFilter::Off);
        assert!(parse_log_level(Some("loud")).is_err());
    }
}
