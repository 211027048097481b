use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing::Level;
use ui::{App, UiApp, build_app_context};

const DEFAULT_TITLE: &str = "NeuraMate";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
    InvalidLogLevel { raw: String },
    EmptyTitle,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidLogLevel { raw } => write!(f, "invalid --log-level value: {raw}"),
            ArgsError::EmptyTitle => write!(f, "--title cannot be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    title: String,
    seed: Option<u64>,
}

impl UiApp for DesktopApp {
    fn app_name(&self) -> String {
        self.title.clone()
    }

    fn rng_seed(&self) -> Option<u64> {
        self.seed
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    seed: Option<u64>,
    title: String,
    log_level: Level,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Launch(Args),
    Help,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--seed <u64>] [--title <text>] [--log-level <level>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --seed       random (OS entropy)");
    eprintln!("  --title      {DEFAULT_TITLE}");
    eprintln!("  --log-level  info");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  NEURAMATE_SEED, NEURAMATE_TITLE, NEURAMATE_LOG");
}

fn parse_seed(raw: String) -> Result<u64, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidSeed { raw })
}

fn parse_level(raw: String) -> Result<Level, ArgsError> {
    Level::from_str(raw.trim()).map_err(|_| ArgsError::InvalidLogLevel { raw })
}

fn parse_title(raw: String) -> Result<String, ArgsError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ArgsError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}

impl Args {
    /// Flags win over environment variables, which win over defaults.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Command, ArgsError> {
        let mut seed = env("NEURAMATE_SEED").map(parse_seed).transpose()?;
        let mut title = env("NEURAMATE_TITLE")
            .map(parse_title)
            .transpose()?
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let mut log_level = env("NEURAMATE_LOG")
            .map(parse_level)
            .transpose()?
            .unwrap_or(Level::INFO);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => seed = Some(parse_seed(require_value(args, "--seed")?)?),
                "--title" => title = parse_title(require_value(args, "--title")?)?,
                "--log-level" => log_level = parse_level(require_value(args, "--log-level")?)?,
                "--help" | "-h" => return Ok(Command::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Command::Launch(Self {
            seed,
            title,
            log_level,
        }))
    }
}

fn run() -> Result<(), ArgsError> {
    let mut argv = std::env::args().skip(1);
    let parsed = match Args::parse(&mut argv, |key| std::env::var(key).ok()) {
        Ok(Command::Launch(parsed)) => parsed,
        Ok(Command::Help) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            print_usage();
            return Err(err);
        }
    };

    let _ = dioxus::logger::init(parsed.log_level);
    tracing::info!(seed = ?parsed.seed, title = %parsed.title, "starting");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        title: parsed.title.clone(),
        seed: parsed.seed,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(parsed.title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str], env: &[(&str, &str)]) -> Result<Command, ArgsError> {
        let mut iter = args.iter().map(|arg| (*arg).to_string());
        Args::parse(&mut iter, |key| {
            env.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value).to_string())
        })
    }

    #[test]
    fn defaults_apply_without_flags_or_env() {
        let command = parse(&[], &[]).unwrap();
        assert_eq!(
            command,
            Command::Launch(Args {
                seed: None,
                title: "NeuraMate".to_string(),
                log_level: Level::INFO,
            })
        );
    }

    #[test]
    fn flags_override_environment() {
        let command = parse(
            &["--seed", "9", "--log-level", "debug"],
            &[("NEURAMATE_SEED", "1"), ("NEURAMATE_TITLE", "Calm")],
        )
        .unwrap();
        let Command::Launch(args) = command else {
            panic!("expected launch");
        };
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.title, "Calm");
        assert_eq!(args.log_level, Level::DEBUG);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert_eq!(
            parse(&["--seed", "abc"], &[]),
            Err(ArgsError::InvalidSeed {
                raw: "abc".to_string()
            })
        );
        assert_eq!(
            parse(&[], &[("NEURAMATE_LOG", "loud")]),
            Err(ArgsError::InvalidLogLevel {
                raw: "loud".to_string()
            })
        );
        assert_eq!(
            parse(&["--seed"], &[]),
            Err(ArgsError::MissingValue { flag: "--seed" })
        );
        assert_eq!(parse(&["--title", "  "], &[]), Err(ArgsError::EmptyTitle));
        assert_eq!(
            parse(&["--deck-id", "1"], &[]),
            Err(ArgsError::UnknownArg("--deck-id".to_string()))
        );
    }

    #[test]
    fn help_short_circuits() {
        assert_eq!(parse(&["--help", "--bogus"], &[]), Ok(Command::Help));
    }
}
