//! Zhuyin Quest CLI entry point.

use std::env;
use std::process::ExitCode;

use zhuyin_catalog::Catalog;
use zhuyin_engine::Game;
use zhuyin_foundation::SeededRandom;
use zhuyin_runtime::{LogConfig, Repl, Session, SilentCues, init_logging};

/// CLI configuration parsed from arguments.
#[derive(Debug, Default, PartialEq, Eq)]
struct CliConfig {
    seed: Option<u64>,
    catalog_stats: bool,
    verbosity: u8,
    quiet: bool,
    silent: bool,
    show_help: bool,
    show_version: bool,
}

impl CliConfig {
    fn log_config(&self) -> LogConfig {
        if self.quiet {
            LogConfig::quiet()
        } else {
            LogConfig::from_verbosity(self.verbosity)
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: &[String]) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-q" | "--quiet" => config.quiet = true,
            "--silent" => config.silent = true,
            "--catalog-stats" => config.catalog_stats = true,
            "--seed" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    return Err("--seed requires a value".into());
                };
                config.seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid --seed value: {value}"))?,
                );
            }
            flag if flag.len() > 1 && flag.starts_with('-') && flag[1..].chars().all(|c| c == 'v') => {
                let count = u8::try_from(flag.len() - 1).unwrap_or(u8::MAX);
                config.verbosity = config.verbosity.saturating_add(count);
            }
            "--verbose" => config.verbosity = config.verbosity.saturating_add(1),
            arg => return Err(format!("unknown option: {arg}").into()),
        }
        i += 1;
    }

    if config.quiet && config.verbosity > 0 {
        return Err("--quiet cannot be combined with -v".into());
    }

    Ok(config)
}

fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("zhuyin {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_logging(&config.log_config())?;

    let catalog = Catalog::builtin();
    if config.catalog_stats {
        print_catalog_stats(&catalog);
        return Ok(());
    }

    let rng = config.seed.map_or_else(SeededRandom::from_entropy, SeededRandom::new);
    tracing::info!(seed = rng.seed(), "session seed");

    let game = Game::new(catalog.into(), zhuyin_engine::GameConfig::default())?;
    let mut repl = Repl::new(Session::new(game, rng))?;
    if config.silent {
        repl = repl.with_cues(SilentCues);
    }

    repl.run()?;
    Ok(())
}

fn print_catalog_stats(catalog: &Catalog) {
    println!("\x1b[1;36m=== Vocabulary ===\x1b[0m");
    println!("Items: {}", catalog.len());
    for category in catalog.categories() {
        println!("  {category:<8} {}", catalog.by_category(category).len());
    }
    let symbols: usize = catalog.iter().map(|item| item.spelling.len()).sum();
    println!("Syllables: {symbols}");
    println!();
}

fn print_help() {
    println!(
        "\x1b[1mZhuyin Quest\x1b[0m - 注音闖關, a phonetic-symbol quiz

\x1b[1mUSAGE:\x1b[0m
    zhuyin [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    --seed N             Use a fixed random seed (repeatable levels)
    --catalog-stats      Print vocabulary counts per category and exit
    --silent             Never ring the terminal bell
    -v, -vv, -vvv        More log output on stderr (info, debug, trace)
    -q, --quiet          Only log errors

\x1b[1mENVIRONMENT:\x1b[0m
    RUST_LOG             Overrides the log filter, e.g. zhuyin_engine=debug

\x1b[1mIN-GAME COMMANDS:\x1b[0m
    start                Start level 1
    1 / ㄇㄠ             Answer a picture question
    2 1 / ㄊㄨˋ ㄗˇ       Answer a spelling or sorting question (`_` = empty slot)
    next                 Next question, or next level
    menu                 Back to the menu
    status / help / quit"
    );
}
