//! Tandem CLI
//!
//! The command-line front end for the roster. All real work happens in
//! the library; this binary parses the invocation, opens the roster
//! file, dispatches, and prints.

use std::path::PathBuf;
use std::sync::Arc;

use tandem::commands::{MeetingCommands, PersonCommands};
use tandem::{
    CommandError, ConfirmationPrompt, FilePersonStore, StaticPrompt, StdinPrompt, TandemError,
    TandemResult,
};

/// Overall usage line, shown for an unknown command group.
const USAGE: &str = "tandem [--file <path>] [--yes] (person | meeting) <operation> [args...]";

/// One parsed invocation.
struct Invocation {
    /// Roster file override from `--file`.
    file: Option<PathBuf>,
    /// Answer yes to every confirmation without asking.
    assume_yes: bool,
    /// Command group: `person` or `meeting`.
    group: String,
    /// Operation within the group.
    operation: String,
    /// Remaining positional arguments, handed to the handler untouched.
    args: Vec<String>,
}

fn parse_args() -> Invocation {
    let args: Vec<String> = std::env::args().collect();
    let mut file = None;
    let mut assume_yes = false;
    let mut positional = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--file" | "-f" => {
                if i + 1 < args.len() {
                    file = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                } else {
                    eprintln!("error: --file requires a value");
                    std::process::exit(1);
                }
            }
            "--yes" | "-y" => {
                assume_yes = true;
                i += 1;
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--version" | "-V" => {
                println!("tandem {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            arg if arg.starts_with('-') && positional.is_empty() => {
                eprintln!("error: unknown option: {arg}");
                std::process::exit(1);
            }
            arg => {
                positional.push(arg.to_string());
                i += 1;
            }
        }
    }

    if positional.first().map(String::as_str) == Some("help") {
        print_help();
        std::process::exit(0);
    }

    let mut positional = positional.into_iter();
    let (Some(group), Some(operation)) = (positional.next(), positional.next()) else {
        eprintln!("error: expected a command and an operation");
        eprintln!("usage: {USAGE}");
        std::process::exit(1);
    };

    Invocation {
        file,
        assume_yes,
        group,
        operation,
        args: positional.collect(),
    }
}

fn print_help() {
    println!("tandem - a roster for your one-on-one meetings");
    println!();
    println!("USAGE:");
    println!("    {USAGE}");
    println!();
    println!("COMMANDS:");
    println!("    person list [all | enabled | disabled]");
    println!("    person add <first-name> <last-name> <role> <start-date> [end-date]");
    println!("    person edit <search-string> <field> <value>");
    println!("    person delete (<first-name> <last-name> | <search-string>)");
    println!("    person find <search-string>");
    println!("    person info <search-string>");
    println!("    meeting add <search-string> <date>");
    println!("    meeting delete <search-string> <date>");
    println!();
    println!("OPTIONS:");
    println!("    -f, --file <PATH>    Roster file [default: ~/.tandem/roster.json]");
    println!("    -y, --yes            Answer yes to every confirmation");
    println!("    -h, --help           Print help information");
    println!("    -V, --version        Print version information");
}

/// Picks the roster file: `--file`, then `$TANDEM_FILE`, then
/// `~/.tandem/roster.json`.
fn roster_path(invocation: &Invocation) -> TandemResult<PathBuf> {
    if let Some(path) = &invocation.file {
        return Ok(path.clone());
    }
    if let Ok(path) = std::env::var("TANDEM_FILE") {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    let home = dirs::home_dir().ok_or_else(|| {
        TandemError::internal("Could not determine the home directory for the default roster path")
    })?;
    Ok(home.join(".tandem").join("roster.json"))
}

fn run(invocation: &Invocation) -> TandemResult<()> {
    let path = roster_path(invocation)?;
    log::debug!("roster file: {}", path.display());

    let store = Arc::new(FilePersonStore::open(path)?);
    let prompt: Box<dyn ConfirmationPrompt> = if invocation.assume_yes {
        Box::new(StaticPrompt::new(true))
    } else {
        Box::new(StdinPrompt::new())
    };

    let output = match invocation.group.as_str() {
        "person" => {
            PersonCommands::new(store, prompt).dispatch(&invocation.operation, &invocation.args)?
        }
        "meeting" => MeetingCommands::new(store).dispatch(&invocation.operation, &invocation.args)?,
        _ => return Err(TandemError::Command(CommandError::Usage(USAGE))),
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn report(err: &TandemError) {
    // Command failures print their own message without the aggregate
    // prefix; they are the user's typo, not the tool's problem.
    match err {
        TandemError::Command(inner) => report_command(inner),
        other => eprintln!("{other}"),
    }
}

fn report_command(err: &CommandError) {
    if let CommandError::Ambiguous { candidates, .. } = err {
        eprintln!("{err}. Possibilities are:");
        for name in candidates {
            eprintln!("  {name}");
        }
    } else {
        eprintln!("{err}");
    }
}

fn main() {
    env_logger::init();

    let invocation = parse_args();
    if let Err(err) = run(&invocation) {
        report(&err);
        std::process::exit(1);
    }
}
