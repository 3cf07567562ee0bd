use clap::{Parser, Subcommand};
use kitbag::auth::{PinOptions, authenticate_with_pin};
use kitbag::calculator;
use kitbag::container::{DataContainer, print_data_container};
use kitbag::numbers::{check_prime, is_perfect_number, print_number_properties};
use kitbag::output::{RangeOptions, format_result, print_multiplication_table, print_range};
use kitbag::report::to_json;
use kitbag::time::read_task_duration;
use kitbag::utils::Terminal;
use std::error::Error;
use std::num::NonZeroUsize;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

type Person = (String, u32, f64);

#[derive(Parser)]
#[command(name = "kitbag", version, about = "Interactive console utilities")]
struct Cli {
    /// Give up a prompt after this many invalid answers.
    #[arg(long, global = true)]
    max_attempts: Option<NonZeroUsize>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill a person record and print it.
    Record {
        /// Print the record as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Read an integer and describe it.
    Number,
    /// Read a task duration and print its total in seconds.
    Duration,
    /// Ask for a PIN code.
    Pin {
        #[arg(long, default_value = "1234")]
        pin: String,
        #[arg(long, default_value = "3")]
        attempts: NonZeroUsize,
    },
    /// Read two numbers and apply every calculator operation.
    Calc,
    /// Print a multiplication table.
    Table {
        /// Table size; asked for when missing.
        #[arg(long)]
        size: Option<u32>,
    },
    /// Count from 1 up to a number.
    Range {
        #[arg(long)]
        descending: bool,
    },
}

fn banner() {
    println!("--------------------------------------------------------");
    println!("██   ██ ██ ████████ ██████   █████   ██████  ");
    println!("██  ██  ██    ██    ██   ██ ██   ██ ██       ");
    println!("█████   ██    ██    ██████  ███████ ██   ███ ");
    println!("██  ██  ██    ██    ██   ██ ██   ██ ██    ██ ");
    println!("██   ██ ██    ██    ██████  ██   ██  ██████  ");
    println!("                 VERSION:  {}", env!("CARGO_PKG_VERSION"));
    println!("--------------------------------------------------------");
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut terminal = Terminal::stdio();
    if let Some(max) = cli.max_attempts {
        terminal = terminal.with_max_attempts(max);
    }

    match cli.command {
        Commands::Record { json } => {
            let mut person: DataContainer<Person> = DataContainer::new(["Name", "Age", "Height"])?;
            person.set_field::<0>(terminal.ask_name("Enter your name: ")?);
            person.set_field::<1>(terminal.ask_number("Enter your age: ", 1, 150)?);
            person.set_field::<2>(terminal.ask_number("Enter your height (m): ", 0.3, 3.0)?);

            if json {
                println!("{}", to_json(&person, true)?);
            } else {
                print_data_container(&person, Some("Person"))?;
            }
        }
        Commands::Number => {
            let n: i64 = terminal.ask_any_number("Enter a number: ")?;
            print_number_properties(n)?;
            println!("Prime: {}", check_prime(n));
            match is_perfect_number(n) {
                Ok(kind) => println!("Perfect: {}", kind),
                Err(e) => println!("Perfect: {}", e),
            }
        }
        Commands::Duration => {
            let duration = read_task_duration(&mut terminal)?;
            format_result(&duration, "Task duration", "", "")?;
            format_result(&duration.to_seconds(), "Total seconds", "", "")?;
        }
        Commands::Pin { pin, attempts } => {
            let options = PinOptions {
                max_attempts: Some(attempts),
                ..PinOptions::default()
            };
            let result = authenticate_with_pin(&mut terminal, &pin, &options)?;
            println!("{}", result);
        }
        Commands::Calc => {
            let a: f64 = terminal.ask("First number: ")?;
            let b: f64 = terminal.ask("Second number: ")?;
            debug!(a, b, "calculating");

            format_result(&calculator::add(a, b), "Sum", "", "")?;
            format_result(&calculator::subtract(a, b), "Difference", "", "")?;
            format_result(&calculator::multiply(a, b), "Product", "", "")?;
            match calculator::divide(a, b) {
                Ok(q) => format_result(&q, "Quotient", "", "")?,
                Err(e) => eprintln!("{}", e),
            }
            format_result(&calculator::half(a), "Half of first", "", "")?;
            format_result(&calculator::power(a, b), "Power", "", "")?;
        }
        Commands::Table { size } => {
            let size = match size {
                Some(size) => size,
                None => terminal.ask_number("Table size (1-12): ", 1u32, 12)?,
            };
            print_multiplication_table(size)?;
        }
        Commands::Range { descending } => {
            let n: u32 = terminal.ask_number("Count up to (1-100): ", 1, 100)?;
            let options = RangeOptions {
                descending,
                ..RangeOptions::default()
            };
            print_range(n, &options)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    banner();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_pin_defaults() {
        let cli = Cli::try_parse_from(["kitbag", "pin"]).unwrap();
        match cli.command {
            Commands::Pin { pin, attempts } => {
                assert_eq!(pin, "1234");
                assert_eq!(attempts.get(), 3);
            }
            _ => panic!("expected the pin command"),
        }
    }

    #[test]
    fn test_parse_global_attempts() {
        let cli = Cli::try_parse_from(["kitbag", "table", "--size", "4", "--max-attempts", "2"]).unwrap();
        assert_eq!(cli.max_attempts.map(NonZeroUsize::get), Some(2));
        assert!(matches!(cli.command, Commands::Table { size: Some(4) }));
    }

    #[test]
    fn test_zero_attempts_rejected() {
        assert!(Cli::try_parse_from(["kitbag", "--max-attempts", "0", "number"]).is_err());
    }
}
