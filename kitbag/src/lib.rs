//! # Kitbag
//!
//! A small generic utility library for interactive CLI programs: typed input
//! loops with per-type validation, heterogeneous named-field records, and
//! console formatting helpers.
//!
//! ## Features
//!
//! ### Core
//!
//! - **Typed prompts** - [`utils::Terminal`] asks for a value of any supported type and
//!   keeps asking until it parses, passes the type's validity rule and an optional predicate
//! - **Per-type validity rules** - [`utils::InputValidator`] is resolved by the compiler:
//!   integers always pass, floats must be finite, text must be non-empty
//! - **Data containers** - [`container::DataContainer`] stores up to 12 named fields of
//!   independent types with compile-time positional access, and can fill itself from a prompt
//!
//! ### Utilities
//!
//! - **Calculator** - generic add/subtract/multiply/divide/half/power
//! - **Time** - hour/day/week conversions and [`time::TaskDuration`]
//! - **Numbers** - parity/sign analysis, primality and perfect numbers
//! - **Authentication** - PIN and credential prompts with bounded attempts
//! - **Output** - value, range, result and multiplication table printers
//!
//! ("serde" feature)
//! - **JSON reports** - containers serialize as `{ name: value }` maps; value types derive serde
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! kitbag = { version = "0.1.0" }
//! kitbag = { version = "0.1.0", features = ["serde"] }
//! ```
//!
//! ## Usage Examples
//!
//! ### Range prompt
//!
//! ```rust,no_run
//! use kitbag::utils::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//! let age: u8 = terminal.ask_number("Enter your age (1-120): ", 1, 120).unwrap();
//! println!("Age: {}", age);
//! ```
//!
//! ### Filling a record
//!
//! ```rust,no_run
//! use kitbag::container::{print_data_container, read_data_container, DataContainer};
//! use kitbag::utils::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//! let person: DataContainer<(String, u32, f64)> =
//!     read_data_container(["Name", "Age", "Height"], &mut terminal).unwrap();
//!
//! print_data_container(&person, Some("Person")).unwrap();
//! ```
//!
//! ### Scripted input
//!
//! Every prompt works over any `BufRead`/`Write` pair:
//!
//! ```rust
//! use std::io::Cursor;
//! use kitbag::utils::Terminal;
//!
//! let mut terminal = Terminal::new(Cursor::new("15\nabc\n7\n"), Vec::new());
//! let n: i32 = terminal.ask_number("Enter 1-10: ", 1, 10).unwrap();
//! assert_eq!(n, 7);
//! ```
//!
//! ## Error Handling
//!
//! Rejected input is never an error: it is reported to the user and asked
//! again. Errors are returned only for conditions the caller must handle:
//!
//! ```rust
//! use kitbag::container::{ContainerErrors, DataContainer};
//!
//! match DataContainer::<(i32, String)>::new(["only one name"]) {
//!     Ok(_) => unreachable!(),
//!     Err(ContainerErrors::ArityMismatch { expected, found }) => {
//!         eprintln!("expected {} names, got {}", expected, found)
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```
//!
//! ## Logging
//!
//! The library emits [`tracing`] events (rejected attempts at `debug`, closed
//! input, exhausted attempts and cancellation at `warn`). Install any
//! subscriber to see them; nothing is printed otherwise.
//!
//! ## License
//!
//! This project is licensed under the MIT License.

pub mod utils;

pub mod container;

pub mod auth;
pub mod calculator;
pub mod numbers;
pub mod operations;
pub mod output;
pub mod time;

cfg_if::cfg_if! {
    if #[cfg(feature = "serde")] {
        pub mod report;
    }
}
