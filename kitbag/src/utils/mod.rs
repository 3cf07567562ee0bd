pub mod validators;
pub use validators::{DEFAULT_ERROR_MESSAGE, InputUnit, InputValidator, Readable};

pub mod numeric;
pub use numeric::{Integer, Numeric};

pub mod terminal;
pub use terminal::{PromptErrors, Terminal, read_name, read_number, read_value};
