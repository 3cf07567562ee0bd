//! # Data Container
//!
//! A fixed-arity record of named fields where every field keeps its own static
//! type. The fields live in a Rust tuple, so positional access is checked by
//! the compiler and carries no runtime tag:
//!
//! - [`DataContainer::set_field`] / [`DataContainer::get_field`] take the
//!   position as a const generic (`set_field::<1>(..)`); an out-of-range
//!   position does not compile.
//! - [`DataContainer::get_field_name`] takes a runtime index and returns
//!   [`ContainerErrors::IndexOutOfRange`] when it is too large.
//!
//! Names are display metadata only. They are used for prompts and printing
//! and do not need to be unique.
//!
//! Tuples with up to 12 fields are supported.
//!
//! ## Example
//!
//! ```rust
//! use std::io::Cursor;
//! use kitbag::container::{DataContainer, write_data_container};
//! use kitbag::utils::Terminal;
//!
//! let mut record = DataContainer::<(i32, String)>::new(["Age", "Name"]).unwrap();
//!
//! let mut terminal = Terminal::new(Cursor::new("30\nAlice\n"), Vec::new());
//! record.populate(&mut terminal).unwrap();
//!
//! assert_eq!(*record.get_field::<0>(), 30);
//! assert_eq!(record.get_field::<1>(), "Alice");
//!
//! let mut out = Vec::new();
//! write_data_container(&mut out, &record, Some("Person")).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "Person\nAge: 30\nName: Alice\n");
//! ```

use crate::utils::terminal::{PromptErrors, Terminal};
use crate::utils::validators::Readable;
use std::{
    error::Error,
    fmt::Display,
    io::{self, BufRead, Write},
};
use tracing::debug;

/// A tuple usable as the storage of a [`DataContainer`].
pub trait FieldSet: Default {
    /// Number of fields.
    const ARITY: usize;
}

/// Access to the field at position `I`.
pub trait Field<const I: usize> {
    type Value;

    fn field(&self) -> &Self::Value;
    fn field_mut(&mut self) -> &mut Self::Value;
}

/// Field sets whose every field can be read from a [`Terminal`].
pub trait PromptFields: FieldSet {
    /// Prompts for each field in declared order and stores the answers.
    fn populate_fields<R: BufRead, W: Write>(
        container: &mut DataContainer<Self>,
        terminal: &mut Terminal<R, W>,
    ) -> Result<(), ContainerErrors>;
}

/// Field sets whose every field implements [`Display`].
pub trait DisplayFields: FieldSet {
    /// Writes one `"<name>: <value>"` line per field in declared order.
    fn write_fields<W: Write>(container: &DataContainer<Self>, out: &mut W) -> io::Result<()>;
}

/// Errors raised by [`DataContainer`] construction and lookups.
#[derive(Debug)]
pub enum ContainerErrors {
    /// The number of names differs from the number of fields.
    ArityMismatch { expected: usize, found: usize },
    /// A runtime field index is not below the container size.
    IndexOutOfRange { index: usize, size: usize },
    /// Populating a field ended without a value.
    Prompt(PromptErrors),
}

impl Display for ContainerErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArityMismatch { expected, found } => write!(
                f,
                "Number of field names must match number of fields (expected {}, found {})",
                expected, found
            ),
            Self::IndexOutOfRange { index, size } => {
                write!(f, "Field index {} out of range (size {})", index, size)
            }
            Self::Prompt(e) => write!(f, "{}", e),
        }
    }
}

impl Error for ContainerErrors {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Prompt(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PromptErrors> for ContainerErrors {
    fn from(e: PromptErrors) -> Self {
        Self::Prompt(e)
    }
}

/// Named heterogeneous fields stored in the tuple `F`.
#[derive(Debug, Clone, PartialEq)]
pub struct DataContainer<F> {
    data: F,
    field_names: Vec<String>,
}

impl<F: FieldSet> DataContainer<F> {
    /// Creates a container whose fields hold their type's default value.
    ///
    /// Fails with [`ContainerErrors::ArityMismatch`] when the name count is not `F::ARITY`.
    pub fn new<I, S>(names: I) -> Result<Self, ContainerErrors>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let field_names: Vec<String> = names.into_iter().map(Into::into).collect();

        if field_names.len() != F::ARITY {
            return Err(ContainerErrors::ArityMismatch {
                expected: F::ARITY,
                found: field_names.len(),
            });
        }

        Ok(Self {
            data: F::default(),
            field_names,
        })
    }

    pub fn set_field<const I: usize>(&mut self, value: <F as Field<I>>::Value)
    where
        F: Field<I>,
    {
        *<F as Field<I>>::field_mut(&mut self.data) = value;
    }

    pub fn get_field<const I: usize>(&self) -> &<F as Field<I>>::Value
    where
        F: Field<I>,
    {
        <F as Field<I>>::field(&self.data)
    }

    pub fn get_field_name(&self, index: usize) -> Result<&str, ContainerErrors> {
        self.field_names
            .get(index)
            .map(String::as_str)
            .ok_or(ContainerErrors::IndexOutOfRange {
                index,
                size: F::ARITY,
            })
    }

    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }

    pub fn size(&self) -> usize {
        F::ARITY
    }

    /// The underlying tuple.
    pub fn fields(&self) -> &F {
        &self.data
    }

    pub fn into_inner(self) -> F {
        self.data
    }

    /// Prompts `"Enter <name>: "` for every field in declared order.
    ///
    /// Fields read before a failure keep their new value.
    pub fn populate<R: BufRead, W: Write>(
        &mut self,
        terminal: &mut Terminal<R, W>,
    ) -> Result<(), ContainerErrors>
    where
        F: PromptFields,
    {
        F::populate_fields(self, terminal)
    }
}

/// Creates a container named by `names` and populates it from `terminal`.
pub fn read_data_container<F, I, S, R, W>(
    names: I,
    terminal: &mut Terminal<R, W>,
) -> Result<DataContainer<F>, ContainerErrors>
where
    F: PromptFields,
    I: IntoIterator<Item = S>,
    S: Into<String>,
    R: BufRead,
    W: Write,
{
    let mut container = DataContainer::new(names)?;
    container.populate(terminal)?;
    Ok(container)
}

/// Writes the optional header line and then one `"<name>: <value>"` line per field.
///
/// An empty header is skipped.
pub fn write_data_container<F, W>(
    out: &mut W,
    container: &DataContainer<F>,
    header: Option<&str>,
) -> io::Result<()>
where
    F: DisplayFields,
    W: Write,
{
    if let Some(header) = header.filter(|h| !h.is_empty()) {
        writeln!(out, "{}", header)?;
    }
    F::write_fields(container, out)
}

/// [`write_data_container`] on stdout.
pub fn print_data_container<F: DisplayFields>(
    container: &DataContainer<F>,
    header: Option<&str>,
) -> io::Result<()> {
    write_data_container(&mut io::stdout().lock(), container, header)
}

macro_rules! impl_field {
    ([$($all:ident),*] $idx:tt $T:ident) => {
        impl<$($all),*> Field<$idx> for ($($all,)*) {
            type Value = $T;

            fn field(&self) -> &$T {
                &self.$idx
            }

            fn field_mut(&mut self) -> &mut $T {
                &mut self.$idx
            }
        }
    };
}

macro_rules! tuple_fields {
    (@fields $all:tt $($idx:tt $T:ident)*) => {
        $( impl_field!($all $idx $T); )*
    };
    ($arity:expr; $($idx:tt => $T:ident),*) => {
        tuple_fields!(@fields [$($T),*] $($idx $T)*);

        impl<$($T: Default),*> FieldSet for ($($T,)*) {
            const ARITY: usize = $arity;
        }

        impl<$($T: Readable + Default),*> PromptFields for ($($T,)*) {
            #[allow(unused_variables)]
            fn populate_fields<R: BufRead, W: Write>(
                container: &mut DataContainer<Self>,
                terminal: &mut Terminal<R, W>,
            ) -> Result<(), ContainerErrors> {
                $(
                    let prompt = format!("Enter {}: ", container.get_field_name($idx)?);
                    debug!(index = $idx, prompt = %prompt, "populating field");
                    let value: $T = terminal.ask(&prompt)?;
                    container.set_field::<$idx>(value);
                )*
                Ok(())
            }
        }

        impl<$($T: Display + Default),*> DisplayFields for ($($T,)*) {
            #[allow(unused_variables)]
            fn write_fields<W: Write>(container: &DataContainer<Self>, out: &mut W) -> io::Result<()> {
                $(
                    writeln!(out, "{}: {}", container.field_names[$idx], container.data.$idx)?;
                )*
                Ok(())
            }
        }

        #[cfg(feature = "serde")]
        impl<$($T: serde::Serialize + Default),*> crate::report::SerializeFields for ($($T,)*) {
            #[allow(unused_variables)]
            fn serialize_fields<Map: serde::ser::SerializeMap>(
                container: &DataContainer<Self>,
                map: &mut Map,
            ) -> Result<(), Map::Error> {
                $(
                    map.serialize_entry(&container.field_names[$idx], &container.data.$idx)?;
                )*
                Ok(())
            }
        }
    };
}

tuple_fields!(0;);
tuple_fields!(1; 0 => A);
tuple_fields!(2; 0 => A, 1 => B);
tuple_fields!(3; 0 => A, 1 => B, 2 => C);
tuple_fields!(4; 0 => A, 1 => B, 2 => C, 3 => D);
tuple_fields!(5; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E);
tuple_fields!(6; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => G);
tuple_fields!(7; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => G, 6 => H);
tuple_fields!(8; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => G, 6 => H, 7 => J);
tuple_fields!(9; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => G, 6 => H, 7 => J, 8 => K);
tuple_fields!(10; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => G, 6 => H, 7 => J, 8 => K, 9 => L);
tuple_fields!(11; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => G, 6 => H, 7 => J, 8 => K, 9 => L, 10 => M);
tuple_fields!(12; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => G, 6 => H, 7 => J, 8 => K, 9 => L, 10 => M, 11 => N);
