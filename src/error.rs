use std::fmt;
use std::io;

use thiserror::Error;

/// Which of the two input tables an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    /// The country/timezone table (`zone.tab` or `zone1970.tab`)
    ZoneTab,
    /// The alias table (`backward` or any file of `Link` records)
    Links,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Table::ZoneTab => f.write_str("zone table"),
            Table::Links => f.write_str("links table"),
        }
    }
}

/// Error returned when a [`ZoneTab`](crate::ZoneTab) cannot be built.
///
/// Malformed lines are skipped during parsing, so the only failure is
/// being unable to read one of the input streams to the end.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read {table}")]
    Io {
        table: Table,
        #[source]
        source: io::Error,
    },
}

impl ParseError {
    pub(crate) fn io(table: Table, source: io::Error) -> Self {
        ParseError::Io { table, source }
    }

    /// The table whose stream failed.
    pub fn table(&self) -> Table {
        match self {
            ParseError::Io { table, .. } => *table,
        }
    }
}
