//! Country/timezone index built from the tzdata tables.
//!
//! ## Architecture
//!
//! - [`parser`]: line-level parsing into a mutable [`ZoneTabBuilder`]
//! - [`index`]: the frozen [`ZoneTab`] and its lookups
//! - [`locale`]: pluggable locale to country extraction
//!
//! ## Data
//!
//! The zone table (`zone.tab` or `zone1970.tab`) associates countries with
//! timezones. The first country of a row whose country has not been given
//! a representative timezone yet makes that row's timezone the country's
//! representative; it is listed first no matter where it was read.
//!
//! The links table (`backward`) maps legacy identifiers to the ones that
//! replaced them. Links only affect timezone to country lookups, and they
//! may chain: `US/Eastern` can point at an identifier that is itself an
//! alias. Chains are followed with a cycle guard.

mod index;
mod locale;
mod parser;


pub use index::ZoneTab;
pub use locale::{LanguageTag, LocaleCountry};
pub use parser::ZoneTabBuilder;
