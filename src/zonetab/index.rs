use std::collections::{HashMap, HashSet};
use std::io::BufRead;

use tracing::debug;

use super::locale::LocaleCountry;
use super::parser::ZoneTabBuilder;
use crate::error::{ParseError, Table};

/// Immutable bidirectional index between country codes and timezones.
///
/// Built once from a zone table and a links table; every query after that
/// is a plain read, so a `ZoneTab` can be shared between threads (behind
/// an `Arc` or a `&'static`) without locking.
///
/// Timezone identifiers are opaque strings compared exactly. Only the
/// identifiers that appear literally in the zone table are keys of the
/// reverse index; aliases from the links table are followed when a
/// reverse lookup asks for one.
#[derive(Debug, Clone)]
pub struct ZoneTab {
    /// Country code to timezones, representative first
    by_country: HashMap<String, Box<[String]>>,
    /// Canonical timezone to countries, in table order
    by_timezone: HashMap<String, Box<[String]>>,
    /// Alias to the identifier it links to
    links: HashMap<String, String>,
}

impl ZoneTab {
    pub(super) fn from_parts(
        by_country: HashMap<String, Box<[String]>>,
        by_timezone: HashMap<String, Box<[String]>>,
        links: HashMap<String, String>,
    ) -> Self {
        let tab = Self {
            by_country,
            by_timezone,
            links,
        };
        debug!(
            countries = tab.by_country.len(),
            timezones = tab.by_timezone.len(),
            aliases = tab.links.len(),
            "built zone table index"
        );
        tab
    }

    /// Build the index from two open text streams.
    ///
    /// The links table is consumed first, then the zone table. Lines that
    /// are comments or have too few columns are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Io`] if either stream fails to read to the
    /// end, including on invalid UTF-8. No partial index is returned.
    pub fn from_readers<Z: BufRead, L: BufRead>(zone_tab: Z, links: L) -> Result<Self, ParseError> {
        let mut builder = ZoneTabBuilder::new();

        for line in links.lines() {
            let line = line.map_err(|e| ParseError::io(Table::Links, e))?;
            builder.add_link_line(&line);
        }

        for line in zone_tab.lines() {
            let line = line.map_err(|e| ParseError::io(Table::ZoneTab, e))?;
            builder.add_zone_line(&line);
        }

        Ok(builder.finish())
    }

    /// Timezones used in `country`, representative first.
    pub fn timezones_for_country(&self, country: &str) -> Option<&[String]> {
        self.by_country.get(country).map(|tzs| &tzs[..])
    }

    /// The representative timezone of `country`.
    pub fn primary_timezone_for_country(&self, country: &str) -> Option<&str> {
        self.timezones_for_country(country)?
            .first()
            .map(String::as_str)
    }

    /// Like [`timezones_for_country`](Self::timezones_for_country), taking
    /// the country from a locale identifier.
    pub fn timezones_for_locale<C: LocaleCountry + ?Sized>(
        &self,
        locale: &str,
        extractor: &C,
    ) -> Option<&[String]> {
        let country = extractor.country(locale)?;
        self.timezones_for_country(&country)
    }

    /// Like [`primary_timezone_for_country`](Self::primary_timezone_for_country),
    /// taking the country from a locale identifier.
    pub fn primary_timezone_for_locale<C: LocaleCountry + ?Sized>(
        &self,
        locale: &str,
        extractor: &C,
    ) -> Option<&str> {
        let country = extractor.country(locale)?;
        self.primary_timezone_for_country(&country)
    }

    /// Countries using `timezone`, in table order.
    ///
    /// An alias is followed to the end of its chain before the lookup, even
    /// if the alias also appears in the zone table itself. Returns `None`
    /// when the chain loops.
    pub fn countries_for_timezone(&self, timezone: &str) -> Option<&[String]> {
        let canonical = self.canonical_timezone(timezone)?;
        self.by_timezone.get(canonical).map(|cs| &cs[..])
    }

    /// The first country listed for `timezone`.
    ///
    /// A direct entry wins over an alias; otherwise links are followed
    /// until an identifier with an entry turns up.
    pub fn primary_country_for_timezone(&self, timezone: &str) -> Option<&str> {
        let mut seen = HashSet::new();
        let mut current = timezone;

        loop {
            if let Some(countries) = self.by_timezone.get(current) {
                return countries.first().map(String::as_str);
            }
            if !seen.insert(current) {
                return None;
            }
            current = self.links.get(current)?.as_str();
        }
    }

    /// Follow the alias chain starting at `timezone` to its end.
    ///
    /// Returns `timezone` itself when it is not an alias and `None` when
    /// the chain revisits an identifier. The result need not be a key of
    /// the index.
    pub fn canonical_timezone<'a>(&'a self, timezone: &'a str) -> Option<&'a str> {
        let mut seen = HashSet::new();
        let mut current = timezone;

        while let Some(next) = self.links.get(current) {
            if !seen.insert(current) {
                return None;
            }
            current = next.as_str();
        }

        Some(current)
    }

    /// All known country codes, in no particular order.
    pub fn countries(&self) -> impl Iterator<Item = &str> + '_ {
        self.by_country.keys().map(String::as_str)
    }

    /// All timezones listed in the zone table, in no particular order.
    ///
    /// Aliases from the links table are not included.
    pub fn timezones(&self) -> impl Iterator<Item = &str> + '_ {
        self.by_timezone.keys().map(String::as_str)
    }

    /// All `(alias, target)` pairs from the links table.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.links.iter().map(|(a, t)| (a.as_str(), t.as_str()))
    }

    pub fn len_countries(&self) -> usize {
        self.by_country.len()
    }

    pub fn len_timezones(&self) -> usize {
        self.by_timezone.len()
    }

    pub fn len_aliases(&self) -> usize {
        self.links.len()
    }
}
