//! Extracting a country code from a locale identifier.
//!
//! The index itself only knows country codes. Locale-based lookups take
//! an extractor implementing [`LocaleCountry`], so callers can plug in
//! whatever locale machinery their platform has. [`LanguageTag`] covers
//! the common BCP 47 and POSIX spellings.

/// Extracts the country (region) code from a locale identifier.
pub trait LocaleCountry {
    /// Returns `None` when `locale` names no country.
    fn country(&self, locale: &str) -> Option<String>;
}

impl<F> LocaleCountry for F
where
    F: Fn(&str) -> Option<String>,
{
    fn country(&self, locale: &str) -> Option<String> {
        self(locale)
    }
}

/// Default extractor for BCP 47 tags and POSIX locale names.
///
/// Accepts `en-US`, `zh-Hant-TW`, `en_US.UTF-8` and `de_DE@euro`. The
/// first subtag after the language that is two ASCII letters is taken as
/// the country and upper-cased. Numeric regions such as `es-419` are not
/// countries and yield `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageTag;

impl LocaleCountry for LanguageTag {
    fn country(&self, locale: &str) -> Option<String> {
        // Drop POSIX codeset and modifier: `en_US.UTF-8@euro`
        let tag = locale.split(['.', '@']).next().unwrap_or_default();

        let mut subtags = tag.split(['-', '_']);
        let language = subtags.next()?;
        if language.is_empty() {
            return None;
        }

        for subtag in subtags {
            // Extensions and private use come after the region
            if subtag.len() == 1 {
                break;
            }
            if subtag.len() == 2 && subtag.bytes().all(|b| b.is_ascii_alphabetic()) {
                return Some(subtag.to_ascii_uppercase());
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bcp47_tags() {
        assert_eq!(LanguageTag.country("en-US").as_deref(), Some("US"));
        assert_eq!(LanguageTag.country("zh-Hant-TW").as_deref(), Some("TW"));
        assert_eq!(LanguageTag.country("pt-br").as_deref(), Some("BR"));
        assert_eq!(LanguageTag.country("es-419"), None);
        assert_eq!(LanguageTag.country("fr"), None);
        assert_eq!(LanguageTag.country("en-x-us"), None);
    }

    #[test]
    fn test_posix_names() {
        assert_eq!(LanguageTag.country("en_US.UTF-8").as_deref(), Some("US"));
        assert_eq!(LanguageTag.country("de_DE@euro").as_deref(), Some("DE"));
        assert_eq!(LanguageTag.country("C.UTF-8"), None);
        assert_eq!(LanguageTag.country(""), None);
    }

    #[test]
    fn test_closure_extractor() {
        let fixed = |_: &str| Some("CA".to_string());
        assert_eq!(fixed.country("anything").as_deref(), Some("CA"));
    }
}
