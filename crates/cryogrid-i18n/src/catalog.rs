#![forbid(unsafe_code)]

//! String catalog with key-based lookup and locale fallback chains.

use std::collections::HashMap;
use std::fmt;

/// Error from a strict catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// The requested locale was never registered.
    UnknownLocale(String),
    /// The key is missing from the active locale and every fallback.
    UnknownKey(String),
}

impl fmt::Display for I18nError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLocale(locale) => write!(f, "unknown locale {locale:?}"),
            Self::UnknownKey(key) => write!(f, "unknown string key {key:?}"),
        }
    }
}

impl std::error::Error for I18nError {}

/// Externalized string storage.
///
/// Strings are organized as locale → key → text. Lookup order is the active
/// locale, then the fallback chain in order. [`StringCatalog::get`] reports
/// misses as [`I18nError`]; [`StringCatalog::get_or`] is the widget-facing
/// accessor that degrades to a literal instead.
#[derive(Debug, Clone, Default)]
pub struct StringCatalog {
    locales: HashMap<String, HashMap<String, String>>,
    active: String,
    fallback_chain: Vec<String>,
}

impl StringCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or extend) a locale from `(key, text)` pairs.
    ///
    /// The first registered locale becomes active.
    pub fn add_locale<I, K, V>(&mut self, locale: impl Into<String>, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let locale = locale.into();
        if self.active.is_empty() {
            self.active = locale.clone();
        }
        let table = self.locales.entry(locale).or_default();
        for (key, value) in entries {
            table.insert(key.into(), value.into());
        }
    }

    /// Insert a single string.
    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.add_locale(locale, [(key.into(), value.into())]);
    }

    /// Switch the active locale.
    pub fn set_locale(&mut self, locale: &str) -> Result<(), I18nError> {
        if self.locales.contains_key(locale) {
            self.active = locale.to_owned();
            Ok(())
        } else {
            Err(I18nError::UnknownLocale(locale.to_owned()))
        }
    }

    /// The active locale name.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.active
    }

    /// Set the fallback chain consulted after the active locale misses.
    pub fn set_fallback_chain<I, S>(&mut self, chain: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fallback_chain = chain.into_iter().map(Into::into).collect();
    }

    /// Strict lookup through the active locale and fallback chain.
    pub fn get(&self, key: &str) -> Result<&str, I18nError> {
        let mut order = std::iter::once(self.active.as_str()).chain(
            self.fallback_chain
                .iter()
                .map(String::as_str)
                .filter(|l| *l != self.active),
        );
        order
            .find_map(|locale| self.locales.get(locale)?.get(key))
            .map(String::as_str)
            .ok_or_else(|| I18nError::UnknownKey(key.to_owned()))
    }

    /// Defensive lookup: resolve `key`, or fall back to `literal`.
    ///
    /// This is the only accessor widgets use directly; a missing key degrades
    /// to the built-in English text and never reaches the host.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, literal: &'a str) -> &'a str {
        self.get(key).unwrap_or(literal)
    }
}
