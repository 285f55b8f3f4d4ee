//! Holiday providers
//!
//! `InMemoryHolidayProvider` serves fixed holiday sets, e.g. loaded by the
//! embedding application. `CachedHolidayProvider` wraps any provider and
//! remembers each successful (country, year) lookup.

use chrono::{Datelike, NaiveDate};
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

use super::{HolidayLookupError, HolidayProvider};

type HolidayKey = (String, i32);

/// Provider serving holidays registered up front
///
/// A country with no registered holidays at all is unsupported; a known
/// country with nothing registered for a year has no holidays that year.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHolidayProvider {
    holidays: HashMap<HolidayKey, HashSet<NaiveDate>>,
    countries: HashSet<String>,
}

impl InMemoryHolidayProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with_holidays(
        mut self,
        country_code: &str,
        dates: impl IntoIterator<Item = NaiveDate>,
    ) -> Self {
        self.insert(country_code, dates);
        self
    }

    /// Register holidays for a country, grouped by their year
    pub fn insert(&mut self, country_code: &str, dates: impl IntoIterator<Item = NaiveDate>) {
        self.countries.insert(country_code.to_string());
        for date in dates {
            self.holidays
                .entry((country_code.to_string(), date.year()))
                .or_default()
                .insert(date);
        }
    }
}

impl HolidayProvider for InMemoryHolidayProvider {
    fn get_holidays(
        &self,
        country_code: &str,
        year: i32,
    ) -> Result<HashSet<NaiveDate>, HolidayLookupError> {
        if !self.countries.contains(country_code) {
            return Err(HolidayLookupError::UnsupportedCountry(
                country_code.to_string(),
            ));
        }
        Ok(self
            .holidays
            .get(&(country_code.to_string(), year))
            .cloned()
            .unwrap_or_default())
    }
}

/// Per-year memoising wrapper around another provider
///
/// Failed lookups are not cached and are retried on the next call.
#[derive(Debug)]
pub struct CachedHolidayProvider<P> {
    inner: P,
    cache: Mutex<HashMap<HolidayKey, HashSet<NaiveDate>>>,
}

impl<P: HolidayProvider> CachedHolidayProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Number of (country, year) entries held
    pub fn cached_entries(&self) -> usize {
        self.lock_cache().len()
    }

    fn lock_cache(&self) -> MutexGuard<'_, HashMap<HolidayKey, HashSet<NaiveDate>>> {
        self.cache.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: HolidayProvider> HolidayProvider for CachedHolidayProvider<P> {
    fn get_holidays(
        &self,
        country_code: &str,
        year: i32,
    ) -> Result<HashSet<NaiveDate>, HolidayLookupError> {
        let key = (country_code.to_string(), year);
        if let Some(holidays) = self.lock_cache().get(&key) {
            return Ok(holidays.clone());
        }

        // Lock released during the lookup; a concurrent miss may fetch the same year twice
        let holidays = self.inner.get_holidays(country_code, year)?;
        debug!(country_code, year, count = holidays.len(), "Cached holiday set");
        self.lock_cache().insert(key, holidays.clone());
        Ok(holidays)
    }
}
