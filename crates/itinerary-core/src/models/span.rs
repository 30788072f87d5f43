//! Date spans covered by a trip's activities and the cache behind them.

use std::{
    cell::RefCell,
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use jiff::{civil::Date, tz::TimeZone, Timestamp};
use log::debug;
use serde::{Deserialize, Serialize};

/// Earliest and latest instant across a set of activities, full precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl DateSpan {
    /// Bounds of the given instants, or `None` if there are none.
    pub fn from_instants(instants: impl IntoIterator<Item = Timestamp>) -> Option<Self> {
        instants.into_iter().fold(None, |span, instant| match span {
            None => Some(DateSpan {
                start: instant,
                end: instant,
            }),
            Some(DateSpan { start, end }) => Some(DateSpan {
                start: start.min(instant),
                end: end.max(instant),
            }),
        })
    }
}

/// Earliest and latest calendar day across a set of activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySpan {
    pub start: Date,
    pub end: Date,
}

impl DaySpan {
    /// Day-truncated bounds of the given instants in `calendar`.
    pub fn from_instants(
        instants: impl IntoIterator<Item = Timestamp>,
        calendar: &TimeZone,
    ) -> Option<Self> {
        instants
            .into_iter()
            .map(|instant| calendar_day(instant, calendar))
            .fold(None, |span, day| match span {
                None => Some(DaySpan {
                    start: day,
                    end: day,
                }),
                Some(DaySpan { start, end }) => Some(DaySpan {
                    start: start.min(day),
                    end: end.max(day),
                }),
            })
    }
}

/// The calendar day `instant` falls on in `calendar`.
pub fn calendar_day(instant: Timestamp, calendar: &TimeZone) -> Date {
    instant.to_zoned(calendar.clone()).date()
}

/// Summary of an activity set used to decide whether a cached span is stale.
///
/// Two sets with the same instants but a different number of records still
/// produce different fingerprints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint(u64);

impl Fingerprint {
    /// Fingerprint `count` records whose start and end instants are `instants`.
    pub fn of(count: usize, instants: impl IntoIterator<Item = Timestamp>) -> Self {
        let mut sorted: Vec<i128> = instants
            .into_iter()
            .map(|instant| instant.as_nanosecond())
            .collect();
        sorted.sort_unstable();

        let mut hasher = DefaultHasher::new();
        count.hash(&mut hasher);
        sorted.hash(&mut hasher);
        Fingerprint(hasher.finish())
    }
}

#[derive(Debug, Clone, Default)]
struct CacheEntry {
    value: Option<DaySpan>,
    fingerprint: Option<Fingerprint>,
}

/// Cached [`DaySpan`] plus the fingerprint it was computed under.
///
/// Reads go through `&self` so display code can use the cache; clearing
/// requires `&mut self`, which only the owning trip hands out.
#[derive(Debug, Clone, Default)]
pub struct DateEnvelopeCache {
    entry: RefCell<CacheEntry>,
}

impl DateEnvelopeCache {
    /// Return the cached span if `fingerprint` matches, else run `compute`
    /// and store its result.
    pub fn get_or_compute(
        &self,
        fingerprint: Fingerprint,
        compute: impl FnOnce() -> Option<DaySpan>,
    ) -> Option<DaySpan> {
        {
            let entry = self.entry.borrow();
            if entry.fingerprint == Some(fingerprint) {
                return entry.value;
            }
        }

        debug!("Recomputing activity day span");
        let value = compute();
        let mut entry = self.entry.borrow_mut();
        entry.value = value;
        entry.fingerprint = Some(fingerprint);
        value
    }

    /// Drop the cached value and fingerprint.
    pub fn invalidate(&mut self) {
        let entry = self.entry.get_mut();
        entry.value = None;
        entry.fingerprint = None;
    }

    /// True if a value has been computed since the last invalidation.
    pub fn is_populated(&self) -> bool {
        self.entry.borrow().fingerprint.is_some()
    }
}
