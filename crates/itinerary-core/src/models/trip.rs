//! Trip aggregate: owns a trip's activity records and answers date questions
//! about them.

use jiff::{tz::TimeZone, Timestamp};
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    span::{calendar_day, DateEnvelopeCache, DateSpan, DaySpan, Fingerprint},
    Activity, ActivityKind, ActivityRecord, ActivityRef, ConflictReport, DateConflict,
    EditSnapshot, FileAttachment, Lodging, Transportation, TripActivity,
};

/// A trip and the transportation, lodging and activity records it owns.
///
/// The three collections are private. Every mutation goes through a method on
/// `Trip` so the cached day span is invalidated before the method returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    /// Unique identifier for the trip
    pub id: u64,

    /// Display name of the trip
    pub name: String,

    /// Free-form notes
    #[serde(default)]
    pub notes: String,

    /// Timestamp when the trip was created (UTC)
    pub created_at: Timestamp,

    /// Whether the trip is marked as protected
    #[serde(default)]
    pub is_protected: bool,

    /// Declared start of the trip, if one has been set
    pub start_date: Option<Timestamp>,

    /// Declared end of the trip, if one has been set
    pub end_date: Option<Timestamp>,

    #[serde(default)]
    transportation: Vec<Transportation>,

    #[serde(default)]
    lodging: Vec<Lodging>,

    #[serde(default)]
    activities: Vec<Activity>,

    /// Calendar used to truncate instants to days
    #[serde(skip, default = "TimeZone::system")]
    calendar: TimeZone,

    #[serde(skip)]
    date_cache: DateEnvelopeCache,
}

impl Trip {
    /// Create an empty trip with no dates, using the system calendar.
    pub fn new(id: u64, name: impl Into<String>, created_at: Timestamp) -> Self {
        Self {
            id,
            name: name.into(),
            notes: String::new(),
            created_at,
            is_protected: false,
            start_date: None,
            end_date: None,
            transportation: Vec::new(),
            lodging: Vec::new(),
            activities: Vec::new(),
            calendar: TimeZone::system(),
            date_cache: DateEnvelopeCache::default(),
        }
    }

    /// Use `calendar` for day truncation.
    pub fn with_calendar(mut self, calendar: TimeZone) -> Self {
        self.set_calendar(calendar);
        self
    }

    pub fn set_calendar(&mut self, calendar: TimeZone) {
        self.calendar = calendar;
        self.date_cache.invalidate();
    }

    pub fn calendar(&self) -> &TimeZone {
        &self.calendar
    }

    // ── Trip dates ──────────────────────────────────────────────────────

    pub fn has_start_date(&self) -> bool {
        self.start_date.is_some()
    }

    pub fn has_end_date(&self) -> bool {
        self.end_date.is_some()
    }

    /// True only when both the start and the end date are set.
    pub fn has_date_range(&self) -> bool {
        self.has_start_date() && self.has_end_date()
    }

    /// The declared range, present only when both ends are set.
    pub fn date_range(&self) -> Option<DateSpan> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some(DateSpan { start, end }),
            _ => None,
        }
    }

    /// Replace the trip's declared dates. Does not check for conflicts; call
    /// [`Trip::check_date_conflicts`] first if the caller wants a warning.
    pub fn set_dates(&mut self, start: Option<Timestamp>, end: Option<Timestamp>) {
        self.start_date = start;
        self.end_date = end;
    }

    // ── Read access ─────────────────────────────────────────────────────

    pub fn transportation(&self) -> &[Transportation] {
        &self.transportation
    }

    pub fn lodging(&self) -> &[Lodging] {
        &self.lodging
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Every record, transportation first, then lodging, then activities.
    pub fn iter_activities(&self) -> impl Iterator<Item = &dyn TripActivity> + '_ {
        let transportation = self.transportation.iter().map(|t| t as &dyn TripActivity);
        let lodging = self.lodging.iter().map(|l| l as &dyn TripActivity);
        let activities = self.activities.iter().map(|a| a as &dyn TripActivity);
        transportation.chain(lodging).chain(activities)
    }

    /// Every record ordered by start instant; ties keep collection order.
    pub fn sorted_activities(&self) -> Vec<&dyn TripActivity> {
        let mut all: Vec<&dyn TripActivity> = self.iter_activities().collect();
        all.sort_by_key(|a| a.start());
        all
    }

    pub fn activity(&self, reference: ActivityRef) -> Option<&dyn TripActivity> {
        match reference.kind {
            ActivityKind::Transportation => self
                .transportation
                .iter()
                .find(|t| t.id == reference.id)
                .map(|t| t as &dyn TripActivity),
            ActivityKind::Lodging => self
                .lodging
                .iter()
                .find(|l| l.id == reference.id)
                .map(|l| l as &dyn TripActivity),
            ActivityKind::Activity => self
                .activities
                .iter()
                .find(|a| a.id == reference.id)
                .map(|a| a as &dyn TripActivity),
        }
    }

    // ── Mutation ────────────────────────────────────────────────────────

    /// Append a record to the collection of its kind.
    pub fn add_activity(&mut self, record: impl Into<ActivityRecord>) {
        match record.into() {
            ActivityRecord::Transportation(t) => self.transportation.push(t),
            ActivityRecord::Lodging(l) => self.lodging.push(l),
            ActivityRecord::Activity(a) => self.activities.push(a),
        }
        self.date_cache.invalidate();
    }

    /// Remove and return the referenced record.
    pub fn remove_activity(&mut self, reference: ActivityRef) -> Option<ActivityRecord> {
        let removed = match reference.kind {
            ActivityKind::Transportation => {
                take_by_id(&mut self.transportation, reference.id)
                    .map(ActivityRecord::Transportation)
            }
            ActivityKind::Lodging => {
                take_by_id(&mut self.lodging, reference.id).map(ActivityRecord::Lodging)
            }
            ActivityKind::Activity => {
                take_by_id(&mut self.activities, reference.id).map(ActivityRecord::Activity)
            }
        };
        self.date_cache.invalidate();
        removed
    }

    /// Swap in `record` for the record with the same kind and id, keeping its
    /// position. Returns the previous record, or `None` (and leaves the trip
    /// unchanged) if there was no match.
    pub fn replace_activity(
        &mut self,
        record: impl Into<ActivityRecord>,
    ) -> Option<ActivityRecord> {
        let replaced = match record.into() {
            ActivityRecord::Transportation(t) => {
                swap_by_id(&mut self.transportation, t).map(ActivityRecord::Transportation)
            }
            ActivityRecord::Lodging(l) => {
                swap_by_id(&mut self.lodging, l).map(ActivityRecord::Lodging)
            }
            ActivityRecord::Activity(a) => {
                swap_by_id(&mut self.activities, a).map(ActivityRecord::Activity)
            }
        };
        self.date_cache.invalidate();
        replaced
    }

    /// Save an edit session onto the referenced record. Returns false if the
    /// record does not exist.
    pub fn apply_activity_edits(
        &mut self,
        reference: ActivityRef,
        snapshot: &EditSnapshot,
    ) -> bool {
        let applied = match self.activity_mut(reference) {
            Some(record) => {
                record.apply_edits(snapshot);
                true
            }
            None => false,
        };
        self.date_cache.invalidate();
        applied
    }

    /// Record a new attachment on the referenced record. Attachments carry no
    /// instants, so the cached day span stays valid.
    pub fn add_attachment(&mut self, reference: ActivityRef, attachment: FileAttachment) -> bool {
        let added = match reference.kind {
            ActivityKind::Transportation => self
                .transportation
                .iter_mut()
                .find(|t| t.id == reference.id)
                .map(|t| t.attachments.push(attachment)),
            ActivityKind::Lodging => self
                .lodging
                .iter_mut()
                .find(|l| l.id == reference.id)
                .map(|l| l.attachments.push(attachment)),
            ActivityKind::Activity => self
                .activities
                .iter_mut()
                .find(|a| a.id == reference.id)
                .map(|a| a.attachments.push(attachment)),
        }
        .is_some();
        added
    }

    /// Drop every record.
    pub fn clear_activities(&mut self) {
        self.transportation.clear();
        self.lodging.clear();
        self.activities.clear();
        self.date_cache.invalidate();
    }

    fn activity_mut(&mut self, reference: ActivityRef) -> Option<&mut dyn TripActivity> {
        match reference.kind {
            ActivityKind::Transportation => self
                .transportation
                .iter_mut()
                .find(|t| t.id == reference.id)
                .map(|t| t as &mut dyn TripActivity),
            ActivityKind::Lodging => self
                .lodging
                .iter_mut()
                .find(|l| l.id == reference.id)
                .map(|l| l as &mut dyn TripActivity),
            ActivityKind::Activity => self
                .activities
                .iter_mut()
                .find(|a| a.id == reference.id)
                .map(|a| a as &mut dyn TripActivity),
        }
    }

    // ── Aggregates ──────────────────────────────────────────────────────

    /// Sum of every record's cost.
    pub fn total_cost(&self) -> Decimal {
        self.iter_activities().map(|a| a.cost()).sum()
    }

    pub fn total_activity_count(&self) -> usize {
        self.transportation.len() + self.lodging.len() + self.activities.len()
    }

    /// Earliest and latest start/end instant across all records, or `None`
    /// when the trip has no records.
    pub fn actual_date_span(&self) -> Option<DateSpan> {
        DateSpan::from_instants(self.instants())
    }

    /// Day-truncated [`Trip::actual_date_span`], served from cache while the
    /// activity fingerprint is unchanged.
    pub fn cached_date_span(&self) -> Option<DaySpan> {
        self.date_cache
            .get_or_compute(self.fingerprint(), || self.compute_day_span())
    }

    /// Compare a proposed trip range with the days the activities cover.
    ///
    /// Flags a start day later than the first activity day and an end day
    /// earlier than the last activity day. An unset side is not checked.
    /// Returns `None` when the trip has no records or nothing conflicts.
    pub fn check_date_conflicts(
        &self,
        proposed_start: Option<Timestamp>,
        proposed_end: Option<Timestamp>,
    ) -> Option<ConflictReport> {
        if self.total_activity_count() == 0 {
            return None;
        }
        let span = self.cached_date_span()?;

        let mut conflicts = Vec::new();
        if let Some(start) = proposed_start {
            let trip_start = calendar_day(start, &self.calendar);
            if trip_start > span.start {
                conflicts.push(DateConflict::StartsAfterActivities {
                    trip_start,
                    first_activity: span.start,
                });
            }
        }
        if let Some(end) = proposed_end {
            let trip_end = calendar_day(end, &self.calendar);
            if trip_end < span.end {
                conflicts.push(DateConflict::EndsBeforeActivities {
                    trip_end,
                    last_activity: span.end,
                });
            }
        }
        ConflictReport::from_conflicts(conflicts)
    }

    /// Conflicts between the trip's own declared dates and its records.
    pub fn current_date_conflicts(&self) -> Option<ConflictReport> {
        self.check_date_conflicts(self.start_date, self.end_date)
    }

    #[cfg(test)]
    pub(crate) fn date_cache_populated(&self) -> bool {
        self.date_cache.is_populated()
    }

    fn instants(&self) -> impl Iterator<Item = Timestamp> + '_ {
        self.iter_activities().flat_map(|a| [a.start(), a.end()])
    }

    fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of(self.total_activity_count(), self.instants())
    }

    fn compute_day_span(&self) -> Option<DaySpan> {
        let span = DaySpan::from_instants(self.instants(), &self.calendar);
        debug!(
            "Trip {} covers {:?} across {} records",
            self.id,
            span,
            self.total_activity_count()
        );
        span
    }
}

fn take_by_id<T: TripActivity>(records: &mut Vec<T>, id: u64) -> Option<T> {
    let index = records.iter().position(|r| r.id() == id)?;
    Some(records.remove(index))
}

fn swap_by_id<T: TripActivity>(records: &mut [T], record: T) -> Option<T> {
    let slot = records.iter_mut().find(|r| r.id() == record.id())?;
    Some(std::mem::replace(slot, record))
}
