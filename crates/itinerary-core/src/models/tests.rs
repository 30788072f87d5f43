#[cfg(test)]
mod trip_tests {
    use jiff::{civil::date, tz::TimeZone, Timestamp};
    use rust_decimal::Decimal;

    use crate::models::{
        span::DaySpan, Activity, ActivityKind, ActivityRecord, ActivityRef, Address, DateConflict,
        EditSnapshot, FileAttachment, Lodging, PaymentStatus, Transportation, TransportationType,
        Trip, TripActivity,
    };

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    fn create_test_trip() -> Trip {
        Trip::new(1, "Test Trip", ts("2023-12-01T00:00:00Z")).with_calendar(TimeZone::UTC)
    }

    fn create_test_transportation(id: u64, start: &str, end: &str) -> Transportation {
        Transportation {
            id,
            trip_id: 1,
            name: "Flight LH 1234".to_string(),
            transportation_type: TransportationType::Plane,
            start: ts(start),
            start_tz_id: Some("Europe/Berlin".to_string()),
            end: ts(end),
            end_tz_id: Some("Europe/Lisbon".to_string()),
            cost: Decimal::new(24999, 2),
            payment_status: PaymentStatus::PaidInFull,
            confirmation: "ABC123".to_string(),
            notes: "Window seat".to_string(),
            organization_id: Some(4),
            attachments: vec![],
        }
    }

    fn create_test_lodging(id: u64, start: &str, end: &str) -> Lodging {
        Lodging {
            id,
            trip_id: 1,
            name: "Hotel Avenida".to_string(),
            start: ts(start),
            check_in_tz_id: Some("Europe/Lisbon".to_string()),
            end: ts(end),
            check_out_tz_id: Some("Europe/Lisbon".to_string()),
            cost: Decimal::new(48000, 2),
            payment_status: PaymentStatus::Deposit,
            reservation: "RES-778".to_string(),
            notes: "Late check-in".to_string(),
            organization_id: None,
            custom_location_name: "Avenida da Liberdade".to_string(),
            custom_address: Some(Address {
                city: Some("Lisbon".to_string()),
                country: Some("Portugal".to_string()),
                ..Default::default()
            }),
            hide_location: true,
            attachments: vec![FileAttachment {
                id: 9,
                file_name: "booking.pdf".to_string(),
                mime_type: "application/pdf".to_string(),
                file_size: 2048,
                created_at: ts("2023-12-02T00:00:00Z"),
            }],
        }
    }

    fn create_test_activity(id: u64, start: &str, end: &str) -> Activity {
        Activity {
            id,
            trip_id: 1,
            name: "Fado night".to_string(),
            start: ts(start),
            start_tz_id: Some("Europe/Lisbon".to_string()),
            end: ts(end),
            end_tz_id: None,
            cost: Decimal::new(3550, 2),
            payment_status: PaymentStatus::Unpaid,
            reservation: "TABLE-4".to_string(),
            notes: String::new(),
            organization_id: Some(2),
            custom_location_name: "Clube de Fado".to_string(),
            custom_address: None,
            hide_location: false,
            attachments: vec![],
        }
    }

    /// Activities spanning 2024-01-01 .. 2024-01-10 (UTC days).
    fn create_populated_trip() -> Trip {
        let mut trip = create_test_trip();
        trip.add_activity(create_test_transportation(
            1,
            "2024-01-01T08:00:00Z",
            "2024-01-01T11:00:00Z",
        ));
        trip.add_activity(create_test_lodging(1, "2024-01-01T15:00:00Z", "2024-01-10T11:00:00Z"));
        trip.add_activity(create_test_activity(1, "2024-01-05T20:00:00Z", "2024-01-05T23:00:00Z"));
        trip
    }

    fn recomputed_span(trip: &Trip) -> Option<DaySpan> {
        DaySpan::from_instants(
            trip.iter_activities().flat_map(|a| [a.start(), a.end()]),
            trip.calendar(),
        )
    }

    #[test]
    fn test_empty_trip_has_no_spans_or_conflicts() {
        let trip = create_test_trip();

        assert_eq!(trip.total_activity_count(), 0);
        assert_eq!(trip.total_cost(), Decimal::ZERO);
        assert_eq!(trip.actual_date_span(), None);
        assert_eq!(trip.cached_date_span(), None);
        assert_eq!(trip.check_date_conflicts(None, None), None);
        assert_eq!(
            trip.check_date_conflicts(
                Some(ts("2030-01-01T00:00:00Z")),
                Some(ts("1990-01-01T00:00:00Z"))
            ),
            None
        );
    }

    #[test]
    fn test_totals_across_variants() {
        let trip = create_populated_trip();

        assert_eq!(trip.total_activity_count(), 3);
        // 249.99 + 480.00 + 35.50
        assert_eq!(trip.total_cost(), Decimal::new(76549, 2));
    }

    #[test]
    fn test_actual_date_span_keeps_full_precision() {
        let trip = create_populated_trip();
        let span = trip.actual_date_span().unwrap();

        assert_eq!(span.start, ts("2024-01-01T08:00:00Z"));
        assert_eq!(span.end, ts("2024-01-10T11:00:00Z"));
    }

    #[test]
    fn test_cached_date_span_truncates_to_days() {
        let mut trip = create_test_trip();
        trip.add_activity(create_test_activity(1, "2024-01-01T23:50:00Z", "2024-01-02T00:10:00Z"));

        let span = trip.cached_date_span().unwrap();
        assert_eq!(span.start, date(2024, 1, 1));
        assert_eq!(span.end, date(2024, 1, 2));
    }

    #[test]
    fn test_cached_date_span_is_idempotent() {
        let trip = create_populated_trip();

        let first = trip.cached_date_span();
        let second = trip.cached_date_span();
        assert_eq!(first, second);
        assert_eq!(
            first,
            Some(DaySpan {
                start: date(2024, 1, 1),
                end: date(2024, 1, 10),
            })
        );
    }

    #[test]
    fn test_cache_stays_coherent_across_mutations() {
        let mut trip = create_populated_trip();
        assert_eq!(trip.cached_date_span(), recomputed_span(&trip));

        trip.add_activity(create_test_activity(2, "2023-12-28T10:00:00Z", "2023-12-28T12:00:00Z"));
        assert_eq!(trip.cached_date_span(), recomputed_span(&trip));
        assert_eq!(trip.cached_date_span().unwrap().start, date(2023, 12, 28));

        let removed = trip.remove_activity(ActivityRef::new(ActivityKind::Lodging, 1));
        assert!(removed.is_some());
        assert_eq!(trip.cached_date_span(), recomputed_span(&trip));
        assert_eq!(trip.cached_date_span().unwrap().end, date(2024, 1, 5));

        let mut moved =
            create_test_transportation(1, "2024-02-01T08:00:00Z", "2024-02-01T10:00:00Z");
        moved.name = "Return flight".to_string();
        assert!(trip.replace_activity(moved).is_some());
        assert_eq!(trip.cached_date_span(), recomputed_span(&trip));
        assert_eq!(trip.cached_date_span().unwrap().end, date(2024, 2, 1));

        trip.clear_activities();
        assert_eq!(trip.cached_date_span(), None);
    }

    #[test]
    fn test_apply_activity_edits_invalidates_cache() {
        let mut trip = create_populated_trip();
        let reference = ActivityRef::new(ActivityKind::Activity, 1);
        assert_eq!(trip.cached_date_span().unwrap().end, date(2024, 1, 10));

        let mut snapshot = trip.activity(reference).unwrap().copy_for_editing();
        snapshot.end = ts("2024-01-20T12:00:00Z");
        assert!(trip.apply_activity_edits(reference, &snapshot));

        assert_eq!(trip.cached_date_span().unwrap().end, date(2024, 1, 20));
        assert_eq!(trip.cached_date_span(), recomputed_span(&trip));
    }

    #[test]
    fn test_mutations_on_missing_records_are_reported() {
        let mut trip = create_populated_trip();
        let missing = ActivityRef::new(ActivityKind::Transportation, 99);

        assert!(trip.remove_activity(missing).is_none());
        let stray = create_test_transportation(99, "2024-01-01T00:00:00Z", "2024-01-01T01:00:00Z");
        assert!(trip.replace_activity(stray).is_none());
        let blank = EditSnapshot::blank(ActivityKind::Transportation);
        assert!(!trip.apply_activity_edits(missing, &blank));
        assert_eq!(trip.total_activity_count(), 3);
    }

    #[test]
    fn test_conflict_when_trip_starts_after_activities() {
        let trip = create_populated_trip();

        let report = trip
            .check_date_conflicts(
                Some(ts("2024-01-05T00:00:00Z")),
                Some(ts("2024-01-15T00:00:00Z")),
            )
            .expect("start conflict expected");

        assert_eq!(
            report.conflicts(),
            &[DateConflict::StartsAfterActivities {
                trip_start: date(2024, 1, 5),
                first_activity: date(2024, 1, 1),
            }]
        );
        assert!(report.starts_too_late());
        assert!(!report.ends_too_early());

        let message = report.message();
        assert!(message.contains("2024-01-05"));
        assert!(message.contains("2024-01-01"));
    }

    #[test]
    fn test_conflict_when_trip_ends_before_activities() {
        let trip = create_populated_trip();

        let report = trip
            .check_date_conflicts(
                Some(ts("2024-01-01T00:00:00Z")),
                Some(ts("2024-01-08T00:00:00Z")),
            )
            .expect("end conflict expected");

        assert!(report.ends_too_early());
        assert!(!report.starts_too_late());
        assert!(report.message().contains("2024-01-08"));
        assert!(report.message().contains("2024-01-10"));
    }

    #[test]
    fn test_both_conflicts_are_combined() {
        let trip = create_populated_trip();

        let report = trip
            .check_date_conflicts(
                Some(ts("2024-01-03T00:00:00Z")),
                Some(ts("2024-01-04T00:00:00Z")),
            )
            .unwrap();

        assert_eq!(report.conflicts().len(), 2);
        assert_eq!(report.message().lines().count(), 2);
    }

    #[test]
    fn test_same_day_boundaries_do_not_conflict() {
        let trip = create_populated_trip();

        // Trip starts late on the first activity day and ends early on the
        // last; days match, so nothing is flagged.
        assert_eq!(
            trip.check_date_conflicts(
                Some(ts("2024-01-01T23:50:00Z")),
                Some(ts("2024-01-10T00:10:00Z"))
            ),
            None
        );
    }

    #[test]
    fn test_unset_sides_are_not_checked() {
        let trip = create_populated_trip();

        assert_eq!(trip.check_date_conflicts(None, None), None);
        assert!(trip
            .check_date_conflicts(None, Some(ts("2024-01-02T00:00:00Z")))
            .unwrap()
            .ends_too_early());
        assert!(trip
            .check_date_conflicts(Some(ts("2024-01-09T00:00:00Z")), None)
            .unwrap()
            .starts_too_late());
    }

    #[test]
    fn test_current_date_conflicts_use_declared_dates() {
        let mut trip = create_populated_trip();
        trip.set_dates(
            Some(ts("2024-01-02T00:00:00Z")),
            Some(ts("2024-01-12T00:00:00Z")),
        );

        assert!(trip.has_date_range());
        assert!(trip.current_date_conflicts().unwrap().starts_too_late());

        trip.set_dates(None, Some(ts("2024-01-12T00:00:00Z")));
        assert!(!trip.has_date_range());
        assert_eq!(trip.date_range(), None);
        assert_eq!(trip.current_date_conflicts(), None);
    }

    #[test]
    fn test_changing_calendar_recomputes_days() {
        let mut trip = create_test_trip();
        trip.add_activity(create_test_activity(1, "2024-01-02T03:00:00Z", "2024-01-02T04:00:00Z"));
        assert_eq!(trip.cached_date_span().unwrap().start, date(2024, 1, 2));

        trip.set_calendar(TimeZone::get("America/Los_Angeles").unwrap());
        assert_eq!(trip.cached_date_span().unwrap().start, date(2024, 1, 1));
    }

    #[test]
    fn test_sorted_activities_orders_by_start() {
        let trip = create_populated_trip();
        let names: Vec<&str> = trip
            .sorted_activities()
            .into_iter()
            .map(|a| a.name())
            .collect();
        assert_eq!(names, vec!["Flight LH 1234", "Hotel Avenida", "Fado night"]);
    }

    #[test]
    fn test_edit_round_trip_is_identity_for_every_variant() {
        let transportation =
            create_test_transportation(1, "2024-01-01T08:00:00Z", "2024-01-01T11:00:00Z");
        let mut edited = transportation.clone();
        let snapshot = edited.copy_for_editing();
        edited.apply_edits(&snapshot);
        assert_eq!(edited, transportation);
        assert_eq!(edited.cost.to_string(), "249.99");
        assert_eq!(edited.confirmation, "ABC123");

        let lodging = create_test_lodging(1, "2024-01-01T15:00:00Z", "2024-01-10T11:00:00Z");
        let mut edited = lodging.clone();
        let snapshot = edited.copy_for_editing();
        edited.apply_edits(&snapshot);
        assert_eq!(edited, lodging);
        assert_eq!(edited.cost.to_string(), "480.00");
        assert_eq!(edited.reservation, "RES-778");

        let activity = create_test_activity(1, "2024-01-05T20:00:00Z", "2024-01-05T23:00:00Z");
        let mut edited = activity.clone();
        let snapshot = edited.copy_for_editing();
        edited.apply_edits(&snapshot);
        assert_eq!(edited, activity);
        assert_eq!(edited.cost.to_string(), "35.50");
        assert_eq!(edited.reservation, "TABLE-4");
    }

    #[test]
    fn test_edits_persist_cost_and_confirmation() {
        let mut lodging = create_test_lodging(1, "2024-01-01T15:00:00Z", "2024-01-10T11:00:00Z");
        let mut snapshot = lodging.copy_for_editing();
        snapshot.cost = Decimal::new(51025, 2);
        snapshot.confirmation = "RES-999".to_string();
        snapshot.start_tz_id = Some("Atlantic/Azores".to_string());
        lodging.apply_edits(&snapshot);

        assert_eq!(lodging.cost, Decimal::new(51025, 2));
        assert_eq!(lodging.reservation, "RES-999");
        assert_eq!(lodging.check_in_tz_id.as_deref(), Some("Atlantic/Azores"));
        assert_eq!(lodging.check_out_tz_id.as_deref(), Some("Europe/Lisbon"));
    }

    #[test]
    fn test_snapshot_uses_generic_field_names() {
        let lodging = create_test_lodging(1, "2024-01-01T15:00:00Z", "2024-01-10T11:00:00Z");
        let snapshot = lodging.copy_for_editing();

        assert_eq!(snapshot.kind, ActivityKind::Lodging);
        assert_eq!(snapshot.start_tz_id, lodging.check_in_tz_id);
        assert_eq!(snapshot.end_tz_id, lodging.check_out_tz_id);
        assert_eq!(snapshot.confirmation, lodging.reservation);
    }

    #[test]
    fn test_transportation_ignores_custom_location() {
        let mut transportation =
            create_test_transportation(1, "2024-01-01T08:00:00Z", "2024-01-01T11:00:00Z");
        let before = transportation.clone();

        transportation.set_custom_location_name("Airport".to_string());
        transportation.set_custom_address(Some(Address::default()));
        transportation.set_hide_location(true);

        assert_eq!(transportation, before);
        assert!(!transportation.supports_custom_location());
        assert_eq!(transportation.custom_location_name(), None);
        assert_eq!(transportation.custom_address(), None);
        assert!(!transportation.hide_location());
        assert_eq!(transportation.confirmation_label(), "Confirmation");
    }

    #[test]
    fn test_lodging_and_activity_ignore_transportation_type() {
        let mut lodging = create_test_lodging(1, "2024-01-01T15:00:00Z", "2024-01-10T11:00:00Z");
        let before = lodging.clone();
        lodging.set_transportation_type(TransportationType::Train);
        assert_eq!(lodging, before);
        assert_eq!(lodging.transportation_type(), None);
        assert_eq!(lodging.confirmation_label(), "Reservation");

        let mut activity = create_test_activity(1, "2024-01-05T20:00:00Z", "2024-01-05T23:00:00Z");
        let before = activity.clone();
        activity.set_transportation_type(TransportationType::Ferry);
        assert_eq!(activity, before);
        assert_eq!(activity.transportation_type(), None);
        assert!(activity.supports_custom_location());
    }

    #[test]
    fn test_supported_setters_take_effect() {
        let mut activity = create_test_activity(1, "2024-01-05T20:00:00Z", "2024-01-05T23:00:00Z");
        activity.set_hide_location(true);
        activity.set_custom_location_name("Alfama".to_string());
        assert!(activity.hide_location());
        assert_eq!(activity.custom_location_name(), Some("Alfama"));

        let mut transportation =
            create_test_transportation(1, "2024-01-01T08:00:00Z", "2024-01-01T11:00:00Z");
        transportation.set_transportation_type(TransportationType::Train);
        assert_eq!(
            transportation.transportation_type(),
            Some(TransportationType::Train)
        );
    }

    #[test]
    fn test_duration_can_be_negative() {
        let activity = create_test_activity(1, "2024-01-05T20:00:00Z", "2024-01-05T18:30:00Z");
        assert_eq!(activity.duration().as_secs(), -5400);
    }

    #[test]
    fn test_record_from_snapshot_builds_requested_kind() {
        let mut snapshot = EditSnapshot::blank(ActivityKind::Lodging);
        snapshot.name = "Cabin".to_string();
        snapshot.confirmation = "R-1".to_string();
        snapshot.transportation_type = TransportationType::Bus;

        let record = ActivityRecord::from_snapshot(7, &snapshot);
        let ActivityRecord::Lodging(lodging) = record else {
            panic!("expected lodging");
        };
        assert_eq!(lodging.trip_id, 7);
        assert_eq!(lodging.name, "Cabin");
        assert_eq!(lodging.reservation, "R-1");
    }

    #[test]
    fn test_add_attachment_targets_record() {
        let mut trip = create_populated_trip();
        let reference = ActivityRef::new(ActivityKind::Transportation, 1);
        let attachment = FileAttachment {
            id: 1,
            file_name: "ticket.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            file_size: 10,
            created_at: ts("2024-01-01T00:00:00Z"),
        };

        let span = trip.cached_date_span();
        assert!(trip.add_attachment(reference, attachment.clone()));
        assert!(trip.date_cache_populated());
        assert_eq!(trip.cached_date_span(), span);
        assert_eq!(trip.activity(reference).unwrap().attachments().len(), 1);
        let stray = ActivityRef::new(ActivityKind::Activity, 42);
        assert!(!trip.add_attachment(stray, attachment));
    }

    #[test]
    fn test_trip_json_skips_cache() {
        let trip = create_populated_trip();
        let _ = trip.cached_date_span();

        let json = serde_json::to_string(&trip).unwrap();
        assert!(!json.contains("date_cache"));

        let restored: Trip = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.total_activity_count(), 3);
        assert_eq!(restored.total_cost(), trip.total_cost());
    }
}
