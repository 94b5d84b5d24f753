//! Tests for the models module.

use std::str::FromStr;

use super::*;

fn attraction(id: u64, stop_id: u64, name: &str) -> Attraction {
    Attraction {
        id,
        stop_id,
        name: name.to_string(),
        description: None,
        latitude: None,
        longitude: None,
        duration: None,
        estimated_cost: None,
        currency: None,
        tag: None,
        priority: None,
        order_index: 0,
        planned_date: None,
        planned_time: None,
    }
}

fn stop(id: u64, arrival: &str, departure: &str) -> Stop {
    Stop {
        id,
        city: "Lisbon".to_string(),
        country: "Portugal".to_string(),
        latitude: None,
        longitude: None,
        arrival_date: arrival.to_string(),
        departure_date: departure.to_string(),
        notes: None,
    }
}

#[test]
fn test_priority_from_str() {
    assert_eq!(Priority::from_str("must"), Ok(Priority::Must));
    assert_eq!(Priority::from_str("SHOULD"), Ok(Priority::Should));
    assert_eq!(Priority::from_str("could"), Ok(Priority::Could));
    assert_eq!(Priority::from_str("skip"), Ok(Priority::Skip));
    assert!(Priority::from_str("urgent").is_err());
}

#[test]
fn test_priority_default_is_should() {
    assert_eq!(Priority::default(), Priority::Should);

    let unmarked = attraction(1, 1, "Castle");
    assert_eq!(unmarked.effective_priority(), Priority::Should);

    let mut marked = attraction(2, 1, "Museum");
    marked.priority = Some(Priority::Must);
    assert_eq!(marked.effective_priority(), Priority::Must);
}

#[test]
fn test_priority_round_trip() {
    for tier in [
        Priority::Must,
        Priority::Should,
        Priority::Could,
        Priority::Skip,
    ] {
        assert_eq!(Priority::from_str(tier.as_str()), Ok(tier));
    }
}

#[test]
fn test_priority_serde_lowercase() {
    let json = serde_json::to_string(&Priority::Must).unwrap();
    assert_eq!(json, "\"must\"");
    let parsed: Priority = serde_json::from_str("\"skip\"").unwrap();
    assert_eq!(parsed, Priority::Skip);
}

#[test]
fn test_tag_wire_round_trip() {
    for tag in [
        Tag::Beauty,
        Tag::Cafe,
        Tag::MustSee,
        Tag::Accommodation,
        Tag::Nature,
        Tag::Airport,
        Tag::Food,
        Tag::Attraction,
        Tag::TrainStation,
    ] {
        assert_eq!(Tag::from_str(tag.as_str()), Ok(tag));
        let json = serde_json::to_string(&tag).unwrap();
        let parsed: Tag = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, tag);
    }
}

#[test]
fn test_tag_serde_snake_case() {
    let parsed: Tag = serde_json::from_str("\"train_station\"").unwrap();
    assert_eq!(parsed, Tag::TrainStation);
    assert_eq!(Tag::TrainStation.label(), "Train Station");
}

#[test]
fn test_filter_matches_effective_tier() {
    let mut list = vec![
        attraction(1, 1, "Castle"),
        attraction(2, 1, "Museum"),
        attraction(3, 1, "Viewpoint"),
    ];
    list[1].priority = Some(Priority::Must);
    list[2].priority = Some(Priority::Skip);

    let must = PriorityFilter::Only(Priority::Must).apply(&list);
    assert_eq!(must.len(), 1);
    assert_eq!(must[0].id, 2);

    // The unmarked attraction counts as the default tier
    let should = PriorityFilter::Only(Priority::Should).apply(&list);
    assert_eq!(should.len(), 1);
    assert_eq!(should[0].id, 1);

    let all = PriorityFilter::All.apply(&list);
    assert_eq!(all.len(), 3);
}

#[test]
fn test_filter_is_pure_and_idempotent() {
    let mut list = vec![attraction(1, 1, "Castle"), attraction(2, 1, "Museum")];
    list[0].priority = Some(Priority::Must);
    let before = list.clone();

    let filter = PriorityFilter::Only(Priority::Must);
    let once: Vec<Attraction> = filter.apply(&list).into_iter().cloned().collect();
    let twice: Vec<Attraction> = filter.apply(&once).into_iter().cloned().collect();

    assert_eq!(once, twice);
    // The input list is untouched: same priorities, same order
    assert_eq!(list, before);
}

#[test]
fn test_filter_from_str() {
    assert_eq!(PriorityFilter::from_str("all"), Ok(PriorityFilter::All));
    assert_eq!(
        PriorityFilter::from_str("could"),
        Ok(PriorityFilter::Only(Priority::Could))
    );
    assert!(PriorityFilter::from_str("none").is_err());
}

#[test]
fn test_attraction_serde_camel_case() {
    let mut poi = attraction(7, 3, "Tram 28");
    poi.order_index = 4;
    poi.planned_date = Some("2025-06-02".to_string());
    poi.estimated_cost = Some(3.5);

    let json = serde_json::to_value(&poi).unwrap();
    assert_eq!(json["stopId"], 3);
    assert_eq!(json["orderIndex"], 4);
    assert_eq!(json["plannedDate"], "2025-06-02");
    assert_eq!(json["estimatedCost"], 3.5);
    // Absent optionals are omitted from the wire entirely
    assert!(json.get("duration").is_none());

    let back: Attraction = serde_json::from_value(json).unwrap();
    assert_eq!(back, poi);
}

#[test]
fn test_attraction_update_from_attraction() {
    let mut poi = attraction(7, 3, "Tram 28");
    poi.order_index = 2;
    poi.priority = Some(Priority::Could);
    poi.planned_date = Some("2025-06-02".to_string());

    let update = AttractionUpdate::from(&poi);
    assert_eq!(update.id, 7);
    assert_eq!(update.stop_id, 3);
    assert_eq!(update.order_index, 2);
    assert_eq!(update.priority, Priority::Could);
    assert_eq!(update.planned_date.as_deref(), Some("2025-06-02"));
}

#[test]
fn test_attraction_update_defaults_unmarked_priority() {
    let poi = attraction(7, 3, "Tram 28");
    let update = AttractionUpdate::from(&poi);
    assert_eq!(update.priority, Priority::Should);
    assert_eq!(update.planned_date, None);

    // An absent planned date never reaches the wire
    let json = serde_json::to_value(&update).unwrap();
    assert!(json.get("plannedDate").is_none());
    assert_eq!(json["stopId"], 3);
}

#[test]
fn test_journey_snapshot_from_json() {
    let payload = r#"{
        "stops": [
            {
                "id": 1,
                "city": "Lisbon",
                "country": "Portugal",
                "arrivalDate": "2025-06-01",
                "departureDate": "2025-06-03"
            }
        ],
        "attractionsByStop": {
            "1": [
                {
                    "id": 10,
                    "stopId": 1,
                    "name": "Belém Tower",
                    "orderIndex": 0,
                    "priority": "must",
                    "tag": "must_see"
                }
            ]
        }
    }"#;

    let snapshot = JourneySnapshot::from_json(payload).expect("should parse");
    assert_eq!(snapshot.stops.len(), 1);
    assert_eq!(snapshot.attraction_count(), 1);

    let poi = &snapshot.attractions_by_stop[&1][0];
    assert_eq!(poi.name, "Belém Tower");
    assert_eq!(poi.priority, Some(Priority::Must));
    assert_eq!(poi.tag, Some(Tag::MustSee));
}

#[test]
fn test_journey_snapshot_rejects_malformed_json() {
    assert!(JourneySnapshot::from_json("{not json").is_err());
}

#[test]
fn test_stop_day_span() {
    assert_eq!(stop(1, "2025-06-01", "2025-06-03").day_span(), Some(3));
    assert_eq!(stop(1, "2025-06-01", "2025-06-01").day_span(), Some(1));
    // Month boundary
    assert_eq!(stop(1, "2025-06-30", "2025-07-02").day_span(), Some(3));
    // Inverted and unparsable ranges have no span
    assert_eq!(stop(1, "2025-06-03", "2025-06-01").day_span(), None);
    assert_eq!(stop(1, "soon", "2025-06-01").day_span(), None);
}

#[test]
fn test_stop_decodes_timestamp_dates() {
    let stop = stop(1, "2025-06-01T00:00:00.000Z", "2025-06-03T00:00:00.000Z");
    assert_eq!(stop.day_span(), Some(3));
}

#[test]
fn test_attraction_planned_day() {
    let mut poi = attraction(1, 1, "Castle");
    assert_eq!(poi.planned_day(), None);

    poi.planned_date = Some("2025-06-02".to_string());
    assert_eq!(poi.planned_day(), crate::day::day_key("2025-06-02"));

    poi.planned_date = Some("someday".to_string());
    assert_eq!(poi.planned_day(), None);
}
