use super::*;
use crate::model::PlacedObject;

fn sample_state() -> SimulationState {
    SimulationState {
        objects: vec![
            PlacedObject { distance: -73.25, weight: 4, id: 1.0 },
            PlacedObject { distance: 0.0, weight: 10, id: 2.0 },
            PlacedObject { distance: 199.5, weight: 1, id: 1_700_000_000_000.5 },
        ],
        angle: 15.415,
    }
}

#[test]
fn empty_store_loads_defaults() {
    let store = MemoryStore::default();
    assert_eq!(store.load(), SimulationState::default());
}

#[test]
fn save_then_load_round_trips() {
    let store = MemoryStore::default();
    let state = sample_state();
    store.save(&state);
    assert_eq!(store.load(), state);
}

#[test]
fn empty_state_round_trips() {
    let store = MemoryStore::default();
    store.save(&SimulationState::default());
    assert!(store.get_item(STORAGE_KEY).is_some());
    assert_eq!(store.load(), SimulationState::default());
}

#[test]
fn clones_share_slots() {
    let store = MemoryStore::default();
    let other = store.clone();
    store.save(&sample_state());
    assert_eq!(other.load(), sample_state());
}

#[test]
fn corrupt_slot_loads_defaults() {
    let store = MemoryStore::default();
    store.set_item(STORAGE_KEY, "{not json").unwrap();
    assert_eq!(store.load(), SimulationState::default());
}

#[test]
fn wrong_field_type_loads_defaults() {
    let store = MemoryStore::default();
    store.set_item(STORAGE_KEY, r#"{"objects": 5}"#).unwrap();
    assert_eq!(store.load(), SimulationState::default());
}

#[test]
fn missing_angle_keeps_objects() {
    let raw = r#"{"objects":[{"distance":20,"weight":2,"id":9}]}"#;
    let state = decode(raw).unwrap();
    assert_eq!(state.objects.len(), 1);
    assert_eq!(state.objects[0].distance, 20.0);
    assert_eq!(state.angle, 0.0);
}

#[test]
fn out_of_range_angle_is_clamped() {
    let state = decode(r#"{"objects":[],"angle":-95}"#).unwrap();
    assert_eq!(state.angle, -30.0);
}

#[test]
fn decode_reports_malformed_input() {
    assert!(matches!(decode("42"), Err(PersistError::Decode(_))));
}

#[test]
fn encode_uses_storage_shape() {
    let raw = encode(&SimulationState::default()).unwrap();
    assert_eq!(raw, r#"{"objects":[],"angle":0.0}"#);
}

#[test]
fn falsy_angle_keeps_objects() {
    let store = MemoryStore::default();
    store
        .set_item(STORAGE_KEY, r#"{"objects":[{"distance":20,"weight":2,"id":9}],"angle":false}"#)
        .unwrap();
    let state = store.load();
    assert_eq!(state.objects.len(), 1);
    assert_eq!(state.objects[0].weight, 2);
    assert_eq!(state.angle, 0.0);
}

#[test]
fn falsy_objects_keep_angle() {
    let store = MemoryStore::default();
    for objects in ["0", "false", r#""""#, "null"] {
        let raw = format!(r#"{{"objects":{objects},"angle":12}}"#);
        store.set_item(STORAGE_KEY, &raw).unwrap();
        let state = store.load();
        assert!(state.objects.is_empty(), "objects {objects}");
        assert_eq!(state.angle, 12.0, "objects {objects}");
    }
}

#[test]
fn unparseable_field_resets_only_itself() {
    let state = decode(r#"{"objects":[{"distance":"far"}],"angle":"tilted"}"#).unwrap();
    assert_eq!(state, SimulationState::default());

    let state = decode(r#"{"objects":{"a":1},"angle":-7.5}"#).unwrap();
    assert!(state.objects.is_empty());
    assert_eq!(state.angle, -7.5);
}
