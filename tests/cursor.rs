use rbmap::{Error, Map};

fn sample() -> Map<i32, i32> {
    let mut map = Map::new();
    for key in [5, 3, 8, 1, 4, 7, 9] {
        map.insert(key, key * 10);
    }
    map
}

fn keys_by_cursor(map: &Map<i32, i32>) -> Vec<i32> {
    let mut keys = Vec::new();
    let mut cur = map.begin();
    while cur != map.end() {
        keys.push(*map.key_value(cur).unwrap().0);
        cur = map.next(cur).unwrap();
    }
    keys
}

#[test]
fn forward_walk_visits_keys_in_order() {
    assert_eq!(keys_by_cursor(&sample()), [1, 3, 4, 5, 7, 8, 9]);
}

#[test]
fn backward_walk_visits_keys_in_reverse() {
    let map = sample();
    let mut keys = Vec::new();
    let mut cur = map.end();
    while cur != map.begin() {
        cur = map.prev(cur).unwrap();
        keys.push(*map.key_value(cur).unwrap().0);
    }
    assert_eq!(keys, [9, 8, 7, 5, 4, 3, 1]);
}

#[test]
fn empty_map_has_coincident_ends() {
    let map: Map<i32, ()> = Map::new();
    assert_eq!(map.begin(), map.end());
    assert_eq!(map.at(&1), Err(Error::KeyNotFound));
    assert_eq!(map.next(map.end()), Err(Error::InvalidCursor));
    assert_eq!(map.prev(map.end()), Err(Error::InvalidCursor));
}

#[test]
fn walk_errors_at_the_ends() {
    let map = sample();
    assert_eq!(map.next(map.end()), Err(Error::InvalidCursor));
    assert_eq!(map.prev(map.begin()), Err(Error::InvalidCursor));

    let last = map.prev(map.end()).unwrap();
    assert_eq!(map.key_value(last), Ok((&9, &90)));
}

#[test]
fn duplicate_insert_keeps_the_original_value() {
    let mut map = Map::new();

    let (first, inserted) = map.insert(1, "a");
    assert!(inserted);

    let (second, inserted) = map.insert(1, "b");
    assert!(!inserted);

    assert_eq!(first, second);
    assert_eq!(map.len(), 1);
    assert_eq!(map[&1], "a");
}

#[test]
fn removal_invalidates_only_the_removed_cursor() {
    let mut map = sample();
    let three = map.find(&3);
    let four = map.find(&4);
    let five = map.find(&5);

    assert_eq!(map.remove_at(four), Ok((4, 40)));
    assert_eq!(map.key_value(four), Err(Error::InvalidCursor));
    assert_eq!(map.next(four), Err(Error::InvalidCursor));

    assert_eq!(map.key_value(three), Ok((&3, &30)));
    assert_eq!(map.key_value(five), Ok((&5, &50)));
    assert_eq!(map.next(three), Ok(five));
}

#[test]
fn two_child_removal_preserves_the_predecessor_cursor() {
    let mut map = sample();
    // 5 sits at the root with both children present; 4 is its in-order
    // predecessor and is relinked into 5's place during the removal.
    let four = map.find(&4);

    assert_eq!(map.remove_at(map.find(&5)), Ok((5, 50)));
    assert_eq!(map.key_value(four), Ok((&4, &40)));
    assert_eq!(keys_by_cursor(&map), [1, 3, 4, 7, 8, 9]);
}

#[test]
fn cursors_are_rejected_by_other_maps() {
    let map = sample();
    let other = sample();
    let cur = map.find(&3);

    assert_eq!(other.key_value(cur), Err(Error::InvalidCursor));
    assert_eq!(other.next(cur), Err(Error::InvalidCursor));

    let clone = map.clone();
    assert_eq!(clone.key_value(cur), Err(Error::InvalidCursor));
    assert_eq!(map.key_value(cur), Ok((&3, &30)));
}

#[test]
fn stale_cursors_stay_invalid_after_slot_reuse() {
    let mut map = sample();
    let cur = map.find(&9);

    assert_eq!(map.remove_at(cur), Ok((9, 90)));
    // The freed slot is recycled for the new entry.
    map.insert(10, 100);

    assert_eq!(map.key_value(cur), Err(Error::InvalidCursor));
    assert_eq!(map.remove_at(cur), Err(Error::InvalidCursor));
    assert_eq!(map.get(&10), Some(&100));
}

#[test]
fn clear_invalidates_all_cursors() {
    let mut map = sample();
    let cur = map.find(&5);

    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.key_value(cur), Err(Error::InvalidCursor));

    map.insert(5, 50);
    assert_eq!(map.key_value(cur), Err(Error::InvalidCursor));
}

#[test]
fn moving_the_map_preserves_cursors() {
    let map = sample();
    let cur = map.find(&7);

    let moved = map;
    assert_eq!(moved.key_value(cur), Ok((&7, &70)));
}

#[test]
fn value_mut_updates_through_a_cursor() {
    let mut map = sample();
    let cur = map.find(&3);

    *map.value_mut(cur).unwrap() = -3;
    assert_eq!(map.get(&3), Some(&-3));
    assert_eq!(map.value_mut(map.end()), Err(Error::InvalidCursor));
}

#[test]
fn get_or_insert_default_inserts_once() {
    let mut map: Map<&str, i32> = Map::new();

    *map.get_or_insert_default("hits") += 1;
    *map.get_or_insert_default("hits") += 1;

    assert_eq!(map.get(&"hits"), Some(&2));
    assert_eq!(map.len(), 1);
}

#[test]
fn bounds_track_mutations() {
    let mut map = sample();
    assert_eq!(map.first(), Some((&1, &10)));
    assert_eq!(map.last(), Some((&9, &90)));

    assert_eq!(map.remove_first(), Some((1, 10)));
    assert_eq!(map.remove_last(), Some((9, 90)));
    assert_eq!(map.first(), Some((&3, &30)));
    assert_eq!(map.last(), Some((&8, &80)));
}

#[test]
fn erase_via_find_removes_the_entry() {
    let mut map: Map<i32, String> = Map::new();
    for key in [5, 3, 8, 1, 4, 7, 9] {
        map.insert(key, String::default());
    }

    let cur = map.find(&8);
    assert_eq!(map.key_value(cur), Ok((&8, &String::new())));

    assert!(map.remove_at(cur).is_ok());
    assert_eq!(map.find(&8), map.end());
    assert_eq!(map.len(), 6);
}

#[test]
fn round_trip_returns_to_empty() {
    let mut map = sample();
    for key in [5, 3, 8, 1, 4, 7, 9] {
        assert!(map.remove(&key).is_some());
    }

    assert!(map.is_empty());
    assert_eq!(map.begin(), map.end());

    // The map remains fully usable after draining.
    map.insert(2, 20);
    assert_eq!(map.first(), Some((&2, &20)));
}
