use quickcheck_macros::quickcheck;
use rbmap::{Error, Map};

#[quickcheck]
fn len_matches_distinct_keys(pairs: Vec<(u32, u16)>) -> bool {
    let map: Map<u32, u16> = pairs.iter().copied().collect();
    let mut keys: Vec<u32> = pairs.iter().map(|&(key, _)| key).collect();
    keys.sort_unstable();
    keys.dedup();
    map.len() == keys.len() && map.is_empty() == keys.is_empty()
}

#[quickcheck]
fn collect_keeps_the_first_value_per_key(pairs: Vec<(u32, u16)>) -> bool {
    let map: Map<u32, u16> = pairs.iter().copied().collect();
    pairs.iter().all(|&(key, _)| {
        let first = pairs.iter().find(|&&(other, _)| other == key).map(|&(_, v)| v);
        map.get(&key).copied() == first
    })
}

#[quickcheck]
fn iter_ascends(map: Map<u32, u16>) -> bool {
    let keys: Vec<u32> = map.iter().map(|(&key, _)| key).collect();
    keys.len() == map.len() && keys.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn reverse_iteration_mirrors_forward(map: Map<u32, u16>) -> bool {
    let forward: Vec<(u32, u16)> = map.iter().map(|(&k, &v)| (k, v)).collect();
    let mut backward: Vec<(u32, u16)> = map.iter().rev().map(|(&k, &v)| (k, v)).collect();
    backward.reverse();
    forward == backward
}

#[quickcheck]
fn into_iter_agrees_with_iter(map: Map<u32, u16>) -> bool {
    let borrowed: Vec<(u32, u16)> = map.iter().map(|(&k, &v)| (k, v)).collect();
    let owned: Vec<(u32, u16)> = map.into_iter().collect();
    owned == borrowed
}

#[quickcheck]
fn size_hint_is_exact(map: Map<u32, u16>) -> bool {
    let mut iter = map.iter();
    let mut remaining = map.len();
    loop {
        if iter.size_hint() != (remaining, Some(remaining)) {
            return false;
        }
        if iter.next().is_none() {
            return remaining == 0;
        }
        remaining -= 1;
    }
}

#[quickcheck]
fn find_agrees_with_contains(map: Map<u32, u16>, key: u32) -> bool {
    let cur = map.find(&key);
    if map.contains_key(&key) {
        map.count(&key) == 1
            && map.key_value(cur).map(|(&k, _)| k) == Ok(key)
            && map.at(&key) == Ok(map.key_value(cur).unwrap().1)
    } else {
        map.count(&key) == 0
            && cur == map.end()
            && map.at(&key) == Err(Error::KeyNotFound)
    }
}

#[quickcheck]
fn remove_removes_only_its_key(map: Map<u32, u16>, key: u32) -> bool {
    let mut map = map;
    let len = map.len();
    let expected = map.get(&key).copied();

    let removed = map.remove(&key);

    removed.map(|(_, v)| v) == expected
        && !map.contains_key(&key)
        && map.len() == len - removed.is_some() as usize
}

#[quickcheck]
fn insert_then_remove_at_restores_the_map(map: Map<u32, u16>, key: u32, value: u16) -> bool {
    let mut mutated = map.clone();
    let (cur, inserted) = mutated.insert(key, value);
    if !inserted {
        return map == mutated;
    }
    mutated.remove_at(cur) == Ok((key, value)) && map == mutated
}

#[quickcheck]
fn cursor_walk_agrees_with_iter(map: Map<u32, u16>) -> bool {
    let mut walked = Vec::new();
    let mut cur = map.begin();
    while cur != map.end() {
        let (&key, &value) = map.key_value(cur).unwrap();
        walked.push((key, value));
        cur = map.next(cur).unwrap();
    }
    walked == map.iter().map(|(&k, &v)| (k, v)).collect::<Vec<_>>()
}

#[quickcheck]
fn backward_cursor_walk_agrees_with_iter(map: Map<u32, u16>) -> bool {
    let mut walked = Vec::new();
    let mut cur = map.end();
    while let Ok(prev) = map.prev(cur) {
        let (&key, &value) = map.key_value(prev).unwrap();
        walked.push((key, value));
        cur = prev;
    }
    walked.reverse();
    walked == map.iter().map(|(&k, &v)| (k, v)).collect::<Vec<_>>()
}

#[quickcheck]
fn extend_is_insertion_order_aware(pairs: Vec<(u32, u16)>, more: Vec<(u32, u16)>) -> bool {
    let mut map: Map<u32, u16> = pairs.iter().copied().collect();
    map.extend(more.iter().copied());

    let all: Map<u32, u16> = pairs.iter().chain(more.iter()).copied().collect();
    map == all
}

#[quickcheck]
fn clones_compare_equal_but_reject_cursors(map: Map<u32, u16>) -> bool {
    let clone = map.clone();
    if clone != map {
        return false;
    }
    let cur = map.begin();
    if map.is_empty() {
        // The end cursor is identity-bound too.
        clone.prev(cur) == Err(Error::InvalidCursor)
    } else {
        clone.key_value(cur) == Err(Error::InvalidCursor)
    }
}

#[quickcheck]
fn get_mut_writes_are_observable(map: Map<u32, u16>, key: u32, value: u16) -> bool {
    let mut map = map;
    if !map.contains_key(&key) {
        return true;
    }
    *map.get_mut(&key).unwrap() = value;
    map.get(&key) == Some(&value) && map.at(&key) == Ok(&value)
}
