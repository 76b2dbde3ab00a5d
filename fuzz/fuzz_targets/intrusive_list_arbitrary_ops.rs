#![no_main]

use libfuzzer_sys::fuzz_target;
use mtftable::ds::IntrusiveList;

// Arbitrary operation sequences on IntrusiveList, focused on the
// operations the table relies on: push_front, move_to_front,
// insert_before, remove_and_next and drain_with.
fuzz_target!(|data: &[u8]| {
    let mut list: IntrusiveList<u32> = IntrusiveList::new();
    let mut all_ids = Vec::new();

    for pair in data.chunks_exact(2) {
        let op = pair[0] % 9;
        let value = u32::from(pair[1]);
        let pick = |ids: &Vec<_>| ids[(value as usize) % ids.len()];

        match op {
            0 => {
                let id = list.push_front(value);
                all_ids.push(id);
                assert_eq!(list.front_id(), Some(id));
                assert_eq!(list.get(id), Some(&value));
            }
            1 => {
                let id = list.push_back(value);
                all_ids.push(id);
                assert_eq!(list.back_id(), Some(id));
            }
            2 => {
                if !all_ids.is_empty() {
                    let id = pick(&all_ids);
                    let before: Vec<_> = list.iter_ids().collect();
                    if list.move_to_front(id) {
                        // relative order of everything else is unchanged
                        let mut expected = vec![id];
                        expected.extend(before.into_iter().filter(|other| *other != id));
                        let after: Vec<_> = list.iter_ids().collect();
                        assert_eq!(after, expected);
                    } else {
                        assert!(!list.contains(id));
                    }
                }
            }
            3 => {
                if !all_ids.is_empty() {
                    let id = pick(&all_ids);
                    let old_len = list.len();
                    match list.insert_before(id, value) {
                        Ok(new_id) => {
                            all_ids.push(new_id);
                            assert_eq!(list.len(), old_len + 1);
                            assert_eq!(list.next_id(new_id), Some(id));
                        }
                        Err(rejected) => {
                            assert_eq!(rejected, value);
                            assert!(!list.contains(id));
                        }
                    }
                }
            }
            4 => {
                if !all_ids.is_empty() {
                    let id = pick(&all_ids);
                    let expected_next = list.contains(id).then(|| list.next_id(id)).flatten();
                    let old_len = list.len();
                    match list.remove_and_next(id) {
                        Some((_, next)) => {
                            assert_eq!(next, expected_next);
                            assert_eq!(list.len(), old_len - 1);
                            assert!(!list.contains(id));
                        }
                        None => assert_eq!(list.len(), old_len),
                    }
                }
            }
            5 => {
                let old_len = list.len();
                if list.pop_front().is_some() {
                    assert_eq!(list.len(), old_len - 1);
                } else {
                    assert!(list.is_empty());
                }
            }
            6 => {
                if !all_ids.is_empty() {
                    let id = pick(&all_ids);
                    if list.move_to_back(id) {
                        assert_eq!(list.back_id(), Some(id));
                    }
                }
            }
            7 => {
                let expected: Vec<u32> = list.iter().copied().collect();
                let mut drained = Vec::new();
                list.drain_with(|v| drained.push(v));
                all_ids.clear();
                assert_eq!(drained, expected);
                assert!(list.is_empty());
            }
            8 => {
                list.clear_shrink();
                all_ids.clear();
                assert!(list.is_empty());
                assert_eq!(list.front(), None);
                assert_eq!(list.back(), None);
            }
            _ => unreachable!(),
        }

        assert_eq!(list.iter().count(), list.len());
        #[cfg(debug_assertions)]
        list.debug_validate_invariants();
    }
});
