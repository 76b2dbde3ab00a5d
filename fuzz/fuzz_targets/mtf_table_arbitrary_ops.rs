#![no_main]

use std::cell::Cell;
use std::rc::Rc;

use libfuzzer_sys::fuzz_target;
use mtftable::MtfTable;

// Arbitrary insert/lookup/remove/clear sequences on an owning table,
// checked against a plain Vec model kept in front-to-back order.
fuzz_target!(|data: &[u8]| {
    let released = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&released);
    let mut table: MtfTable<u8, u16> = MtfTable::default();
    table.set_value_destructor(move |_v: u16| counter.set(counter.get() + 1));

    let mut model: Vec<(u8, u16)> = Vec::new();
    let mut inserted = 0usize;

    for (step, pair) in data.chunks_exact(2).enumerate() {
        // small key space so duplicates and hits are common
        let key = pair[1] % 16;
        match pair[0] % 5 {
            0 | 1 => {
                let value = step as u16;
                table.insert(key, value).unwrap();
                model.insert(0, (key, value));
                inserted += 1;
            }
            2 => {
                let expected = model.iter().position(|(k, _)| *k == key);
                let got = table.lookup(&key).copied();
                match expected {
                    Some(pos) => {
                        let entry = model.remove(pos);
                        model.insert(0, entry);
                        assert_eq!(got, Some(entry.1));
                    }
                    None => assert_eq!(got, None),
                }
            }
            3 => {
                let before = model.len();
                model.retain(|(k, _)| *k != key);
                assert_eq!(table.remove(&key), before - model.len());
                assert!(!table.contains(&key));
            }
            4 => {
                table.clear();
                model.clear();
            }
            _ => unreachable!(),
        }

        let order: Vec<(u8, u16)> = table.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(order, model);
        assert_eq!(released.get(), inserted - model.len());
        assert!(table.check_invariants().is_ok());
    }

    drop(table);
    assert_eq!(released.get(), inserted);
});
