// ==============================================
// END-TO-END TABLE SCENARIOS (integration)
// ==============================================
//
// Walks the public API through the reference scenarios: ordering after
// inserts, promotion on lookup, misses, removal and destructor accounting.

use std::cell::Cell;
use std::cmp::Ordering;
use std::rc::Rc;

use mtftable::MtfTable;

fn numeric(a: &i32, b: &i32) -> Ordering {
    a.cmp(b)
}

type Numeric = fn(&i32, &i32) -> Ordering;

fn order<V>(table: &MtfTable<i32, V, Numeric>) -> Vec<i32> {
    table.keys().copied().collect()
}

/// Scenario A: insert 1,2,3 then look up 1.
fn scenario_a() -> MtfTable<i32, &'static str, Numeric> {
    let mut table: MtfTable<i32, &'static str, Numeric> = MtfTable::new(numeric as Numeric);
    table.insert(1, "a").unwrap();
    table.insert(2, "b").unwrap();
    table.insert(3, "c").unwrap();
    assert_eq!(order(&table), vec![3, 2, 1]);

    assert_eq!(table.lookup(&1), Some(&"a"));
    assert_eq!(order(&table), vec![1, 3, 2]);
    table
}

#[test]
fn scenario_a_lookup_moves_to_front() {
    scenario_a();
}

#[test]
fn scenario_b_miss_keeps_order() {
    let mut table = scenario_a();
    assert_eq!(table.lookup(&9), None);
    assert_eq!(order(&table), vec![1, 3, 2]);
}

#[test]
fn scenario_c_remove_keeps_survivor_order() {
    let mut table = scenario_a();
    table.remove(&3);
    assert!(!table.is_empty());
    assert_eq!(order(&table), vec![1, 2]);
}

#[test]
fn scenario_d_destructors_run_once() {
    let key_frees = Rc::new(Cell::new(0));
    let value_frees = Rc::new(Cell::new(0));

    let mut table: MtfTable<Box<i32>, Box<String>, _> =
        MtfTable::new(|a: &Box<i32>, b: &Box<i32>| a.cmp(b));
    let kf = Rc::clone(&key_frees);
    table.set_key_destructor(move |_key: Box<i32>| kf.set(kf.get() + 1));
    let vf = Rc::clone(&value_frees);
    table.set_value_destructor(move |_value: Box<String>| vf.set(vf.get() + 1));

    table.insert(Box::new(5), Box::new("five".to_string())).unwrap();
    table.remove(&Box::new(5));

    assert_eq!(key_frees.get(), 1);
    assert_eq!(value_frees.get(), 1);
    assert!(table.is_empty());

    drop(table);
    assert_eq!(key_frees.get(), 1);
    assert_eq!(value_frees.get(), 1);
}

#[test]
fn hot_key_stays_near_front_under_mixed_traffic() {
    let mut table: MtfTable<i32, i32, Numeric> = MtfTable::new(numeric as Numeric);
    for k in 0..100 {
        table.insert(k, k * 10).unwrap();
    }

    for cold in (0..100).step_by(7) {
        assert_eq!(table.lookup(&42), Some(&420));
        assert_eq!(table.lookup(&cold), Some(&(cold * 10)));
        let rank = table.keys().position(|&k| k == 42).unwrap();
        assert!(rank <= 1, "hot key drifted to rank {rank}");
    }
    table.check_invariants().unwrap();
}

#[test]
fn shared_keys_are_not_owned_without_destructor() {
    let key = Rc::new("shared".to_string());
    let mut table: MtfTable<Rc<String>, u8> = MtfTable::default();
    table.insert(Rc::clone(&key), 1).unwrap();
    table.insert(Rc::clone(&key), 2).unwrap();
    assert_eq!(Rc::strong_count(&key), 3);

    assert_eq!(table.remove(&key), 2);
    assert_eq!(Rc::strong_count(&key), 1);
}
