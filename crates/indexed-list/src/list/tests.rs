use super::*;
use proptest::prelude::*;

#[test]
fn push_remove_insert_scenario() {
    let mut list = IndexedList::new();
    list.push(1);
    list.push(2);
    list.push(3);
    assert_eq!(list.to_vec(), vec![1, 2, 3]);

    let removed = list.remove_at(1).expect("index 1 is occupied");
    assert_eq!(removed, 2);
    assert_eq!(list.to_vec(), vec![1, 3]);
    assert_eq!(list.len(), 2);

    list.insert(1, 9).expect("index 1 is a valid position");
    assert_eq!(list.to_vec(), vec![1, 9, 3]);
}

#[test]
fn get_range_returns_an_independent_copy() {
    let list = IndexedList::from_vec(vec![1, 9, 3]);

    let mut range = list.get_range(1, 2).expect("range within bounds");
    assert_eq!(range, vec![9, 3]);

    range[0] = 77;
    assert_eq!(list.get(1), Some(&9));
}

#[test]
fn get_range_validates_span() {
    let list = IndexedList::from_vec(vec![1, 2, 3]);

    assert!(list.get_range(1, 2).is_ok());
    assert_eq!(
        list.get_range(1, 3),
        Err(ListError::IndexOutOfRange {
            op: "get_range",
            index: 4,
            len: 3,
        })
    );
    assert!(list.get_range(4, 0).is_err());
    // Zero-length range at the end position is valid.
    assert_eq!(list.get_range(3, 0), Ok(Vec::new()));
}

#[test]
fn set_overwrites_without_bumping_generation() {
    let mut list = IndexedList::from_vec(vec![10, 20, 30]);
    let before = list.generation();

    list.set(1, 99).expect("index 1 is occupied");
    assert_eq!(list.get(1), Some(&99));
    assert_eq!(list.generation(), before);
    assert_eq!(list.len(), 3);

    assert_eq!(
        list.set(3, 0),
        Err(ListError::IndexOutOfRange {
            op: "set",
            index: 3,
            len: 3,
        })
    );
}

#[test]
fn structural_mutations_bump_generation_once_each() {
    let mut list = IndexedList::new();
    let g0 = list.generation();

    list.push(1);
    let g1 = list.generation();
    assert!(g1 > g0);

    list.insert(0, 2).unwrap();
    let g2 = list.generation();
    assert!(g2 > g1);

    list.insert_many(1, vec![3, 4]).unwrap();
    let g3 = list.generation();
    assert!(g3 > g2);

    list.remove_at(0).unwrap();
    let g4 = list.generation();
    assert!(g4 > g3);

    list.clear();
    let g5 = list.generation();
    assert!(g5 > g4);

    // Clearing an already-empty list is a no-op.
    list.clear();
    assert_eq!(list.generation(), g5);
}

#[test]
fn insert_at_len_appends_and_remove_at_len_fails() {
    let mut list = IndexedList::from_vec(vec![1, 2]);

    list.insert(2, 3).expect("insert at len appends");
    assert_eq!(list.to_vec(), vec![1, 2, 3]);

    assert_eq!(
        list.remove_at(3),
        Err(ListError::IndexOutOfRange {
            op: "remove_at",
            index: 3,
            len: 3,
        })
    );
}

#[test]
fn insert_then_remove_at_restores_content() {
    let mut list = IndexedList::from_vec(vec![4, 5, 6, 7]);
    let snapshot = list.to_vec();

    list.insert(2, 99).unwrap();
    let removed = list.remove_at(2).unwrap();

    assert_eq!(removed, 99);
    assert_eq!(list.to_vec(), snapshot);
    assert_eq!(list.len(), snapshot.len());
}

#[test]
fn insert_many_empty_run_validates_but_does_not_mutate() {
    let mut list = IndexedList::from_vec(vec![1, 2]);
    let before = list.generation();

    list.insert_many(1, Vec::new())
        .expect("empty run at a valid position");
    assert_eq!(list.to_vec(), vec![1, 2]);
    assert_eq!(list.generation(), before);

    assert!(list.insert_many(5, vec![9]).is_err());
    assert_eq!(list.generation(), before);
}

#[test]
fn remove_by_value_takes_first_match() {
    let mut list = IndexedList::from_vec(vec![1, 2, 1, 3]);

    assert!(list.remove(&1));
    assert_eq!(list.to_vec(), vec![2, 1, 3]);
    assert!(!list.remove(&42));
    assert_eq!(list.len(), 3);
}

#[test]
fn search_helpers_scan_in_index_order() {
    let list = IndexedList::from_vec(vec![5, 8, 2, 8]);

    assert!(list.contains(&2));
    assert!(!list.contains(&11));
    assert_eq!(list.index_of(&8), Some(1));
    assert_eq!(list.index_of(&11), None);
    assert_eq!(list.find(|v| v % 2 == 0), Some(&8));
    assert_eq!(list.find(|v| *v > 100), None);
    assert_eq!(list.find_all(|v| v % 2 == 0), vec![8, 2, 8]);

    let mut sum = 0;
    list.for_each(|v| sum += v);
    assert_eq!(sum, 23);
}

#[test]
fn copy_to_requires_room_at_offset() {
    let list = IndexedList::from_vec(vec![1, 2, 3]);
    let mut dest = [0; 5];

    list.copy_to(&mut dest, 1).expect("room at offset 1");
    assert_eq!(dest, [0, 1, 2, 3, 0]);

    assert_eq!(
        list.copy_to(&mut dest, 3),
        Err(ListError::IndexOutOfRange {
            op: "copy_to",
            index: 6,
            len: 5,
        })
    );
}

#[test]
fn to_vec_round_trips_through_from_vec() {
    let list = IndexedList::from_vec(vec![3, 1, 4, 1, 5]);
    let rebuilt = IndexedList::from_vec(list.to_vec());

    assert_eq!(rebuilt, list);
    assert_eq!(rebuilt.len(), list.len());
}

#[test]
fn to_vec_on_empty_allocates_nothing() {
    let list: IndexedList<u32> = IndexedList::new();
    let out = list.to_vec();

    assert!(out.is_empty());
    assert_eq!(out.capacity(), 0);
}

#[test]
fn failed_calls_leave_prior_state() {
    let mut list = IndexedList::from_vec(vec![1, 2, 3]);
    let generation = list.generation();

    assert!(list.insert(7, 9).is_err());
    assert!(list.remove_at(7).is_err());
    assert!(list.set(7, 9).is_err());

    assert_eq!(list.to_vec(), vec![1, 2, 3]);
    assert_eq!(list.generation(), generation);
}

#[test]
fn amortized_growth_reallocates_logarithmically() {
    let mut list = IndexedList::new();
    let mut reallocations = 0;
    let mut last_capacity = list.capacity();

    for i in 0..10_000_u32 {
        list.push(i);
        assert!(list.capacity() >= list.len());

        if list.capacity() != last_capacity {
            reallocations += 1;
            last_capacity = list.capacity();
        }
    }

    // 1.5x growth from 5 reaches 10_000 in ~ log_1.5(2000) ≈ 19 steps.
    assert!(
        reallocations <= 32,
        "expected O(log N) reallocations, got {reallocations}"
    );
}

///
/// PROPERTIES
///

#[derive(Clone, Debug)]
enum Op {
    Push(i32),
    Insert(usize, i32),
    InsertMany(usize, Vec<i32>),
    RemoveAt(usize),
    Remove(i32),
    Set(usize, i32),
    Clear,
    Trim,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::Push),
        (0..24_usize, any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        (0..24_usize, prop::collection::vec(any::<i32>(), 0..6))
            .prop_map(|(i, items)| Op::InsertMany(i, items)),
        (0..24_usize).prop_map(Op::RemoveAt),
        any::<i32>().prop_map(Op::Remove),
        (0..24_usize, any::<i32>()).prop_map(|(i, v)| Op::Set(i, v)),
        Just(Op::Clear),
        Just(Op::Trim),
    ]
}

proptest! {
    // Invariant: 0 <= len <= capacity after every call, and the mutation
    // token never decreases.
    #[test]
    fn length_capacity_invariant_holds(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut list: IndexedList<i32> = IndexedList::new();
        let mut generation = list.generation();

        for op in ops {
            match op {
                Op::Push(v) => list.push(v),
                Op::Insert(i, v) => { let _ = list.insert(i, v); }
                Op::InsertMany(i, items) => { let _ = list.insert_many(i, items); }
                Op::RemoveAt(i) => { let _ = list.remove_at(i); }
                Op::Remove(v) => { let _ = list.remove(&v); }
                Op::Set(i, v) => { let _ = list.set(i, v); }
                Op::Clear => list.clear(),
                Op::Trim => list.trim_excess(),
            }

            prop_assert!(list.len() <= list.capacity());
            prop_assert!(list.generation() >= generation);
            generation = list.generation();
        }
    }

    // A list mirrors a Vec under the same operation sequence.
    #[test]
    fn mirrors_vec_semantics(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut list: IndexedList<i32> = IndexedList::new();
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Op::Push(v) => {
                    list.push(v);
                    model.push(v);
                }
                Op::Insert(i, v) => {
                    if list.insert(i, v).is_ok() {
                        model.insert(i, v);
                    }
                }
                Op::InsertMany(i, items) => {
                    if list.insert_many(i, items.clone()).is_ok() {
                        model.splice(i..i, items);
                    }
                }
                Op::RemoveAt(i) => {
                    if let Ok(removed) = list.remove_at(i) {
                        prop_assert_eq!(removed, model.remove(i));
                    }
                }
                Op::Remove(v) => {
                    let found = list.remove(&v);
                    let model_found = model.iter().position(|x| *x == v);
                    prop_assert_eq!(found, model_found.is_some());
                    if let Some(i) = model_found {
                        model.remove(i);
                    }
                }
                Op::Set(i, v) => {
                    if list.set(i, v).is_ok() {
                        model[i] = v;
                    }
                }
                Op::Clear => {
                    list.clear();
                    model.clear();
                }
                Op::Trim => list.trim_excess(),
            }

            prop_assert_eq!(list.as_slice(), model.as_slice());
        }
    }
}
