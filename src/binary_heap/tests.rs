use super::*;
use crate::test_helpers::test_rng;
use crate::Reversed;
use alloc::vec::Vec;
use rand::Rng;

fn check_capacity<K, O>(heap: &BinaryMaxHeap<K, O>) {
    assert!(heap.len() <= heap.capacity());
    assert!(heap.data.capacity() >= heap.capacity());
}

fn drain<K, O: TotalOrder<K>>(heap: &mut BinaryMaxHeap<K, O>) -> Vec<K> {
    let mut out = Vec::new();
    while let Ok(key) = heap.delete_max() {
        assert!(heap.is_heap());
        out.push(key);
    }
    out
}

#[test]
fn test_scenario() {
    let mut heap = BinaryMaxHeap::new();
    for key in [5, 3, 8, 1, 9, 2] {
        heap.insert(key);
        assert!(heap.is_heap());
    }

    assert_eq!(heap.max(), Ok(&9));
    assert_eq!(heap.len(), 6);
    assert_eq!(drain(&mut heap), [9, 8, 5, 3, 2, 1]);
    assert_eq!(heap.delete_max(), Err(EmptyHeapError));
    assert_eq!(heap.max(), Err(EmptyHeapError));
}

#[test]
fn test_delete_past_empty() {
    let mut heap = BinaryMaxHeap::new();
    for i in 0..10 {
        heap.insert(i);
    }
    for i in (0..10).rev() {
        assert_eq!(heap.delete_max(), Ok(i));
    }
    assert!(heap.is_empty());
    assert_eq!(heap.delete_max(), Err(EmptyHeapError));
    assert_eq!(heap.pop(), None);
    assert_eq!(heap.peek(), None);
}

#[test]
fn test_size_accounting() {
    let mut heap = BinaryMaxHeap::with_capacity(4);
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);

    for (k, key) in [7, 7, 3, 10, -2, 0, 7].into_iter().enumerate() {
        heap.insert(key);
        assert_eq!(heap.len(), k + 1);
        assert!(!heap.is_empty());
    }
    for j in 1..=7 {
        heap.delete_max().unwrap();
        assert_eq!(heap.len(), 7 - j);
        assert_eq!(heap.is_empty(), heap.len() == 0);
    }
}

#[test]
fn test_duplicates() {
    let mut heap = BinaryMaxHeap::new();
    heap.extend([2, 2, 1, 2, 1, 1, 2]);
    assert_eq!(drain(&mut heap), [2, 2, 2, 2, 1, 1, 1]);
}

#[test]
fn test_sink_considers_last_right_child() {
    // After the removal the root's right child is the last key; a bound of
    // `len - 1` on the right child would swap the root with `2` instead of `5`.
    let mut heap = BinaryMaxHeap::new();
    heap.extend([10, 2, 5, 1]);
    assert_eq!(heap.data, [10, 2, 5, 1]);

    assert_eq!(heap.delete_max(), Ok(10));
    assert_eq!(heap.data, [5, 2, 1]);
    assert!(heap.is_heap());
    assert_eq!(drain(&mut heap), [5, 2, 1]);
}

#[test]
fn test_capacity_grows_by_doubling() {
    let mut heap = BinaryMaxHeap::new();
    assert_eq!(heap.capacity(), 1);

    let mut seen = vec![];
    for i in 0..16 {
        heap.insert(i);
        check_capacity(&heap);
        if seen.last() != Some(&heap.capacity()) {
            seen.push(heap.capacity());
        }
    }
    // storage length doubles 2 -> 4 -> 8 -> 16 -> 32, counting position 0
    assert_eq!(seen, [1, 3, 7, 15, 31]);
}

#[test]
fn test_capacity_shrinks_at_quarter_load() {
    let mut heap = BinaryMaxHeap::new();
    heap.extend(0..16);
    assert_eq!(heap.capacity(), 31);

    let mut expected = vec![];
    for _ in 0..16 {
        heap.delete_max().unwrap();
        check_capacity(&heap);
        expected.push((heap.len(), heap.capacity()));
    }

    assert_eq!(
        expected,
        [
            (15, 31),
            (14, 31),
            (13, 31),
            (12, 31),
            (11, 31),
            (10, 31),
            (9, 31),
            (8, 31),
            // 31 / 4 == 7
            (7, 15),
            (6, 15),
            (5, 15),
            (4, 15),
            // 15 / 4 == 3
            (3, 7),
            (2, 7),
            // 7 / 4 == 1
            (1, 3),
            // an empty heap keeps its storage
            (0, 3),
        ]
    );
}

#[test]
fn test_grow_and_shrink_do_not_thrash() {
    let mut heap = BinaryMaxHeap::new();
    heap.extend(0..8);
    assert_eq!(heap.capacity(), 15);

    for _ in 0..4 {
        heap.delete_max().unwrap();
    }
    // 4 keys no longer reach the shrink threshold of 15 / 4
    assert_eq!(heap.capacity(), 15);
    heap.delete_max().unwrap();
    assert_eq!((heap.len(), heap.capacity()), (3, 7));

    // a single insertion right after a shrink does not grow again
    heap.insert(100);
    assert_eq!((heap.len(), heap.capacity()), (4, 7));
    heap.delete_max().unwrap();
    assert_eq!((heap.len(), heap.capacity()), (3, 7));
}

#[test]
fn test_zero_capacity() {
    let mut heap = BinaryMaxHeap::with_capacity(0);
    assert_eq!(heap.capacity(), 0);
    heap.insert('z');
    assert_eq!(heap.capacity(), 1);
    assert_eq!(heap.delete_max(), Ok('z'));
    assert_eq!(heap.delete_max(), Err(EmptyHeapError));
}

#[test]
fn test_resize_transparency() {
    let mut heap = BinaryMaxHeap::with_capacity(2);
    let keys: Vec<u32> = (0..1000).map(|i| (i * 7919) % 1000).collect();
    for &key in &keys {
        heap.insert(key);
    }
    assert_eq!(heap.len(), 1000);
    assert!(heap.is_heap());

    let mut expected = keys;
    expected.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(drain(&mut heap), expected);
}

#[test]
fn test_random_interleaving() {
    let mut rng = test_rng();
    let mut heap = BinaryMaxHeap::new();
    let mut reference: Vec<i32> = vec![];

    for _ in 0..2000 {
        if rng.gen_bool(0.6) {
            let key = rng.gen_range(-50..50);
            heap.insert(key);
            reference.push(key);
        } else {
            reference.sort_unstable();
            assert_eq!(heap.delete_max().ok(), reference.pop());
        }
        assert!(heap.is_heap());
        assert_eq!(heap.len(), reference.len());
        assert_eq!(heap.max().ok(), reference.iter().max());
        check_capacity(&heap);
    }

    reference.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(drain(&mut heap), reference);
}

#[test]
fn test_comparator_reverses_order() {
    let mut heap = BinaryMaxHeap::with_comparator(1, |a: &i32, b: &i32| b.cmp(a));
    heap.extend([5, 3, 8, 1, 9, 2]);
    assert_eq!(heap.max(), Ok(&1));
    assert_eq!(drain(&mut heap), [1, 2, 3, 5, 8, 9]);
}

#[test]
fn test_comparator_on_field() {
    #[derive(Clone, Debug, PartialEq)]
    struct Task {
        id: u32,
        priority: f64,
    }

    let by_priority = |a: &Task, b: &Task| a.priority.total_cmp(&b.priority);
    let mut heap = BinaryMaxHeap::with_comparator(4, by_priority);
    heap.insert(Task { id: 1, priority: 0.5 });
    heap.insert(Task { id: 2, priority: 2.25 });
    heap.insert(Task { id: 3, priority: -1.0 });

    let ids: Vec<u32> = heap.iter().map(|task| task.id).collect();
    assert_eq!(ids, [2, 1, 3]);
}

#[test]
fn test_reversed_order() {
    let mut heap = BinaryMaxHeap::with_order(Reversed(OrdTotalOrder::<u8>::new()));
    heap.extend([3, 1, 2]);
    assert_eq!(heap.into_sorted_vec(), [1, 2, 3]);

    let twice = Reversed(Reversed(OrdTotalOrder::<u8>::new()));
    let heap = BinaryMaxHeap::from_vec_and_order(vec![3, 1, 2], twice);
    assert_eq!(heap.into_sorted_vec(), [3, 2, 1]);
}

#[test]
fn test_iter() {
    let heap = BinaryMaxHeap::from([5, 3, 8, 1, 9, 2]);
    let mut iter = heap.iter();
    assert_eq!(iter.size_hint(), (6, Some(6)));
    assert_eq!(iter.next(), Some(9));
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.collect::<Vec<_>>(), [8, 5, 3, 2, 1]);

    // restartable: a new call starts from the greatest key again
    assert_eq!(heap.iter().collect::<Vec<_>>(), [9, 8, 5, 3, 2, 1]);
    assert_eq!((&heap).into_iter().next(), Some(9));
    assert_eq!(heap.len(), 6);
}

#[test]
fn test_iter_independence() {
    let mut heap = BinaryMaxHeap::new();
    heap.extend([4, 1, 3, 2]);

    let mut first = heap.iter();
    let second = heap.iter();
    assert_eq!(first.by_ref().count(), 4);
    assert_eq!(first.next(), None);

    assert_eq!(second.len(), 4);
    assert_eq!(heap.len(), 4);
    assert_eq!(heap.max(), Ok(&4));

    // a snapshot does not see later mutation of its source
    let snapshot = heap.iter();
    heap.insert(10);
    heap.delete_max().unwrap();
    heap.delete_max().unwrap();
    assert_eq!(snapshot.collect::<Vec<_>>(), [4, 3, 2, 1]);
    assert_eq!(second.collect::<Vec<_>>(), [4, 3, 2, 1]);
    assert_eq!(heap.iter().collect::<Vec<_>>(), [3, 2, 1]);
}

#[test]
fn test_iter_empty() {
    let heap = BinaryMaxHeap::<i32>::new();
    let mut iter = heap.iter();
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_into_iter_sorted() {
    let heap = BinaryMaxHeap::from(vec![2, 4, 6, 2, 1, 8, 10, 3, 5, 3, 0, 0, 1]);
    let sorted: Vec<_> = heap.into_iter().collect();
    assert_eq!(sorted, [10, 8, 6, 5, 4, 3, 3, 2, 2, 1, 1, 0, 0]);
}

#[test]
fn test_from_vec() {
    let heap = BinaryMaxHeap::from(vec![9, 5, 4, 8, 2, 3, 7, 6, 1]);
    assert!(heap.is_heap());
    assert_eq!(heap.capacity(), 9);
    assert_eq!(heap.into_sorted_vec(), [9, 8, 7, 6, 5, 4, 3, 2, 1]);

    let empty = BinaryMaxHeap::<i32>::from(vec![]);
    assert_eq!(empty.capacity(), 1);
    assert!(empty.is_empty());
}

#[test]
fn test_from_iter() {
    let heap: BinaryMaxHeap<_> = (0..10).map(|i| i * 3 % 10).collect();
    assert!(heap.is_heap());
    assert_eq!(heap.max(), Ok(&9));

    let min_heap: BinaryMaxHeap<_, Reversed<OrdTotalOrder<_>>> = [3, 1, 2].into_iter().collect();
    assert_eq!(min_heap.max(), Ok(&1));
}

#[test]
fn test_extend_ref() {
    let mut heap = BinaryMaxHeap::<i32>::new();
    heap.extend(&[1, 3, 2]);
    heap.extend(vec![5].iter());
    assert_eq!(heap.into_vec().len(), 4);
}

#[test]
fn test_try_insert() {
    let mut heap = BinaryMaxHeap::new();
    for i in 0..20 {
        heap.try_insert(i).unwrap();
        check_capacity(&heap);
    }
    assert_eq!(heap.capacity(), 31);
    assert_eq!(heap.max(), Ok(&19));
}

#[test]
fn test_clear() {
    let mut heap = BinaryMaxHeap::new();
    heap.extend(0..100);
    heap.clear();
    assert!(heap.is_empty());
    assert_eq!(heap.capacity(), 1);
    heap.insert(3);
    assert_eq!(heap.max(), Ok(&3));
}

#[test]
fn test_clone() {
    let mut heap = BinaryMaxHeap::from([1, 2, 3]);
    let copy = heap.clone();
    heap.delete_max().unwrap();
    assert_eq!(copy.len(), 3);
    assert_eq!(copy.max(), Ok(&3));

    let mut other = BinaryMaxHeap::new();
    other.clone_from(&copy);
    assert_eq!(other.into_sorted_vec(), [3, 2, 1]);
}

#[test]
fn test_debug() {
    let heap = BinaryMaxHeap::from([1]);
    assert_eq!(format!("{heap:?}"), "[1]");
    assert_eq!(format!("{:?}", heap.iter()), "Iter([1])");
    assert_eq!(format!("{}", EmptyHeapError), "priority queue is empty");
}

#[test]
fn test_index_arithmetic() {
    assert_eq!(parent(1), 0);
    assert_eq!(parent(2), 1);
    assert_eq!(parent(3), 1);
    assert_eq!(parent(7), 3);
    assert_eq!(left_child(1), 2);
    assert_eq!(right_child(1), 3);
    assert_eq!(left_child(3), 6);
    assert_eq!(right_child(3), 7);
    assert_eq!(index(1), 0);
}

#[test]
fn test_order_accessor() {
    let heap = BinaryMaxHeap::<u8>::new();
    assert_eq!(heap.order().cmp(&1, &2), Ordering::Less);
    assert!(heap.order().gt(&2, &1));
}
