use std::cmp::Ordering;

use csvline::seq::{element_at_or_default, except, is_empty, remove_from_end};
use csvline::{compare, compare_by, compare_opt, Error};

const BASE: [i32; 5] = [1, 2, 3, 4, 5];

fn strings(list: &str) -> Vec<String> {
    list.split(',').map(str::to_owned).collect()
}

#[test]
fn test_null_arguments() {
    assert_eq!(
        compare_opt(None::<Vec<i32>>, None::<Vec<i32>>),
        Err(Error::NullSource)
    );
    assert_eq!(
        compare_opt(None::<Vec<i32>>, Some(BASE.to_vec())),
        Err(Error::NullSource)
    );
    assert_eq!(
        compare_opt(Some(BASE.to_vec()), None::<Vec<i32>>),
        Err(Error::NullCompareTo)
    );
    assert!(compare_opt(Some(BASE), Some(BASE)).is_ok());
}

#[test]
fn test_same_list_is_equal() {
    assert_eq!(compare([1, 2, 3], [1, 2, 3]), Ordering::Equal);
    assert_eq!(compare(BASE, BASE), Ordering::Equal);
    assert_eq!(
        compare(strings("1,2,3,4,5"), strings("1,2,3,4,5")),
        Ordering::Equal
    );
}

#[test]
fn test_lower_lists() {
    for case in [
        vec![1, 2, 3, 4],
        vec![0, 2, 3, 4, 5],
        vec![1, 2, 2, 4, 5],
        vec![1, 2, 3, 4, 4],
    ] {
        assert_eq!(compare(case.clone(), BASE), Ordering::Less, "case: {case:?}");
    }
}

#[test]
fn test_greater_lists() {
    for case in [
        vec![2, 2, 3, 4, 5],
        vec![1, 2, 4, 4, 5],
        vec![1, 2, 3, 4, 6],
        vec![1, 2, 3, 4, 5, 6],
    ] {
        assert_eq!(compare(case.clone(), BASE), Ordering::Greater, "case: {case:?}");
    }
}

#[test]
fn test_string_lists() {
    let base = strings("1,2,3,4,5");
    for case in ["1,2,3,4", "0,2,3,4,5", "1,2,2,4,5", "1,2,3,4,4"] {
        assert_eq!(compare(strings(case), base.clone()), Ordering::Less, "case: {case}");
    }
    for case in ["2,2,3,4,5", "1,2,4,4,5", "1,2,3,4,6", "1,2,3,4,5,6"] {
        assert_eq!(compare(strings(case), base.clone()), Ordering::Greater, "case: {case}");
    }
}

#[test]
fn test_default_mid_sequence_ends_comparison() {
    // zero reads as "ran out of elements"
    assert_eq!(compare([1, 0, 5], [1, 0, 3]), Ordering::Equal);
    assert_eq!(compare([1, 0, 5], [1, 2]), Ordering::Less);
    assert_eq!(
        compare(strings("a,,z"), strings("a,,b")),
        Ordering::Equal
    );
}

#[test]
fn test_comparer_called_once_per_position() {
    let mut calls = 0;
    compare_by(BASE, BASE, |_, _| {
        calls += 1;
        Ordering::Equal
    });
    assert_eq!(calls, BASE.len());
}

#[test]
fn test_custom_comparer_result_is_returned() {
    let reversed = compare_by([1, 2], [1, 3], |a: &i32, b: &i32| b.cmp(a));
    assert_eq!(reversed, Ordering::Greater);
}

#[test]
fn test_lazy_sequences() {
    let evens = (1..).map(|n| n * 2).take(3);
    assert_eq!(compare(evens, vec![2, 4, 6]), Ordering::Equal);
}

#[test]
fn test_element_at_or_default() {
    assert_eq!(element_at_or_default(BASE, 0), 1);
    assert_eq!(element_at_or_default(BASE, 5), 0);
    assert_eq!(element_at_or_default(Vec::<String>::new(), 0), "");
}

#[test]
fn test_except() {
    assert_eq!(except(BASE, &9).collect::<Vec<_>>(), BASE.to_vec());
    assert_eq!(except(BASE, &3).collect::<Vec<_>>(), vec![1, 2, 4, 5]);

    let repeated = vec![Some(7), Some(7), None, Some(7), Some(8), Some(7)];
    assert_eq!(
        except(repeated.clone(), &Some(7)).collect::<Vec<_>>(),
        vec![None, Some(8)]
    );
    assert_eq!(
        except(repeated, &None).collect::<Vec<_>>(),
        vec![Some(7), Some(8)]
    );
}

#[test]
fn test_except_drops_repeats_of_kept_elements() {
    assert_eq!(except([2, 2, 3], &1).collect::<Vec<_>>(), vec![2, 3]);
    assert_eq!(
        except(strings("b,a,b,c,a"), &"a".to_string()).collect::<Vec<_>>(),
        vec!["b", "c"]
    );
    assert_eq!(except([4, 4, 4], &4).count(), 0);
}

#[test]
fn test_remove_from_end() {
    for count in [0, 1, 3, 4] {
        let remaining = remove_from_end(BASE, count);
        assert_eq!(remaining, BASE[..BASE.len() - count].to_vec());
    }
    for count in [5, 15, 150] {
        assert!(remove_from_end(BASE, count).is_empty());
    }
}

#[test]
fn test_is_empty() {
    assert!(is_empty(Vec::<u8>::new()));
    assert!(!is_empty(BASE));
    assert!(is_empty(BASE.iter().filter(|n| **n > 10)));
}
