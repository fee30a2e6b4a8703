use std::collections::HashSet;

use crate::{vector, Cursor};

#[test]
fn stepping() {
    let v = vector![10, 20, 30].unwrap();
    let mut pos = v.begin();
    assert_eq!(unsafe { *pos.post_inc().get() }, 10);
    assert_eq!(unsafe { *pos.get() }, 20);
    assert_eq!(unsafe { *pos.inc().get() }, 30);
    assert_eq!(unsafe { *pos.post_dec().get() }, 30);
    assert_eq!(unsafe { *pos.dec().get() }, 10);
    assert_eq!(pos, v.begin());
}

#[test]
fn offsets_and_distance() {
    let v = vector![1, 2, 3, 4, 5].unwrap();
    let begin = v.begin();
    let end = v.end();
    assert_eq!(end - begin, 5);
    assert_eq!(begin - end, -5);
    assert_eq!(begin + 5, end);
    assert_eq!(end - 5usize, begin);
    assert_eq!(end.offset(-2), begin + 3);

    let mut pos = begin;
    pos += 4;
    assert_eq!(unsafe { *pos.get() }, 5);
    pos -= 3;
    assert_eq!(unsafe { *pos.get() }, 2);
    assert_eq!(unsafe { *pos.at(2) }, 4);
    assert_eq!(unsafe { *pos.at(-1) }, 1);
}

#[test]
fn ordering_follows_addresses() {
    let v = vector![1, 2, 3].unwrap();
    let a = v.begin();
    let b = a + 1;
    assert!(a < b);
    assert!(b > a);
    assert!(a <= a);
    assert!(b >= a);
    assert_ne!(a, b);
    assert_eq!(a.max(b), b);

    let set: HashSet<Cursor<i32>> = [a, b, a + 1].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn write_through_cursor() {
    let mut v = vector![String::from("a"), String::from("b")].unwrap();
    let pos = v.begin() + 1;
    unsafe { pos.get_mut().push('!') };
    assert_eq!(unsafe { pos.get().len() }, 2);
    assert_eq!(v[1], "b!");
    v[0].push('?');
    assert_eq!(v, [String::from("a?"), String::from("b!")]);
}

#[test]
fn cursor_at_index() {
    let v = vector![1, 2, 3].unwrap();
    assert_eq!(v.cursor(0), v.begin());
    assert_eq!(v.cursor(3), v.end());
    assert_eq!(unsafe { *v.cursor(2).get() }, 3);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn cursor_past_end_panics() {
    let v = vector![1].unwrap();
    v.cursor(2);
}
