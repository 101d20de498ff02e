use crate::{Emitted, Spique};

#[test]
fn one_for_one_step() {
    let queue = Spique::builder().ring_size(4).build();
    queue.transform(|value: i32| Emitted::One(value * 2));

    for i in 0..4 {
        queue.enqueue(i).unwrap();
    }
    let out: Vec<i32> = queue.drain().collect();
    assert_eq!(out, vec![0, 2, 4, 6]);
}

#[test]
fn skip_rejects_the_value() {
    let queue = Spique::builder().ring_size(4).build();
    queue.transform(|value: i32| {
        if value % 2 == 0 {
            Emitted::One(value)
        } else {
            Emitted::Skip
        }
    });

    for i in 0..6 {
        queue.enqueue(i).unwrap();
    }
    let out: Vec<i32> = queue.drain().collect();
    assert_eq!(out, vec![0, 2, 4]);
}

#[test]
fn skip_still_reports_success() {
    let queue = Spique::builder().ring_size(4).build();
    queue.transform(|_value: i32| Emitted::Skip);

    queue.enqueue(1).unwrap();
    assert!(queue.is_empty());
    assert_eq!(queue.lifetime_in(), 0);
}

#[test]
fn many_expands_in_order() {
    let queue = Spique::builder().ring_size(4).build();
    queue.transform(|value: i32| Emitted::many([value, value + 100]));

    queue.enqueue(1).unwrap();
    queue.enqueue(2).unwrap();

    let out: Vec<i32> = queue.drain().collect();
    assert_eq!(out, vec![1, 101, 2, 102]);
}

#[test]
fn steps_run_oldest_first() {
    let queue = Spique::builder().ring_size(4).build();
    queue.transform(|value: i32| Emitted::One(value + 1));
    queue.transform(|value: i32| Emitted::One(value * 10));

    queue.enqueue(1).unwrap();
    assert_eq!(queue.dequeue(), Some(20));
}

#[test]
fn fan_out_feeds_later_steps() {
    let queue = Spique::builder().ring_size(4).build();
    queue.transform(|value: i32| Emitted::many(vec![value, value]));
    queue.transform(|value: i32| Emitted::One(-value));

    queue.enqueue(3).unwrap();
    let out: Vec<i32> = queue.drain().collect();
    assert_eq!(out, vec![-3, -3]);
}

#[test]
fn pipeline_outputs_count_toward_lifetime() {
    let queue = Spique::builder().ring_size(4).build();
    queue.transform(|value: i32| Emitted::many([value, value]));

    queue.enqueue(1).unwrap();
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.lifetime_in(), 2);
}

#[test]
fn pipeline_is_not_reapplied_to_its_own_outputs() {
    // If outputs were re-run through the step, one input would explode
    let queue = Spique::builder().ring_size(4).build();
    queue.transform(|value: i32| Emitted::many([value, value]));

    queue.enqueue(7).unwrap();
    assert_eq!(queue.len(), 2);
}

#[test]
fn head_insertion_applies_outputs_individually() {
    let queue = Spique::builder().ring_size(4).build();
    queue.transform(|value: i32| Emitted::many([value, value + 1]));

    // Each output is unshifted in turn, so the later one ends up at the head
    queue.enqueue_head(10).unwrap();
    assert_eq!(queue.dequeue(), Some(11));
    assert_eq!(queue.dequeue(), Some(10));
}
