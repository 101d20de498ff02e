use crate::Spique;

#[test]
fn capacity_grows_in_ring_increments() {
    let queue = Spique::builder().ring_size(3).build();
    assert_eq!(queue.ring_count(), 1);
    assert_eq!(queue.capacity(), 3);

    queue.enqueue(1).unwrap();
    queue.enqueue(2).unwrap();
    queue.enqueue(3).unwrap();
    assert_eq!(queue.ring_count(), 1);

    queue.enqueue(4).unwrap();
    assert_eq!(queue.ring_count(), 2);
    assert_eq!(queue.capacity(), 6);
}

#[test]
fn round_trip_shrinks_back_to_one_ring() {
    let ring_size = 4;
    let queue = Spique::builder().ring_size(ring_size).build();

    for i in 0..=ring_size {
        queue.enqueue(i).unwrap();
    }
    assert_eq!(queue.ring_count(), 2);

    for i in 0..=ring_size {
        assert_eq!(queue.dequeue(), Some(i));
    }
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.ring_count(), 1);
    assert_eq!(queue.capacity(), ring_size);
}

#[test]
fn head_insertion_links_rings_at_the_front() {
    let queue = Spique::builder().ring_size(2).build();

    queue.enqueue(1).unwrap();
    queue.enqueue(2).unwrap();
    assert_eq!(queue.ring_count(), 1);

    queue.enqueue_head(0).unwrap();
    assert_eq!(queue.ring_count(), 2);

    // [0, 1, 2]; draining the front ring retires it
    assert_eq!(queue.dequeue(), Some(0));
    assert_eq!(queue.ring_count(), 1);
    assert_eq!(queue.dequeue(), Some(1));
    assert_eq!(queue.dequeue(), Some(2));
}

#[test]
fn tail_drain_retires_tail_rings() {
    let queue = Spique::builder().ring_size(2).build();
    for i in 0..6 {
        queue.enqueue(i).unwrap();
    }
    assert_eq!(queue.ring_count(), 3);

    assert_eq!(queue.dequeue_tail(), Some(5));
    assert_eq!(queue.dequeue_tail(), Some(4));
    assert_eq!(queue.ring_count(), 2);
    assert_eq!(queue.dequeue_tail(), Some(3));
    assert_eq!(queue.dequeue_tail(), Some(2));
    assert_eq!(queue.ring_count(), 1);
}

#[test]
fn steady_state_churn_stays_bounded() {
    let queue = Spique::builder().ring_size(2).build();

    // Keep a window of 3 items moving: the chain should never need more
    // than two rings plus the recycled spare.
    for i in 0..3 {
        queue.enqueue(i).unwrap();
    }
    for i in 3..200 {
        queue.enqueue(i).unwrap();
        assert_eq!(queue.dequeue(), Some(i - 3));
        assert!(queue.ring_count() <= 3, "chain grew past the working set");
    }
    assert_eq!(queue.len(), 3);
}

#[test]
fn sole_ring_is_never_retired() {
    let queue = Spique::builder().ring_size(2).build();
    queue.enqueue(1).unwrap();
    assert_eq!(queue.dequeue(), Some(1));
    assert_eq!(queue.ring_count(), 1);
    assert_eq!(queue.dequeue(), None);
    assert_eq!(queue.ring_count(), 1);
}
