use super::*;

#[test]
fn fresh_ids_strictly_increase_and_skip_zero() {
    let first = NodeId::fresh();
    let second = NodeId::fresh();
    assert!(first.index() > 0);
    assert!(second > first);
}

#[test]
fn ids_are_sixty_four_bits_wide() {
    assert_eq!(std::mem::size_of::<NodeId>(), 8);
    let id = NodeId(u64::from(u32::MAX) + 1);
    assert_eq!(id.index(), 4_294_967_296);
    assert_eq!(id.to_string(), "#4294967296");
}

#[test]
fn ids_from_many_threads_are_distinct() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| (0..1000).map(|_| NodeId::fresh()).collect::<Vec<_>>()))
        .collect();
    let mut all: Vec<NodeId> = handles
        .into_iter()
        .flat_map(|h| h.join().expect("id thread finished"))
        .collect();
    let total = all.len();
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), total);
}
