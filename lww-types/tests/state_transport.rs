use lww_types::{LwwSet, Merge};

//stands in for the replication layer: state goes out through serde, comes
//back on the peer and lands in a merge
fn ship(set: &LwwSet<String, u64>) -> LwwSet<String, u64> {
    let wire = serde_json::to_string(set).expect("serialize set state");
    serde_json::from_str(&wire).expect("deserialize set state")
}

#[test]
fn shipped_state_round_trips_field_for_field() {
    let mut set = LwwSet::new();
    set.add("apple".to_string(), 1);
    set.add("banana".to_string(), 2);
    set.remove("apple".to_string(), 3);

    assert_eq!(ship(&set), set);
}

#[test]
fn replicas_converge_after_a_full_state_exchange() {
    let mut replica_a = LwwSet::new();
    replica_a.add("apple".to_string(), 1);
    replica_a.remove("apple".to_string(), 4);

    let mut replica_b = LwwSet::new();
    replica_b.add("apple".to_string(), 2);
    replica_b.add("banana".to_string(), 3);

    //each side ships its snapshot before applying the other's
    let from_a = ship(&replica_a);
    let from_b = ship(&replica_b);
    replica_a.merge(&from_b);
    replica_b.merge(&from_a);

    assert_eq!(replica_a, replica_b);
    assert_eq!(replica_a.lookup(&"banana".to_string()), Some(&3));
    assert_eq!(
        replica_a.lookup(&"apple".to_string()),
        None,
        "the t4 remove dominates both adds"
    );
}

#[test]
fn raw_state_is_inspectable_for_serialization() {
    let mut set = LwwSet::new();
    set.add("apple".to_string(), 1u64);
    set.remove("apple".to_string(), 2);

    //a transport can walk both grow sets even though apple is not a member
    assert_eq!(set.lookup(&"apple".to_string()), None);

    let adds: Vec<_> = set.additions().iter().collect();
    assert_eq!(adds, vec![(&"apple".to_string(), &1)]);

    let removes: Vec<_> = set.removals().iter().collect();
    assert_eq!(removes, vec![(&"apple".to_string(), &2)]);
}
