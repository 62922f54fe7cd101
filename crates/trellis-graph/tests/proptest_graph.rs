//! Property-based tests for the social graph.
//!
//! These tests verify:
//! - Friendship edges are always symmetric and match a reference model
//! - Removing an edge after adding it restores the unrelated state
//! - Listing users is in ascending ID order regardless of insertion order

use proptest::prelude::*;
use std::collections::BTreeSet;
use trellis_core::{NewProfile, UserId};
use trellis_graph::{RelationshipStore, SocialGraph};

const USERS: usize = 8;

/// One edit to the friendship graph: (a, b, add?).
fn edge_op() -> impl Strategy<Value = (usize, usize, bool)> {
    (0..USERS, 0..USERS, any::<bool>())
}

fn key(a: usize, b: usize) -> (usize, usize) {
    (a.min(b), a.max(b))
}

proptest! {
    #[test]
    fn friendship_is_symmetric(ops in prop::collection::vec(edge_op(), 0..64)) {
        let mut store = RelationshipStore::new();
        let mut model = BTreeSet::new();

        for (a, b, add) in ops {
            if add {
                store.add_friend_edge(UserId(a), UserId(b));
                if a != b {
                    model.insert(key(a, b));
                }
            } else {
                store.remove_friend_edge(UserId(a), UserId(b));
                model.remove(&key(a, b));
            }
        }

        for a in 0..USERS {
            for b in 0..USERS {
                let forward = store.are_friends(UserId(a), UserId(b));
                prop_assert_eq!(forward, store.are_friends(UserId(b), UserId(a)));
                prop_assert_eq!(forward, model.contains(&key(a, b)));
            }
        }
        prop_assert_eq!(store.friendship_count(), model.len());
    }

    #[test]
    fn add_then_remove_round_trips(a in 0..USERS, b in 0..USERS) {
        prop_assume!(a != b);
        let mut store = RelationshipStore::new();

        store.add_friend_edge(UserId(a), UserId(b));
        prop_assert!(store.are_friends(UserId(a), UserId(b)));
        prop_assert!(store.are_friends(UserId(b), UserId(a)));

        store.remove_friend_edge(UserId(a), UserId(b));
        prop_assert!(!store.are_friends(UserId(a), UserId(b)));
        prop_assert!(!store.are_friends(UserId(b), UserId(a)));
    }

    #[test]
    fn listing_is_sorted(ids in prop::collection::vec("[a-z0-9]{1,6}", 1..32)) {
        let mut graph = SocialGraph::new();
        let mut unique = BTreeSet::new();

        for id in &ids {
            let created = graph.create_profile(NewProfile::new(id.as_str(), "name")).is_ok();
            prop_assert_eq!(created, unique.insert(id.clone()));
        }

        let listed: Vec<String> = graph.list_all_users().into_iter().map(|u| u.id).collect();
        let expected: Vec<String> = unique.into_iter().collect();
        prop_assert_eq!(listed, expected);
    }
}
