//! End-to-end scenarios driving the social graph headlessly.

use trellis_core::{NewProfile, ProfileField, SocialError};
use trellis_graph::{Affinity, SocialGraph};

fn graph_with(ids: &[&str]) -> SocialGraph {
    let mut graph = SocialGraph::new();
    for id in ids {
        graph
            .create_profile(NewProfile::new(*id, format!("User {id}")))
            .unwrap();
    }
    graph
}

#[test]
fn crossed_request_is_rejected() {
    let mut graph = graph_with(&["A", "B"]);
    graph.send_friend_request("A", "B").unwrap();

    assert_eq!(
        graph.send_friend_request("B", "A"),
        Err(SocialError::AlreadyPending)
    );

    // Still pending from A, nothing pending from B.
    assert!(graph.has_pending_request("B", "A").unwrap());
    assert!(!graph.has_pending_request("A", "B").unwrap());
    assert_eq!(graph.list_pending_requests("A").unwrap().len(), 0);
}

#[test]
fn accept_moves_request_to_friendship() {
    let mut graph = SocialGraph::new();
    graph.create_profile(NewProfile::new("1", "U1")).unwrap();
    graph.create_profile(NewProfile::new("2", "U2")).unwrap();

    graph.send_friend_request("1", "2").unwrap();
    graph.accept_friend_request("2", "1").unwrap();

    assert!(!graph.has_pending_request("2", "1").unwrap());
    assert!(graph.are_friends("1", "2").unwrap());
    assert!(graph.are_friends("2", "1").unwrap());
    assert_eq!(graph.list_friends("1").unwrap()[0].id, "2");
    assert_eq!(graph.list_friends("2").unwrap()[0].id, "1");
}

#[test]
fn message_between_strangers_fails() {
    let mut graph = graph_with(&["1", "2"]);

    assert_eq!(
        graph.send_message("1", "2", "hi"),
        Err(SocialError::NotFriends)
    );
    assert!(graph.read_messages("2").unwrap().is_empty());
}

#[test]
fn empty_fields_never_suggest() {
    let mut graph = graph_with(&["1", "2"]);

    assert!(graph.suggest_friends("1").unwrap().is_empty());
    assert!(graph.suggest_friends("2").unwrap().is_empty());
}

#[test]
fn duplicate_id_is_rejected_idempotently() {
    let mut graph = SocialGraph::new();
    graph
        .create_profile(
            NewProfile::new("1", "Ada")
                .with_city("London")
                .with_interest("maths")
                .with_institution("UCL"),
        )
        .unwrap();

    for _ in 0..3 {
        assert_eq!(
            graph.create_profile(NewProfile::new("1", "Other").with_city("Paris")),
            Err(SocialError::DuplicateKey("1".to_string()))
        );
    }

    let profile = graph.view_profile("1").unwrap();
    assert_eq!(profile.name, "Ada");
    assert_eq!(profile.city, "London");
    assert_eq!(profile.interest, "maths");
    assert_eq!(profile.institution, "UCL");
    assert_eq!(graph.list_all_users().len(), 1);
}

#[test]
fn users_listed_in_ascending_id_order() {
    let graph = graph_with(&["delta", "alpha", "charlie", "bravo"]);

    let ids: Vec<String> = graph.list_all_users().into_iter().map(|u| u.id).collect();
    assert_eq!(ids, vec!["alpha", "bravo", "charlie", "delta"]);
}

#[test]
fn full_session() {
    let mut graph = SocialGraph::new();
    graph
        .create_profile(
            NewProfile::new("100", "Ayesha")
                .with_city("Lahore")
                .with_interest("cricket")
                .with_institution("FAST"),
        )
        .unwrap();
    graph
        .create_profile(NewProfile::new("200", "Bilal").with_city("Lahore"))
        .unwrap();
    graph
        .create_profile(NewProfile::new("300", "Sara").with_institution("FAST"))
        .unwrap();
    graph
        .create_profile(NewProfile::new("400", "Omar").with_city("Karachi"))
        .unwrap();

    // Suggestions before anyone is connected.
    let suggestions = graph.suggest_friends("100").unwrap();
    let ids: Vec<&str> = suggestions.iter().map(|s| s.user.id.as_str()).collect();
    assert_eq!(ids, vec!["200", "300"]);
    assert_eq!(suggestions[1].reasons, vec![Affinity::Institution]);

    // Befriend 200, leave 300 pending.
    graph.send_friend_request("100", "200").unwrap();
    graph.accept_friend_request("200", "100").unwrap();
    graph.send_friend_request("300", "100").unwrap();
    assert!(graph.suggest_friends("100").unwrap().is_empty());

    // Direct messages.
    graph.send_message("200", "100", "welcome").unwrap();
    graph.send_message("200", "100", "see you at practice").unwrap();
    let inbox = graph.read_messages("100").unwrap();
    assert_eq!(inbox[0].text, "see you at practice");
    assert_eq!(inbox[1].text, "welcome");

    // Group traffic.
    graph.create_group("cricket club").unwrap();
    for id in ["100", "200", "300", "400"] {
        graph.join_group(id, "cricket club").unwrap();
    }
    assert_eq!(graph.send_friend_request_to_group("100", "cricket club").unwrap(), 1);
    assert!(graph.has_pending_request("400", "100").unwrap());
    assert_eq!(
        graph.send_group_message("400", "cricket club", "nets at 5").unwrap(),
        3
    );
    assert_eq!(graph.read_messages("100").unwrap()[0].text, "nets at 5");

    // Profile edits show up everywhere.
    graph
        .edit_profile("200", ProfileField::Name, "Bilal K.")
        .unwrap();
    let profile = graph.view_profile("100").unwrap();
    assert_eq!(profile.friends[0].name, "Bilal K.");

    // Unfriend and confirm the inbox survives.
    graph.delete_friend("100", "200").unwrap();
    assert!(!graph.are_friends("200", "100").unwrap());
    assert_eq!(graph.read_messages("100").unwrap().len(), 3);
    assert_eq!(
        graph.send_message("200", "100", "still there?"),
        Err(SocialError::NotFriends)
    );

    let stats = graph.stats();
    assert_eq!(stats.users, 4);
    assert_eq!(stats.friendships, 0);
    assert_eq!(stats.pending_requests, 2);
    assert_eq!(stats.groups, 1);
}
