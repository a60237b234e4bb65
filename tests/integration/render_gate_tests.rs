use std::sync::Arc;

use oxide_connect::{Props, Store};

use super::{count_connector, mount_with, mount_with_props, rendered_counts, CounterAction};

#[test]
fn given_the_same_own_props_when_received_should_not_render() {
    let mut test = mount_with(count_connector());

    let rendered = test.connected.receive_props(test.own_props.clone()).unwrap();

    assert!(!rendered);
    assert!(!test.connected.should_update());
    assert_eq!(test.renders.count(), 1);
}

#[test]
fn given_the_same_own_props_repeatedly_should_never_render() {
    let mut test = mount_with(count_connector());

    for _ in 0..5 {
        test.connected.receive_props(test.own_props.clone()).unwrap();
    }

    assert_eq!(test.renders.count(), 1);
}

#[test]
fn given_new_own_props_when_received_should_render() {
    let mut test = mount_with(count_connector());

    let rendered = test
        .connected
        .receive_props(Arc::new(Props::new().with("step", 2)))
        .unwrap();

    assert!(rendered);
    assert_eq!(test.renders.count(), 2);
    test.renders.with_renders(|renders| {
        assert_eq!(renders[1].get::<i32>("step"), Some(&2));
    });
}

#[test]
fn given_structurally_equal_but_new_own_props_should_render() {
    let mut test = mount_with_props(count_connector(), Props::new().with("step", 1));

    let copy = Arc::new((*test.own_props).clone());
    let rendered = test.connected.receive_props(copy.clone()).unwrap();

    assert!(rendered);
    assert!(Arc::ptr_eq(test.connected.own_props().unwrap(), &copy));
}

#[test]
fn given_new_then_same_own_props_should_render_only_for_the_new_ones() {
    let mut test = mount_with(count_connector());
    let next = Arc::new(Props::new());

    assert!(test.connected.receive_props(next.clone()).unwrap());
    assert!(!test.connected.receive_props(next.clone()).unwrap());
    assert!(!test.connected.receive_props(next).unwrap());

    assert_eq!(test.renders.count(), 2);
}

#[test]
fn given_unchanged_own_props_when_forced_should_render() {
    let mut test = mount_with(count_connector());
    test.connected.receive_props(test.own_props.clone()).unwrap();

    test.connected.force_update().unwrap();

    assert_eq!(test.renders.count(), 2);
}

#[test]
fn given_unchanged_own_props_and_a_notification_should_render_for_the_notification() {
    let mut test = mount_with(count_connector());

    test.store.dispatch(CounterAction::Increment);
    test.connected.receive_props(test.own_props.clone()).unwrap();
    test.connected.process_notifications().unwrap();

    assert_eq!(rendered_counts(&test.renders), vec![0, 1]);
}

#[test]
fn given_new_own_props_should_read_the_latest_store_state() {
    let mut test = mount_with(count_connector());
    test.store.dispatch(CounterAction::Increment);
    test.store.dispatch(CounterAction::Increment);

    test.connected.receive_props(Arc::new(Props::new())).unwrap();

    assert_eq!(rendered_counts(&test.renders), vec![0, 2]);
}
