use std::sync::Arc;

use oxide_connect::{Component, Props, Provider, ProviderProps, Store, TestComponent};

use super::{count_connector, counter_store, rendered_counts, CounterAction, CounterStore};

#[test]
fn given_a_provider_when_a_descendant_mounts_should_bind_it_to_the_provided_store() {
    let store = counter_store();
    let provider: Provider<CounterStore, &str> =
        Provider::new(ProviderProps::new(store.clone()).child("root"));
    let renders = TestComponent::new();
    let mut connected = count_connector().wrap(renders.clone());

    connected
        .mount(&provider.child_context(), Arc::new(Props::new()))
        .unwrap();
    store.dispatch(CounterAction::Increment);
    connected.process_notifications().unwrap();

    assert_eq!(store.listener_count(), 1);
    assert_eq!(rendered_counts(&renders), vec![0, 1]);
}

#[test]
fn given_a_replaced_store_should_hand_the_new_store_to_later_mounts() {
    let first = counter_store();
    let second = counter_store();
    second.dispatch(CounterAction::Increment);

    let mut provider = Provider::new(ProviderProps::new(first.clone()).child(()));
    let early = TestComponent::new();
    let mut early_connected = count_connector().wrap(early.clone());
    early_connected
        .mount(&provider.child_context(), Arc::new(Props::new()))
        .unwrap();

    provider.set_props(ProviderProps::new(second.clone()).child(()));

    let late = TestComponent::new();
    let mut late_connected = count_connector().wrap(late.clone());
    late_connected
        .mount(&provider.child_context(), Arc::new(Props::new()))
        .unwrap();

    assert!(Arc::ptr_eq(&provider.child_context().store, &second));
    assert_eq!(first.listener_count(), 1);
    assert_eq!(second.listener_count(), 1);
    assert_eq!(rendered_counts(&early), vec![0]);
    assert_eq!(rendered_counts(&late), vec![1]);
}

#[test]
fn given_a_replaced_store_when_context_received_should_render_from_the_new_store() {
    let first = counter_store();
    let second = counter_store();
    for _ in 0..5 {
        second.dispatch(CounterAction::Increment);
    }

    let mut provider = Provider::new(ProviderProps::new(first.clone()).child(()));
    let renders = TestComponent::new();
    let mut connected = count_connector().wrap(renders.clone());
    connected
        .mount(&provider.child_context(), Arc::new(Props::new()))
        .unwrap();

    provider.set_props(ProviderProps::new(second.clone()).child(()));
    connected.receive_context(&provider.child_context()).unwrap();
    connected.receive_props(Arc::new(Props::new())).unwrap();

    assert_eq!(rendered_counts(&renders), vec![0, 5]);

    // The subscription made at mount stays on the first store.
    assert_eq!(first.listener_count(), 1);
    assert_eq!(second.listener_count(), 0);
    first.dispatch(CounterAction::Increment);
    connected.process_notifications().unwrap();
    assert_eq!(rendered_counts(&renders), vec![0, 5, 5]);
}

#[test]
fn given_the_same_store_when_context_received_should_not_render() {
    let store = counter_store();
    let provider = Provider::new(ProviderProps::new(store.clone()).child(()));
    let renders = TestComponent::new();
    let mut connected = count_connector().wrap(renders.clone());
    connected
        .mount(&provider.child_context(), Arc::new(Props::new()))
        .unwrap();

    connected.receive_context(&provider.child_context()).unwrap();

    assert_eq!(renders.count(), 1);
}

#[test]
fn given_several_children_should_render_only_the_first() {
    let mut provider = Provider::new(
        ProviderProps::new(counter_store())
            .child(TestComponent::new())
            .child(TestComponent::new()),
    );

    assert_eq!(provider.props().children.len(), 2);
    provider.render_mut().unwrap().render(Props::new());

    provider.props().children[0].with_renders(|renders| assert_eq!(renders.len(), 1));
    provider.props().children[1].with_renders(|renders| assert_eq!(renders.len(), 0));
}
