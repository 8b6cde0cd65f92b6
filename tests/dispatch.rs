//! Dispatching through a session's dispatcher against rendered trees.

mod common;

use std::cell::Cell;
use std::rc::Rc;

use spark_user_event::{
    Dispatcher, EventBuilder, EventName, HostComponentNames, PointerEvents, Props, RenderTree,
    SignalAct, TokioScheduler,
};

use common::EventLogger;

fn dispatcher<'a>(
    names: &'a HostComponentNames,
    act: &'a SignalAct,
    scheduler: &'a TokioScheduler,
) -> Dispatcher<'a> {
    Dispatcher { host_names: names, act, scheduler }
}

#[tokio::test]
async fn test_box_none_passes_touches_to_children_only() {
    let logger = EventLogger::new();
    let tree = RenderTree::new();
    tree.host(
        "View",
        Props::new()
            .test_id("outer")
            .pointer_events(PointerEvents::BoxNone)
            .on(EventName::Press, logger.handle("outer")),
        |tree| {
            tree.host("View", Props::new().test_id("inner").on(EventName::Press, logger.handle("inner")), |_| {});
        },
    );

    let (names, act, scheduler) = (HostComponentNames::default(), SignalAct, TokioScheduler::new());
    let dispatcher = dispatcher(&names, &act, &scheduler);

    let outer = tree.get_by_test_id("outer").unwrap();
    let inner = tree.get_by_test_id("inner").unwrap();
    assert!(!dispatcher.dispatch_bubbling(&outer, EventName::Press, EventBuilder::touch(0)).await.unwrap());
    assert!(dispatcher.dispatch_bubbling(&inner, EventName::Press, EventBuilder::touch(0)).await.unwrap());

    assert_eq!(logger.names(), vec!["inner"]);
}

#[tokio::test]
async fn test_responder_callback_gates_touch_events() {
    let logger = EventLogger::new();
    let granted = Rc::new(Cell::new(false));
    let granted_for_callback = granted.clone();

    let tree = RenderTree::new();
    let view = tree.host(
        "View",
        Props::new()
            .on_start_should_set_responder(move || granted_for_callback.get())
            .on(EventName::PressIn, logger.handle("pressIn")),
        |_| {},
    );

    let (names, act, scheduler) = (HostComponentNames::default(), SignalAct, TokioScheduler::new());
    let dispatcher = dispatcher(&names, &act, &scheduler);

    assert!(!dispatcher.dispatch_own(&view, EventName::PressIn, EventBuilder::touch(0)).await.unwrap());
    granted.set(true);
    assert!(dispatcher.dispatch_own(&view, EventName::PressIn, EventBuilder::touch(0)).await.unwrap());

    assert_eq!(logger.names(), vec!["pressIn"]);
}

#[tokio::test]
async fn test_non_editable_input_accepts_layout_events_only() {
    let logger = EventLogger::new();
    let tree = RenderTree::new();
    let input = tree.host(
        "TextInput",
        Props::new()
            .editable(false)
            .on(EventName::Focus, logger.handle("focus"))
            .on(EventName::Layout, logger.handle("layout"))
            .on(EventName::Scroll, logger.handle("scroll")),
        |_| {},
    );

    let (names, act, scheduler) = (HostComponentNames::default(), SignalAct, TokioScheduler::new());
    let dispatcher = dispatcher(&names, &act, &scheduler);

    for event in [EventName::Focus, EventName::Layout, EventName::Scroll] {
        dispatcher.dispatch_own(&input, event, EventBuilder::focus()).await.unwrap();
    }

    assert_eq!(logger.names(), vec!["layout", "scroll"]);
}

#[tokio::test]
async fn test_unmounted_element_has_no_handlers() {
    let logger = EventLogger::new();
    let tree = RenderTree::new();
    let button = tree.host("View", Props::new().on(EventName::Press, logger.handle("press")), |_| {});

    tree.unmount(&button);

    let (names, act, scheduler) = (HostComponentNames::default(), SignalAct, TokioScheduler::new());
    let handled = dispatcher(&names, &act, &scheduler)
        .dispatch_bubbling(&button, EventName::Press, EventBuilder::touch(0))
        .await
        .unwrap();

    assert!(!handled);
    assert!(logger.names().is_empty());
}
