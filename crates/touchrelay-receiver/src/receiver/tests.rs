use std::sync::Arc;
use std::time::Duration;

use super::*;
use touchrelay_common::{Point, Rect};
use touchrelay_dom::{ElementSpec, EventPayload, Scene};
use touchrelay_protocol::{channel, EventKind, RecordingSink};

const MARKER: &str = "debug-iframe-relay-point";

fn zone_page() -> Scene {
    Scene::new(Rect::new(0.0, 0.0, 300.0, 200.0))
}

fn attached(options: ReceiverOptions) -> ZoneReceiver {
    let mut receiver = ZoneReceiver::new();
    assert!(receiver.attach(options));
    receiver
}

fn touch_json(kind: &str, points: &[(f64, f64, i32)]) -> String {
    let touches: Vec<_> = points
        .iter()
        .map(|(x, y, id)| json!({ "clientX": x, "clientY": y, "identifier": id }))
        .collect();
    json!({ "eventName": kind, "touches": touches }).to_string()
}

#[test]
fn detached_receiver_ignores_messages() {
    let mut doc = zone_page();
    let mut receiver = ZoneReceiver::new();
    let raw = touch_json("touchstart", &[(10.0, 10.0, 0)]);
    assert_eq!(receiver.handle_message(&mut doc, &raw), Reception::NotListening);
    assert!(doc.dispatched().is_empty());
}

#[test]
fn second_attach_keeps_first_options() {
    let mut receiver = attached(ReceiverOptions::default());
    assert!(!receiver.attach(ReceiverOptions::default().with_debug(true)));
    assert!(!receiver.options().unwrap().debug);
}

#[test]
fn detach_twice_is_a_no_op() {
    let mut doc = zone_page();
    let mut receiver = attached(ReceiverOptions::default());
    receiver.detach(&mut doc);
    receiver.detach(&mut doc);
    assert!(!receiver.is_attached());
    assert_eq!(
        receiver.handle_message(&mut doc, &touch_json("touchmove", &[(1.0, 1.0, 0)])),
        Reception::NotListening
    );
}

#[test]
fn touch_is_dispatched_on_hit_element_with_identifiers() {
    let mut doc = zone_page();
    let button = doc.append(ElementSpec::new(Rect::new(0.0, 0.0, 100.0, 100.0)).with_id("btn"));
    let mut receiver = attached(ReceiverOptions::default());

    let raw = touch_json("touchstart", &[(50.0, 60.0, 2), (250.0, 150.0, 5)]);
    let outcome = receiver.handle_message(&mut doc, &raw);

    assert_eq!(
        outcome,
        Reception::Dispatched {
            target: button,
            events: 1
        }
    );
    let records = doc.dispatched();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].target_dom_id.as_deref(), Some("btn"));
    let event = &records[0].event;
    assert_eq!(event.kind, EventKind::TouchStart);
    assert!(event.bubbles && event.cancelable);
    match &event.payload {
        EventPayload::Touch {
            touches,
            changed_touches,
        } => {
            assert_eq!(touches, changed_touches);
            assert_eq!(touches[0].target, button);
            assert_eq!(touches[1].target, doc.root());
            assert_eq!((touches[0].client_x, touches[0].client_y), (50.0, 60.0));
            assert_eq!(touches[1].identifier, 5);
        }
        other => panic!("expected touch payload, got {other:?}"),
    }
}

#[test]
fn untracked_touchend_still_dispatches() {
    let mut doc = zone_page();
    let mut receiver = attached(ReceiverOptions::default());

    let raw = r#"{"eventName":"touchend","touches":[{"clientX":10,"clientY":10,"identifier":3}]}"#;
    let outcome = receiver.handle_message(&mut doc, raw);

    assert!(matches!(outcome, Reception::Dispatched { events: 1, .. }));
    assert_eq!(doc.dispatched()[0].event.identifiers(), vec![Some(3)]);
}

#[test]
fn unrecognized_tag_is_ignored() {
    let mut doc = zone_page();
    let mut receiver = attached(ReceiverOptions::default());

    for raw in [
        r#"{"eventName":"resize","width":10}"#,
        r#"{"eventName":"resize","touches":"all"}"#,
        r#"{"eventName":"scroll","clientX":"10px"}"#,
        r#"{"type":"webpackOk"}"#,
        "not json",
    ] {
        assert_eq!(receiver.handle_message(&mut doc, raw), Reception::Ignored, "{raw}");
    }
    assert!(doc.dispatched().is_empty());
}

#[test]
fn malformed_payloads_are_rejected_quietly() {
    let mut doc = zone_page();
    let mut receiver = attached(ReceiverOptions::default());

    for raw in [
        r#"{"eventName":"touchstart","touches":"all"}"#,
        r#"{"eventName":"touchstart"}"#,
        r#"{"eventName":"touchmove","touches":[]}"#,
        r#"{"eventName":"click","clientY":4}"#,
    ] {
        assert_eq!(receiver.handle_message(&mut doc, raw), Reception::Rejected);
    }
    assert!(doc.dispatched().is_empty());
    assert!(receiver.is_attached());
}

#[test]
fn click_resolves_its_own_target() {
    let mut doc = zone_page();
    let link = doc.append(ElementSpec::new(Rect::new(100.0, 100.0, 50.0, 50.0)));
    let mut receiver = attached(ReceiverOptions::default());

    let raw = RelayMessage::single_point(EventKind::Click, Point::new(120.0, 130.0), None)
        .to_json()
        .unwrap();
    receiver.handle_message(&mut doc, &raw);

    let records = doc.dispatched();
    assert_eq!(records[0].target, link);
    assert_eq!(
        records[0].event.payload,
        EventPayload::Pointer {
            client_x: 120.0,
            client_y: 130.0,
            pointer_id: None
        }
    );
}

#[test]
fn pointer_id_is_preserved() {
    let mut doc = zone_page();
    let mut receiver = attached(ReceiverOptions::default());

    let raw = r#"{"eventName":"pointerdown","clientX":5,"clientY":5,"pointerId":9}"#;
    receiver.handle_message(&mut doc, raw);

    let event = &doc.dispatched()[0].event;
    assert_eq!(event.kind, EventKind::PointerDown);
    assert_eq!(event.identifiers(), vec![Some(9)]);
}

#[test]
fn debug_marker_never_captures_the_event() {
    let mut doc = zone_page();
    let button = doc.append(ElementSpec::new(Rect::new(0.0, 0.0, 100.0, 100.0)));
    let mut receiver = attached(ReceiverOptions::default().with_debug(true));

    receiver.handle_message(&mut doc, &touch_json("touchstart", &[(40.0, 40.0, 0)]));
    receiver.handle_message(&mut doc, &touch_json("touchmove", &[(41.0, 40.0, 0)]));

    assert_eq!(doc.count_with_class(MARKER), 2);
    let top = doc.elements_from_point(Point::new(41.0, 40.0))[0];
    assert!(doc.has_class(top, MARKER));
    assert!(doc.dispatched().iter().all(|r| r.target == button));
}

#[test]
fn no_markers_without_debug() {
    let mut doc = zone_page();
    let mut receiver = attached(ReceiverOptions::default());
    receiver.handle_message(&mut doc, &touch_json("touchstart", &[(40.0, 40.0, 0)]));
    assert_eq!(doc.count_with_class(MARKER), 0);
    assert_eq!(receiver.next_marker_deadline(), None);
}

#[test]
fn marker_expires_after_delay() {
    let mut doc = zone_page();
    let mut receiver = attached(ReceiverOptions::default().with_debug(true));
    let start = Instant::now();

    receiver.handle_message_at(&mut doc, &touch_json("touchstart", &[(40.0, 40.0, 1)]), start);
    assert_eq!(doc.count_with_class(MARKER), 1);
    assert!(doc.element_by_id("touch-1").is_some());

    assert_eq!(
        receiver.sweep_markers(&mut doc, start + Duration::from_millis(999)),
        0
    );
    assert_eq!(
        receiver.sweep_markers(&mut doc, start + Duration::from_millis(1000)),
        1
    );
    assert_eq!(doc.count_with_class(MARKER), 0);
    assert_eq!(receiver.live_markers(), 0);
}

#[test]
fn detach_removes_pending_markers() {
    let mut doc = zone_page();
    let mut receiver = attached(ReceiverOptions::default().with_debug(true));
    receiver.handle_message(&mut doc, &touch_json("touchstart", &[(1.0, 1.0, 0), (2.0, 2.0, 1)]));
    assert_eq!(doc.count_with_class(MARKER), 2);

    receiver.detach(&mut doc);
    assert_eq!(doc.count_with_class(MARKER), 0);
}

#[test]
fn debug_marks_follow_receive_then_dispatch() {
    let mut doc = zone_page();
    let sink = Arc::new(RecordingSink::new());
    let mut receiver = attached(
        ReceiverOptions::default()
            .with_debug(true)
            .with_mark_sink(sink.clone()),
    );

    let raw = RelayMessage::single_point(EventKind::Click, Point::new(3.0, 3.0), None)
        .with_time(epoch_millis())
        .to_json()
        .unwrap();
    receiver.handle_message(&mut doc, &raw);
    receiver.handle_message(&mut doc, r#"{"eventName":"resize"}"#);

    let marks = sink.take();
    let names: Vec<&str> = marks.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["receive-event", "dispatch-event", "receive-event"]);
    assert_eq!(marks[0].checkpoint, Checkpoint::Received);
    assert_eq!(marks[0].detail["eventName"], "click");
    assert_eq!(marks[1].checkpoint, Checkpoint::Dispatched);
}

#[test]
fn pump_handles_queue_in_order() {
    let mut doc = zone_page();
    let mut receiver = attached(ReceiverOptions::default());
    let (port, mut inbox) = channel();
    for kind in [EventKind::PointerDown, EventKind::PointerUp, EventKind::Click] {
        port.post(&RelayMessage::single_point(kind, Point::new(1.0, 1.0), Some(1)))
            .unwrap();
    }

    assert_eq!(receiver.pump(&mut doc, &mut inbox), 3);
    let kinds: Vec<EventKind> = doc.dispatched().iter().map(|r| r.event.kind).collect();
    assert_eq!(
        kinds,
        vec![EventKind::PointerDown, EventKind::PointerUp, EventKind::Click]
    );
    assert_eq!(receiver.pump(&mut doc, &mut inbox), 0);
}

#[tokio::test(start_paused = true)]
async fn run_dispatches_and_expires_markers() {
    let mut doc = zone_page();
    let mut receiver = attached(ReceiverOptions::default().with_debug(true));
    let (port, mut inbox) = channel();

    port.post_raw(touch_json("touchstart", &[(10.0, 10.0, 0)]))
        .unwrap();
    port.post_raw(touch_json("touchend", &[(10.0, 10.0, 0)]))
        .unwrap();
    drop(port);

    let started = Instant::now();
    receiver.run(&mut doc, &mut inbox).await;

    assert_eq!(doc.dispatched().len(), 2);
    assert_eq!(doc.count_with_class(MARKER), 0);
    assert!(started.elapsed() >= Duration::from_millis(1000));
}

#[tokio::test(start_paused = true)]
async fn run_sweeps_while_inbox_is_open() {
    let mut doc = zone_page();
    let mut receiver = attached(
        ReceiverOptions::default()
            .with_debug(true)
            .with_marker_delay(Duration::from_millis(200)),
    );
    let (port, mut inbox) = channel();
    port.post_raw(touch_json("touchstart", &[(10.0, 10.0, 4)]))
        .unwrap();

    tokio::select! {
        _ = receiver.run(&mut doc, &mut inbox) => panic!("run returned while a port was open"),
        _ = tokio::time::sleep(Duration::from_millis(500)) => {}
    }

    assert_eq!(doc.count_with_class(MARKER), 0);
    assert_eq!(doc.dispatched().len(), 1);
    drop(port);
}
