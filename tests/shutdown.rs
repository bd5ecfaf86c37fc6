use std::sync::{Arc, Mutex};

use key_deck::dispatch::{Dispatcher, LoopState};
use key_deck::display::DisplayEvent;
use key_deck::inject::KeyInjector;
use key_deck::keys::Key;
use key_deck::overlay::RegionMap;
use key_deck::registry::{ButtonSpec, Rect};
use key_deck::target::TargetWindow;

const CLOSE_ATOM: u64 = 0x101;
const REGION: u64 = 42;

#[derive(Clone, Default)]
struct CountingInjector {
    count: Arc<Mutex<usize>>,
}

impl KeyInjector for CountingInjector {
    fn inject_keys(&mut self, _target: TargetWindow, _keys: &[Key]) {
        *self.count.lock().unwrap() += 1;
    }
}

fn dispatcher() -> (Dispatcher<CountingInjector>, CountingInjector) {
    let mut regions = RegionMap::new();
    regions.insert(
        REGION,
        ButtonSpec::new(Rect::new(10, 10, 100, 50), "S", vec![Key::S]),
    );
    let injector = CountingInjector::default();
    let dispatcher = Dispatcher::new(
        regions,
        CLOSE_ATOM,
        TargetWindow::resolved(777),
        injector.clone(),
    );
    (dispatcher, injector)
}

#[test]
fn close_protocol_terminates_the_loop() {
    let (mut dispatcher, _) = dispatcher();
    assert_eq!(dispatcher.state(), LoopState::Running);

    let state = dispatcher.handle(DisplayEvent::CloseRequest {
        protocol: CLOSE_ATOM,
    });

    assert_eq!(state, LoopState::Terminated);
}

#[test]
fn queued_events_after_termination_are_not_dispatched() {
    let (mut dispatcher, injector) = dispatcher();

    dispatcher.handle(DisplayEvent::PointerPress { window: REGION });
    dispatcher.handle(DisplayEvent::CloseRequest {
        protocol: CLOSE_ATOM,
    });
    dispatcher.handle(DisplayEvent::PointerPress { window: REGION });
    dispatcher.handle(DisplayEvent::CloseRequest {
        protocol: CLOSE_ATOM,
    });

    assert_eq!(dispatcher.state(), LoopState::Terminated);
    assert_eq!(*injector.count.lock().unwrap(), 1);
}

#[test]
fn client_message_with_unknown_protocol_is_ignored() {
    let (mut dispatcher, injector) = dispatcher();

    let state = dispatcher.handle(DisplayEvent::CloseRequest {
        protocol: CLOSE_ATOM + 1,
    });

    assert_eq!(state, LoopState::Running);
    assert_eq!(*injector.count.lock().unwrap(), 0);
}

#[test]
fn unrelated_events_leave_the_loop_running() {
    let (mut dispatcher, injector) = dispatcher();

    assert_eq!(dispatcher.handle(DisplayEvent::Other), LoopState::Running);
    assert_eq!(
        dispatcher.handle(DisplayEvent::Expose { window: REGION }),
        LoopState::Running
    );
    assert_eq!(*injector.count.lock().unwrap(), 0);
}
