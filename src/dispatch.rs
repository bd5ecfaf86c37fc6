use crate::display::{AtomId, DisplayConnection, DisplayEvent};
use crate::inject::KeyInjector;
use crate::overlay::{Overlay, RegionMap};
use crate::target::TargetWindow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Routes classified display events: presses inside a tracked region replay
/// that region's key sequence, a close request for the panel's protocol
/// terminates, everything else is ignored.
pub struct Dispatcher<I> {
    regions: RegionMap,
    close_protocol: AtomId,
    target: TargetWindow,
    injector: I,
    state: LoopState,
}

impl<I: KeyInjector> Dispatcher<I> {
    pub fn new(regions: RegionMap, close_protocol: AtomId, target: TargetWindow, injector: I) -> Self {
        Self {
            regions,
            close_protocol,
            target,
            injector,
            state: LoopState::Running,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Route one event. Termination is sticky: once terminated, every event
    /// is ignored, including presses already queued behind the close request.
    pub fn handle(&mut self, event: DisplayEvent) -> LoopState {
        if self.state == LoopState::Terminated {
            return self.state;
        }
        match event {
            DisplayEvent::PointerPress { window } => {
                if let Some(spec) = self.regions.spec_for(window) {
                    tracing::debug!(label = %spec.label, keys = spec.keys.len(), "button pressed");
                    self.injector.inject_keys(self.target, &spec.keys);
                } else {
                    tracing::debug!(window, "press outside tracked regions");
                }
            }
            DisplayEvent::CloseRequest { protocol } if protocol == self.close_protocol => {
                tracing::info!("close requested; shutting down");
                self.state = LoopState::Terminated;
            }
            DisplayEvent::CloseRequest { .. } | DisplayEvent::Expose { .. } | DisplayEvent::Other => {}
        }
        self.state
    }
}

/// The blocking wait-for-next-event loop. One thread, one suspension point;
/// each event is handled to completion before the next wait. Exposures are
/// presentation and go to the overlay; everything else goes through the
/// dispatcher. Returns once the dispatcher terminates.
pub fn run<I: KeyInjector>(conn: &DisplayConnection, overlay: &Overlay, dispatcher: &mut Dispatcher<I>) {
    loop {
        let event = conn.next_event();
        if let DisplayEvent::Expose { window } = event {
            overlay.redraw(conn, window);
            continue;
        }
        if dispatcher.handle(event) == LoopState::Terminated {
            break;
        }
    }
}
