use crate::display::DisplayConnection;
use crate::keys::Key;
use crate::target::TargetWindow;

/// Sink for a button's key sequence. The live implementation synthesizes X
/// key events; tests substitute a recording implementation.
pub trait KeyInjector {
    fn inject_keys(&mut self, target: TargetWindow, keys: &[Key]);
}

/// Expand a key sequence into wire order: press then release for every key,
/// in sequence order, never interleaved or batched.
pub fn event_order(keys: &[Key]) -> impl Iterator<Item = (Key, bool)> + '_ {
    keys.iter().flat_map(|&key| [(key, true), (key, false)])
}

/// Replays key sequences as synthetic press/release events on the live
/// connection. Fire-and-forget: events are flushed to the server and never
/// acknowledged, and an unresolved target drops the whole sequence.
pub struct XKeyInjector<'c> {
    conn: &'c DisplayConnection,
}

impl<'c> XKeyInjector<'c> {
    pub fn new(conn: &'c DisplayConnection) -> Self {
        Self { conn }
    }
}

impl KeyInjector for XKeyInjector<'_> {
    fn inject_keys(&mut self, target: TargetWindow, keys: &[Key]) {
        let Some(window) = target.id() else {
            tracing::debug!("target unresolved; dropping key sequence");
            return;
        };
        for (key, press) in event_order(keys) {
            // Keycodes come from the current mapping at send time, never cached.
            match self.conn.keysym_to_keycode(key.keysym()) {
                Some(code) => self.conn.send_key_event(window, code, press),
                None => tracing::debug!(?key, "no keycode for keysym in current mapping"),
            }
        }
        self.conn.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::event_order;
    use crate::keys::Key;

    #[test]
    fn single_key_expands_to_press_then_release() {
        let order: Vec<_> = event_order(&[Key::S]).collect();
        assert_eq!(order, vec![(Key::S, true), (Key::S, false)]);
    }

    #[test]
    fn each_key_is_released_before_the_next_is_pressed() {
        let order: Vec<_> = event_order(&[Key::A, Key::D]).collect();
        assert_eq!(
            order,
            vec![
                (Key::A, true),
                (Key::A, false),
                (Key::D, true),
                (Key::D, false),
            ]
        );
    }

    #[test]
    fn combo_expands_to_twelve_events_in_sequence_order() {
        let keys = [Key::L, Key::H, Key::L, Key::H, Key::L, Key::H];
        let order: Vec<_> = event_order(&keys).collect();
        assert_eq!(order.len(), 12);
        for (i, key) in keys.iter().enumerate() {
            assert_eq!(order[2 * i], (*key, true));
            assert_eq!(order[2 * i + 1], (*key, false));
        }
    }

    #[test]
    fn event_count_is_twice_the_sequence_length() {
        for len in 1..=8 {
            let keys = vec![Key::H; len];
            assert_eq!(event_order(&keys).count(), 2 * len);
        }
    }
}
