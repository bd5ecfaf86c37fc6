use std::os::raw::c_ulong;

use x11::keysym;
use x11::xlib::KeySym;

/// A logical key, independent of the server's current keycode mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,
    Space,
    Return,
    Tab,
    Escape,
    Left,
    Right,
    Up,
    Down,
}

impl Key {
    /// The X11 keysym for this key. The keysym is stable; the keycode it maps
    /// to is looked up at send time.
    pub fn keysym(self) -> KeySym {
        let sym = match self {
            Key::A => keysym::XK_A,
            Key::B => keysym::XK_B,
            Key::C => keysym::XK_C,
            Key::D => keysym::XK_D,
            Key::E => keysym::XK_E,
            Key::F => keysym::XK_F,
            Key::G => keysym::XK_G,
            Key::H => keysym::XK_H,
            Key::I => keysym::XK_I,
            Key::J => keysym::XK_J,
            Key::K => keysym::XK_K,
            Key::L => keysym::XK_L,
            Key::M => keysym::XK_M,
            Key::N => keysym::XK_N,
            Key::O => keysym::XK_O,
            Key::P => keysym::XK_P,
            Key::Q => keysym::XK_Q,
            Key::R => keysym::XK_R,
            Key::S => keysym::XK_S,
            Key::T => keysym::XK_T,
            Key::U => keysym::XK_U,
            Key::V => keysym::XK_V,
            Key::W => keysym::XK_W,
            Key::X => keysym::XK_X,
            Key::Y => keysym::XK_Y,
            Key::Z => keysym::XK_Z,
            Key::Num0 => keysym::XK_0,
            Key::Num1 => keysym::XK_1,
            Key::Num2 => keysym::XK_2,
            Key::Num3 => keysym::XK_3,
            Key::Num4 => keysym::XK_4,
            Key::Num5 => keysym::XK_5,
            Key::Num6 => keysym::XK_6,
            Key::Num7 => keysym::XK_7,
            Key::Num8 => keysym::XK_8,
            Key::Num9 => keysym::XK_9,
            Key::Space => keysym::XK_space,
            Key::Return => keysym::XK_Return,
            Key::Tab => keysym::XK_Tab,
            Key::Escape => keysym::XK_Escape,
            Key::Left => keysym::XK_Left,
            Key::Right => keysym::XK_Right,
            Key::Up => keysym::XK_Up,
            Key::Down => keysym::XK_Down,
        };
        c_ulong::from(sym)
    }
}
