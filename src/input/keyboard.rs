//! Polled keyboard state for game loops.
//!
//! The platform layer feeds raw key events in through [`Keyboard::key_pressed`]
//! and [`Keyboard::key_released`]; the game calls [`Keyboard::update`] once
//! per tick, after reading input, so that [`Keyboard::pressed`] and
//! [`Keyboard::released`] report edges relative to the previous tick.

/// Number of tracked key codes. Codes at or above this are ignored.
pub const KEY_COUNT: usize = 526;

/// Where on the keyboard a key was reported from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum KeyLocation {
    #[default]
    Unknown,
    Standard,
    Left,
    Right,
    Numpad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key(pub u16);

impl Key {
    pub const BACKSPACE: Key = Key(8);
    pub const TAB: Key = Key(9);
    pub const ENTER: Key = Key(10);
    pub const SHIFT: Key = Key(16);
    pub const CONTROL: Key = Key(17);
    pub const ALT: Key = Key(18);
    pub const ESCAPE: Key = Key(27);
    pub const SPACE: Key = Key(32);
    pub const LEFT: Key = Key(37);
    pub const UP: Key = Key(38);
    pub const RIGHT: Key = Key(39);
    pub const DOWN: Key = Key(40);

    /// Key for an ASCII letter or digit, `None` for anything else.
    pub fn from_char(c: char) -> Option<Key> {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' => Some(Key(c.to_ascii_uppercase() as u16)),
            _ => None,
        }
    }

    fn index(self) -> Option<usize> {
        let idx = self.0 as usize;
        (idx < KEY_COUNT).then_some(idx)
    }
}

pub struct Keyboard {
    keys: Box<[bool; KEY_COUNT]>,
    keys_last: Box<[bool; KEY_COUNT]>,
    locations: Box<[KeyLocation; KEY_COUNT]>,
    last_key_code: Option<u16>,
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Keyboard {
    pub fn new() -> Self {
        Self {
            keys: Box::new([false; KEY_COUNT]),
            keys_last: Box::new([false; KEY_COUNT]),
            locations: Box::new([KeyLocation::Unknown; KEY_COUNT]),
            last_key_code: None,
        }
    }

    pub fn key_pressed(&mut self, key: Key, location: KeyLocation) {
        self.record(key, location, true);
    }

    pub fn key_released(&mut self, key: Key, location: KeyLocation) {
        self.record(key, location, false);
    }

    fn record(&mut self, key: Key, location: KeyLocation, down: bool) {
        self.last_key_code = Some(key.0);

        match key.index() {
            Some(idx) => {
                self.keys[idx] = down;
                self.locations[idx] = location;
            }
            None => log::trace!("ignoring out of range key code {}", key.0),
        }
    }

    /// Ends the current tick.
    pub fn update(&mut self) {
        *self.keys_last = *self.keys;
    }

    /// Went down since the last [`update`](Self::update).
    pub fn pressed(&self, key: Key) -> bool {
        key.index()
            .is_some_and(|idx| self.keys[idx] && !self.keys_last[idx])
    }

    pub fn held(&self, key: Key) -> bool {
        key.index().is_some_and(|idx| self.keys[idx])
    }

    /// Went up since the last [`update`](Self::update).
    pub fn released(&self, key: Key) -> bool {
        key.index()
            .is_some_and(|idx| !self.keys[idx] && self.keys_last[idx])
    }

    pub fn any_pressed(&self) -> bool {
        self.keys
            .iter()
            .zip(self.keys_last.iter())
            .any(|(&now, &last)| now && !last)
    }

    pub fn any_held(&self) -> bool {
        self.keys.iter().any(|&now| now)
    }

    pub fn any_released(&self) -> bool {
        self.keys
            .iter()
            .zip(self.keys_last.iter())
            .any(|(&now, &last)| !now && last)
    }

    pub fn is_standard(&self, key: Key) -> bool {
        self.location(key) == Some(KeyLocation::Standard)
    }

    pub fn is_left(&self, key: Key) -> bool {
        self.location(key) == Some(KeyLocation::Left)
    }

    pub fn is_right(&self, key: Key) -> bool {
        self.location(key) == Some(KeyLocation::Right)
    }

    pub fn is_numpad(&self, key: Key) -> bool {
        self.location(key) == Some(KeyLocation::Numpad)
    }

    pub fn location(&self, key: Key) -> Option<KeyLocation> {
        key.index().map(|idx| self.locations[idx])
    }

    pub fn last_key_code(&self) -> Option<u16> {
        self.last_key_code
    }
}
