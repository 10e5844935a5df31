#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxAction {
    Open(usize),
    Close,
    Next,
    Previous,
}

impl LightboxAction {
    /// Maps a `KeyboardEvent.key` value to the action it triggers while open.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" | "Esc" => Some(LightboxAction::Close),
            "ArrowRight" | "Right" => Some(LightboxAction::Next),
            "ArrowLeft" | "Left" => Some(LightboxAction::Previous),
            _ => None,
        }
    }
}

/// Open/closed state and current photo of the fullscreen viewer.
///
/// `index` is always `< len` whenever `len > 0`; with an empty gallery every
/// action is a no-op and the viewer stays closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lightbox {
    len: usize,
    open: bool,
    index: usize,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            open: false,
            index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The photo being shown, if the viewer is open.
    pub fn current(&self) -> Option<usize> {
        self.open.then_some(self.index)
    }

    pub fn open(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.index = index;
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
    }

    pub fn previous(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
    }

    pub fn apply(&mut self, action: LightboxAction) {
        match action {
            LightboxAction::Open(index) => self.open(index),
            LightboxAction::Close => self.close(),
            LightboxAction::Next => self.next(),
            LightboxAction::Previous => self.previous(),
        }
    }

    /// `"2 / 3"` style position label, one-based.
    pub fn position_label(&self) -> Option<String> {
        self.current().map(|index| format!("{} / {}", index + 1, self.len))
    }
}
