use crate::generate::Level;

/// Options controlling a [`Session`](crate::Session).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// The number of consecutive rejected moves after which a hint is shown.
    ///
    /// The default value is `2`.
    pub hint_error_threshold: u32,

    /// The level the session starts at.
    ///
    /// The default value is [`Level::One`].
    pub starting_level: Level,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            hint_error_threshold: 2,
            starting_level: Level::One,
        }
    }
}

impl SessionConfig {
    /// Sets the number of consecutive rejected moves after which a hint is shown.
    pub fn hint_error_threshold(mut self, threshold: u32) -> Self {
        self.hint_error_threshold = threshold;
        self
    }

    /// Sets the level the session starts at.
    pub fn starting_level(mut self, level: Level) -> Self {
        self.starting_level = level;
        self
    }
}
