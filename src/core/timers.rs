/// Delay and sound countdowns, both decremented at 60Hz regardless of how
/// many instructions run in between.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timers {
    pub delay: u8,
    pub sound: u8,
}

impl Timers {
    /// One 1/60s tick. Returns whether the tone should be audible afterwards.
    pub fn tick(&mut self) -> bool {
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
        self.tone()
    }

    pub fn tone(&self) -> bool {
        self.sound > 0
    }
}
