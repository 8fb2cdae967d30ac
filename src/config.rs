use crate::consts;
use crate::core::variant::Variant;

/// Session settings, fixed once the emulator starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host pixels per CHIP-8 pixel.
    pub scale_factor: u32,
    /// 0xRRGGBBAA
    pub fg_color: u32,
    pub bg_color: u32,
    pub pixel_outlines: bool,
    pub inst_per_second: u32,
    pub square_wave_freq: u32,
    pub audio_sample_rate: u32,
    pub volume: i16,
    pub variant: Variant,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scale_factor: 20,
            fg_color: 0xFFFFFFFF,
            bg_color: 0x00000000,
            pixel_outlines: true,
            inst_per_second: 700,
            square_wave_freq: 440,
            audio_sample_rate: 44100,
            volume: 2500,
            variant: Variant::Baseline,
        }
    }
}

impl Config {
    /// Instructions to run in the given frame. The remainder of
    /// `inst_per_second / 60` is spread over the second, so every frame
    /// count within one second sums to exactly `inst_per_second`.
    pub fn instructions_for_frame(&self, frame: u64) -> u32 {
        let ips = self.inst_per_second as u64;
        let hz = consts::TIMER_HZ as u64;
        let slot = frame % hz;
        (ips * (slot + 1) / hz - ips * slot / hz) as u32
    }

    pub fn window_width(&self) -> u32 {
        consts::DISPL_WIDTH as u32 * self.scale_factor
    }

    pub fn window_height(&self) -> u32 {
        consts::DISPL_HEIGHT as u32 * self.scale_factor
    }
}
