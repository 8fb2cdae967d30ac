use crate::config::Config;
use crate::consts;
use crate::core::error::Error;
use crate::core::ram::DisplayBuffer;
use crate::utils;
use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::cell::RefCell;
use std::rc::Rc;

const VOLUME_STEP: i16 = 500;

fn color(rgba: u32) -> Color {
    let (r, g, b, a) = utils::rgba(rgba);
    Color::RGBA(r, g, b, a)
}

pub struct DisplayDriver {
    pub screen: Canvas<Window>,
    pub display_buffer: Rc<RefCell<DisplayBuffer>>,
    scale: u32,
    fg: Color,
    bg: Color,
    pixel_outlines: bool,
}

impl DisplayDriver {
    pub fn new(
        context: &sdl2::Sdl,
        display_buffer_: &Rc<RefCell<DisplayBuffer>>,
        config: &Config,
    ) -> Result<Self, Error> {
        let video_subsystem = context.video().map_err(Error::Sdl)?;
        let window = video_subsystem
            .window("CHIP-8", config.window_width(), config.window_height())
            .position_centered()
            .build()
            .map_err(|e| Error::Sdl(e.to_string()))?;
        let mut canvas: Canvas<Window> = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| Error::Sdl(e.to_string()))?;

        let bg = color(config.bg_color);
        canvas.set_draw_color(bg);
        canvas.clear();
        canvas.present();

        Ok(DisplayDriver {
            screen: canvas,
            display_buffer: Rc::clone(display_buffer_),
            scale: config.scale_factor,
            fg: color(config.fg_color),
            bg,
            pixel_outlines: config.pixel_outlines,
        })
    }

    pub fn draw(&mut self) -> Result<(), Error> {
        let display = self.display_buffer.borrow();
        for (i, &lit) in display.buffer.iter().enumerate() {
            let rect = Rect::new(
                ((i % consts::DISPL_WIDTH) as u32 * self.scale) as i32,
                ((i / consts::DISPL_WIDTH) as u32 * self.scale) as i32,
                self.scale,
                self.scale,
            );

            self.screen.set_draw_color(if lit { self.fg } else { self.bg });
            self.screen.fill_rect(rect).map_err(Error::Sdl)?;

            if lit && self.pixel_outlines {
                self.screen.set_draw_color(self.bg);
                self.screen.draw_rect(rect).map_err(Error::Sdl)?;
            }
        }
        self.screen.present();
        Ok(())
    }
}

/// Square wave generator fed to the SDL audio callback.
pub struct SquareWave {
    running_sample: u32,
    half_period: u32,
    pub volume: i16,
}

impl SquareWave {
    fn new(sample_rate: u32, freq: u32, volume: i16) -> Self {
        SquareWave {
            running_sample: 0,
            half_period: (sample_rate / freq.max(1) / 2).max(1),
            volume: volume.clamp(0, consts::MAX_VOLUME),
        }
    }
}

impl AudioCallback for SquareWave {
    type Channel = i16;

    fn callback(&mut self, out: &mut [i16]) {
        for sample in out.iter_mut() {
            *sample = if (self.running_sample / self.half_period) % 2 == 1 {
                self.volume
            } else {
                self.volume.saturating_neg()
            };
            self.running_sample = self.running_sample.wrapping_add(1);
        }
    }
}

pub struct AudioDriver {
    device: AudioDevice<SquareWave>,
    playing: bool,
}

impl AudioDriver {
    pub fn new(context: &sdl2::Sdl, config: &Config) -> Result<Self, Error> {
        let audio_subsystem = context.audio().map_err(Error::Sdl)?;
        let desired = AudioSpecDesired {
            freq: Some(config.audio_sample_rate as i32),
            channels: Some(1),
            samples: Some(512),
        };
        let freq = config.square_wave_freq;
        let volume = config.volume;
        let device = audio_subsystem
            .open_playback(None, &desired, |spec| {
                if spec.freq as u32 != config.audio_sample_rate || spec.channels != 1 {
                    log::warn!(
                        "audio device gave {} Hz x{} channels, wanted {} Hz mono",
                        spec.freq,
                        spec.channels,
                        config.audio_sample_rate
                    );
                }
                SquareWave::new(spec.freq as u32, freq, volume)
            })
            .map_err(Error::Sdl)?;

        Ok(AudioDriver {
            device,
            playing: false,
        })
    }

    /// Level-triggered: call every tick with the current tone state.
    pub fn set_tone(&mut self, on: bool) {
        if on && !self.playing {
            self.device.resume();
        } else if !on && self.playing {
            self.device.pause();
        }
        self.playing = on;
    }

    pub fn volume_up(&mut self) -> i16 {
        let mut wave = self.device.lock();
        wave.volume = step_volume(wave.volume, VOLUME_STEP);
        wave.volume
    }

    pub fn volume_down(&mut self) -> i16 {
        let mut wave = self.device.lock();
        wave.volume = step_volume(wave.volume, -VOLUME_STEP);
        wave.volume
    }
}

fn step_volume(volume: i16, delta: i16) -> i16 {
    volume.saturating_add(delta).clamp(0, consts::MAX_VOLUME)
}
