use crate::config::Config;
use crate::consts;
use crate::core::error::Error;
use crate::core::processor::Processor;
use crate::external::input::{Command, KeyboardDriver};
use crate::external::output::{AudioDriver, DisplayDriver};
use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Paused,
    Quit,
}

/// Owns the processor and the SDL adapters, and paces them at 60 frames a
/// second.
pub struct Emulator {
    processor: Processor,
    display: DisplayDriver,
    audio: AudioDriver,
    keyboard: KeyboardDriver,
    config: Config,
    state: State,
    _context: sdl2::Sdl,
}

impl Emulator {
    pub fn new(processor: Processor, config: Config) -> Result<Self, Error> {
        let context = sdl2::init().map_err(Error::Sdl)?;
        let display = DisplayDriver::new(&context, &processor.display(), &config)?;
        let audio = AudioDriver::new(&context, &config)?;
        let keyboard = KeyboardDriver::new(&context, &processor.keypad())?;
        Ok(Emulator {
            processor,
            display,
            audio,
            keyboard,
            config,
            state: State::Running,
            _context: context,
        })
    }

    fn handle(&mut self, command: Command) {
        match command {
            Command::Quit => self.state = State::Quit,
            Command::TogglePause => {
                self.state = match self.state {
                    State::Running => {
                        log::info!("paused");
                        State::Paused
                    }
                    State::Paused => {
                        log::info!("running");
                        State::Running
                    }
                    State::Quit => State::Quit,
                };
            }
            Command::VolumeUp => log::info!("volume {}", self.audio.volume_up()),
            Command::VolumeDown => log::info!("volume {}", self.audio.volume_down()),
        }
    }

    pub fn run(&mut self) -> Result<(), Error> {
        let frame = Duration::from_secs(1) / consts::TIMER_HZ;
        log::info!(
            "running {} instructions per second with {} quirks",
            self.config.inst_per_second,
            self.processor.variant()
        );
        let mut frame_count: u64 = 0;
        self.display.draw()?;

        while self.state != State::Quit {
            for command in self.keyboard.poll() {
                self.handle(command);
            }
            match self.state {
                State::Quit => break,
                State::Paused => {
                    self.audio.set_tone(false);
                    thread::sleep(frame);
                    continue;
                }
                State::Running => {}
            }

            let started = Instant::now();
            let per_frame = self.config.instructions_for_frame(frame_count);
            frame_count = frame_count.wrapping_add(1);
            let redraw = self.processor.run_batch(per_frame);
            if let Some(rest) = frame.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            }

            if redraw {
                self.display.draw()?;
            }
            let tone = self.processor.tick_timers();
            self.audio.set_tone(tone);
        }
        Ok(())
    }
}
