use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use crate::core::error::Error;
use crate::core::ram::KeyboardBuffer;
use std::cell::RefCell;
use std::rc::Rc;

/// Host-level requests that come in alongside key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    TogglePause,
    VolumeUp,
    VolumeDown,
}

/// ```text
///  1 2 3 4      1 2 3 C
///  Q W E R  ->  4 5 6 D
///  A S D F      7 8 9 E
///  Z X C V      A 0 B F
/// ```
pub fn keymap(key: Keycode) -> Option<u8> {
    match key {
        Keycode::Num1 => Some(0x1),
        Keycode::Num2 => Some(0x2),
        Keycode::Num3 => Some(0x3),
        Keycode::Num4 => Some(0xC),
        Keycode::Q => Some(0x4),
        Keycode::W => Some(0x5),
        Keycode::E => Some(0x6),
        Keycode::R => Some(0xD),
        Keycode::A => Some(0x7),
        Keycode::S => Some(0x8),
        Keycode::D => Some(0x9),
        Keycode::F => Some(0xE),
        Keycode::Z => Some(0xA),
        Keycode::X => Some(0x0),
        Keycode::C => Some(0xB),
        Keycode::V => Some(0xF),
        _ => None,
    }
}

pub struct KeyboardDriver {
    events: sdl2::EventPump,
    pub keyboard_buffer: Rc<RefCell<KeyboardBuffer>>,
}

impl KeyboardDriver {
    pub fn new(
        context: &sdl2::Sdl,
        keyboard_buffer_: &Rc<RefCell<KeyboardBuffer>>,
    ) -> Result<Self, Error> {
        Ok(KeyboardDriver {
            events: context.event_pump().map_err(Error::Sdl)?,
            keyboard_buffer: Rc::clone(keyboard_buffer_),
        })
    }

    /// Drains pending events into the keypad, returning any host commands.
    pub fn poll(&mut self) -> Vec<Command> {
        let mut commands = Vec::new();
        for event in self.events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => commands.push(Command::Quit),
                Event::KeyDown {
                    keycode: Some(Keycode::Space),
                    repeat: false,
                    ..
                } => commands.push(Command::TogglePause),
                Event::KeyDown {
                    keycode: Some(Keycode::Up),
                    ..
                } => commands.push(Command::VolumeUp),
                Event::KeyDown {
                    keycode: Some(Keycode::Down),
                    ..
                } => commands.push(Command::VolumeDown),
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(i) = keymap(key) {
                        self.keyboard_buffer.borrow_mut().set(i, true);
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(i) = keymap(key) {
                        self.keyboard_buffer.borrow_mut().set(i, false);
                    }
                }
                _ => continue,
            }
        }
        commands
    }
}
