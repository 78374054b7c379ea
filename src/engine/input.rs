use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::EventPump;
use std::collections::HashSet;

pub struct InputState {
    pub keys: HashSet<Scancode>,
    pub quit: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys: HashSet::new(),
            quit: false,
        }
    }

    pub fn update(&mut self, event_pump: &mut EventPump) {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => self.quit = true,
                Event::KeyDown {
                    scancode: Some(Scancode::Escape),
                    ..
                } => self.quit = true,
                Event::KeyDown {
                    scancode: Some(sc), ..
                } => {
                    self.keys.insert(sc);
                }
                Event::KeyUp {
                    scancode: Some(sc), ..
                } => {
                    self.keys.remove(&sc);
                }
                _ => {}
            }
        }
    }

    pub fn is_key_held(&self, sc: Scancode) -> bool {
        self.keys.contains(&sc)
    }

    pub fn steer_left(&self) -> bool {
        self.is_key_held(Scancode::Left)
    }

    pub fn steer_right(&self) -> bool {
        self.is_key_held(Scancode::Right)
    }
}
