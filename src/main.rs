mod engine;
mod level;
mod renderer;
mod sim;
mod ui;

use clap::Parser;
use engine::input::InputState;
use engine::time::{FixedTimestep, FrameTimer};
use engine::window::GameWindow;
use glam::{Mat4, Vec3};
use renderer::texture::{Texture, TextureStore};
use renderer::Renderer;
use sim::physics::FIXED_STEP;
use ui::{Outcome, TextRenderer};

const WINDOW_WIDTH: u32 = 640;
const WINDOW_HEIGHT: u32 = 480;

// World-space camera box the arena is laid out against.
const ORTHO_LEFT: f32 = -5.0;
const ORTHO_RIGHT: f32 = 5.0;
const ORTHO_BOTTOM: f32 = -3.75;
const ORTHO_TOP: f32 = 3.75;

// Steering adds this much horizontal acceleration per held frame. It
// accumulates and never decays, so letting go does not stop the drift.
const STEER_ACCEL: f32 = 0.01;

const BANNER_SIZE: f32 = 0.5;
const BANNER_SPACING: f32 = -0.25;
const BANNER_POS: Vec3 = Vec3::new(-2.0, 0.0, 0.0);

const PLAYER_PNG: &[u8] = include_bytes!("../assets/player.png");
const BLOCK_PNG: &[u8] = include_bytes!("../assets/block.png");
const PLATFORM_PNG: &[u8] = include_bytes!("../assets/platform.png");

#[derive(Parser)]
#[command(name = "lander", about = "Steer the falling craft onto the landing pad")]
struct Args {
    /// Window size multiplier
    #[arg(long, default_value_t = 1)]
    scale: u32,
}

fn main() {
    let args = Args::parse();
    let scale = args.scale.max(1);

    let sdl = sdl2::init().expect("Failed to init SDL2");
    let window = GameWindow::new(&sdl, "Lander", WINDOW_WIDTH * scale, WINDOW_HEIGHT * scale);

    let mut renderer = Renderer::init();
    let mut text = TextRenderer::new();

    let mut textures = TextureStore::new();
    let player_tex = textures.add(
        Texture::from_png_bytes(PLAYER_PNG).expect("Failed to load player texture"),
    );
    let block_tex = textures.add(
        Texture::from_png_bytes(BLOCK_PNG).expect("Failed to load block texture"),
    );
    let platform_tex = textures.add(
        Texture::from_png_bytes(PLATFORM_PNG).expect("Failed to load platform texture"),
    );

    let mut world = level::build_world(player_tex, block_tex, platform_tex);

    let projection = Mat4::orthographic_rh_gl(
        ORTHO_LEFT,
        ORTHO_RIGHT,
        ORTHO_BOTTOM,
        ORTHO_TOP,
        -1.0,
        1.0,
    );

    let mut event_pump = sdl.event_pump().expect("Failed to get event pump");
    let mut input = InputState::new();
    let mut timer = FrameTimer::new();
    let mut clock = FixedTimestep::new(FIXED_STEP);
    let mut outcome: Option<Outcome> = None;

    loop {
        timer.tick();
        input.update(&mut event_pump);

        if input.quit {
            break;
        }

        // Steering applies once per frame, left wins if both keys are held,
        // and stops mattering once the run is decided.
        if outcome.is_none() {
            if input.steer_left() {
                world.player.acceleration.x -= STEER_ACCEL;
            } else if input.steer_right() {
                world.player.acceleration.x += STEER_ACCEL;
            }
        }

        // The clock owes however many steps the frame covered; the
        // simulation keeps running even after the banner is up.
        let steps = clock.accumulate(timer.dt);
        for _ in 0..steps {
            world.step_player(FIXED_STEP);
        }

        // The first decided outcome is final. The latch keeps updating as
        // the craft slides around afterwards, but the banner never flips.
        if outcome.is_none() {
            if let Some(contact) = world.last_contact() {
                outcome = Outcome::from_contact(contact);
                #[cfg(debug_assertions)]
                if let Some(decided) = outcome {
                    println!("[outcome] {}", decided.message());
                }
            }
        }

        match outcome {
            None => renderer.draw_scene(&world, &textures, &projection),
            Some(decided) => {
                renderer.clear();
                text.draw(
                    decided.message(),
                    BANNER_SIZE,
                    BANNER_SPACING,
                    BANNER_POS,
                    &projection,
                );
            }
        }

        window.swap();
    }
}
