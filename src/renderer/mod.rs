pub mod shader;
pub mod texture;

use gl::types::*;
use glam::{Mat4, Vec3};
use std::mem;

use crate::sim::world::GameWorld;
use shader::ShaderProgram;
use texture::TextureStore;

const VERT_SRC: &str = include_str!("../../shaders/textured.vert");
const FRAG_SRC: &str = include_str!("../../shaders/textured.frag");

const CLEAR_COLOR: Vec3 = Vec3::new(0.2, 0.2, 0.2);

// Unit quad centered on the origin; every entity is this quad under its own
// model transform. V runs top-down to match the usual image row order.
#[rustfmt::skip]
const QUAD_VERTICES: [f32; 24] = [
    // x      y     u    v
    -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5,  1.0, 1.0,
     0.5,  0.5,  1.0, 0.0,
    -0.5, -0.5,  0.0, 1.0,
     0.5,  0.5,  1.0, 0.0,
    -0.5,  0.5,  0.0, 0.0,
];

pub struct Renderer {
    shader: ShaderProgram,
    vao: GLuint,
    vbo: GLuint,
}

impl Renderer {
    pub fn init() -> Self {
        unsafe {
            gl::ClearColor(CLEAR_COLOR.x, CLEAR_COLOR.y, CLEAR_COLOR.z, 1.0);
            gl::Enable(gl::BLEND);
            gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
        }

        let shader =
            ShaderProgram::from_sources(VERT_SRC, FRAG_SRC).expect("Failed to compile shaders");

        let mut vao: GLuint = 0;
        let mut vbo: GLuint = 0;

        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);

            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                mem::size_of_val(&QUAD_VERTICES) as GLsizeiptr,
                QUAD_VERTICES.as_ptr() as *const _,
                gl::STATIC_DRAW,
            );

            let stride = (4 * mem::size_of::<f32>()) as GLsizei;
            gl::EnableVertexAttribArray(0);
            gl::VertexAttribPointer(0, 2, gl::FLOAT, gl::FALSE, stride, std::ptr::null());
            gl::EnableVertexAttribArray(1);
            gl::VertexAttribPointer(
                1,
                2,
                gl::FLOAT,
                gl::FALSE,
                stride,
                (2 * mem::size_of::<f32>()) as *const _,
            );

            gl::BindVertexArray(0);
        }

        Self { shader, vao, vbo }
    }

    pub fn clear(&self) {
        unsafe {
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    /// Draw the whole world: colliders in sequence order, then the player on
    /// top, skipping anything inactive.
    pub fn draw_scene(&mut self, world: &GameWorld, textures: &TextureStore, projection: &Mat4) {
        self.clear();

        self.shader.bind();
        self.shader.set_mat4("u_projection", projection);
        self.shader.set_int("u_texture", 0);

        unsafe {
            gl::BindVertexArray(self.vao);
        }

        for entity in world.colliders.iter().chain(std::iter::once(&world.player)) {
            if !entity.active {
                continue;
            }
            textures.get(entity.texture).bind();
            self.shader.set_mat4("u_model", &entity.model);
            unsafe {
                gl::DrawArrays(gl::TRIANGLES, 0, 6);
            }
        }

        unsafe {
            gl::BindVertexArray(0);
        }
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.vao);
            gl::DeleteBuffers(1, &self.vbo);
        }
    }
}
