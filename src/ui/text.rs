use gl::types::*;
use glam::{Mat4, Vec3};
use std::mem;

use crate::renderer::shader::ShaderProgram;
use crate::renderer::texture::Texture;

const VERT_SRC: &str = include_str!("../../shaders/textured.vert");
const FRAG_SRC: &str = include_str!("../../shaders/textured.frag");

const FONT_PNG: &[u8] = include_bytes!("../../assets/font.png");

// The font atlas is a 16x16 grid of glyph cells indexed by byte value.
const GLYPH_UV: f32 = 1.0 / 16.0;
const MAX_CHARS: usize = 64;

/// One glyph as six interleaved x,y,u,v vertices. `slot` is the character's
/// position in the run; the advance per slot is size + spacing, so a
/// negative spacing tightens the run.
#[rustfmt::skip]
fn glyph_quad(byte: u8, slot: usize, size: f32, spacing: f32) -> [f32; 24] {
    let offset = (size + spacing) * slot as f32;
    let half = 0.5 * size;
    let u = (byte % 16) as f32 / 16.0;
    let v = (byte / 16) as f32 / 16.0;
    [
        offset - half,  half, u,            v,
        offset - half, -half, u,            v + GLYPH_UV,
        offset + half,  half, u + GLYPH_UV, v,
        offset + half, -half, u + GLYPH_UV, v + GLYPH_UV,
        offset + half,  half, u + GLYPH_UV, v,
        offset - half, -half, u,            v + GLYPH_UV,
    ]
}

/// Draws text runs as one textured quad per byte, streamed through a
/// preallocated dynamic buffer. Owns the font atlas and its own shader.
pub struct TextRenderer {
    shader: ShaderProgram,
    font: Texture,
    vao: GLuint,
    vbo: GLuint,
}

impl TextRenderer {
    pub fn new() -> Self {
        let shader =
            ShaderProgram::from_sources(VERT_SRC, FRAG_SRC).expect("Failed to compile shaders");
        let font = Texture::from_png_bytes(FONT_PNG).expect("Failed to load font atlas");

        let mut vao: GLuint = 0;
        let mut vbo: GLuint = 0;

        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);

            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                (MAX_CHARS * 24 * mem::size_of::<f32>()) as GLsizeiptr,
                std::ptr::null(),
                gl::DYNAMIC_DRAW,
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

        Self {
            shader,
            font,
            vao,
            vbo,
        }
    }

    /// Draw `text` starting at `position` in world space. `size` is the
    /// glyph quad extent in world units.
    pub fn draw(&mut self, text: &str, size: f32, spacing: f32, position: Vec3, projection: &Mat4) {
        assert!(text.len() <= MAX_CHARS, "text run exceeds the glyph buffer");

        let mut vertices: Vec<f32> = Vec::with_capacity(text.len() * 24);
        for (slot, byte) in text.bytes().enumerate() {
            vertices.extend_from_slice(&glyph_quad(byte, slot, size, spacing));
        }

        self.shader.bind();
        self.shader.set_mat4("u_projection", projection);
        self.shader.set_mat4("u_model", &Mat4::from_translation(position));
        self.shader.set_int("u_texture", 0);
        self.font.bind();

        unsafe {
            gl::BindVertexArray(self.vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, self.vbo);
            gl::BufferSubData(
                gl::ARRAY_BUFFER,
                0,
                (vertices.len() * mem::size_of::<f32>()) as GLsizeiptr,
                vertices.as_ptr() as *const _,
            );

            gl::DrawArrays(gl::TRIANGLES, 0, (text.len() * 6) as GLsizei);
            gl::BindVertexArray(0);
        }
    }
}

impl Drop for TextRenderer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.vao);
            gl::DeleteBuffers(1, &self.vbo);
        }
    }
}
