use gl::types::*;

use crate::sim::entity::TextureHandle;

pub struct Texture {
    pub id: GLuint,
}

impl Texture {
    /// Decode a PNG byte slice and upload it as an RGBA texture.
    /// Filtering is NEAREST both ways so the pixel tiles stay crisp when
    /// the quads are scaled up.
    pub fn from_png_bytes(bytes: &[u8]) -> Result<Self, String> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| format!("Failed to decode image: {e}"))?
            .to_rgba8();
        let (width, height) = image.dimensions();

        let mut id: GLuint = 0;
        unsafe {
            gl::GenTextures(1, &mut id);
            gl::BindTexture(gl::TEXTURE_2D, id);
            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                gl::RGBA as GLint,
                width as GLsizei,
                height as GLsizei,
                0,
                gl::RGBA,
                gl::UNSIGNED_BYTE,
                image.as_raw().as_ptr() as *const _,
            );
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::NEAREST as GLint);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::NEAREST as GLint);
            gl::BindTexture(gl::TEXTURE_2D, 0);
        }

        Ok(Self { id })
    }

    pub fn bind(&self) {
        unsafe {
            gl::ActiveTexture(gl::TEXTURE0);
            gl::BindTexture(gl::TEXTURE_2D, self.id);
        }
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteTextures(1, &self.id);
        }
    }
}

/// Holds all loaded textures. Entities reference textures by TextureHandle
/// index, so world data stays plain and GL-free.
pub struct TextureStore {
    textures: Vec<Texture>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            textures: Vec::new(),
        }
    }

    pub fn add(&mut self, texture: Texture) -> TextureHandle {
        let handle = TextureHandle(self.textures.len());
        self.textures.push(texture);
        handle
    }

    pub fn get(&self, handle: TextureHandle) -> &Texture {
        &self.textures[handle.0]
    }
}
