use rand::Rng;

use crate::config::NoiseConfig;

/// A fixed set of pre-rendered grain frames, handed out round-robin.
///
/// Frames are RGBA bytes ready for `ImageData`. Nothing is regenerated while
/// cycling; a new pool is built only when the canvas size changes.
#[derive(Debug, Clone)]
pub struct NoisePool {
    width: u32,
    height: u32,
    frames: Vec<Vec<u8>>,
    cursor: usize,
}

impl NoisePool {
    pub fn generate<R: Rng>(width: u32, height: u32, config: &NoiseConfig, rng: &mut R) -> Self {
        let pixels = width as usize * height as usize;
        let frames = (0..config.frames)
            .map(|_| {
                let mut frame = vec![0u8; pixels * 4];
                for pixel in frame.chunks_exact_mut(4) {
                    if rng.gen::<f64>() < config.density {
                        pixel.copy_from_slice(&config.pixel);
                    }
                }
                frame
            })
            .collect();

        Self {
            width,
            height,
            frames,
            cursor: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Advances to the next frame and returns it.
    pub fn next_frame(&mut self) -> Option<&[u8]> {
        if self.frames.is_empty() {
            return None;
        }
        self.cursor = (self.cursor + 1) % self.frames.len();
        Some(&self.frames[self.cursor])
    }
}
