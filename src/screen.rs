// Screen sink - the write-only pixel target driven by the PPU
//
// During visible scanlines the PPU pushes one pixel per dot into whatever
// implements `Screen`, and signals the end of each frame. `FrameBuffer` is the
// stock implementation: a plain 256x240 RGB surface with an optional PNG
// export behind the `screenshot` feature.

#[cfg(feature = "screenshot")]
use std::fs::File;
#[cfg(feature = "screenshot")]
use std::io::BufWriter;
#[cfg(feature = "screenshot")]
use std::path::Path;

/// An RGB color triple
pub type Rgb = (u8, u8, u8);

/// Visible screen width in pixels
pub const SCREEN_WIDTH: usize = 256;

/// Visible screen height in pixels
pub const SCREEN_HEIGHT: usize = 240;

/// Total number of visible pixels per frame
pub const SCREEN_SIZE: usize = SCREEN_WIDTH * SCREEN_HEIGHT;

/// Write-only pixel sink attached to the PPU
///
/// Calls arrive synchronously from inside `run_cycles`; implementations must
/// not re-enter the PPU. `write_at` receives only real colors: transparent
/// pixels are substituted with the universal backdrop color before emission.
pub trait Screen {
    /// Write one pixel; `x < 256`, `y < 240`
    fn write_at(&mut self, x: usize, y: usize, color: Rgb);

    /// Learn the RGB sentinel the PPU reserves for transparency
    ///
    /// Called once when the screen is attached (and again if the palette is
    /// replaced). Sinks that blit PPU-decoded tiles themselves can use it as
    /// a color key; the plain pixel path never emits it.
    fn set_transparent_color(&mut self, _color: Rgb) {}

    /// A frame boundary was crossed
    fn end_frame(&mut self);
}

/// 256x240 RGB frame buffer
///
/// Collects the pixels of the frame in flight and counts completed frames.
///
/// # Example
///
/// ```
/// use ricoh2c02::{FrameBuffer, SCREEN_WIDTH, SCREEN_HEIGHT};
///
/// let fb = FrameBuffer::new();
/// assert_eq!(fb.pixels().len(), SCREEN_WIDTH * SCREEN_HEIGHT);
/// ```
pub struct FrameBuffer {
    pixels: Vec<Rgb>,
    frames: u64,
    transparent_color: Rgb,
}

impl FrameBuffer {
    /// Create a frame buffer cleared to black
    pub fn new() -> Self {
        FrameBuffer {
            pixels: vec![(0, 0, 0); SCREEN_SIZE],
            frames: 0,
            transparent_color: (0, 0, 0),
        }
    }

    /// Read one pixel back
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        assert!(x < SCREEN_WIDTH, "x coordinate {} out of bounds", x);
        assert!(y < SCREEN_HEIGHT, "y coordinate {} out of bounds", y);
        self.pixels[y * SCREEN_WIDTH + x]
    }

    /// The whole surface, row-major
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Number of completed frames observed
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// The transparency sentinel announced by the PPU
    pub fn transparent_color(&self) -> Rgb {
        self.transparent_color
    }

    /// Fill the surface with one color
    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Export the current surface as an 8-bit RGB PNG
    #[cfg(feature = "screenshot")]
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), ScreenshotError> {
        let file = File::create(path)?;
        let mut encoder = png::Encoder::new(
            BufWriter::new(file),
            SCREEN_WIDTH as u32,
            SCREEN_HEIGHT as u32,
        );
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut data = Vec::with_capacity(SCREEN_SIZE * 3);
        for &(r, g, b) in &self.pixels {
            data.extend_from_slice(&[r, g, b]);
        }

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&data)?;
        Ok(())
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for FrameBuffer {
    fn write_at(&mut self, x: usize, y: usize, color: Rgb) {
        assert!(x < SCREEN_WIDTH, "x coordinate {} out of bounds", x);
        assert!(y < SCREEN_HEIGHT, "y coordinate {} out of bounds", y);
        self.pixels[y * SCREEN_WIDTH + x] = color;
    }

    fn set_transparent_color(&mut self, color: Rgb) {
        self.transparent_color = color;
    }

    fn end_frame(&mut self) {
        self.frames += 1;
    }
}

/// Errors from PNG screenshot export
#[cfg(feature = "screenshot")]
#[derive(Debug)]
pub enum ScreenshotError {
    /// Could not create or write the output file
    Io(std::io::Error),
    /// PNG encoding failed
    Encoding(png::EncodingError),
}

#[cfg(feature = "screenshot")]
impl std::fmt::Display for ScreenshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScreenshotError::Io(e) => write!(f, "screenshot I/O error: {}", e),
            ScreenshotError::Encoding(e) => write!(f, "PNG encoding error: {}", e),
        }
    }
}

#[cfg(feature = "screenshot")]
impl std::error::Error for ScreenshotError {}

#[cfg(feature = "screenshot")]
impl From<std::io::Error> for ScreenshotError {
    fn from(e: std::io::Error) -> Self {
        ScreenshotError::Io(e)
    }
}

#[cfg(feature = "screenshot")]
impl From<png::EncodingError> for ScreenshotError {
    fn from(e: png::EncodingError) -> Self {
        ScreenshotError::Encoding(e)
    }
}
