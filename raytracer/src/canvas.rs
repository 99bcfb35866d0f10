//! An in-memory raster buffer and its encodings to PPM, PNG, and GIF.

use crate::color::{quantize, Color};
use crate::error::RenderError;
use std::io::Write;

/// A grid of colors, written to by the renderer one pixel at a time and
/// later flattened to a file format.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    /// A canvas of the given size, every pixel starting out black.
    pub fn new(width: u32, height: u32) -> Self {
        Canvas {
            width,
            height,
            pixels: vec![Color::black(); (width * height) as usize],
        }
    }

    /// The canvas's width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The canvas's height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The color at `(x, y)`.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Overwrite the color at `(x, y)`.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// The row-major pixel buffer, writable by a render worker's own band.
    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Render as an 8-bit RGB image for lossless PNG encoding.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        let mut image = image::RgbImage::new(self.width, self.height);
        for (i, pixel) in self.pixels.iter().enumerate() {
            let x = i as u32 % self.width;
            let y = i as u32 / self.width;
            image.put_pixel(x, y, (*pixel).into());
        }
        image
    }

    /// Encode and write this canvas as a PNG file.
    pub fn save_png(&self, path: &std::path::Path) -> Result<(), RenderError> {
        self.to_rgb_image().save(path)?;
        Ok(())
    }

    /// Write this canvas as a plain (P3) PPM, bit-exact with the reference
    /// encoder: a three-line header, then pixel rows wrapped so no line
    /// exceeds 70 characters.
    pub fn write_ppm<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writeln!(writer, "P3")?;
        writeln!(writer, "{} {}", self.width, self.height)?;
        writeln!(writer, "255")?;

        for row in self.pixels.chunks(self.width as usize) {
            let mut line = String::new();
            for pixel in row {
                for component in [quantize(pixel.r), quantize(pixel.g), quantize(pixel.b)] {
                    push_wrapped(&mut writer, &mut line, component)?;
                }
            }
            if !line.is_empty() {
                writeln!(writer, "{}", line)?;
            }
        }
        Ok(())
    }
}

/// Append `component` to `line`, first flushing `line` to `writer` if doing
/// so would push it past 70 characters.
fn push_wrapped<W: Write>(writer: &mut W, line: &mut String, component: u8) -> std::io::Result<()> {
    let token_len = if component >= 100 {
        3
    } else if component >= 10 {
        2
    } else {
        1
    };
    let extra = if line.is_empty() {
        token_len
    } else {
        token_len + 1
    };
    if line.len() + extra > 70 {
        writeln!(writer, "{}", line)?;
        line.clear();
    }
    if !line.is_empty() {
        line.push(' ');
    }
    line.push_str(&component.to_string());
    Ok(())
}

/// Encode a sequence of equally-sized canvases as an animated GIF, looping
/// forever, each frame held for `delay_centiseconds` hundredths of a second.
pub fn encode_gif<W: Write>(
    frames: &[Canvas],
    mut writer: W,
    delay_centiseconds: u16,
) -> Result<(), RenderError> {
    let (width, height) = match frames.first() {
        Some(first) => (first.width as u16, first.height as u16),
        None => return Ok(()),
    };

    let mut encoder = gif::Encoder::new(&mut writer, width, height, &[])?;
    encoder.set_repeat(gif::Repeat::Infinite)?;

    for canvas in frames {
        let mut rgba = Vec::with_capacity(canvas.pixels.len() * 4);
        for pixel in &canvas.pixels {
            rgba.push(quantize(pixel.r));
            rgba.push(quantize(pixel.g));
            rgba.push(quantize(pixel.b));
            rgba.push(255);
        }
        let mut frame = gif::Frame::from_rgba_speed(width, height, &mut rgba, 10);
        frame.delay = delay_centiseconds;
        encoder.write_frame(&frame)?;
    }
    Ok(())
}
