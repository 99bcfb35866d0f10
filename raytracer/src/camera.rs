//! The camera's pixel projection and the parallel render scheduler.

use crate::canvas::Canvas;
use crate::transform::{self, Transform};
use crate::world::{World, MAX_RECURSION_DEPTH};
use crate::Ray;
use nalgebra::{Point3, Vector3};
use std::collections::HashMap;
use std::sync::Mutex;

/// A pinhole camera: its projection is entirely determined by image size,
/// field of view and a world→camera orientation transform.
pub struct Camera {
    hsize: u32,
    vsize: u32,
    field_of_view: f64,
    transform: Transform,
    half_width: f64,
    half_height: f64,
    pixel_size: f64,
    /// Whether to supersample each pixel with its four corners.
    pub antialias: bool,
    /// A circular orbit of `from` around `to`, if this camera animates.
    pub animation: Option<CameraAnimation>,
}

impl Camera {
    /// Build a camera with an explicit world→camera `transform`.
    pub fn new(hsize: u32, vsize: u32, field_of_view: f64, transform: Transform) -> Self {
        let half_view = (field_of_view / 2.0).tan();
        let aspect = hsize as f64 / vsize as f64;
        let (half_width, half_height) = if aspect >= 1.0 {
            (half_view, half_view / aspect)
        } else {
            (half_view * aspect, half_view)
        };
        let pixel_size = (half_width * 2.0) / hsize as f64;

        Camera {
            hsize,
            vsize,
            field_of_view,
            transform,
            half_width,
            half_height,
            pixel_size,
            antialias: false,
            animation: None,
        }
    }

    /// Build a camera at `from`, looking at `to`, with `up` as the vertical.
    pub fn looking_at(hsize: u32, vsize: u32, field_of_view: f64, from: Point3<f64>, to: Point3<f64>, up: Vector3<f64>) -> Self {
        Camera::new(hsize, vsize, field_of_view, transform::view_transform(from, to, up))
    }

    /// The image width in pixels.
    pub fn hsize(&self) -> u32 {
        self.hsize
    }

    /// The image height in pixels.
    pub fn vsize(&self) -> u32 {
        self.vsize
    }

    /// Replace the camera's world→camera transform.
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// The camera's world→camera transform.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// The ray through pixel `(x, y)`, offset within the pixel by `(xo, yo)`
    /// each in `[0, 1]`. `(0.5, 0.5)` is the pixel's center.
    pub fn ray_for_pixel(&self, x: u32, y: u32, xo: f64, yo: f64) -> Ray {
        let world_x = self.half_width - (x as f64 + xo) * self.pixel_size;
        let world_y = self.half_height - (y as f64 + yo) * self.pixel_size;

        let inverse = self.transform.inverse();
        let pixel = inverse.transform_point(&Point3::new(world_x, world_y, -1.0));
        let origin = inverse.transform_point(&Point3::origin());
        let direction = (pixel - origin).normalize();

        Ray::new(origin, direction)
    }

    fn sample(&self, world: &World, x: u32, y: u32, corners: &Mutex<HashMap<(u32, u32), crate::Color>>) -> crate::Color {
        if !self.antialias {
            let ray = self.ray_for_pixel(x, y, 0.5, 0.5);
            return world.color_at(&ray, MAX_RECURSION_DEPTH);
        }

        let mut corner_color = |cx: u32, cy: u32| -> crate::Color {
            if let Some(color) = corners.lock().unwrap().get(&(cx, cy)) {
                return *color;
            }
            let ray = self.ray_for_pixel(x, y, cx as f64 - x as f64, cy as f64 - y as f64);
            let color = world.color_at(&ray, MAX_RECURSION_DEPTH);
            corners.lock().unwrap().insert((cx, cy), color);
            color
        };

        let center = world.color_at(&self.ray_for_pixel(x, y, 0.5, 0.5), MAX_RECURSION_DEPTH);
        let sum = center
            + corner_color(x, y)
            + corner_color(x, y + 1)
            + corner_color(x + 1, y)
            + corner_color(x + 1, y + 1);
        sum / 5.0
    }

    /// Render `world` through this camera into a single [`Canvas`], row
    /// bands split across the available threads (one per worker, the last
    /// worker absorbing any remainder).
    ///
    /// [`Canvas`]: ../canvas/struct.Canvas.html
    pub fn render(&self, world: &World) -> Canvas {
        let mut canvas = Canvas::new(self.hsize, self.vsize);
        let workers = rayon::current_num_threads().max(1) as u32;
        let corners: Mutex<HashMap<(u32, u32), crate::Color>> = Mutex::new(HashMap::new());

        let rows_per_worker = self.vsize / workers;
        let remainder = self.vsize % workers;

        let bands: Vec<&mut [crate::Color]> = {
            let width = self.hsize as usize;
            let mut rest = canvas.pixels_mut();
            let mut bands = Vec::new();
            let mut start_row = 0;
            for worker in 0..workers {
                let mut rows = rows_per_worker;
                if worker == workers - 1 {
                    rows += remainder;
                }
                let (band, remaining) = rest.split_at_mut(rows as usize * width);
                bands.push(band);
                rest = remaining;
                start_row += rows;
            }
            debug_assert_eq!(start_row, self.vsize);
            bands
        };

        rayon::scope(|scope| {
            let mut y = 0;
            for (worker, band) in bands.into_iter().enumerate() {
                let rows = if worker as u32 == workers - 1 {
                    rows_per_worker + remainder
                } else {
                    rows_per_worker
                };
                let from_y = y;
                y += rows;
                let corners = &corners;
                scope.spawn(move |_| {
                    log::debug!("rendering row band {}..{}", from_y, from_y + rows);
                    for row in 0..rows {
                        let py = from_y + row;
                        for px in 0..self.hsize {
                            let color = self.sample(world, px, py, corners);
                            band[(row * self.hsize + px) as usize] = color;
                        }
                    }
                });
            }
        });

        canvas
    }

    /// Render every frame of `self.animation` in sequence, one [`Camera`]
    /// transform per frame, each frame internally parallel.
    ///
    /// [`Camera`]: struct.Camera.html
    pub fn render_frames(&self, world: &World) -> Vec<Canvas> {
        let Some(animation) = &self.animation else {
            return vec![self.render(world)];
        };

        let transforms = animation.transforms(&self.transform);
        let total = transforms.len();
        let bar = indicatif::ProgressBar::new(total as u64);
        bar.set_style(
            indicatif::ProgressStyle::default_bar()
                .template("{spinner:.green} frame {pos}/{len} [{wide_bar:.cyan/blue}] (ETA: {eta})"),
        );

        let frames = transforms
            .into_iter()
            .enumerate()
            .map(|(i, transform)| {
                log::info!("rendering frame {} of {}", i + 1, total);
                let mut frame_camera = Camera::new(self.hsize, self.vsize, self.field_of_view, transform);
                frame_camera.antialias = self.antialias;
                let canvas = frame_camera.render(world);
                bar.inc(1);
                canvas
            })
            .collect();
        bar.finish();
        frames
    }
}

/// A circular orbit of the camera's `from` point around `to`, preserving
/// `up`, used to fly a camera around a scene across an animated GIF.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraAnimation {
    /// The point the camera orbits around and keeps looking at.
    pub to: Point3<f64>,
    /// The camera's vertical axis, also the orbit's rotation axis.
    pub up: Vector3<f64>,
    /// How many seconds the full orbit takes.
    pub movement_time: f64,
    /// How many frames are rendered per second.
    pub fps: f64,
    /// The total angle swept over the full orbit, in radians.
    pub full_motion_radians: f64,
}

impl CameraAnimation {
    /// How many frames the full orbit renders to, at least one.
    pub fn total_frames(&self) -> u32 {
        ((self.movement_time * self.fps).round() as u32).max(1)
    }

    /// Every frame's world→camera transform, derived from frame 0's
    /// transform by rotating the camera's `from` point around `to` in equal
    /// steps, recomputing the view transform at each step.
    pub fn transforms(&self, base: &Transform) -> Vec<Transform> {
        let total_frames = self.total_frames();
        let from = base.inverse().transform_point(&Point3::origin());

        if total_frames <= 1 {
            return vec![base.clone()];
        }

        let step = self.full_motion_radians / (total_frames - 1) as f64;
        (0..total_frames)
            .map(|frame| {
                if frame == 0 {
                    return base.clone();
                }
                let rotation = transform::rotation_about_axis(self.up, step * frame as f64);
                let orbit = transform::translation(self.to.x, self.to.y, self.to.z)
                    .then(&rotation.then(&transform::translation(-self.to.x, -self.to.y, -self.to.z)));
                let rotated_from = orbit.matrix().transform_point(&from);
                transform::view_transform(rotated_from, self.to, self.up)
            })
            .collect()
    }
}
