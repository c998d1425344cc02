use crate::{
    algebra::Vec3,
    optics::{reflect, RotationY},
    scene::Settings,
    tonemap::direction_to_rgb,
};
use anyhow::Context;
use image::{Rgb, RgbImage};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use std::path::Path;

/// Color for rays that miss the sphere.
pub const BACKGROUND: [u8; 3] = [128, 128, 128];

/// Unit camera-space direction through the center of pixel (i, j).
/// Row 0 is the top of the image.
pub fn primary_ray(i: u32, j: u32, s: &Settings) -> Vec3 {
    let x_ndc = ((i as f32 + 0.5) / s.width as f32) * 2.0 - 1.0;
    let y_ndc = (1.0 - (j as f32 + 0.5) / s.height as f32) * 2.0 - 1.0;
    Vec3(x_ndc * s.aspect(), y_ndc, -1.0).normalize()
}

/// Reflection of the view ray at the sphere hit under pixel (i, j),
/// before any environment rotation. `None` on a miss.
pub fn reflection_at(i: u32, j: u32, s: &Settings) -> Option<Vec3> {
    let cam = s.camera_pos();
    let rd  = primary_ray(i, j, s);
    let t   = s.sphere.hit(cam, rd)?;

    let p = cam.add(rd.scale(t));
    let n = s.sphere.normal_at(p);
    let v = cam.sub(p).normalize();
    Some(reflect(v.neg(), n))
}

/// Encoded color of pixel (i, j), or `None` when its ray misses.
pub fn shade(i: u32, j: u32, s: &Settings, rot: &RotationY) -> Option<[u8; 3]> {
    reflection_at(i, j, s).map(|r| direction_to_rgb(rot.apply(r)))
}

/// Render the full frame. Rows run in parallel; every pixel is a pure
/// function of its coordinates, so the result does not depend on scheduling.
pub fn render(s: &Settings) -> RgbImage {
    let rot = RotationY::from_degrees(s.angle_deg);

    let bar = ProgressBar::new(s.height as u64);
    bar.set_style(ProgressStyle::default_bar()
        .template("{bar:40.cyan/blue} {pos}/{len} rows | {elapsed_precise} | ETA: {eta}")
        .unwrap_or_else(|_| ProgressStyle::default_bar()));

    let rows: Vec<(Vec<[u8; 3]>, usize)> = (0..s.height).into_par_iter().map(|j| {
        let mut hits = 0;
        let row: Vec<[u8; 3]> = (0..s.width).map(|i| match shade(i, j, s, &rot) {
            Some(rgb) => { hits += 1; rgb }
            None => BACKGROUND,
        }).collect();
        bar.inc(1);
        (row, hits)
    }).collect();
    bar.finish_and_clear();

    let mut img = RgbImage::new(s.width, s.height);
    let mut total_hits = 0usize;
    for (j, (row, hits)) in rows.into_iter().enumerate() {
        total_hits += hits;
        for (i, rgb) in row.into_iter().enumerate() {
            img.put_pixel(i as u32, j as u32, Rgb(rgb));
        }
    }

    let total = (s.width as usize * s.height as usize).max(1);
    info!("sphere covers {total_hits}/{total} pixels ({:.1}%)",
          100.0 * total_hits as f64 / total as f64);
    img
}

/// Write the frame; the format follows the file extension.
pub fn save(img: &RgbImage, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    img.save(path)
        .with_context(|| format!("failed to write {}", path.display()))
}
