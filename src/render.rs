//! Icon rasterization: background fill followed by the shadowed monogram.

use crate::{
    font::{select_font, SelectedFont, TextBounds},
    style::{Background, IconStyle},
};
use anyhow::Result;
use image::{Rgba, RgbaImage};

/// Renders one `edge` x `edge` icon in the given style.
pub fn render(edge: u32, style: &IconStyle) -> Result<RgbaImage> {
    if edge == 0 {
        anyhow::bail!("Icon edge length must be positive");
    }

    // Transparent canvas
    let mut canvas = RgbaImage::new(edge, edge);

    match &style.background {
        Background::RadialSolid { color, margin } => {
            draw_radial_solid(&mut canvas, *color, *margin);
        }
        Background::VerticalGradient {
            top,
            bottom,
            border,
            border_divisor,
        } => {
            draw_vertical_gradient(&mut canvas, *top, *bottom);
            let width = (edge / (*border_divisor).max(1)).max(1);
            draw_frame(&mut canvas, *border, width);
        }
    }

    let font = select_font(&style.fonts, edge);
    draw_monogram(&mut canvas, &font, style);

    Ok(canvas)
}

/// Fills a disc of radius `edge / 2 - margin` around the canvas center.
///
/// A ring pass fades the alpha from opaque at the rim ring to transparent at
/// the center ring, and the full disc is then painted opaque on top of it, so
/// the result is a solid disc on a transparent square.
pub fn draw_radial_solid(canvas: &mut RgbaImage, color: Rgba<u8>, margin: u32) {
    let center = (canvas.width() / 2) as i32;
    let radius = center - margin as i32;
    if radius <= 0 {
        return;
    }

    for ring in 0..radius {
        let alpha = (255.0 * (1.0 - ring as f64 / radius as f64)) as u8;
        let Rgba([r, g, b, _]) = color;
        fill_disc(canvas, center, center, radius - ring, Rgba([r, g, b, alpha]));
    }

    let Rgba([r, g, b, _]) = color;
    fill_disc(canvas, center, center, radius, Rgba([r, g, b, 255]));
}

/// Whether `(x, y)` falls inside the disc of the given radius.
pub fn in_disc(x: i32, y: i32, cx: i32, cy: i32, radius: i32) -> bool {
    let dx = x - cx;
    let dy = y - cy;
    dx * dx + dy * dy <= radius * radius + radius
}

/// Replaces every pixel of the disc with `color`.
fn fill_disc(canvas: &mut RgbaImage, cx: i32, cy: i32, radius: i32, color: Rgba<u8>) {
    let (width, height) = canvas.dimensions();
    let x0 = (cx - radius).max(0) as u32;
    let y0 = (cy - radius).max(0) as u32;
    let x1 = ((cx + radius).max(0) as u32).min(width - 1);
    let y1 = ((cy + radius).max(0) as u32).min(height - 1);

    for y in y0..=y1 {
        for x in x0..=x1 {
            if in_disc(x as i32, y as i32, cx, cy, radius) {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

/// Paints row `y` with the blend of `top` and `bottom` at `y / height`, so
/// the last row stops one step short of `bottom`.
pub fn draw_vertical_gradient(canvas: &mut RgbaImage, top: Rgba<u8>, bottom: Rgba<u8>) {
    let (width, height) = canvas.dimensions();

    for y in 0..height {
        let ratio = y as f64 / height as f64;
        let color = Rgba([
            lerp_channel(top[0], bottom[0], ratio),
            lerp_channel(top[1], bottom[1], ratio),
            lerp_channel(top[2], bottom[2], ratio),
            255,
        ]);
        for x in 0..width {
            canvas.put_pixel(x, y, color);
        }
    }
}

fn lerp_channel(from: u8, to: u8, ratio: f64) -> u8 {
    (from as f64 * (1.0 - ratio) + to as f64 * ratio) as u8
}

/// Outlines the box `[width, edge - width]` with a frame `width` pixels
/// thick, drawn inward from the box edge.
pub fn draw_frame(canvas: &mut RgbaImage, color: Rgba<u8>, width: u32) {
    let edge = canvas.width();
    if width == 0 || edge <= width {
        return;
    }

    let outer_min = width;
    let outer_max = edge - width;
    let inner_min = outer_min + width;
    let inner_max = outer_max.saturating_sub(width);
    let last = edge - 1;

    for y in outer_min..=outer_max.min(last) {
        for x in outer_min..=outer_max.min(last) {
            if x < inner_min || x > inner_max || y < inner_min || y > inner_max {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

/// Top-left corner at which the text ink box is placed.
pub fn text_origin(edge: u32, width: u32, height: u32, lift_percent: u32) -> (i32, i32) {
    let edge = edge as i32;
    let x = (edge - width as i32).div_euclid(2);
    let y = (edge - height as i32).div_euclid(2) - edge * lift_percent as i32 / 100;
    (x, y)
}

/// Where the text ink lands on an `edge` canvas: the top-left of its ink box
/// and the box itself. `None` when the text has no ink.
pub fn place_text(
    edge: u32,
    font: &SelectedFont,
    style: &IconStyle,
) -> Option<(i32, i32, TextBounds)> {
    let bounds = font.measure(&style.text)?;
    let (x, y) = text_origin(edge, bounds.width, bounds.height, style.lift_percent);
    Some((x, y, bounds))
}

/// Draws the shadow and then the text, centered on the canvas.
fn draw_monogram(canvas: &mut RgbaImage, font: &SelectedFont, style: &IconStyle) {
    let edge = canvas.width();
    let Some((x, y, bounds)) = place_text(edge, font, style) else {
        return;
    };

    let origin_x = x - bounds.left;
    let origin_y = y - bounds.top;
    let shadow = style.shadow_offset.pixels(edge) as i32;

    draw_text(
        canvas,
        font,
        &style.text,
        origin_x + shadow,
        origin_y + shadow,
        style.shadow_color,
    );
    draw_text(canvas, font, &style.text, origin_x, origin_y, style.text_color);
}

fn draw_text(
    canvas: &mut RgbaImage,
    font: &SelectedFont,
    text: &str,
    origin_x: i32,
    origin_y: i32,
    color: Rgba<u8>,
) {
    let (width, height) = canvas.dimensions();
    font.rasterize(text, |x, y, coverage| {
        let px = origin_x + x;
        let py = origin_y + y;
        if px < 0 || py < 0 || px >= width as i32 || py >= height as i32 {
            return;
        }
        let pixel = canvas.get_pixel_mut(px as u32, py as u32);
        *pixel = blend(*pixel, color, coverage);
    });
}

/// Source-over compositing of `src`, weighted by `coverage`, onto `dst`.
pub fn blend(dst: Rgba<u8>, src: Rgba<u8>, coverage: f32) -> Rgba<u8> {
    let src_a = src[3] as f32 / 255.0 * coverage.clamp(0.0, 1.0);
    let dst_a = dst[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |i: usize| {
        let value = (src[i] as f32 * src_a + dst[i] as f32 * dst_a * (1.0 - src_a)) / out_a;
        value.round().clamp(0.0, 255.0) as u8
    };

    Rgba([
        channel(0),
        channel(1),
        channel(2),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}
