use anyhow::{Context, Result};
use image::io::Reader as ImageReader;
use tk_icon_gen::{
    inspect::{ink_bounds, PixelRect},
    style::{IconStyle, WHITE},
};

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "web/icons/Icon-512.png".to_string());

    let img = ImageReader::open(&path)
        .with_context(|| format!("Failed to open {path}"))?
        .decode()
        .with_context(|| format!("Failed to decode {path}"))?;

    let rgba_img = img.to_rgba8();
    let width = img.width();
    let height = img.height();

    println!("Checking icon: {}", path);
    println!("Image dimensions: {}x{}", width, height);
    if width != height {
        println!("⚠ Icon is not square");
    }

    let center = rgba_img.get_pixel(width / 2, height / 2);
    let corner = rgba_img.get_pixel(0, 0);
    println!("  Center RGBA: [{}, {}, {}, {}]", center[0], center[1], center[2], center[3]);
    println!("  Corner RGBA: [{}, {}, {}, {}]", corner[0], corner[1], corner[2], corner[3]);

    // Skip the frame the gradient style draws around the edge
    let frame = (width / 64).max(1) * 2;
    match ink_bounds(&rgba_img, PixelRect::inset(&rgba_img, frame), WHITE) {
        Some(rect) => {
            let (dx, dy) = rect.center_offset(width);
            println!("\nText ink:");
            println!(
                "  box x={}..={} y={}..={} ({}x{})",
                rect.x0,
                rect.x1,
                rect.y0,
                rect.y1,
                rect.width(),
                rect.height()
            );
            println!("  offset from center: ({:+.1}, {:+.1})", dx, dy);
            if dx.abs() <= 0.5 {
                println!("✓ Text is horizontally centered");
            } else {
                println!("⚠ Text is off center by {:.1}px", dx);
            }

            // Launcher icons have transparent corners and lift their text
            let lift = if corner[3] == 0 {
                (width * IconStyle::launcher().lift_percent / 100) as f32
            } else {
                0.0
            };
            if (dy + lift).abs() <= 0.5 {
                println!("✓ Text is vertically centered (lift {:.0}px)", lift);
            } else {
                println!("⚠ Text is off center vertically by {:.1}px", dy + lift);
            }
        }
        None => println!("⚠ No white text pixels found"),
    }

    Ok(())
}
