use crate::{
    render::render,
    style::{IconStyle, StyleFile},
};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbaImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Android launcher densities and their edge lengths.
pub const ANDROID_DENSITIES: [(&str, u32); 5] = [
    ("mdpi", 48),
    ("hdpi", 72),
    ("xhdpi", 96),
    ("xxhdpi", 144),
    ("xxxhdpi", 192),
];

/// Edge lengths of the `web/icons/Icon-*.png` set.
pub const WEB_ICON_SIZES: [u32; 6] = [16, 32, 48, 96, 192, 512];

pub const FAVICON_SIZE: u32 = 16;

pub const ANDROID_RES_DIR: &str = "android/app/src/main/res";

// Library-side options, filled in from the command line
#[derive(Debug, Default)]
pub struct Args {
    pub output: PathBuf,
    pub android: bool,
    pub web: bool,
    pub config: Option<PathBuf>,
    pub fonts: Vec<PathBuf>,
}

pub fn generate_icons(args: Args) -> Result<()> {
    let styles = StyleFile::load_optional(args.config.as_deref())?;

    // Resolve both styles before anything is written
    let mut launcher = IconStyle::launcher();
    launcher.apply(&styles.android)?;
    launcher.prefer_fonts(&args.fonts);

    let mut web = IconStyle::web();
    web.apply(&styles.web)?;
    web.prefer_fonts(&args.fonts);

    // No platform flag means every platform
    let all = !args.android && !args.web;

    if args.android || all {
        generate_android_icons(&args.output, &launcher)?;
    }

    if args.web || all {
        generate_web_icons(&args.output, &web)?;
    }

    Ok(())
}

/// Writes `mipmap-*/ic_launcher.png` for every Android density.
pub fn generate_android_icons(out_dir: &Path, style: &IconStyle) -> Result<()> {
    println!("Generating Android icons...");
    let res_dir = out_dir.join(ANDROID_RES_DIR);

    for (density, size) in ANDROID_DENSITIES {
        let mipmap_dir = res_dir.join(format!("mipmap-{density}"));
        create_dir_all(&mipmap_dir)
            .with_context(|| format!("Can't create {}", mipmap_dir.display()))?;

        let icon = render(size, style)?;
        save_png(&icon, &mipmap_dir.join("ic_launcher.png"))?;
        println!("  ✓ Generated mipmap-{density}/ic_launcher.png ({size}x{size})");
    }

    println!("Mobile app icons generated successfully!");
    Ok(())
}

/// Writes `web/icons/Icon-*.png` and `web/favicon.png`.
pub fn generate_web_icons(out_dir: &Path, style: &IconStyle) -> Result<()> {
    println!("Generating web icons...");
    let web_dir = out_dir.join("web");
    let icons_dir = web_dir.join("icons");
    create_dir_all(&icons_dir).with_context(|| format!("Can't create {}", icons_dir.display()))?;

    for size in WEB_ICON_SIZES {
        let filename = format!("Icon-{size}.png");
        let icon = render(size, style)?;
        save_png(&icon, &icons_dir.join(&filename))?;
        println!("  ✓ Generated web/icons/{filename} ({size}x{size})");
    }

    let favicon = render(FAVICON_SIZE, style)?;
    save_png(&favicon, &web_dir.join("favicon.png"))?;
    println!("  ✓ Generated web/favicon.png ({FAVICON_SIZE}x{FAVICON_SIZE})");

    println!("All icons created successfully!");
    Ok(())
}

pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);
    write_png(image.as_raw(), &mut out_file, image.width())
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    out_file.flush()?;
    Ok(())
}

// Encode square RGBA data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, size: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, size, size, ColorType::Rgba8)?;
    Ok(())
}
