use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tk_icon_gen::icon_gen;

#[derive(Debug, Parser)]
#[clap(
    name = "tk-icon-gen",
    about = "Generate the placeholder TK launcher and web icons"
)]
struct Args {
    /// Project root the asset folders are written under.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Generate the Android launcher mipmaps
    #[clap(long)]
    android: bool,

    /// Generate the web icons and favicon
    #[clap(long)]
    web: bool,

    /// JSON file overriding colors, text or fonts per platform.
    #[clap(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Font file to try before the built-in preferences. Repeatable.
    #[clap(long = "font", value_name = "PATH")]
    fonts: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_icons(icon_gen::Args {
        output: args.output,
        android: args.android,
        web: args.web,
        config: args.config,
        fonts: args.fonts,
    })
}
