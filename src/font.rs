//! Ordered font fallback chain.
//!
//! A style lists [`FontCandidate`]s in order of preference. The first one
//! whose source loads is used; the built-in bitmap font closes every chain,
//! so selecting a font never fails.

use crate::bitmap_font;
use rusttype::{point, Font, Scale};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::OnceLock,
};

/// Fonts installed on this machine, scanned once per process.
fn system_fonts() -> &'static fontdb::Database {
    static SYSTEM_FONTS: OnceLock<fontdb::Database> = OnceLock::new();
    SYSTEM_FONTS.get_or_init(|| {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        db
    })
}

/// Pixel size of a font as a fraction of the icon edge length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontScale {
    pub num: u32,
    pub den: u32,
}

impl FontScale {
    pub const fn new(num: u32, den: u32) -> Self {
        Self { num, den }
    }

    /// Floor of `edge * num / den`, at least one pixel.
    pub fn pixels(self, edge: u32) -> u32 {
        (edge * self.num / self.den.max(1)).max(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// A TrueType/OpenType file, either a path or the bare file name of an
    /// installed font.
    File(PathBuf),
    Builtin,
}

impl FontSource {
    fn load(&self) -> Option<Typeface> {
        match self {
            FontSource::File(name) => {
                if name.is_file() {
                    let data = fs::read(name).ok()?;
                    return Font::try_from_vec(data).map(Typeface::TrueType);
                }
                load_installed(system_fonts(), name)
            }
            FontSource::Builtin => Some(Typeface::Builtin),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontCandidate {
    pub source: FontSource,
    pub scale: FontScale,
}

impl FontCandidate {
    pub fn file(path: impl Into<PathBuf>, scale: FontScale) -> Self {
        Self {
            source: FontSource::File(path.into()),
            scale,
        }
    }

    pub fn builtin(scale: FontScale) -> Self {
        Self {
            source: FontSource::Builtin,
            scale,
        }
    }
}

/// Scale the bitmap font falls back to when a chain names no builtin entry.
pub const BUILTIN_FALLBACK_SCALE: FontScale = FontScale::new(1, 3);

pub enum Typeface {
    TrueType(Font<'static>),
    Builtin,
}

/// Ink bounding box of a piece of text, relative to its layout origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

/// A loaded typeface bound to a pixel size.
pub struct SelectedFont {
    typeface: Typeface,
    px: u32,
    source: FontSource,
}

impl SelectedFont {
    pub fn px(&self) -> u32 {
        self.px
    }

    pub fn source(&self) -> &FontSource {
        &self.source
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.typeface, Typeface::Builtin)
    }

    /// Calls `plot(x, y, coverage)` for every inked pixel of `text`, with the
    /// layout origin at the top-left of the line box.
    pub fn rasterize<F: FnMut(i32, i32, f32)>(&self, text: &str, mut plot: F) {
        match &self.typeface {
            Typeface::TrueType(font) => {
                let scale = Scale::uniform(self.px as f32);
                let ascent = font.v_metrics(scale).ascent;
                for glyph in font.layout(text, scale, point(0.0, ascent)) {
                    let Some(bb) = glyph.pixel_bounding_box() else {
                        continue;
                    };
                    glyph.draw(|x, y, coverage| {
                        if coverage > 0.0 {
                            plot(bb.min.x + x as i32, bb.min.y + y as i32, coverage);
                        }
                    });
                }
            }
            Typeface::Builtin => {
                let scale = bitmap_font::scale_for(self.px);
                bitmap_font::for_each_pixel(text, scale, |x, y| plot(x, y, 1.0));
            }
        }
    }

    /// Ink bounds of `text`, or `None` when nothing would be drawn.
    pub fn measure(&self, text: &str) -> Option<TextBounds> {
        let mut bounds: Option<(i32, i32, i32, i32)> = None;
        self.rasterize(text, |x, y, _| {
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        });

        bounds.map(|(x0, y0, x1, y1)| TextBounds {
            left: x0,
            top: y0,
            width: (x1 - x0 + 1) as u32,
            height: (y1 - y0 + 1) as u32,
        })
    }
}

/// Picks the first loadable candidate for an icon of the given edge length.
pub fn select_font(candidates: &[FontCandidate], edge: u32) -> SelectedFont {
    for candidate in candidates {
        if let Some(typeface) = candidate.source.load() {
            return SelectedFont {
                typeface,
                px: candidate.scale.pixels(edge),
                source: candidate.source.clone(),
            };
        }
    }

    SelectedFont {
        typeface: Typeface::Builtin,
        px: BUILTIN_FALLBACK_SCALE.pixels(edge),
        source: FontSource::Builtin,
    }
}

/// Loads a font named by bare file name from `db`, ignoring case.
pub fn load_installed(db: &fontdb::Database, name: &Path) -> Option<Typeface> {
    let face = find_installed(db, name)?;
    db.with_face_data(face, |data, index| {
        Font::try_from_vec_and_index(data.to_vec(), index)
    })
    .flatten()
    .map(Typeface::TrueType)
}

/// Face in `db` whose backing file is called `name`.
pub fn find_installed(db: &fontdb::Database, name: &Path) -> Option<fontdb::ID> {
    if name.components().count() != 1 {
        return None;
    }
    let file_name = name.file_name()?.to_str()?;

    db.faces()
        .find(|face| {
            let path = match &face.source {
                fontdb::Source::File(path) | fontdb::Source::SharedFile(path, _) => path,
                _ => return false,
            };
            path.file_name()
                .and_then(|candidate| candidate.to_str())
                .is_some_and(|candidate| candidate.eq_ignore_ascii_case(file_name))
        })
        .map(|face| face.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_scale_floors_and_clamps() {
        assert_eq!(FontScale::new(2, 5).pixels(48), 19);
        assert_eq!(FontScale::new(7, 20).pixels(72), 25);
        assert_eq!(FontScale::new(1, 2).pixels(512), 256);
        assert_eq!(FontScale::new(1, 3).pixels(16), 5);
        assert_eq!(FontScale::new(1, 3).pixels(1), 1);
    }

    #[test]
    fn missing_files_fall_through_to_builtin() {
        let chain = [
            FontCandidate::file("/definitely/not/here.ttf", FontScale::new(1, 2)),
            FontCandidate::file("no-such-font-file-anywhere.ttf", FontScale::new(1, 2)),
        ];

        let font = select_font(&chain, 96);
        assert!(font.is_builtin());
        assert_eq!(font.source(), &FontSource::Builtin);
        assert_eq!(font.px(), 32);
    }

    #[test]
    fn builtin_candidate_keeps_its_scale() {
        let chain = [FontCandidate::builtin(FontScale::new(1, 2))];
        let font = select_font(&chain, 96);
        assert!(font.is_builtin());
        assert_eq!(font.px(), 48);
    }

    #[test]
    fn garbage_font_file_is_skipped() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.ttf");
        fs::write(&path, b"not a font").unwrap();

        let font = select_font(&[FontCandidate::file(&path, FontScale::new(1, 2))], 64);
        assert!(font.is_builtin());
    }

    #[test]
    fn builtin_measure_covers_monogram() {
        let font = select_font(&[FontCandidate::builtin(FontScale::new(1, 3))], 96);
        // 32px selects a 4x bitmap scale: 11 columns by 7 rows of cells.
        let bounds = font.measure("TK").unwrap();
        assert_eq!(
            bounds,
            TextBounds {
                left: 0,
                top: 0,
                width: 44,
                height: 28
            }
        );
        assert_eq!(font.measure("  "), None);
    }

    fn fixture_font() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/DejaVuSans.ttf")
    }

    fn fixture_db() -> fontdb::Database {
        let mut db = fontdb::Database::new();
        db.load_font_file(fixture_font()).unwrap();
        db
    }

    #[test]
    fn installed_font_found_by_bare_name() {
        let db = fixture_db();
        assert!(find_installed(&db, Path::new("DejaVuSans.ttf")).is_some());
        assert!(find_installed(&db, Path::new("dejavusans.TTF")).is_some());
        assert!(find_installed(&db, Path::new("arial.ttf")).is_none());

        let typeface = load_installed(&db, Path::new("DEJAVUSANS.ttf"));
        assert!(matches!(typeface, Some(Typeface::TrueType(_))));
    }

    #[test]
    fn names_with_directories_are_not_looked_up() {
        let db = fixture_db();
        assert!(find_installed(&db, Path::new("nested/DejaVuSans.ttf")).is_none());
    }

    #[test]
    fn font_file_path_selects_truetype() {
        let chain = [
            FontCandidate::file("no-such-font-file-anywhere.ttf", FontScale::new(1, 2)),
            FontCandidate::file(fixture_font(), FontScale::new(2, 5)),
            FontCandidate::builtin(FontScale::new(1, 3)),
        ];

        let font = select_font(&chain, 192);
        assert!(!font.is_builtin());
        assert_eq!(font.source(), &FontSource::File(fixture_font()));
        assert_eq!(font.px(), 76);
    }

    #[test]
    fn truetype_measure_is_antialiased_ink() {
        let font = select_font(&[FontCandidate::file(fixture_font(), FontScale::new(1, 2))], 96);
        let bounds = font.measure("TK").unwrap();

        // Cap height of a 48px face is roughly 35px; two capitals span ~55px.
        assert!((30..=40).contains(&bounds.height), "{bounds:?}");
        assert!((40..=70).contains(&bounds.width), "{bounds:?}");
        assert!(bounds.top > 0, "ink starts below the ascender line");

        let mut partial = 0;
        font.rasterize("TK", |_, _, coverage| {
            assert!(coverage > 0.0 && coverage <= 1.0);
            if coverage < 1.0 {
                partial += 1;
            }
        });
        assert!(partial > 0, "edges should be antialiased");
    }
}
