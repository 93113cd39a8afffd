use crate::font::Font;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Resolves family names to loaded fonts. Resolution never fails: a provider
/// walks an ordered fallback list and ends at the built-in bitmap face.
pub trait FontProvider {
    fn resolve(&self, family: &str) -> &Font;
}

/// File extensions tried, in order, when discovering a family on disk
const FONT_EXTENSIONS: [&str; 3] = ["ttf", "otf", "TTF"];

/// A set of loaded font families with a fallback chain of
/// `[requested family, default family, built-in bitmap]`.
///
/// Families that fail to load are never registered, so anything that asks for
/// them silently gets the next font in the chain. Fonts are stored "globally"
/// within the library and looked up by family name.
pub struct FontLibrary {
    families: HashMap<String, Font>,
    default_family: Option<String>,
    builtin: Font,
}

impl Default for FontLibrary {
    fn default() -> Self {
        FontLibrary::new()
    }
}

impl FontLibrary {
    /// An empty library: every family resolves to the built-in bitmap face
    pub fn new() -> FontLibrary {
        FontLibrary {
            families: HashMap::new(),
            default_family: None,
            builtin: Font::Builtin,
        }
    }

    /// Set the system default family, tried when a requested family is missing
    pub fn with_default_family<S: ToString>(mut self, family: S) -> FontLibrary {
        self.default_family = Some(family.to_string());
        self
    }

    /// Register an already-loaded font under `family`, replacing any previous font
    pub fn add_family<S: ToString>(&mut self, family: S, font: Font) {
        self.families.insert(family.to_string(), font);
    }

    /// Load `path` and register it under `family`. A font that cannot be read or
    /// parsed is logged and skipped. Returns whether the family was registered.
    pub fn load_family<S: ToString, P: AsRef<Path>>(&mut self, family: S, path: P) -> bool {
        let family = family.to_string();
        let path = path.as_ref();
        match Font::load_file(path) {
            Ok(font) => {
                let face_family = match &font {
                    Font::TrueType(face) => face.family(),
                    Font::Builtin => None,
                };
                log::debug!(
                    "loaded font family '{family}' ({}) from {}",
                    face_family.as_deref().unwrap_or("unnamed face"),
                    path.display()
                );
                self.add_family(family, font);
                true
            }
            Err(e) => {
                log::warn!(
                    "could not load font family '{family}' from {}: {e}; falling back",
                    path.display()
                );
                false
            }
        }
    }

    /// Look for `<dir>/<family>.<ext>` in each search directory in order, loading
    /// the first candidate that parses. Returns whether the family was registered.
    pub fn discover<S: AsRef<str>, P: AsRef<Path>>(&mut self, family: S, search_dirs: &[P]) -> bool {
        let family = family.as_ref();
        let candidates: Vec<PathBuf> = search_dirs
            .iter()
            .flat_map(|dir| {
                FONT_EXTENSIONS
                    .iter()
                    .map(move |ext| dir.as_ref().join(format!("{family}.{ext}")))
            })
            .filter(|path| path.is_file())
            .collect();

        for path in candidates {
            if self.load_family(family, &path) {
                return true;
            }
        }

        log::warn!("font family '{family}' not found in any search directory; falling back");
        false
    }

    pub fn contains(&self, family: &str) -> bool {
        self.families.contains_key(family)
    }

    /// The family that `family` actually resolves to, or [None] for the built-in face
    pub fn resolved_family<'a>(&'a self, family: &'a str) -> Option<&'a str> {
        if self.families.contains_key(family) {
            return Some(family);
        }
        self.default_family
            .as_deref()
            .filter(|default| self.families.contains_key(*default))
    }
}

impl FontProvider for FontLibrary {
    fn resolve(&self, family: &str) -> &Font {
        self.resolved_family(family)
            .and_then(|name| self.families.get(name))
            .unwrap_or(&self.builtin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_families_fall_back_to_builtin() {
        let fonts = FontLibrary::new().with_default_family("DejaVu Sans");
        assert!(fonts.resolve("Arial").is_builtin());
        assert_eq!(fonts.resolved_family("Arial"), None);
    }

    #[test]
    fn failed_loads_are_recovered() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("Broken.ttf");
        std::fs::write(&path, b"definitely not a font").expect("write");

        let mut fonts = FontLibrary::new();
        assert!(!fonts.load_family("Broken", &path));
        assert!(!fonts.load_family("Missing", dir.path().join("Missing.ttf")));
        assert!(!fonts.contains("Broken"));
        assert!(fonts.resolve("Broken").is_builtin());
    }

    #[test]
    fn discovery_skips_unparseable_candidates() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("Arial.ttf"), b"garbage").expect("write");

        let mut fonts = FontLibrary::new();
        assert!(!fonts.discover("Arial", &[dir.path()]));
        assert!(fonts.resolve("Arial").is_builtin());
    }

    #[test]
    fn discovers_fonts_on_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("Mono.ttf"), crate::font::DEJAVU_SANS_MONO).expect("write");

        let mut fonts = FontLibrary::new().with_default_family("Mono");
        let empty = tempfile::tempdir().expect("temp dir");
        assert!(fonts.discover("Mono", &[empty.path(), dir.path()]));
        assert!(fonts.contains("Mono"));
        assert!(!fonts.resolve("Mono").is_builtin());
        // unknown families resolve to the default, not the bitmap face
        assert!(!fonts.resolve("Arial").is_builtin());
        assert_eq!(fonts.resolved_family("Arial"), Some("Mono"));
    }

    #[test]
    fn registered_families_take_priority_over_the_default() {
        let mut fonts = FontLibrary::new().with_default_family("Body");
        fonts.add_family("Body", Font::Builtin);
        assert_eq!(fonts.resolved_family("Title"), Some("Body"));
        fonts.add_family("Title", Font::Builtin);
        assert_eq!(fonts.resolved_family("Title"), Some("Title"));
    }
}
