//! Static selection catalogs for the Genesis shell.
//!
//! Positions in a catalog are the only valid tap handles; list screens use
//! the catalog as their sole item source, so out-of-range selections cannot
//! arise from them.

/// Root menu options, in display order.
pub const ROOT_MENU: [&str; 4] = [
    "OpenGL examples",
    "OpenGL scenes",
    "Parameters",
    "Exit",
];

/// The fifteen rendering demonstrations, in catalog order. A tap on
/// position `p` launches example `p + 1`; index 0 stays reserved for the
/// base demonstration.
pub const EXAMPLE_TITLES: [&str; 15] = [
    "001: Rotating triangle",
    "002: Colored square",
    "003: Wireframe cube",
    "004: Solid colored cube",
    "005: Several rotating objects",
    "006: Wood-textured square",
    "007: Textured cube",
    "008: Per-face cube textures",
    "009: Animated texture motion",
    "010: Texture filtering modes",
    "011: Tiles from one atlas image",
    "012: Objects with distinct textures",
    "013: Textures with lighting",
    "014: Composite scene",
    "015: Advanced texture effects",
];

/// The five 2D-platform scene configurations. Only the first is
/// implemented; the rest route to the placeholder screen.
pub const SCENE_TITLES: [&str; 5] = [
    "Floor",
    "Background",
    "Static objects",
    "Animations",
    "Player",
];

pub const EXAMPLE_COUNT: usize = EXAMPLE_TITLES.len();
pub const SCENE_COUNT: usize = SCENE_TITLES.len();

/// Scenes at or past this position are placeholders.
pub const IMPLEMENTED_SCENES: usize = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_sizes_are_fixed() {
        assert_eq!(EXAMPLE_COUNT, 15);
        assert_eq!(SCENE_COUNT, 5);
        assert_eq!(ROOT_MENU.len(), 4);
        assert!(IMPLEMENTED_SCENES <= SCENE_COUNT);
    }

    #[test]
    fn example_titles_are_numbered_and_ordered() {
        for (position, title) in EXAMPLE_TITLES.iter().enumerate() {
            let number: usize = title[..3].parse().unwrap();
            assert_eq!(number, position + 1);
        }
    }

    #[test]
    fn titles_are_non_empty() {
        assert!(ROOT_MENU.iter().all(|t| !t.is_empty()));
        assert!(SCENE_TITLES.iter().all(|t| !t.is_empty()));
    }
}
