/// Shown when no key matches the generated animal name
pub const FALLBACK_IMAGE: &str = "assets/placeholder.jpg";

/// Ordered animal-name substring to image path table.
///
/// Lookup is a first-match scan, so more specific keys must precede
/// keys that could also match the same name.
#[derive(Debug, Clone, Copy)]
pub struct ImageMap {
    entries: &'static [(&'static str, &'static str)],
    fallback: &'static str,
}

impl ImageMap {
    pub const fn new(
        entries: &'static [(&'static str, &'static str)],
        fallback: &'static str,
    ) -> Self {
        Self { entries, fallback }
    }

    /// Path of the first entry whose key occurs in `animal_name`, else the fallback
    pub fn resolve(&self, animal_name: &str) -> &'static str {
        self.entries
            .iter()
            .find(|(key, _)| animal_name.contains(key))
            .map(|(_, path)| *path)
            .unwrap_or(self.fallback)
    }
}

pub const ANIMAL_IMAGES: ImageMap = ImageMap::new(
    &[
        ("Wolf", "assets/wolf.jpg"),
        ("Fox", "assets/red-fox.jpg"),
        ("Turtle", "assets/sea-turtle.jpg"),
        ("Octopus", "assets/octopus.jpg"),
        ("Dolphin", "assets/dolphin.jpg"),
        ("Dove", "assets/dove.jpg"),
        ("Eagle", "assets/eagle.jpg"),
        ("Elephant", "assets/elephant.jpg"),
        ("Owl", "assets/owl.jpg"),
        ("Dog", "assets/dog.jpg"),
        ("Cat", "assets/cat.jpg"),
    ],
    FALLBACK_IMAGE,
);
