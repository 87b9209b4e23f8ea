//! Picture sources for successive puzzles.
//!
//! Sources are opaque strings (paths or URLs); nothing here loads or decodes
//! them.

use rand::Rng;
use thiserror::Error;

/// Pictures bundled with the game.
pub const DEFAULT_IMAGES: &[&str] = &[
    "/images/puzzle1.png",
    "/images/puzzle2.png",
    "/images/puzzle3.png",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageCatalogError {
    #[error("at least one image source is required")]
    Empty,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageCatalog {
    sources: Vec<String>,
}

impl ImageCatalog {
    pub fn new<I, S>(sources: I) -> Result<Self, ImageCatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sources: Vec<String> = sources.into_iter().map(Into::into).collect();
        if sources.is_empty() {
            return Err(ImageCatalogError::Empty);
        }
        Ok(Self { sources })
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.sources.get(index).map(String::as_str)
    }

    /// Picks the next picture uniformly at random.
    ///
    /// With more than one source the current picture is never picked twice
    /// in a row.
    pub fn next_index<R: Rng + ?Sized>(&self, current: Option<usize>, rng: &mut R) -> usize {
        loop {
            let candidate = rng.random_range(0..self.sources.len());
            if self.sources.len() == 1 || Some(candidate) != current {
                return candidate;
            }
        }
    }
}

impl Default for ImageCatalog {
    fn default() -> Self {
        Self {
            sources: DEFAULT_IMAGES.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}
