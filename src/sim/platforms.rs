//! Ordered platform collection
//!
//! Iteration order is insertion order; collision resolution depends on it
//! (first contact wins).

use serde::{Deserialize, Serialize};

use super::state::Platform;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformRegistry {
    platforms: Vec<Platform>,
}

impl PlatformRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    pub fn push(&mut self, platform: Platform) {
        self.platforms.push(platform);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Platform> {
        self.platforms.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Platform> {
        self.platforms.iter_mut()
    }

    pub fn get(&self, index: usize) -> Option<&Platform> {
        self.platforms.get(index)
    }

    /// Platforms that should be drawn
    pub fn visible(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter().filter(|p| p.visible)
    }

    /// Smallest Y, i.e. the highest platform on screen
    pub fn topmost_y(&self) -> Option<f32> {
        self.platforms.iter().map(|p| p.pos.y).reduce(f32::min)
    }

    /// Move every platform down by `offset` (camera moves up)
    pub fn shift_down(&mut self, offset: f32) {
        for platform in &mut self.platforms {
            platform.pos.y += offset;
        }
    }

    /// Keep only platforms matching `keep`; returns how many were removed
    pub fn retain(&mut self, keep: impl FnMut(&Platform) -> bool) -> usize {
        let before = self.platforms.len();
        self.platforms.retain(keep);
        before - self.platforms.len()
    }
}

impl FromIterator<Platform> for PlatformRegistry {
    fn from_iter<I: IntoIterator<Item = Platform>>(iter: I) -> Self {
        Self {
            platforms: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PlatformRegistry {
    type Item = &'a Platform;
    type IntoIter = std::slice::Iter<'a, Platform>;

    fn into_iter(self) -> Self::IntoIter {
        self.platforms.iter()
    }
}
