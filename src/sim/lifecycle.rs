//! Platform lifecycle: drift, prune, replenish
//!
//! New platforms always spawn above the highest existing one, so the supply
//! keeps pace with the camera.

use rand::Rng;

use super::platforms::PlatformRegistry;
use super::state::{Platform, PlatformKind};
use crate::Settings;
use crate::consts::*;

/// Slide moving platforms right, wrapping back to the left spawn bound
pub fn advance_moving_platforms(platforms: &mut PlatformRegistry) {
    for platform in platforms.iter_mut() {
        if platform.kind == PlatformKind::Moving {
            platform.pos.x += MOVING_PLATFORM_STEP;
            if platform.pos.x > PLATFORM_MAX_X {
                platform.pos.x = PLATFORM_MIN_X;
            }
        }
    }
}

/// Drop platforms below the screen and spent disappearing platforms.
/// Returns the number removed.
pub fn prune_platforms(platforms: &mut PlatformRegistry, viewport_height: f32, settings: &Settings) -> usize {
    let floor = viewport_height + settings.platform_height;
    platforms.retain(|p| p.visible && p.pos.y <= floor)
}

/// Spawn random platforms above the topmost until `MIN_PLATFORMS` exist
pub fn replenish_platforms(platforms: &mut PlatformRegistry, viewport_height: f32, rng: &mut impl Rng) {
    while platforms.len() < MIN_PLATFORMS {
        let anchor = platforms.topmost_y().unwrap_or(viewport_height);
        let y = anchor - rng.random_range(PLATFORM_GAP_MIN..=PLATFORM_GAP_MAX);
        let x = rng.random_range(PLATFORM_MIN_X..=PLATFORM_MAX_X);
        let kind = PlatformKind::ALL[rng.random_range(0..PlatformKind::ALL.len())];

        log::debug!("Spawning {:?} platform at ({:.1}, {:.1})", kind, x, y);
        platforms.push(Platform::new(x, y, kind));
    }
}

/// One lifecycle pass, run after scrolling
pub fn update_platforms(
    platforms: &mut PlatformRegistry,
    viewport_height: f32,
    settings: &Settings,
    rng: &mut impl Rng,
) -> usize {
    advance_moving_platforms(platforms);
    let removed = prune_platforms(platforms, viewport_height, settings);
    replenish_platforms(platforms, viewport_height, rng);
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_moving_platforms_wrap() {
        let mut platforms: PlatformRegistry = [
            Platform::new(349.0, 100.0, PlatformKind::Moving),
            Platform::new(349.0, 200.0, PlatformKind::Static),
            Platform::new(100.0, 300.0, PlatformKind::Moving),
        ]
        .into_iter()
        .collect();

        advance_moving_platforms(&mut platforms);
        let xs: Vec<f32> = platforms.iter().map(|p| p.pos.x).collect();
        assert_eq!(xs, vec![PLATFORM_MIN_X, 349.0, 102.0]);
    }

    #[test]
    fn test_prune() {
        let settings = Settings::default();
        let mut hidden = Platform::new(100.0, 400.0, PlatformKind::Disappearing);
        hidden.visible = false;
        let mut platforms: PlatformRegistry = [
            Platform::new(100.0, 820.0, PlatformKind::Static),
            Platform::new(100.0, 820.5, PlatformKind::Static),
            hidden,
            Platform::new(100.0, 100.0, PlatformKind::Moving),
        ]
        .into_iter()
        .collect();

        let removed = prune_platforms(&mut platforms, 800.0, &settings);
        assert_eq!(removed, 2);
        let ys: Vec<f32> = platforms.iter().map(|p| p.pos.y).collect();
        assert_eq!(ys, vec![820.0, 100.0]);
    }

    #[test]
    fn test_replenish_from_empty() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut platforms = PlatformRegistry::new();
        replenish_platforms(&mut platforms, 800.0, &mut rng);

        assert_eq!(platforms.len(), MIN_PLATFORMS);
        let mut previous = 800.0;
        for platform in platforms.iter() {
            let gap = previous - platform.pos.y;
            assert!(gap >= PLATFORM_GAP_MIN - 1e-3 && gap <= PLATFORM_GAP_MAX + 1e-3, "gap {}", gap);
            assert!((PLATFORM_MIN_X..=PLATFORM_MAX_X).contains(&platform.pos.x));
            assert!(platform.visible);
            previous = platform.pos.y;
        }
    }

    #[test]
    fn test_replenish_above_topmost() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut platforms: PlatformRegistry = [
            Platform::new(200.0, 300.0, PlatformKind::Static),
            Platform::new(200.0, 600.0, PlatformKind::Static),
        ]
        .into_iter()
        .collect();
        replenish_platforms(&mut platforms, 800.0, &mut rng);

        assert_eq!(platforms.len(), MIN_PLATFORMS);
        let new_y = platforms.get(2).unwrap().pos.y;
        assert!(new_y <= 300.0 - PLATFORM_GAP_MIN + 1e-3 && new_y >= 300.0 - PLATFORM_GAP_MAX - 1e-3);
    }

    #[test]
    fn test_replenish_leaves_full_registry() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut platforms: PlatformRegistry = (0..7)
            .map(|i| Platform::new(100.0, i as f32 * 50.0, PlatformKind::Static))
            .collect();
        replenish_platforms(&mut platforms, 800.0, &mut rng);
        assert_eq!(platforms.len(), 7);
    }
}
