use earth_core::ViewConfig;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::f32::consts::TAU;

/// Stars are unsaturated, so every one gets the same grey
const STAR_LIGHTNESS: f32 = 0.9;

/// Inputs for one star-field build
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarFieldParams {
    pub count: u32,
    /// Thickness of the shell the stars are scattered in
    pub depth: f32,
    /// Inner radius of the shell
    pub radius: f32,
    /// Size multiplier
    pub factor: f32,
    pub seed: u64,
}

impl StarFieldParams {
    pub fn from_config(config: &ViewConfig, count: u32, depth: u32) -> Self {
        Self {
            count,
            depth: depth as f32,
            radius: config.star_radius,
            factor: config.star_factor,
            seed: config.star_seed,
        }
    }
}

/// A single generated star
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarPoint {
    pub position: [f32; 3],
    /// sRGB
    pub color: [f32; 3],
    pub size: f32,
}

/// Scatter `count` stars uniformly over directions, at distances in
/// `[radius, radius + depth)` from the origin.
pub fn generate(params: &StarFieldParams) -> Vec<StarPoint> {
    let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
    let count = params.count as usize;
    let mut stars = Vec::with_capacity(count);

    for _ in 0..count {
        let r = params.radius + params.depth * rng.r#gen::<f32>();
        let direction = random_direction(&mut rng);
        let size = (0.5 + 0.5 * rng.r#gen::<f32>()) * params.factor;

        stars.push(StarPoint {
            position: [direction[0] * r, direction[1] * r, direction[2] * r],
            color: [STAR_LIGHTNESS; 3],
            size,
        });
    }

    stars
}

/// Uniform point on the unit sphere
fn random_direction(rng: &mut impl Rng) -> [f32; 3] {
    // polar angle from a uniform cosine keeps the poles from bunching up
    let cos_phi: f32 = 1.0 - rng.r#gen::<f32>() * 2.0;
    let sin_phi = (1.0 - cos_phi * cos_phi).max(0.0).sqrt();
    let theta = rng.r#gen::<f32>() * TAU;
    [sin_phi * theta.sin(), cos_phi, sin_phi * theta.cos()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(count: u32, depth: f32) -> StarFieldParams {
        StarFieldParams {
            count,
            depth,
            radius: 100.0,
            factor: 4.0,
            seed: 42,
        }
    }

    #[test]
    fn test_star_count_matches() {
        assert_eq!(generate(&params(5000, 50.0)).len(), 5000);
        assert!(generate(&params(0, 50.0)).is_empty());
    }

    #[test]
    fn test_stars_inside_shell() {
        for star in generate(&params(2000, 50.0)) {
            let [x, y, z] = star.position;
            let r = (x * x + y * y + z * z).sqrt();
            assert!(r >= 100.0 - 1e-3 && r < 150.0 + 1e-3, "r = {}", r);
        }
    }

    #[test]
    fn test_zero_depth_is_thin_shell() {
        for star in generate(&params(500, 0.0)) {
            let [x, y, z] = star.position;
            let r = (x * x + y * y + z * z).sqrt();
            assert!((r - 100.0).abs() < 1e-2, "r = {}", r);
        }
    }

    #[test]
    fn test_sizes_and_colors() {
        for star in generate(&params(1000, 50.0)) {
            assert!(star.size >= 2.0 && star.size <= 4.0, "size = {}", star.size);
            assert_eq!(star.color, [0.9; 3]);
        }
    }

    #[test]
    fn test_deterministic_for_seed() {
        let a = generate(&params(300, 80.0));
        let b = generate(&params(300, 80.0));
        assert_eq!(a, b);

        let mut other = params(300, 80.0);
        other.seed = 43;
        assert_ne!(a, generate(&other));
    }

    #[test]
    fn test_directions_cover_both_hemispheres() {
        let stars = generate(&params(2000, 0.0));
        let north = stars.iter().filter(|s| s.position[1] > 0.0).count();
        // roughly half, with plenty of slack
        assert!(north > 800 && north < 1200, "north = {}", north);
    }
}
