//! 装饰性漂浮粒子

use rand::Rng;
use std::time::Duration;

/// 每页生成的粒子数量
pub const PARTICLE_COUNT: usize = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// 水平位置，0..100 %
    pub left_percent: f64,
    /// 动画延迟，0..20s
    pub delay: Duration,
    /// 动画时长，15..25s
    pub duration: Duration,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left_percent: rng.gen_range(0.0..100.0),
            delay: Duration::from_secs_f64(rng.gen_range(0.0..20.0)),
            duration: Duration::from_secs_f64(15.0 + rng.gen_range(0.0..10.0)),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s",
            self.left_percent,
            self.delay.as_secs_f64(),
            self.duration.as_secs_f64()
        )
    }
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_particles_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let particles = generate(&mut rng, PARTICLE_COUNT);
        assert_eq!(particles.len(), 15);
        for p in &particles {
            assert!((0.0..100.0).contains(&p.left_percent));
            assert!(p.delay < Duration::from_secs(20));
            assert!(p.duration >= Duration::from_secs(15));
            assert!(p.duration < Duration::from_secs(25));
        }
    }
}
