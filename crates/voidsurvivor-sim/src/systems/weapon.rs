//! Weapon controller: rate-limited firing from the craft's fire point.

use glam::Vec2;
use hecs::World;

use voidsurvivor_core::components::{Craft, Position};
use voidsurvivor_core::events::SimEvent;
use voidsurvivor_core::types::{forward, rotate};

use crate::config::{FirePoint, WeaponConfig};
use crate::pool::{ProjectileId, ProjectilePool};

/// Slack for comparing tick-derived times against the cooldown.
const TIME_EPSILON: f64 = 1e-9;

/// The craft's weapon state.
#[derive(Debug, Clone)]
pub struct Weapon {
    pub config: WeaponConfig,
    /// Simulation time of the last successful shot.
    last_fire: Option<f64>,
}

impl Weapon {
    pub fn new(config: WeaponConfig) -> Self {
        Self {
            config,
            last_fire: None,
        }
    }

    /// Minimum seconds between shots.
    pub fn cooldown(&self) -> f64 {
        1.0 / self.config.fire_rate as f64
    }

    /// Whether a shot at `now` would pass the rate gate. A weapon that has
    /// never fired is always ready.
    pub fn ready(&self, now: f64) -> bool {
        match self.last_fire {
            Some(last) => now - last + TIME_EPSILON >= self.cooldown(),
            None => true,
        }
    }

    /// Fire from a craft at `origin` facing `orientation`. No-op while
    /// cooling down. Returns the launched projectile.
    pub fn fire(
        &mut self,
        pool: &mut ProjectilePool,
        origin: Vec2,
        orientation: f32,
        now: f64,
    ) -> Option<ProjectileId> {
        if !self.ready(now) {
            return None;
        }

        let fire_point = self.config.fire_point.unwrap_or_default();
        let (position, direction) = muzzle(origin, orientation, &fire_point);

        let id = pool.acquire();
        if let Some(projectile) = pool.get_mut(id) {
            projectile.launch(
                position,
                direction,
                self.config.projectile_speed,
                self.config.damage,
                self.config.lifetime,
                now,
            );
        }

        self.last_fire = Some(now);
        Some(id)
    }
}

/// World-space muzzle position and facing for a craft pose.
pub fn muzzle(origin: Vec2, orientation: f32, fire_point: &FirePoint) -> (Vec2, Vec2) {
    let position = origin + rotate(fire_point.offset, orientation);
    let direction = forward(orientation + fire_point.angle);
    (position, direction)
}

/// Process a pending fire request for the craft.
pub fn run(
    world: &World,
    weapon: &mut Weapon,
    pool: &mut ProjectilePool,
    fire_requested: bool,
    now: f64,
    events: &mut Vec<SimEvent>,
) {
    if !fire_requested {
        return;
    }

    let pose = world
        .query::<(&Craft, &Position)>()
        .iter()
        .next()
        .map(|(_, (craft, pos))| (pos.0, craft.orientation));

    let Some((origin, orientation)) = pose else {
        return;
    };

    if let Some(id) = weapon.fire(pool, origin, orientation, now) {
        if let Some(projectile) = pool.get(id) {
            events.push(SimEvent::ProjectileFired {
                position: projectile.position,
                direction: projectile.velocity.normalize_or_zero(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voidsurvivor_core::constants::FIRE_POINT_OFFSET;

    fn weapon() -> Weapon {
        Weapon::new(WeaponConfig::default())
    }

    #[test]
    fn test_second_shot_within_cooldown_is_dropped() {
        let mut w = weapon();
        let mut pool = ProjectilePool::with_prewarm(4);
        assert!(w.fire(&mut pool, Vec2::ZERO, 0.0, 1.0).is_some());
        assert!(w.fire(&mut pool, Vec2::ZERO, 0.0, 1.1).is_none());
        assert_eq!(pool.in_flight_count(), 1);

        assert!(w.fire(&mut pool, Vec2::ZERO, 0.0, 1.0 + w.cooldown()).is_some());
        assert_eq!(pool.in_flight_count(), 2);
    }

    #[test]
    fn test_shot_exactly_one_cooldown_later_fires() {
        use voidsurvivor_core::types::SimTime;

        let mut w = weapon();
        let mut pool = ProjectilePool::with_prewarm(8);
        let mut time = SimTime::default();
        let mut shots = Vec::new();
        for _ in 0..61 {
            time.advance();
            if w.fire(&mut pool, Vec2::ZERO, 0.0, time.elapsed_secs).is_some() {
                shots.push(time.tick);
            }
        }
        assert_eq!(shots, vec![1, 16, 31, 46, 61]);
    }

    #[test]
    fn test_first_shot_is_never_gated() {
        let mut w = weapon();
        let mut pool = ProjectilePool::with_prewarm(1);
        assert!(w.fire(&mut pool, Vec2::ZERO, 0.0, 0.0).is_some());
    }

    #[test]
    fn test_default_fire_point_is_ahead_of_craft() {
        let mut w = weapon();
        let mut pool = ProjectilePool::with_prewarm(1);
        let orientation = std::f32::consts::FRAC_PI_2; // facing -x
        let id = w.fire(&mut pool, Vec2::new(1.0, 1.0), orientation, 0.0).unwrap();
        let p = pool.get(id).unwrap();

        let expected = Vec2::new(1.0 - FIRE_POINT_OFFSET, 1.0);
        assert!((p.position - expected).length() < 1e-5);
        assert!((p.velocity.normalize() - Vec2::new(-1.0, 0.0)).length() < 1e-5);
        assert!((p.velocity.length() - w.config.projectile_speed).abs() < 1e-4);
        assert_eq!(p.damage, w.config.damage);
        assert!(p.active);
    }

    #[test]
    fn test_configured_fire_point_is_honoured() {
        let mut w = Weapon::new(WeaponConfig {
            fire_point: Some(FirePoint {
                offset: Vec2::new(0.5, 0.0),
                angle: -std::f32::consts::FRAC_PI_2,
            }),
            ..Default::default()
        });
        let mut pool = ProjectilePool::with_prewarm(1);
        let id = w.fire(&mut pool, Vec2::ZERO, 0.0, 0.0).unwrap();
        let p = pool.get(id).unwrap();
        assert!((p.position - Vec2::new(0.5, 0.0)).length() < 1e-5);
        // Angle -90° from +y faces +x.
        assert!((p.velocity.normalize() - Vec2::X).length() < 1e-5);
    }
}
