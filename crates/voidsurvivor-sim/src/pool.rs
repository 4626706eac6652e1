//! Projectile pool: the sole owner of projectile instances.
//!
//! Instances are never destroyed. An in-flight projectile goes back to the
//! available queue on exactly one of {hit, lifetime expiry}; an empty queue
//! grows the pool on demand.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Handle to a pooled projectile slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProjectileId(pub u32);

/// A pooled projectile.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Projectile {
    pub position: Vec2,
    pub velocity: Vec2,
    pub damage: i32,
    /// Simulation time of the most recent launch (seconds).
    pub launched_at: f64,
    /// Seconds in flight before expiry.
    pub lifetime: f32,
    pub active: bool,
}

impl Projectile {
    /// Place and activate the projectile. `direction` need not be normalized.
    pub fn launch(
        &mut self,
        position: Vec2,
        direction: Vec2,
        speed: f32,
        damage: i32,
        lifetime: f32,
        now: f64,
    ) {
        self.position = position;
        self.velocity = direction.normalize_or_zero() * speed;
        self.damage = damage;
        self.lifetime = lifetime;
        self.launched_at = now;
        self.active = true;
    }

    /// Whether the projectile has outlived its lifetime at `now`.
    pub fn expired(&self, now: f64) -> bool {
        now - self.launched_at > self.lifetime as f64
    }
}

/// Reusable set of projectile instances.
#[derive(Debug, Default)]
pub struct ProjectilePool {
    slots: Vec<Projectile>,
    /// Per-slot flag: true while the slot sits in `available`.
    pooled: Vec<bool>,
    /// FIFO: the first instance returned is the first reused.
    available: VecDeque<ProjectileId>,
}

impl ProjectilePool {
    /// Create a pool with `size` instances already constructed.
    pub fn with_prewarm(size: usize) -> Self {
        let mut pool = Self {
            slots: Vec::with_capacity(size),
            pooled: Vec::with_capacity(size),
            available: VecDeque::with_capacity(size),
        };
        for _ in 0..size {
            let id = pool.construct();
            pool.pooled[id.0 as usize] = true;
            pool.available.push_back(id);
        }
        log::debug!("Projectile pool initialized with {} projectiles", size);
        pool
    }

    /// Issue an instance, constructing a new one if none is available.
    pub fn acquire(&mut self) -> ProjectileId {
        let id = match self.available.pop_front() {
            Some(id) => id,
            None => {
                let id = self.construct();
                log::debug!("Projectile pool exhausted, grew to {}", self.slots.len());
                id
            }
        };
        self.pooled[id.0 as usize] = false;
        id
    }

    /// Deactivate an issued instance and return it to the available queue.
    ///
    /// Releasing an instance that is already pooled is a caller bug.
    pub fn release(&mut self, id: ProjectileId) {
        let idx = id.0 as usize;
        let Some(&already_pooled) = self.pooled.get(idx) else {
            log::error!("ignoring release of unknown projectile {:?}", id);
            return;
        };
        debug_assert!(!already_pooled, "projectile {:?} released twice", id);
        if already_pooled {
            log::error!("ignoring double release of projectile {:?}", id);
            return;
        }
        self.slots[idx].active = false;
        self.pooled[idx] = true;
        self.available.push_back(id);
    }

    pub fn get(&self, id: ProjectileId) -> Option<&Projectile> {
        self.slots.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: ProjectileId) -> Option<&mut Projectile> {
        self.slots.get_mut(id.0 as usize)
    }

    /// Issued instances, in slot order.
    pub fn in_flight(&self) -> impl Iterator<Item = (ProjectileId, &Projectile)> {
        self.slots
            .iter()
            .zip(&self.pooled)
            .enumerate()
            .filter(|(_, (_, pooled))| !**pooled)
            .map(|(idx, (projectile, _))| (ProjectileId(idx as u32), projectile))
    }

    /// Whether the instance is currently issued.
    pub fn is_in_flight(&self, id: ProjectileId) -> bool {
        self.pooled.get(id.0 as usize).is_some_and(|pooled| !pooled)
    }

    pub fn available(&self) -> usize {
        self.available.len()
    }

    pub fn in_flight_count(&self) -> usize {
        self.slots.len() - self.available.len()
    }

    /// Total instances ever constructed.
    pub fn constructed(&self) -> usize {
        self.slots.len()
    }

    fn construct(&mut self) -> ProjectileId {
        let id = ProjectileId(self.slots.len() as u32);
        self.slots.push(Projectile::default());
        self.pooled.push(false);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_conserved(pool: &ProjectilePool) {
        assert_eq!(
            pool.available() + pool.in_flight().count(),
            pool.constructed(),
            "available + in-flight must equal constructed"
        );
    }

    #[test]
    fn test_prewarm_fills_available_queue() {
        let pool = ProjectilePool::with_prewarm(20);
        assert_eq!(pool.available(), 20);
        assert_eq!(pool.in_flight_count(), 0);
        assert_eq!(pool.constructed(), 20);
    }

    #[test]
    fn test_acquire_then_release_restores_available_count() {
        let mut pool = ProjectilePool::with_prewarm(5);
        let before = pool.available();
        let id = pool.acquire();
        assert_eq!(pool.available(), before - 1);
        assert!(pool.is_in_flight(id));
        pool.release(id);
        assert_eq!(pool.available(), before);
        assert!(!pool.is_in_flight(id));
        assert_conserved(&pool);
    }

    #[test]
    fn test_released_instances_are_reused_fifo() {
        let mut pool = ProjectilePool::with_prewarm(0);
        let a = pool.acquire();
        let b = pool.acquire();
        pool.release(b);
        pool.release(a);
        assert_eq!(pool.acquire(), b);
        assert_eq!(pool.acquire(), a);
        assert_eq!(pool.constructed(), 2);
    }

    #[test]
    fn test_exhausted_pool_grows_on_demand() {
        let mut pool = ProjectilePool::with_prewarm(2);
        let ids: Vec<_> = (0..5).map(|_| pool.acquire()).collect();
        assert_eq!(pool.constructed(), 5);
        assert_eq!(pool.available(), 0);
        assert_conserved(&pool);

        // Every issued handle is distinct.
        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), ids.len());
    }

    #[test]
    fn test_conservation_holds_across_mixed_operations() {
        let mut pool = ProjectilePool::with_prewarm(3);
        let mut live = Vec::new();
        for step in 0..40 {
            if step % 3 == 2 {
                if let Some(id) = live.pop() {
                    pool.release(id);
                }
            } else {
                live.push(pool.acquire());
            }
            assert_conserved(&pool);
            assert_eq!(pool.in_flight_count(), live.len());
        }
    }

    #[test]
    fn test_release_deactivates() {
        let mut pool = ProjectilePool::with_prewarm(1);
        let id = pool.acquire();
        pool.get_mut(id)
            .unwrap()
            .launch(Vec2::ZERO, Vec2::Y, 15.0, 10, 2.0, 0.0);
        assert!(pool.get(id).unwrap().active);
        pool.release(id);
        assert!(!pool.get(id).unwrap().active);
    }

    #[test]
    fn test_launch_normalizes_direction() {
        let mut p = Projectile::default();
        p.launch(Vec2::ONE, Vec2::new(0.0, 3.0), 15.0, 10, 2.0, 1.0);
        assert_eq!(p.velocity, Vec2::new(0.0, 15.0));
        assert_eq!(p.position, Vec2::ONE);
        assert!(!p.expired(3.0));
        assert!(p.expired(3.01));
    }

    #[test]
    #[should_panic(expected = "released twice")]
    #[cfg(debug_assertions)]
    fn test_double_release_asserts_in_debug() {
        let mut pool = ProjectilePool::with_prewarm(1);
        let id = pool.acquire();
        pool.release(id);
        pool.release(id);
    }
}
