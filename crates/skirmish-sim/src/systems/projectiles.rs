//! Projectile ballistics: integrate velocity and gravity, cull fallen
//! projectiles.

use hecs::World;

use skirmish_core::constants::{PROJECTILE_GRAVITY, PROJECTILE_KILL_PLANE_Y};

use crate::components::{LinearVelocity, Projectile, Translation};

pub fn run(world: &mut World, dt_secs: f32) {
    let mut fallen: Vec<hecs::Entity> = Vec::new();

    for (entity, (_projectile, translation, velocity)) in world
        .query_mut::<(&Projectile, &mut Translation, &mut LinearVelocity)>()
    {
        translation.0 += velocity.0 * dt_secs;
        velocity.0.y -= PROJECTILE_GRAVITY * dt_secs;

        if translation.0.y < PROJECTILE_KILL_PLANE_Y {
            fallen.push(entity);
        }
    }

    for entity in fallen {
        let _ = world.despawn(entity);
    }
}
