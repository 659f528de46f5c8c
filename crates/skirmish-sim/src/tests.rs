#[cfg(test)]
mod tests {
    use glam::Vec3;

    use skirmish_core::constants::NPC_HIT_POINTS;
    use skirmish_core::enums::AlertLevel;
    use skirmish_core::events::SimEvent;
    use skirmish_core::player::PlayerSnapshot;

    use crate::commands::SimCommand;
    use crate::engine::{SimConfig, SimEngine};
    use crate::world_setup;

    /// Player standing at the arena origin, aiming at the walker line.
    fn default_player() -> PlayerSnapshot {
        PlayerSnapshot::new(
            Vec3::new(0.0, 2.0, 0.0),
            world_setup::walker_spawn_position(0) - Vec3::new(0.0, 2.0, 0.0),
        )
    }

    fn single_walker_config() -> SimConfig {
        SimConfig {
            walker_count: 1,
            flyer_count: 0,
            ..SimConfig::default()
        }
    }

    #[test]
    fn test_same_seed_same_run() {
        let script = |engine: &mut SimEngine| {
            let player = default_player();
            let mut transcript = Vec::new();
            for tick in 0..120u64 {
                if tick == 30 {
                    engine.queue_command(SimCommand::NotifyHit { npc_id: 0 });
                }
                if tick == 60 {
                    engine.queue_command(SimCommand::SetDodgeFailProbability {
                        npc_id: 1,
                        percentage: 50,
                    });
                }
                let snapshot = engine.tick(&player);
                transcript.push(serde_json::to_string(&snapshot).unwrap());
            }
            transcript
        };

        let mut first = SimEngine::new(SimConfig {
            seed: 9,
            ..SimConfig::default()
        });
        let mut second = SimEngine::new(SimConfig {
            seed: 9,
            ..SimConfig::default()
        });
        assert_eq!(script(&mut first), script(&mut second));
    }

    #[test]
    fn test_notify_hit_forces_dodge_and_costs_health() {
        let mut engine = SimEngine::new(single_walker_config());
        engine.queue_command(SimCommand::NotifyHit { npc_id: 0 });

        let snapshot = engine.tick(&default_player());

        let npc = &snapshot.npcs[0];
        assert_eq!(npc.hp, NPC_HIT_POINTS - 1);
        assert!(npc.forced_dodging);
        assert_eq!(npc.dodge_rate, 9.0, "forced dodges run at the boosted rate");
        assert!(snapshot
            .events
            .iter()
            .any(|e| matches!(e, SimEvent::NpcHit { npc_id: 0, remaining_hp } if *remaining_hp == NPC_HIT_POINTS - 1)));
    }

    #[test]
    fn test_npc_goes_down_at_zero_health() {
        let mut engine = SimEngine::new(single_walker_config());
        for _ in 0..NPC_HIT_POINTS {
            engine.queue_command(SimCommand::NotifyHit { npc_id: 0 });
        }
        // One extra report after the body is gone: silently dropped
        engine.queue_command(SimCommand::NotifyHit { npc_id: 0 });

        let snapshot = engine.tick(&default_player());

        assert!(snapshot.npcs.is_empty(), "the only NPC is down");
        let downs = snapshot
            .events
            .iter()
            .filter(|e| matches!(e, SimEvent::NpcDown { npc_id: 0 }))
            .count();
        assert_eq!(downs, 1);
        let hits = snapshot
            .events
            .iter()
            .filter(|e| matches!(e, SimEvent::NpcHit { .. }))
            .count();
        assert_eq!(hits, NPC_HIT_POINTS as usize - 1);
    }

    #[test]
    fn test_invalid_fail_probability_keeps_prior_and_alerts() {
        let mut engine = SimEngine::new(single_walker_config());
        let prior = engine.agents()[&0].agent.dodge().tuning().fail_probability_pct;

        engine.queue_command(SimCommand::SetDodgeFailProbability {
            npc_id: 0,
            percentage: 150,
        });
        let snapshot = engine.tick(&default_player());

        assert_eq!(snapshot.alerts.len(), 1);
        assert_eq!(snapshot.alerts[0].level, AlertLevel::Warning);
        assert_eq!(
            engine.agents()[&0].agent.dodge().tuning().fail_probability_pct,
            prior
        );

        // A valid value goes through without complaint
        engine.queue_command(SimCommand::SetDodgeFailProbability {
            npc_id: 0,
            percentage: 0,
        });
        let snapshot = engine.tick(&default_player());
        assert!(snapshot.alerts.is_empty());
        assert_eq!(
            engine.agents()[&0].agent.dodge().tuning().fail_probability_pct,
            0
        );
    }

    #[test]
    fn test_unknown_npc_command_alerts() {
        let mut engine = SimEngine::new(single_walker_config());
        engine.queue_command(SimCommand::NotifyHit { npc_id: 99 });
        engine.queue_command(SimCommand::SetDodgeFailProbability {
            npc_id: 99,
            percentage: 10,
        });
        let snapshot = engine.tick(&default_player());
        assert_eq!(snapshot.alerts.len(), 2);
    }

    #[test]
    fn test_lob_lifecycle() {
        let mut engine = SimEngine::new(single_walker_config());
        let player = default_player();

        let mut first_lob_tick = None;
        let mut saw_projectile = false;
        let mut cleared_after = false;

        for tick in 0..345u64 {
            let snapshot = engine.tick(&player);

            if snapshot
                .events
                .iter()
                .any(|e| matches!(e, SimEvent::LobFired { npc_id: 0 }))
                && first_lob_tick.is_none()
            {
                first_lob_tick = Some(tick);
                assert_eq!(snapshot.projectiles.len(), 1);
                // Lobbed at the fixed offset from the player's position,
                // minus the first gravity step
                let velocity = snapshot.projectiles[0].velocity;
                assert_eq!(velocity.x, player.position.x + 20.0);
                assert_eq!(velocity.z, player.position.z);
                assert!(velocity.y < player.position.y - 45.0 + 0.01);
            }

            if !snapshot.projectiles.is_empty() {
                saw_projectile = true;
            }
            if tick > 320 && snapshot.projectiles.is_empty() {
                cleared_after = true;
            }
        }

        // The 3000 ms wait elapses at tick 180 (60 Hz), give or take one
        // tick of millisecond truncation
        let fired = first_lob_tick.expect("the NPC should return fire");
        assert!(
            (180..=182).contains(&fired),
            "first lob at tick {fired}, expected ~180"
        );
        assert!(saw_projectile);
        assert!(
            cleared_after,
            "the lob should fall past the kill plane and despawn before the next volley"
        );
    }

    #[test]
    fn test_reset_respawns_mission() {
        let mut engine = SimEngine::new(SimConfig::default());
        let player = default_player();

        for _ in 0..NPC_HIT_POINTS {
            engine.queue_command(SimCommand::NotifyHit { npc_id: 0 });
        }
        let snapshot = engine.tick(&player);
        assert_eq!(snapshot.npcs.len(), 5, "one of six NPCs is down");

        engine.queue_command(SimCommand::Reset);
        let snapshot = engine.tick(&player);
        assert_eq!(snapshot.npcs.len(), 6);
        assert!(snapshot.npcs.iter().all(|npc| npc.hp == NPC_HIT_POINTS));
        assert_eq!(snapshot.time.tick, 1, "mission clock restarts");
    }

    #[test]
    fn test_walkers_report_animation_flyers_do_not() {
        let mut engine = SimEngine::new(SimConfig::default());
        let snapshot = engine.tick(&default_player());

        let walker = snapshot.npcs.iter().find(|n| n.npc_id == 0).unwrap();
        assert!(walker.animation_speed.is_some());

        let flyer = snapshot.npcs.iter().find(|n| n.npc_id == 5).unwrap();
        assert!(flyer.animation.is_none());
        assert!(flyer.animation_speed.is_none());
    }
}
