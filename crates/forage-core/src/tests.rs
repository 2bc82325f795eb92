//! Unit tests for forage-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, ResourceId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(ResourceId(100) > ResourceId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(ResourceId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(ResourceId(7).to_string(), "ResourceId(7)");
    }
}

#[cfg(test)]
mod geo {
    use std::f32::consts::PI;

    use crate::geo::{heading_from_compass, normalize_angle, will_cross_home};
    use crate::Vec2;

    #[test]
    fn normalize_wraps_into_range() {
        assert!((normalize_angle(2.5 * PI) - 0.5 * PI).abs() < 1e-5);
        assert!((normalize_angle(-3.5 * PI) - 0.5 * PI).abs() < 1e-5);
        assert_eq!(normalize_angle(0.5), 0.5);
        let wrapped = normalize_angle(2.0 * PI + 0.25);
        assert!((wrapped - 0.25).abs() < 1e-5);
    }

    #[test]
    fn compass_convention() {
        // A compass reading of (0, -1) maps to heading 0.
        assert!(heading_from_compass(Vec2::new(0.0, -1.0)).abs() < 1e-6);
        // (-1, 0) maps to +π/2.
        let h = heading_from_compass(Vec2::new(-1.0, 0.0));
        assert!((h - PI / 2.0).abs() < 1e-6);
    }

    #[test]
    fn ray_through_home_with_negative_dot_aligns() {
        // Agent at (1, 0), heading along +x: the carrying line passes through
        // the origin and the dot product with the vector home is negative.
        assert!(will_cross_home(
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::ZERO,
            0.1,
        ));
    }

    #[test]
    fn positive_dot_never_aligns() {
        // Same carrying line, opposite heading sign: dot is positive.
        assert!(!will_cross_home(
            Vec2::new(1.0, 0.0),
            Vec2::new(-1.0, 0.0),
            Vec2::ZERO,
            0.1,
        ));
    }

    #[test]
    fn perpendicular_miss_never_aligns() {
        // Heading perpendicular to the home direction: the line misses home
        // by a full metre.
        assert!(!will_cross_home(
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::ZERO,
            0.1,
        ));
    }

    #[test]
    fn degenerate_heading_is_false() {
        // A zero heading vector must not divide by zero — defined as false.
        assert!(!will_cross_home(
            Vec2::new(1.0, 0.0),
            Vec2::ZERO,
            Vec2::ZERO,
            0.1,
        ));
    }

    #[test]
    fn near_miss_outside_tolerance() {
        // Line parallel to x at y offset 0.2: perpendicular distance 0.2.
        assert!(!will_cross_home(
            Vec2::new(1.0, 0.2),
            Vec2::new(1.0, 0.0),
            Vec2::ZERO,
            0.1,
        ));
        // Widen the tolerance past the offset and it aligns.
        assert!(will_cross_home(
            Vec2::new(1.0, 0.2),
            Vec2::new(1.0, 0.0),
            Vec2::ZERO,
            0.25,
        ));
    }

    #[test]
    fn vec2_distance() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(4.0, 6.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }
}

#[cfg(test)]
mod pose {
    use crate::{Pose, Vec2};

    #[test]
    fn heading_vector_matches_angle() {
        let pose = Pose::new(Vec2::ZERO, Vec2::new(0.0, -1.0));
        let v = pose.heading_vector();
        assert!((v.x - 1.0).abs() < 1e-6);
        assert!(v.y.abs() < 1e-6);
    }

    #[test]
    fn drive_command_shapes() {
        use crate::DriveCommand;
        assert!(DriveCommand::STOP.is_stopped());
        assert_eq!(DriveCommand::straight(3.0).left, 3.0);
        assert_eq!(DriveCommand::reverse(3.0).right, -3.0);
        let spin = DriveCommand::spin(2.0);
        assert_eq!(spin.left, -2.0);
        assert_eq!(spin.right, 2.0);
    }
}

#[cfg(test)]
mod flag {
    use crate::MailboxFlag;

    #[test]
    fn wire_roundtrip() {
        assert_eq!(MailboxFlag::parse("collected"), MailboxFlag::Collected);
        assert_eq!(MailboxFlag::parse("not_collected"), MailboxFlag::NotCollected);
        assert_eq!(MailboxFlag::Collected.as_str(), "collected");
    }

    #[test]
    fn garbage_parses_fail_safe() {
        assert_eq!(MailboxFlag::parse(""), MailboxFlag::NotCollected);
        assert_eq!(MailboxFlag::parse("COLLECTED?!"), MailboxFlag::NotCollected);
        assert_eq!(MailboxFlag::parse("done"), MailboxFlag::NotCollected);
    }

    #[test]
    fn whitespace_and_case_tolerated() {
        assert_eq!(MailboxFlag::parse("  Collected \n"), MailboxFlag::Collected);
    }

    #[test]
    fn default_is_not_collected() {
        assert!(!MailboxFlag::default().is_collected());
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(32);
        assert_eq!(clock.elapsed_secs(), 0.0);
        clock.advance();
        clock.advance();
        assert!((clock.elapsed_secs() - 0.064).abs() < 1e-9);
    }

    #[test]
    fn ticks_for_secs_rounds_up() {
        let clock = SimClock::new(32);
        // 1 s / 32 ms = 31.25 → 32 ticks, never 31.
        assert_eq!(clock.ticks_for_secs(1.0), 32);
        assert_eq!(clock.ticks_for_secs(0.0), 0);
        assert_eq!(clock.ticks_for_secs(0.032), 1);
    }

    #[test]
    fn sim_config_end_tick() {
        let cfg = SimConfig {
            tick_ms:                   32,
            total_ticks:               1_000,
            seed:                      42,
            scoreboard_interval_ticks: 100,
        };
        assert_eq!(cfg.end_tick(), Tick(1_000));
        assert_eq!(cfg.make_clock().tick_ms, 32);
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = AgentRng::new(0, AgentId(0));
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f32..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }
}

#[cfg(test)]
mod config {
    use crate::{ArenaConfig, ResourceConfig};

    #[test]
    fn arena_defaults_are_consistent() {
        let arena = ArenaConfig::default();
        assert!(arena.home_radius > arena.center_tolerance);
        assert!(arena.radius > arena.home_radius + arena.wall_tolerance);
    }

    #[test]
    fn resource_value_range() {
        let cfg = ResourceConfig::default();
        assert_eq!(cfg.value_range(), 1..=10);
    }
}
