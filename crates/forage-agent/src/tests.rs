//! Unit tests for forage-agent.

#[cfg(test)]
mod store {
    use forage_core::{AgentId, DriveCommand, Pose, Vec2};

    use crate::{AgentRngs, AgentStore};

    #[test]
    fn new_store_has_default_rows() {
        let store = AgentStore::new(3);
        assert_eq!(store.count, 3);
        assert_eq!(store.positions.len(), 3);
        assert!(store.drives.iter().all(DriveCommand::is_stopped));
    }

    #[test]
    fn record_and_read_back_pose() {
        let mut store = AgentStore::new(2);
        let pose = Pose::new(Vec2::new(1.5, -0.5), Vec2::new(0.0, -1.0));
        store.record_pose(AgentId(1), pose);
        assert_eq!(store.pose(AgentId(1)), pose);
        // Agent 0 untouched.
        assert_eq!(store.positions[0], Vec2::ZERO);
    }

    #[test]
    fn distance_from_home() {
        let mut store = AgentStore::new(1);
        store.record_pose(
            AgentId(0),
            Pose::new(Vec2::new(3.0, 4.0), Vec2::new(0.0, -1.0)),
        );
        assert!((store.distance_from(AgentId(0), Vec2::ZERO) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn agent_ids_ascend() {
        let store = AgentStore::new(4);
        let ids: Vec<_> = store.agent_ids().collect();
        assert_eq!(ids, vec![AgentId(0), AgentId(1), AgentId(2), AgentId(3)]);
    }

    #[test]
    fn rng_bank_is_deterministic() {
        let mut a = AgentRngs::new(2, 7);
        let mut b = AgentRngs::new(2, 7);
        let x: u64 = a.get_mut(AgentId(1)).random();
        let y: u64 = b.get_mut(AgentId(1)).random();
        assert_eq!(x, y);
    }

    #[test]
    fn get_many_mut_returns_disjoint_refs() {
        let mut rngs = AgentRngs::new(3, 1);
        let agents = [AgentId(0), AgentId(2)];
        let refs = rngs.get_many_mut(&agents);
        assert_eq!(refs.len(), 2);
    }
}

#[cfg(test)]
mod roster {
    use std::io::Cursor;

    use forage_core::AgentId;

    use crate::{load_roster_reader, AgentProfile, Roster, UNKNOWN_TEAM};

    const ROSTER_CSV: &str = "\
name,team\n\
scout_0,Red\n\
scout_1,red\n\
scout_2,blue\n\
";

    #[test]
    fn loads_rows_in_order() {
        let roster = load_roster_reader(Cursor::new(ROSTER_CSV)).unwrap();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.name_of(AgentId(0)), Some("scout_0"));
        assert_eq!(roster.team_of(AgentId(2)), "blue");
    }

    #[test]
    fn team_labels_lowercased() {
        let roster = load_roster_reader(Cursor::new(ROSTER_CSV)).unwrap();
        assert_eq!(roster.team_of(AgentId(0)), "red");
    }

    #[test]
    fn unregistered_agent_gets_unknown_team() {
        let roster = Roster::new(vec![AgentProfile::new("solo", "green")]);
        assert_eq!(roster.team_of(AgentId(5)), UNKNOWN_TEAM);
        assert_eq!(roster.name_of(AgentId(5)), None);
    }

    #[test]
    fn malformed_csv_errors() {
        let bad = "name,team\nonly_one_field\n";
        assert!(load_roster_reader(Cursor::new(bad)).is_err());
    }

    #[test]
    fn iter_pairs_ids_with_profiles() {
        let roster = load_roster_reader(Cursor::new(ROSTER_CSV)).unwrap();
        let pairs: Vec<_> = roster.iter().map(|(id, p)| (id, p.name.clone())).collect();
        assert_eq!(pairs[1], (AgentId(1), "scout_1".to_string()));
    }
}
