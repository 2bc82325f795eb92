//! Unit tests for forage-log.

use crate::{
    replay_file, replay_reader, CollectionRecord, JsonlWriter, LogWriter, MemoryWriter,
    Scoreboard, TeamTally,
};

fn record(agent: &str, team: &str, total: u64) -> CollectionRecord {
    CollectionRecord {
        agent: agent.to_string(),
        team: team.to_string(),
        resources_collected: total,
    }
}

// ── Tally ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tally {
    use super::*;

    #[test]
    fn increment_returns_running_total() {
        let mut tally = TeamTally::new();
        assert_eq!(tally.increment("red"), 1);
        assert_eq!(tally.increment("red"), 2);
        assert_eq!(tally.increment("blue"), 1);
        assert_eq!(tally.get("red"), 2);
        assert_eq!(tally.get("green"), 0);
    }

    #[test]
    fn sorted_orders_by_team() {
        let mut tally = TeamTally::new();
        tally.increment("red");
        tally.increment("blue");
        tally.increment("blue");
        assert_eq!(tally.sorted(), vec![("blue", 2), ("red", 1)]);
    }

    #[test]
    fn accumulation_is_commutative_within_a_team() {
        // Apply the same records in two different orders; totals must match.
        let records = [
            record("a", "red", 1),
            record("b", "blue", 1),
            record("a", "red", 2),
            record("c", "red", 3),
        ];

        let mut forward = TeamTally::new();
        for r in &records {
            forward.apply(r);
        }
        let mut backward = TeamTally::new();
        for r in records.iter().rev() {
            backward.apply(r);
        }
        assert_eq!(forward, backward);
        assert_eq!(forward.get("red"), 3);
        assert_eq!(forward.get("blue"), 1);
    }
}

// ── Replay ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod replay {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn rebuilds_totals_from_stream() {
        let log = concat!(
            r#"{"agent":"scout_0","team":"red","resources_collected":1}"#, "\n",
            r#"{"agent":"scout_2","team":"blue","resources_collected":1}"#, "\n",
            r#"{"agent":"scout_0","team":"red","resources_collected":2}"#, "\n",
        );
        let tally = replay_reader(Cursor::new(log)).unwrap();
        assert_eq!(tally.get("red"), 2);
        assert_eq!(tally.get("blue"), 1);
    }

    #[test]
    fn malformed_line_is_skipped() {
        // Garbage between two well-formed entries: both still count.
        let log = concat!(
            r#"{"agent":"scout_0","team":"red","resources_collected":1}"#, "\n",
            "{{{ not json at all\n",
            r#"{"agent":"scout_1","team":"blue","resources_collected":1}"#, "\n",
        );
        let tally = replay_reader(Cursor::new(log)).unwrap();
        assert_eq!(tally.get("red"), 1);
        assert_eq!(tally.get("blue"), 1);
        assert_eq!(tally.len(), 2);
    }

    #[test]
    fn blank_lines_ignored() {
        let log = "\n\n";
        let tally = replay_reader(Cursor::new(log)).unwrap();
        assert!(tally.is_empty());
    }

    #[test]
    fn missing_file_yields_empty_tally() {
        let tally = replay_file(std::path::Path::new("/nonexistent/collections.jsonl")).unwrap();
        assert!(tally.is_empty());
    }
}

// ── Writers ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod writers {
    use std::io::BufReader;

    use super::*;

    #[test]
    fn jsonl_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("collections.jsonl");

        let mut writer = JsonlWriter::create(&path).unwrap();
        writer.append(&record("scout_0", "red", 1)).unwrap();
        writer.append(&record("scout_1", "blue", 1)).unwrap();
        writer.append(&record("scout_0", "red", 2)).unwrap();
        writer.finish().unwrap();
        writer.finish().unwrap(); // idempotent

        let tally = replay_file(&path).unwrap();
        assert_eq!(tally.get("red"), 2);
        assert_eq!(tally.get("blue"), 1);
    }

    #[test]
    fn append_to_extends_existing_stream() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("collections.jsonl");

        let mut first = JsonlWriter::create(&path).unwrap();
        first.append(&record("scout_0", "red", 1)).unwrap();
        first.finish().unwrap();

        let mut second = JsonlWriter::append_to(&path).unwrap();
        second.append(&record("scout_0", "red", 2)).unwrap();
        second.finish().unwrap();

        let file = std::fs::File::open(&path).unwrap();
        let tally = replay_reader(BufReader::new(file)).unwrap();
        assert_eq!(tally.get("red"), 2);
    }

    #[test]
    fn memory_writer_preserves_append_order() {
        let mut writer = MemoryWriter::new();
        writer.append(&record("a", "red", 1)).unwrap();
        writer.append(&record("b", "blue", 1)).unwrap();
        assert_eq!(writer.records.len(), 2);
        assert_eq!(writer.records[0].agent, "a");
        assert_eq!(writer.records[1].agent, "b");
    }
}

// ── Scoreboard ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scoreboard {
    use super::*;

    #[test]
    fn renders_only_on_change() {
        let mut board = Scoreboard::new();
        let mut tally = TeamTally::new();
        tally.increment("red");

        let first = board.render_if_changed(&tally);
        assert!(first.is_some());
        assert!(board.render_if_changed(&tally).is_none());

        tally.increment("blue");
        assert!(board.render_if_changed(&tally).is_some());
    }

    #[test]
    fn table_lists_teams_capitalized_and_sorted() {
        let mut tally = TeamTally::new();
        tally.increment("red");
        tally.increment("blue");
        let table = crate::scoreboard::render(&tally);
        let blue_at = table.find("Blue").unwrap();
        let red_at = table.find("Red").unwrap();
        assert!(blue_at < red_at, "teams should be sorted:\n{table}");
        assert!(table.contains("TEAM"));
        assert!(table.contains("RESOURCES"));
    }
}
