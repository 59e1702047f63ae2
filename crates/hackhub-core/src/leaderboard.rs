//! Leaderboard: read-only ranked standings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub team: String,
    pub points: u32,
    /// Rank delta since the previous scoring round; positive is climbing.
    pub trend: i32,
    pub is_my_team: bool,
}

impl LeaderboardEntry {
    /// Podium slots are shown separately from the table.
    pub fn is_podium(&self) -> bool {
        self.rank <= 3
    }

    pub fn trend_direction(&self) -> Trend {
        match self.trend {
            t if t > 0 => Trend::Up,
            t if t < 0 => Trend::Down,
            _ => Trend::Flat,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// The built-in seed standings, rank order.
    pub fn seeded() -> Self {
        fn entry(rank: u32, team: &str, points: u32, trend: i32) -> LeaderboardEntry {
            LeaderboardEntry {
                rank,
                team: team.into(),
                points,
                trend,
                is_my_team: team == "CyberSynthetics",
            }
        }

        Self {
            entries: vec![
                entry(1, "Neural Ninjas", 980, 0),
                entry(2, "Quantum Quokkas", 945, 1),
                entry(3, "Stack Smashers", 910, -1),
                entry(4, "Bit Benders", 860, 2),
                entry(5, "Null Pointers", 845, 0),
                entry(6, "Async Avengers", 820, -2),
                entry(7, "Hash Hackers", 790, 1),
                entry(8, "Kernel Krew", 740, 0),
                entry(9, "Lambda Lords", 695, 3),
                entry(10, "Segfault Squad", 640, -1),
                entry(11, "Mutex Mavericks", 510, 0),
                entry(12, "CyberSynthetics", 450, 4),
                entry(13, "Turing Titans", 430, -2),
                entry(14, "Pixel Pirates", 390, 0),
            ],
        }
    }

    /// The podium, rank 1..=3 in order.
    pub fn top_three(&self) -> Vec<&LeaderboardEntry> {
        self.entries.iter().filter(|e| e.is_podium()).collect()
    }

    /// Everything below the podium, rank order.
    pub fn standings(&self) -> Vec<&LeaderboardEntry> {
        self.entries.iter().filter(|e| !e.is_podium()).collect()
    }

    /// 1-based page over the full standings. Out-of-range pages yield an
    /// empty slice, including page numbers whose offset would overflow.
    pub fn page(&self, page: usize, per_page: usize) -> &[LeaderboardEntry] {
        if page == 0 || per_page == 0 {
            return &[];
        }
        let Some(start) = (page - 1).checked_mul(per_page) else {
            return &[];
        };
        if start >= self.entries.len() {
            return &[];
        }
        let end = start.saturating_add(per_page).min(self.entries.len());
        &self.entries[start..end]
    }

    pub fn my_team(&self) -> Option<&LeaderboardEntry> {
        self.entries.iter().find(|e| e.is_my_team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn podium_and_table_split() {
        let board = Leaderboard::seeded();
        let podium = board.top_three();
        assert_eq!(podium.len(), 3);
        assert_eq!(podium[0].team, "Neural Ninjas");
        assert!(board.standings().iter().all(|e| e.rank > 3));
    }

    #[test]
    fn my_team_is_marked_once() {
        let board = Leaderboard::seeded();
        assert_eq!(
            board.entries.iter().filter(|e| e.is_my_team).count(),
            1
        );
        let mine = board.my_team().unwrap();
        assert_eq!(mine.rank, 12);
        assert_eq!(mine.points, 450);
    }

    #[test]
    fn pagination_bounds() {
        let board = Leaderboard::seeded();
        assert_eq!(board.page(1, 10).len(), 10);
        assert_eq!(board.page(2, 10).len(), 4);
        assert!(board.page(3, 10).is_empty());
        assert!(board.page(0, 10).is_empty());
        assert!(board.page(1, 0).is_empty());
    }

    #[test]
    fn pagination_handles_huge_page_numbers() {
        let board = Leaderboard::seeded();
        assert!(board.page(usize::MAX, 10).is_empty());
        assert!(board.page(usize::MAX, usize::MAX).is_empty());
        assert_eq!(board.page(1, usize::MAX).len(), board.entries.len());
    }

    #[test]
    fn trend_direction_mapping() {
        let board = Leaderboard::seeded();
        let by_team = |name: &str| {
            board
                .entries
                .iter()
                .find(|e| e.team == name)
                .unwrap()
                .trend_direction()
        };
        assert_eq!(by_team("Neural Ninjas"), Trend::Flat);
        assert_eq!(by_team("Quantum Quokkas"), Trend::Up);
        assert_eq!(by_team("Stack Smashers"), Trend::Down);
    }
}
