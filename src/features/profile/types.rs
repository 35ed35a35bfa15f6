use crate::features::payments::types::Money;
use serde::{Deserialize, Serialize};

/// Public player profile shown on the profile card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub username: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub wins: u32,
    pub losses: u32,
    pub balance: Money,
}

impl ProfileSummary {
    pub fn games_played(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.losses)
    }

    /// Win rate as a whole percent; `None` before the first game.
    pub fn win_rate_percent(&self) -> Option<u8> {
        let played = self.games_played();
        if played == 0 {
            return None;
        }
        let rounded = (u64::from(self.wins) * 100 + played / 2) / played;
        u8::try_from(rounded).ok()
    }

    /// Up to two uppercase initials for the avatar fallback.
    pub fn initials(&self) -> String {
        let words: Vec<&str> = self
            .username
            .split(|c: char| c.is_whitespace() || c == '_' || c == '-' || c == '.')
            .filter(|word| !word.is_empty())
            .collect();

        let initials: String = match words.as_slice() {
            [] => String::new(),
            [single] => single.chars().take(2).collect(),
            [first, second, ..] => first.chars().take(1).chain(second.chars().take(1)).collect(),
        };

        if initials.is_empty() {
            "?".to_string()
        } else {
            initials.to_uppercase()
        }
    }

    /// Avatar URL when present and non-blank.
    pub fn avatar(&self) -> Option<&str> {
        self.avatar_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::ProfileSummary;
    use crate::features::payments::types::Money;

    fn profile(username: &str, wins: u32, losses: u32) -> ProfileSummary {
        ProfileSummary {
            username: username.to_string(),
            avatar_url: None,
            wins,
            losses,
            balance: Money::new(0, "USD"),
        }
    }

    #[test]
    fn win_rate_is_none_without_games() {
        assert_eq!(profile("alice", 0, 0).win_rate_percent(), None);
    }

    #[test]
    fn win_rate_rounds_to_whole_percent() {
        assert_eq!(profile("alice", 1, 2).win_rate_percent(), Some(33));
        assert_eq!(profile("alice", 2, 1).win_rate_percent(), Some(67));
        assert_eq!(profile("alice", 5, 0).win_rate_percent(), Some(100));
        assert_eq!(profile("alice", 0, 7).win_rate_percent(), Some(0));
        assert_eq!(profile("alice", u32::MAX, u32::MAX).win_rate_percent(), Some(50));
    }

    #[test]
    fn initials_from_username() {
        assert_eq!(profile("alice", 0, 0).initials(), "AL");
        assert_eq!(profile("dark_knight", 0, 0).initials(), "DK");
        assert_eq!(profile("Mary Jane Watson", 0, 0).initials(), "MJ");
        assert_eq!(profile("x", 0, 0).initials(), "X");
        assert_eq!(profile("__", 0, 0).initials(), "?");
    }

    #[test]
    fn blank_avatar_is_ignored() {
        let mut summary = profile("alice", 0, 0);
        summary.avatar_url = Some("  ".to_string());
        assert_eq!(summary.avatar(), None);
        summary.avatar_url = Some("https://cdn.arena.gg/a.png".to_string());
        assert_eq!(summary.avatar(), Some("https://cdn.arena.gg/a.png"));
    }
}
