//! Project status lanes
//!
//! A project is always in exactly one of two lanes. The lane order below
//! is also the left-to-right order the board renders them in.

use serde::{Deserialize, Serialize};

/// Status of a project, doubling as the identity of the lane it sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Work in progress
    Active,
    /// Work completed
    Finished,
}

/// The canonical lane order on the board
pub const STATUS_LANES: &[ProjectStatus] = &[ProjectStatus::Active, ProjectStatus::Finished];

impl ProjectStatus {
    /// The other lane; with exactly two lanes every move targets it
    pub fn other(self) -> ProjectStatus {
        match self {
            ProjectStatus::Active => ProjectStatus::Finished,
            ProjectStatus::Finished => ProjectStatus::Active,
        }
    }

    /// Headline shown above the lane
    pub fn lane_title(self) -> String {
        format!("{} PROJECTS", self.to_string().to_uppercase())
    }

    /// Position of this status in the lane order (0-based)
    pub fn lane_index(self) -> usize {
        match self {
            ProjectStatus::Active => 0,
            ProjectStatus::Finished => 1,
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Finished => "finished",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "active" => Ok(ProjectStatus::Active),
            "finished" => Ok(ProjectStatus::Finished),
            _ => Err(format!("Unknown project status: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_lane_order() {
        assert_eq!(STATUS_LANES.len(), 2);
        assert_eq!(STATUS_LANES[0], ProjectStatus::Active);
        assert_eq!(STATUS_LANES[1], ProjectStatus::Finished);
    }

    #[test]
    fn test_lane_index_matches_order() {
        for (i, status) in STATUS_LANES.iter().enumerate() {
            assert_eq!(status.lane_index(), i);
        }
    }

    #[test]
    fn test_other_lane() {
        assert_eq!(ProjectStatus::Active.other(), ProjectStatus::Finished);
        assert_eq!(ProjectStatus::Finished.other(), ProjectStatus::Active);
    }

    #[test]
    fn test_lane_titles() {
        assert_eq!(ProjectStatus::Active.lane_title(), "ACTIVE PROJECTS");
        assert_eq!(ProjectStatus::Finished.lane_title(), "FINISHED PROJECTS");
    }

    #[test]
    fn test_display_roundtrip() {
        for status in STATUS_LANES {
            let parsed = ProjectStatus::from_str(&status.to_string()).unwrap();
            assert_eq!(parsed, *status);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!(ProjectStatus::from_str("archived").is_err());
        assert!(ProjectStatus::from_str("Active").is_err());
    }

    #[test]
    fn test_serde_representation() {
        let json = serde_json::to_string(&ProjectStatus::Finished).unwrap();
        assert_eq!(json, "\"finished\"");
        let back: ProjectStatus = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(back, ProjectStatus::Active);
    }
}
