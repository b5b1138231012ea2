//! Integration tests for the projection engine

use draft_board::{project, projection::project_raw, Position, PriorityLabel, Rank, Tier};

fn rank(r: u32) -> Rank {
    Rank::new(r).unwrap()
}

fn tier(t: u8) -> Tier {
    Tier::new(t).unwrap()
}

#[test]
fn test_reference_projections() {
    let top_qb = project(rank(1), Position::QB, tier(1));
    assert_eq!(top_qb.projected_points, 248.5);
    assert_eq!(top_qb.priority_label, PriorityLabel::MustDraft);

    let kicker = project(rank(200), Position::K, tier(4));
    assert_eq!(kicker.projected_points, 30.0);
    assert_eq!(kicker.priority_label, PriorityLabel::DepthHandcuff);

    let wr = project(rank(50), Position::WR, tier(2));
    assert_eq!(wr.projected_points, 150.0);
    assert_eq!(wr.priority_label.as_str(), "High Priority");
}

#[test]
fn test_kicker_and_defense_share_constants() {
    for r in [1, 37, 150] {
        for t in 1..=4 {
            assert_eq!(
                project(rank(r), Position::K, tier(t)),
                project(rank(r), Position::DEF, tier(t))
            );
        }
    }
}

#[test]
fn test_every_position_respects_floor_and_ordering() {
    for position in Position::ALL {
        for t in 1..=4 {
            let mut previous = f64::INFINITY;
            for r in 1..=250 {
                let points = project(rank(r), position, tier(t)).projected_points;
                assert!(points >= 30.0, "{position} r{r} t{t} below floor");
                assert!(points <= previous, "{position} not monotone at rank {r}");
                previous = points;
            }
        }
    }
}

#[test]
fn test_label_boundaries() {
    let label = |r| project(rank(r), Position::RB, tier(2)).priority_label;
    assert_eq!(label(24), PriorityLabel::MustDraft);
    assert_eq!(label(25), PriorityLabel::HighPriority);
    assert_eq!(label(60), PriorityLabel::HighPriority);
    assert_eq!(label(61), PriorityLabel::GoodValue);
    assert_eq!(label(120), PriorityLabel::GoodValue);
    assert_eq!(label(121), PriorityLabel::DepthHandcuff);
}

#[test]
fn test_raw_entry_point_rejects_bad_input() {
    assert!(project_raw(0, "QB", 1).unwrap_err().is_invalid_argument());
    assert!(project_raw(1, "QB", 0).unwrap_err().is_invalid_argument());
    assert!(project_raw(1, "QB", 5).unwrap_err().is_invalid_argument());
    assert!(project_raw(1, "LB", 1).unwrap_err().is_invalid_argument());
    assert_eq!(project_raw(1, "qb", 1).unwrap().projected_points, 248.5);
}
