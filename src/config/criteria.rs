use crate::domain::{OTHER_CRITERION_ID, ScoringCategory, ScoringCriterion};

/// Scoring criteria catalog for Hong Kong style play.
///
/// Point values follow the house rules this tracker was built for. The
/// "other" entry is a wildcard: its catalog value is 0 and the effective
/// value is supplied when a hand is scored.
fn criterion(id: &str, name: &str, points: u32, category: &str) -> ScoringCriterion {
    ScoringCriterion {
        id: id.to_string(),
        name: name.to_string(),
        points,
        category: category.to_string(),
    }
}

/// The full catalog, grouped the way the scoring flow presents it.
pub fn scoring_categories() -> Vec<ScoringCategory> {
    vec![
        ScoringCategory {
            name: "Basic Scoring (1 番)".to_string(),
            criteria: vec![
                criterion("self-drawn", "自摸 (Self-Drawn)", 1, "basic"),
                criterion("concealed-hand", "門前清 (Concealed Hand)", 1, "basic"),
                criterion("all-chows", "平糊 (All Chows)", 1, "basic"),
                criterion("red-dragon", "紅中 (Red Dragon)", 1, "basic"),
                criterion("green-dragon", "發財 (Green Dragon)", 1, "basic"),
                criterion("white-dragon", "白板 (White Dragon)", 1, "basic"),
                criterion("prevailing-wind", "圈風牌 (Prevailing Wind)", 1, "basic"),
                criterion("seat-wind", "門風 (Seat Wind)", 1, "basic"),
                criterion("robbing-kong", "搶槓 (Robbing the Kong)", 1, "basic"),
                criterion("last-tile", "海底撈月 (Last Tile Draw)", 1, "basic"),
            ],
            collapsible: false,
            default_collapsed: false,
        },
        ScoringCategory {
            name: "Common Hands (3 番)".to_string(),
            criteria: vec![
                criterion("all-pungs", "對對和 (All Pungs)", 3, "common"),
                criterion("mixed-one-suit", "混一色 (Mixed One Suit)", 3, "common"),
            ],
            collapsible: false,
            default_collapsed: false,
        },
        ScoringCategory {
            name: "High Value Hands".to_string(),
            criteria: vec![
                criterion("small-three-dragons", "小三元 (Small Three Dragons)", 5, "high"),
                criterion("small-four-winds", "小四喜 (Small Four Winds)", 6, "high"),
                criterion("pure-one-suit", "清一色 (Pure One Suit)", 7, "high"),
                criterion("all-pungs-self-drawn", "坎坎胡 (All Pungs Self-Drawn)", 8, "high"),
                criterion("big-three-dragons", "大三元 (Big Three Dragons)", 8, "high"),
            ],
            collapsible: true,
            default_collapsed: false,
        },
        ScoringCategory {
            name: "Special Hands (10+ 番)".to_string(),
            criteria: vec![
                criterion("all-honors", "字一色 (All Honors)", 10, "special"),
                criterion("nine-gates", "九子連環 (Nine Gates)", 10, "special"),
                criterion("big-four-winds", "大四喜 (Big Four Winds)", 13, "special"),
                criterion("eighteen-arhats", "十八羅漢 (Eighteen Arhats)", 13, "special"),
                criterion("heavenly-hand", "天糊 (Heavenly Hand)", 13, "special"),
                criterion("earthly-hand", "地糊 (Earthly Hand)", 13, "special"),
            ],
            collapsible: true,
            default_collapsed: true,
        },
        ScoringCategory {
            name: "Other".to_string(),
            criteria: vec![criterion(OTHER_CRITERION_ID, "其他 (Other)", 0, "other")],
            collapsible: false,
            default_collapsed: false,
        },
    ]
}

/// Look up a catalog entry by id. The CLI boundary uses this to turn
/// caller-supplied ids into typed criteria before they reach the core.
pub fn find_criterion(id: &str) -> Option<ScoringCriterion> {
    scoring_categories()
        .into_iter()
        .flat_map(|category| category.criteria)
        .find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_criterion_ids_are_unique_across_the_catalog() {
        let mut seen = HashSet::new();
        for category in scoring_categories() {
            for criterion in category.criteria {
                assert!(
                    seen.insert(criterion.id.clone()),
                    "duplicate criterion id: {}",
                    criterion.id
                );
            }
        }
    }

    #[test]
    fn test_other_criterion_has_zero_catalog_points() {
        let other = find_criterion(OTHER_CRITERION_ID).unwrap();
        assert_eq!(other.points, 0);
    }

    #[test]
    fn test_find_criterion_by_id() {
        let pure = find_criterion("pure-one-suit").unwrap();
        assert_eq!(pure.points, 7);
        assert_eq!(pure.category, "high");

        assert!(find_criterion("not-a-hand").is_none());
    }
}
