//! Single-player projection command

use crate::{projection::project, Position, Rank, Result, Tier};

pub fn handle_project(rank: Rank, position: Position, tier: Tier, as_json: bool) -> Result<()> {
    let result = project(rank, position, tier);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!(
            "{} rank {} tier {}: {:.1} pts ({})",
            position, rank, tier, result.projected_points, result.priority_label
        );
    }
    Ok(())
}
