//! Board generation command

use std::{io::Write, path::Path};

use super::{load_board, write_output, CommandContext};
use crate::{board::PositionCounts, cli::BoardSource, Result};

pub fn handle_board(
    ctx: &CommandContext,
    source: &BoardSource,
    output: Option<&Path>,
    as_json: bool,
) -> Result<()> {
    let board = load_board(source, &ctx.id_cache())?;

    if as_json {
        let json = serde_json::to_string_pretty(&board.rows())?;
        write_output(output, |out| writeln!(out, "{json}"))?;
    } else {
        write_output(output, |out| board.write_csv(out))?;
    }

    // Keep stdout clean for the CSV when no file was given.
    if let Some(path) = output {
        println!("Wrote {} players to {}", board.len(), path.display());
        print_counts(&board.position_counts());
    }
    Ok(())
}

fn print_counts(counts: &PositionCounts) {
    println!(
        "QB: {}  RB: {}  WR: {}  TE: {}  K/DEF: {}",
        counts.qb, counts.rb, counts.wr, counts.te, counts.k_def
    );
    println!(
        "With ESPN id: {}/{}",
        counts.with_espn_id,
        counts.total()
    );
}
