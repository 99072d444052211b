#![cfg(feature = "std")]

//! Terminal rendering and command parsing for the interactive host.

use std::fmt::Write;

use crate::{
    common::Side,
    config::{BOARD_SIZE, SHIPS},
    controller::Intent,
    domain::{BoardView, GameSnapshot},
    game::Phase,
};

/// Parse `A5`-style input: column letter A-J is `x`, row 1-10 is `y`.
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    let input = input.trim();
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let x = (col_ch as u8 - b'A') as usize;
    if x >= BOARD_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 || row > BOARD_SIZE {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Ok((x, row - 1))
}

/// Map one line of input to intents, given the current phase.
pub fn parse_command(line: &str, phase: Phase) -> Result<Vec<Intent>, String> {
    let cmd = line.trim().to_ascii_lowercase();
    match cmd.as_str() {
        "q" | "quit" | "exit" => return Ok(vec![Intent::Quit]),
        "r" | "rotate" => return Ok(vec![Intent::RotatePlacement]),
        // No closing or opening animation here: go straight to placement.
        "n" | "rematch" => {
            return Ok(vec![
                Intent::RequestRematch,
                Intent::ClosingFinished,
                Intent::OpeningFinished,
            ])
        }
        "" => return Err("Enter a coordinate, 'r' to rotate or 'q' to quit".to_string()),
        _ => {}
    }
    let (x, y) = parse_coord(&cmd)?;
    match phase {
        Phase::PlacingShip(_) => Ok(vec![Intent::PlaceShip { x, y }]),
        Phase::Combat => Ok(vec![Intent::Fire { x, y }]),
        other => Err(format!("Coordinates are not accepted during {:?}", other)),
    }
}

/// Draw a board. `reveal` shows unhit ships.
pub fn render_board(board: &BoardView, reveal: bool) -> String {
    let mut out = String::new();
    out.push_str("    ╔═══════════════════════╗\n");
    out.push_str("    ║  ");
    for x in 0..BOARD_SIZE {
        let _ = write!(out, " {}", (b'A' + x as u8) as char);
    }
    out.push_str(" ║\n");
    out.push_str("    ╠═══════════════════════╣\n");
    for y in 0..BOARD_SIZE {
        let _ = write!(out, "    ║ {:2}", y + 1);
        for x in 0..BOARD_SIZE {
            let cell = board.cell(x, y).unwrap_or_default();
            let ch = match (cell.hit, cell.occupied) {
                (true, true) => 'X',
                (true, false) => 'o',
                (false, true) if reveal => 'S',
                _ => '.',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push_str(" ║\n");
    }
    out.push_str("    ╚═══════════════════════╝\n");
    for ship in &board.ships {
        let status = if ship.destroyed {
            "SUNK"
        } else if ship.placed {
            "Afloat"
        } else {
            "Unplaced"
        };
        let _ = writeln!(out, "      {} ({}): {}", ship.name, ship.length, status);
    }
    out
}

/// Both boards plus a prompt line for the current phase.
pub fn render_snapshot(snapshot: &GameSnapshot) -> String {
    let view = snapshot.concealed();
    let mut out = String::new();
    let _ = writeln!(out, "\n  Enemy waters (turn {})", view.turn);
    out.push_str(&render_board(&view.opponent, false));
    out.push_str("\n  Your fleet\n");
    out.push_str(&render_board(&view.player, true));
    let prompt = match view.phase {
        Phase::PlacingShip(ship) => format!(
            "Place your {} (length {}, {:?}) - coordinate or 'r' to rotate",
            SHIPS[ship].name(),
            SHIPS[ship].length(),
            view.orientation
        ),
        Phase::Combat if view.turn % 2 == 0 => "Your shot - enter a coordinate".to_string(),
        Phase::Combat => "Opponent is aiming...".to_string(),
        Phase::Terminal(Side::Player) => "You win! 'rematch' or 'quit'".to_string(),
        Phase::Terminal(Side::Opponent) => "You lose. 'rematch' or 'quit'".to_string(),
        other => format!("{:?}", other),
    };
    let _ = writeln!(out, "  {}", prompt);
    out
}
