//! Plain-text record of a game, one entry per ply. Written for people to read
//! afterwards; nothing parses it back.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::warn;

use crate::board::{Board, Player, Variant};
use crate::evaluate::GameStatus;
use crate::moves::Move;

pub struct Transcript<W: Write> {
    writer: W,
    ply: usize,
}

impl Transcript<BufWriter<File>> {
    /// Creates (or truncates) the file at `path`.
    pub fn create<P: AsRef<Path>>(path: P, variant: Variant) -> io::Result<Self> {
        let file = File::create(path)?;
        Transcript::new(BufWriter::new(file), variant)
    }
}

impl<W: Write> Transcript<W> {
    pub fn new(mut writer: W, variant: Variant) -> io::Result<Self> {
        writeln!(writer, "tic-tac-toe transcript, {} variant", variant)?;
        Ok(Self { writer, ply: 0 })
    }

    pub fn record_move(&mut self, side: Player, game_move: Move, board: &Board) {
        self.ply += 1;
        let entry = format!("\n{}. {} played {}\n{}", self.ply, side, game_move, board);
        self.write_entry(&entry);
    }

    pub fn record_pass(&mut self, side: Player) {
        self.ply += 1;
        let entry = format!("\n{}. {} is out of moves and passes\n", self.ply, side);
        self.write_entry(&entry);
    }

    pub fn finish(&mut self, status: GameStatus) {
        let entry = format!("\nresult: {}\n", status);
        self.write_entry(&entry);
        if let Err(error) = self.writer.flush() {
            warn!("failed to flush transcript: {}", error);
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_entry(&mut self, entry: &str) {
        if let Err(error) = self.writer.write_all(entry.as_bytes()) {
            warn!("failed to write transcript entry {}: {}", self.ply, error);
        }
    }
}
