use std::io::{self, BufRead, Write};

use log::warn;
use shakmaty::{Color, Position};
use vampirc_uci::{parser, UciMessage};

use crate::core::{to_uci, Game};
use crate::engine::evaluate_board;
use crate::engine::search::{
    mate_distance, Score, SearchLimits, Searcher, DEFAULT_DEPTH, MAX_DEPTH, MIN_DEPTH,
};
use crate::error::EngineResult;

pub struct UCI {
    pub game: Game,
    searcher: Searcher,
    /// Depth used by `go` without an explicit depth (UCI option Depth).
    limits: SearchLimits,
}

impl UCI {
    pub fn new() -> Self {
        UCI {
            game: Game::new(),
            searcher: Searcher::new(),
            limits: SearchLimits::default(),
        }
    }

    /// Current search limits (for tests).
    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    pub fn run(&mut self) -> EngineResult<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        for line in stdin.lock().lines() {
            let line = line?;
            let keep_going = self.handle_line(&line, &mut stdout)?;
            stdout.flush()?;
            if !keep_going {
                break;
            }
        }
        Ok(())
    }

    /// Handle one protocol line. Returns `false` once the session should end.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> EngineResult<bool> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(true);
        }

        match parser::parse_one(line) {
            UciMessage::Uci => self.cmd_uci(out)?,
            UciMessage::IsReady => writeln!(out, "readyok")?,
            UciMessage::SetOption { name, value } => {
                self.apply_setoption(name.trim(), value.as_deref());
            }
            UciMessage::UciNewGame => self.game = Game::new(),
            UciMessage::Position { startpos, fen, moves } => {
                let fen_str = fen.as_ref().map(|f| f.as_str());
                let move_strs: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
                self.apply_position(startpos, fen_str, &move_strs);
            }
            UciMessage::Go { search_control, .. } => {
                let depth = search_control
                    .as_ref()
                    .and_then(|sc| sc.depth)
                    .map(|d| SearchLimits::with_depth(u32::from(d)))
                    .unwrap_or(self.limits)
                    .depth;
                self.do_go(depth, out)?;
            }
            UciMessage::Quit => return Ok(false),
            UciMessage::Unknown(ref s, _) => match s.split_whitespace().next() {
                Some("eval") => self.cmd_eval(out)?,
                _ => warn!("ignoring unknown command {:?}", s),
            },
            _ => {}
        }
        Ok(true)
    }

    fn cmd_uci<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name chess_solver {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "id author chess_solver developers")?;
        writeln!(out)?;
        writeln!(
            out,
            "option name Depth type spin default {} min {} max {}",
            DEFAULT_DEPTH, MIN_DEPTH, MAX_DEPTH
        )?;
        writeln!(out, "uciok")
    }

    fn apply_setoption(&mut self, name: &str, value: Option<&str>) {
        let opt = name.to_lowercase().replace([' ', '_'], "");
        let value = value.unwrap_or("").trim();
        if opt == "depth" {
            match value.parse::<u32>() {
                Ok(depth) => self.limits = SearchLimits::with_depth(depth),
                Err(_) => warn!("invalid Depth value {:?}", value),
            }
        } else {
            warn!("unknown option {:?}", name);
        }
    }

    fn apply_position(&mut self, startpos: bool, fen: Option<&str>, move_strs: &[String]) {
        if startpos {
            self.game = Game::new();
        } else if let Some(fen_str) = fen {
            match Game::from_fen(fen_str) {
                Ok(game) => self.game = game,
                Err(e) => {
                    warn!("{}", e);
                    return;
                }
            }
        }

        for s in move_strs {
            if let Err(e) = self.game.push_uci(s) {
                warn!("{}; remaining moves skipped", e);
                break;
            }
        }
    }

    fn do_go<W: Write>(&mut self, depth: u32, out: &mut W) -> EngineResult<()> {
        if self.game.is_game_over() {
            writeln!(out, "bestmove 0000")?;
            return Ok(());
        }

        let (mv, stats) = self.searcher.next_move(depth, &mut self.game)?;
        writeln!(
            out,
            "info depth {} score {} nodes {} time {}",
            stats.depth,
            format_score(stats.score, self.game.turn()),
            stats.nodes,
            stats.elapsed.as_millis()
        )?;
        writeln!(out, "bestmove {}", to_uci(&mv))?;
        Ok(())
    }

    fn cmd_eval<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let score = evaluate_board(self.game.position().board());
        writeln!(out, "Evaluation: {} cp", score)?;
        writeln!(out, "(Positive = White advantage)")
    }
}

/// UCI score from the side to move's point of view
pub fn format_score(score: Score, turn: Color) -> String {
    let relative = match turn {
        Color::White => score,
        Color::Black => -score,
    };
    match mate_distance(relative) {
        Some(plies) if relative > 0 => format!("mate {}", plies / 2 + 1),
        Some(plies) => format!("mate -{}", plies / 2 + 1),
        None => format!("cp {}", relative),
    }
}

impl Default for UCI {
    fn default() -> Self {
        Self::new()
    }
}
