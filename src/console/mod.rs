//! Hot-seat console front end.
//!
//! Two players share one terminal and type moves in coordinate notation.
//! Every command produces a block of text; the loop writes it out and reads
//! the next line until `quit` or end of input.

pub mod command;
pub mod options;
pub mod output;

use std::fmt;
use std::io::{self, BufRead, Write};
use std::time::Instant;

use log::{debug, info};

use crate::board::{Color, Move};
use crate::game::Game;
use crate::perft::perft;

use command::{parse_console_command, ConsoleCommand};
use options::ConsoleOptions;
use output::{format_history, format_moves, format_perft, format_status, HELP};

pub struct ConsoleHandler {
    game: Game,
    options: ConsoleOptions,
}

impl ConsoleHandler {
    #[must_use]
    pub fn new(options: ConsoleOptions) -> Self {
        ConsoleHandler {
            game: Game::new(),
            options,
        }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Banner printed before the first prompt.
    #[must_use]
    pub fn greeting(&self) -> String {
        let mut text = String::from("chess_rules console, type 'help' for commands\n");
        text.push_str(&self.board_text());
        text
    }

    /// Run the console loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{}", self.greeting())?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            let Some(cmd) = parse_console_command(&line) else {
                continue;
            };
            if cmd == ConsoleCommand::Quit {
                break;
            }
            let response = self.handle_command(&cmd);
            for line in response.lines() {
                writeln!(output, "{line}")?;
            }
            output.flush()?;
        }

        debug!("console closed after {} moves", self.game.history().len());
        Ok(())
    }

    /// Handle a single command and return the text to show.
    pub fn handle_command(&mut self, cmd: &ConsoleCommand) -> String {
        match cmd {
            ConsoleCommand::Move(mv) => self.play(*mv),
            ConsoleCommand::Moves(sq) => format_moves(self.game.position(), *sq, self.options.style),
            ConsoleCommand::Board => self.board_text(),
            ConsoleCommand::History => format_history(self.game.history()),
            ConsoleCommand::Resign => {
                let color = self.game.side_to_move();
                report(self.game.resign(color).map(|o| o.message()))
            }
            ConsoleCommand::Draw => {
                let color = self.game.side_to_move();
                report(
                    self.game
                        .offer_draw(color)
                        .map(|()| format!("{color} offers a draw")),
                )
            }
            ConsoleCommand::Accept => {
                let color = self.responder();
                report(self.game.accept_draw(color).map(|o| o.message()))
            }
            ConsoleCommand::Decline => {
                let color = self.responder();
                report(
                    self.game
                        .decline_draw(color)
                        .map(|()| format!("{color} declined the draw offer")),
                )
            }
            ConsoleCommand::New => {
                self.game = Game::new();
                info!("new game");
                self.board_text()
            }
            ConsoleCommand::Perft(depth) => {
                let start = Instant::now();
                let nodes = perft(self.game.position(), *depth);
                format_perft(*depth, nodes, start.elapsed())
            }
            ConsoleCommand::Help => HELP.to_string(),
            ConsoleCommand::Quit => String::new(),
            ConsoleCommand::Invalid(reason) => format!("Error: {reason}"),
            ConsoleCommand::Unknown(text) => format!("Unknown command: {text}"),
        }
    }

    fn play(&mut self, mv: Move) -> String {
        match self.game.play(mv.from, mv.to) {
            Ok(_) if self.options.show_board => self.board_text(),
            Ok(_) => format_status(&self.game),
            Err(e) => format!("Error: {e}"),
        }
    }

    /// The player answering a draw offer: whoever did not make it.
    fn responder(&self) -> Color {
        self.game
            .pending_draw_offer()
            .map_or(self.game.side_to_move(), Color::opponent)
    }

    fn board_text(&self) -> String {
        format!(
            "{}{}",
            self.game.position().render(self.options.style),
            format_status(&self.game)
        )
    }
}

fn report<E: fmt::Display>(result: Result<String, E>) -> String {
    match result {
        Ok(text) => text,
        Err(e) => format!("Error: {e}"),
    }
}
