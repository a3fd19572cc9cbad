//! Line-oriented prompts over any reader and writer.

use std::io::{self, BufRead, Write};

use warrs::{Colour, Hand, InvalidOrderError, Order, PlayerSide, parse_colour, parse_replay};

use crate::render::{Style, colour_menu};

pub struct Console<R, W> {
    input: R,
    out: W,
    pub style: Style,
    pauses: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, out: W, style: Style, pauses: bool) -> Self {
        Self {
            input,
            out,
            style,
            pauses,
        }
    }

    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        self.read_line()
    }

    /// Reads one line without its terminator. EOF is reported as
    /// [`io::ErrorKind::UnexpectedEof`].
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Waits for ENTER, unless pauses are turned off.
    pub fn pause(&mut self, action: &str) -> io::Result<()> {
        if !self.pauses {
            return Ok(());
        }
        writeln!(self.out, "\n[PRESS ENTER TO {action}]")?;
        self.out.flush()?;
        self.read_line().map(drop)
    }

    pub fn ask_name(&mut self, side: PlayerSide) -> io::Result<String> {
        self.ask(&format!("{side} - Please enter your name: "))
            .map(|name| name.trim().to_string())
    }

    /// Shows the colour menu and asks until an available colour is chosen.
    pub fn ask_colour(&mut self, taken: Option<Colour>) -> io::Result<Colour> {
        let menu = colour_menu(self.style);
        self.say(&menu)?;

        let different = if taken.is_some() { "DIFFERENT " } else { "" };
        let mut prompt = format!(
            "Please select a {different}colour from the options listed above (enter a digit from 1-6): "
        );
        loop {
            let answer = self.ask(&prompt)?;
            match parse_colour(answer.trim(), taken) {
                Ok(colour) => {
                    self.say("")?;
                    return Ok(colour);
                }
                Err(err) => prompt = format!("Invalid colour choice. {err}: "),
            }
        }
    }

    /// Shows a hand and asks until a valid play order is entered.
    pub fn ask_order(&mut self, side: PlayerSide, colour: Colour, hand: &Hand) -> io::Result<Order> {
        let heading = self
            .style
            .highlight(colour, &format!("{side} - Here are your 4 cards:"));
        self.say(&heading)?;
        for (position, card) in hand.cards().iter().enumerate() {
            self.say(&format!("{}. {card}", position + 1))?;
        }

        let mut prompt = self.style.text(
            colour,
            "Enter the order you would like to play your cards in (enter the corresponding 4-digit number): ",
        );
        loop {
            let answer = self.ask(&prompt)?;
            match Order::parse(answer.trim()) {
                Ok(order) => {
                    self.say("")?;
                    return Ok(order);
                }
                Err(err) => {
                    prompt = self
                        .style
                        .text(colour, &format!("Invalid order choice. {}: ", order_hint(err)));
                }
            }
        }
    }

    /// Asks whether to play another war; only `YES` or `NO` are accepted.
    pub fn ask_replay(&mut self) -> io::Result<bool> {
        let mut prompt =
            "Would you like to start another game of War? Enter YES or NO (case sensitive): "
                .to_string();
        loop {
            let answer = self.ask(&prompt)?;
            match parse_replay(answer.trim()) {
                Ok(again) => return Ok(again),
                Err(err) => prompt = format!("Invalid input. {err}: "),
            }
        }
    }
}

const fn order_hint(err: InvalidOrderError) -> &'static str {
    match err {
        InvalidOrderError::WrongLength { .. } => "Please enter a 4-digit number",
        InvalidOrderError::InvalidCharacter { .. } => {
            "Please enter a number consisting of only the digits 1-4"
        }
        InvalidOrderError::RepeatedDigit { .. } => "Please use each of the digits 1-4 exactly once",
    }
}
