//! ANSI styling and text layout for the console.

use warrs::Colour;

const BLACK_ON_WHITE: &str = "30;47";

/// Applies (or skips) terminal colours.
#[derive(Debug, Clone, Copy)]
pub struct Style {
    pub enabled: bool,
}

impl Style {
    pub fn text(self, colour: Colour, text: &str) -> String {
        self.paint(text, text_code(colour))
    }

    pub fn highlight(self, colour: Colour, text: &str) -> String {
        self.paint(text, highlight_code(colour))
    }

    pub fn banner(self, text: &str) -> String {
        self.paint(text, BLACK_ON_WHITE)
    }

    fn paint(self, text: &str, code: &str) -> String {
        if self.enabled {
            colorize(text, code)
        } else {
            text.to_string()
        }
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

const fn text_code(colour: Colour) -> &'static str {
    match colour {
        Colour::Red => "31",
        Colour::Green => "32",
        Colour::Yellow => "33",
        Colour::Blue => "34",
        Colour::Purple => "35",
        Colour::Cyan => "36",
    }
}

const fn highlight_code(colour: Colour) -> &'static str {
    match colour {
        Colour::Red => "41",
        Colour::Green => "42",
        Colour::Yellow => "43",
        Colour::Blue => "44",
        Colour::Purple => "45",
        Colour::Cyan => "46",
    }
}

/// Frames `message` in a three-line border of circles.
///
/// Even-length messages get a trailing space so the circles line up.
pub fn circled(message: &str) -> [String; 3] {
    let mut message = message.to_string();
    if message.chars().count() % 2 == 0 {
        message.push(' ');
    }

    let mut border = String::from(" ○ ");
    for _ in (0..=message.chars().count()).step_by(2) {
        border.push_str("○ ");
    }
    border.push_str("○ ");

    let middle = format!(" ○ {message} ○ ");
    [border.clone(), middle, border]
}

/// The colour menu line.
pub fn colour_menu(style: Style) -> String {
    Colour::ALL
        .iter()
        .map(|colour| style.highlight(*colour, &format!("{}. {}", colour.digit(), colour.name())))
        .collect::<Vec<_>>()
        .join("   ")
}

/// The instruction pages shown before the first war.
pub fn instructions(war_points: u32) -> [String; 4] {
    [
        "War is a 2 player card game played with a standard 52-card deck. Both players (P1 and P2) \
         try to win all 52 cards by winning battles."
            .to_string(),
        "The deck is shuffled and split evenly, 26 cards each. In every battle both players draw the \
         top 4 cards of their deck, look at them, and choose the order to play them in. The cards are \
         labelled 1, 2, 3 and 4; an order is a 4-digit sequence using each of these digits exactly \
         once (e.g. 1234, 3412, 4123)."
            .to_string(),
        "The cards are then compared one-on-one in the chosen orders. In each of these 4 sub-battles \
         the stronger card wins, and its owner adds both cards to their discard pile.\n\n\
         The higher face wins: Ace > King > Queen > Jack > Ten > Nine > Eight > Seven > Six > Five > \
         Four > Three > Deuce. On equal faces the higher suit wins: Clubs > Diamonds > Hearts > Spades."
            .to_string(),
        format!(
            "Battles continue until someone runs out. A player who cannot draw 4 cards shuffles their \
             discard pile into their deck; a player with fewer than 4 cards in total LOSES.\n\n\
             The winner of a war earns {war_points} points, and then you may play again for a \
             rematch!"
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circled_pads_even_messages() {
        let [top, middle, bottom] = circled("WAR 1");
        assert_eq!(middle, " ○ WAR 1 ○ ");
        assert_eq!(top, " ○ ○ ○ ○ ○ ");
        assert_eq!(top, bottom);

        let [_, middle, _] = circled("WAR 10");
        assert_eq!(middle, " ○ WAR 10  ○ ");
    }

    #[test]
    fn plain_style_leaves_text_alone() {
        let style = Style { enabled: false };
        assert_eq!(style.highlight(Colour::Cyan, "P2"), "P2");
        assert!(colour_menu(style).starts_with("1. Red   2. Green"));
    }

    #[test]
    fn last_instruction_page_shows_war_points() {
        let pages = instructions(250);
        assert!(pages[3].contains("earns 250 points"));
        assert!(pages.iter().all(|page| !page.contains('{')));
    }

    #[test]
    fn coloured_text_resets() {
        let style = Style { enabled: true };
        assert_eq!(style.text(Colour::Red, "hi"), "\u{1b}[31mhi\u{1b}[0m");
    }
}
