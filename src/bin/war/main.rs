//! Interactive War for two players sharing one terminal.

mod console;
mod render;

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use log::{debug, info};
use warrs::{
    BattleReport, Draw, DrawnHands, FinalStandings, Game, GameOptions, PlayerProfile, PlayerSide,
    WarOutcome,
};

use crate::console::Console;
use crate::render::{Style, circled, instructions};

#[derive(Parser)]
#[command(name = "war")]
#[command(about = "The War card game for two players at one terminal")]
struct Args {
    /// Seed for the shuffles (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Points awarded for winning a war
    #[arg(long, default_value_t = warrs::DEFAULT_WAR_POINTS)]
    war_points: u32,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Do not wait for ENTER between screens
    #[arg(long)]
    no_pause: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn core::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    info!("starting session with seed {seed}");

    let options = GameOptions::default().with_war_points(args.war_points);
    let style = Style {
        enabled: !args.no_color,
    };
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock(), style, !args.no_pause);

    match play(&mut console, options, seed) {
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
            debug!("input closed, leaving");
            Ok(())
        }
        other => Ok(other?),
    }
}

fn play<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    options: GameOptions,
    seed: u64,
) -> io::Result<()> {
    let players = welcome(console, options.war_points)?;
    let mut game = Game::new(options, seed, players).map_err(io::Error::other)?;

    let (p1, p2) = (game.player(PlayerSide::One), game.player(PlayerSide::Two));
    let names = console.style.banner("Great! And now... it's time to play War!");
    let ready = format!(
        "\n{} and {}, ARE YOU READY?",
        console.style.highlight(p1.colour(), p1.name()),
        console.style.highlight(p2.colour(), p2.name()),
    );
    console.say(&names)?;
    console.say(&ready)?;
    console.pause("PLAY")?;

    loop {
        let war = game.start_new_war().map_err(io::Error::other)?;
        for line in circled(&format!("WAR {war}")) {
            console.say(&console.style.banner(&line))?;
        }
        console.say("")?;

        let outcome = play_war(console, &mut game)?;
        show_winner(console, &game, &outcome)?;

        console.say("")?;
        let again = console.ask_replay()?;
        console.say("")?;
        if !again {
            break;
        }
    }

    let standings = game.end_session().map_err(io::Error::other)?;
    show_standings(console, &game, &standings)
}

fn welcome<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    war_points: u32,
) -> io::Result<[PlayerProfile; 2]> {
    for line in circled("Welcome to the War Game !") {
        console.say(&console.style.banner(&line))?;
    }

    let pages = instructions(war_points);
    let actions = ["READ THE GAME INSTRUCTIONS", "CONTINUE", "CONTINUE", "CONTINUE"];
    for (page, action) in pages.iter().zip(actions) {
        console.pause(action)?;
        console.say(page)?;
    }
    console.pause("BEGIN")?;

    let mut profiles = Vec::with_capacity(2);
    let mut taken = None;
    for side in PlayerSide::BOTH {
        let name = console.ask_name(side)?;
        console.say(&format!("\nNice to meet you, {name}! :)"))?;
        let colour = console.ask_colour(taken)?;
        taken = Some(colour);
        profiles.push(PlayerProfile::new(name, colour));
    }

    profiles
        .try_into()
        .map_err(|_| io::Error::other("expected two player profiles"))
}

fn play_war<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &mut Game,
) -> io::Result<WarOutcome> {
    loop {
        let drawn = match game.draw_hands().map_err(io::Error::other)? {
            Draw::Hands(drawn) => drawn,
            Draw::WarOver(outcome) => return Ok(outcome),
        };
        show_draw(console, game, &drawn)?;

        let mut orders = [warrs::Order::IDENTITY; 2];
        for side in PlayerSide::BOTH {
            let colour = game.player(side).colour();
            orders[side.index()] = console.ask_order(side, colour, drawn.hand(side))?;
        }

        let report = game
            .submit_orders(orders[0], orders[1])
            .map_err(io::Error::other)?;
        show_report(console, game, &report)?;

        if let Some(outcome) = report.war_over {
            return Ok(outcome);
        }
        console.pause("BEGIN THE NEXT BATTLE")?;
    }
}

fn show_draw<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &Game,
    drawn: &DrawnHands,
) -> io::Result<()> {
    let style = console.style;
    console.say(&style.banner(&format!(" * * * BATTLE {} * * * ", drawn.battle)))?;

    for side in PlayerSide::BOTH {
        if drawn.replenished[side.index()] {
            let colour = game.player(side).colour();
            console.say(&style.highlight(colour, &format!("{side} - Shuffling discard pile...")))?;
        }
    }

    console.say("\n~ CURRENT CARD COUNT ~")?;
    for side in PlayerSide::BOTH {
        let colour = game.player(side).colour();
        let counts = drawn.counts[side.index()];
        console.say(&style.text(colour, &format!("{side} deck: {} cards", counts.deck)))?;
        console.say(&style.text(colour, &format!("{side} discard: {} cards", counts.discard)))?;
    }
    console.say("")
}

fn show_report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &Game,
    report: &BattleReport,
) -> io::Result<()> {
    let style = console.style;
    console.say(&format!("~ BATTLE {} RESULTS ~", report.battle))?;
    for outcome in &report.outcomes {
        let colour = game.player(outcome.winner).colour();
        let line = format!(
            "Sub-battle {}: {} wins with {}",
            outcome.index + 1,
            outcome.winner,
            outcome.winning_card
        );
        console.say(&style.text(colour, &line))?;
    }
    Ok(())
}

fn show_winner<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &Game,
    outcome: &WarOutcome,
) -> io::Result<()> {
    let style = console.style;
    let winner = game.player(outcome.winner);

    console.say("")?;
    console.say(&style.banner(" * * * WE HAVE A WINNER! * * * "))?;
    console.say("")?;
    let message = format!(
        "{} wins WAR {}! Congratulations!",
        winner.name(),
        outcome.war
    );
    console.say(&style.highlight(winner.colour(), &message))?;

    console.pause("SEE UPDATED SCORES")?;
    for side in PlayerSide::BOTH {
        let colour = game.player(side).colour();
        let score = outcome.scores[side.index()];
        console.say(&style.text(colour, &format!("{side}: {score}")))?;
    }
    Ok(())
}

fn show_standings<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &Game,
    standings: &FinalStandings,
) -> io::Result<()> {
    let style = console.style;
    console.say(&style.banner(" * * * FINAL RESULTS * * * "))?;
    console.say("")?;

    match standings.winner {
        Some(side) => {
            let player = game.player(side);
            let message = format!("{} IS THE OVERALL WINNER!", player.name());
            console.say(&style.highlight(player.colour(), &message))?;
        }
        None => {
            let (p1, p2) = (game.player(PlayerSide::One), game.player(PlayerSide::Two));
            let message = format!(
                "{}{}{}{}{}",
                style.banner("IT'S A TIE! "),
                style.highlight(p1.colour(), p1.name()),
                style.banner(" and "),
                style.highlight(p2.colour(), p2.name()),
                style.banner(", well done to both of you!"),
            );
            console.say(&message)?;
        }
    }

    console.say("\nHope you enjoyed playing the War Game!\n")?;
    for line in circled("Goodbye! :)") {
        console.say(&style.banner(&line))?;
    }
    Ok(())
}
