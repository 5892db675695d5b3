use clap::Parser;
use colored::Colorize;
use dialoguer::Select;
use rochambeau::Points;
use rochambeau::Seconds;
use rochambeau::config::Config;
use rochambeau::gameplay::*;
use rochambeau::gameroom::*;
use rochambeau::perception::*;
use rochambeau::players::RandomBot;
use std::path::PathBuf;
use tokio::io::AsyncBufReadExt;

#[derive(Parser, Debug)]
#[command(author, version, about = "Rock-paper-scissors against the computer, played by hand gesture")]
struct Args {
    /// Round wins needed to take the match
    #[arg(long)]
    points: Option<Points>,
    /// Countdown length in seconds
    #[arg(long)]
    countdown: Option<Seconds>,
    /// Which gesture a round keeps: latest or first
    #[arg(long)]
    commit: Option<String>,
    /// Seed for the bot and the simulated camera
    #[arg(long)]
    seed: Option<u64>,
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Feed gestures from a simulated camera instead of stdin
    #[arg(long)]
    simulate: bool,
    /// Print updates as JSON lines and skip the menu
    #[arg(long)]
    json: bool,
}

impl Args {
    fn config(&self) -> anyhow::Result<Config> {
        let mut config = match self.config {
            Some(ref path) => Config::load(path)?,
            None => Config::default(),
        }
        .from_env()?;
        if let Some(points) = self.points {
            config.rules.points_to_win = points;
        }
        if let Some(countdown) = self.countdown {
            config.rules.countdown = countdown;
        }
        if let Some(ref commit) = self.commit {
            config.rules.commit = Commit::try_from(commit.as_str()).map_err(anyhow::Error::msg)?;
        }
        config.validate()?;
        Ok(config)
    }
}

enum Choice {
    Cpu,
    Multiplayer,
    Quit,
}

fn menu() -> anyhow::Result<Choice> {
    let items = ["Play CPU", "Play Multiplayer", "Quit"];
    let selection = Select::new()
        .with_prompt("ROCK PAPER SCISSORS")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(match selection {
        0 => Choice::Cpu,
        1 => Choice::Multiplayer,
        _ => Choice::Quit,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    rochambeau::log();
    rochambeau::kys();
    let args = Args::parse();
    let config = args.config()?;
    if args.json {
        return play(&args, &config).await;
    }
    loop {
        match menu()? {
            Choice::Cpu => play(&args, &config).await?,
            Choice::Multiplayer => println!("{}", "Available soon".yellow()),
            Choice::Quit => break,
        }
    }
    Ok(())
}

/// Runs one room until the player leaves, or until the match ends when the
/// camera is simulated.
async fn play(args: &Args, config: &Config) -> anyhow::Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let bot = match args.seed {
        Some(seed) => RandomBot::seeded(seed),
        None => RandomBot::default(),
    };
    let handle = Room::spawn(config, Box::new(bot))?;
    let mut updates = handle.subscribe().await?;
    match args.simulate {
        true => {
            Pipeline::spawn(Box::new(Simulated::new(seed, &config.gestures)), handle.clone());
        }
        false => {
            if !args.json {
                println!("{}", HELP.dimmed());
            }
            tokio::spawn(typed(handle.clone(), config.gestures.clone()));
        }
    }
    handle.reset().await?;
    while let Some(update) = updates.recv().await {
        render(&update, args.json);
        match update.snapshot().map(Snapshot::phase) {
            Some(Phase::MatchOver) if args.simulate => handle.shutdown().await?,
            Some(Phase::MatchOver) if !args.json => println!("{}", HELP.dimmed()),
            _ => {}
        }
    }
    Ok(())
}

const HELP: &str = "type a gesture label (Closed_Fist, Open_Palm, Victory) or rock/paper/scissors; reset restarts, quit leaves";

/// Reads stdin lines as recognizer output until the player quits.
async fn typed(handle: Handle, gestures: Gestures) {
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) | Err(_) => break,
        };
        let result = match line.trim() {
            "" => Ok(()),
            "reset" => handle.reset().await,
            "quit" | "menu" => break,
            text => handle.observe(Some(label(text, &gestures).as_str())),
        };
        if let Err(e) = result {
            log::warn!("[stdin] {}", e);
            if e == RoomError::Closed {
                return;
            }
        }
    }
    let _ = handle.quit().await;
    let _ = handle.shutdown().await;
}

/// Move names stand in for the first label configured for that move.
fn label(text: &str, gestures: &Gestures) -> String {
    let first = |labels: &[String]| labels.first().cloned();
    match Move::try_from(text) {
        Ok(Move::Rock) => first(&gestures.rock),
        Ok(Move::Paper) => first(&gestures.paper),
        Ok(Move::Scissors) => first(&gestures.scissors),
        Ok(Move::None) | Err(_) => None,
    }
    .unwrap_or_else(|| text.to_string())
}

fn render(update: &Update, json: bool) {
    if json {
        println!("{}", update.to_json());
        return;
    }
    match update {
        Update::Notice { message } => println!("{}", message.yellow()),
        Update::Snapshot(snapshot) => {
            let line = snapshot.to_string();
            match snapshot.phase() {
                Phase::Idle => println!("{}", line.dimmed()),
                Phase::Countdown(_) | Phase::Resolving => println!("{}", line),
                Phase::Resolved => println!("{}", line.cyan()),
                Phase::MatchOver => match snapshot.score().winner() {
                    Some(Side::Player) => println!("{}", line.green().bold()),
                    Some(Side::Bot) => println!("{}", line.red().bold()),
                    None => println!("{}", line),
                },
            }
        }
    }
}
