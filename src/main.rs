#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use airstrike::{
    init_logging, AiPlayer, CliPlayer, GamePhase, LocalMatch, PeerSession, Player, PlayerId,
    Settings, TcpTransport, Transport,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tokio::net::TcpListener;
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, global = true, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum PlayerType {
    Human,
    Ai,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Two players take turns on this terminal.
    Local,
    /// Play against the computer.
    Ai {
        #[arg(long, default_value_t = airstrike::DEFAULT_AI_DELAY_MS, help = "Pause before the computer fires")]
        delay_ms: u64,
    },
    /// Create a room and wait for an opponent. The host plays as player 1.
    Host {
        #[arg(long, default_value = "0.0.0.0:8080")]
        bind: String,
        #[arg(long, value_enum, default_value_t = PlayerType::Human)]
        player: PlayerType,
    },
    /// Join a room created with `host`. The guest plays as player 2.
    Join {
        #[arg(long, default_value = "127.0.0.1:8080")]
        connect: String,
        #[arg(long, value_enum, default_value_t = PlayerType::Human)]
        player: PlayerType,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn make_player(kind: PlayerType, seat: PlayerId) -> Box<dyn Player> {
    match kind {
        PlayerType::Human => Box::new(CliPlayer::new(format!("Player {}", seat.number()))),
        PlayerType::Ai => {
            println!("AI player selected.");
            Box::new(AiPlayer::new())
        }
    }
}

#[cfg(feature = "std")]
fn announce_winner(winner: PlayerId) {
    println!("\n=== GAME OVER ===");
    println!("Player {} wins!", winner.number());
}

#[cfg(feature = "std")]
async fn play_online(
    mut session: PeerSession,
    kind: PlayerType,
    rng: &mut SmallRng,
) -> anyhow::Result<()> {
    let seat = session.seat();
    let mut player = make_player(kind, seat);
    match session.run(player.as_mut(), rng).await? {
        GamePhase::Disconnected => println!("\nYour opponent disconnected. Match abandoned."),
        _ => {
            if let Some(winner) = session.state().winner() {
                announce_winner(winner);
                if winner == seat {
                    println!("Every enemy aircraft is down. Victory!");
                } else {
                    println!("Your fleet has been wiped out.");
                }
            }
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let mut rng = make_rng(cli.seed);

    match cli.command {
        Commands::Local => {
            let mut p1 = CliPlayer::new("Player 1");
            let mut p2 = CliPlayer::new("Player 2");
            let mut game = LocalMatch::pass_and_play(Settings::default());
            let winner = game.run(&mut p1, &mut p2, &mut rng).await?;
            announce_winner(winner);
        }
        Commands::Ai { delay_ms } => {
            let settings = Settings::default().with_ai_delay(Duration::from_millis(delay_ms));
            let mut ai = AiPlayer::new();
            let ai_fleet = ai.place_fleet(&mut rng)?;
            let mut human = CliPlayer::new("Player 1");
            let mut game = LocalMatch::vs_ai(ai_fleet, settings);
            let winner = game.run(&mut human, &mut ai, &mut rng).await?;
            announce_winner(winner);
            if winner == PlayerId::Two {
                println!("The computer shot down your whole fleet.");
            }
        }
        Commands::Host { bind, player } => {
            println!("Creating room at {}...", bind);
            let opened = PeerSession::establish(PlayerId::One, async {
                let listener = TcpListener::bind(&bind).await?;
                println!("Waiting for a player to join...");
                let (stream, addr) = listener.accept().await?;
                println!("Player joined from {}", addr);
                Ok::<_, anyhow::Error>(Box::new(TcpTransport::new(stream)) as Box<dyn Transport>)
            })
            .await;
            match opened {
                Ok(session) => {
                    if let Err(e) = play_online(session, player, &mut rng).await {
                        eprintln!("Game ended with an error: {}", e);
                    }
                }
                Err(e) => eprintln!("Connection error: {}", e),
            }
        }
        Commands::Join { connect, player } => {
            println!("Joining room at {}...", connect);
            let opened = PeerSession::establish(PlayerId::Two, async {
                let tcp = TcpTransport::connect(&connect).await?;
                println!("Connected successfully!");
                Ok::<_, anyhow::Error>(Box::new(tcp) as Box<dyn Transport>)
            })
            .await;
            match opened {
                Ok(session) => {
                    if let Err(e) = play_online(session, player, &mut rng).await {
                        eprintln!("Game ended with an error: {}", e);
                    }
                }
                Err(e) => eprintln!("Connection error: {}", e),
            }
        }
    }
    Ok(())
}
