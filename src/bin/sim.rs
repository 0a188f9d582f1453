use airstrike::{
    init_logging, AiPlayer, GamePhase, InMemoryTransport, MatchState, PeerSession, PlayerId,
};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn summary(state: &MatchState, phase: GamePhase) -> serde_json::Value {
    let seat = state.seat();
    json!({
        "phase": format!("{:?}", phase),
        "won": state.winner() == Some(seat),
        "attacks": state.radar(seat).len(),
        "kills": state.radar(seat).dead_count(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let (t1, t2) = InMemoryTransport::pair();

    let f1 = async move {
        let mut session = PeerSession::new(Box::new(t1), PlayerId::One);
        let phase = session.run(&mut AiPlayer::new(), &mut rng1).await?;
        Ok::<(MatchState, GamePhase), anyhow::Error>((session.into_state(), phase))
    };

    let f2 = async move {
        let mut session = PeerSession::new(Box::new(t2), PlayerId::Two);
        let phase = session.run(&mut AiPlayer::new(), &mut rng2).await?;
        Ok::<(MatchState, GamePhase), anyhow::Error>((session.into_state(), phase))
    };

    let ((s1, phase1), (s2, phase2)) = tokio::try_join!(f1, f2)?;

    let winner = match (s1.winner(), s2.winner()) {
        (Some(PlayerId::One), Some(PlayerId::One)) => Some("player1"),
        (Some(PlayerId::Two), Some(PlayerId::Two)) => Some("player2"),
        _ => None,
    };

    let result = json!({
        "player1": summary(&s1, phase1),
        "player2": summary(&s2, phase2),
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
