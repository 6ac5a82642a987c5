use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::time::Duration;

use clap::{Parser, Subcommand};
use client::session::{CanvasSession, ClientError, Command as SessionCommand, ws_url};
use client::surface::{NullSurface, StatsSurface};
use client::trace::{TraceEvent, parse_trace_line};
use tokio::sync::mpsc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "canvas-client", about = "Shared-canvas websocket client")]
struct Cli {
    #[arg(long, env = "CANVAS_BASE_URL", default_value = "http://127.0.0.1:8080")]
    base_url: String,

    /// Canvas session to join (4-20 ASCII alphanumeric characters).
    #[arg(long)]
    session: String,

    /// Participant id stamped on outbound frames; random when omitted.
    #[arg(long)]
    participant: Option<u16>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSONL pointer trace into the session.
    Draw {
        #[arg(long, default_value = "-", help = "Trace file path, or - for stdin")]
        input: String,

        /// Pacing between events whose trace line carries no delay.
        #[arg(long, default_value_t = 15)]
        rate_ms: u64,
    },
    /// Join and render incoming points headlessly, reporting draw stats.
    Watch {
        /// How long to stay in the session before leaving.
        #[arg(long, default_value_t = 30)]
        duration_secs: u64,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ClientError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let participant = cli.participant.unwrap_or_else(rand::random);
    let url = ws_url(&cli.base_url, &cli.session)?;

    match cli.command {
        Command::Draw { input, rate_ms } => run_draw(&url, participant, &input, rate_ms).await,
        Command::Watch { duration_secs } => run_watch(&url, participant, duration_secs).await,
    }
}

async fn run_draw(
    url: &str,
    participant: u16,
    input: &str,
    rate_ms: u64,
) -> Result<(), ClientError> {
    let events = read_trace(input)?;
    info!(count = events.len(), "trace loaded");

    let session = CanvasSession::new(participant, 1000.0, 800.0, NullSurface);
    let (tx, rx) = mpsc::channel(64);

    let feeder = async move {
        let mut replayed = 0_usize;
        for event in events {
            let delay = event.delay();
            let delay = if delay.is_zero() { Duration::from_millis(rate_ms) } else { delay };
            tokio::time::sleep(delay).await;
            if tx.send(event.command()).await.is_err() {
                break;
            }
            replayed += 1;
        }
        let _ = tx.send(SessionCommand::Shutdown).await;
        replayed
    };

    let (session, replayed) = tokio::join!(session.run(url, rx), feeder);
    let session = session?;

    let store = session.engine().store();
    eprintln!(
        "draw complete: replayed={} participants_seen={} points_received={}",
        replayed,
        store.participant_count(),
        store.received()
    );
    Ok(())
}

async fn run_watch(url: &str, participant: u16, duration_secs: u64) -> Result<(), ClientError> {
    let session = CanvasSession::new(participant, 1000.0, 800.0, StatsSurface::new());
    let (tx, rx) = mpsc::channel(1);

    let feeder = async move {
        tokio::time::sleep(Duration::from_secs(duration_secs)).await;
        let _ = tx.send(SessionCommand::Shutdown).await;
    };

    let (session, ()) = tokio::join!(session.run(url, rx), feeder);
    let session = session?;

    let store = session.engine().store();
    eprintln!(
        "watch complete: participants_seen={} points_received={} {}",
        store.participant_count(),
        store.received(),
        session.surface().summary()
    );
    Ok(())
}

fn read_trace(input: &str) -> Result<Vec<TraceEvent>, ClientError> {
    let mut reader: Box<dyn BufRead> = if input == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        Box::new(BufReader::new(File::open(input)?))
    };

    let mut events = Vec::new();
    let mut line = String::new();
    let mut line_number = 0_usize;
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        line_number += 1;

        let parsed = parse_trace_line(&line)
            .map_err(|source| ClientError::InvalidTrace { line: line_number, source })?;
        if let Some(event) = parsed {
            events.push(event);
        }
    }

    Ok(events)
}
