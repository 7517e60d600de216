use atelier::kernel::state::ConversationState;
use atelier::{Action, Entity, PolicyConfig, Reactor};
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// One classified utterance per stdin line.
#[derive(Deserialize)]
struct InputLine {
    text: String,
    intent: Vec<f32>,
    #[serde(default)]
    entities: Vec<Entity>,
}

#[derive(Serialize)]
struct OutputLine<'a> {
    actions: &'a [Action],
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays one JSON object per turn.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = PolicyConfig::from_env();
    let mut reactor = Reactor::from_config(&config);
    let mut state = ConversationState::new();
    tracing::info!(conversation = %state.id.0, "Conversation started");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let input: InputLine = match serde_json::from_str(&line) {
            Ok(input) => input,
            Err(e) => {
                tracing::warn!("Skipping malformed input line: {}", e);
                continue;
            }
        };

        let actions = match reactor
            .answer(&mut state, &input.text, &input.intent, &input.entities)
            .await
        {
            Ok(actions) => actions,
            Err(e) => {
                tracing::error!("Turn failed: {}", e);
                continue;
            }
        };

        let mut out = serde_json::to_vec(&OutputLine { actions: &actions })?;
        out.push(b'\n');
        stdout.write_all(&out).await?;
        stdout.flush().await?;
    }

    let snapshot = reactor.telemetry.snapshot();
    tracing::info!(
        turns = snapshot.turn_stats.turns,
        recommendations = snapshot.recommendation_stats.direct + snapshot.recommendation_stats.pivots,
        clarifications = snapshot.recommendation_stats.clarifications,
        "Conversation ended"
    );
    Ok(())
}
