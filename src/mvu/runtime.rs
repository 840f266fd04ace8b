use serde_json::json;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

use super::round::{Msg, RoundState};
use super::store::{HoleOutcome, RoundStore};
use crate::controller::scorecard::GrossEntry;
use crate::error::RoundError;
use crate::model::{BbbFeats, Game, Player};

const COMMAND_BUFFER: usize = 64;

enum Command {
    Dispatch {
        msg: Msg,
        reply: oneshot::Sender<RoundState>,
    },
    SetupNewRound {
        course_id: String,
        players: Vec<Player>,
        games: Vec<Game>,
        reply: oneshot::Sender<RoundState>,
    },
    NavigateToHole {
        hole: u32,
        reply: oneshot::Sender<RoundState>,
    },
    SubmitHole {
        entries: Vec<GrossEntry>,
        feats: Option<BbbFeats>,
        reply: oneshot::Sender<Result<HoleOutcome, RoundError>>,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Dispatch { msg, .. } => msg.name(),
            Command::SetupNewRound { .. } => "SetupNewRound",
            Command::NavigateToHole { .. } => "NavigateToHole",
            Command::SubmitHole { .. } => "SubmitHole",
        }
    }
}

/// Cloneable handle to a running round loop. Commands are applied one at a time
/// by the loop task; readers watch the published snapshots.
#[derive(Debug, Clone)]
pub struct RoundHandle {
    commands: mpsc::Sender<Command>,
    snapshots: watch::Receiver<RoundState>,
}

fn loop_stopped() -> RoundError {
    RoundError::Other("round loop stopped".into())
}

/// Moves `store` into a task that owns it until every handle is dropped, then
/// returns it from the join handle.
#[must_use]
pub fn spawn_round_loop(store: RoundStore) -> (RoundHandle, JoinHandle<RoundStore>) {
    let (commands, rx) = mpsc::channel(COMMAND_BUFFER);
    let (publish, snapshots) = watch::channel(store.get_state().clone());
    let task = tokio::spawn(run_round_loop(store, rx, publish));
    (
        RoundHandle {
            commands,
            snapshots,
        },
        task,
    )
}

async fn run_round_loop(
    mut store: RoundStore,
    mut rx: mpsc::Receiver<Command>,
    publish: watch::Sender<RoundState>,
) -> RoundStore {
    while let Some(command) = rx.recv().await {
        if store.logs_messages() {
            eprintln!("{}", json!({"mvu":"command","command": command.name()}));
        }
        // snapshots are published before replying so a caller never reads a stale one
        match command {
            Command::Dispatch { msg, reply } => {
                store.dispatch(msg);
                publish.send_replace(store.get_state().clone());
                let _ = reply.send(store.get_state().clone());
            }
            Command::SetupNewRound {
                course_id,
                players,
                games,
                reply,
            } => {
                store.setup_new_round(course_id, players, games);
                publish.send_replace(store.get_state().clone());
                let _ = reply.send(store.get_state().clone());
            }
            Command::NavigateToHole { hole, reply } => {
                store.navigate_to_hole(hole);
                publish.send_replace(store.get_state().clone());
                let _ = reply.send(store.get_state().clone());
            }
            Command::SubmitHole {
                entries,
                feats,
                reply,
            } => {
                let outcome = store.submit_hole(&entries, feats.as_ref());
                match &outcome {
                    Err(e) => {
                        store.set_error(e.to_string());
                    }
                    Ok(_) if store.get_state().error.is_some() => {
                        store.clear_error();
                    }
                    Ok(_) => {}
                }
                publish.send_replace(store.get_state().clone());
                let _ = reply.send(outcome);
            }
        }
    }
    store
}

impl RoundHandle {
    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> Result<T, RoundError> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(build(reply))
            .await
            .map_err(|_| loop_stopped())?;
        response.await.map_err(|_| loop_stopped())
    }

    /// # Errors
    /// Returns an error if the round loop has stopped.
    pub async fn dispatch(&self, msg: Msg) -> Result<RoundState, RoundError> {
        self.request(|reply| Command::Dispatch { msg, reply }).await
    }

    /// # Errors
    /// Returns an error if the round loop has stopped.
    pub async fn setup_new_round(
        &self,
        course_id: impl Into<String>,
        players: Vec<Player>,
        games: Vec<Game>,
    ) -> Result<RoundState, RoundError> {
        let course_id = course_id.into();
        self.request(|reply| Command::SetupNewRound {
            course_id,
            players,
            games,
            reply,
        })
        .await
    }

    /// # Errors
    /// Returns an error if the round loop has stopped.
    pub async fn navigate_to_hole(&self, hole: u32) -> Result<RoundState, RoundError> {
        self.request(|reply| Command::NavigateToHole { hole, reply })
            .await
    }

    /// # Errors
    /// Returns an error if the round loop has stopped or the hole could not be
    /// scored.
    pub async fn submit_hole(
        &self,
        entries: Vec<GrossEntry>,
        feats: Option<BbbFeats>,
    ) -> Result<HoleOutcome, RoundError> {
        self.request(|reply| Command::SubmitHole {
            entries,
            feats,
            reply,
        })
        .await?
    }

    /// Latest published state.
    #[must_use]
    pub fn get_state(&self) -> RoundState {
        self.snapshots.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<RoundState> {
        self.snapshots.clone()
    }
}
