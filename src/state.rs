use std::sync::Arc;
use tokio::sync::mpsc;
use crate::history::HistoryStore;
use crate::models::GenerationJob;
use crate::status::StatusProbe;
// app's shared state

pub struct AppState {
    pub generate_tx: mpsc::Sender<GenerationJob>, // queue into the generation worker
    pub status_probe: StatusProbe,
    pub history: Arc<dyn HistoryStore>,
}
