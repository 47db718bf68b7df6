//! Background reading of import files.
//!
//! The import file is read on a worker thread so a slow disk or network share
//! never stalls the board. The UI thread polls for the text once per frame
//! and applies it itself, so the store is only ever touched from one thread.

use crate::io::LoadingState;
use anyhow::{Context, Result};
use eframe::egui;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;

/// Result of a completed import read.
pub enum LoadResult {
    /// The file was read
    Success {
        /// Raw document text, not yet parsed
        text: String,
        /// Path of the file that was read
        path: PathBuf,
    },
    /// Reading failed
    Error(String),
    /// No read in progress, or not finished yet
    None,
}

/// Manages background reads of import files.
pub struct AsyncLoader {
    /// Shared loading state flag
    loading_state: Arc<Mutex<LoadingState>>,

    /// Channel receiver for read results
    loading_receiver: Option<Receiver<Result<String, String>>>,

    /// Path of the file currently being read
    pending_load_path: Option<PathBuf>,
}

impl AsyncLoader {
    /// Creates a new loader with no active read.
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            loading_receiver: None,
            pending_load_path: None,
        }
    }

    /// Checks if a read is currently in progress.
    pub fn is_loading(&self) -> bool {
        self.loading_state
            .lock()
            .map(|state| state.in_progress)
            .unwrap_or(false)
    }

    /// Starts reading `path` on a background thread.
    ///
    /// Call `check_completion()` once per frame to pick up the result.
    ///
    /// # Arguments
    /// * `path` - File chosen by the user
    /// * `ctx` - egui context, repainted when the read finishes
    pub fn start_file_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);

        if let Ok(mut state) = self.loading_state.lock() {
            state.in_progress = true;
        }

        self.pending_load_path = Some(path.clone());

        let loading_state = Arc::clone(&self.loading_state);
        let ctx_handle = ctx.clone();

        thread::spawn(move || {
            let result = read_import_file(&path).map_err(|e| format!("{:#}", e));

            // The receiver is gone if a newer read replaced this one
            let _ = sender.send(result);

            if let Ok(mut state) = loading_state.lock() {
                state.in_progress = false;
            }

            ctx_handle.request_repaint();
        });
    }

    /// Returns the result of the last read if it has finished.
    ///
    /// # Returns
    /// * `LoadResult::Success` - File text is available
    /// * `LoadResult::Error` - The file could not be read
    /// * `LoadResult::None` - Still reading, or nothing was requested
    pub fn check_completion(&mut self) -> LoadResult {
        if let Some(receiver) = &self.loading_receiver {
            if let Ok(result) = receiver.try_recv() {
                let load_result = match (result, self.pending_load_path.take()) {
                    (Ok(text), Some(path)) => LoadResult::Success { text, path },
                    (Ok(_), None) => LoadResult::Error("import finished without a file".to_string()),
                    (Err(error_msg), _) => LoadResult::Error(error_msg),
                };

                self.loading_receiver = None;

                return load_result;
            }
        }

        LoadResult::None
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads an import file as UTF-8 text.
pub fn read_import_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
