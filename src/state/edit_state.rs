//! Edit mode and confirmation state.

use menuboard::PanelId;

/// State of operator editing.
///
/// Responsibilities:
/// - Tracking whether inline editing is enabled
/// - Holding the panel awaiting delete confirmation
/// - Remembering the requested fullscreen mode
#[derive(Debug, Clone, Default)]
pub struct EditState {
    /// Inline editing and panel controls are shown
    edit_mode: bool,
    /// Panel the operator asked to delete, awaiting confirmation
    pending_delete: Option<PanelId>,
    /// Fullscreen mode last requested from the viewport
    fullscreen: bool,
}

impl EditState {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    pub fn is_editing(&self) -> bool {
        self.edit_mode
    }

    pub fn pending_delete(&self) -> Option<PanelId> {
        self.pending_delete
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    // ===== Mutations =====

    /// Flips edit mode and returns the new value.
    ///
    /// Leaving edit mode drops any pending delete.
    pub fn toggle_edit_mode(&mut self) -> bool {
        self.edit_mode = !self.edit_mode;
        if !self.edit_mode {
            self.pending_delete = None;
        }
        self.edit_mode
    }

    /// Asks for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: PanelId) {
        self.pending_delete = Some(id);
    }

    /// Takes the pending delete, if any, clearing it.
    pub fn take_pending_delete(&mut self) -> Option<PanelId> {
        self.pending_delete.take()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Flips the fullscreen flag and returns the new value.
    pub fn toggle_fullscreen(&mut self) -> bool {
        self.fullscreen = !self.fullscreen;
        self.fullscreen
    }

    /// Syncs the flag with what the window actually reports.
    pub fn sync_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }
}
