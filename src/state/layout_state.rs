//! Board layout state management.
//!
//! Layout is persisted between sessions as a single JSON setting.

use serde::{Deserialize, Serialize};

const MIN_TEXT_SCALE: f32 = 0.6;
const MAX_TEXT_SCALE: f32 = 2.5;
const TEXT_SCALE_STEP: f32 = 0.1;
const MIN_CARD_HEIGHT: f32 = 60.0;
const MAX_CARD_HEIGHT: f32 = 240.0;
const CARD_HEIGHT_STEP: f32 = 12.0;

/// State related to board sizing.
///
/// Responsibilities:
/// - Scaling board text for the display it runs on
/// - Sizing panel cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutState {
    /// Multiplier applied to every board font size
    text_scale: f32,
    /// Height of an ordinary panel card in points
    card_height: f32,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    pub fn new() -> Self {
        Self {
            text_scale: 1.0,
            card_height: 96.0,
        }
    }

    // ===== Layout Queries =====

    pub fn text_scale(&self) -> f32 {
        self.text_scale
    }

    pub fn card_height(&self) -> f32 {
        self.card_height * self.text_scale
    }

    /// Font size for board text, scaled.
    pub fn font_size(&self, base: f32) -> f32 {
        base * self.text_scale
    }

    // ===== Layout Mutations =====

    pub fn grow_text(&mut self) {
        self.set_text_scale(self.text_scale + TEXT_SCALE_STEP);
    }

    pub fn shrink_text(&mut self) {
        self.set_text_scale(self.text_scale - TEXT_SCALE_STEP);
    }

    pub fn grow_cards(&mut self) {
        self.set_card_height(self.card_height + CARD_HEIGHT_STEP);
    }

    pub fn shrink_cards(&mut self) {
        self.set_card_height(self.card_height - CARD_HEIGHT_STEP);
    }

    /// Sets the unscaled card height, clamped.
    pub fn set_card_height(&mut self, height: f32) {
        self.card_height = height.clamp(MIN_CARD_HEIGHT, MAX_CARD_HEIGHT);
    }

    /// Sets the text scale, clamped to a readable range.
    pub fn set_text_scale(&mut self, scale: f32) {
        self.text_scale = scale.clamp(MIN_TEXT_SCALE, MAX_TEXT_SCALE);
    }

    /// Clamps values loaded from storage.
    pub fn sanitized(mut self) -> Self {
        self.set_text_scale(self.text_scale);
        if self.card_height.is_finite() && self.card_height > 0.0 {
            self.set_card_height(self.card_height);
        } else {
            self.card_height = Self::new().card_height;
        }
        self
    }
}
