//! Create / edit mode handling

use super::field::FieldState;

/// Whether the form creates a new record or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit,
}

impl FormMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Edit => "Edit",
        }
    }

    /// The identifier can only be typed in while creating
    pub fn identifier_editable(&self) -> bool {
        matches!(self, Self::Create)
    }
}

/// Tracks the form mode and locks the identifier field accordingly
#[derive(Debug, Clone, Copy, Default)]
pub struct ModeController {
    mode: FormMode,
}

impl ModeController {
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Derive the mode from whether the host supplied a record
    pub fn on_record(&mut self, has_record: bool) -> FormMode {
        self.mode = if has_record {
            FormMode::Edit
        } else {
            FormMode::Create
        };
        self.mode
    }

    /// Enable or disable the identifier field for the current mode
    pub fn apply(&self, identifier: &mut FieldState) {
        identifier.set_enabled(self.mode.identifier_editable());
    }
}
