//! Capability flag gating the catalog's edit actions.
//!
//! The store has no notion of permission. Whoever hosts the presentation
//! layer decides whether the current session may add or delete models and
//! passes that decision in; this crate only checks it at the FFI boundary.

use crate::app_response::AppResponse;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditAccess {
    #[default]
    Viewer,
    Admin,
}

impl EditAccess {
    pub fn permits_edit(self) -> bool {
        matches!(self, EditAccess::Admin)
    }

    /// Fails with [`AppResponse::Forbidden`] unless edits are allowed.
    pub fn require_edit(self, action: &str) -> Result<(), AppResponse> {
        if self.permits_edit() {
            Ok(())
        } else {
            Err(AppResponse::Forbidden(format!(
                "{action} requires edit access"
            )))
        }
    }
}

impl From<bool> for EditAccess {
    fn from(can_edit: bool) -> Self {
        if can_edit {
            EditAccess::Admin
        } else {
            EditAccess::Viewer
        }
    }
}
