//! Blocking confirm/alert prompts.
//!
//! Destructive operations ask before acting; the trait seam keeps the
//! controller testable with scripted answers instead of a real dialog.

pub trait Prompter {
    /// Ask the user to confirm; returns false when they decline.
    fn confirm(&self, message: &str) -> bool;

    /// Show a notification the user must dismiss.
    fn alert(&self, message: &str);
}

/// Native modal dialogs. `show` blocks the calling thread until dismissed.
pub struct BlockingPrompter;

#[cfg(not(target_arch = "wasm32"))]
impl Prompter for BlockingPrompter {
    fn confirm(&self, message: &str) -> bool {
        let choice = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title("Atrium")
            .set_description(message)
            .set_buttons(rfd::MessageButtons::OkCancel)
            .show();
        matches!(
            choice,
            rfd::MessageDialogResult::Ok | rfd::MessageDialogResult::Yes
        )
    }

    fn alert(&self, message: &str) {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Info)
            .set_title("Atrium")
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}

// Browsers only expose async dialogs to wasm. Without a real dialog a
// confirm counts as declined, so destructive operations stay no-ops.
#[cfg(target_arch = "wasm32")]
impl Prompter for BlockingPrompter {
    fn confirm(&self, message: &str) -> bool {
        tracing::warn!(message, "no blocking dialog on wasm; confirm declined");
        false
    }

    fn alert(&self, message: &str) {
        tracing::info!(message, "alert");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;

    #[test]
    fn confirm_declines_without_a_real_dialog() {
        assert!(!BlockingPrompter.confirm("Clear the current chat?"));
    }
}
