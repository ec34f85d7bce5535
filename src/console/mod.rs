//! Terminal collaborators around the store: toast notifications, the
//! confirm-then-act gate for destructive operations, table and pager
//! rendering, the login captcha.

pub mod captcha;
pub mod login;
pub mod table;

use owo_colors::OwoColorize;
use tracing::warn;

use crate::store::StoreError;

/// Toast category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Success,
    Error,
}

/// Fire-and-forget toast line.
pub fn notify(kind: NotifyKind, message: &str) {
    match kind {
        NotifyKind::Success => println!("{} {message}", "✓".green().bold()),
        NotifyKind::Error => println!("{} {message}", "✗".red().bold()),
    }
}

/// Confirmation primitive gating destructive actions. The action runs
/// only after an explicit yes; everything else is a cancellation.
pub trait Confirmer {
    fn confirm(&self, title: &str, message: &str) -> bool;
}

/// Interactive terminal confirmation.
#[derive(Debug, Default)]
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, title: &str, message: &str) -> bool {
        let prompt = format!("{title} · {message}");
        match dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(err) => {
                warn!("confirm prompt failed, treating as cancel: {err}");
                false
            }
        }
    }
}

/// Run `action` only after the user confirms. Returns whether the
/// action executed.
pub fn confirm_then<F>(
    confirmer: &dyn Confirmer,
    title: &str,
    message: &str,
    action: F,
) -> Result<bool, StoreError>
where
    F: FnOnce() -> Result<(), StoreError>,
{
    if !confirmer.confirm(title, message) {
        return Ok(false);
    }
    action()?;
    Ok(true)
}
