//! Toast notifications for sync outcomes.
//!
//! The crate never renders anything itself; it hands `Toast` values to a
//! host-provided sink. Delivery is fire-and-forget: a dropped toast changes
//! nothing about the sync result.

use serde::Serialize;

/// Visual severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastSeverity {
    Success,
    Error,
}

/// One toast message for the host to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub severity: ToastSeverity,
}

impl Toast {
    pub fn success(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            severity: ToastSeverity::Success,
        }
    }

    pub fn error(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            severity: ToastSeverity::Error,
        }
    }
}

/// Host-provided toast outlet.
pub trait NotificationSink: Send + Sync {
    /// Deliver one toast. Must not block on user interaction.
    fn notify(&self, toast: Toast);
}

/// Sink that writes toasts to the log. Used by the preview binary and as a
/// stand-in when the host has no toast surface.
#[derive(Debug, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&self, toast: Toast) {
        match toast.severity {
            ToastSeverity::Success => log::info!("{}: {}", toast.title, toast.message),
            ToastSeverity::Error => log::warn!("{}: {}", toast.title, toast.message),
        }
    }
}
