use leptos::prelude::*;

use crate::error::{ErrorKind, SimulationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A dismissible message shown inline above the page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }
}

impl From<&SimulationError> for Notice {
    fn from(err: &SimulationError) -> Self {
        let level = match err.kind() {
            ErrorKind::Precondition => NoticeLevel::Warning,
            ErrorKind::Transport | ErrorKind::MalformedResponse => NoticeLevel::Error,
        };
        Self {
            level,
            message: err.user_message().to_string(),
        }
    }
}

#[component]
pub fn NoticeBar(notice: ReadSignal<Option<Notice>>, set_notice: WriteSignal<Option<Notice>>) -> impl IntoView {
    view! {
        {move || {
            notice.get().map(|n| {
                let class = match n.level {
                    NoticeLevel::Info => "notice notice-info",
                    NoticeLevel::Warning => "notice notice-warning",
                    NoticeLevel::Error => "notice notice-error",
                };
                view! {
                    <div class=class role="alert">
                        <span class="notice-text">{n.message}</span>
                        <button class="btn btn-small notice-dismiss" on:click=move |_| set_notice.set(None)>
                            "Dismiss"
                        </button>
                    </div>
                }
            })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_from_error() {
        let n = Notice::from(&SimulationError::MissingSession { key: "twinId" });
        assert_eq!(n.level, NoticeLevel::Warning);
        assert_eq!(n.message, "Please login and create a digital twin first");

        let n = Notice::from(&SimulationError::Malformed("x".to_string()));
        assert_eq!(n.level, NoticeLevel::Error);
        assert_eq!(n.message, "Invalid simulation response. Check backend.");
    }
}
