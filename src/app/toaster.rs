use leptos::prelude::*;

use crate::notification::{Notification, NotificationId, NotificationQueue, Severity};

/// Handle to the page's notification surface. Provided as context by `App`.
#[derive(Debug, Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<NotificationQueue>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::new()),
        }
    }

    /// Queues a notification. Client side only.
    pub fn notify(&self, notification: Notification) {
        if self.queue.try_update(|q| q.push(notification)).is_some() {
            self.start_clocks();
        }
    }

    pub fn dismiss(&self, id: NotificationId) {
        if self.queue.try_update(|q| q.dismiss(id)).is_some() {
            self.start_clocks();
        }
    }

    // Anything that just moved on screen gets its own dismissal timer.
    fn start_clocks(&self) {
        let notifier = *self;
        let Some(shown) = self.queue.try_update(|q| q.take_newly_shown()) else {
            return;
        };
        for (id, lifetime) in shown {
            set_timeout(move || notifier.dismiss(id), lifetime);
        }
    }

    fn visible(&self) -> Vec<(NotificationId, Notification)> {
        self.queue.with(|q| q.visible())
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}

#[component]
pub fn Toaster() -> impl IntoView {
    let notifier = use_notifier();
    view! {
        <div
            class="fixed top-4 right-4 z-50 flex flex-col gap-2 w-80 max-w-[calc(100vw-2rem)]"
            role="status"
            aria-live="polite"
        >
            <For
                each=move || notifier.visible()
                key=|(id, _)| *id
                children=move |(id, notification)| view! { <Toast id notification /> }
            />
        </div>
    }
}

#[component]
fn Toast(id: NotificationId, notification: Notification) -> impl IntoView {
    let notifier = use_notifier();
    let (accent, icon) = match notification.severity {
        Severity::Success => ("border-green-500/50 text-green-400", "✅"),
        Severity::Error => ("border-red-500/50 text-red-400", "⚠️"),
    };
    view! {
        <div class=format!(
            "flex items-start gap-3 p-4 rounded-lg border bg-slate-800/95 shadow-lg {accent}",
        )>
            <span>{icon}</span>
            <div class="flex-1">
                <p class="font-semibold">{notification.title}</p>
                {notification
                    .description
                    .map(|d| view! { <p class="text-sm text-gray-300 mt-1">{d}</p> })}
            </div>
            <button
                class="text-gray-400 hover:text-white"
                aria-label="Dismiss notification"
                on:click=move |_| notifier.dismiss(id)
            >
                "✕"
            </button>
        </div>
    }
}
