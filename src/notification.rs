use std::collections::VecDeque;
use std::time::Duration;

/// Notifications shown at once; later ones wait until earlier ones are dismissed.
pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    /// How long a notification of this severity stays up before dismissing itself.
    pub fn duration(&self) -> Duration {
        match self {
            Severity::Success => Duration::from_secs(4),
            Severity::Error => Duration::from_secs(6),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub description: Option<String>,
}

impl Notification {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            title: title.into(),
            description: None,
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

#[derive(Debug, Clone)]
struct Entry {
    id: NotificationId,
    notification: Notification,
    // set once the entry has been handed out by `take_newly_shown`
    clock_started: bool,
}

#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    next_id: u64,
    // oldest first
    entries: VecDeque<Entry>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        self.entries.push_back(Entry {
            id,
            notification,
            clock_started: false,
        });
        id
    }

    /// Returns false if the notification was already gone.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let Some(pos) = self.entries.iter().position(|e| e.id == id) else {
            return false;
        };
        self.entries.remove(pos);
        true
    }

    /// The oldest `MAX_VISIBLE` notifications, newest first.
    pub fn visible(&self) -> Vec<(NotificationId, Notification)> {
        self.entries
            .iter()
            .take(MAX_VISIBLE)
            .rev()
            .map(|e| (e.id, e.notification.clone()))
            .collect()
    }

    /// Visible entries whose auto-dismiss clock has not started yet, paired
    /// with how long they should stay up. Each entry is returned once, on the
    /// first call after it enters `visible()`, so queued entries get their
    /// full lifetime on screen.
    pub fn take_newly_shown(&mut self) -> Vec<(NotificationId, Duration)> {
        self.entries
            .iter_mut()
            .take(MAX_VISIBLE)
            .filter(|e| !e.clock_started)
            .map(|e| {
                e.clock_started = true;
                (e.id, e.notification.severity.duration())
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut queue = NotificationQueue::new();
        let first = queue.push(Notification::success("one"));
        let second = queue.push(Notification::error("two"));
        assert_ne!(first, second);
        assert_eq!(queue.len(), 2);

        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.visible()[0].1.title, "two");
    }

    #[test]
    fn test_overflow_waits_for_dismissal() {
        let mut queue = NotificationQueue::new();
        let ids = (0..5)
            .map(|i| queue.push(Notification::success(format!("n{i}"))))
            .collect::<Vec<_>>();

        let titles = |q: &NotificationQueue| {
            q.visible()
                .into_iter()
                .map(|(_, n)| n.title)
                .collect::<Vec<_>>()
        };
        assert_eq!(titles(&queue), vec!["n2", "n1", "n0"]);

        queue.dismiss(ids[1]);
        assert_eq!(titles(&queue), vec!["n3", "n2", "n0"]);
    }

    #[test]
    fn test_builders() {
        let n = Notification::success("Saved").with_description("All good");
        assert_eq!(n.severity, Severity::Success);
        assert_eq!(n.description.as_deref(), Some("All good"));
        assert!(Severity::Error.duration() > Severity::Success.duration());
    }

    #[test]
    fn test_clock_starts_when_shown() {
        let mut queue = NotificationQueue::new();
        let errors = (0..3)
            .map(|i| queue.push(Notification::error(format!("e{i}"))))
            .collect::<Vec<_>>();
        let sent = queue.push(Notification::success("Message sent successfully!"));

        let started = queue.take_newly_shown();
        assert_eq!(started.len(), 3);
        assert!(started.iter().all(|(id, d)| errors.contains(id) && *d == Severity::Error.duration()));
        assert!(queue.take_newly_shown().is_empty());

        queue.dismiss(errors[0]);
        assert_eq!(queue.take_newly_shown(), vec![(sent, Severity::Success.duration())]);
        assert!(queue.take_newly_shown().is_empty());
    }

    // Drives the queue the way `Notifier` does with timers, on a fake clock.
    #[test]
    fn test_queued_success_gets_full_lifetime() {
        let mut queue = NotificationQueue::new();
        let mut deadlines: Vec<(Duration, NotificationId)> = Vec::new();
        let schedule = |queue: &mut NotificationQueue,
                        now: Duration,
                        deadlines: &mut Vec<(Duration, NotificationId)>| {
            for (id, lifetime) in queue.take_newly_shown() {
                deadlines.push((now + lifetime, id));
            }
        };

        for i in 0..3 {
            queue.push(Notification::error(format!("e{i}")));
        }
        schedule(&mut queue, Duration::ZERO, &mut deadlines);

        let second = Duration::from_secs(1);
        let sent = queue.push(Notification::success("Message sent successfully!"));
        schedule(&mut queue, second, &mut deadlines);
        assert!(!queue.visible().iter().any(|(id, _)| *id == sent));

        let mut shown_at = None;
        let mut dismissed_at = None;
        while !deadlines.is_empty() {
            deadlines.sort_by_key(|(at, _)| *at);
            let (now, id) = deadlines.remove(0);
            assert!(queue.dismiss(id));
            if id == sent {
                dismissed_at = Some(now);
            }
            schedule(&mut queue, now, &mut deadlines);
            if shown_at.is_none() && queue.visible().iter().any(|(id, _)| *id == sent) {
                shown_at = Some(now);
            }
        }

        let shown_at = shown_at.expect("success notification was shown");
        assert_eq!(shown_at, Duration::from_secs(6));
        assert_eq!(dismissed_at, Some(shown_at + Severity::Success.duration()));
        assert!(queue.is_empty());
    }
}
