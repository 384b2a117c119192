use std::time::Duration;

pub const TYPE_DELAY: Duration = Duration::from_millis(100);
pub const HOLD_DELAY: Duration = Duration::from_millis(2000);
pub const DELETE_DELAY: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Deleting,
}

/// Types each role out, holds it, erases it, then moves on to the next one.
#[derive(Debug, Clone)]
pub struct Typewriter {
    roles: &'static [&'static str],
    role: usize,
    // visible length in chars
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(roles: &'static [&'static str]) -> Self {
        Self {
            roles,
            role: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    fn current(&self) -> &'static str {
        self.roles.get(self.role).copied().unwrap_or_default()
    }

    pub fn text(&self) -> &'static str {
        let role = self.current();
        match role.char_indices().nth(self.shown) {
            Some((i, _)) => &role[..i],
            None => role,
        }
    }

    /// Steps once and returns how long to wait before the next step.
    pub fn advance(&mut self) -> Duration {
        if self.roles.is_empty() {
            return HOLD_DELAY;
        }
        let len = self.current().chars().count();
        match self.phase {
            Phase::Typing => {
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown >= len {
                    self.phase = Phase::Deleting;
                    HOLD_DELAY
                } else {
                    TYPE_DELAY
                }
            }
            Phase::Deleting => {
                if self.shown > 0 {
                    self.shown -= 1;
                    DELETE_DELAY
                } else {
                    self.role = (self.role + 1) % self.roles.len();
                    self.phase = Phase::Typing;
                    TYPE_DELAY
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle() {
        let mut tw = Typewriter::new(&["ab", "c"]);
        assert_eq!(tw.text(), "");

        assert_eq!(tw.advance(), TYPE_DELAY);
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.advance(), HOLD_DELAY);
        assert_eq!(tw.text(), "ab");

        assert_eq!(tw.advance(), DELETE_DELAY);
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.advance(), DELETE_DELAY);
        assert_eq!(tw.text(), "");

        // next role
        assert_eq!(tw.advance(), TYPE_DELAY);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.advance(), HOLD_DELAY);
        assert_eq!(tw.text(), "c");
        tw.advance();
        tw.advance();
        assert_eq!(tw.text(), "");
        // wraps back to the first role
        assert_eq!(tw.advance(), TYPE_DELAY);
        assert_eq!(tw.text(), "a");
    }

    #[test]
    fn test_multibyte_roles() {
        let mut tw = Typewriter::new(&["né"]);
        tw.advance();
        assert_eq!(tw.text(), "n");
        tw.advance();
        assert_eq!(tw.text(), "né");
    }

    #[test]
    fn test_degenerate_roles() {
        let mut none = Typewriter::new(&[]);
        assert_eq!(none.advance(), HOLD_DELAY);
        assert_eq!(none.text(), "");

        let mut blank = Typewriter::new(&[""]);
        assert_eq!(blank.advance(), HOLD_DELAY);
        assert_eq!(blank.text(), "");
        assert_eq!(blank.advance(), TYPE_DELAY);
    }
}
