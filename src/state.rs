/// Visibility of a menu entry at query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Enabled,
    Hidden,
}

/// Computes visibility from the extended-only flag and the live modifier
/// state. Pure; callers re-evaluate on every query rather than caching.
pub fn visibility(extended_only: bool, modifier_held: bool) -> MenuState {
    if extended_only && !modifier_held {
        MenuState::Hidden
    } else {
        MenuState::Enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extended_only_follows_modifier() {
        assert_eq!(visibility(true, false), MenuState::Hidden);
        assert_eq!(visibility(true, true), MenuState::Enabled);
    }

    #[test]
    fn test_regular_action_ignores_modifier() {
        assert_eq!(visibility(false, false), MenuState::Enabled);
        assert_eq!(visibility(false, true), MenuState::Enabled);
    }
}
