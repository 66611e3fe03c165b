//! Keyboard map for the gallery

use super::SlideCommand;

/// Map a `KeyboardEvent.key` value to a navigation command
pub fn command_for_key(key: &str) -> Option<SlideCommand> {
    match key {
        "ArrowRight" | "d" | "D" => Some(SlideCommand::Next),
        "ArrowLeft" | "a" | "A" => Some(SlideCommand::Previous),
        "Home" => Some(SlideCommand::First),
        "End" => Some(SlideCommand::Last),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_and_letter_keys() {
        assert_eq!(command_for_key("ArrowRight"), Some(SlideCommand::Next));
        assert_eq!(command_for_key("d"), Some(SlideCommand::Next));
        assert_eq!(command_for_key("D"), Some(SlideCommand::Next));
        assert_eq!(command_for_key("ArrowLeft"), Some(SlideCommand::Previous));
        assert_eq!(command_for_key("a"), Some(SlideCommand::Previous));
        assert_eq!(command_for_key("A"), Some(SlideCommand::Previous));
    }

    #[test]
    fn test_home_and_end() {
        assert_eq!(command_for_key("Home"), Some(SlideCommand::First));
        assert_eq!(command_for_key("End"), Some(SlideCommand::Last));
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert_eq!(command_for_key("ArrowUp"), None);
        assert_eq!(command_for_key("Enter"), None);
        assert_eq!(command_for_key("s"), None);
    }
}
