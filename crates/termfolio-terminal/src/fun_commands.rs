//! Fun commands: matrix and hack. Both hand off to an animation.

use crate::animation::AnimationKind;
use crate::interpreter::{CommandEntry, CommandRegistry};

/// Register the animation commands.
pub fn register_fun_commands(reg: &mut CommandRegistry) {
    reg.register(CommandEntry::animation(
        "matrix",
        "Enter the matrix",
        AnimationKind::Matrix,
    ));
    reg.register(CommandEntry::animation(
        "hack",
        "Hack the mainframe",
        AnimationKind::Hack,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::CommandAction;

    #[test]
    fn both_register_as_fun_animations() {
        let mut reg = CommandRegistry::new();
        register_fun_commands(&mut reg);
        assert_eq!(reg.len(), 2);
        for (name, kind) in [("matrix", AnimationKind::Matrix), ("hack", AnimationKind::Hack)] {
            let entry = reg.get(name).unwrap();
            assert_eq!(entry.category(), "fun");
            assert!(matches!(entry.action(), CommandAction::Animation(k) if k == kind));
        }
    }
}
