//! Property tests for the typewriter reducer and paper projection

use proptest::prelude::*;
use typewriter::tui::render::paper;
use typewriter::tui::input;
use typewriter::{Command, Mode, Typewriter};

fn printable() -> impl Strategy<Value = Command> {
    prop_oneof![
        any::<char>()
            .prop_filter("newline is typed with Enter", |ch| *ch != '\n')
            .prop_map(Command::Type),
        Just(Command::NewLine),
    ]
}

fn any_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => printable(),
        2 => Just(Command::Delete),
        1 => prop_oneof![Just(Mode::Vintage), Just(Mode::Minimal)].prop_map(Command::SetMode),
    ]
}

proptest! {
    #[test]
    fn length_counts_printable_events(commands in prop::collection::vec(printable(), 0..64)) {
        let mut app = Typewriter::default();
        for &command in &commands {
            app.apply(command);
        }
        prop_assert_eq!(app.document.len(), commands.len());
        prop_assert_eq!(app.document.struck_count(), 0);
    }

    #[test]
    fn vintage_backspace_is_monotonic(commands in prop::collection::vec(
        prop_oneof![3 => printable(), 2 => Just(Command::Delete)],
        0..64,
    )) {
        let mut app = Typewriter::default();
        let mut struck = 0;
        for command in commands {
            let len_before = app.document.len();
            app.apply(command);
            let now = app.document.struck_count();
            prop_assert!(now >= struck);
            prop_assert!(now <= struck + 1);
            prop_assert!(now <= app.document.len());
            if command == Command::Delete {
                prop_assert_eq!(app.document.len(), len_before);
            }
            struck = now;
        }
    }

    #[test]
    fn minimal_backspace_shrinks_by_one(
        text in prop::collection::vec(printable(), 0..32),
        deletes in 0_usize..48,
    ) {
        let mut app = Typewriter::default();
        app.apply(Command::SetMode(Mode::Minimal));
        for &command in &text {
            app.apply(command);
        }
        for _ in 0..deletes {
            let before = app.document.len();
            app.apply(Command::Delete);
            prop_assert_eq!(app.document.len(), before.saturating_sub(1));
        }
        prop_assert_eq!(app.document.len(), text.len().saturating_sub(deletes));
    }

    #[test]
    fn mode_switch_never_rewrites_history(
        commands in prop::collection::vec(any_command(), 0..64),
        mode in prop_oneof![Just(Mode::Vintage), Just(Mode::Minimal)],
    ) {
        let mut app = Typewriter::default();
        for command in commands {
            app.apply(command);
        }
        let before = app.document.clone();
        app.apply(Command::SetMode(mode));
        prop_assert_eq!(&app.document, &before);
        prop_assert_eq!(app.mode, mode);
    }

    #[test]
    fn document_only_changes_at_the_tail(commands in prop::collection::vec(any_command(), 0..64)) {
        let mut app = Typewriter::default();
        for command in commands {
            let before = app.document.clone();
            app.apply(command);
            let after = app.document.records();
            let kept = before.len().min(after.len());
            for (old, new) in before.records()[..kept].iter().zip(&after[..kept]) {
                prop_assert_eq!(old.ch, new.ch);
                // A record can only go from unstruck to struck
                prop_assert!(!old.struck || new.struck);
            }
        }
    }

    #[test]
    fn paper_projection_is_idempotent(
        commands in prop::collection::vec(any_command(), 0..64),
        width in 1_usize..40,
        cursor_visible in any::<bool>(),
    ) {
        let mut app = Typewriter::default();
        for command in commands {
            app.apply(command);
        }
        let units = paper::units(&app.document);
        prop_assert_eq!(units.len(), app.document.len() + 1);
        prop_assert_eq!(units.last().copied(), Some(paper::Unit::Cursor));
        prop_assert_eq!(
            paper::paper_lines(&app.document, width, cursor_visible),
            paper::paper_lines(&app.document, width, cursor_visible)
        );
    }

    #[test]
    fn multi_symbol_identifiers_are_ignored(name in "[A-Z][a-zA-Z0-9]{1,12}") {
        prop_assume!(name != "Backspace" && name != "Enter");
        prop_assert_eq!(input::classify(&name), None);
    }

    #[test]
    fn single_symbols_are_typed(ch in any::<char>()) {
        prop_assert_eq!(input::classify(&ch.to_string()), Some(Command::Type(ch)));
    }
}
