use crate::support::{config_guard, ptr_error, struct_error, PtrError, SomethingError, StructError};
use errs::{Errors, Message, PrettyConfig};
use std::error::Error;
use std::io;
use std::sync::Arc;
use std::thread;

fn joined(errors: &Errors) -> String {
    errors.join_messages(&PrettyConfig::default())
}

mod messages {
    use super::*;

    #[test]
    fn empty_collection_joins_to_empty_string() {
        assert_eq!(joined(&Errors::new()), "");
    }

    #[test]
    fn single_entry_has_no_separator() {
        let errors = Errors::new();
        errors.append(errs::new("error"));
        assert_eq!(joined(&errors), "error");
    }

    #[test]
    fn entries_are_joined_with_new_line() {
        let errors = Errors::new();
        errors.append(errs::new("error1"));
        errors.append(errs::new("error2"));
        assert_eq!(joined(&errors), "error1\nerror2");
    }

    #[test]
    fn duplicates_are_kept() {
        let errors = Errors::new();
        errors.append(SomethingError);
        errors.append(SomethingError);
        assert_eq!(joined(&errors), "something error\nsomething error");
    }

    #[test]
    fn nil_entry_has_a_placeholder() {
        let errors = Errors::new();
        errors.append(errs::new("first"));
        errors.append_nil();
        assert_eq!(joined(&errors), "first\n<nil>");
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn explicit_new_line_is_the_only_separator() {
        let errors = Errors::new();
        errors.append(errs::new("a"));
        errors.append(errs::new("b"));
        let config = PrettyConfig::default().with_new_line(errs::NewLine::CrLf);
        assert_eq!(errors.join_messages(&config), "a\r\nb");

        let config = config.with_delimiter(";");
        assert_eq!(errors.join_messages(&config), "a\r\nb");
    }

    #[test]
    fn display_uses_process_wide_settings() {
        let _guard = config_guard();
        let errors = Errors::new();
        errors.append(errs::new("a"));
        errors.append(errs::new("b"));

        errs::set_delimiter(" |");
        errs::set_new_line("\r");
        assert_eq!(errors.to_string(), "a\rb");

        errs::reset_delimiter();
        errs::reset_new_line();
        assert_eq!(errors.to_string(), "a\nb");
    }
}

mod is {
    use super::*;

    #[test]
    fn finds_appended_error() {
        let errors = Errors::new();
        errors.append(struct_error());
        assert!(errors.is(&struct_error()));
    }

    #[test]
    fn finds_error_behind_wrap() {
        let errors = Errors::new();
        errors.append(errs::wrap("wrapped", ptr_error()));
        assert!(errors.is(&ptr_error()));
    }

    #[test]
    fn compares_by_value() {
        let errors = Errors::new();
        errors.append(struct_error());
        let other = StructError { i: 2, ..struct_error() };
        assert!(!errors.is(&other));
        assert!(!errors.is(&ptr_error()));
    }

    #[test]
    fn skips_nil_entries() {
        let errors = Errors::new();
        errors.append_nil();
        assert!(!errors.is(&SomethingError));
        errors.append(SomethingError);
        assert!(errors.is(&SomethingError));
    }

    #[test]
    fn searches_nested_collections() {
        let inner = Errors::new();
        inner.append(errs::new("deep"));
        let outer = Errors::new();
        outer.append(errs::wrap("batch failed", inner));

        assert!(outer.is(&errs::new("deep")));
        assert!(!outer.is(&errs::new("shallow")));
    }

    #[test]
    fn sees_boxed_errors() {
        let errors = Errors::new();
        let boxed: Box<dyn Error + Send + Sync> = Box::new(errs::new("boxed"));
        errors.append_boxed(boxed);

        assert!(errors.is(&errs::new("boxed")));
        assert_eq!(joined(&errors), "boxed");
    }
}

mod as_target {
    use super::*;

    #[test]
    fn fills_slot_with_first_match() {
        let errors = Errors::new();
        errors.append(errs::new("skip"));
        errors.append(struct_error());

        let mut slot: Option<StructError> = None;
        assert!(errors.as_target(&mut slot));
        assert_eq!(slot, Some(struct_error()));
    }

    #[test]
    fn unwraps_to_reach_target() {
        let errors = Errors::new();
        errors.append(errs::wrap("outer", errs::wrap("inner", ptr_error())));

        let mut slot: Option<PtrError> = None;
        assert!(errors.as_target(&mut slot));
        assert_eq!(slot, Some(ptr_error()));
    }

    #[test]
    fn leaves_slot_untouched_without_match() {
        let errors = Errors::new();
        errors.append(struct_error());

        let mut slot = Some(PtrError { i: 9, str: "kept".to_string(), b: false });
        assert!(!errors.as_target(&mut slot));
        assert_eq!(slot.map(|err| err.i), Some(9));
    }

    #[test]
    fn repeated_calls_agree() {
        let errors = Errors::new();
        errors.append(struct_error());

        let mut first: Option<StructError> = None;
        let mut second: Option<StructError> = None;
        assert!(errors.as_target(&mut first));
        assert!(errors.as_target(&mut second));
        assert_eq!(first, second);
    }

    #[test]
    fn find_reaches_into_nested_collections() {
        let inner = Errors::new();
        inner.append(errs::new("deep"));
        let outer = Errors::new();
        outer.append(inner);

        assert_eq!(outer.find::<Message>(), Some(errs::new("deep")));
        assert_eq!(outer.find::<StructError>(), None);
    }

    #[test]
    fn find_sees_io_errors() {
        let errors = Errors::new();
        errors.append(errs::wrap("reading", io::Error::new(io::ErrorKind::NotFound, "gone")));

        let found = errors.snapshot().into_iter().flatten().find_map(|entry| {
            entry.source().map(|source| source.downcast_ref::<io::Error>().is_some())
        });
        assert_eq!(found, Some(true));
    }
}

mod collection {
    use super::*;

    #[test]
    fn concurrent_appends_are_all_kept() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 100;

        let errors = Errors::new();
        thread::scope(|scope| {
            for t in 0..THREADS {
                let errors = &errors;
                scope.spawn(move || {
                    for n in 0..PER_THREAD {
                        errors.append(errs::new(format!("{t}:{n}")));
                    }
                });
            }
        });

        let snapshot = errors.snapshot();
        assert_eq!(snapshot.len(), THREADS * PER_THREAD);

        // Appends from one thread keep their relative order.
        for t in 0..THREADS {
            let prefix = format!("{t}:");
            let sequence: Vec<usize> = snapshot
                .iter()
                .flatten()
                .map(|entry| entry.to_string())
                .filter_map(|msg| msg.strip_prefix(&prefix).map(|n| n.parse().unwrap()))
                .collect();
            assert_eq!(sequence, (0..PER_THREAD).collect::<Vec<_>>());
        }
    }

    #[test]
    fn concurrent_renders_see_consistent_snapshots() {
        let errors = Errors::new();
        thread::scope(|scope| {
            scope.spawn(|| {
                for n in 0..50 {
                    errors.append(errs::new(format!("e{n}")));
                }
            });
            scope.spawn(|| {
                for _ in 0..50 {
                    let text = errors.pretty_format_with(&PrettyConfig::default());
                    assert!(text.starts_with("Errors["));
                    assert!(text.ends_with(']'));
                }
            });
        });
        assert_eq!(errors.len(), 50);
    }

    #[test]
    fn snapshot_is_not_affected_by_later_appends() {
        let errors = Errors::new();
        errors.append(errs::new("before"));
        let snapshot = errors.snapshot();
        errors.append(errs::new("after"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn shared_entries_keep_identity() {
        let shared: Arc<dyn errs::CollectedError> = Arc::new(errs::new("shared"));
        let errors = Errors::new();
        errors.append_shared(Arc::clone(&shared));

        let snapshot = errors.snapshot();
        let entry = snapshot[0].as_ref().unwrap();
        assert!(Arc::ptr_eq(entry, &shared));
    }

    #[test]
    fn collects_from_iterator_and_extends() {
        let mut errors: Errors = vec![errs::new("a"), errs::new("b")].into_iter().collect();
        errors.extend([errs::new("c")]);

        assert_eq!(errors.len(), 3);
        assert_eq!(joined(&errors), "a\nb\nc");
    }

    #[test]
    fn starts_empty() {
        let errors = Errors::default();
        assert!(errors.is_empty());
        assert_eq!(errors.pretty_format_with(&PrettyConfig::default()), "Errors[]");
    }

    #[test]
    fn debug_lists_entries() {
        let errors = Errors::new();
        errors.append(errs::new("x"));
        let debug = format!("{errors:?}");
        assert!(debug.starts_with("Errors"));
        assert!(debug.contains("\"x\""));
    }
}
