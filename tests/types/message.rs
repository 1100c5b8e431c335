use errs::traits::chain;
use errs::{CollectedError, Message, Wrapped};
use std::error::Error;

#[test]
fn message_displays_its_text() {
    let err = errs::new("disk full");
    assert_eq!(err.to_string(), "disk full");
    assert_eq!(err.message(), "disk full");
    assert!(err.source().is_none());
}

#[test]
fn messages_compare_by_text() {
    assert_eq!(errs::new("a"), Message::new("a"));
    assert_ne!(errs::new("a"), errs::new("b"));
}

#[test]
fn wrapped_exposes_its_source() {
    let err = errs::wrap("loading config", errs::new("file missing"));

    assert_eq!(err.to_string(), "loading config");
    let source = err.source().expect("wrapped error has a source");
    assert_eq!(source.downcast_ref::<Message>(), Some(&errs::new("file missing")));
}

#[test]
fn wrap_with_reuses_the_source_message() {
    let err = errs::wrap_with(errs::new("timeout"));
    assert_eq!(err.message(), "timeout");
    assert_eq!(err.inner().to_string(), "timeout");
}

#[test]
fn chain_walks_every_level() {
    let err = errs::wrap("a", errs::wrap("b", errs::new("c")));
    let messages: Vec<String> = chain(err.as_error()).map(|e| e.to_string()).collect();
    assert_eq!(messages, ["a", "b", "c"]);
}

#[test]
fn wrapped_equality_tracks_source_identity() {
    let err = errs::wrap("outer", errs::new("inner"));
    let clone = err.clone();
    let rebuilt = Wrapped::new("outer", errs::new("inner"));

    assert_eq!(err, clone);
    assert_ne!(err, rebuilt);
}
