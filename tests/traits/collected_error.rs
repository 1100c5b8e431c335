use crate::support::struct_error;
use errs::traits::{chain, CollectedError};
use errs::Errors;
use std::sync::Arc;

#[test]
fn any_inspectable_error_can_be_collected() {
    let shared: Arc<dyn CollectedError> = Arc::new(struct_error());
    assert_eq!((*shared).as_error().to_string(), "structError");
}

#[test]
fn chain_of_single_error_is_itself() {
    let err = errs::new("alone");
    assert_eq!(chain(&err).count(), 1);
}

#[test]
fn chain_crosses_into_collections() {
    let inner = Errors::new();
    inner.append(errs::new("deep"));
    let err = errs::wrap("outer", inner);

    let links: Vec<String> = chain(&err).map(ToString::to_string).collect();
    assert_eq!(links, ["outer", "deep"]);
}
