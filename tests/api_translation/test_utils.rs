//! Shared helpers for the request translation suite.

use sampleservice::{AdminPermission, Error, ErrorType, Result, UserLookup};
use serde_json::Value;
use std::cell::RefCell;

/// Assert an error has the expected kind and bare message.
pub fn assert_error(got: &Error, kind: ErrorType, message: &str) {
    assert_eq!(got.error_type(), kind, "unexpected error kind for {:?}", got);
    assert_eq!(got.message(), message);
}

pub fn assert_illegal(got: &Error, message: &str) {
    assert_error(got, ErrorType::IllegalParameter, message);
}

/// Route tracing output to the test harness. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Parse a JSON literal used as a request.
pub fn req(s: &str) -> Value {
    serde_json::from_str(s).unwrap()
}

/// A user lookup returning a fixed answer and recording the tokens it saw.
pub struct RecordingLookup {
    answer: (AdminPermission, String),
    pub calls: RefCell<Vec<String>>,
}

impl RecordingLookup {
    pub fn new(perm: AdminPermission, user: &str) -> Self {
        RecordingLookup {
            answer: (perm, user.to_string()),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl UserLookup for RecordingLookup {
    fn is_admin(&self, token: &str) -> Result<(AdminPermission, String)> {
        self.calls.borrow_mut().push(token.to_string());
        Ok(self.answer.clone())
    }
}
