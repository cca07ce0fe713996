// Integration tests for the ainav-core session logic.
//
// Each test builds its own context: an in-memory (or tempdir-backed)
// preference store, a recording gateway and a collecting notifier, so
// tests run in parallel without shared state. The HTTP gateway is
// exercised separately against a wiremock server.

mod helpers;
mod test_catalog;
mod test_scrollsync;
