//! Recording fakes for the Discord seams.
//!
//! `FakeGuild` keeps an in-memory guild (channels, roles, members, messages) that
//! behaves like Discord for the calls services make, records every mutation and can
//! be told to fail individual calls. `FakeResponder` records the responses an
//! interaction received, in order.


pub use guild::FakeGuild;
pub use responder::{FakeResponder, Response};
