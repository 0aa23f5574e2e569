//! Response decoder module
//!
//! # Overview
//!
//! Extracts the record collection from a JSON response body using a
//! configured dot-separated path (`data` for the FireHydrant API).
//! An empty collection decodes to an empty page; a body without the
//! collection is reported as `Error::MalformedResponse`.

mod decoders;

pub use decoders::JsonDecoder;

#[cfg(test)]
mod tests;
