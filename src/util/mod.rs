//! Browser-side helpers that have no reactive state of their own.
//!
//! `prefetch` injects `<link rel="prefetch">` hints; it is a no-op outside the
//! hydrated client so server rendering and native tests can call it freely.

pub mod prefetch;
