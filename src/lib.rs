//! # runtime-translate
//!
//! On-demand translation of dynamic runtime strings (product titles, seller messages,
//! review bodies) into the shopper's locale. Static UI copy is handled by locale bundles
//! elsewhere; this crate covers text that only exists at runtime.
//!
//! The service never fails a request because a translation could not be produced: it
//! degrades to the original text, and remembers the failure so a broken provider is not
//! hammered with the same input.
//!
//! See [`mt`] for the components and an end-to-end example.

pub mod mt;

pub use mt::{
    BatchTranslateResult, MachineTranslator, MtError, MtResult, TranslateConfig, TranslateResult,
    TranslationCache, TranslationService,
};
