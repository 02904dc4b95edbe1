//! Core library for the vcard-tools command line application.
//!
//! The library turns a contact spreadsheet into a vCard file. IO adapters live
//! under [`vcard::tools::io`], data representations inside
//! [`vcard::tools::model`], card rendering in [`vcard::tools::card`], and the
//! load → deduplicate → write pipeline under [`vcard::tools::export`].

pub mod vcard;

pub use vcard::tools::{Result, ToolError, card, config, error, export, io, logging, model};
