//! Configuration management for dirlist.
//!
//! Listing and output preferences ([`settings::Config`]) are stored as a
//! TOML file and loaded at startup. Every field has a default, so no file
//! is required.

pub mod settings;
