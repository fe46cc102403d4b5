//! # State Module
//!
//! Everything one run of the terminal app holds onto.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐   ┌──────────────────────────────┐   │
//! │  │   Session                    │   │   AppConfig                  │   │
//! │  │                              │   │                              │   │
//! │  │   BookingEngine              │   │   [storage] file paths       │   │
//! │  │   (trains + tickets)         │   │   [logging] filter           │   │
//! │  │   CsvStore                   │   │                              │   │
//! │  │   (where to load / save)     │   │   Read-only after startup    │   │
//! │  └──────────────────────────────┘   └──────────────────────────────┘   │
//! │                                                                         │
//! │  Single-threaded: the menu loop is the only owner, no locking.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{AppConfig, ConfigError, LoggingSettings, StorageSettings, CONFIG_FILE_NAME};
pub use session::Session;
