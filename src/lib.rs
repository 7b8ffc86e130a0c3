//! cihelper - CI helper for managing encrypted GitHub Actions secrets.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── secrets       # list/set/delete secret commands
//! │   ├── output        # Styled terminal output
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── exit_codes    # Known and reserved exit codes
//!     ├── exit          # Process termination
//!     ├── seal          # Sealed-box encryption
//!     ├── config        # Settings resolution (.cihelper.toml)
//!     ├── context       # Per-invocation request context
//!     ├── transport     # HTTP transport trait
//!     ├── github        # Secrets API operations
//!     ├── session       # Client + cached public key
//!     ├── domain        # Typed API records
//!     └── validation    # Secret name rules
//! ```
//!
//! # Features
//!
//! - libsodium-compatible sealed boxes for GitHub secret values
//! - Secrets from literal values, files (base64) or raw file bytes
//! - Exit codes that never collide with shell or signal conventions

pub mod cli;
pub mod core;
pub mod error;
