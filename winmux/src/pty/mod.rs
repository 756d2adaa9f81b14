// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! PTY plumbing: spawn the child on a pseudo-terminal and expose it as a
//! bidirectional byte channel.

// Attach.
pub mod pty_session;

// Re-export.
pub use pty_session::{PtyInputEvent, PtyOutputEvent, PtySession};
