// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cake_collate_domain::DomainError;
use thiserror::Error;

/// Errors that end a session.
///
/// Rejected requests are not session errors; they are reported on stdout and
/// the session continues.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to read or write session data: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode a response: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("could not determine today's date: {0}")]
    Today(#[from] DomainError),
}
