//! Splitting of `host:port` strings.
//!
//! IPv6 literals must be bracketed (`[::1]:443`). Hosts and ports are
//! returned as borrowed slices and are not validated beyond their framing:
//! an empty port or an empty host is a successful split.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SplitError {
    #[error("missing port in address")]
    MissingPort,
    #[error("missing ']' in address")]
    MissingBracket,
    #[error("too many colons in address")]
    TooManyColons,
    #[error("unexpected '[' in address")]
    UnexpectedOpenBracket,
    #[error("unexpected ']' in address")]
    UnexpectedCloseBracket,
}

/// Splits `address` into `(host, port)`, stripping brackets from the host.
pub fn split_host_port(address: &str) -> Result<(&str, &str), SplitError> {
    let colon: usize = address.rfind(':').ok_or(SplitError::MissingPort)?;

    // Offsets past which a stray bracket is an error.
    let (host, open_from, close_from) = if address.starts_with('[') {
        let end: usize = address.find(']').ok_or(SplitError::MissingBracket)?;
        match address.as_bytes().get(end + 1) {
            None => return Err(SplitError::MissingPort),
            Some(b':') if end + 1 == colon => {}
            Some(b':') => return Err(SplitError::TooManyColons),
            Some(_) => return Err(SplitError::MissingPort),
        }
        (&address[1..end], 1, end + 1)
    } else {
        let host: &str = &address[..colon];
        if host.contains(':') {
            return Err(SplitError::TooManyColons);
        }
        (host, 0, 0)
    };

    if address[open_from..].contains('[') {
        return Err(SplitError::UnexpectedOpenBracket);
    }
    if address[close_from..].contains(']') {
        return Err(SplitError::UnexpectedCloseBracket);
    }

    Ok((host, &address[colon + 1..]))
}
