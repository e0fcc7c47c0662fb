//! Request correlation
//!
//! A console session draws one UUIDv7 when it starts. Menu operations
//! inside it are numbered from 1, and the pair is the request id carried
//! on that operation's start, end and error events. Sorting by request id
//! therefore follows the order the operator issued commands in.

use std::fmt;
use uuid::Uuid;

/// Identity of one console session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Id of the first operation of this session
    pub fn first_request(&self) -> RequestId {
        RequestId {
            session: *self,
            seq: 1,
        }
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_hyphenated())
    }
}

/// One menu operation within a session, rendered `<session>#<seq>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId {
    session: SessionId,
    seq: u32,
}

impl RequestId {
    pub fn session(&self) -> SessionId {
        self.session
    }

    /// 1-based position of the operation in its session
    pub fn seq(&self) -> u32 {
        self.seq
    }

    /// Id of the operation after this one
    pub fn next(&self) -> RequestId {
        RequestId {
            session: self.session,
            seq: self.seq.saturating_add(1),
        }
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.session, self.seq)
    }
}
