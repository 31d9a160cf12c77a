//! Operation type of the aggregate Safe transaction

use std::fmt;

/// How the Safe invokes the aggregate transaction target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Operation {
    /// Regular call, used for a batch holding a single transaction
    #[default]
    Call = 0,
    /// Delegate call, used to run MultiSend in the Safe's context
    DelegateCall = 1,
}

impl Operation {
    /// Returns the on-chain encoding of the operation
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }
}

impl From<Operation> for u8 {
    fn from(op: Operation) -> Self {
        op.as_u8()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Call => f.write_str("call"),
            Operation::DelegateCall => f.write_str("delegatecall"),
        }
    }
}
