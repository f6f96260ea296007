use strum::{Display, EnumIter};

/// CIL operation codes, reduced to the subset the reachability scanner
/// inspects plus the common load/stack codes fixture bodies are built from.
///
/// The scanner's decisions hinge on five codes: [`OpCode::Nop`] (skipped when
/// pairing instructions with a following throw), [`OpCode::Call`] /
/// [`OpCode::Callvirt`] (call-graph edges), [`OpCode::Newobj`] (exception
/// construction) and [`OpCode::Throw`] / [`OpCode::Ret`] (terminals). All
/// remaining codes are carried through bodies untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum OpCode {
    /// No operation
    #[strum(serialize = "nop")]
    Nop,
    /// Duplicate the value on top of the stack
    #[strum(serialize = "dup")]
    Dup,
    /// Remove the value on top of the stack
    #[strum(serialize = "pop")]
    Pop,
    /// Load an argument onto the stack
    #[strum(serialize = "ldarg")]
    Ldarg,
    /// Load a string literal onto the stack
    #[strum(serialize = "ldstr")]
    Ldstr,
    /// Load a 32-bit integer constant onto the stack
    #[strum(serialize = "ldc.i4")]
    LdcI4,
    /// Call a method
    #[strum(serialize = "call")]
    Call,
    /// Call a method with virtual dispatch
    #[strum(serialize = "callvirt")]
    Callvirt,
    /// Allocate an object and call its constructor
    #[strum(serialize = "newobj")]
    Newobj,
    /// Throw the exception object on top of the stack
    #[strum(serialize = "throw")]
    Throw,
    /// Return from the current method
    #[strum(serialize = "ret")]
    Ret,
}

impl OpCode {
    /// Returns true for the call codes that contribute call-graph edges.
    #[must_use]
    pub fn is_call(&self) -> bool {
        matches!(self, OpCode::Call | OpCode::Callvirt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_mnemonics() {
        assert_eq!(OpCode::Newobj.to_string(), "newobj");
        assert_eq!(OpCode::Callvirt.to_string(), "callvirt");
        assert_eq!(OpCode::LdcI4.to_string(), "ldc.i4");
    }

    #[test]
    fn test_call_codes() {
        let calls: Vec<_> = OpCode::iter().filter(OpCode::is_call).collect();
        assert_eq!(calls, [OpCode::Call, OpCode::Callvirt]);
    }
}
