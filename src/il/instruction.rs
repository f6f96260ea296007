use std::fmt;

use crate::il::OpCode;
use crate::metadata::MethodRef;

/// Operand of a single CIL instruction.
///
/// The facade keeps operands symbolic: call and construction targets are
/// [`MethodRef`]s carrying the referenced method's name and declaring type,
/// resolvable to a definition through the owning assembly's method table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// No operand present
    None,
    /// A method reference (operand of call, callvirt and newobj)
    Method(MethodRef),
    /// An inline string literal
    String(String),
    /// An inline 32-bit integer
    Int32(i32),
}

impl Operand {
    /// Returns the method reference if this operand carries one.
    #[must_use]
    pub fn as_method(&self) -> Option<&MethodRef> {
        match self {
            Operand::Method(reference) => Some(reference),
            _ => None,
        }
    }
}

/// A single decoded CIL instruction: one opcode plus its operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    opcode: OpCode,
    operand: Operand,
}

impl Instruction {
    /// Creates an instruction from an opcode and operand.
    #[must_use]
    pub fn new(opcode: OpCode, operand: Operand) -> Self {
        Instruction { opcode, operand }
    }

    /// The instruction's operation code.
    #[must_use]
    pub fn opcode(&self) -> OpCode {
        self.opcode
    }

    /// The instruction's operand.
    #[must_use]
    pub fn operand(&self) -> &Operand {
        &self.operand
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.operand {
            Operand::None => write!(f, "{}", self.opcode),
            Operand::Method(m) => write!(f, "{} {}::{}", self.opcode, m.declaring_type(), m.name()),
            Operand::String(s) => write!(f, "{} \"{}\"", self.opcode, s),
            Operand::Int32(i) => write!(f, "{} {}", self.opcode, i),
        }
    }
}

/// The instruction stream of a method body.
///
/// Absent bodies (abstract, external or unresolved methods) are represented
/// as `None` on the owning [`crate::metadata::MethodDef`], never as an empty
/// stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodBody {
    instructions: Vec<Instruction>,
}

impl MethodBody {
    /// Creates a body from a decoded instruction sequence.
    #[must_use]
    pub fn new(instructions: Vec<Instruction>) -> Self {
        MethodBody { instructions }
    }

    /// The body's instructions, in stream order.
    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }
}
