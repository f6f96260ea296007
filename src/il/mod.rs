//! Instruction stream model for CIL method bodies.
//!
//! The reachability scanner never inspects raw bytecode; it consumes the
//! minimal decoded form defined here, a sequence of (opcode, operand) pairs
//! per method body. Call and construction operands stay symbolic
//! ([`crate::metadata::MethodRef`]) and resolve to definitions through the
//! owning assembly's method table.
//!
//! # Key Types
//! - [`OpCode`] - The reduced CIL opcode set
//! - [`Operand`] - Instruction operands (method references, literals)
//! - [`Instruction`] - A single decoded instruction
//! - [`MethodBody`] - The instruction stream of one method

mod instruction;
mod opcode;

pub use instruction::{Instruction, MethodBody, Operand};
pub use opcode::OpCode;
