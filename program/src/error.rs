use pinocchio::program_error::ProgramError;

/// Errors raised by the program itself. Codes reuse the reserved Anchor
/// framework codes so Anchor clients decode them unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscrowError {
    /// Instruction data was empty.
    InstructionMissing,
    /// No instruction matches the discriminator.
    InstructionFallbackNotFound,
    /// Invoked under an address other than the declared program id.
    DeclaredProgramIdMismatch,
}

impl EscrowError {
    pub const fn code(self) -> u32 {
        use crate::helpers::constant::*;
        match self {
            EscrowError::InstructionMissing => ERROR_INSTRUCTION_MISSING,
            EscrowError::InstructionFallbackNotFound => ERROR_INSTRUCTION_FALLBACK_NOT_FOUND,
            EscrowError::DeclaredProgramIdMismatch => ERROR_DECLARED_PROGRAM_ID_MISMATCH,
        }
    }
}

// map internal errors to standard program error
pub fn to_program_error(err: EscrowError) -> ProgramError {
    ProgramError::Custom(err.code())
}

impl From<EscrowError> for ProgramError {
    fn from(err: EscrowError) -> Self {
        to_program_error(err)
    }
}
