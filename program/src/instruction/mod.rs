use pinocchio::program_error::ProgramError;
use shank::ShankInstruction;

use crate::{error::EscrowError, helpers::*};

pub mod initialize;

pub use initialize::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, ShankInstruction)]
pub enum EscrowInstruction {
    /// Logs a greeting naming the program id. Takes no accounts and no arguments.
    Initialize,
}

impl EscrowInstruction {
    /// Anchor sighash selector for this instruction.
    pub const fn discriminator(&self) -> [u8; ANCHOR_DISCRIMINATOR_LEN] {
        match self {
            EscrowInstruction::Initialize => INITIALIZE_DISCRIMINATOR,
        }
    }

    /// Decode instruction data sent either by an Anchor client (8-byte
    /// sighash, trailing argument bytes ignored) or as a bare single-byte
    /// discriminator with no payload.
    pub fn unpack(data: &[u8]) -> Result<Self, ProgramError> {
        if data.is_empty() {
            return Err(EscrowError::InstructionMissing.into());
        }

        if let Some(selector) = data.get(..ANCHOR_DISCRIMINATOR_LEN) {
            if selector == INITIALIZE_DISCRIMINATOR {
                return Ok(EscrowInstruction::Initialize);
            }
        }

        let (disc, payload) = data
            .split_first()
            .ok_or(ProgramError::InvalidInstructionData)?;
        let ix = EscrowInstruction::try_from(disc)?;
        if !payload.is_empty() {
            return Err(ProgramError::InvalidInstructionData);
        }
        Ok(ix)
    }
}

impl TryFrom<&u8> for EscrowInstruction {
    type Error = ProgramError;

    fn try_from(value: &u8) -> Result<Self, Self::Error> {
        match *value {
            0 => Ok(EscrowInstruction::Initialize),
            _ => Err(EscrowError::InstructionFallbackNotFound.into()),
        }
    }
}
