use pinocchio::{account_info::AccountInfo, msg, pubkey::Pubkey, ProgramResult};

use crate::{
    error::EscrowError,
    instruction::{self, EscrowInstruction},
};

#[inline(always)]
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    if *program_id != crate::ID {
        return Err(EscrowError::DeclaredProgramIdMismatch.into());
    }

    match EscrowInstruction::unpack(instruction_data)? {
        EscrowInstruction::Initialize => {
            msg!("Instruction: Initialize");
            instruction::initialize::process_initialize(program_id, accounts)
        }
    }
}
