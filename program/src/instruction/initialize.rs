use pinocchio::{account_info::AccountInfo, pubkey::Pubkey, ProgramResult};
use pinocchio_log::log;

use crate::helpers::{encode_pubkey, MAX_ENCODED_PUBKEY_LEN};

pub fn process_initialize(program_id: &Pubkey, _accounts: &[AccountInfo]) -> ProgramResult {
    // no accounts are declared; anything passed is left untouched
    let mut buf = [0u8; MAX_ENCODED_PUBKEY_LEN];
    let id = encode_pubkey(program_id, &mut buf);
    log!("Greetings from: {}", id);
    Ok(())
}
