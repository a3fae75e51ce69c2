#![allow(dead_code)]

use solana_program_test::ProgramTest;
use std::{env, path::PathBuf};

pub use solana_program_test::ProgramTestContext;
pub use solana_sdk::{
    instruction::{AccountMeta, Instruction, InstructionError},
    pubkey::Pubkey,
    signature::{Signature, Signer},
    transaction::{Transaction, TransactionError},
};


pub fn program_id() -> Pubkey {
    Pubkey::new_from_array(simple_escrow::ID)
}

/// Directory holding `simple_escrow.so`; `SIMPLE_ESCROW_DEPLOY_DIR` overrides
/// the crate's own `target/deploy`.
pub fn deploy_dir() -> PathBuf {
    env::var_os("SIMPLE_ESCROW_DEPLOY_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("target/deploy"))
}

pub fn program_test() -> ProgramTest {
    let deploy_dir = deploy_dir();
    env::set_var("BPF_OUT_DIR", &deploy_dir);
    let so_path = deploy_dir.join("simple_escrow.so");
    assert!(
        so_path.exists(),
        "SBF artifact not found at {}.\nBuild first: `cargo-build-sbf --no-default-features --features sbf --manifest-path program/Cargo.toml`",
        so_path.display()
    );

    let mut pt = ProgramTest::default();
    pt.prefer_bpf(true);
    pt.add_upgradeable_program_to_genesis("simple_escrow", &program_id());
    pt
}

/// Outcome of a submitted transaction.
pub struct Sent {
    pub signature: Signature,
    pub result: Result<(), TransactionError>,
    pub logs: Vec<String>,
}

/// Sign `ixs` with the context payer and submit, keeping logs.
pub async fn send(ctx: &mut ProgramTestContext, ixs: &[Instruction]) -> Sent {
    let tx = Transaction::new_signed_with_payer(
        ixs,
        Some(&ctx.payer.pubkey()),
        &[&ctx.payer],
        ctx.last_blockhash,
    );
    let signature = tx.signatures[0];
    let res = ctx
        .banks_client
        .process_transaction_with_metadata(tx)
        .await
        .unwrap();
    let logs = res.metadata.map(|m| m.log_messages).unwrap_or_default();
    Sent { signature, result: res.result, logs }
}

pub fn greeting() -> String {
    format!("Program log: Greetings from: {}", program_id())
}
