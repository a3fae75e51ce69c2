use crate::processor::process_instruction;

// Entrypoint macro
pinocchio::program_entrypoint!(process_instruction);
