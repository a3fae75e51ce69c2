/// Length of an Anchor instruction selector.
pub const ANCHOR_DISCRIMINATOR_LEN: usize = 8;

/// `sha256("global:initialize")[..8]`
pub const INITIALIZE_DISCRIMINATOR: [u8; ANCHOR_DISCRIMINATOR_LEN] =
    [175, 175, 109, 31, 13, 152, 155, 237];

// Reserved Anchor framework error codes.
pub const ERROR_INSTRUCTION_MISSING: u32 = 100;
pub const ERROR_INSTRUCTION_FALLBACK_NOT_FOUND: u32 = 101;
pub const ERROR_DECLARED_PROGRAM_ID_MISMATCH: u32 = 4100;
