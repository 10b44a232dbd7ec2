#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Reported,     // exit 0, hash or error line printed
    OutputFailed, // exit 1, stdout not writable
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Reported => 0,
            Self::OutputFailed => 1,
        }
    }
}

pub fn exit_code(outcome: Outcome) -> u8 {
    outcome.exit_code()
}
