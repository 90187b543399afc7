use thiserror::Error;

pub type TmResult<T> = Result<T, TmError>;

#[derive(Error, Debug)]
pub enum TmError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Index out of bounds for {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },
}
