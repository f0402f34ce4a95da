use crate::sdl_codec::SdlParseError;
use crate::sdl_codec::SdlPrintError;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SyntaxTreeError {
    #[error(transparent)]
    Parse(#[from] SdlParseError),

    #[error(transparent)]
    Print(#[from] SdlPrintError),
}
