use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, ReadSdlFileError>;

/// Reads an SDL file as UTF-8 text.
pub(crate) fn read_sdl<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(ReadSdlFileError::PathIsNotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)
        .map_err(|err| ReadSdlFileError::FileReadError {
            file_path: file_path.to_path_buf(),
            err,
        })?;

    String::from_utf8(bytes)
        .map_err(|err| ReadSdlFileError::FileDecodeError {
            file_path: file_path.to_path_buf(),
            err,
        })
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum ReadSdlFileError {
    #[error("{file_path:?} is not valid UTF-8: {err}")]
    FileDecodeError {
        file_path: PathBuf,
        #[source]
        err: std::string::FromUtf8Error,
    },

    #[error("Unable to read {file_path:?}: {err}")]
    FileReadError {
        file_path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    #[error("{0:?} is not a file")]
    PathIsNotAFile(PathBuf),
}
