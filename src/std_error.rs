use crate::error::{ErrKind, Error};


/// Allow for io::Errors to be used seamlessly with atomese::Errors.
///
/// Any io failure surfaced here happened while writing rendered text out.
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::new(ErrKind::WriteFailed(err))
    }
}
