use super::*;

use crate::render::atom_to_str;


#[test]
fn reify_invalid_name() {
    let err = Atom::sym("has space").unwrap_err();
    assert_eq!(err.kind_name(), "InvalidName");
    assert_eq!(
        atom_to_str(&err.reify()),
        "(Error InvalidName \"has space\")"
    );
}

#[test]
fn reify_counts() {
    let err = Error::new(ResourceExhausted {
        depth: 12,
        limit: 10,
    });
    assert_eq!(atom_to_str(&err.reify()), "(Error ResourceExhausted 12 10)");

    let err = Error::new(InvalidArgument {
        position: 2,
        reason: "bad".to_string(),
    });
    assert_eq!(atom_to_str(&err.reify()), "(Error InvalidArgument 2 \"bad\")");
}

#[test]
fn from_sink_error() {
    let err = Error::from(SinkError::Overflow { capacity: 16 });
    assert!(matches!(err.kind(), SinkOverflow { capacity: 16 }));

    let err = Error::from(SinkError::Fmt);
    assert!(matches!(err.kind(), WriteFailed(_)));
}

#[test]
fn from_io_error() {
    let err = Error::from(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
    assert!(matches!(err.consume(), WriteFailed(e) if e.kind() == io::ErrorKind::BrokenPipe));
}

#[test]
fn source() {
    use std::error::Error as _;

    let err = Error::from(io::Error::new(io::ErrorKind::Other, "gone"));
    assert!(err.source().is_some());
    assert!(Error::from(NameError::Empty).source().is_none());
}

#[test]
fn display() {
    let err = Error::from(NameError::Empty);
    assert_eq!(err.to_string(), "[Atom Error] Invalid name: empty name");
}

#[test]
fn equality_by_reification() {
    assert_eq!(
        Error::from(NameError::Empty),
        Error::from(NameError::Empty)
    );
    assert_ne!(
        Error::from(NameError::Empty),
        Error::new(SinkOverflow { capacity: 0 })
    );
}
