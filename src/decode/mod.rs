pub mod error;

use std::str;

use num_traits::NumCast;

use crate::frame::Frame;

pub use error::DecodeError;

/// Types that can be built from a reply frame.
pub trait Decode: Sized {
    fn decode(frame: &Frame) -> Result<Self, DecodeError>;
}

/// Types whose reply has a documented "nothing here" shape that is not an error, e.g. the
/// XPENDING summary of a group without pending entries.
pub trait DecodeOptional: Sized {
    fn decode_optional(frame: &Frame) -> Result<Option<Self>, DecodeError>;
}

impl Decode for Frame {
    fn decode(frame: &Frame) -> Result<Self, DecodeError> {
        Ok(frame.clone())
    }
}

impl Decode for String {
    fn decode(frame: &Frame) -> Result<Self, DecodeError> {
        match frame {
            // Both `Simple` and `Bulk` representation may be strings. While errors are stored as
            // strings, they are considered separate types.
            Frame::Simple(s) => Ok(s.clone()),
            Frame::Bulk(bytes) => str::from_utf8(&bytes[..])
                .map(|s| s.to_string())
                .map_err(|_| DecodeError::type_mismatch::<String>(frame)),
            frame => Err(DecodeError::type_mismatch::<String>(frame)),
        }
    }
}

fn decode_integer<T: NumCast>(frame: &Frame) -> Result<T, DecodeError> {
    let mismatch = || DecodeError::type_mismatch::<T>(frame);

    let value = match frame {
        Frame::Integer(i) => *i,
        // Some replies carry counts as strings, e.g. the per-consumer counts of XPENDING.
        Frame::Simple(s) => s.parse::<i64>().map_err(|_| mismatch())?,
        Frame::Bulk(bytes) => str::from_utf8(&bytes[..])
            .ok()
            .and_then(|s| s.parse::<i64>().ok())
            .ok_or_else(mismatch)?,
        _ => return Err(mismatch()),
    };

    <T as NumCast>::from(value).ok_or_else(mismatch)
}

macro_rules! decode_integers {
    ($($ty:ty),*) => {
        $(
            impl Decode for $ty {
                fn decode(frame: &Frame) -> Result<Self, DecodeError> {
                    decode_integer::<$ty>(frame)
                }
            }
        )*
    };
}

decode_integers!(i64, u64, usize, u32);

impl<T: Decode> Decode for Vec<T> {
    fn decode(frame: &Frame) -> Result<Self, DecodeError> {
        decode_array(frame)?
            .iter()
            .enumerate()
            .map(|(i, item)| {
                T::decode(item).map_err(|e| DecodeError::element::<Vec<T>>(frame, i, e))
            })
            .collect()
    }
}

impl<T: Decode> Decode for Option<T> {
    fn decode(frame: &Frame) -> Result<Self, DecodeError> {
        match frame {
            Frame::Null => Ok(None),
            frame => T::decode(frame).map(Some),
        }
    }
}

/// Borrows the elements of an array frame.
pub fn decode_array(frame: &Frame) -> Result<&[Frame], DecodeError> {
    match frame {
        Frame::Array(items) => Ok(items),
        frame => Err(DecodeError::type_mismatch::<Vec<Frame>>(frame)),
    }
}

pub fn require_len(items: &[Frame], needed: usize) -> Result<(), DecodeError> {
    if items.len() < needed {
        return Err(DecodeError::ArrayOutOfBounds {
            needed,
            len: items.len(),
        });
    }
    Ok(())
}

/// Decodes the value of a keyed pair from a flat `[label, value, label, value, ...]` array.
///
/// The label must sit at `key_offset` and be exactly `expected_key`; the value is the element
/// right after it. Redis returns the XINFO family of replies in this shape.
pub fn decode_keyed<T: Decode>(
    items: &[Frame],
    key_offset: usize,
    expected_key: &str,
) -> Result<T, DecodeError> {
    let value_offset = key_offset + 1;
    require_len(items, value_offset + 1)?;

    let key = String::decode(&items[key_offset])?;
    if key != expected_key {
        return Err(DecodeError::KeyMismatch {
            expected: expected_key.to_string(),
            actual: key,
        });
    }

    T::decode(&items[value_offset])
}

/// Reads a status reply, `true` when the server answered `OK`.
pub fn decode_ok(frame: &Frame) -> Result<bool, DecodeError> {
    String::decode(frame).map(|status| status == "OK")
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;

    #[test]
    fn string_from_simple_and_bulk() {
        assert_eq!(
            String::decode(&Frame::Simple("OK".to_string())),
            Ok("OK".to_string())
        );
        assert_eq!(
            String::decode(&Frame::Bulk(Bytes::from("1622793600000-0"))),
            Ok("1622793600000-0".to_string())
        );
    }

    #[test]
    fn string_rejects_other_frames() {
        for frame in [
            Frame::Integer(1),
            Frame::Null,
            Frame::Error("ERR".to_string()),
            Frame::Array(vec![]),
            Frame::Bulk(Bytes::from_static(&[0xff, 0xfe])),
        ] {
            let err = String::decode(&frame).unwrap_err();
            match err {
                DecodeError::TypeMismatch { expected, actual } => {
                    assert!(expected.ends_with("String"), "{}", expected);
                    assert_eq!(actual, frame);
                }
                err => panic!("unexpected error {:?}", err),
            }
        }
    }

    #[test]
    fn integers_from_integer_and_numeric_strings() {
        assert_eq!(i64::decode(&Frame::Integer(-3)), Ok(-3));
        assert_eq!(u64::decode(&Frame::Bulk(Bytes::from("42"))), Ok(42));
        assert_eq!(usize::decode(&Frame::Simple("7".to_string())), Ok(7));
    }

    #[test]
    fn integers_reject_non_numeric_and_out_of_range() {
        assert!(matches!(
            i64::decode(&Frame::Bulk(Bytes::from("22.5"))),
            Err(DecodeError::TypeMismatch { expected, .. }) if expected.ends_with("i64")
        ));
        assert!(matches!(
            u64::decode(&Frame::Integer(-1)),
            Err(DecodeError::TypeMismatch { expected, .. }) if expected.ends_with("u64")
        ));
        assert!(matches!(
            i64::decode(&Frame::Null),
            Err(DecodeError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn sequence_keeps_order() {
        let frame = Frame::Array(vec![
            Frame::bulk("a"),
            Frame::Simple("b".to_string()),
            Frame::bulk("c"),
        ]);

        assert_eq!(
            Vec::<String>::decode(&frame),
            Ok(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
    }

    #[test]
    fn sequence_failure_names_the_element() {
        let frame = Frame::Array(vec![Frame::Integer(1), Frame::bulk("x"), Frame::Integer(3)]);

        let err = Vec::<i64>::decode(&frame).unwrap_err();

        match err {
            DecodeError::Composite {
                index, ref source, ..
            } => {
                assert_eq!(index, Some(1));
                assert!(matches!(**source, DecodeError::TypeMismatch { .. }));
            }
            err => panic!("unexpected error {:?}", err),
        }
    }

    #[test]
    fn sequence_requires_an_array() {
        assert!(matches!(
            Vec::<String>::decode(&Frame::Null),
            Err(DecodeError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn optional_maps_null_to_none() {
        assert_eq!(Option::<String>::decode(&Frame::Null), Ok(None));
        assert_eq!(
            Option::<String>::decode(&Frame::bulk("x")),
            Ok(Some("x".to_string()))
        );
    }

    #[test]
    fn keyed_value() {
        let items = vec![
            Frame::bulk("name"),
            Frame::bulk("workers"),
            Frame::bulk("consumers"),
            Frame::Integer(2),
        ];

        assert_eq!(
            decode_keyed::<String>(&items, 0, "name"),
            Ok("workers".to_string())
        );
        assert_eq!(decode_keyed::<u64>(&items, 2, "consumers"), Ok(2));
    }

    #[test]
    fn keyed_value_label_mismatch() {
        let items = vec![Frame::bulk("lenght"), Frame::Integer(2)];

        assert_eq!(
            decode_keyed::<u64>(&items, 0, "length"),
            Err(DecodeError::KeyMismatch {
                expected: "length".to_string(),
                actual: "lenght".to_string(),
            })
        );
    }

    #[test]
    fn keyed_value_missing_value() {
        let items = vec![Frame::bulk("length"), Frame::Integer(2), Frame::bulk("groups")];

        assert_eq!(
            decode_keyed::<u64>(&items, 2, "groups"),
            Err(DecodeError::ArrayOutOfBounds { needed: 4, len: 3 })
        );
    }

    #[test]
    fn ok_status() {
        assert_eq!(decode_ok(&Frame::Simple("OK".to_string())), Ok(true));
        assert_eq!(decode_ok(&Frame::Simple("QUEUED".to_string())), Ok(false));
        assert!(decode_ok(&Frame::Integer(1)).is_err());
    }
}
