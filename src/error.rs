use thiserror::Error;

/// Failure kinds produced while decoding a save image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The image length matches none of the known generations.
    #[error("unsupported save image: {length} bytes does not match any known generation")]
    UnsupportedFormat { length: usize },

    /// A read reached past the end of the image. Once a generation has been
    /// detected this can only come from a defective offset table.
    #[error("read of {width} bytes at 0x{offset:x} is outside of a {length} byte image")]
    OutOfRange {
        offset: usize,
        width: usize,
        length: usize,
    },

    /// Reserved for strict validation of structurally impossible values.
    #[error("field {field} holds an impossible value {value}")]
    MalformedField { field: &'static str, value: u32 },
}
