//! Built-in validation rules.

mod accession;
mod characters;
mod roundtrip;
mod unrecognized;

pub use accession::AccessionMatchRule;
pub use characters::{is_standard_char, NonStandardCharsRule, NON_STANDARD_CHAR_MESSAGE};
pub use roundtrip::{first_difference, normalize_line_endings, SerializationRule, ROUNDTRIP_MESSAGE};
pub use unrecognized::{UnrecognizedFieldRule, KNOWN_FIELDS};
