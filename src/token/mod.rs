mod claims;
mod decode;

pub use claims::ClaimSet;
pub use decode::decode;

pub(crate) use claims::Payload;
