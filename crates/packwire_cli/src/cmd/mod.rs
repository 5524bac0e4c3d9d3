/// MessagePack to JSON command.
pub mod decode;
/// JSON to MessagePack command.
pub mod encode;
/// Tag listing command.
pub mod inspect;
/// Input/output plumbing shared by commands.
pub mod io;

#[cfg(test)]
pub(crate) mod test_support;
