/// Stable, machine-readable code attached to an error.
///
/// Codes are dotted `Area.Reason` strings (`User.InvalidCredentials`,
/// `Token.Expired`). They are part of the public contract of every error that
/// crosses a layer boundary; the `Display` text is the human message.
pub trait ErrorCode {
    fn code(&self) -> &'static str;
}
