use color_eyre::eyre::Report;

/// Message GitHub returns when creating a ref whose name is taken.
pub const REFERENCE_EXISTS_MESSAGE: &str = "Reference already exists";

/// Returns true if any error in the report's chain is the forge's
/// "reference already exists" failure.
///
/// GitHub does not expose a structured code for this case, so the match is
/// on the literal error message.
pub fn is_reference_conflict(err: &Report) -> bool {
    err.chain().any(|cause| {
        if let Some(octocrab::Error::GitHub { source, .. }) =
            cause.downcast_ref::<octocrab::Error>()
        {
            return source.message == REFERENCE_EXISTS_MESSAGE;
        }

        cause.to_string() == REFERENCE_EXISTS_MESSAGE
    })
}
