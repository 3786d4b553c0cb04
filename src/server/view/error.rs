/// Body of every 500 response. Error detail is only logged server side.
pub const GENERIC_ERROR_PAGE: &str = "<html>An error occurred.</html>";

/// Body of the 504 response sent while a new mailbox is still syncing.
pub const MAILBOX_SYNCING_PAGE: &str =
    "<html>Your mailbox is still syncing, please reload this page in a little while.</html>";
