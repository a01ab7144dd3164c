//! User-facing reply texts

pub const WELCOME: &str = "Welcome to Linkeeper! 📚✨\n\n\
I'm here to help you store and organize your bookmarks. \
Here are some basic instructions:\n\n\
• Use /add [URL] to save a new bookmark or just paste a link to add\n\
• Use /ls to see all your saved bookmarks\n\
• Use /se [tag] [keyword] to search for bookmarks\n\
• Use /rm [n] to delete the bookmark with id n\n\
• You can also reply to a bookmark message with /rm to delete it\n\n\
Happy bookmarking!";

pub const NO_URL: &str = "No URL provided. e.g to add google.com, type /add google.com.";
pub const ADDED: &str = "Bookmark added.";
pub const UPDATED: &str = "Bookmark already exists and updated.";
pub const ADD_FAILED: &str = "Sorry, there was an error adding your bookmark.";

pub const NO_SEARCH_TERM: &str = "Please provide URL or tags to search.";
pub const NO_MATCHES: &str = "No matching bookmarks.";
pub const SEARCH_FAILED: &str = "Sorry, there was an error searching your bookmarks.";

pub const NO_BOOKMARKS: &str = "You have no bookmarks saved.";
pub const LIST_FAILED: &str = "Sorry, there was an error listing your bookmarks.";

pub const NO_ID: &str =
    "No ID provided. e.g use /ls to list bookmarks, take note of the ID, type /rm [ID] to remove.";
pub const REMOVE_FAILED: &str = "Sorry, there was an error removing your bookmark.";

pub fn removed(id: i64) -> String {
    format!("Bookmark with ID {} removed.", id)
}

pub fn invalid_id(arg: &str) -> String {
    format!("'{}' is not a valid bookmark ID.", arg)
}
