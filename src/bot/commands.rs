//! Command parsing and dispatch
//!
//! Turns the text of an incoming chat message into a `Command` and runs it
//! against the bookmark service, producing the replies to send back.

use crate::bot::reply::parse_reply_id;
use crate::extract::find_url;
use crate::service::{messages, BookmarkService};
use crate::storage::BookmarkStore;
use crate::title::TitleFetcher;

/// A parsed chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/start`
    Start,
    /// `/add <text>`
    Add(String),
    /// `/ls`
    List,
    /// `/se <text>`
    Search(String),
    /// `/rm <id...>`
    Remove(Vec<String>),
    /// Any message that is not a command
    Text(String),
    /// A command this bot does not know
    Unknown(String),
}

/// Parses message text into a command
///
/// Command names may carry a `@botname` suffix as Telegram adds in groups.
/// Arguments are re-joined with single spaces.
pub fn parse_command(text: &str) -> Command {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix('/') else {
        return Command::Text(text.to_string());
    };

    let mut words = rest.split_whitespace();
    let name = words.next().unwrap_or("");
    let name = name.split('@').next().unwrap_or(name);
    let args: Vec<String> = words.map(str::to_string).collect();

    match name {
        "start" => Command::Start,
        "add" => Command::Add(args.join(" ")),
        "ls" => Command::List,
        "se" => Command::Search(args.join(" ")),
        "rm" => Command::Remove(args),
        other => Command::Unknown(other.to_string()),
    }
}

/// Runs commands against a bookmark service
pub struct Dispatcher<S, F> {
    service: BookmarkService<S, F>,
}

impl<S, F> Dispatcher<S, F>
where
    S: BookmarkStore,
    F: TitleFetcher,
{
    pub fn new(service: BookmarkService<S, F>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &BookmarkService<S, F> {
        &self.service
    }

    /// Handles one incoming message
    ///
    /// `reply_to` is the text of the message being replied to, if any. Each
    /// returned string is sent as its own chat message; an empty result means
    /// the bot stays silent.
    pub async fn handle(&self, text: &str, reply_to: Option<&str>) -> Vec<String> {
        let command = parse_command(text);
        tracing::debug!("Received command: {:?}", command);
        self.dispatch(command, reply_to).await
    }

    /// Runs an already parsed command
    pub async fn dispatch(&self, command: Command, reply_to: Option<&str>) -> Vec<String> {
        match command {
            Command::Start => vec![messages::WELCOME.to_string()],
            Command::Add(text) => vec![self.service.submit(&text).await],
            Command::List => self.service.list_all(),
            Command::Search(text) => self.service.search(&text),
            Command::Remove(args) => self.remove(&args, reply_to),
            Command::Text(text) => {
                if find_url(&text).is_some() {
                    vec![self.service.submit(&text).await]
                } else {
                    Vec::new()
                }
            }
            Command::Unknown(name) => {
                tracing::debug!("Ignoring unknown command /{}", name);
                Vec::new()
            }
        }
    }

    fn remove(&self, args: &[String], reply_to: Option<&str>) -> Vec<String> {
        if let Some(id) = reply_to.and_then(parse_reply_id) {
            tracing::info!("Matched ID {} in replied-to message", id);
            return vec![self.service.remove(id)];
        }

        if args.is_empty() {
            return vec![messages::NO_ID.to_string()];
        }

        args.iter()
            .map(|arg| match arg.parse::<i64>() {
                Ok(id) => self.service.remove(id),
                Err(_) => messages::invalid_id(arg),
            })
            .collect()
    }
}
