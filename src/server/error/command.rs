use thiserror::Error;

/// Failures of a slash command that are reported back to the invoking user.
///
/// The `Display` text of each variant is the exact chat reply. None of these leave
/// any state changed behind them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The invoking member lacks the Manage Server permission.
    #[error(":octagonal_sign: Nope! You can't use this command.")]
    PermissionDenied,

    /// A stop command arrived for a channel with no live timer of that kind.
    #[error("What are you trying to stop? There's nothing going on here.")]
    NothingActive,

    /// Interval is zero, negative or longer than a year.
    #[error("The interval has to be a positive number of seconds, at most one year.")]
    InvalidInterval(i64),

    /// GIF ping interval is below the hard floor.
    #[error("GIF pings need an interval of at least {minimum} seconds.")]
    IntervalTooSmall { minimum: i64, requested: i64 },

    /// Starting the GIF ping would push the global GIF rate above its ceiling.
    #[error(
        "That would go over the global limit of {ceiling} GIFs per hour \
         ({current} per hour are already scheduled). Try a longer interval."
    )]
    BudgetExceeded {
        ceiling: i64,
        current: i64,
        requested: i64,
    },

    /// The stored GIF total would go negative, so the bookkeeping is inconsistent.
    #[error("Something is off with the GIF budget bookkeeping, so I stopped. This has been logged.")]
    CorruptBudget { current: i64, delta: i64 },

    /// There is no non-bot member in the guild to pick from.
    #[error("There's nobody here I can ping.")]
    NoMembers,

    /// The command was used outside of a guild.
    #[error("This command only works inside a server.")]
    GuildOnly,

    /// A required command option was not supplied.
    #[error("Missing required option `{0}`.")]
    MissingOption(&'static str),

    #[error("I don't know that command.")]
    UnknownCommand(String),
}
