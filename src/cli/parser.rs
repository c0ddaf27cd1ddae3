use clap::{Parser, Subcommand};

/// Command-line interface definition for rollcall
/// Staff attendance client: open hours, rosters, substitute classes
#[derive(Parser)]
#[command(
    name = "rollcall",
    version = env!("CARGO_PKG_VERSION"),
    about = "Take class attendance from the terminal: see the hours open right now, mark students and submit",
    long_about = None
)]
pub struct Cli {
    /// Override session database path (useful for tests or multiple profiles)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the backend base URL (e.g. http://localhost/sxc)
    #[arg(global = true, long = "backend")]
    pub backend: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the session database
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Log in with your staff ID
    Login {
        /// Staff ID
        staff_id: String,

        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Forget the logged-in staff ID
    Logout,

    /// List today's hours that are open for attendance
    Home {
        /// Show every hour of the day with its window state
        #[arg(long)]
        all: bool,
    },

    /// Take attendance for one of today's hours
    Take {
        /// Timetable id of the hour (see `rollcall home`)
        timetable_id: i64,

        #[command(flatten)]
        marks: MarkArgs,
    },

    /// Show the attendance waiting to be submitted
    Confirm,

    /// Submit the attendance shown by `confirm`
    Submit,

    /// Show the absentees of the last submitted hour
    Absent {
        /// Fetch the absentees of this timetable id from the backend
        #[arg(long = "timetable")]
        timetable_id: Option<i64>,

        /// Subject label shown with fetched absentees
        #[arg(long, requires = "timetable_id")]
        subject: Option<String>,
    },

    /// List classes you can cover today, or take attendance for one
    Substitute {
        /// Timetable id of the subject to take attendance for
        #[arg(long = "select")]
        select: Option<i64>,

        #[command(flatten)]
        marks: MarkArgs,
    },

    /// Print the internal log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

/// How the roster is marked before it is saved for confirmation.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct MarkArgs {
    /// Roll numbers to mark absent, comma separated (everyone else is present)
    #[arg(long, value_delimiter = ',')]
    pub absent: Vec<String>,

    /// Ask P/A for every student
    #[arg(long, short = 'i', conflicts_with = "absent")]
    pub interactive: bool,
}
