use clap::{Parser, Subcommand};

/// Command-line interface definition for rVisitCheck
/// CLI application to reconcile field visits against the establishments registry
#[derive(Parser)]
#[command(
    name = "rvisitcheck",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reconcile collectors' field visits with the establishments registry and report the establishments that were not visited",
    long_about = None
)]
pub struct Cli {
    /// Override the registry spreadsheet path
    #[arg(global = true, long = "registry", value_name = "FILE")]
    pub registry: Option<String>,

    /// Override the reports folder ({year} and {month} are expanded)
    #[arg(global = true, long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<String>,

    /// Override the audit database path
    #[arg(global = true, long = "audit-db", value_name = "FILE")]
    pub audit_db: Option<String>,

    /// Never query the external EIN lookup service
    #[arg(global = true, long = "no-lookup")]
    pub no_lookup: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the audit database
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "List configuration keys missing from the file")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing configuration keys with default values")]
        migrate: bool,

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

    /// Reconcile a visit session and write the non-visited report
    ///
    /// EINs can be given with --ein (repeatable), read from --file (one per
    /// line) or, when neither is used, typed interactively until a blank line.
    /// Scanned NFC-e QR code URLs are accepted wherever an EIN is.
    Analyze {
        /// Collector of the session (inferred from the registry when omitted)
        #[arg(long, short = 'c')]
        collector: Option<String>,

        /// Visit date, DD/MM/YYYY or YYYY-MM-DD (prompted when omitted)
        #[arg(long, short = 'd')]
        date: Option<String>,

        /// Visited EIN or QR code URL
        #[arg(long = "ein", short = 'e', value_name = "ID")]
        eins: Vec<String>,

        /// File with one visited EIN or QR code URL per line
        #[arg(long, short = 'f', value_name = "FILE")]
        file: Option<String>,

        /// Do not ask for confirmation of collector and date
        #[arg(long, short = 'y')]
        yes: bool,

        /// Reconcile and print without writing any spreadsheet
        #[arg(long = "dry-run")]
        dry_run: bool,
    },

    /// List registry establishments
    List {
        #[arg(long, short = 'c', help = "Only establishments of this collector")]
        collector: Option<String>,

        #[arg(
            long,
            conflicts_with = "date",
            help = "Only establishments expected on this weekday code (2=Mon … 8=Sun)"
        )]
        day: Option<String>,

        #[arg(long, short = 'd', help = "Only establishments expected on this date's weekday")]
        date: Option<String>,
    },

    /// Query the EIN lookup service without touching the registry
    Lookup {
        /// EIN or QR code URL
        id: String,
    },

    /// Create a backup copy of the registry spreadsheet
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite the destination without asking")]
        force: bool,
    },

    /// Print the audit log
    Log {
        #[arg(long = "print", help = "Print rows from the audit log")]
        print: bool,

        #[arg(long = "analyses", help = "Print one row per analysis run")]
        analyses: bool,
    },
}
