//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing. One
//! subcommand per console page; list views share the
//! search/filter/page options through [`ListArgs`].

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::domain::PaymentMethod;

/// Dusangire Lunch admin console
#[derive(Parser, Debug)]
#[command(name = "dusangire-admin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and persist the session
    Login(LoginArgs),

    /// Drop the persisted session
    Logout,

    /// Program totals at a glance
    Dashboard,

    /// Incoming fund transfers
    Transfers(TransfersArgs),

    /// Beneficiary schools
    Schools(SchoolsArgs),

    /// Outgoing fund distributions
    Distributions(DistributionsArgs),

    /// Individual contributions
    Contributions(ContributionsArgs),

    /// Administrator accounts
    Users(UsersArgs),

    /// Records awaiting deletion approval
    Review,

    /// Records whose deletion was confirmed
    Trash,

    /// Report generation and download
    Reports(ReportsArgs),
}

/// Arguments for the login command
#[derive(Parser, Debug)]
pub struct LoginArgs {
    /// Staff username
    #[arg(short, long)]
    pub username: Option<String>,

    /// Staff password
    #[arg(short, long, env = "DUSANGIRE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Refresh the access token of the current session instead of
    /// logging in again
    #[arg(long, conflicts_with_all = ["username", "password"])]
    pub refresh: bool,
}

/// Search/filter/page options shared by every list view
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Free-text search term
    #[arg(short, long)]
    pub search: Option<String>,

    /// Exact-match filter (repeatable)
    #[arg(short, long, value_name = "FIELD=VALUE")]
    pub filter: Vec<String>,

    /// Page number, 1-based
    #[arg(short, long, default_value_t = 1)]
    pub page: u64,
}

/// Arguments for the transfers command
#[derive(Parser, Debug)]
pub struct TransfersArgs {
    #[command(subcommand)]
    pub action: TransfersAction,
}

/// Transfer actions
#[derive(Subcommand, Debug)]
pub enum TransfersAction {
    /// List transfers
    List(ListArgs),

    /// Record a new transfer
    Create(TransferCreateArgs),

    /// Upload a spreadsheet of transfers
    Upload {
        /// Path to the spreadsheet file
        file: PathBuf,
    },

    /// Mark a transfer for deletion
    Delete {
        id: i64,
        /// Why the record should go
        #[arg(short, long)]
        reason: String,
    },

    /// Recover a transfer marked for deletion
    Recover { id: i64 },

    /// Permanently delete a transfer
    Confirm { id: i64 },
}

/// Arguments for recording a transfer
#[derive(Parser, Debug)]
pub struct TransferCreateArgs {
    /// Code of the school the transfer references
    #[arg(long)]
    pub school_code: String,

    /// Donor the transfer is attributed to
    #[arg(long)]
    pub donor: String,

    /// Amount in RWF; blank counts as zero
    #[arg(long, default_value = "")]
    pub amount: String,

    /// Contribution type label
    #[arg(long)]
    pub contribution_type: Option<String>,

    /// Account the funds arrived on
    #[arg(long)]
    pub account_number: Option<String>,

    /// Number of transactions batched into this transfer; blank counts
    /// as zero
    #[arg(long, default_value = "")]
    pub transactions: String,

    /// Earmark for a specific school id (repeatable)
    #[arg(long = "school-id")]
    pub school_ids: Vec<i64>,
}

/// Arguments for the schools command
#[derive(Parser, Debug)]
pub struct SchoolsArgs {
    #[command(subcommand)]
    pub action: SchoolsAction,
}

/// School actions
#[derive(Subcommand, Debug)]
pub enum SchoolsAction {
    /// List schools
    List(ListArgs),

    /// Register a new school
    Create {
        /// School name
        #[arg(long)]
        name: String,

        /// District; defaults to "Unknown"
        #[arg(long)]
        district: Option<String>,

        /// Sector; defaults to "Unknown"
        #[arg(long)]
        sector: Option<String>,
    },

    /// Mark a school for deletion
    Delete {
        id: i64,
        /// Why the record should go
        #[arg(short, long)]
        reason: String,
    },

    /// Recover a school marked for deletion
    Recover { id: i64 },

    /// Permanently delete a school
    Confirm { id: i64 },
}

/// Arguments for the distributions command
#[derive(Parser, Debug)]
pub struct DistributionsArgs {
    #[command(subcommand)]
    pub action: DistributionsAction,
}

/// Distribution actions
#[derive(Subcommand, Debug)]
pub enum DistributionsAction {
    /// List distributions
    List(ListArgs),

    /// Allocate funds to a school
    New {
        /// Receiving school id
        #[arg(long)]
        school: i64,

        /// Amount in RWF; blank counts as zero
        #[arg(long, default_value = "")]
        amount: String,
    },

    /// Mark a distribution for deletion
    Delete {
        id: i64,
        /// Why the record should go
        #[arg(short, long)]
        reason: String,
    },

    /// Recover a distribution marked for deletion
    Recover { id: i64 },

    /// Permanently delete a distribution
    Confirm { id: i64 },
}

/// Arguments for the contributions command
#[derive(Parser, Debug)]
pub struct ContributionsArgs {
    #[command(subcommand)]
    pub action: ContributionsAction,
}

/// Contribution actions
#[derive(Subcommand, Debug)]
pub enum ContributionsAction {
    /// List contributions
    List(ListArgs),

    /// Record a contribution
    Add(ContributionAddArgs),

    /// Drive the backend's payment sandbox
    Simulate(ContributionAddArgs),
}

/// Arguments for recording or simulating a contribution
#[derive(Parser, Debug)]
pub struct ContributionAddArgs {
    /// Contributor name; blank renders as "Anonymous"
    #[arg(long, default_value = "")]
    pub name: String,

    /// Amount in RWF; blank counts as zero
    #[arg(long, default_value = "")]
    pub amount: String,

    /// Payment channel
    #[arg(long, value_enum)]
    pub method: PaymentMethod,
}

/// Arguments for the users command
#[derive(Parser, Debug)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub action: UsersAction,
}

/// Admin account actions
#[derive(Subcommand, Debug)]
pub enum UsersAction {
    /// List administrator accounts
    List(ListArgs),
}

/// Arguments for the reports command
#[derive(Parser, Debug)]
pub struct ReportsArgs {
    #[command(subcommand)]
    pub action: ReportsAction,
}

/// Report actions
#[derive(Subcommand, Debug)]
pub enum ReportsAction {
    /// List previously generated reports
    List,

    /// Generate a report server-side and save the file
    Generate {
        /// Report name
        #[arg(long)]
        name: String,

        /// Range start (YYYY-MM-DD)
        #[arg(long)]
        start_date: NaiveDate,

        /// Range end (YYYY-MM-DD)
        #[arg(long)]
        end_date: NaiveDate,

        /// Where to save the file; defaults to the report name
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Download an existing report file
    Download {
        id: i64,

        /// Where to save the file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Per-school transaction summary
    Summary {
        /// Range start (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// Range end (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<NaiveDate>,
    },
}
