use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Generate TypeScript declarations for the configured database
    Generate {
        #[arg(long, help = "Config file path")]
        config: String,

        #[arg(
            long,
            help = "Output file; falls back to the config's output, then stdout"
        )]
        output: Option<String>,
    },
    /// List the tables that would be generated, as JSON
    Tables {
        #[arg(long, help = "Config file path")]
        config: String,
    },
    /// Test a connection string against a given dialect
    TestConn {
        /// Dialect: "mysql", "postgres", ...
        #[arg(long)]
        dialect: String,

        /// Connection string
        #[arg(long)]
        conn_str: String,
    },
}
