use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Render a filter tree stored as JSON into a parameterized statement
    Render {
        #[arg(long, help = "Path of the JSON filter tree")]
        tree: String,

        #[arg(
            long,
            help = "Read the tree in shorthand form (`op` tags such as gt, lt, and)"
        )]
        shorthand: bool,

        #[arg(long, help = "Print the statement and parameters as JSON")]
        json: bool,
    },
    /// Print statements built by a sample builder chain and a sample tree
    Demo {
        #[arg(long, help = "Print the statements and parameters as JSON")]
        json: bool,
    },
}
